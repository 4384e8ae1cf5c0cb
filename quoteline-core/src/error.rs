use thiserror::Error;

/// Unified error type for the quoteline workspace.
///
/// Connectors report provider-tagged failures (`Connector`, `NotFound`, `Data`);
/// the service wraps every one of those into `UpstreamFetch` so that callers only
/// ever see the three request-level kinds: `InvalidPeriod`, `NoDataFound` and
/// `UpstreamFetch`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QuotelineError {
    /// The period code is not one of the recognized chart periods.
    #[error("invalid period: {code}")]
    InvalidPeriod {
        /// The rejected code, verbatim.
        code: String,
    },

    /// The provider answered but returned no samples.
    #[error("no data found for symbol {symbol}")]
    NoDataFound {
        /// Symbol that yielded an empty series.
        symbol: String,
    },

    /// Any failure while contacting or parsing the upstream provider.
    #[error("upstream fetch failed for {symbol}: {msg}")]
    UpstreamFetch {
        /// Symbol the request was made for.
        symbol: String,
        /// Underlying error text.
        msg: String,
    },

    /// The connector does not implement the requested capability.
    #[error("unsupported capability: {capability}")]
    Unsupported {
        /// A capability string describing what was requested (e.g. "history").
        capability: &'static str,
    },

    /// An individual connector returned an error.
    #[error("{connector} failed: {msg}")]
    Connector {
        /// Connector name that failed.
        connector: String,
        /// Human-readable error message.
        msg: String,
    },

    /// A resource or symbol could not be found by the provider.
    #[error("not found: {what}")]
    NotFound {
        /// Description of missing resource, e.g. "quote for AAPL".
        what: String,
    },

    /// Issues with the returned or expected data (missing fields, etc.).
    #[error("data issue: {0}")]
    Data(String),

    /// Invalid input argument.
    #[error("invalid argument: {0}")]
    InvalidArg(String),
}

impl QuotelineError {
    /// Helper: build an `InvalidPeriod` error for a rejected code.
    pub fn invalid_period(code: impl Into<String>) -> Self {
        Self::InvalidPeriod { code: code.into() }
    }

    /// Helper: build a `NoDataFound` error for a symbol.
    pub fn no_data(symbol: impl Into<String>) -> Self {
        Self::NoDataFound {
            symbol: symbol.into(),
        }
    }

    /// Helper: wrap any provider failure into `UpstreamFetch`.
    ///
    /// An error that is already `UpstreamFetch` keeps its original message.
    pub fn upstream(symbol: impl Into<String>, source: &Self) -> Self {
        let msg = match source {
            Self::UpstreamFetch { msg, .. } => msg.clone(),
            other => other.to_string(),
        };
        Self::UpstreamFetch {
            symbol: symbol.into(),
            msg,
        }
    }

    /// Helper: build an `Unsupported` error for a capability string.
    #[must_use]
    pub const fn unsupported(cap: &'static str) -> Self {
        Self::Unsupported { capability: cap }
    }

    /// Helper: build a `Connector` error with the connector name and message.
    pub fn connector(connector: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Connector {
            connector: connector.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build a `NotFound` error for a description of the missing resource.
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound { what: what.into() }
    }

    /// The underlying message without the variant prefix, as shown to HTTP clients.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::UpstreamFetch { msg, .. } => msg.clone(),
            other => other.to_string(),
        }
    }
}
