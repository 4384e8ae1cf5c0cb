#[cfg(feature = "test-adapters")]
use std::sync::Arc;

use async_trait::async_trait;

use quoteline_core::QuotelineError;
use yf::core::HistoryService;
use yfinance_rs as yf;

/// History abstraction (so we can inject mocks in tests).
#[async_trait]
pub trait YfHistory: Send + Sync {
    /// Fetch full history for a symbol using a provider-specific request.
    async fn fetch_full(
        &self,
        symbol: &str,
        req: yf::core::services::HistoryRequest,
    ) -> Result<yf::HistoryResponse, QuotelineError>;
}

/// Quotes abstraction (so we can inject mocks in tests).
#[async_trait]
pub trait YfQuotes: Send + Sync {
    /// Fetch quotes for a batch of symbols.
    async fn fetch(&self, symbols: &[String]) -> Result<Vec<yf::core::Quote>, QuotelineError>;
}

/// Real adapter backed by a single `YfClient` instance.
/// `YfClient` is `Clone + Send + Sync`, so no external locking is needed.
#[derive(Clone)]
pub struct RealAdapter {
    client: yf::YfClient,
}

const CONNECTOR: &str = "quoteline-yfinance";

pub(crate) const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/122.0.0.0 Safari/537.36";

impl RealAdapter {
    /// Build a default `YfClient` with a recommended user agent.
    ///
    /// # Panics
    /// Panics if building the underlying `YfClient` fails, which is unexpected
    /// in normal environments (invalid user agent configuration).
    #[must_use]
    pub fn new_default() -> Self {
        let http = reqwest::Client::builder()
            .cookie_store(true)
            .no_proxy()
            .build()
            .expect("Failed to build reqwest client for YfClient");
        Self {
            client: yf::YfClient::builder()
                .custom_client(http)
                .user_agent(USER_AGENT)
                .build()
                .expect("Failed to build YfClient with user agent"),
        }
    }

    /// Wrap an existing `YfClient`.
    #[must_use]
    pub const fn new(client: yf::YfClient) -> Self {
        Self { client }
    }
}

fn map_yf_err(e: &yf::YfError, context: &str) -> QuotelineError {
    let msg = match e {
        yf::YfError::NotFound { .. } => return QuotelineError::not_found(context),
        yf::YfError::RateLimited { .. } => format!("rate limit: {context}"),
        yf::YfError::ServerError { status, .. } => format!("server error {status}: {context}"),
        yf::YfError::Status { status, .. } => format!("status {status}: {context}"),
        other => format!("{other} ({context})"),
    };
    QuotelineError::connector(CONNECTOR, msg)
}

/// Error context for a quote batch, e.g. `quote for AAPL` or `quote for AAPL,MSFT`.
fn quote_context(symbols: &[String]) -> String {
    format!("quote for {}", symbols.join(","))
}

#[async_trait]
impl YfHistory for RealAdapter {
    async fn fetch_full(
        &self,
        symbol: &str,
        req: yf::core::services::HistoryRequest,
    ) -> Result<yf::HistoryResponse, QuotelineError> {
        // `YfClient` implements `HistoryService`, which we use directly.
        self.client
            .fetch_full_history(symbol, req)
            .await
            .map_err(|e| map_yf_err(&e, &format!("history for {symbol}")))
    }
}

#[async_trait]
impl YfQuotes for RealAdapter {
    async fn fetch(&self, symbols: &[String]) -> Result<Vec<yf::core::Quote>, QuotelineError> {
        yf::quote::quotes(&self.client, symbols.iter().cloned())
            .await
            .map_err(|e| map_yf_err(&e, &quote_context(symbols)))
    }
}

#[cfg(feature = "test-adapters")]
impl dyn YfHistory {
    /// Build a `YfHistory` from a closure (tests only).
    pub fn from_fn<F>(f: F) -> Arc<dyn YfHistory>
    where
        F: Send
            + Sync
            + 'static
            + Fn(
                String,
                yf::core::services::HistoryRequest,
            ) -> Result<yf::HistoryResponse, QuotelineError>,
    {
        struct FnHist<F>(F);
        #[async_trait]
        impl<F> YfHistory for FnHist<F>
        where
            F: Send
                + Sync
                + 'static
                + Fn(
                    String,
                    yf::core::services::HistoryRequest,
                ) -> Result<yf::HistoryResponse, QuotelineError>,
        {
            async fn fetch_full(
                &self,
                symbol: &str,
                req: yf::core::services::HistoryRequest,
            ) -> Result<yf::HistoryResponse, QuotelineError> {
                (self.0)(symbol.to_string(), req)
            }
        }
        Arc::new(FnHist(f))
    }
}

#[cfg(feature = "test-adapters")]
impl dyn YfQuotes {
    /// Build a `YfQuotes` from a closure (tests only).
    pub fn from_fn<F>(f: F) -> Arc<dyn YfQuotes>
    where
        F: Send
            + Sync
            + 'static
            + Fn(Vec<String>) -> Result<Vec<yf::core::Quote>, QuotelineError>,
    {
        struct FnQuotes<F>(F);
        #[async_trait]
        impl<F> YfQuotes for FnQuotes<F>
        where
            F: Send
                + Sync
                + 'static
                + Fn(Vec<String>) -> Result<Vec<yf::core::Quote>, QuotelineError>,
        {
            async fn fetch(
                &self,
                symbols: &[String],
            ) -> Result<Vec<yf::core::Quote>, QuotelineError> {
                (self.0)(symbols.to_vec())
            }
        }
        Arc::new(FnQuotes(f))
    }
}

/// Helper trait to split a concrete adapter into arc trait objects.
#[cfg(feature = "test-adapters")]
pub trait CloneArcAdapters {
    /// Clone as `Arc<dyn YfHistory>`.
    fn clone_arc_history(&self) -> Arc<dyn YfHistory> {
        <dyn YfHistory>::from_fn(|_, _| Err(QuotelineError::unsupported("history")))
    }
    /// Clone as `Arc<dyn YfQuotes>`.
    fn clone_arc_quotes(&self) -> Arc<dyn YfQuotes> {
        <dyn YfQuotes>::from_fn(|_| Err(QuotelineError::unsupported("quote")))
    }
}

#[cfg(feature = "test-adapters")]
impl CloneArcAdapters for RealAdapter {
    fn clone_arc_history(&self) -> Arc<dyn YfHistory> {
        Arc::new(self.clone()) as Arc<dyn YfHistory>
    }
    fn clone_arc_quotes(&self) -> Arc<dyn YfQuotes> {
        Arc::new(self.clone()) as Arc<dyn YfQuotes>
    }
}

#[cfg(test)]
mod tests {
    use super::quote_context;

    #[test]
    fn quote_context_names_the_symbols() {
        assert_eq!(quote_context(&["AAPL".to_string()]), "quote for AAPL");
        assert_eq!(
            quote_context(&["AAPL".to_string(), "MSFT".to_string()]),
            "quote for AAPL,MSFT"
        );
    }
}
