//! quoteline-yfinance
//!
//! Public connector that implements `QuotelineConnector` on top of the
//! `yfinance-rs` client library. Exposes closing-price history and the latest
//! regular-market price.
#![warn(missing_docs)]

/// Adapter definitions and the production adapter backed by `yfinance-rs`.
pub mod adapter;

use std::sync::Arc;

#[cfg(feature = "test-adapters")]
use adapter::CloneArcAdapters;
use adapter::{RealAdapter, YfHistory, YfQuotes};
use async_trait::async_trait;
use chrono::{DateTime, FixedOffset};
use quoteline_core::{
    Interval, QuotelineError, Range, Sample,
    connector::{HistoryProvider, QuoteProvider, QuotelineConnector},
};
use rust_decimal::prelude::ToPrimitive;
use yfinance_rs as yf;

#[cfg(not(feature = "test-adapters"))]
type AdapterArc = Arc<RealAdapter>;

#[cfg(feature = "test-adapters")]
type HistoryAdapter = Arc<dyn YfHistory>;
#[cfg(not(feature = "test-adapters"))]
type HistoryAdapter = AdapterArc;

#[cfg(feature = "test-adapters")]
type QuotesAdapter = Arc<dyn YfQuotes>;
#[cfg(not(feature = "test-adapters"))]
type QuotesAdapter = AdapterArc;

/// Public connector type. Production users will construct with `YfConnector::new_default()`.
pub struct YfConnector {
    history: HistoryAdapter,
    quotes: QuotesAdapter,
}

impl YfConnector {
    /// Static connector name.
    pub const NAME: &'static str = "quoteline-yfinance";

    fn looks_like_not_found(msg: &str) -> bool {
        let m = msg.to_ascii_lowercase();
        m.contains("not found") || m.contains("no data") || m.contains("no matches")
    }

    fn normalize_error(e: QuotelineError, what: &str) -> QuotelineError {
        match e {
            QuotelineError::Connector { connector: _, msg } => {
                if Self::looks_like_not_found(&msg) {
                    QuotelineError::not_found(what.to_string())
                } else {
                    QuotelineError::connector(Self::NAME, msg)
                }
            }
            other => other,
        }
    }

    /// Build with a fresh `yfinance_rs::YfClient` inside.
    #[must_use]
    pub fn new_default() -> Self {
        let a = RealAdapter::new_default();
        Self::from_adapter(&a)
    }

    /// Build from an existing `yfinance_rs::YfClient`.
    #[must_use]
    pub fn new_with_client(client: yf::YfClient) -> Self {
        let a = RealAdapter::new(client);
        Self::from_adapter(&a)
    }

    /// Build from a provided `reqwest::Client` by constructing a `yfinance_rs::YfClient`.
    ///
    /// Note: The provided client should enable a cookie store for yfinance auth/crumb flow.
    ///
    /// # Errors
    /// Returns an error if the internal `YfClient` cannot be constructed from the provided HTTP client.
    pub fn try_new_with_reqwest_client(http: reqwest::Client) -> Result<Self, QuotelineError> {
        let yf = yf::YfClient::builder()
            .custom_client(http)
            .user_agent(adapter::USER_AGENT)
            .build()
            .map_err(|e| QuotelineError::connector(Self::NAME, e.to_string()))?;
        Ok(Self::new_with_client(yf))
    }

    /// Build with a cookie-enabled HTTP client whose requests give up after `timeout`.
    ///
    /// # Errors
    /// Returns an error if the HTTP client or the internal `YfClient` cannot be constructed.
    pub fn with_timeout(timeout: std::time::Duration) -> Result<Self, QuotelineError> {
        let http = reqwest::Client::builder()
            .cookie_store(true)
            .timeout(timeout)
            .build()
            .map_err(|e| QuotelineError::connector(Self::NAME, e.to_string()))?;
        Self::try_new_with_reqwest_client(http)
    }

    /// For tests/injection (requires the `test-adapters` feature).
    #[cfg(feature = "test-adapters")]
    pub fn from_adapter<A: CloneArcAdapters + 'static>(adapter: &A) -> Self {
        Self {
            history: adapter.clone_arc_history(),
            quotes: adapter.clone_arc_quotes(),
        }
    }

    #[cfg(not(feature = "test-adapters"))]
    /// Build from a concrete `RealAdapter` by cloning it into shared handles.
    pub fn from_adapter(adapter: &RealAdapter) -> Self {
        let shared = Arc::new(adapter.clone());
        Self {
            history: Arc::clone(&shared),
            quotes: shared,
        }
    }
}

/// Convert provider candles into chronologically ordered samples.
///
/// Timestamps are moved into the exchange time zone from the response metadata
/// so labels read in market-local time; without metadata they stay in UTC.
///
/// # Errors
/// Returns `Data` if a close price cannot be represented as `f64`.
pub fn samples_from_history(resp: &yf::HistoryResponse) -> Result<Vec<Sample>, QuotelineError> {
    let tz = resp.meta.as_ref().and_then(|m| m.timezone);
    let mut samples = resp
        .candles
        .iter()
        .map(|c| {
            let close = c.close.amount().to_f64().ok_or_else(|| {
                QuotelineError::Data(format!("close at {} is not representable", c.ts))
            })?;
            let ts: DateTime<FixedOffset> = match tz {
                Some(tz) => c.ts.with_timezone(&tz).fixed_offset(),
                None => c.ts.fixed_offset(),
            };
            Ok(Sample::new(ts, close))
        })
        .collect::<Result<Vec<_>, QuotelineError>>()?;
    samples.sort_by_key(|s| s.ts);
    Ok(samples)
}

impl QuotelineConnector for YfConnector {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn vendor(&self) -> &'static str {
        "Yahoo Finance"
    }

    fn as_history_provider(&self) -> Option<&dyn HistoryProvider> {
        Some(self as &dyn HistoryProvider)
    }

    fn as_quote_provider(&self) -> Option<&dyn QuoteProvider> {
        Some(self as &dyn QuoteProvider)
    }
}

#[async_trait]
impl HistoryProvider for YfConnector {
    async fn history(
        &self,
        symbol: &str,
        range: Range,
        interval: Interval,
    ) -> Result<Vec<Sample>, QuotelineError> {
        let yf_req = yf::core::services::HistoryRequest {
            range: Some(range),
            period: None,
            interval,
            include_prepost: false,
            include_actions: false,
            auto_adjust: true,
            keepna: false,
        };
        let raw = self.history.fetch_full(symbol, yf_req).await?;
        let samples = samples_from_history(&raw)?;

        #[cfg(feature = "tracing")]
        tracing::debug!(
            symbol,
            candles = raw.candles.len(),
            samples = samples.len(),
            "fetched history"
        );

        Ok(samples)
    }
}

#[async_trait]
impl QuoteProvider for YfConnector {
    async fn current_price(&self, symbol: &str) -> Result<f64, QuotelineError> {
        let what = format!("quote for {symbol}");
        let raw = self
            .quotes
            .fetch(std::slice::from_ref(&symbol.to_string()))
            .await
            .map_err(|e| Self::normalize_error(e, &what))?;
        let first = raw
            .into_iter()
            .next()
            .ok_or_else(|| QuotelineError::not_found(what.clone()))?;
        let price = first.price.ok_or_else(|| {
            QuotelineError::Data(format!("no regular market price for {symbol}"))
        })?;
        price
            .amount()
            .to_f64()
            .ok_or_else(|| QuotelineError::Data(format!("price for {symbol} is not representable")))
    }
}
