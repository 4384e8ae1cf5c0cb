//! quoteline-mock
//!
//! Connectors for tests and offline runs of the quoteline service.
//!
//! - [`MockConnector`] serves deterministic fixture data for `AAPL`, `MSFT`
//!   and `TSLA`, shaped by the requested interval. `EMPTY` yields an empty
//!   series and `FAIL` a connector failure.
//! - [`DynamicMockConnector`] defers every call to a test-side controller.
use async_trait::async_trait;
use quoteline_core::connector::{HistoryProvider, QuoteProvider, QuotelineConnector};
use quoteline_core::{Interval, QuotelineError, Range, Sample};

mod dynamic;
mod fixtures;

pub use dynamic::{DynamicMockConnector, DynamicMockController, MockBehavior};

/// Mock connector for CI-safe runs. Provides deterministic data from static fixtures.
pub struct MockConnector;

impl Default for MockConnector {
    fn default() -> Self {
        Self::new()
    }
}

impl MockConnector {
    /// Static connector name.
    pub const NAME: &'static str = "quoteline-mock";

    /// Create the connector.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn not_found(what: &str) -> QuotelineError {
        QuotelineError::not_found(what.to_string())
    }

    fn maybe_fail(symbol: &str, capability: &'static str) -> Result<(), QuotelineError> {
        match symbol {
            "FAIL" => Err(QuotelineError::connector(
                Self::NAME,
                format!("forced failure: {capability}"),
            )),
            _ => Ok(()),
        }
    }
}

impl QuotelineConnector for MockConnector {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn vendor(&self) -> &'static str {
        "Mock"
    }

    fn as_history_provider(&self) -> Option<&dyn HistoryProvider> {
        Some(self as &dyn HistoryProvider)
    }

    fn as_quote_provider(&self) -> Option<&dyn QuoteProvider> {
        Some(self as &dyn QuoteProvider)
    }
}

#[async_trait]
impl HistoryProvider for MockConnector {
    async fn history(
        &self,
        symbol: &str,
        range: Range,
        interval: Interval,
    ) -> Result<Vec<Sample>, QuotelineError> {
        Self::maybe_fail(symbol, "history")?;
        fixtures::history::series(symbol, range, interval)
            .ok_or_else(|| Self::not_found(&format!("history for {symbol}")))
    }
}

#[async_trait]
impl QuoteProvider for MockConnector {
    async fn current_price(&self, symbol: &str) -> Result<f64, QuotelineError> {
        Self::maybe_fail(symbol, "quote")?;
        fixtures::quotes::by_symbol(symbol)
            .ok_or_else(|| Self::not_found(&format!("quote for {symbol}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[tokio::test]
    async fn minute_bars_cover_one_session() {
        let m = MockConnector::new();
        let s = m.history("AAPL", Range::D1, Interval::I1m).await.unwrap();
        assert_eq!(s.len(), 390);
        assert_eq!((s[0].ts.hour(), s[0].ts.minute()), (9, 30));
        assert!(s.windows(2).all(|w| w[0].ts < w[1].ts));
        assert_eq!(s.iter().filter(|x| x.ts.minute() == 0).count(), 6);
    }

    #[tokio::test]
    async fn fifteen_minute_bars_cover_five_sessions() {
        let m = MockConnector::new();
        let s = m.history("MSFT", Range::D5, Interval::I15m).await.unwrap();
        assert_eq!(s.len(), 5 * 26);
    }

    #[tokio::test]
    async fn monthly_bars_start_each_month() {
        let m = MockConnector::new();
        let s = m.history("TSLA", Range::Y1, Interval::M1).await.unwrap();
        assert!((12..=13).contains(&s.len()));
    }

    #[tokio::test]
    async fn special_symbols() {
        let m = MockConnector::new();
        let empty = m.history("EMPTY", Range::D1, Interval::I1m).await.unwrap();
        assert!(empty.is_empty());

        let err = m.history("FAIL", Range::D1, Interval::I1m).await.unwrap_err();
        assert!(matches!(err, QuotelineError::Connector { .. }));

        let err = m.current_price("NOPE").await.unwrap_err();
        assert_eq!(err, QuotelineError::not_found("quote for NOPE"));
    }
}
