use async_trait::async_trait;
use paft::market::requests::history::{Interval, Range};

use crate::{QuotelineError, Sample};

/// Focused role trait for connectors that provide price history.
#[async_trait]
pub trait HistoryProvider: Send + Sync {
    /// Fetch closing-price samples for `symbol` over `range` at `interval` spacing.
    ///
    /// Implementations must return samples in chronological order. An empty
    /// vector means the provider had no bars for the request; it is not an error
    /// at this layer.
    async fn history(
        &self,
        symbol: &str,
        range: Range,
        interval: Interval,
    ) -> Result<Vec<Sample>, QuotelineError>;
}

/// Focused role trait for connectors that provide current quotes.
#[async_trait]
pub trait QuoteProvider: Send + Sync {
    /// Fetch the latest regular-market price for `symbol`.
    async fn current_price(&self, symbol: &str) -> Result<f64, QuotelineError>;
}

/// Main connector trait implemented by provider crates. Exposes capability discovery.
pub trait QuotelineConnector: Send + Sync {
    /// A stable identifier (e.g., "quoteline-yfinance").
    fn name(&self) -> &'static str;

    /// Human-friendly vendor string.
    fn vendor(&self) -> &'static str {
        "unknown"
    }

    /// Advertise history capability by returning a usable trait object reference when supported.
    fn as_history_provider(&self) -> Option<&dyn HistoryProvider> {
        None
    }

    /// Advertise quote capability by returning a usable trait object reference when supported.
    fn as_quote_provider(&self) -> Option<&dyn QuoteProvider> {
        None
    }
}
