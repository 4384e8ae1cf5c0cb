use quoteline_core::{CurrentPrice, QuotelineError};
use tracing::debug;

use crate::Quoteline;

impl Quoteline {
    /// Latest regular-market price for `symbol`.
    ///
    /// # Errors
    /// Any provider failure is returned as `UpstreamFetch`.
    pub async fn current_price(&self, symbol: &str) -> Result<CurrentPrice, QuotelineError> {
        let (connector, provider) = self
            .quote_provider()
            .map_err(|e| QuotelineError::upstream(symbol, &e))?;
        let price = provider.current_price(symbol).await.map_err(|e| {
            debug!(symbol, connector, error = %e, "quote fetch failed");
            QuotelineError::upstream(symbol, &e)
        })?;
        Ok(CurrentPrice { price })
    }
}
