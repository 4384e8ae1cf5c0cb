use quoteline_core::{Period, QuotelineError, SeriesResponse, resample};
use tracing::debug;

use crate::Quoteline;

impl Quoteline {
    /// Fetch and resample a chart series for `symbol` over the period named by `period_code`.
    ///
    /// The period code is validated before any provider call. An empty provider
    /// series is `NoDataFound`; a non-empty series that resamples to nothing
    /// (e.g. a one-day session without a bar on the hour) is returned as an empty
    /// response.
    ///
    /// # Errors
    /// - `InvalidPeriod` if `period_code` is not a recognized code.
    /// - `NoDataFound` if the provider returned zero samples.
    /// - `UpstreamFetch` for any provider failure, including a missing capability.
    pub async fn series(
        &self,
        symbol: &str,
        period_code: &str,
    ) -> Result<SeriesResponse, QuotelineError> {
        let period: Period = period_code.parse()?;
        let (connector, provider) = self
            .history_provider()
            .map_err(|e| QuotelineError::upstream(symbol, &e))?;

        let samples = provider
            .history(symbol, period.range(), period.interval())
            .await
            .map_err(|e| {
                debug!(symbol, connector, error = %e, "history fetch failed");
                QuotelineError::upstream(symbol, &e)
            })?;

        if samples.is_empty() {
            return Err(QuotelineError::no_data(symbol));
        }

        let points = resample(&samples, period);
        let (range, interval) = period.query_codes();
        debug!(
            symbol,
            connector,
            period = period.code(),
            range,
            interval,
            samples = samples.len(),
            points = points.len(),
            "resampled series"
        );
        Ok(SeriesResponse::from_points(symbol, points))
    }
}
