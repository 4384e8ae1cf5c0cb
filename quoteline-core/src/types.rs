//! Samples, reduced chart points, and the response payloads served over HTTP.
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// One upstream observation: a bar timestamp and its closing price.
///
/// The timestamp keeps whatever UTC offset the provider reported for the
/// exchange; labels are formatted in that offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Bar timestamp (minute resolution).
    pub ts: DateTime<FixedOffset>,
    /// Closing price of the bar.
    pub close: f64,
}

impl Sample {
    /// Build a sample from a timestamp and closing price.
    #[must_use]
    pub const fn new(ts: DateTime<FixedOffset>, close: f64) -> Self {
        Self { ts, close }
    }
}

/// One reduced output record after resampling.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesPoint {
    /// Axis label, formatted per period.
    pub label: String,
    /// Price carried over from the kept sample.
    pub price: f64,
}

/// Chart series for one symbol: labels and prices as parallel arrays.
///
/// Only constructible from a list of [`SeriesPoint`]s, so both arrays always
/// have the same length.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesResponse {
    dates: Vec<String>,
    prices: Vec<f64>,
    symbol: String,
}

impl SeriesResponse {
    /// Split resampled points into the parallel-array response shape.
    pub fn from_points(symbol: impl Into<String>, points: Vec<SeriesPoint>) -> Self {
        let (dates, prices) = points.into_iter().map(|p| (p.label, p.price)).unzip();
        Self {
            dates,
            prices,
            symbol: symbol.into(),
        }
    }

    /// Axis labels in chronological order.
    #[must_use]
    pub fn dates(&self) -> &[String] {
        &self.dates
    }

    /// Prices aligned with [`dates`](Self::dates).
    #[must_use]
    pub fn prices(&self) -> &[f64] {
        &self.prices
    }

    /// Symbol echoed back from the request.
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Number of points in the series.
    #[must_use]
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Whether the series has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

/// Latest regular-market price for a symbol.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurrentPrice {
    /// Price in the instrument's quote currency.
    pub price: f64,
}
