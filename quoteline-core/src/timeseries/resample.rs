use chrono::{DateTime, Datelike, FixedOffset, Timelike};

use crate::{Period, Sample, SeriesPoint};

type Ts = DateTime<FixedOffset>;

/// Bucket identity compared by [`Sampling::KeyTransition`]; unused components are zero.
pub type BucketKey = (i32, u32, u32);

/// Inclusion rule applied by [`resample`].
///
/// All three variants run through the same fold; the only state carried
/// between samples is the timestamp of the last kept sample.
#[derive(Debug, Clone, Copy)]
pub enum Sampling {
    /// Keep every sample whose timestamp satisfies the predicate.
    Boundary(fn(&Ts) -> bool),
    /// Keep a sample when its key differs from the last kept sample's key.
    KeyTransition(fn(&Ts) -> BucketKey),
    /// Keep the first sample, then any sample at least `days` calendar days
    /// after the last kept one.
    Elapsed {
        /// Minimum calendar-day distance from the last kept sample.
        days: i64,
    },
}

fn on_the_hour(ts: &Ts) -> bool {
    ts.minute() == 0
}

fn calendar_day(ts: &Ts) -> BucketKey {
    (ts.year(), ts.month(), ts.day())
}

fn calendar_month(ts: &Ts) -> BucketKey {
    (ts.year(), ts.month(), 0)
}

fn calendar_year(ts: &Ts) -> BucketKey {
    (ts.year(), 0, 0)
}

impl Sampling {
    /// Inclusion rule for a chart period.
    #[must_use]
    pub const fn for_period(period: Period) -> Self {
        match period {
            Period::OneDay => Self::Boundary(on_the_hour),
            Period::FiveDays => Self::KeyTransition(calendar_day),
            Period::OneMonth => Self::Elapsed { days: 5 },
            Period::SixMonths | Period::YearToDate | Period::OneYear => {
                Self::KeyTransition(calendar_month)
            }
            Period::FiveYears | Period::Max => Self::KeyTransition(calendar_year),
        }
    }

    /// Whether `ts` is kept given the timestamp of the last kept sample.
    #[must_use]
    pub fn admits(&self, ts: &Ts, last_kept: Option<&Ts>) -> bool {
        match (self, last_kept) {
            (Self::Boundary(pred), _) => pred(ts),
            (Self::KeyTransition(_) | Self::Elapsed { .. }, None) => true,
            (Self::KeyTransition(key), Some(last)) => key(ts) != key(last),
            (Self::Elapsed { days }, Some(last)) => {
                ts.date_naive()
                    .signed_duration_since(last.date_naive())
                    .num_days()
                    >= *days
            }
        }
    }
}

/// `strftime` pattern used for a period's axis labels.
#[must_use]
pub const fn label_format(period: Period) -> &'static str {
    match period {
        Period::OneDay => "%H:%M",
        Period::FiveDays | Period::OneMonth => "%m/%d",
        Period::SixMonths | Period::YearToDate | Period::OneYear => "%b",
        Period::FiveYears | Period::Max => "%Y",
    }
}

/// Reduce a chronologically ordered series to labeled chart points for `period`.
///
/// Output order follows input order. The result may be empty even for a
/// non-empty input (e.g. a one-day session with no bar on the hour).
#[must_use]
pub fn resample(samples: &[Sample], period: Period) -> Vec<SeriesPoint> {
    resample_with(samples, Sampling::for_period(period), label_format(period))
}

/// Apply an explicit sampling rule and label pattern.
#[must_use]
pub fn resample_with(samples: &[Sample], sampling: Sampling, label_fmt: &str) -> Vec<SeriesPoint> {
    let (points, _) = samples.iter().fold(
        (Vec::new(), None::<Ts>),
        |(mut out, last_kept), s| {
            if sampling.admits(&s.ts, last_kept.as_ref()) {
                out.push(SeriesPoint {
                    label: s.ts.format(label_fmt).to_string(),
                    price: s.close,
                });
                (out, Some(s.ts))
            } else {
                (out, last_kept)
            }
        },
    );

    #[cfg(feature = "tracing")]
    tracing::trace!(
        input = samples.len(),
        output = points.len(),
        "resampled chart series"
    );

    points
}
