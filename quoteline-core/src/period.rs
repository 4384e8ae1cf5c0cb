use std::fmt;
use std::str::FromStr;

use paft::market::requests::history::{Interval, Range};

use crate::QuotelineError;

/// Chart period selectable by clients.
///
/// Each period maps to exactly one upstream (range, interval) pair; the
/// interval is chosen so the raw series is dense enough for its labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Period {
    /// `1D`: one session of minute bars.
    #[default]
    OneDay,
    /// `5D`: five sessions of 15-minute bars.
    FiveDays,
    /// `1M`: one month of hourly bars.
    OneMonth,
    /// `6M`: six months of daily bars.
    SixMonths,
    /// `YTD`: year to date, daily bars.
    YearToDate,
    /// `1Y`: one year of daily bars.
    OneYear,
    /// `5Y`: five years of weekly bars.
    FiveYears,
    /// `MAX`: full history of monthly bars.
    Max,
}

impl Period {
    /// Every period in display order.
    pub const ALL: [Self; 8] = [
        Self::OneDay,
        Self::FiveDays,
        Self::OneMonth,
        Self::SixMonths,
        Self::YearToDate,
        Self::OneYear,
        Self::FiveYears,
        Self::Max,
    ];

    /// The wire code, e.g. `"1D"`.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::OneDay => "1D",
            Self::FiveDays => "5D",
            Self::OneMonth => "1M",
            Self::SixMonths => "6M",
            Self::YearToDate => "YTD",
            Self::OneYear => "1Y",
            Self::FiveYears => "5Y",
            Self::Max => "MAX",
        }
    }

    /// Upstream lookback range.
    #[must_use]
    pub const fn range(self) -> Range {
        match self {
            Self::OneDay => Range::D1,
            Self::FiveDays => Range::D5,
            Self::OneMonth => Range::M1,
            Self::SixMonths => Range::M6,
            Self::YearToDate => Range::Ytd,
            Self::OneYear => Range::Y1,
            Self::FiveYears => Range::Y5,
            Self::Max => Range::Max,
        }
    }

    /// Upstream bar interval.
    #[must_use]
    pub const fn interval(self) -> Interval {
        match self {
            Self::OneDay => Interval::I1m,
            Self::FiveDays => Interval::I15m,
            Self::OneMonth => Interval::I1h,
            Self::SixMonths | Self::YearToDate | Self::OneYear => Interval::D1,
            Self::FiveYears => Interval::W1,
            Self::Max => Interval::M1,
        }
    }

    /// Provider query strings for (range, interval), e.g. `("1mo", "1h")`.
    #[must_use]
    pub const fn query_codes(self) -> (&'static str, &'static str) {
        match self {
            Self::OneDay => ("1d", "1m"),
            Self::FiveDays => ("5d", "15m"),
            Self::OneMonth => ("1mo", "1h"),
            Self::SixMonths => ("6mo", "1d"),
            Self::YearToDate => ("ytd", "1d"),
            Self::OneYear => ("1y", "1d"),
            Self::FiveYears => ("5y", "1wk"),
            Self::Max => ("max", "1mo"),
        }
    }

    /// Resolve a period code straight to its upstream (range, interval) pair.
    ///
    /// # Errors
    /// Returns `InvalidPeriod` when `code` is not one of the eight recognized codes.
    pub fn resolve(code: &str) -> Result<(Range, Interval), QuotelineError> {
        let p: Self = code.parse()?;
        Ok((p.range(), p.interval()))
    }
}

impl FromStr for Period {
    type Err = QuotelineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.code() == s)
            .ok_or_else(|| QuotelineError::invalid_period(s))
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip_through_from_str() {
        for p in Period::ALL {
            assert_eq!(p.code().parse::<Period>().unwrap(), p);
        }
    }

    #[test]
    fn codes_are_case_sensitive() {
        assert!(matches!(
            "1d".parse::<Period>(),
            Err(QuotelineError::InvalidPeriod { .. })
        ));
        assert!(matches!(
            "ytd".parse::<Period>(),
            Err(QuotelineError::InvalidPeriod { .. })
        ));
    }

    #[test]
    fn default_is_one_day() {
        assert_eq!(Period::default(), Period::OneDay);
    }
}
