use chrono::{DateTime, Datelike, Duration, FixedOffset, NaiveDate, TimeZone, Weekday};
use quoteline_core::{Interval, Range, Sample};

// Last session covered by the fixtures: Friday 2024-03-15, exchange time -04:00.
const ANCHOR: (i32, u32, u32) = (2024, 3, 15);
const OFFSET_SECS: i32 = -4 * 3600;
const SESSION_OPEN: (u32, u32) = (9, 30);
const SESSION_MINUTES: i64 = 390;

pub fn series(symbol: &str, range: Range, interval: Interval) -> Option<Vec<Sample>> {
    let base = match symbol {
        "AAPL" => 172.5,
        "MSFT" => 416.0,
        "TSLA" => 163.5,
        "EMPTY" => return Some(Vec::new()),
        _ => return None,
    };
    let stamps = timestamps(range, interval);
    Some(
        stamps
            .into_iter()
            .enumerate()
            .map(|(i, ts)| Sample::new(ts, price(base, i)))
            .collect(),
    )
}

// Deterministic saw-tooth around `base` so charts are not flat.
fn price(base: f64, i: usize) -> f64 {
    let step = i32::try_from((i * 7) % 40).unwrap_or(0);
    base + f64::from(step - 20) * 0.25
}

fn anchor() -> NaiveDate {
    let (y, m, d) = ANCHOR;
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn range_start(range: Range) -> NaiveDate {
    let a = anchor();
    match range {
        Range::D1 => a,
        Range::D5 => a - Duration::days(4),
        Range::M1 => a - Duration::days(29),
        Range::M6 => a - Duration::days(182),
        Range::Ytd => NaiveDate::from_ymd_opt(a.year(), 1, 1).unwrap_or(a),
        Range::Y1 => a - Duration::days(365),
        Range::Y5 => a - Duration::days(5 * 365),
        Range::Max => NaiveDate::from_ymd_opt(2010, 6, 29).unwrap_or(a),
        _ => a - Duration::days(365),
    }
}

fn is_session(d: NaiveDate) -> bool {
    !matches!(d.weekday(), Weekday::Sat | Weekday::Sun)
}

fn at(d: NaiveDate, minutes_after_open: i64) -> Option<DateTime<FixedOffset>> {
    let tz = FixedOffset::east_opt(OFFSET_SECS)?;
    let (h, m) = SESSION_OPEN;
    let open = d.and_hms_opt(h, m, 0)?;
    tz.from_local_datetime(&(open + Duration::minutes(minutes_after_open)))
        .single()
}

fn sessions(range: Range) -> impl Iterator<Item = NaiveDate> {
    let end = anchor();
    range_start(range)
        .iter_days()
        .take_while(move |d| *d <= end)
        .filter(|d| is_session(*d))
}

fn timestamps(range: Range, interval: Interval) -> Vec<DateTime<FixedOffset>> {
    match interval {
        // Minute bars are only served for the most recent session.
        Interval::I1m => (0..SESSION_MINUTES).filter_map(|m| at(anchor(), m)).collect(),
        Interval::I15m => intraday(range, 15),
        Interval::I1h => intraday(range, 60),
        Interval::W1 => sessions(range)
            .filter(|d| d.weekday() == Weekday::Mon)
            .filter_map(|d| at(d, 0))
            .collect(),
        Interval::M1 => {
            let mut out = Vec::new();
            let mut last_month = None;
            for d in sessions(range) {
                let key = (d.year(), d.month());
                if last_month != Some(key) {
                    last_month = Some(key);
                    out.extend(at(d, 0));
                }
            }
            out
        }
        _ => sessions(range).filter_map(|d| at(d, 0)).collect(),
    }
}

fn intraday(range: Range, step: i64) -> Vec<DateTime<FixedOffset>> {
    sessions(range)
        .flat_map(|d| {
            (0..SESSION_MINUTES)
                .step_by(usize::try_from(step).unwrap_or(1))
                .filter_map(move |m| at(d, m))
        })
        .collect()
}
