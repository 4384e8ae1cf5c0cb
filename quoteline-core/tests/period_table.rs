use quoteline_core::{Interval, Period, QuotelineError, Range};

#[test]
fn every_code_resolves_to_its_range_and_interval() {
    let expected = [
        ("1D", ("1d", "1m")),
        ("5D", ("5d", "15m")),
        ("1M", ("1mo", "1h")),
        ("6M", ("6mo", "1d")),
        ("YTD", ("ytd", "1d")),
        ("1Y", ("1y", "1d")),
        ("5Y", ("5y", "1wk")),
        ("MAX", ("max", "1mo")),
    ];
    for (code, codes) in expected {
        let p: Period = code.parse().expect("known code");
        assert_eq!(p.code(), code);
        assert_eq!(p.query_codes(), codes, "{code}");
    }
}

#[test]
fn resolve_returns_paft_pair() {
    let (range, interval) = Period::resolve("1M").unwrap();
    assert!(matches!(range, Range::M1));
    assert!(matches!(interval, Interval::I1h));

    let (range, interval) = Period::resolve("MAX").unwrap();
    assert!(matches!(range, Range::Max));
    assert!(matches!(interval, Interval::M1));
}

#[test]
fn unknown_codes_are_invalid_period() {
    for bad in ["2D", "", " 1D", "1D ", "max", "10Y"] {
        let err = Period::resolve(bad).unwrap_err();
        assert_eq!(err, QuotelineError::invalid_period(bad));
    }
}
