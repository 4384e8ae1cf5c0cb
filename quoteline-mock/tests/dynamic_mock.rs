use chrono::{FixedOffset, TimeZone};
use quoteline_core::{Interval, QuotelineError, Range, Sample};
use quoteline_mock::{DynamicMockConnector, MockBehavior};

fn sample(hh: u32, close: f64) -> Sample {
    let tz = FixedOffset::west_opt(4 * 3600).unwrap();
    Sample::new(tz.with_ymd_and_hms(2024, 3, 15, hh, 0, 0).unwrap(), close)
}

#[tokio::test]
async fn test_mock_history_return_and_log() {
    let (mock, controller) = DynamicMockConnector::new_with_controller("P0");
    let series = vec![sample(10, 1.0), sample(11, 2.0)];
    controller
        .set_history_behavior("AAPL", MockBehavior::Return(series.clone()))
        .await;

    let hp = mock.as_history_provider().expect("history provider");
    let got = hp
        .history("AAPL", Range::D5, Interval::I15m)
        .await
        .expect("history ok");
    assert_eq!(got, series);

    assert_eq!(controller.history_calls().await, 1);
    let log = controller.history_requests().await;
    assert_eq!(log[0].0, "AAPL");
    assert!(matches!(log[0].1, Range::D5));
    assert!(matches!(log[0].2, Interval::I15m));
}

#[tokio::test]
async fn test_mock_quote_fail() {
    let (mock, controller) = DynamicMockConnector::new_with_controller("P0");
    let err = QuotelineError::connector("P0", "boom");
    controller
        .set_quote_behavior("MSFT", MockBehavior::Fail(err.clone()))
        .await;

    let qp = mock.as_quote_provider().expect("quote provider");
    let got = qp.current_price("MSFT").await.expect_err("err");
    assert_eq!(got, err);
    assert_eq!(controller.quote_calls().await, 1);
    assert_eq!(controller.history_calls().await, 0);
}

#[tokio::test]
async fn test_mock_unconfigured_symbol_is_unsupported() {
    let (mock, _controller) = DynamicMockConnector::new_with_controller("P0");
    let qp = mock.as_quote_provider().expect("quote provider");
    let got = qp.current_price("AAPL").await.expect_err("err");
    assert_eq!(got, QuotelineError::unsupported("quote"));
}

#[tokio::test]
async fn test_mock_clear_resets_rules_and_counters() {
    let (mock, controller) = DynamicMockConnector::new_with_controller("P0");
    controller
        .set_quote_behavior("AAPL", MockBehavior::Return(101.5))
        .await;
    let qp = mock.as_quote_provider().expect("quote provider");
    assert_eq!(qp.current_price("AAPL").await.unwrap(), 101.5);

    controller.clear_all_behaviors().await;
    assert_eq!(controller.quote_calls().await, 0);
    assert!(qp.current_price("AAPL").await.is_err());
}
