mod helpers;

use helpers::{ORIGIN, fixtures, get_json, spawn};

#[tokio::test]
async fn root_says_hello() {
    let base = spawn(fixtures()).await;
    let (status, body) = get_json(&format!("{base}/")).await;
    assert_eq!(status, 200);
    assert_eq!(body, serde_json::json!({ "message": "Hello World" }));
}

#[tokio::test]
async fn series_defaults_to_one_day() {
    let base = spawn(fixtures()).await;
    let (status, body) = get_json(&format!("{base}/api/stock/AAPL")).await;
    assert_eq!(status, 200);
    assert_eq!(body["symbol"], "AAPL");

    let dates = body["dates"].as_array().unwrap();
    let prices = body["prices"].as_array().unwrap();
    assert_eq!(dates.len(), prices.len());
    assert_eq!(dates.first().unwrap(), "10:00");
    assert!(dates.iter().all(|d| d.as_str().unwrap().ends_with(":00")));
}

#[tokio::test]
async fn series_with_trailing_slash_and_period() {
    let base = spawn(fixtures()).await;
    let (status, body) = get_json(&format!("{base}/api/stock/MSFT/?period=5D")).await;
    assert_eq!(status, 200);
    assert_eq!(
        body["dates"],
        serde_json::json!(["03/11", "03/12", "03/13", "03/14", "03/15"])
    );
}

#[tokio::test]
async fn invalid_period_is_400() {
    let base = spawn(fixtures()).await;
    let (status, body) = get_json(&format!("{base}/api/stock/AAPL?period=2W")).await;
    assert_eq!(status, 400);
    assert_eq!(body["detail"], "Invalid period");
}

#[tokio::test]
async fn malformed_query_is_400_with_detail() {
    let base = spawn(fixtures()).await;
    let (status, body) =
        get_json(&format!("{base}/api/stock/AAPL?period=1D&period=5D")).await;
    assert_eq!(status, 400);
    let detail = body["detail"].as_str().expect("detail is a string");
    assert!(detail.starts_with("Failed to deserialize query string"), "{detail}");
}

#[tokio::test]
async fn empty_series_is_404() {
    let base = spawn(fixtures()).await;
    let (status, body) = get_json(&format!("{base}/api/stock/EMPTY?period=1Y")).await;
    assert_eq!(status, 404);
    assert_eq!(body["detail"], "No data found for symbol EMPTY");
}

#[tokio::test]
async fn upstream_failure_is_400_with_message() {
    let base = spawn(fixtures()).await;
    let (status, body) = get_json(&format!("{base}/api/stock/FAIL?period=1M")).await;
    assert_eq!(status, 400);
    assert_eq!(
        body["detail"],
        "Error fetching data for FAIL: quoteline-mock failed: forced failure: history"
    );
}

#[tokio::test]
async fn current_price_ok_and_failure() {
    let base = spawn(fixtures()).await;
    let (status, body) = get_json(&format!("{base}/api/stock/TSLA/current-price")).await;
    assert_eq!(status, 200);
    assert_eq!(body, serde_json::json!({ "price": 163.57 }));

    let (status, body) = get_json(&format!("{base}/api/stock/NOPE/current-price")).await;
    assert_eq!(status, 400);
    assert_eq!(
        body["detail"],
        "Error fetching current price for NOPE: not found: quote for NOPE"
    );
}

#[tokio::test]
async fn cors_allows_configured_origin_only() {
    let base = spawn(fixtures()).await;
    let client = reqwest::Client::new();

    let resp = client
        .get(format!("{base}/"))
        .header("Origin", ORIGIN)
        .send()
        .await
        .unwrap();
    let headers = resp.headers();
    assert_eq!(
        headers.get("access-control-allow-origin").unwrap(),
        ORIGIN
    );
    assert_eq!(
        headers.get("access-control-allow-credentials").unwrap(),
        "true"
    );

    let resp = client
        .get(format!("{base}/"))
        .header("Origin", "http://evil.example")
        .send()
        .await
        .unwrap();
    assert!(resp.headers().get("access-control-allow-origin").is_none());
}
