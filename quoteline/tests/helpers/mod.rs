#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;

use chrono::{FixedOffset, TimeZone};
use quoteline::Quoteline;
use quoteline::http::{cors_layer, router};
use quoteline_core::Sample;
use quoteline_mock::{DynamicMockConnector, DynamicMockController, MockConnector};
use tokio::net::TcpListener;

pub const ORIGIN: &str = "http://localhost:3000";

/// A sample at minute resolution in exchange time (-05:00).
pub fn sample(y: i32, m: u32, d: u32, hh: u32, mm: u32, close: f64) -> Sample {
    let tz = FixedOffset::west_opt(5 * 3600).unwrap();
    Sample::new(tz.with_ymd_and_hms(y, m, d, hh, mm, 0).unwrap(), close)
}

/// Service backed by a scriptable connector.
pub fn dynamic() -> (Quoteline, DynamicMockController) {
    let (conn, ctrl) = DynamicMockConnector::new_with_controller("dyn");
    let ql = Quoteline::builder().with_connector(conn).build().unwrap();
    (ql, ctrl)
}

/// Service backed by fixture data.
pub fn fixtures() -> Quoteline {
    Quoteline::builder()
        .with_connector(Arc::new(MockConnector::new()))
        .build()
        .unwrap()
}

/// Serve `ql` on an ephemeral local port and return its base URL.
pub async fn spawn(ql: Quoteline) -> String {
    let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0)))
        .await
        .unwrap();
    let addr = listener.local_addr().unwrap();
    let app = router(
        Arc::new(ql),
        cors_layer(axum::http::HeaderValue::from_static(ORIGIN)),
    );
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

/// GET `url` and return the status with the parsed JSON body.
pub async fn get_json(url: &str) -> (u16, serde_json::Value) {
    let resp = reqwest::get(url).await.unwrap();
    let status = resp.status().as_u16();
    let body = resp.text().await.unwrap();
    (status, serde_json::from_str(&body).unwrap())
}
