//! quoteline serves chart-ready stock series over HTTP.
//!
//! Overview
//! - [`Quoteline`] resolves a chart period, fetches the matching history from
//!   a registered connector and thins it into labeled points.
//! - Provider failures surface as one of three request-level errors:
//!   `InvalidPeriod`, `NoDataFound` or `UpstreamFetch`.
//! - [`http`] exposes the service as an axum router with a single-origin CORS
//!   policy; [`config::ServerConfig`] carries the command-line/env settings.
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use quoteline::Quoteline;
//! use quoteline_yfinance::YfConnector;
//!
//! let ql = Quoteline::builder()
//!     .with_connector(Arc::new(YfConnector::new_default()))
//!     .build()?;
//! let series = ql.series("AAPL", "1M").await?;
//! let price = ql.current_price("AAPL").await?;
//! ```
#![warn(missing_docs)]

/// Command-line and environment configuration.
pub mod config;
mod core;
mod error;
/// HTTP surface: router, handlers and error responses.
pub mod http;
mod price;
mod series;

pub use crate::core::{Quoteline, QuotelineBuilder};
pub use error::ServerError;

pub use quoteline_core::{CurrentPrice, Period, QuotelineError, SeriesResponse};
