//! axum surface for the chart service.
//!
//! - `GET /` greeting
//! - `GET /api/stock/:symbol?period=` resampled chart series (also with a trailing slash)
//! - `GET /api/stock/:symbol/current-price` latest price

mod error;
mod handlers;
mod server;

pub use error::ApiError;
pub use server::{cors_layer, router, serve};
