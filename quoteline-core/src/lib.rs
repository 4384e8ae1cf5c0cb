//! quoteline-core
//!
//! Core types, traits, and utilities shared across the quoteline workspace.
//!
//! - `types`: samples, series points and the serialized chart responses.
//! - `period`: the fixed table mapping chart period codes to upstream
//!   (range, interval) pairs.
//! - `connector`: the `QuotelineConnector` trait and capability provider traits.
//! - `timeseries`: the chart resampler that thins provider series into labeled points.
#![warn(missing_docs)]

/// Connector capability traits and the primary `QuotelineConnector` interface.
pub mod connector;
/// Unified error type.
pub mod error;
/// Chart period codes and their upstream request parameters.
pub mod period;
/// Time-series utilities for chart resampling.
pub mod timeseries;
pub mod types;

pub use connector::QuotelineConnector;
pub use error::QuotelineError;
pub use period::Period;
pub use timeseries::resample::{Sampling, resample};
pub use types::*;

pub use paft::market::requests::history::{Interval, Range};
