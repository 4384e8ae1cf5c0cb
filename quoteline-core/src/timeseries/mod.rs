//! Time-series utilities shared by the service and connectors.
//!
//! - `resample`: thin a provider series into labeled chart points per period
/// Chart resampling strategies and the single-pass fold that applies them.
pub mod resample;
