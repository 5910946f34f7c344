//! Weighted multi-criteria scoring and forecasting engines for HR decision support.
//!
//! Every engine is built once from an immutable set of definitions and then turns a
//! caller-supplied `metric_id -> value` map into a serializable report.

pub mod config;
pub mod engines;
pub mod error;
pub mod input;
pub mod telemetry;
