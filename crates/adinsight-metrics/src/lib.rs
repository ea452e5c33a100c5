//! Metric aggregation for the adinsight pipeline.
//!
//! Reduces a set of [`adinsight_core::Row`] observations into one immutable
//! [`adinsight_core::MetricsSummary`]. Pure computation: no I/O, no errors,
//! and every rate metric is zero-guarded so downstream consumers stay total.

mod aggregate;

pub use aggregate::aggregate;
