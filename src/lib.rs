//! Builds a single metric and renders it as a CloudWatch Embedded Metric Format document
//!
//! # Example
//! ```
//! use embedded_metric_format::{Metric, MetricLogger, Unit};
//!
//! let metric = Metric::builder()
//!     .specify_metric("time", 100.0, Some(Unit::Milliseconds))
//!     .add_dimension("functionVersion", "$LATEST")?
//!     .add_property("requestId", "422b1569-16f6-4a03-b8f0-fe3fd9b100f8")?
//!     .with_namespace("lambda-function-metrics")
//!     .build()?;
//!
//! MetricLogger::default().log(&metric);
//! # Ok::<(), embedded_metric_format::Error>(())
//! ```

pub use {
    builder::MetricBuilder,
    clock::{Clock, FixedClock, SystemClock},
    logger::{Config, MetricLogger, DEFAULT_NAMESPACE},
    metric::Metric,
    serializer::{Serializer, MAX_DIMENSIONS},
    unit::Unit,
};

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors raised while assembling a [Metric]
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("{kind} {key:?} has already been added")]
    DuplicateKey { kind: &'static str, key: String },
    #[error("{0:?} is not a CloudWatch unit")]
    UnknownUnit(String),
}

mod builder;
mod clock;
mod emf;
mod logger;
mod metric;
mod serializer;
#[cfg(test)]
mod test;
mod unit;
