//! # Logger
//!
//! Writes serialized metrics as single lines, standard output by default

use super::{Clock, Metric, Serializer};
use std::io::Write;
use std::sync::Arc;
use tracing::error;

/// Namespace used when neither the metric nor the [Config] names one
pub const DEFAULT_NAMESPACE: &str = "aws-embedded-metrics";

/// Serializer configuration
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Namespace for metrics built without [with_namespace](super::MetricBuilder::with_namespace)
    pub default_namespace: String,
}

impl Config {
    pub fn default_namespace(self, namespace: impl Into<String>) -> Self {
        Self {
            default_namespace: namespace.into(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_namespace: DEFAULT_NAMESPACE.to_string(),
        }
    }
}

/// Emits one EMF document per metric
///
/// # Example
/// ```
/// use embedded_metric_format::{Metric, MetricLogger, Unit};
///
/// let logger = MetricLogger::configure(|config| config.default_namespace = "MyApplication".into());
///
/// let metric = Metric::builder()
///     .specify_metric("requests", 1.0, Some(Unit::Count))
///     .add_property("RequestId", "ABC123")?
///     .build()?;
///
/// logger.log(&metric);
/// # Ok::<(), embedded_metric_format::Error>(())
/// ```
#[derive(Clone, Default)]
pub struct MetricLogger {
    serializer: Serializer,
}

impl MetricLogger {
    pub fn new(config: Config) -> Self {
        Self {
            serializer: Serializer::new(config),
        }
    }

    /// Start from the default [Config] and let the caller adjust it
    pub fn configure(configure: impl FnOnce(&mut Config)) -> Self {
        let mut config = Config::default();
        configure(&mut config);
        Self::new(config)
    }

    pub fn with_clock(clock: Arc<dyn Clock>, config: Config) -> Self {
        Self {
            serializer: Serializer::with_clock(clock, config),
        }
    }

    pub fn serializer(&self) -> &Serializer {
        &self.serializer
    }

    /// Write a single metric and a newline to an implementation of [std::io::Write]
    pub fn write(&self, metric: &Metric, mut writer: impl Write) -> std::io::Result<()> {
        let line = self.serializer.serialize_metric(metric);
        writeln!(writer, "{line}")
    }

    /// Write a single metric to standard output, failures are logged rather than returned
    pub fn log(&self, metric: &Metric) {
        self.log_to(metric, std::io::stdout().lock())
    }

    fn log_to(&self, metric: &Metric, writer: impl Write) {
        if let Err(e) = self.write(metric, writer) {
            error!(metric = metric.name(), "Failed to write metric: {e}");
        }
    }
}
