//! # Serializer
//!
//! Renders a [Metric] as one Embedded Metric Format document

use super::{emf, Clock, Config, Metric, SystemClock};
use std::sync::Arc;
use tracing::{debug, warn};

/// CloudWatch accepts at most 10 dimensions in a dimension set
pub const MAX_DIMENSIONS: usize = 10;

/// Turns a [Metric] into EMF JSON text
///
/// # Example
/// ```
/// use chrono::{TimeZone, Utc};
/// use embedded_metric_format::{Config, FixedClock, Metric, Serializer, Unit};
/// use std::sync::Arc;
///
/// let clock = FixedClock(Utc.with_ymd_and_hms(2015, 9, 28, 9, 0, 0).unwrap());
/// let serializer = Serializer::with_clock(Arc::new(clock), Config::default());
///
/// let metric = Metric::builder()
///     .specify_metric("time", 100.0, Some(Unit::Milliseconds))
///     .build()?;
///
/// assert_eq!(
///     serializer.serialize_metric(&metric),
///     r#"{"_aws":{"Timestamp":1443430800,"CloudWatchMetrics":[{"Namespace":"aws-embedded-metrics","Dimensions":[[]],"Metrics":[{"Name":"time","Unit":"Milliseconds"}]}]},"time":100}"#
/// );
/// # Ok::<(), embedded_metric_format::Error>(())
/// ```
#[derive(Clone)]
pub struct Serializer {
    clock: Arc<dyn Clock>,
    config: Config,
}

impl Serializer {
    /// Serializer stamping documents with the system clock
    pub fn new(config: Config) -> Self {
        Self::with_clock(Arc::new(SystemClock), config)
    }

    pub fn with_clock(clock: Arc<dyn Clock>, config: Config) -> Self {
        Self { clock, config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Serialize the metric into a JSON string
    pub fn serialize_metric(&self, metric: &Metric) -> String {
        // Every key is a string and non-finite values become null, so this cannot fail
        serde_json::to_string(&self.document(metric)).expect("EMF document serialization is infallible")
    }

    /// Serialize the metric to an implementation of [std::io::Write], without a trailing newline
    pub fn serialize_metric_to_writer(&self, metric: &Metric, writer: impl std::io::Write) -> std::io::Result<()> {
        serde_json::to_writer(writer, &self.document(metric)).map_err(std::io::Error::from)
    }

    fn document<'a>(&'a self, metric: &'a Metric) -> emf::EmbeddedMetrics<'a> {
        let dimensions = truncate_dimensions(metric);

        let namespace = match metric.namespace() {
            Some(namespace) if !namespace.is_empty() => namespace,
            _ => {
                debug!(metric = metric.name(), "using default namespace {}", self.config.default_namespace);
                self.config.default_namespace.as_str()
            }
        };

        emf::EmbeddedMetrics {
            aws: emf::EmbeddedMetricsAws {
                timestamp: self.clock.now().timestamp(),
                cloudwatch_metrics: [emf::EmbeddedNamespace {
                    namespace,
                    dimensions: [dimensions.iter().map(|(key, _)| key.as_str()).collect()],
                    metrics: [emf::EmbeddedMetric {
                        name: metric.name(),
                        unit: metric.unit(),
                    }],
                }],
            },
            dimensions: emf::Members(dimensions),
            properties: emf::Members(metric.properties()),
            value: emf::MetricValue {
                name: metric.name(),
                value: metric.value(),
            },
        }
    }
}

impl Default for Serializer {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

/// The first MAX_DIMENSIONS dimensions in insertion order
fn truncate_dimensions(metric: &Metric) -> &[(String, String)] {
    let dimensions = metric.dimensions();
    if dimensions.len() > MAX_DIMENSIONS {
        warn!(
            metric = metric.name(),
            "dropping {} dimensions, CloudWatch accepts at most {MAX_DIMENSIONS}",
            dimensions.len() - MAX_DIMENSIONS
        );
        &dimensions[..MAX_DIMENSIONS]
    } else {
        dimensions
    }
}
