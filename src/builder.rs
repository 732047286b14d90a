use super::metric::{lookup, Metric};
use super::{Error, Result, Unit};

/// Builder for a [Metric]
///
/// # Example
/// ```
/// use embedded_metric_format::{MetricBuilder, Unit};
///
/// let metric = MetricBuilder::new()
///     .specify_metric("Latency", 42.0, Some(Unit::Seconds))
///     .add_dimension("Service", "Aggregator")?
///     .with_namespace("Heart-Of-Gold")
///     .build()?;
///
/// assert_eq!(metric.unit().as_str(), "Seconds");
/// # Ok::<(), embedded_metric_format::Error>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct MetricBuilder {
    name: String,
    value: f64,
    unit: Unit,
    dimensions: Vec<(String, String)>,
    properties: Vec<(String, String)>,
    namespace: Option<String>,
}

impl MetricBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the metric name, value and unit
    /// * The name is only validated by [build](Self::build)
    /// * A unit of None is emitted as CloudWatch's "None"
    pub fn specify_metric(&mut self, name: impl Into<String>, value: f64, unit: Option<Unit>) -> &mut Self {
        self.name = name.into();
        self.value = value;
        self.unit = unit.unwrap_or_default();
        self
    }

    /// Adds a dimension (name, value) that CloudWatch will aggregate the metric by
    /// * Returns Err(DuplicateKey) if the name was already added, the first value is kept
    /// * Only the first 10 dimensions are serialized
    pub fn add_dimension(&mut self, key: impl Into<String>, value: impl Into<String>) -> Result<&mut Self> {
        insert_unique(&mut self.dimensions, "dimension", key.into(), value.into())?;
        Ok(self)
    }

    /// Adds a property (name, value) that is written alongside the metric but not aggregated
    /// * Returns Err(DuplicateKey) if the name was already added, the first value is kept
    pub fn add_property(&mut self, key: impl Into<String>, value: impl Into<String>) -> Result<&mut Self> {
        insert_unique(&mut self.properties, "property", key.into(), value.into())?;
        Ok(self)
    }

    /// Overrides the serializer's default namespace for this metric
    pub fn with_namespace(&mut self, namespace: impl Into<String>) -> &mut Self {
        self.namespace = Some(namespace.into());
        self
    }

    pub fn dimension(&self, key: &str) -> Option<&str> {
        lookup(&self.dimensions, key)
    }

    pub fn property(&self, key: &str) -> Option<&str> {
        lookup(&self.properties, key)
    }

    /// Snapshot the accumulated state into a [Metric]
    pub fn build(&self) -> Result<Metric> {
        if self.name.is_empty() {
            return Err(Error::InvalidArgument("metric name must be provided".to_string()));
        }

        Ok(Metric {
            name: self.name.clone(),
            value: self.value,
            unit: self.unit,
            dimensions: self.dimensions.clone(),
            properties: self.properties.clone(),
            namespace: self.namespace.clone(),
        })
    }
}

fn insert_unique(pairs: &mut Vec<(String, String)>, kind: &'static str, key: String, value: String) -> Result<()> {
    if lookup(pairs, &key).is_some() {
        return Err(Error::DuplicateKey { kind, key });
    }
    pairs.push((key, value));
    Ok(())
}
