//! # Metric
//!
//! Immutable description of a single metric produced by [MetricBuilder](super::MetricBuilder)

use super::{MetricBuilder, Unit};

/// A single metric value with the dimensions and properties to emit alongside it
///
/// Dimensions and properties keep the order they were added in, which decides
/// the serialized order and which dimensions survive truncation.
#[derive(Clone, Debug, PartialEq)]
pub struct Metric {
    pub(crate) name: String,
    pub(crate) value: f64,
    pub(crate) unit: Unit,
    pub(crate) dimensions: Vec<(String, String)>,
    pub(crate) properties: Vec<(String, String)>,
    pub(crate) namespace: Option<String>,
}

impl Metric {
    pub fn builder() -> MetricBuilder {
        MetricBuilder::new()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }

    /// Dimensions in insertion order
    pub fn dimensions(&self) -> &[(String, String)] {
        &self.dimensions
    }

    /// Properties in insertion order
    pub fn properties(&self) -> &[(String, String)] {
        &self.properties
    }

    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    pub fn dimension(&self, key: &str) -> Option<&str> {
        lookup(&self.dimensions, key)
    }

    pub fn property(&self, key: &str) -> Option<&str> {
        lookup(&self.properties, key)
    }
}

pub(crate) fn lookup<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
}
