//! # EMF
//!
//! Helpers for serializing CloudWatch Embedded Metrics via serde_json
//!
//! <https://docs.aws.amazon.com/AmazonCloudWatch/latest/monitoring/CloudWatch_Embedded_Metric_Format_Specification.html>

use super::Unit;
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

/// Largest magnitude an f64 can hold while every integer below it stays exact
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

#[derive(Serialize)]
pub struct EmbeddedMetrics<'a> {
    #[serde(rename = "_aws")]
    pub aws: EmbeddedMetricsAws<'a>,
    #[serde(flatten)]
    pub dimensions: Members<'a>,
    #[serde(flatten)]
    pub properties: Members<'a>,
    #[serde(flatten)]
    pub value: MetricValue<'a>,
}

#[derive(Serialize)]
pub struct EmbeddedMetricsAws<'a> {
    #[serde(rename = "Timestamp")]
    pub timestamp: i64,
    // This crate never uses more than one namespace in a metrics document
    #[serde(rename = "CloudWatchMetrics")]
    pub cloudwatch_metrics: [EmbeddedNamespace<'a>; 1],
}

#[derive(Serialize)]
pub struct EmbeddedNamespace<'a> {
    #[serde(rename = "Namespace")]
    pub namespace: &'a str,
    // This crate builds a single dimension set with all dimensions
    #[serde(rename = "Dimensions")]
    pub dimensions: [Vec<&'a str>; 1],
    #[serde(rename = "Metrics")]
    pub metrics: [EmbeddedMetric<'a>; 1],
}

#[derive(Serialize)]
pub struct EmbeddedMetric<'a> {
    #[serde(rename = "Name")]
    pub name: &'a str,
    #[serde(rename = "Unit")]
    pub unit: Unit,
}

/// Top level (key, value) string members, written in slice order
///
/// Keys are not de-duplicated, a reader that collapses repeated keys keeps the last one.
pub struct Members<'a>(pub &'a [(String, String)]);

impl Serialize for Members<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|(k, v)| (k, v)))
    }
}

/// The metric name mapped to its value
pub struct MetricValue<'a> {
    pub name: &'a str,
    pub value: f64,
}

impl Serialize for MetricValue<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        // Whole numbers are written without a fraction except -0, serde_json writes non-finite values as null
        let negative_zero = self.value == 0.0 && self.value.is_sign_negative();
        if self.value.fract() == 0.0 && self.value.abs() < MAX_EXACT_INTEGER && !negative_zero {
            map.serialize_entry(self.name, &(self.value as i64))?;
        } else {
            map.serialize_entry(self.name, &self.value)?;
        }
        map.end()
    }
}
