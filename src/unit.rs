//! # Unit
//!
//! The closed set of units CloudWatch accepts on a metric definition
//!
//! <https://docs.aws.amazon.com/AmazonCloudWatch/latest/APIReference/API_MetricDatum.html>

use super::Error;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Unit {
    Seconds,
    Microseconds,
    Milliseconds,
    Bytes,
    Kilobytes,
    Megabytes,
    Gigabytes,
    Terabytes,
    Bits,
    Kilobits,
    Megabits,
    Gigabits,
    Terabits,
    Percent,
    Count,
    BytesPerSecond,
    KilobytesPerSecond,
    MegabytesPerSecond,
    GigabytesPerSecond,
    TerabytesPerSecond,
    BitsPerSecond,
    KilobitsPerSecond,
    MegabitsPerSecond,
    GigabitsPerSecond,
    TerabitsPerSecond,
    CountPerSecond,
    #[default]
    None,
}

impl Unit {
    pub const ALL: [Unit; 27] = [
        Unit::Seconds,
        Unit::Microseconds,
        Unit::Milliseconds,
        Unit::Bytes,
        Unit::Kilobytes,
        Unit::Megabytes,
        Unit::Gigabytes,
        Unit::Terabytes,
        Unit::Bits,
        Unit::Kilobits,
        Unit::Megabits,
        Unit::Gigabits,
        Unit::Terabits,
        Unit::Percent,
        Unit::Count,
        Unit::BytesPerSecond,
        Unit::KilobytesPerSecond,
        Unit::MegabytesPerSecond,
        Unit::GigabytesPerSecond,
        Unit::TerabytesPerSecond,
        Unit::BitsPerSecond,
        Unit::KilobitsPerSecond,
        Unit::MegabitsPerSecond,
        Unit::GigabitsPerSecond,
        Unit::TerabitsPerSecond,
        Unit::CountPerSecond,
        Unit::None,
    ];

    /// The label CloudWatch expects in the `Unit` field
    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::Seconds => "Seconds",
            Unit::Microseconds => "Microseconds",
            Unit::Milliseconds => "Milliseconds",
            Unit::Bytes => "Bytes",
            Unit::Kilobytes => "Kilobytes",
            Unit::Megabytes => "Megabytes",
            Unit::Gigabytes => "Gigabytes",
            Unit::Terabytes => "Terabytes",
            Unit::Bits => "Bits",
            Unit::Kilobits => "Kilobits",
            Unit::Megabits => "Megabits",
            Unit::Gigabits => "Gigabits",
            Unit::Terabits => "Terabits",
            Unit::Percent => "Percent",
            Unit::Count => "Count",
            Unit::BytesPerSecond => "Bytes/Second",
            Unit::KilobytesPerSecond => "Kilobytes/Second",
            Unit::MegabytesPerSecond => "Megabytes/Second",
            Unit::GigabytesPerSecond => "Gigabytes/Second",
            Unit::TerabytesPerSecond => "Terabytes/Second",
            Unit::BitsPerSecond => "Bits/Second",
            Unit::KilobitsPerSecond => "Kilobits/Second",
            Unit::MegabitsPerSecond => "Megabits/Second",
            Unit::GigabitsPerSecond => "Gigabits/Second",
            Unit::TerabitsPerSecond => "Terabits/Second",
            Unit::CountPerSecond => "Count/Second",
            Unit::None => "None",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Unit {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl FromStr for Unit {
    type Err = Error;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        Unit::ALL
            .into_iter()
            .find(|unit| unit.as_str() == label)
            .ok_or_else(|| Error::UnknownUnit(label.to_string()))
    }
}

/// Convert a metrics::Unit into the matching CloudWatch unit
///
/// CloudWatch has no binary prefixes so Kibibytes etc. use the decimal labels,
/// and it has no nanosecond unit at all.
impl From<metrics::Unit> for Unit {
    fn from(unit: metrics::Unit) -> Self {
        match unit {
            metrics::Unit::Count => Unit::Count,
            metrics::Unit::Percent => Unit::Percent,
            metrics::Unit::Seconds => Unit::Seconds,
            metrics::Unit::Milliseconds => Unit::Milliseconds,
            metrics::Unit::Microseconds => Unit::Microseconds,
            metrics::Unit::Nanoseconds => Unit::None,
            metrics::Unit::Tebibytes => Unit::Terabytes,
            metrics::Unit::Gibibytes => Unit::Gigabytes,
            metrics::Unit::Mebibytes => Unit::Megabytes,
            metrics::Unit::Kibibytes => Unit::Kilobytes,
            metrics::Unit::Bytes => Unit::Bytes,
            metrics::Unit::TerabitsPerSecond => Unit::TerabitsPerSecond,
            metrics::Unit::GigabitsPerSecond => Unit::GigabitsPerSecond,
            metrics::Unit::MegabitsPerSecond => Unit::MegabitsPerSecond,
            metrics::Unit::KilobitsPerSecond => Unit::KilobitsPerSecond,
            metrics::Unit::BitsPerSecond => Unit::BitsPerSecond,
            metrics::Unit::CountPerSecond => Unit::CountPerSecond,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels() {
        let expected = [
            "Seconds",
            "Microseconds",
            "Milliseconds",
            "Bytes",
            "Kilobytes",
            "Megabytes",
            "Gigabytes",
            "Terabytes",
            "Bits",
            "Kilobits",
            "Megabits",
            "Gigabits",
            "Terabits",
            "Percent",
            "Count",
            "Bytes/Second",
            "Kilobytes/Second",
            "Megabytes/Second",
            "Gigabytes/Second",
            "Terabytes/Second",
            "Bits/Second",
            "Kilobits/Second",
            "Megabits/Second",
            "Gigabits/Second",
            "Terabits/Second",
            "Count/Second",
            "None",
        ];

        let labels: Vec<&str> = Unit::ALL.iter().map(Unit::as_str).collect();
        assert_eq!(labels, expected);
        assert_eq!(Unit::default(), Unit::None);
    }

    #[test]
    fn parse_labels() {
        for unit in Unit::ALL {
            assert_eq!(unit.to_string().parse::<Unit>(), Ok(unit));
        }

        assert_eq!("Nanoseconds".parse::<Unit>(), Err(Error::UnknownUnit("Nanoseconds".into())));
        assert!("count".parse::<Unit>().is_err());
    }

    #[test]
    fn serialize_as_label() {
        assert_eq!(serde_json::to_string(&Unit::CountPerSecond).unwrap(), r#""Count/Second""#);
    }

    #[test]
    fn from_metrics_unit() {
        assert_eq!(Unit::from(metrics::Unit::Milliseconds), Unit::Milliseconds);
        assert_eq!(Unit::from(metrics::Unit::Kibibytes), Unit::Kilobytes);
        assert_eq!(Unit::from(metrics::Unit::Mebibytes), Unit::Megabytes);
        assert_eq!(Unit::from(metrics::Unit::Gibibytes), Unit::Gigabytes);
        assert_eq!(Unit::from(metrics::Unit::Tebibytes), Unit::Terabytes);
        assert_eq!(Unit::from(metrics::Unit::CountPerSecond), Unit::CountPerSecond);
        assert_eq!(Unit::from(metrics::Unit::Nanoseconds), Unit::None);
    }
}
