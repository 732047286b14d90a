use super::*;

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use serde_json::{json, Value};
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn logger(config: Config) -> MetricLogger {
        let clock = FixedClock(Utc.with_ymd_and_hms(2015, 9, 28, 9, 0, 0).unwrap());
        MetricLogger::with_clock(Arc::new(clock), config)
    }

    #[test]
    fn simple_test() {
        let port = format!("{}", 7779);
        let metric = Metric::builder()
            .specify_metric("runtime", 4.0, Some(Unit::from(metrics::Unit::Milliseconds)))
            .add_dimension("Address", "10.172.207.225")
            .unwrap()
            .add_dimension("Port", port)
            .unwrap()
            .add_property("RequestId", "ABC123")
            .unwrap()
            .build()
            .unwrap();

        let mut output = Vec::new();
        logger(Config::default().default_namespace("namespace"))
            .write(&metric, &mut output)
            .unwrap();
        let output_str = std::str::from_utf8(&output).unwrap();
        assert_eq!(
            output_str,
            r#"{"_aws":{"Timestamp":1443430800,"CloudWatchMetrics":[{"Namespace":"namespace","Dimensions":[["Address","Port"]],"Metrics":[{"Name":"runtime","Unit":"Milliseconds"}]}]},"Address":"10.172.207.225","Port":"7779","RequestId":"ABC123","runtime":4}
"#
        );
    }

    #[test]
    fn thirteen_dimensions() {
        let keys = [
            "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten", "Eleven", "Twelve",
            "Thirteen",
        ];
        let mut builder = MetricBuilder::new();
        builder.specify_metric("time", 100.0, Some(Unit::Milliseconds));
        for (i, key) in keys.iter().enumerate() {
            builder.add_dimension(*key, (i + 1).to_string()).unwrap();
        }
        let metric = builder.build().unwrap();
        assert_eq!(metric.dimensions().len(), 13);

        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .without_time()
            .finish();
        let json = tracing::subscriber::with_default(subscriber, || {
            logger(Config::default()).serializer().serialize_metric(&metric)
        });

        let value: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["_aws"]["CloudWatchMetrics"][0]["Dimensions"], json!([&keys[..MAX_DIMENSIONS]]));
        for (i, key) in keys.iter().enumerate() {
            if i < MAX_DIMENSIONS {
                assert_eq!(value[*key], (i + 1).to_string());
            } else {
                assert!(value.get(*key).is_none(), "{key} should have been dropped");
            }
        }

        let logs = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        assert!(logs.contains("dropping 3 dimensions"), "{logs}");
    }

    #[test]
    fn documents_always_parse() {
        let names = ["a", "\"", "\\", "\u{0}", "ünïcödé", "{\"_aws\":1}", " "];
        let values = [0.0, -0.0, 1.5, -42.0, f64::MAX, f64::MIN_POSITIVE, f64::NAN];
        let logger = logger(Config::default());

        for name in names {
            for value in values {
                let metric = Metric::builder()
                    .specify_metric(name, value, None)
                    .add_dimension(name, name)
                    .unwrap()
                    .add_property("p", name)
                    .unwrap()
                    .build()
                    .unwrap();
                let json = logger.serializer().serialize_metric(&metric);
                let parsed: Value = serde_json::from_str(&json).unwrap_or_else(|e| panic!("{json}: {e}"));
                assert_eq!(parsed["_aws"]["CloudWatchMetrics"][0]["Metrics"][0]["Name"], name);
            }
        }
    }

    #[test]
    fn metric_named_aws_overwrites_metadata() {
        let metric = Metric::builder().specify_metric("_aws", 1.0, None).build().unwrap();
        let json = logger(Config::default()).serializer().serialize_metric(&metric);

        assert!(json.starts_with(r#"{"_aws":{"Timestamp":"#));
        assert!(json.ends_with(r#","_aws":1}"#));

        let value: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["_aws"], 1);
    }
}
