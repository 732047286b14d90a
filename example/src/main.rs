use embedded_metric_format::{Error, Metric, MetricLogger, Unit};
use std::time::Instant;

fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::filter::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .compact()
        .init();

    let logger = MetricLogger::configure(|config| {
        if let Ok(namespace) = std::env::var("METRICS_NAMESPACE") {
            config.default_namespace = namespace;
        }
    });

    let start = Instant::now();
    let checksum: u64 = (0..1_000_000u64).fold(0, |acc, n| acc.wrapping_mul(31).wrapping_add(n));
    let elapsed = start.elapsed();
    tracing::info!(checksum, "finished work");

    let metric = Metric::builder()
        .specify_metric("time", elapsed.as_secs_f64() * 1000.0, Some(Unit::Milliseconds))
        .add_dimension("functionVersion", "$LATEST")?
        .add_dimension("functionName", env!("CARGO_PKG_NAME"))?
        .add_property("checksum", checksum.to_string())?
        .build()?;

    logger.log(&metric);
    Ok(())
}
