use crate::{MetricOp, MetricSink};

/// Writes every call to the `tracing` log at the info level.
///
/// Meant for debugging a sink tree: put one behind a fanout next to the real
/// backend and watch what reaches it.
#[derive(Clone, Debug, Default)]
pub struct LogSink {
    name: Option<String>,
}

impl LogSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tag every line with `sink = name`.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }

    fn log(&self, op: MetricOp, key: &[&str], val: f32) {
        info!(
            message = "Metric received.",
            sink = self.name.as_deref().unwrap_or("log"),
            op = %op,
            key = %key.join("."),
            value = f64::from(val),
        );
    }
}

impl MetricSink for LogSink {
    fn set_gauge(&self, key: &[&str], val: f32) {
        self.log(MetricOp::Gauge, key, val);
    }

    fn emit_key(&self, key: &[&str], val: f32) {
        self.log(MetricOp::Key, key, val);
    }

    fn incr_counter(&self, key: &[&str], val: f32) {
        self.log(MetricOp::Counter, key, val);
    }

    fn add_sample(&self, key: &[&str], val: f32) {
        self.log(MetricOp::Sample, key, val);
    }
}
