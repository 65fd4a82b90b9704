use std::{
    io,
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
};

use parking_lot::Mutex;
use tracing::Subscriber;

use crate::{MetricOp, MetricSink};

#[derive(Clone, Debug, PartialEq)]
pub struct RecordedCall {
    pub op: MetricOp,
    pub key: Vec<String>,
    pub val: f32,
}

/// A sink that remembers every call made to it, in order.
#[derive(Debug, Default)]
pub struct RecordingSink {
    calls: Mutex<Vec<RecordedCall>>,
}

impl RecordingSink {
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().clone()
    }

    pub fn keys(&self) -> Vec<Vec<String>> {
        self.calls.lock().iter().map(|c| c.key.clone()).collect()
    }

    pub fn values(&self) -> Vec<f32> {
        self.calls.lock().iter().map(|c| c.val).collect()
    }

    pub fn clear(&self) {
        self.calls.lock().clear();
    }

    fn push(&self, op: MetricOp, key: &[&str], val: f32) {
        self.calls.lock().push(RecordedCall {
            op,
            key: key.iter().map(|s| (*s).to_owned()).collect(),
            val,
        });
    }
}

impl MetricSink for RecordingSink {
    fn set_gauge(&self, key: &[&str], val: f32) {
        self.push(MetricOp::Gauge, key, val);
    }

    fn emit_key(&self, key: &[&str], val: f32) {
        self.push(MetricOp::Key, key, val);
    }

    fn incr_counter(&self, key: &[&str], val: f32) {
        self.push(MetricOp::Counter, key, val);
    }

    fn add_sample(&self, key: &[&str], val: f32) {
        self.push(MetricOp::Sample, key, val);
    }
}

/// Counts calls per named operation. Its `record` override only counts
/// itself and never reaches the named operations.
#[derive(Debug, Default)]
pub struct OpCountingSink {
    ops: [AtomicUsize; 4],
    records: AtomicUsize,
}

impl OpCountingSink {
    /// Calls per op, in [`MetricOp::ALL`] order.
    pub fn counts(&self) -> [usize; 4] {
        self.ops.each_ref().map(|n| n.load(Ordering::Relaxed))
    }

    pub fn records(&self) -> usize {
        self.records.load(Ordering::Relaxed)
    }

    fn hit(&self, op: MetricOp) {
        self.ops[op as usize].fetch_add(1, Ordering::Relaxed);
    }
}

impl MetricSink for OpCountingSink {
    fn set_gauge(&self, _key: &[&str], _val: f32) {
        self.hit(MetricOp::Gauge);
    }

    fn emit_key(&self, _key: &[&str], _val: f32) {
        self.hit(MetricOp::Key);
    }

    fn incr_counter(&self, _key: &[&str], _val: f32) {
        self.hit(MetricOp::Counter);
    }

    fn add_sample(&self, _key: &[&str], _val: f32) {
        self.hit(MetricOp::Sample);
    }

    fn record(&self, _op: MetricOp, _key: &[&str], _val: f32) {
        self.records.fetch_add(1, Ordering::Relaxed);
    }
}

/// A sink that panics on every call.
#[derive(Debug, Default)]
pub struct PanickingSink;

impl MetricSink for PanickingSink {
    fn set_gauge(&self, _key: &[&str], _val: f32) {
        panic!("set_gauge exploded");
    }

    fn emit_key(&self, _key: &[&str], _val: f32) {
        panic!("emit_key exploded");
    }

    fn incr_counter(&self, _key: &[&str], _val: f32) {
        panic!("incr_counter exploded");
    }

    fn add_sample(&self, _key: &[&str], _val: f32) {
        panic!("add_sample exploded");
    }
}

/// Collects the output of a JSON `fmt` subscriber in memory.
#[derive(Clone, Debug, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    pub fn subscriber(&self) -> impl Subscriber + Send + Sync + 'static {
        let writer = self.clone();
        tracing_subscriber::fmt()
            .json()
            .flatten_event(true)
            .with_writer(move || writer.clone())
            .finish()
    }

    /// Every line written so far, parsed.
    pub fn lines(&self) -> Vec<serde_json::Value> {
        let buf = self.0.lock();
        String::from_utf8_lossy(&buf)
            .lines()
            .map(|line| serde_json::from_str(line).expect("log line is not JSON"))
            .collect()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

pub fn keys(keys: &[&[&str]]) -> Vec<Vec<String>> {
    keys.iter()
        .map(|key| key.iter().map(|s| (*s).to_owned()).collect())
        .collect()
}
