use std::{
    any::Any,
    fmt,
    panic::{self, AssertUnwindSafe},
};

use crate::{MetricOp, MetricSink, SharedSink, internal_events::FanoutSinkPanicked};

/// Forwards every call to each of its sinks, in order.
///
/// The sink list is fixed at construction. An empty fanout behaves like
/// [`NullSink`](super::NullSink).
///
/// Each child receives the named operation itself, never
/// [`record`](MetricSink::record), so a backend's `record` override is not
/// consulted.
///
/// By default a panic in one sink unwinds out of the fanout and the sinks
/// after it never see that call. With [`isolate_panics`](Self::isolate_panics)
/// each call is wrapped in [`catch_unwind`](std::panic::catch_unwind): the
/// panic is reported as an internal event and the remaining sinks still run.
///
/// Isolation depends on unwinding. A binary built with `panic = "abort"`
/// still terminates on the first panicking sink, isolated or not.
#[derive(Default)]
pub struct FanoutSink {
    sinks: Vec<SharedSink>,
    isolate_panics: bool,
}

impl FanoutSink {
    pub fn new(sinks: Vec<SharedSink>) -> Self {
        Self {
            sinks,
            isolate_panics: false,
        }
    }

    /// Catch panics from individual sinks and keep forwarding.
    ///
    /// Only effective under `panic = "unwind"`; with `panic = "abort"` the
    /// process terminates regardless.
    #[must_use]
    pub fn isolate_panics(mut self, isolate: bool) -> Self {
        self.isolate_panics = isolate;
        self
    }

    pub fn sinks(&self) -> &[SharedSink] {
        &self.sinks
    }

    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }

    fn forward(&self, op: MetricOp, key: &[&str], val: f32) {
        if !self.isolate_panics {
            for sink in &self.sinks {
                op.apply(&**sink, key, val);
            }
            return;
        }

        for (index, sink) in self.sinks.iter().enumerate() {
            let result = panic::catch_unwind(AssertUnwindSafe(|| op.apply(&**sink, key, val)));
            if let Err(payload) = result {
                emit!(FanoutSinkPanicked {
                    index,
                    op,
                    error: panic_message(&*payload),
                });
            }
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("unknown panic payload")
}

impl FromIterator<SharedSink> for FanoutSink {
    fn from_iter<I: IntoIterator<Item = SharedSink>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl fmt::Debug for FanoutSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FanoutSink")
            .field("sinks", &self.sinks.len())
            .field("isolate_panics", &self.isolate_panics)
            .finish()
    }
}

impl MetricSink for FanoutSink {
    fn set_gauge(&self, key: &[&str], val: f32) {
        self.forward(MetricOp::Gauge, key, val);
    }

    fn emit_key(&self, key: &[&str], val: f32) {
        self.forward(MetricOp::Key, key, val);
    }

    fn incr_counter(&self, key: &[&str], val: f32) {
        self.forward(MetricOp::Counter, key, val);
    }

    fn add_sample(&self, key: &[&str], val: f32) {
        self.forward(MetricOp::Sample, key, val);
    }
}
