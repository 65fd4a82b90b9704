use std::fmt;

use crate::{MetricOp, MetricSink, SharedSink, conditions::Condition};

/// Forwards a call to its inner sink unless one of its conditions matches.
///
/// Conditions are checked in order and checking stops at the first match. A
/// suppressed call has no effect whatsoever. With no conditions every call
/// passes through.
pub struct FilterSink {
    inner: SharedSink,
    conditions: Vec<Box<dyn Condition>>,
}

impl FilterSink {
    pub fn new(inner: SharedSink, conditions: Vec<Box<dyn Condition>>) -> Self {
        Self { inner, conditions }
    }

    #[must_use]
    pub fn with_condition(mut self, condition: impl Condition + 'static) -> Self {
        self.conditions.push(Box::new(condition));
        self
    }

    pub fn inner(&self) -> &SharedSink {
        &self.inner
    }

    /// The number of conditions.
    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    fn suppressed(&self, key: &[&str], val: f32) -> bool {
        self.conditions.iter().any(|c| c.check(key, val))
    }

    fn forward(&self, op: MetricOp, key: &[&str], val: f32) {
        if !self.suppressed(key, val) {
            op.apply(&*self.inner, key, val);
        }
    }
}

impl fmt::Debug for FilterSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterSink")
            .field("conditions", &self.conditions.len())
            .finish_non_exhaustive()
    }
}

impl MetricSink for FilterSink {
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
