use crate::MetricSink;

/// Discards every metric. Useful as a default when no backend is configured.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NullSink;

impl MetricSink for NullSink {
    fn set_gauge(&self, _key: &[&str], _val: f32) {}

    fn emit_key(&self, _key: &[&str], _val: f32) {}

    fn incr_counter(&self, _key: &[&str], _val: f32) {}

    fn add_sample(&self, _key: &[&str], _val: f32) {}
}
