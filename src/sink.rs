use std::{fmt, sync::Arc};

/// A destination for metric observations.
///
/// Every method is fire-and-forget: nothing is returned and nothing may be
/// assumed to fail. A backend that cannot deliver a value reports that
/// out-of-band, for example through an internal event.
///
/// Keys are ordered sequences of segments such as `["server", "requests"]`.
/// They are handed to sinks as a shared borrow, so every sink in a tree sees
/// the same, unmodified segments.
pub trait MetricSink: Send + Sync {
    /// Retain `val` as the current value of `key`.
    fn set_gauge(&self, key: &[&str], val: f32);

    /// Record `val` as a single observation at this instant.
    fn emit_key(&self, key: &[&str], val: f32);

    /// Add `val` to the running total of `key`.
    fn incr_counter(&self, key: &[&str], val: f32);

    /// Add `val` to the sample distribution of `key`, typically a timing.
    fn add_sample(&self, key: &[&str], val: f32);

    /// Dispatch to the method named by `op`.
    ///
    /// Backends may override this, for example with a batching fast path.
    /// Composite sinks never route through it: they use [`MetricOp::apply`]
    /// so each child sees the named operation.
    fn record(&self, op: MetricOp, key: &[&str], val: f32) {
        op.apply(self, key, val);
    }
}

/// A sink handle that can be placed in any number of sink trees.
pub type SharedSink = Arc<dyn MetricSink>;

/// The four operations of [`MetricSink`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MetricOp {
    Gauge,
    Key,
    Counter,
    Sample,
}

impl MetricOp {
    pub const ALL: [MetricOp; 4] = [Self::Gauge, Self::Key, Self::Counter, Self::Sample];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Gauge => "set_gauge",
            Self::Key => "emit_key",
            Self::Counter => "incr_counter",
            Self::Sample => "add_sample",
        }
    }

    /// Call the method of `sink` named by this op.
    pub fn apply<S: MetricSink + ?Sized>(self, sink: &S, key: &[&str], val: f32) {
        match self {
            Self::Gauge => sink.set_gauge(key, val),
            Self::Key => sink.emit_key(key, val),
            Self::Counter => sink.incr_counter(key, val),
            Self::Sample => sink.add_sample(key, val),
        }
    }
}

impl fmt::Display for MetricOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

macro_rules! forward_sink_impl {
    ($($ty:ty),+) => {
        $(
            impl<S: MetricSink + ?Sized> MetricSink for $ty {
                fn set_gauge(&self, key: &[&str], val: f32) {
                    (**self).set_gauge(key, val);
                }

                fn emit_key(&self, key: &[&str], val: f32) {
                    (**self).emit_key(key, val);
                }

                fn incr_counter(&self, key: &[&str], val: f32) {
                    (**self).incr_counter(key, val);
                }

                fn add_sample(&self, key: &[&str], val: f32) {
                    (**self).add_sample(key, val);
                }

                fn record(&self, op: MetricOp, key: &[&str], val: f32) {
                    (**self).record(op, key, val);
                }
            }
        )+
    };
}

forward_sink_impl!(&S, Box<S>, Arc<S>);
