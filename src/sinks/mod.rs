//! The structural sinks and the debugging backend.
//!
//! [`FanoutSink`] and [`FilterSink`] hold their children as [`SharedSink`]
//! handles, so one backend can sit behind several trees at once.
//!
//! [`SharedSink`]: crate::SharedSink

pub mod fanout;
pub mod filter;
pub mod log;
pub mod null;

pub use fanout::FanoutSink;
pub use filter::FilterSink;
pub use log::LogSink;
pub use null::NullSink;
