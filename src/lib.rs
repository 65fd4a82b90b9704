//! Composable metric sinks.
//!
//! A [`MetricSink`] accepts four kinds of observations (gauges, keyed events,
//! counters and timing samples). Backends implement the trait; this crate
//! provides the structural pieces that sit in front of them:
//!
//! * [`sinks::NullSink`] discards everything,
//! * [`sinks::FanoutSink`] broadcasts every call to an ordered list of sinks,
//! * [`sinks::FilterSink`] drops calls that any of its [`conditions::Condition`]s match,
//! * [`sinks::LogSink`] writes every call to the `tracing` log.
//!
//! Trees of sinks are assembled once, either directly or from the serde types in
//! [`config`], and then shared across threads. All calls are synchronous and run
//! on the caller's thread.

#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::float_cmp)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)] // many false positives in this package

#[macro_use]
extern crate tracing;

pub mod conditions;
pub mod config;
#[macro_use]
pub mod internal_events;
pub mod sink;
pub mod sinks;
#[cfg(test)]
mod test_util;
pub mod trace;

pub use sink::{MetricOp, MetricSink, SharedSink};
