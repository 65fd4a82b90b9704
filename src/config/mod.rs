//! Serde types describing filters and fanouts.
//!
//! These types only turn already-deserialized values into sinks. Reading
//! configuration files is left to the application.

mod condition;
mod fanout;
mod filter;

use snafu::Snafu;

pub use condition::ConditionConfig;
pub use fanout::FanoutConfig;
pub use filter::FilterConfig;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum BuildError {
    #[snafu(display("Invalid key pattern {pattern:?}: {source}"))]
    InvalidPattern {
        pattern: String,
        source: regex::Error,
    },
    #[snafu(display("Key prefix must contain at least one segment"))]
    EmptyPrefix,
    #[snafu(display("Value bounds must not be NaN"))]
    NanBound,
}
