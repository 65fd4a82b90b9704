use serde::{Deserialize, Serialize};

use crate::{SharedSink, sinks::FanoutSink};

#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct FanoutConfig {
    /// Catch panics from individual sinks so the remaining sinks still
    /// receive the metric.
    #[serde(default)]
    pub isolate_panics: bool,
}

impl FanoutConfig {
    pub fn build(&self, sinks: Vec<SharedSink>) -> FanoutSink {
        debug!(
            message = "Built fanout sink.",
            sinks = sinks.len(),
            isolate_panics = self.isolate_panics,
        );
        FanoutSink::new(sinks).isolate_panics(self.isolate_panics)
    }
}
