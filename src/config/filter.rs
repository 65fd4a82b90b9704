use serde::{Deserialize, Serialize};

use super::{BuildError, ConditionConfig};
use crate::{SharedSink, sinks::FilterSink};

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct FilterConfig {
    /// Checked in order; a metric matching any of them is dropped.
    #[serde(default)]
    pub conditions: Vec<ConditionConfig>,
}

impl FilterConfig {
    /// # Errors
    ///
    /// Returns the error of the first condition that fails to build.
    pub fn build(&self, inner: SharedSink) -> Result<FilterSink, BuildError> {
        let conditions = self
            .conditions
            .iter()
            .map(ConditionConfig::build)
            .collect::<Result<Vec<_>, _>>()?;

        debug!(message = "Built filter sink.", conditions = conditions.len());
        Ok(FilterSink::new(inner, conditions))
    }
}
