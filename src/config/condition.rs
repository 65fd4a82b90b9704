use regex::Regex;
use serde::{Deserialize, Serialize};
use snafu::{ResultExt, ensure};

use super::{BuildError, EmptyPrefixSnafu, InvalidPatternSnafu, NanBoundSnafu};
use crate::conditions::{Condition, KeyPattern, KeyPrefix, Not, ValueBounds};

/// A condition, tagged by `type`.
///
/// ```toml
/// type = "key_prefix"
/// prefix = ["runtime", "gc"]
/// ```
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case", deny_unknown_fields)]
pub enum ConditionConfig {
    KeyPrefix {
        prefix: Vec<String>,
    },
    KeyPattern {
        pattern: String,
    },
    ValueBounds {
        below: Option<f32>,
        above: Option<f32>,
    },
    Not {
        condition: Box<ConditionConfig>,
    },
}

impl ConditionConfig {
    /// # Errors
    ///
    /// Returns an error for an empty `key_prefix`, an unparsable `key_pattern`
    /// or a NaN `value_bounds` bound, including inside `not`.
    pub fn build(&self) -> Result<Box<dyn Condition>, BuildError> {
        let condition: Box<dyn Condition> = match self {
            Self::KeyPrefix { prefix } => {
                ensure!(!prefix.is_empty(), EmptyPrefixSnafu);
                Box::new(KeyPrefix::new(prefix.iter().cloned()))
            }
            Self::KeyPattern { pattern } => {
                let regex = Regex::new(pattern).context(InvalidPatternSnafu { pattern })?;
                Box::new(KeyPattern::new(regex))
            }
            Self::ValueBounds { below, above } => {
                ensure!(
                    !below.is_some_and(f32::is_nan) && !above.is_some_and(f32::is_nan),
                    NanBoundSnafu
                );
                Box::new(ValueBounds {
                    below: *below,
                    above: *above,
                })
            }
            Self::Not { condition } => Box::new(Not::boxed(condition.build()?)),
        };
        Ok(condition)
    }
}
