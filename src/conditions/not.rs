use std::fmt;

use super::Condition;

/// Inverts a condition, turning a block rule into an allow rule.
///
/// `Not::new(KeyPrefix::new(["app"]))` drops every metric outside the `app`
/// namespace.
pub struct Not(Box<dyn Condition>);

impl Not {
    pub fn new(condition: impl Condition + 'static) -> Self {
        Self(Box::new(condition))
    }

    pub fn boxed(condition: Box<dyn Condition>) -> Self {
        Self(condition)
    }
}

impl Condition for Not {
    fn check(&self, key: &[&str], val: f32) -> bool {
        !self.0.check(key, val)
    }
}

impl fmt::Debug for Not {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Not").finish_non_exhaustive()
    }
}
