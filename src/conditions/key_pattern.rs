use regex::Regex;

use super::Condition;

/// Matches keys whose segments, joined with `.`, contain a match for the
/// regex. Anchor the pattern to match the whole key.
#[derive(Clone, Debug)]
pub struct KeyPattern {
    regex: Regex,
}

impl KeyPattern {
    pub fn new(regex: Regex) -> Self {
        Self { regex }
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

impl Condition for KeyPattern {
    fn check(&self, key: &[&str], _val: f32) -> bool {
        self.regex.is_match(&key.join("."))
    }
}
