use super::Condition;

/// Matches keys whose leading segments equal `prefix`, segment by segment.
///
/// `["http", "requests"]` matches `["http", "requests", "count"]` but not
/// `["http", "requests_total"]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyPrefix {
    prefix: Vec<String>,
}

impl KeyPrefix {
    pub fn new<I, S>(prefix: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            prefix: prefix.into_iter().map(Into::into).collect(),
        }
    }

    pub fn prefix(&self) -> &[String] {
        &self.prefix
    }
}

impl Condition for KeyPrefix {
    fn check(&self, key: &[&str], _val: f32) -> bool {
        key.len() >= self.prefix.len()
            && self
                .prefix
                .iter()
                .zip(key)
                .all(|(expected, segment)| expected == segment)
    }
}
