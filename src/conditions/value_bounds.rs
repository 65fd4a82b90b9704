use super::Condition;

/// Matches values strictly below `below` or strictly above `above`.
///
/// NaN never matches, since every comparison against it is false.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ValueBounds {
    pub below: Option<f32>,
    pub above: Option<f32>,
}

impl ValueBounds {
    pub const fn below(threshold: f32) -> Self {
        Self {
            below: Some(threshold),
            above: None,
        }
    }

    pub const fn above(threshold: f32) -> Self {
        Self {
            below: None,
            above: Some(threshold),
        }
    }
}

impl Condition for ValueBounds {
    fn check(&self, _key: &[&str], val: f32) -> bool {
        self.below.is_some_and(|below| val < below) || self.above.is_some_and(|above| val > above)
    }
}
