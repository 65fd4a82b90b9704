//! Filter predicates.
//!
//! A [`Condition`] decides whether a metric should be dropped. Conditions are
//! pure: the same key and value always produce the same answer, and checking
//! has no side effects.

pub mod key_pattern;
pub mod key_prefix;
pub mod not;
pub mod value_bounds;

pub use key_pattern::KeyPattern;
pub use key_prefix::KeyPrefix;
pub use not::Not;
pub use value_bounds::ValueBounds;

pub trait Condition: Send + Sync {
    /// Returns `true` when the metric should be suppressed.
    fn check(&self, key: &[&str], val: f32) -> bool;
}

impl<F> Condition for F
where
    F: Fn(&[&str], f32) -> bool + Send + Sync,
{
    fn check(&self, key: &[&str], val: f32) -> bool {
        self(key, val)
    }
}
