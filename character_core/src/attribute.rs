//! A single depletable resource pool.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A resource pool with a current value and a maximum.
///
/// Pools always satisfy `current <= max`. Damage drains `current`,
/// healing refills it, and upgrades move `max` itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub current: u32,
    pub max: u32,
}

impl Attribute {
    /// Create a full pool: `current == max == value`.
    pub fn new(value: u32) -> Self {
        Attribute {
            current: value,
            max: value,
        }
    }

    /// Drain up to `amount` points from the pool.
    ///
    /// Returns the overflow: the portion of `amount` the pool could not
    /// absorb because `current` hit zero. Zero means the hit was fully
    /// absorbed, so callers can tell "drained exactly" apart from
    /// "drained with leftover" and cascade the difference.
    pub fn reduce(&mut self, amount: u32) -> u32 {
        let absorbed = self.current.min(amount);
        self.current -= absorbed;
        amount - absorbed
    }

    /// Refill the pool, clamped at `max`. Excess healing is discarded.
    pub fn increase(&mut self, amount: u32) {
        self.current = self.current.saturating_add(amount).min(self.max);
    }

    /// Permanently adjust `max` by a signed amount.
    ///
    /// New capacity arrives filled: a positive upgrade raises `current`
    /// by the same amount. A negative upgrade lowers `max` (saturating
    /// at zero) and clamps `current` down with it.
    pub fn upgrade(&mut self, amount: i32) {
        if amount >= 0 {
            let gain = amount as u32;
            self.max = self.max.saturating_add(gain);
            self.current = self.current.saturating_add(gain).min(self.max);
        } else {
            self.max = self.max.saturating_sub(amount.unsigned_abs());
            self.current = self.current.min(self.max);
        }
    }

    /// Whether the pool is drained to zero.
    pub fn is_empty(&self) -> bool {
        self.current == 0
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.current, self.max)
    }
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_absorbed_plus_overflow_equals_amount(start in 0u32..1000, hit in 0u32..2000) {
            let mut pool = Attribute::new(start);
            let before = pool.current;
            let overflow = pool.reduce(hit);
            let absorbed = before - pool.current;
            prop_assert_eq!(absorbed + overflow, hit);
            prop_assert_eq!(overflow, hit.saturating_sub(start));
        }

        #[test]
        fn prop_invariant_holds_under_any_op_sequence(
            start in 0u32..200,
            ops in prop::collection::vec((0u8..3, 0u32..50), 0..40),
        ) {
            let mut pool = Attribute::new(start);
            for (op, amount) in ops {
                match op {
                    0 => {
                        pool.reduce(amount);
                    }
                    1 => pool.increase(amount),
                    _ => pool.upgrade(amount as i32 - 25),
                }
                prop_assert!(pool.current <= pool.max);
            }
        }

        #[test]
        fn prop_increase_never_exceeds_max(start in 0u32..500, drain in 0u32..500, heal in 0u32..1000) {
            let mut pool = Attribute::new(start);
            pool.reduce(drain);
            pool.increase(heal);
            prop_assert!(pool.current <= pool.max);
            prop_assert_eq!(pool.max, start);
        }
    }
}
