//! Pool identity and cascade order.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The three core stat pools.
///
/// Pools are addressed by this closed enum rather than by name, so an
/// unknown pool cannot reach the engine; bad names fail when content or
/// saves are parsed.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum PoolKind {
    Might,
    Speed,
    Intellect,
}

impl PoolKind {
    /// All pools, in canonical order.
    pub fn all() -> [PoolKind; 3] {
        [PoolKind::Might, PoolKind::Speed, PoolKind::Intellect]
    }

    /// The pool damage spills into when this one is drained.
    ///
    /// The order is cyclic and fixed: might feeds speed, speed feeds
    /// intellect, intellect wraps back to might.
    pub fn next(self) -> PoolKind {
        match self {
            PoolKind::Might => PoolKind::Speed,
            PoolKind::Speed => PoolKind::Intellect,
            PoolKind::Intellect => PoolKind::Might,
        }
    }

    /// Lowercase name, matching the serialized form.
    pub fn name(self) -> &'static str {
        match self {
            PoolKind::Might => "might",
            PoolKind::Speed => "speed",
            PoolKind::Intellect => "intellect",
        }
    }
}

impl fmt::Display for PoolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cascade_order_wraps_around() {
        assert_eq!(PoolKind::Might.next(), PoolKind::Speed);
        assert_eq!(PoolKind::Speed.next(), PoolKind::Intellect);
        assert_eq!(PoolKind::Intellect.next(), PoolKind::Might);
    }

    #[test]
    fn test_every_pool_is_reached_from_any_start() {
        for start in PoolKind::all() {
            let mut seen = vec![start];
            let mut current = start;
            for _ in 0..2 {
                current = current.next();
                seen.push(current);
            }
            for kind in PoolKind::all() {
                assert!(seen.contains(&kind));
            }
        }
    }

    #[test]
    fn test_serialized_names_are_lowercase() {
        assert_eq!(serde_json::to_string(&PoolKind::Might).unwrap(), "\"might\"");
        let back: PoolKind = serde_json::from_str("\"intellect\"").unwrap();
        assert_eq!(back, PoolKind::Intellect);
    }

    #[test]
    fn test_unknown_pool_name_fails_to_parse() {
        assert!(serde_json::from_str::<PoolKind>("\"luck\"").is_err());
    }

    #[test]
    fn test_display_matches_name() {
        for kind in PoolKind::all() {
            assert_eq!(kind.to_string(), kind.name());
        }
    }
}
