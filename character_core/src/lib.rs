//! character_core - Core character and resource-pool library
//!
//! This library provides:
//! - Attribute: a depletable pool with a current value and a maximum
//! - Stats: the three core pools with the damage-overflow cascade
//! - Character: the playable entity with budget, gear, skills, abilities
//! - AbilityRegistry: content-defined effects with engine-enforced
//!   passive idempotency
//! - Rulebook: archetype and ability content loaded from TOML
//! - SaveManager: versioned JSON snapshots, newest-wins loading

pub mod ability;
pub mod attribute;
pub mod character;
pub mod pool;
pub mod prelude;
pub mod rules;
pub mod save;
pub mod stats;

// Re-export core types for convenience
pub use ability::{AbilityEffect, AbilityOutcome, AbilityRegistry};
pub use attribute::Attribute;
pub use character::{Character, CharacterError, SkillLevel};
pub use pool::PoolKind;
pub use rules::{Rulebook, RulesError};
pub use save::{SaveError, SaveFile, SaveManager, SAVE_FORMAT_VERSION};
pub use stats::{DamageReport, PoolHit, Stats};
