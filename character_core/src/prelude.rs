//! Prelude module for convenient imports
//!
//! ```rust
//! use character_core::prelude::*;
//! ```

// Core types
pub use crate::attribute::Attribute;
pub use crate::pool::PoolKind;
pub use crate::stats::{DamageReport, PoolHit, Stats};

// The character and its errors
pub use crate::character::{Character, CharacterError, SkillLevel};

// Abilities
pub use crate::ability::{AbilityOutcome, AbilityRegistry};

// Content
pub use crate::rules::{Rulebook, RulesError};

// Persistence
pub use crate::save::{SaveError, SaveManager};
