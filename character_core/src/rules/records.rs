//! Record types for rulebook content.

use crate::character::SkillLevel;
use crate::pool::PoolKind;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A permanent adjustment to one pool's maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolModifier {
    pub pool: PoolKind,
    pub points: i32,
}

/// Base numbers for a character type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NounRecord {
    pub might: u32,
    pub speed: u32,
    pub intellect: u32,
    pub effort: u32,
    pub shins: i64,
    pub extra_points: u32,
    #[serde(default)]
    pub description: String,
}

/// A descriptor: one pool modifier plus starting money.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjectiveRecord {
    pub modifier: PoolModifier,
    pub shins: i64,
    #[serde(default)]
    pub description: String,
}

/// A focus: an optional pool modifier plus starting gear, skills, and
/// abilities. Everything defaults; a bare table is a valid verb.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerbRecord {
    #[serde(default)]
    pub modifier: Option<PoolModifier>,
    #[serde(default)]
    pub equipment: HashMap<String, u32>,
    #[serde(default)]
    pub skills: HashMap<String, SkillLevel>,
    #[serde(default)]
    pub abilities: Vec<String>,
    #[serde(default)]
    pub description: String,
}

/// Flavour text for an ability name. What the ability does lives in an
/// [`crate::ability::AbilityRegistry`], not in content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityRecord {
    #[serde(default)]
    pub description: String,
}
