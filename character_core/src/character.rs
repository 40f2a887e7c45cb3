//! The playable character: pools, budget, gear, skills, abilities.

use crate::ability::{AbilityOutcome, AbilityRegistry};
use crate::attribute::Attribute;
use crate::pool::PoolKind;
use crate::rules::{Rulebook, RulesError};
use crate::stats::{DamageReport, Stats};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

/// Skill proficiency. Absence from the skill map means untrained.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum SkillLevel {
    Trained,
    Specialised,
}

impl fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkillLevel::Trained => f.write_str("trained"),
            SkillLevel::Specialised => f.write_str("specialised"),
        }
    }
}

/// A character operation that was rejected.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CharacterError {
    #[error("no more points to spend")]
    NoPointsToSpend,
    #[error("tried to spend {requested} points with only {available} left")]
    NotEnoughPoints { requested: u32, available: u32 },
    #[error("ability '{0}' is already known")]
    DuplicateAbility(String),
    #[error("ability '{0}' is not known")]
    AbilityNotKnown(String),
    #[error("no effect registered for ability '{0}'")]
    NoEffectRegistered(String),
    #[error("skill '{0}' is not known")]
    SkillNotKnown(String),
    #[error("skill '{0}' is already specialised")]
    SkillAlreadySpecialised(String),
}

/// A playable character built from an archetype sentence:
/// "I am a(n) {adjective} {noun} who {verb}".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub name: String,
    pub noun: String,
    pub adjective: String,
    pub verb: String,

    pub stats: Stats,
    /// Separate pool; takes no part in the damage cascade.
    pub effort: Attribute,
    pub armour: u32,
    /// Currency. May legally go negative.
    pub shins: i64,
    /// Character-build points not yet spent into pools.
    pub extra_points: u32,

    #[serde(default)]
    pub equipment: HashMap<String, u32>,
    #[serde(default)]
    pub skills: HashMap<String, SkillLevel>,
    #[serde(default)]
    pub abilities: Vec<String>,
    /// Times each ability's effect has been applied.
    #[serde(default)]
    pub applied_abilities: HashMap<String, u32>,
}

impl Character {
    /// Build a character from the rulebook.
    ///
    /// All three archetype names must exist; an unknown one is a loud
    /// error, never a silent default. Starting equipment, skills, and
    /// abilities come from the verb record. Granting here is data only:
    /// passive effects are not applied at build time, they take hold on
    /// first use.
    pub fn new(
        name: impl Into<String>,
        noun: &str,
        adjective: &str,
        verb: &str,
        rules: &Rulebook,
    ) -> Result<Self, RulesError> {
        let noun_record = rules.noun(noun)?;
        let adjective_record = rules.adjective(adjective)?;
        let verb_record = rules.verb(verb)?;

        Ok(Character {
            name: name.into(),
            noun: noun.to_string(),
            adjective: adjective.to_string(),
            verb: verb.to_string(),
            stats: Stats::from_archetype(noun_record, adjective_record, verb_record),
            effort: Attribute::new(noun_record.effort),
            armour: 0,
            shins: noun_record.shins + adjective_record.shins,
            extra_points: noun_record.extra_points,
            equipment: verb_record.equipment.clone(),
            skills: verb_record.skills.clone(),
            abilities: verb_record.abilities.clone(),
            applied_abilities: HashMap::new(),
        })
    }

    /// The archetype sentence this character was built from.
    pub fn descriptor(&self) -> String {
        format!(
            "I am a(n) {} {} who {}",
            self.adjective, self.noun, self.verb
        )
    }

    // === Damage and healing ===

    /// Damage one pool, cascading overflow into the next.
    pub fn take_damage(&mut self, pool: PoolKind, amount: u32) -> DamageReport {
        self.stats.damage(pool, amount)
    }

    /// Refill one pool. Never cascades.
    pub fn heal(&mut self, pool: PoolKind, amount: u32) {
        self.stats.heal(pool, amount);
    }

    /// All three core pools at zero. Terminal for play.
    pub fn is_defeated(&self) -> bool {
        self.stats.is_depleted()
    }

    // === Build budget ===

    /// Spend build points to permanently grow a pool.
    ///
    /// Rejected spends change nothing. Ability effects do not come
    /// through here; they grow pools via [`Stats::add_pool`] and are
    /// exempt from the budget.
    pub fn add_pool(&mut self, pool: PoolKind, points: u32) -> Result<(), CharacterError> {
        if self.extra_points == 0 {
            return Err(CharacterError::NoPointsToSpend);
        }
        if points > self.extra_points {
            return Err(CharacterError::NotEnoughPoints {
                requested: points,
                available: self.extra_points,
            });
        }
        self.extra_points -= points;
        self.stats.add_pool(pool, points);
        Ok(())
    }

    pub fn has_unspent_points(&self) -> bool {
        self.extra_points > 0
    }

    // === Abilities ===

    /// Learn a new ability. Passive abilities take effect immediately.
    pub fn grant_ability(
        &mut self,
        name: impl Into<String>,
        registry: &AbilityRegistry,
    ) -> Result<(), CharacterError> {
        let name = name.into();
        if self.abilities.iter().any(|known| known == &name) {
            return Err(CharacterError::DuplicateAbility(name));
        }
        self.abilities.push(name.clone());
        if registry.is_passive(&name) {
            self.use_ability(&name, registry)?;
        }
        Ok(())
    }

    /// Use a known ability, running its registered effect.
    ///
    /// Using an ability the character does not have is an error, not a
    /// no-op. Passive abilities apply once; later uses return
    /// [`AbilityOutcome::AlreadyApplied`] without running the effect.
    pub fn use_ability(
        &mut self,
        name: &str,
        registry: &AbilityRegistry,
    ) -> Result<AbilityOutcome, CharacterError> {
        if !self.abilities.iter().any(|known| known == name) {
            return Err(CharacterError::AbilityNotKnown(name.to_string()));
        }
        let effect = registry
            .effect(name)
            .ok_or_else(|| CharacterError::NoEffectRegistered(name.to_string()))?;
        if registry.is_passive(name) && self.times_applied(name) > 0 {
            return Ok(AbilityOutcome::AlreadyApplied);
        }
        effect(self);
        *self
            .applied_abilities
            .entry(name.to_string())
            .or_insert(0) += 1;
        Ok(AbilityOutcome::Applied)
    }

    /// Times this ability's effect has been applied.
    pub fn times_applied(&self, name: &str) -> u32 {
        self.applied_abilities.get(name).copied().unwrap_or(0)
    }

    // === Skills ===

    /// Set a skill to an exact level, inserting or overwriting.
    pub fn add_skill(&mut self, name: impl Into<String>, level: SkillLevel) {
        self.skills.insert(name.into(), level);
    }

    /// Raise a known skill one step: trained becomes specialised.
    pub fn train_skill(&mut self, name: &str) -> Result<(), CharacterError> {
        match self.skills.get_mut(name) {
            None => Err(CharacterError::SkillNotKnown(name.to_string())),
            Some(SkillLevel::Specialised) => {
                Err(CharacterError::SkillAlreadySpecialised(name.to_string()))
            }
            Some(level) => {
                *level = SkillLevel::Specialised;
                Ok(())
            }
        }
    }

    pub fn skill_level(&self, name: &str) -> Option<SkillLevel> {
        self.skills.get(name).copied()
    }

    // === Equipment and currency ===

    /// Add items to the equipment tally.
    pub fn add_equipment(&mut self, item: impl Into<String>, count: u32) {
        if count == 0 {
            return;
        }
        *self.equipment.entry(item.into()).or_insert(0) += count;
    }

    /// Remove items from the tally. Entries never sit at zero: removing
    /// the last item, or more than are held, deletes the entry.
    pub fn remove_equipment(&mut self, item: &str, count: u32) {
        if let Some(held) = self.equipment.get_mut(item) {
            *held = held.saturating_sub(count);
            if *held == 0 {
                self.equipment.remove(item);
            }
        }
    }

    pub fn earn(&mut self, amount: i64) {
        self.shins += amount;
    }

    /// Spend shins. Debt is legal; the balance may go negative.
    pub fn pay(&mut self, amount: i64) {
        self.earn(-amount);
    }

    pub fn add_armour(&mut self, value: u32) {
        self.armour += value;
    }
}
