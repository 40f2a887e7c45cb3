//! Ability effects and the registry that owns them.
//!
//! Characters store ability names and application counts; what a name
//! actually does lives here, supplied by content.

use crate::character::Character;
use crate::pool::PoolKind;
use std::collections::{HashMap, HashSet};

/// An effect run against a character when an ability is used.
pub type AbilityEffect = Box<dyn Fn(&mut Character) + Send + Sync>;

/// What happened when an ability was used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbilityOutcome {
    /// The effect ran and the application counter went up.
    Applied,
    /// A passive ability that had already been applied; the effect was
    /// skipped.
    AlreadyApplied,
}

/// Name-keyed effect table plus the set of passive ability names.
///
/// Passive abilities apply at most once per character. The gate is
/// enforced by [`Character::use_ability`], so effect bodies carry no
/// bookkeeping of their own.
#[derive(Default)]
pub struct AbilityRegistry {
    effects: HashMap<String, AbilityEffect>,
    passives: HashSet<String>,
}

impl AbilityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an on-demand ability effect.
    pub fn register<F>(&mut self, name: impl Into<String>, effect: F)
    where
        F: Fn(&mut Character) + Send + Sync + 'static,
    {
        self.effects.insert(name.into(), Box::new(effect));
    }

    /// Register a passive effect, applied at most once per character.
    pub fn register_passive<F>(&mut self, name: impl Into<String>, effect: F)
    where
        F: Fn(&mut Character) + Send + Sync + 'static,
    {
        let name = name.into();
        self.passives.insert(name.clone());
        self.effects.insert(name, Box::new(effect));
    }

    pub fn is_passive(&self, name: &str) -> bool {
        self.passives.contains(name)
    }

    pub fn effect(&self, name: &str) -> Option<&AbilityEffect> {
        self.effects.get(name)
    }

    /// Registered ability names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.effects.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// The effects matching the embedded demo rulebook.
    ///
    /// Pool growth here goes through [`crate::stats::Stats::add_pool`]
    /// directly: ability effects are exempt from the character-build
    /// budget.
    pub fn demo_effects() -> Self {
        let mut registry = AbilityRegistry::new();
        registry.register_passive("extra_armour", |pc: &mut Character| {
            pc.stats.add_pool(PoolKind::Might, 3);
            pc.stats.add_pool(PoolKind::Speed, 3);
            pc.add_armour(1);
        });
        registry.register("rush", |pc: &mut Character| {
            pc.stats.damage(PoolKind::Might, 1);
        });
        registry.register("flame spell", |pc: &mut Character| {
            pc.stats.damage(PoolKind::Intellect, 1);
        });
        registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_look_up() {
        let mut registry = AbilityRegistry::new();
        registry.register("shout", |pc: &mut Character| {
            pc.earn(1);
        });
        assert!(registry.effect("shout").is_some());
        assert!(registry.effect("whisper").is_none());
        assert!(!registry.is_passive("shout"));
    }

    #[test]
    fn test_passive_registration_sets_the_flag() {
        let mut registry = AbilityRegistry::new();
        registry.register_passive("thick skin", |pc: &mut Character| {
            pc.add_armour(1);
        });
        assert!(registry.is_passive("thick skin"));
        assert!(registry.effect("thick skin").is_some());
    }

    #[test]
    fn test_names_come_back_sorted() {
        let registry = AbilityRegistry::demo_effects();
        assert_eq!(registry.names(), vec!["extra_armour", "flame spell", "rush"]);
    }

    #[test]
    fn test_demo_effects_flag_only_the_passive() {
        let registry = AbilityRegistry::demo_effects();
        assert!(registry.is_passive("extra_armour"));
        assert!(!registry.is_passive("rush"));
        assert!(!registry.is_passive("flame spell"));
    }
}
