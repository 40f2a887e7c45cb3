//! Rulebook loading: archetype and ability content from TOML.

pub mod records;

use crate::pool::PoolKind;
use records::{AbilityRecord, AdjectiveRecord, NounRecord, PoolModifier, VerbRecord};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Rulebook loading or lookup error.
#[derive(Error, Debug)]
pub enum RulesError {
    #[error("Failed to read rulebook file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("unknown noun '{0}'")]
    UnknownNoun(String),
    #[error("unknown adjective '{0}'")]
    UnknownAdjective(String),
    #[error("unknown verb '{0}'")]
    UnknownVerb(String),
}

const DEMO_NOUNS: &str = include_str!("../../rules/nouns.toml");
const DEMO_ADJECTIVES: &str = include_str!("../../rules/adjectives.toml");
const DEMO_VERBS: &str = include_str!("../../rules/verbs.toml");
const DEMO_ABILITIES: &str = include_str!("../../rules/abilities.toml");

/// Parse one name-keyed TOML table.
fn parse_table<T: serde::de::DeserializeOwned>(
    content: &str,
) -> Result<HashMap<String, T>, RulesError> {
    let table: HashMap<String, T> = toml::from_str(content)?;
    Ok(table)
}

/// Load one name-keyed TOML table from a file.
fn load_table<T: serde::de::DeserializeOwned>(
    path: &Path,
) -> Result<HashMap<String, T>, RulesError> {
    let content = fs::read_to_string(path)?;
    parse_table(&content)
}

/// The archetype and ability content characters are built from.
#[derive(Debug, Clone, PartialEq)]
pub struct Rulebook {
    pub nouns: HashMap<String, NounRecord>,
    pub adjectives: HashMap<String, AdjectiveRecord>,
    pub verbs: HashMap<String, VerbRecord>,
    pub abilities: HashMap<String, AbilityRecord>,
}

impl Rulebook {
    /// Parse a rulebook from the four record tables.
    pub fn parse(
        nouns: &str,
        adjectives: &str,
        verbs: &str,
        abilities: &str,
    ) -> Result<Self, RulesError> {
        Ok(Rulebook {
            nouns: parse_table(nouns)?,
            adjectives: parse_table(adjectives)?,
            verbs: parse_table(verbs)?,
            abilities: parse_table(abilities)?,
        })
    }

    /// Load `nouns.toml`, `adjectives.toml`, `verbs.toml`, and
    /// `abilities.toml` from a directory.
    ///
    /// A missing file or malformed TOML is an error, never a silent
    /// default.
    pub fn load_from_dir(dir: impl AsRef<Path>) -> Result<Self, RulesError> {
        let dir = dir.as_ref();
        Ok(Rulebook {
            nouns: load_table(&dir.join("nouns.toml"))?,
            adjectives: load_table(&dir.join("adjectives.toml"))?,
            verbs: load_table(&dir.join("verbs.toml"))?,
            abilities: load_table(&dir.join("abilities.toml"))?,
        })
    }

    /// The embedded demo rulebook.
    pub fn demo_rules() -> Self {
        Rulebook::parse(DEMO_NOUNS, DEMO_ADJECTIVES, DEMO_VERBS, DEMO_ABILITIES)
            .unwrap_or_else(|_| fallback_rules())
    }

    /// Look up a noun record, failing with the offending name.
    pub fn noun(&self, name: &str) -> Result<&NounRecord, RulesError> {
        self.nouns
            .get(name)
            .ok_or_else(|| RulesError::UnknownNoun(name.to_string()))
    }

    /// Look up an adjective record, failing with the offending name.
    pub fn adjective(&self, name: &str) -> Result<&AdjectiveRecord, RulesError> {
        self.adjectives
            .get(name)
            .ok_or_else(|| RulesError::UnknownAdjective(name.to_string()))
    }

    /// Look up a verb record, failing with the offending name.
    pub fn verb(&self, name: &str) -> Result<&VerbRecord, RulesError> {
        self.verbs
            .get(name)
            .ok_or_else(|| RulesError::UnknownVerb(name.to_string()))
    }

    pub fn ability_description(&self, name: &str) -> Option<&str> {
        self.abilities
            .get(name)
            .map(|record| record.description.as_str())
    }

    /// Names of every ability in the book, sorted.
    pub fn ability_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.abilities.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

/// Minimal built-in content used only if the embedded demo rulebook
/// fails to parse. It keeps the demo archetype sentence buildable, so
/// startup still produces a character instead of an unknown-word error.
fn fallback_rules() -> Rulebook {
    let mut nouns = HashMap::new();
    nouns.insert(
        "glaive".to_string(),
        NounRecord {
            might: 11,
            speed: 10,
            intellect: 7,
            effort: 1,
            shins: 5,
            extra_points: 6,
            description: String::new(),
        },
    );
    let mut adjectives = HashMap::new();
    adjectives.insert(
        "tough".to_string(),
        AdjectiveRecord {
            modifier: PoolModifier {
                pool: PoolKind::Might,
                points: 1,
            },
            shins: 4,
            description: String::new(),
        },
    );
    let mut verbs = HashMap::new();
    verbs.insert("fights dirty".to_string(), VerbRecord::default());
    Rulebook {
        nouns,
        adjectives,
        verbs,
        abilities: HashMap::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::{Character, SkillLevel};
    use std::io::Write;

    #[test]
    fn test_parse_nouns_table() {
        let raw = r#"
[glaive]
might = 11
speed = 10
intellect = 7
effort = 1
shins = 5
extra_points = 6
description = "A warrior."
"#;
        let nouns: HashMap<String, NounRecord> = parse_table(raw).unwrap();
        let glaive = &nouns["glaive"];
        assert_eq!(glaive.might, 11);
        assert_eq!(glaive.intellect, 7);
        assert_eq!(glaive.extra_points, 6);
    }

    #[test]
    fn test_demo_rules_load_all_records() {
        let rules = Rulebook::demo_rules();

        for noun in ["glaive", "jack", "nano"] {
            assert!(rules.nouns.contains_key(noun), "Missing noun: {}", noun);
        }
        for adjective in ["tough", "graceful", "clever"] {
            assert!(
                rules.adjectives.contains_key(adjective),
                "Missing adjective: {}",
                adjective
            );
        }
        for verb in ["wears a sheen of ice", "fights dirty", "throws fire"] {
            assert!(rules.verbs.contains_key(verb), "Missing verb: {}", verb);
        }
        for ability in ["extra_armour", "rush", "flame spell"] {
            assert!(
                rules.abilities.contains_key(ability),
                "Missing ability: {}",
                ability
            );
        }
    }

    #[test]
    fn test_fallback_rules_cover_the_demo_archetype() {
        let rules = fallback_rules();
        let pc = Character::new("Tor", "glaive", "tough", "fights dirty", &rules).unwrap();
        assert_eq!(pc.stats.might.max, 12);
        assert_eq!(pc.stats.speed.max, 10);
        assert_eq!(pc.stats.intellect.max, 7);
        assert_eq!(pc.extra_points, 6);
    }

    #[test]
    fn test_demo_verbs_only_grant_known_abilities() {
        let rules = Rulebook::demo_rules();
        for (verb, record) in &rules.verbs {
            for ability in &record.abilities {
                assert!(
                    rules.abilities.contains_key(ability),
                    "Verb '{}' grants unlisted ability '{}'",
                    verb,
                    ability
                );
            }
        }
    }

    #[test]
    fn test_lookups_fail_loudly_with_the_name() {
        let rules = Rulebook::demo_rules();
        assert!(rules.noun("glaive").is_ok());
        assert!(matches!(
            rules.noun("warden"),
            Err(RulesError::UnknownNoun(name)) if name == "warden"
        ));
        assert!(matches!(
            rules.adjective("shiny"),
            Err(RulesError::UnknownAdjective(name)) if name == "shiny"
        ));
        assert!(matches!(
            rules.verb("naps"),
            Err(RulesError::UnknownVerb(name)) if name == "naps"
        ));
    }

    #[test]
    fn test_demo_skill_levels_parse() {
        let rules = Rulebook::demo_rules();
        let verb = rules.verb("throws fire").unwrap();
        assert_eq!(
            verb.skills.get("fire lore"),
            Some(&SkillLevel::Specialised)
        );
    }

    #[test]
    fn test_ability_names_sorted() {
        let rules = Rulebook::demo_rules();
        assert_eq!(
            rules.ability_names(),
            vec!["extra_armour", "flame spell", "rush"]
        );
    }

    #[test]
    fn test_load_from_dir_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let kinds = [
            ("nouns.toml", DEMO_NOUNS),
            ("adjectives.toml", DEMO_ADJECTIVES),
            ("verbs.toml", DEMO_VERBS),
            ("abilities.toml", DEMO_ABILITIES),
        ];
        for (file, content) in kinds {
            let mut f = std::fs::File::create(dir.path().join(file)).unwrap();
            f.write_all(content.as_bytes()).unwrap();
        }

        let loaded = Rulebook::load_from_dir(dir.path()).unwrap();
        assert_eq!(loaded, Rulebook::demo_rules());
    }

    #[test]
    fn test_load_from_dir_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            Rulebook::load_from_dir(dir.path()),
            Err(RulesError::IoError(_))
        ));
    }

    #[test]
    fn test_malformed_toml_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        for file in [
            "nouns.toml",
            "adjectives.toml",
            "verbs.toml",
            "abilities.toml",
        ] {
            std::fs::write(dir.path().join(file), "not = [valid").unwrap();
        }
        assert!(matches!(
            Rulebook::load_from_dir(dir.path()),
            Err(RulesError::ParseError(_))
        ));
    }
}
