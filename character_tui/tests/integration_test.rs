//! Integration test: Build character -> Play a session -> Save -> Reload
//!
//! This test validates the full flow from rulebook content to a
//! persisted character and back.

use character_core::{
    AbilityOutcome, AbilityRegistry, Character, CharacterError, PoolKind, Rulebook, SaveManager,
    SkillLevel,
};

/// Helper to print a separator
fn separator(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("  {}", title);
    println!("{}\n", "=".repeat(60));
}

/// Helper to print a character summary
fn print_character(pc: &Character) {
    println!("  {} - {}", pc.name, pc.descriptor());
    println!("    Pools: {}", pc.stats);
    println!("    Effort: {}  Armour: {}", pc.effort, pc.armour);
    println!("    Shins: {}  Unspent points: {}", pc.shins, pc.extra_points);
    if !pc.skills.is_empty() {
        let mut skills: Vec<String> = pc
            .skills
            .iter()
            .map(|(name, level)| format!("{} ({})", name, level))
            .collect();
        skills.sort();
        println!("    Skills: {}", skills.join(", "));
    }
    if !pc.abilities.is_empty() {
        println!("    Abilities: {}", pc.abilities.join(", "));
    }
    if !pc.equipment.is_empty() {
        let mut gear: Vec<String> = pc
            .equipment
            .iter()
            .map(|(item, count)| format!("{} x{}", item, count))
            .collect();
        gear.sort();
        println!("    Equipment: {}", gear.join(", "));
    }
}

#[test]
fn test_full_build_play_save_flow() {
    separator("INTEGRATION TEST: Build -> Play -> Save -> Reload");

    // =========================================================================
    // STEP 1: Load the demo rulebook
    // =========================================================================
    separator("STEP 1: Loading Demo Rulebook");

    let rules = Rulebook::demo_rules();
    let registry = AbilityRegistry::demo_effects();

    println!("  Loaded {} nouns", rules.nouns.len());
    println!("  Loaded {} adjectives", rules.adjectives.len());
    println!("  Loaded {} verbs", rules.verbs.len());
    println!("  Loaded {} abilities", rules.abilities.len());

    assert_eq!(rules.nouns.len(), 3);
    assert_eq!(rules.adjectives.len(), 3);
    assert_eq!(rules.verbs.len(), 3);
    assert_eq!(rules.abilities.len(), 3);

    // =========================================================================
    // STEP 2: Build a character from an archetype sentence
    // =========================================================================
    separator("STEP 2: Building the Character");

    let mut pc = Character::new("Tor", "glaive", "tough", "fights dirty", &rules)
        .expect("demo archetypes should all resolve");

    print_character(&pc);

    assert_eq!(pc.stats.might.max, 12); // 11 from glaive + 1 from tough
    assert_eq!(pc.stats.speed.max, 10);
    assert_eq!(pc.stats.intellect.max, 7);
    assert_eq!(pc.shins, 9); // 5 from glaive + 4 from tough
    assert_eq!(pc.extra_points, 6);
    assert_eq!(pc.skill_level("brawling"), Some(SkillLevel::Trained));
    assert!(pc.abilities.contains(&"rush".to_string()));
    assert_eq!(pc.equipment.get("dagger"), Some(&2));

    // Unknown archetypes are loud errors, not defaults
    assert!(Character::new("X", "warden", "tough", "fights dirty", &rules).is_err());

    // =========================================================================
    // STEP 3: Spend the build budget
    // =========================================================================
    separator("STEP 3: Spending the Build Budget");

    pc.add_pool(PoolKind::Speed, 2).expect("2 of 6 points fit");
    pc.add_pool(PoolKind::Intellect, 1).expect("1 of 4 points fit");
    println!("  After spending 3 points:");
    print_character(&pc);

    assert_eq!(pc.stats.speed.max, 12);
    assert_eq!(pc.stats.intellect.max, 8);
    assert_eq!(pc.extra_points, 3);

    // Overspending is refused without touching anything
    let err = pc.add_pool(PoolKind::Might, 10).unwrap_err();
    println!("  Overspend refused: {}", err);
    assert_eq!(
        err,
        CharacterError::NotEnoughPoints {
            requested: 10,
            available: 3
        }
    );
    assert_eq!(pc.extra_points, 3);

    // =========================================================================
    // STEP 4: Learn and use abilities
    // =========================================================================
    separator("STEP 4: Abilities");

    // The passive applies the moment it is learned, and only once
    pc.grant_ability("extra_armour", &registry)
        .expect("not known yet");
    println!("  Learned extra_armour (passive):");
    print_character(&pc);

    assert_eq!(pc.armour, 1);
    assert_eq!(pc.stats.might.max, 15); // +3 from the passive
    assert_eq!(pc.stats.speed.max, 15);
    assert_eq!(pc.times_applied("extra_armour"), 1);
    assert_eq!(pc.extra_points, 3); // passives bypass the budget

    let outcome = pc.use_ability("extra_armour", &registry).unwrap();
    println!("  Using it again: {:?}", outcome);
    assert_eq!(outcome, AbilityOutcome::AlreadyApplied);
    assert_eq!(pc.armour, 1);

    // rush costs a point of might on every use
    pc.use_ability("rush", &registry).unwrap();
    pc.use_ability("rush", &registry).unwrap();
    println!("  After two rushes: {}", pc.stats);
    assert_eq!(pc.times_applied("rush"), 2);
    assert_eq!(pc.stats.might.current, 13);

    // Unknown abilities cannot be used
    let err = pc.use_ability("flame spell", &registry).unwrap_err();
    println!("  Unknown ability refused: {}", err);
    assert_eq!(err, CharacterError::AbilityNotKnown("flame spell".to_string()));

    // =========================================================================
    // STEP 5: Take damage through the cascade
    // =========================================================================
    separator("STEP 5: The Damage Cascade");

    let report = pc.take_damage(PoolKind::Might, 16);
    println!("  Hit for 16 on might: {}", report.summary());
    println!("  Pools now: {}", pc.stats);

    assert_eq!(pc.stats.might.current, 0);
    assert_eq!(pc.stats.speed.current, 12); // 15 - 3 of overflow
    assert_eq!(report.total_absorbed(), 16);
    assert!(!report.defeated);
    assert!(!pc.is_defeated());

    pc.heal(PoolKind::Might, 4);
    println!("  Healed 4 might: {}", pc.stats);
    assert_eq!(pc.stats.might.current, 4);

    // Drive a throwaway copy to defeat to see the flag
    let mut doomed = pc.clone();
    let report = doomed.take_damage(PoolKind::Speed, 1000);
    println!("  Overkill on a copy: {}", report.summary());
    assert!(report.defeated);
    assert!(doomed.is_defeated());
    assert!(report.unabsorbed > 0);

    // =========================================================================
    // STEP 6: Train a skill
    // =========================================================================
    separator("STEP 6: Skills");

    pc.train_skill("brawling").expect("trained can step up");
    println!("  brawling is now {}", pc.skill_level("brawling").unwrap());
    assert_eq!(pc.skill_level("brawling"), Some(SkillLevel::Specialised));

    let err = pc.train_skill("brawling").unwrap_err();
    println!("  Training it again refused: {}", err);
    assert_eq!(
        err,
        CharacterError::SkillAlreadySpecialised("brawling".to_string())
    );

    // =========================================================================
    // STEP 7: Equipment and shins
    // =========================================================================
    separator("STEP 7: Equipment and Shins");

    pc.add_equipment("rope", 1);
    pc.remove_equipment("bag of sand", 1);
    pc.earn(4);
    pc.pay(20);
    print_character(&pc);

    assert_eq!(pc.equipment.get("rope"), Some(&1));
    assert!(!pc.equipment.contains_key("bag of sand"));
    assert_eq!(pc.shins, -7); // 9 + 4 - 20, debt is legal

    // =========================================================================
    // STEP 8: Save two snapshots and reload the newest
    // =========================================================================
    separator("STEP 8: Save and Reload");

    let dir = tempfile::tempdir().expect("tempdir");
    let saves = SaveManager::new(dir.path());

    let early = pc.clone();
    let first = saves.save(&early).expect("first snapshot");
    println!("  First snapshot: {}", first.display());

    pc.earn(100);
    pc.add_equipment("lantern", 1);
    let second = saves.save(&pc).expect("second snapshot");
    println!("  Second snapshot: {}", second.display());
    assert_ne!(first, second);

    let listed = saves.list_saves("Tor").expect("list snapshots");
    println!("  {} snapshots on disk", listed.len());
    assert_eq!(listed.len(), 2);

    let loaded = saves.load_latest("Tor").expect("newest snapshot");
    println!("  Reloaded:");
    print_character(&loaded);

    assert_eq!(loaded, pc);
    assert_ne!(loaded, early);
    assert_eq!(loaded.shins, 93);
    assert_eq!(loaded.times_applied("rush"), 2);
    assert_eq!(loaded.skill_level("brawling"), Some(SkillLevel::Specialised));

    // =========================================================================
    // SUMMARY
    // =========================================================================
    separator("TEST COMPLETE - SUMMARY");

    println!("  Character Journey:");
    println!("    1. Built Tor the tough glaive who fights dirty");
    println!("    2. Spent 3 build points into speed and intellect");
    println!("    3. Learned extra_armour; the passive applied exactly once");
    println!("    4. Rushed twice, paying might each time");
    println!("    5. Took a 16-point hit that cascaded into speed");
    println!("    6. Specialised brawling");
    println!("    7. Went into debt buying gear");
    println!("    8. Saved twice and reloaded the newest snapshot");
    println!("\n  Final State:");
    println!("    Pools: {}", loaded.stats);
    println!("    Status: {}", if loaded.is_defeated() { "Defeated" } else { "Standing" });

    println!("\n  Test passed successfully!");
}
