//! Application state

use character_core::{
    AbilityOutcome, AbilityRegistry, Character, PoolKind, Rulebook, RulesError, SaveManager,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Abilities panel focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbilityFocus {
    Known,
    Rulebook,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Sheet,
    Combat,
    Abilities,
    Skills,
    Equipment,
    Help,
}

impl Tab {
    pub fn all() -> &'static [Tab] {
        &[
            Tab::Sheet,
            Tab::Combat,
            Tab::Abilities,
            Tab::Skills,
            Tab::Equipment,
            Tab::Help,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Tab::Sheet => "Sheet",
            Tab::Combat => "Combat",
            Tab::Abilities => "Abilities",
            Tab::Skills => "Skills",
            Tab::Equipment => "Equip",
            Tab::Help => "Help",
        }
    }
}

pub struct App {
    pub current_tab: Tab,
    pub character: Character,
    pub rules: Rulebook,
    pub registry: AbilityRegistry,
    pub saves: SaveManager,
    pub session_log: Vec<String>,
    pub rng: StdRng,
    pub selected_pool: usize,
    pub log_scroll: usize,
    // Abilities UI state
    pub ability_focus: AbilityFocus,
    pub selected_known: usize,
    pub selected_rulebook: usize,
    // Skills and equipment UI state
    pub selected_skill: usize,
    pub selected_item: usize,
}

impl App {
    pub fn new() -> Result<Self, RulesError> {
        let rules = Rulebook::demo_rules();
        let registry = AbilityRegistry::demo_effects();
        let character = Character::new("Tor", "glaive", "tough", "fights dirty", &rules)?;
        let session_log = vec![format!("Session ready. {}.", character.descriptor())];

        Ok(App {
            current_tab: Tab::Sheet,
            character,
            rules,
            registry,
            saves: SaveManager::default(),
            session_log,
            rng: StdRng::seed_from_u64(42),
            selected_pool: 0,
            log_scroll: 0,
            ability_focus: AbilityFocus::Known,
            selected_known: 0,
            selected_rulebook: 0,
            selected_skill: 0,
            selected_item: 0,
        })
    }

    pub fn next_tab(&mut self) {
        let tabs = Tab::all();
        let current_idx = tabs.iter().position(|t| *t == self.current_tab).unwrap_or(0);
        let next_idx = (current_idx + 1) % tabs.len();
        self.current_tab = tabs[next_idx];
    }

    pub fn prev_tab(&mut self) {
        let tabs = Tab::all();
        let current_idx = tabs.iter().position(|t| *t == self.current_tab).unwrap_or(0);
        let prev_idx = if current_idx == 0 {
            tabs.len() - 1
        } else {
            current_idx - 1
        };
        self.current_tab = tabs[prev_idx];
    }

    pub fn set_tab(&mut self, index: usize) {
        let tabs = Tab::all();
        if index < tabs.len() {
            self.current_tab = tabs[index];
        }
    }

    pub fn on_up(&mut self) {
        match self.current_tab {
            Tab::Combat => {
                if self.selected_pool > 0 {
                    self.selected_pool -= 1;
                }
            }
            Tab::Abilities => match self.ability_focus {
                AbilityFocus::Known => {
                    if self.selected_known > 0 {
                        self.selected_known -= 1;
                    }
                }
                AbilityFocus::Rulebook => {
                    if self.selected_rulebook > 0 {
                        self.selected_rulebook -= 1;
                    }
                }
            },
            Tab::Skills => {
                if self.selected_skill > 0 {
                    self.selected_skill -= 1;
                }
            }
            Tab::Equipment => {
                if self.selected_item > 0 {
                    self.selected_item -= 1;
                }
            }
            _ => {}
        }
    }

    pub fn on_down(&mut self) {
        match self.current_tab {
            Tab::Combat => {
                if self.selected_pool < PoolKind::all().len() - 1 {
                    self.selected_pool += 1;
                }
            }
            Tab::Abilities => match self.ability_focus {
                AbilityFocus::Known => {
                    if self.selected_known < self.character.abilities.len().saturating_sub(1) {
                        self.selected_known += 1;
                    }
                }
                AbilityFocus::Rulebook => {
                    if self.selected_rulebook < self.rules.abilities.len().saturating_sub(1) {
                        self.selected_rulebook += 1;
                    }
                }
            },
            Tab::Skills => {
                if self.selected_skill < self.character.skills.len().saturating_sub(1) {
                    self.selected_skill += 1;
                }
            }
            Tab::Equipment => {
                if self.selected_item < self.character.equipment.len().saturating_sub(1) {
                    self.selected_item += 1;
                }
            }
            _ => {}
        }
    }

    pub fn on_left(&mut self) {
        if self.current_tab == Tab::Abilities {
            self.ability_focus = AbilityFocus::Known;
        }
    }

    pub fn on_right(&mut self) {
        if self.current_tab == Tab::Abilities {
            self.ability_focus = AbilityFocus::Rulebook;
            // Reset selection when switching panes
            self.selected_rulebook = 0;
        }
    }

    pub fn on_enter(&mut self) {
        match self.current_tab {
            Tab::Combat => self.attack(),
            Tab::Abilities => match self.ability_focus {
                AbilityFocus::Known => self.use_selected_ability(),
                AbilityFocus::Rulebook => self.learn_selected_ability(),
            },
            Tab::Skills => self.train_selected_skill(),
            _ => {}
        }
    }

    /// The pool the combat cursor sits on
    pub fn current_pool(&self) -> PoolKind {
        let pools = PoolKind::all();
        pools[self.selected_pool.min(pools.len() - 1)]
    }

    /// Equipment names in display order
    pub fn item_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.character.equipment.keys().cloned().collect();
        names.sort_unstable();
        names
    }

    /// Skill names in display order
    pub fn skill_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.character.skills.keys().cloned().collect();
        names.sort_unstable();
        names
    }

    /// Rulebook ability names in display order
    pub fn rulebook_abilities(&self) -> Vec<String> {
        self.rules
            .ability_names()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// Roll a hit of 1-6 against the selected pool
    pub fn attack(&mut self) {
        if self.character.is_defeated() {
            self.add_log("Already defeated. Heal a pool to keep playing.".to_string());
            return;
        }
        let pool = self.current_pool();
        let amount = self.rng.gen_range(1..=6);
        let report = self.character.take_damage(pool, amount);
        self.add_log(format!("Hit for {} on {}: {}", amount, pool, report.summary()));
        if report.defeated {
            self.add_log("All pools empty. DEFEATED.".to_string());
        }
    }

    /// Roll 1-3 points of recovery into the selected pool
    pub fn heal(&mut self) {
        let pool = self.current_pool();
        let amount = self.rng.gen_range(1..=3);
        self.character.heal(pool, amount);
        self.add_log(format!(
            "Recovered {} {} ({})",
            amount,
            pool,
            self.character.stats.pool(pool)
        ));
    }

    /// Spend one build point into the selected pool
    pub fn spend_point(&mut self) {
        let pool = self.current_pool();
        match self.character.add_pool(pool, 1) {
            Ok(()) => {
                let left = self.character.extra_points;
                self.add_log(format!("+1 {} from the build budget ({} left)", pool, left));
            }
            Err(err) => self.add_log(err.to_string()),
        }
    }

    pub fn use_selected_ability(&mut self) {
        if let Some(name) = self.character.abilities.get(self.selected_known).cloned() {
            match self.character.use_ability(&name, &self.registry) {
                Ok(AbilityOutcome::Applied) => {
                    self.add_log(format!("Used {} ({})", name, self.character.stats));
                }
                Ok(AbilityOutcome::AlreadyApplied) => {
                    self.add_log(format!("{} is passive and already in effect", name));
                }
                Err(err) => self.add_log(err.to_string()),
            }
        }
    }

    pub fn learn_selected_ability(&mut self) {
        let names = self.rulebook_abilities();
        if let Some(name) = names.get(self.selected_rulebook) {
            match self.character.grant_ability(name.as_str(), &self.registry) {
                Ok(()) => self.add_log(format!("Learned {}", name)),
                Err(err) => self.add_log(err.to_string()),
            }
        }
    }

    pub fn train_selected_skill(&mut self) {
        let names = self.skill_names();
        if let Some(name) = names.get(self.selected_skill) {
            match self.character.train_skill(name) {
                Ok(()) => self.add_log(format!("{} is now specialised", name)),
                Err(err) => self.add_log(err.to_string()),
            }
        }
    }

    /// Add one of the selected item to the pack
    pub fn add_item(&mut self) {
        let names = self.item_names();
        if let Some(name) = names.get(self.selected_item) {
            self.character.add_equipment(name.as_str(), 1);
            let held = self.character.equipment.get(name).copied().unwrap_or(0);
            self.add_log(format!("Picked up a {} ({} held)", name, held));
        }
    }

    /// Drop one of the selected item; the entry disappears at zero
    pub fn remove_item(&mut self) {
        let names = self.item_names();
        if let Some(name) = names.get(self.selected_item) {
            self.character.remove_equipment(name, 1);
            match self.character.equipment.get(name) {
                Some(held) => self.add_log(format!("Dropped a {} ({} held)", name, held)),
                None => {
                    self.add_log(format!("Dropped the last {}", name));
                    if self.selected_item > 0 {
                        self.selected_item -= 1;
                    }
                }
            }
        }
    }

    pub fn earn_shins(&mut self) {
        self.character.earn(5);
        self.add_log(format!("Earned 5 shins ({} total)", self.character.shins));
    }

    pub fn pay_shins(&mut self) {
        self.character.pay(3);
        let shins = self.character.shins;
        if shins < 0 {
            self.add_log(format!("Paid 3 shins, now {} in debt", -shins));
        } else {
            self.add_log(format!("Paid 3 shins ({} left)", shins));
        }
    }

    pub fn save(&mut self) {
        match self.saves.save(&self.character) {
            Ok(path) => self.add_log(format!("Saved to {}", path.display())),
            Err(err) => self.add_log(format!("Save failed: {}", err)),
        }
    }

    pub fn load_latest(&mut self) {
        match self.saves.load_latest(&self.character.name) {
            Ok(loaded) => {
                self.add_log(format!("Loaded latest save of {}", loaded.name));
                self.character = loaded;
                self.clamp_selections();
            }
            Err(err) => self.add_log(format!("Load failed: {}", err)),
        }
    }

    /// Keep list cursors inside the loaded character's collections
    fn clamp_selections(&mut self) {
        self.selected_known = self
            .selected_known
            .min(self.character.abilities.len().saturating_sub(1));
        self.selected_skill = self
            .selected_skill
            .min(self.character.skills.len().saturating_sub(1));
        self.selected_item = self
            .selected_item
            .min(self.character.equipment.len().saturating_sub(1));
    }

    pub fn add_log(&mut self, line: String) {
        self.session_log.push(line);

        // Keep the log from growing too large
        while self.session_log.len() > 200 {
            self.session_log.remove(0);
        }

        // Auto-scroll to bottom
        self.log_scroll = self.session_log.len().saturating_sub(15);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_builds_the_demo_character() {
        let app = App::new().unwrap();
        assert_eq!(app.character.name, "Tor");
        assert_eq!(app.character.stats.might.max, 12);
        assert!(app.character.abilities.contains(&"rush".to_string()));
        assert_eq!(app.session_log.len(), 1);
    }

    #[test]
    fn test_tab_cycle_wraps() {
        let mut app = App::new().unwrap();
        for _ in 0..Tab::all().len() {
            app.next_tab();
        }
        assert_eq!(app.current_tab, Tab::Sheet);
        app.prev_tab();
        assert_eq!(app.current_tab, Tab::Help);
    }

    #[test]
    fn test_attack_drains_pools_and_logs() {
        let mut app = App::new().unwrap();
        let before = app.character.stats.total();
        app.attack();
        assert!(app.character.stats.total() < before);
        assert!(app.session_log.last().unwrap().starts_with("Hit for"));
    }

    #[test]
    fn test_heal_refills_the_selected_pool() {
        let mut app = App::new().unwrap();
        app.character.take_damage(PoolKind::Might, 5);
        let before = app.character.stats.might.current;
        app.selected_pool = 0;
        app.heal();
        assert!(app.character.stats.might.current > before);
    }

    #[test]
    fn test_spend_point_uses_the_budget() {
        let mut app = App::new().unwrap();
        let before = app.character.extra_points;
        app.selected_pool = 1;
        app.spend_point();
        assert_eq!(app.character.extra_points, before - 1);
        assert_eq!(app.character.stats.speed.max, 11);
    }

    #[test]
    fn test_spend_point_with_empty_budget_logs_the_error() {
        let mut app = App::new().unwrap();
        app.character.extra_points = 0;
        app.spend_point();
        assert_eq!(app.session_log.last().unwrap(), "no more points to spend");
    }

    #[test]
    fn test_learn_from_the_rulebook_pane() {
        let mut app = App::new().unwrap();
        app.ability_focus = AbilityFocus::Rulebook;
        // Rulebook list is sorted: extra_armour, flame spell, rush
        app.selected_rulebook = 1;
        app.learn_selected_ability();
        assert!(app.character.abilities.contains(&"flame spell".to_string()));
        // rush came with the verb; learning it again is refused
        app.selected_rulebook = 2;
        app.learn_selected_ability();
        assert_eq!(
            app.session_log.last().unwrap(),
            "ability 'rush' is already known"
        );
    }

    #[test]
    fn test_use_known_ability_from_the_list() {
        let mut app = App::new().unwrap();
        let idx = app
            .character
            .abilities
            .iter()
            .position(|name| name == "rush")
            .unwrap();
        app.selected_known = idx;
        app.use_selected_ability();
        assert_eq!(app.character.times_applied("rush"), 1);
        assert_eq!(app.character.stats.might.current, 11);
    }

    #[test]
    fn test_train_selected_skill_steps_the_ladder() {
        let mut app = App::new().unwrap();
        // Skill list is sorted: brawling, deception
        app.selected_skill = 0;
        app.train_selected_skill();
        assert_eq!(
            app.character.skill_level("brawling"),
            Some(character_core::SkillLevel::Specialised)
        );
        app.train_selected_skill();
        assert_eq!(
            app.session_log.last().unwrap(),
            "skill 'brawling' is already specialised"
        );
    }

    #[test]
    fn test_equipment_keys_adjust_the_tally() {
        let mut app = App::new().unwrap();
        // Item list is sorted: bag of sand, dagger
        app.selected_item = 1;
        app.add_item();
        assert_eq!(app.character.equipment.get("dagger"), Some(&3));
        app.selected_item = 0;
        app.remove_item();
        assert!(!app.character.equipment.contains_key("bag of sand"));
        assert_eq!(app.selected_item, 0);
    }

    #[test]
    fn test_shin_keys_allow_debt() {
        let mut app = App::new().unwrap();
        app.character.shins = 0;
        app.pay_shins();
        assert_eq!(app.character.shins, -3);
        assert!(app.session_log.last().unwrap().contains("debt"));
        app.earn_shins();
        assert_eq!(app.character.shins, 2);
    }

    #[test]
    fn test_log_is_capped() {
        let mut app = App::new().unwrap();
        for i in 0..300 {
            app.add_log(format!("line {}", i));
        }
        assert_eq!(app.session_log.len(), 200);
        assert_eq!(app.session_log.last().unwrap(), "line 299");
    }
}
