//! The ordered stat collection and the damage cascade.

use crate::attribute::Attribute;
use crate::pool::PoolKind;
use crate::rules::records::{AdjectiveRecord, NounRecord, VerbRecord};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The three core pools of a character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub might: Attribute,
    pub speed: Attribute,
    pub intellect: Attribute,
}

/// One cascade step that removed points from a pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolHit {
    pub pool: PoolKind,
    pub absorbed: u32,
}

/// The outcome of a single damage application.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DamageReport {
    /// Pools that absorbed points, in cascade order.
    pub hits: Vec<PoolHit>,
    /// Damage left over after the cascade stopped.
    pub unabsorbed: u32,
    /// The cascade ended with every pool at zero.
    pub defeated: bool,
}

impl DamageReport {
    /// Total points removed across all pools.
    pub fn total_absorbed(&self) -> u32 {
        self.hits.iter().map(|hit| hit.absorbed).sum()
    }

    /// One-line summary for session logs.
    pub fn summary(&self) -> String {
        let mut line = if self.hits.is_empty() {
            "no damage".to_string()
        } else {
            let parts: Vec<String> = self
                .hits
                .iter()
                .map(|hit| format!("{} -{}", hit.pool, hit.absorbed))
                .collect();
            parts.join(", ")
        };
        if self.defeated {
            line.push_str(" (DEFEATED)");
        }
        line
    }
}

impl Stats {
    /// Seed the pools from an archetype triple.
    ///
    /// Noun base values first, then the adjective's pool modifier, then
    /// the verb's. A verb may carry no modifier; that is not an error.
    pub fn from_archetype(
        noun: &NounRecord,
        adjective: &AdjectiveRecord,
        verb: &VerbRecord,
    ) -> Self {
        let mut stats = Stats {
            might: Attribute::new(noun.might),
            speed: Attribute::new(noun.speed),
            intellect: Attribute::new(noun.intellect),
        };
        stats
            .pool_mut(adjective.modifier.pool)
            .upgrade(adjective.modifier.points);
        if let Some(modifier) = &verb.modifier {
            stats.pool_mut(modifier.pool).upgrade(modifier.points);
        }
        stats
    }

    pub fn pool(&self, kind: PoolKind) -> &Attribute {
        match kind {
            PoolKind::Might => &self.might,
            PoolKind::Speed => &self.speed,
            PoolKind::Intellect => &self.intellect,
        }
    }

    pub fn pool_mut(&mut self, kind: PoolKind) -> &mut Attribute {
        match kind {
            PoolKind::Might => &mut self.might,
            PoolKind::Speed => &mut self.speed,
            PoolKind::Intellect => &mut self.intellect,
        }
    }

    /// Sum of current points across all three pools.
    pub fn total(&self) -> u32 {
        self.might.current + self.speed.current + self.intellect.current
    }

    /// Every pool at zero.
    pub fn is_depleted(&self) -> bool {
        self.total() == 0
    }

    /// Apply damage to one pool, spilling leftover points into the next
    /// pool in cascade order.
    ///
    /// After each pool is drained the total is checked; once it reaches
    /// zero the cascade stops, the report is flagged `defeated`, and any
    /// leftover damage is recorded as `unabsorbed`. Damage of zero does
    /// nothing and touches no pool.
    pub fn damage(&mut self, pool: PoolKind, amount: u32) -> DamageReport {
        let mut report = DamageReport::default();
        let mut target = pool;
        let mut remaining = amount;
        while remaining > 0 {
            let overflow = self.pool_mut(target).reduce(remaining);
            let absorbed = remaining - overflow;
            if absorbed > 0 {
                report.hits.push(PoolHit {
                    pool: target,
                    absorbed,
                });
            }
            if self.is_depleted() {
                report.defeated = true;
                report.unabsorbed = overflow;
                return report;
            }
            remaining = overflow;
            target = target.next();
        }
        report
    }

    /// Refill one pool. Healing never cascades; excess is discarded by
    /// the pool itself.
    pub fn heal(&mut self, pool: PoolKind, amount: u32) {
        self.pool_mut(pool).increase(amount);
    }

    /// Permanently grow one pool. Budget rules live on the character,
    /// not here.
    pub fn add_pool(&mut self, pool: PoolKind, points: u32) {
        self.pool_mut(pool).upgrade(points as i32);
    }
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "might {}  speed {}  intellect {}",
            self.might, self.speed, self.intellect
        )
    }
}
