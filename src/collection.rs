//! Caught-Creature Collection
//!
//! In-memory record of every creature caught during this session, keyed by
//! name. Purely session-local bookkeeping: nothing here persists or touches
//! the network.

use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, Utc};

use crate::catalog::Creature;

// == Caught Creature ==

/// One caught creature, flattened from its catalog record.
#[derive(Debug, Clone)]
pub struct CaughtCreature {
    pub name: String,
    pub rarity: u32,
    pub height: u32,
    pub weight: u32,
    /// Stat name to value, ordered for stable display
    pub stats: BTreeMap<String, u32>,
    pub kinds: Vec<String>,
    /// When this creature was caught
    pub caught_at: DateTime<Utc>,
}

impl CaughtCreature {
    /// Flattens a catalog record into a collection entry, stamped now.
    pub fn from_record(creature: &Creature) -> Self {
        Self {
            name: creature.name.clone(),
            rarity: creature.rarity,
            height: creature.height,
            weight: creature.weight,
            stats: creature
                .stats
                .iter()
                .map(|stat| (stat.name.clone(), stat.value))
                .collect(),
            kinds: creature.kinds.clone(),
            caught_at: Utc::now(),
        }
    }
}

// == Collection ==

/// The session's caught creatures.
#[derive(Debug, Default)]
pub struct Collection {
    caught: HashMap<String, CaughtCreature>,
}

impl Collection {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks whether the named creature has already been caught.
    pub fn contains(&self, name: &str) -> bool {
        self.caught.contains_key(name)
    }

    /// Records a catch. Callers check `contains` first; recording the same
    /// name twice just replaces the entry.
    pub fn record(&mut self, creature: &Creature) {
        self.caught
            .insert(creature.name.clone(), CaughtCreature::from_record(creature));
    }

    /// Looks up a caught creature by name.
    pub fn get(&self, name: &str) -> Option<&CaughtCreature> {
        self.caught.get(name)
    }

    /// Returns every caught name, sorted for stable listing.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.caught.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Checks whether nothing has been caught yet.
    pub fn is_empty(&self) -> bool {
        self.caught.is_empty()
    }

    /// Returns the number of caught creatures.
    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.caught.len()
    }
}
