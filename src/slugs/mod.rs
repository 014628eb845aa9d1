// SPDX-License-Identifier: PMPL-1.0-or-later

//! Slug translation table.
//!
//! A [`SlugMap`] holds four partitions of English↔Hebrew slug pairs. Each
//! partition keeps its entries in insertion order and builds forward and
//! reverse indices once, at construction. When the table has duplicates
//! (a data bug, reported by [`SlugMap::issues`]) the first entry in
//! insertion order wins in both directions.
//!
//! The table is immutable after construction. The built-in content lives
//! in [`table`] and is exposed through [`SlugMap::builtin`].

mod export;
mod loader;
mod resolver;
mod table;

pub use export::TableFormat;
pub use loader::TableError;
pub use resolver::{to_target_slug, to_target_slug_builtin, translate};

use crate::types::{Partition, TableIssue, BUSINESS_SEGMENT, CATEGORY_SEGMENT};
use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};

/// One partition: ordered `(english, hebrew)` pairs plus lookup indices.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartitionTable {
    entries: Vec<(String, String)>,
    forward: HashMap<String, usize>,
    reverse: HashMap<String, usize>,
}

impl PartitionTable {
    pub fn from_pairs<I, E, H>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (E, H)>,
        E: Into<String>,
        H: Into<String>,
    {
        let mut table = PartitionTable::default();
        for (english, hebrew) in pairs {
            table.push(english.into(), hebrew.into());
        }
        table
    }

    fn push(&mut self, english: String, hebrew: String) {
        let index = self.entries.len();
        self.forward.entry(english.clone()).or_insert(index);
        self.reverse.entry(hebrew.clone()).or_insert(index);
        self.entries.push((english, hebrew));
    }

    /// Hebrew slug for an English key.
    pub fn hebrew_for(&self, english: &str) -> Option<&str> {
        self.forward
            .get(english)
            .map(|&index| self.entries[index].1.as_str())
    }

    /// English key whose Hebrew value equals `hebrew` (first in insertion order).
    pub fn english_for(&self, hebrew: &str) -> Option<&str> {
        self.reverse
            .get(hebrew)
            .map(|&index| self.entries[index].0.as_str())
    }

    pub fn contains_english(&self, english: &str) -> bool {
        self.forward.contains_key(english)
    }

    /// Entries in insertion order, duplicates included.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(english, hebrew)| (english.as_str(), hebrew.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The four-partition slug table consumed by the resolver and path switcher.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlugMap {
    partitions: [PartitionTable; 4],
}

impl SlugMap {
    /// An empty table: every lookup falls back to identity.
    pub fn new() -> Self {
        Self::default()
    }

    /// The table compiled into the crate.
    pub fn builtin() -> &'static SlugMap {
        &table::BUILTIN
    }

    /// Replace one partition, keeping the others.
    pub fn with_partition<I, E, H>(mut self, partition: Partition, pairs: I) -> Self
    where
        I: IntoIterator<Item = (E, H)>,
        E: Into<String>,
        H: Into<String>,
    {
        self.partitions[partition.index()] = PartitionTable::from_pairs(pairs);
        self
    }

    pub fn partition(&self, partition: Partition) -> &PartitionTable {
        &self.partitions[partition.index()]
    }

    /// Total number of entries across all partitions.
    pub fn len(&self) -> usize {
        self.partitions.iter().map(PartitionTable::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.partitions.iter().all(PartitionTable::is_empty)
    }

    /// Data-quality problems in the table, in partition then entry order.
    pub fn issues(&self) -> Vec<TableIssue> {
        let mut issues = Vec::new();
        for partition in Partition::all() {
            let table = self.partition(partition);
            let mut seen_english = HashSet::new();
            let mut seen_hebrew: HashMap<&str, &str> = HashMap::new();

            for (english, hebrew) in table.iter() {
                if english.trim().is_empty() || hebrew.trim().is_empty() {
                    issues.push(TableIssue::EmptySlug {
                        partition,
                        english: english.to_string(),
                    });
                }
                for slug in [english, hebrew] {
                    if slug.contains(['/', '?', '#']) {
                        issues.push(TableIssue::ReservedCharacter {
                            partition,
                            slug: slug.to_string(),
                        });
                    }
                }
                if !seen_english.insert(english) {
                    issues.push(TableIssue::DuplicateEnglish {
                        partition,
                        slug: english.to_string(),
                    });
                    continue;
                }
                match seen_hebrew.entry(hebrew) {
                    Entry::Vacant(slot) => {
                        slot.insert(english);
                    }
                    Entry::Occupied(slot) => issues.push(TableIssue::DuplicateHebrew {
                        partition,
                        slug: hebrew.to_string(),
                        first: slot.get().to_string(),
                        second: english.to_string(),
                    }),
                }
            }
        }

        let routes = self.partition(Partition::Routes);
        for structural in [CATEGORY_SEGMENT, BUSINESS_SEGMENT] {
            if routes.contains_english(structural) {
                issues.push(TableIssue::RouteShadowsStructural {
                    slug: structural.to_string(),
                });
            }
        }
        issues
    }
}
