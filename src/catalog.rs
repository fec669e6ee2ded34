//! Sorted in-memory cache of the rules eligible for auto-matching.
//!
//! The catalog is a derived view of the store, rebuilt wholesale after every
//! width/height mutation and at startup. It is never updated incrementally
//! and never persisted.

use tracing::debug;

use crate::host::ConfigStore;
use crate::store::RuleStore;

/// One matchable rule: the rule applies while the terminal fits under either
/// threshold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleEntry {
    pub name: String,
    pub max_width: u32,
    pub max_height: u32,
}

#[derive(Debug, Default)]
pub struct RuleCatalog {
    entries: Vec<RuleEntry>,
}

impl RuleCatalog {
    /// Rebuilds the catalog from the store. Rules missing either dimension,
    /// or whose stored dimensions fail to parse, are skipped rather than
    /// surfaced as errors; they simply cannot take part in matching.
    pub fn refresh<C: ConfigStore>(&mut self, store: &RuleStore<C>) {
        let mut entries = Vec::new();
        for name in store.rule_names() {
            let (Some(width), Some(height)) = (store.width(&name), store.height(&name)) else {
                debug!(%name, "rule is missing a dimension, excluding from catalog");
                continue;
            };
            match (width.parse::<u32>(), height.parse::<u32>()) {
                (Ok(max_width), Ok(max_height)) => {
                    entries.push(RuleEntry { name, max_width, max_height })
                }
                _ => debug!(%name, %width, %height, "rule has non-numeric dimensions, excluding"),
            }
        }
        entries.sort_by_key(|entry| (entry.max_width, entry.max_height));
        self.entries = entries;
    }

    /// Entries in ascending `(max_width, max_height)` order.
    pub fn entries(&self) -> &[RuleEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
