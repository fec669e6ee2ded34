//! Best-fit layout selection over the sorted catalog.

use crate::catalog::{RuleCatalog, RuleEntry};

/// Picks the layout for the given terminal dimensions.
///
/// Scans the catalog in ascending `(max_width, max_height)` order and returns
/// the first rule the terminal fits under on *either* axis. The inclusive-or
/// is deliberate: a terminal matches a rule by satisfying just one of the two
/// bounds. When the terminal outgrows every rule on both axes, the last
/// (largest-threshold) rule acts as the catch-all. An empty catalog selects
/// nothing.
pub fn select(catalog: &RuleCatalog, width: u32, height: u32) -> Option<&RuleEntry> {
    let entries = catalog.entries();
    entries
        .iter()
        .find(|entry| width <= entry.max_width || height <= entry.max_height)
        .or_else(|| entries.last())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::store::RuleStore;
    use crate::testing::MemoryStore;

    fn catalog(rules: &[(&str, u32, u32)]) -> RuleCatalog {
        let store = RuleStore::new(MemoryStore::default());
        for (name, width, height) in rules {
            store.set_size(name, *width, *height);
        }
        let mut catalog = RuleCatalog::default();
        catalog.refresh(&store);
        catalog
    }

    fn selected(catalog: &RuleCatalog, width: u32, height: u32) -> Option<&str> {
        select(catalog, width, height).map(|entry| entry.name.as_str())
    }

    #[test]
    fn empty_catalog_selects_nothing() {
        let catalog = catalog(&[]);
        assert_eq!(selected(&catalog, 100, 30), None);
    }

    #[test]
    fn terminal_within_smallest_rule_selects_it() {
        let catalog = catalog(&[("wide", 200, 50), ("narrow", 80, 24)]);
        assert_eq!(selected(&catalog, 70, 20), Some("narrow"));
    }

    #[test]
    fn terminal_exceeding_smaller_rule_on_both_axes_falls_through() {
        let catalog = catalog(&[("wide", 200, 50), ("narrow", 80, 24)]);
        // 90 > 80 and 30 > 24, so narrow is out; 90 <= 200 matches wide.
        assert_eq!(selected(&catalog, 90, 30), Some("wide"));
    }

    #[test]
    fn single_satisfied_axis_is_enough() {
        let catalog = catalog(&[("narrow", 80, 24)]);
        assert_eq!(selected(&catalog, 500, 24), Some("narrow"));
        assert_eq!(selected(&catalog, 80, 500), Some("narrow"));
    }

    #[test]
    fn terminal_larger_than_everything_gets_the_last_rule() {
        let catalog = catalog(&[("narrow", 80, 24), ("mid", 120, 35), ("wide", 200, 50)]);
        assert_eq!(selected(&catalog, 1000, 1000), Some("wide"));
    }

    #[test]
    fn first_match_wins_under_ascending_sort() {
        let catalog = catalog(&[("b", 100, 30), ("a", 100, 20)]);
        // Equal widths, so the rule with the smaller height sorts first and
        // takes any terminal that fits its width.
        assert_eq!(selected(&catalog, 90, 25), Some("a"));
    }

    #[test]
    fn thresholds_are_inclusive() {
        let catalog = catalog(&[("exact", 80, 24)]);
        assert_eq!(selected(&catalog, 80, 24), Some("exact"));
    }
}
