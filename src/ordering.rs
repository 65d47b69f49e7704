//! Property ordering engine
//!
//! Decides the canonical order of a style object's property names and finds
//! the first property that breaks it. Only the first violation is reported:
//! fixing one move can cascade, so the host applies the fix and re-runs
//! until the verdict is `InOrder` (the fixed-point loop is the host's job).

use crate::config::{LintConfig, OrderingMode, SortRemainingProperties};
use crate::properties::{concentric_key, PropertyGroup};
use std::cmp::Ordering;

/// One property as it appears in a style object
///
/// Built fresh per style-object visit and never mutated. `source_position`
/// is the 0-based index in the authored list, which is how the host finds
/// the AST node a verdict refers to. The concentric key is populated only
/// when the engine runs in concentric mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyEntry {
    pub name: String,
    pub source_position: usize,
    pub group: Option<PropertyGroup>,
    pub priority_in_group: u16,
}

/// Immutable result of one ordering evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderingVerdict {
    InOrder,
    /// The property at `current_index` must move to before the property at
    /// `should_come_before_index`. Expressed as a move of source ranges so
    /// the host's fix stays minimal and preserves surrounding formatting.
    Violation {
        current_index: usize,
        should_come_before_index: usize,
    },
}

impl OrderingVerdict {
    pub fn is_in_order(&self) -> bool {
        matches!(self, OrderingVerdict::InOrder)
    }
}

/// Ordering engine configured with a mode and an unmapped-property fallback
pub struct OrderingEngine {
    mode: OrderingMode,
    sort_remaining: SortRemainingProperties,
}

impl OrderingEngine {
    pub fn new(config: &LintConfig) -> Self {
        Self {
            mode: config.ordering_mode,
            sort_remaining: config.sort_remaining,
        }
    }

    /// Build entries for one style object from its authored name sequence
    pub fn build_entries<S: AsRef<str>>(&self, names: &[S]) -> Vec<PropertyEntry> {
        names
            .iter()
            .enumerate()
            .map(|(position, name)| {
                let name = name.as_ref();
                let key = match self.mode {
                    OrderingMode::Alphabetical => None,
                    OrderingMode::Concentric => concentric_key(name),
                };
                PropertyEntry {
                    name: name.to_string(),
                    source_position: position,
                    group: key.map(|(group, _)| group),
                    priority_in_group: key.map_or(0, |(_, priority)| priority),
                }
            })
            .collect()
    }

    /// Walk the authored sequence once and report the first property that
    /// sorts before its predecessor. Empty and singleton lists are trivially
    /// in order. Entries with equal sort keys are never flagged against each
    /// other; stability, not strict ordering, is required there.
    pub fn evaluate(&self, entries: &[PropertyEntry]) -> OrderingVerdict {
        for current in 1..entries.len() {
            if self.compare(&entries[current - 1], &entries[current]) == Ordering::Greater {
                return OrderingVerdict::Violation {
                    current_index: current,
                    should_come_before_index: self.insertion_point(entries, current),
                };
            }
        }
        OrderingVerdict::InOrder
    }

    /// Canonical comparator for two entries
    pub fn compare(&self, a: &PropertyEntry, b: &PropertyEntry) -> Ordering {
        match self.mode {
            OrderingMode::Alphabetical => a.name.cmp(&b.name),
            OrderingMode::Concentric => self.compare_concentric(a, b),
        }
    }

    fn compare_concentric(&self, a: &PropertyEntry, b: &PropertyEntry) -> Ordering {
        match (a.group, b.group) {
            // Same group and priority compare equal: aliases mapped to one
            // slot must never be flagged against each other
            (Some(group_a), Some(group_b)) => group_a
                .rank()
                .cmp(&group_b.rank())
                .then(a.priority_in_group.cmp(&b.priority_in_group)),
            // Unmapped properties rank after every named group
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => match self.sort_remaining {
                SortRemainingProperties::Alphabetical => a.name.cmp(&b.name),
                SortRemainingProperties::Grouped => Ordering::Equal,
            },
        }
    }

    /// Earliest index whose entry should come after `entries[current]`;
    /// moving the offender there resolves the inversion in one pass
    fn insertion_point(&self, entries: &[PropertyEntry], current: usize) -> usize {
        for earlier in 0..current {
            if self.compare(&entries[earlier], &entries[current]) == Ordering::Greater {
                return earlier;
            }
        }
        current - 1
    }
}
