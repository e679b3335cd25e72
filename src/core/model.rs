use indexmap::IndexMap;
use tracing::trace;

use crate::core::snapshot::CompositionSnapshot;
use crate::core::taxonomy::{Category, Group};
use crate::error::{ChartError, ChartResult};

/// Mutable per-session composition table: one percentage per
/// (group, category) cell, every cell seeded at 0.0.
///
/// `IndexMap` is used so iteration and snapshots follow the fixed
/// `Group::ALL` × `Category::ALL` order regardless of mutation order.
///
/// The sum-to-100 rule is a warning signal, never a gate: out-of-balance
/// groups are reported through `is_balanced`/`group_total` but are never
/// clamped, rescaled, or rejected.
///
/// One instance per session context. There is no internal locking; callers
/// needing multi-writer access must serialize externally.
#[derive(Debug, Clone, PartialEq)]
pub struct CompositionModel {
    table: IndexMap<Group, IndexMap<Category, f64>>,
}

impl Default for CompositionModel {
    fn default() -> Self {
        Self::new()
    }
}

impl CompositionModel {
    #[must_use]
    pub fn new() -> Self {
        let mut table = IndexMap::with_capacity(Group::ALL.len());
        for group in Group::ALL {
            let mut row = IndexMap::with_capacity(Category::ALL.len());
            for category in Category::ALL {
                row.insert(category, 0.0);
            }
            table.insert(group, row);
        }
        Self { table }
    }

    /// Overwrites the value for one cell.
    ///
    /// Rejects non-finite values and values outside `0..=100` with
    /// `ChartError::OutOfRange`, leaving the prior value untouched.
    /// Idempotent for equal inputs.
    pub fn set(&mut self, group: Group, category: Category, value: f64) -> ChartResult<()> {
        if !value.is_finite() || !(0.0..=100.0).contains(&value) {
            return Err(ChartError::OutOfRange { value });
        }

        let entry = self
            .table
            .get_mut(&group)
            .and_then(|row| row.get_mut(&category))
            .ok_or_else(|| ChartError::UnknownKey {
                key: format!("{}/{}", group.key(), category.key()),
            })?;
        *entry = value;
        trace!(
            group = group.key(),
            category = category.key(),
            value,
            "composition entry updated"
        );
        Ok(())
    }

    /// String-boundary variant of `set` for hosts that forward raw field
    /// names; unrecognized names fail with `ChartError::UnknownKey` and
    /// mutate nothing.
    pub fn set_by_key(&mut self, group: &str, category: &str, value: f64) -> ChartResult<()> {
        let group = group.parse::<Group>()?;
        let category = category.parse::<Category>()?;
        self.set(group, category, value)
    }

    /// Current value for one cell; 0.0 if never set.
    #[must_use]
    pub fn get(&self, group: Group, category: Category) -> f64 {
        self.table
            .get(&group)
            .and_then(|row| row.get(&category))
            .copied()
            .unwrap_or(0.0)
    }

    /// String-boundary variant of `get`.
    pub fn get_by_key(&self, group: &str, category: &str) -> ChartResult<f64> {
        let group = group.parse::<Group>()?;
        let category = category.parse::<Category>()?;
        Ok(self.get(group, category))
    }

    /// Sum of all category values for one group, in fixed category order.
    #[must_use]
    pub fn group_total(&self, group: Group) -> f64 {
        Category::ALL
            .into_iter()
            .map(|category| self.get(group, category))
            .sum()
    }

    /// True iff the group's total equals 100 exactly.
    ///
    /// No epsilon band is applied: this preserves the reference warning
    /// behavior, where a total of 99.999... is reported as unbalanced.
    #[must_use]
    pub fn is_balanced(&self, group: Group) -> bool {
        self.group_total(group) == 100.0
    }

    /// Wholesale re-initialization to the all-zero state.
    pub fn reset(&mut self) {
        *self = Self::new();
        trace!("composition model reset");
    }

    /// Immutable, fully ordered copy of the table as of this call.
    ///
    /// Recomputed every time; there is no caching layer between the model
    /// and its snapshots.
    #[must_use]
    pub fn snapshot(&self) -> CompositionSnapshot {
        CompositionSnapshot::from_table(self.table.clone())
    }
}
