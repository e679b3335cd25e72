use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::taxonomy::{Category, Group};
use crate::error::{ChartError, ChartResult};

pub const COMPOSITION_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

/// Immutable, fully ordered copy of a composition table, suitable for
/// handing to the renderer or serializing across a process boundary.
///
/// Produced by `CompositionModel::snapshot`; exposes read access only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompositionSnapshot {
    entries: IndexMap<Group, IndexMap<Category, f64>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompositionSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: CompositionSnapshot,
}

impl CompositionSnapshot {
    pub(crate) fn from_table(entries: IndexMap<Group, IndexMap<Category, f64>>) -> Self {
        Self { entries }
    }

    /// Value for one cell; 0.0 for cells absent from a deserialized payload.
    #[must_use]
    pub fn value(&self, group: Group, category: Category) -> f64 {
        self.entries
            .get(&group)
            .and_then(|row| row.get(&category))
            .copied()
            .unwrap_or(0.0)
    }

    /// Sum of category values for one group, in fixed category order.
    #[must_use]
    pub fn group_total(&self, group: Group) -> f64 {
        Category::ALL
            .into_iter()
            .map(|category| self.value(group, category))
            .sum()
    }

    /// True iff the group's total equals 100 exactly (no epsilon band).
    #[must_use]
    pub fn is_balanced(&self, group: Group) -> bool {
        self.group_total(group) == 100.0
    }

    /// Groups in snapshot order.
    pub fn groups(&self) -> impl Iterator<Item = Group> + '_ {
        self.entries.keys().copied()
    }

    /// (category, value) rows for one group in snapshot order.
    pub fn group_values(&self, group: Group) -> impl Iterator<Item = (Category, f64)> + '_ {
        self.entries
            .get(&group)
            .into_iter()
            .flat_map(|row| row.iter().map(|(category, value)| (*category, *value)))
    }

    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = CompositionSnapshotJsonContractV1 {
            schema_version: COMPOSITION_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize snapshot contract v1: {e}"))
        })
    }

    /// Parses either a bare snapshot payload or the versioned v1 contract.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<CompositionSnapshot>(input) {
            return Ok(snapshot);
        }
        let payload: CompositionSnapshotJsonContractV1 =
            serde_json::from_str(input).map_err(|e| {
                ChartError::InvalidData(format!("failed to parse snapshot json payload: {e}"))
            })?;
        if payload.schema_version != COMPOSITION_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported snapshot schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.snapshot)
    }
}
