use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Category, Group};
use crate::render::style::SegmentStyle;

/// Fixed vertical axis range of the chart, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisBounds {
    pub min: f64,
    pub max: f64,
}

impl AxisBounds {
    /// The percentage axis is always [0, 100], regardless of actual totals:
    /// an unbalanced group's bar visibly undershoots or clips.
    pub const PERCENT: AxisBounds = AxisBounds {
        min: 0.0,
        max: 100.0,
    };
}

/// One stacked slice of a group's bar.
///
/// `baseline` is the running sum of all categories before this one within
/// the group; the segment spans `baseline..baseline + value` on the axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StackedSegment {
    pub category: Category,
    pub value: f64,
    pub baseline: f64,
    pub style: SegmentStyle,
}

impl StackedSegment {
    /// Axis position of the segment's upper edge.
    #[must_use]
    pub fn top(&self) -> f64 {
        self.baseline + self.value
    }
}

/// All segments for one group, stacked bottom-up in fixed category order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupStack {
    pub group: Group,
    pub segments: SmallVec<[StackedSegment; 6]>,
    /// Sum of segment values; equals the snapshot's `group_total` and is
    /// never rescaled to 100.
    pub total: f64,
}

/// Legend row carrying the shaped display label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendEntry {
    pub category: Category,
    pub label: String,
    pub style: SegmentStyle,
}

/// Immutable rendering of one composition snapshot.
///
/// Regenerated wholesale on every render call; never mutated in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartArtifact {
    /// One stack per group, in fixed group order.
    pub stacks: Vec<GroupStack>,
    /// One entry per category, in fixed category order.
    pub legend: Vec<LegendEntry>,
    pub axis: AxisBounds,
}

impl ChartArtifact {
    #[must_use]
    pub fn stack(&self, group: Group) -> Option<&GroupStack> {
        self.stacks.iter().find(|stack| stack.group == group)
    }

    /// True when every cell in every stack is zero.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stacks.iter().all(|stack| stack.total == 0.0)
    }
}
