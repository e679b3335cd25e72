use smallvec::SmallVec;
use tracing::debug;

use crate::core::{Category, CompositionSnapshot, Group};
use crate::render::artifact::{AxisBounds, ChartArtifact, GroupStack, LegendEntry, StackedSegment};
use crate::render::shaping::{BidiShaper, LabelShaper};
use crate::render::style::segment_style;

/// Deterministically projects a composition snapshot into a `ChartArtifact`.
///
/// The renderer is a stateless transformer apart from the injected label
/// shaper. It never normalizes values: a group whose total is not 100 simply
/// produces a stack that under- or overshoots the fixed percentage axis.
pub struct StackedProportionRenderer {
    shaper: Box<dyn LabelShaper>,
}

impl Default for StackedProportionRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl StackedProportionRenderer {
    /// Renderer with the default bidi shaper.
    #[must_use]
    pub fn new() -> Self {
        Self::with_shaper(Box::new(BidiShaper))
    }

    /// Renderer with an injected shaping step.
    #[must_use]
    pub fn with_shaper(shaper: Box<dyn LabelShaper>) -> Self {
        Self { shaper }
    }

    /// Projects one snapshot into an artifact.
    ///
    /// Guarantees, per group: segments appear in fixed category order, the
    /// first baseline is 0, baselines are monotonically non-decreasing, and
    /// `total` equals the snapshot's `group_total` with identical fold order.
    /// Rendering the same snapshot twice yields an identical artifact.
    #[must_use]
    pub fn render(&self, snapshot: &CompositionSnapshot) -> ChartArtifact {
        // Shaping runs once over the ordered category list, not per segment.
        let legend = Category::ALL
            .into_iter()
            .map(|category| LegendEntry {
                category,
                label: self.shaper.shape(category.display_label()),
                style: segment_style(category),
            })
            .collect();

        let mut stacks = Vec::with_capacity(Group::ALL.len());
        for group in Group::ALL {
            let mut segments: SmallVec<[StackedSegment; 6]> = SmallVec::new();
            let mut baseline = 0.0;
            for category in Category::ALL {
                let value = snapshot.value(group, category);
                segments.push(StackedSegment {
                    category,
                    value,
                    baseline,
                    style: segment_style(category),
                });
                baseline += value;
            }
            debug!(group = group.key(), total = baseline, "group stack projected");
            stacks.push(GroupStack {
                group,
                segments,
                total: baseline,
            });
        }

        ChartArtifact {
            stacks,
            legend,
            axis: AxisBounds::PERCENT,
        }
    }
}
