//! ecotype-chart: composition validation and stacked-proportion rendering.
//!
//! Two components consumed in sequence by an external presentation layer:
//! [`CompositionModel`] holds per-group category percentages and reports the
//! sum-to-100 invariant; [`StackedProportionRenderer`] deterministically turns
//! a model snapshot into a [`ChartArtifact`] (stacked segments, grey/hatch
//! styles, shaped legend labels, fixed percentage axis). The optional
//! `cairo-backend` feature adds offscreen drawing and print-quality PNG
//! export.

pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use crate::core::{Category, CompositionModel, CompositionSnapshot, Group};
pub use error::{ChartError, ChartResult};
pub use render::{ChartArtifact, StackedProportionRenderer};
