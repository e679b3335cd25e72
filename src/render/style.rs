use serde::{Deserialize, Serialize};

use crate::core::Category;
use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// Base grey shade shared by a female/male category pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Shade {
    Light,
    Medium,
    Dark,
}

impl Shade {
    /// lightgrey `#D3D3D3`, grey `#808080`, dimgray `#696969`.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Shade::Light => Color::rgb(211.0 / 255.0, 211.0 / 255.0, 211.0 / 255.0),
            Shade::Medium => Color::rgb(128.0 / 255.0, 128.0 / 255.0, 128.0 / 255.0),
            Shade::Dark => Color::rgb(105.0 / 255.0, 105.0 / 255.0, 105.0 / 255.0),
        }
    }
}

/// Resolved fill style for one stacked segment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SegmentStyle {
    pub color: Color,
    pub hatched: bool,
}

/// Fixed style lookup keyed by category position.
///
/// The three female categories and their male counterparts share a base shade
/// pairwise (index `i` with index `i + 3`); only the male trio carries the
/// diagonal hatch.
#[must_use]
pub const fn segment_style(category: Category) -> SegmentStyle {
    let shade = match category {
        Category::FemaleMigratory | Category::MaleMigratory => Shade::Light,
        Category::FemaleHeterozygote | Category::MaleHeterozygote => Shade::Medium,
        Category::FemaleResident | Category::MaleResident => Shade::Dark,
    };
    let hatched = matches!(
        category,
        Category::MaleMigratory | Category::MaleHeterozygote | Category::MaleResident
    );
    SegmentStyle {
        color: shade.color(),
        hatched,
    }
}
