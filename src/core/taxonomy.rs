use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ChartError;

/// Life-history group charted on the x-axis.
///
/// The set and its order are fixed for the lifetime of a model; `ALL` is the
/// authoritative order for input, iteration, and bar placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Group {
    Juvenile,
    Migratory,
    Resident,
}

impl Group {
    pub const ALL: [Group; 3] = [Group::Juvenile, Group::Migratory, Group::Resident];

    /// Stable lowercase key used at the string input boundary.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Group::Juvenile => "juvenile",
            Group::Migratory => "migratory",
            Group::Resident => "resident",
        }
    }

    #[must_use]
    pub const fn display_label(self) -> &'static str {
        match self {
            Group::Juvenile => "Juvenile",
            Group::Migratory => "Migratory",
            Group::Resident => "Resident",
        }
    }

    /// Position within `ALL`.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Group::Juvenile => 0,
            Group::Migratory => 1,
            Group::Resident => 2,
        }
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_label())
    }
}

impl FromStr for Group {
    type Err = ChartError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Group::ALL
            .into_iter()
            .find(|group| group.key().eq_ignore_ascii_case(input))
            .ok_or_else(|| ChartError::UnknownKey {
                key: input.to_owned(),
            })
    }
}

/// Sex/ecotype composition class stacked within each group.
///
/// Order is fixed and determines both input order and stacking order, bottom
/// segment first. Indices `i` and `i + 3` are the female/male counterparts of
/// the same ecotype and share a base shade in the style table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    FemaleMigratory,
    FemaleHeterozygote,
    FemaleResident,
    MaleMigratory,
    MaleHeterozygote,
    MaleResident,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::FemaleMigratory,
        Category::FemaleHeterozygote,
        Category::FemaleResident,
        Category::MaleMigratory,
        Category::MaleHeterozygote,
        Category::MaleResident,
    ];

    /// Stable lowercase key used at the string input boundary.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Category::FemaleMigratory => "female_migratory",
            Category::FemaleHeterozygote => "female_heterozygote",
            Category::FemaleResident => "female_resident",
            Category::MaleMigratory => "male_migratory",
            Category::MaleHeterozygote => "male_heterozygote",
            Category::MaleResident => "male_resident",
        }
    }

    /// Authored legend label. The Arabic portion is right-to-left script and
    /// must pass through a shaping step before use in an LTR legend.
    #[must_use]
    pub const fn display_label(self) -> &'static str {
        match self {
            Category::FemaleMigratory => "أنثى مهاجرة (Light Grey)",
            Category::FemaleHeterozygote => "أنثى خليط الجينات (Grey)",
            Category::FemaleResident => "أنثى مقيمة (Dark Grey)",
            Category::MaleMigratory => "ذكر مهاجر (Light Dashed Grey)",
            Category::MaleHeterozygote => "ذكر خليط الجينات (Dashed Grey)",
            Category::MaleResident => "ذكر مقيم (Dark Dashed Grey)",
        }
    }

    /// Position within `ALL`.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Category::FemaleMigratory => 0,
            Category::FemaleHeterozygote => 1,
            Category::FemaleResident => 2,
            Category::MaleMigratory => 3,
            Category::MaleHeterozygote => 4,
            Category::MaleResident => 5,
        }
    }
}

impl FromStr for Category {
    type Err = ChartError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.key().eq_ignore_ascii_case(input))
            .ok_or_else(|| ChartError::UnknownKey {
                key: input.to_owned(),
            })
    }
}
