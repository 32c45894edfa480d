//! Outputs of the visibility engine.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::profile::Profile;
use crate::section::Section;

/// Resolved visibility per section, keyed in canonical section order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionDecisions(BTreeMap<Section, bool>);

impl SectionDecisions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every known section set to `visible`.
    pub fn uniform(visible: bool) -> Self {
        Section::ALL.into_iter().map(|s| (s, visible)).collect()
    }

    pub fn insert(&mut self, section: Section, visible: bool) {
        self.0.insert(section, visible);
    }

    pub fn get(&self, section: Section) -> Option<bool> {
        self.0.get(&section).copied()
    }

    /// A section without a decision is hidden.
    pub fn is_visible(&self, section: Section) -> bool {
        self.get(section).unwrap_or(false)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Section, bool)> + '_ {
        self.0.iter().map(|(section, visible)| (*section, *visible))
    }

    pub fn visible_sections(&self) -> Vec<Section> {
        self.iter().filter(|(_, v)| *v).map(|(s, _)| s).collect()
    }

    pub fn hidden_sections(&self) -> Vec<Section> {
        self.iter().filter(|(_, v)| !*v).map(|(s, _)| s).collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(Section, bool)> for SectionDecisions {
    fn from_iter<I: IntoIterator<Item = (Section, bool)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Output of the policy resolver.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    pub section_decisions: SectionDecisions,
    /// Populated only for hidden sections.
    #[serde(default)]
    pub reasons: BTreeMap<Section, String>,
}

/// Resolution plus the projected profile, as handed to presentation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VisibilityResult {
    pub projected_profile: Profile,
    pub section_decisions: SectionDecisions,
    #[serde(default)]
    pub reasons: BTreeMap<Section, String>,
}

/// Coarse exposure classification of a resolved profile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VisibilityLevel {
    Public,
    Organization,
    Private,
}

impl VisibilityLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            VisibilityLevel::Public => "public",
            VisibilityLevel::Organization => "organization",
            VisibilityLevel::Private => "private",
        }
    }
}

impl fmt::Display for VisibilityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Summary of a set of decisions, for "partial profile" affordances.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisibilitySummary {
    pub level: VisibilityLevel,
    pub visible_sections: Vec<Section>,
    pub hidden_sections: Vec<Section>,
    pub total_sections: usize,
}

impl VisibilitySummary {
    /// Fraction of sections that are visible; `0.0` when there are none.
    pub fn visible_ratio(&self) -> f64 {
        if self.total_sections == 0 {
            return 0.0;
        }
        self.visible_sections.len() as f64 / self.total_sections as f64
    }

    /// Whether the viewer sees less than the whole profile.
    pub fn is_partial(&self) -> bool {
        !self.hidden_sections.is_empty()
    }

    pub fn notice(&self) -> String {
        format!(
            "Viewing {} of {} profile sections",
            self.visible_sections.len(),
            self.total_sections
        )
    }
}
