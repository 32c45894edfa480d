use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A named, independently gated portion of a profile.
///
/// The variant order is the canonical display order and the key order of
/// every decision map.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    /// Identity fields (name, title, photo). Never gated.
    Core,
    /// `core.skills`
    Skills,
    /// The whole `personal` block, including its embedded settings
    Personal,
    /// `core.teamMemberships`
    Experience,
    /// Contact details
    Contact,
}

impl Section {
    /// Every known section, in canonical order.
    pub const ALL: [Section; 5] = [
        Section::Core,
        Section::Skills,
        Section::Personal,
        Section::Experience,
        Section::Contact,
    ];

    /// Sections whose visibility a member can configure.
    pub const GATED: [Section; 4] = [
        Section::Skills,
        Section::Personal,
        Section::Experience,
        Section::Contact,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Core => "core",
            Section::Skills => "skills",
            Section::Personal => "personal",
            Section::Experience => "experience",
            Section::Contact => "contact",
        }
    }

    pub fn is_gated(&self) -> bool {
        !matches!(self, Section::Core)
    }

    /// Human-readable cause reported when this section resolves to hidden.
    pub fn hidden_reason(&self) -> String {
        match self {
            Section::Personal => "User has kept personal information private".to_string(),
            Section::Contact => "Contact information is private".to_string(),
            Section::Core | Section::Skills | Section::Experience => {
                format!("User has restricted {} visibility", self.as_str())
            }
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when parsing a section name that is not one of [`Section::ALL`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown profile section: {0}")]
pub struct UnknownSection(pub String);

impl FromStr for Section {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::ALL
            .into_iter()
            .find(|section| section.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}
