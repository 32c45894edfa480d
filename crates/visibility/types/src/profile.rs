//! Profile records as supplied by the profile store.
//!
//! Field names follow the store's camelCase JSON so records deserialize
//! without a mapping layer.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::setting::VisibilitySettings;

static EMPTY_SETTINGS: VisibilitySettings = VisibilitySettings::new();

/// A member's profile.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub core: CoreProfile,
    /// Absent when the member never filled it in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub personal: Option<PersonalInfo>,
    /// Opaque per-organization extensions, passed through untouched.
    #[serde(default)]
    pub organization_profiles: BTreeMap<String, Value>,
}

impl Profile {
    /// The member's declared visibility settings.
    ///
    /// A missing `personal` block or a missing `settings` value reads as
    /// every section at `Default`.
    pub fn settings(&self) -> &VisibilitySettings {
        self.personal
            .as_ref()
            .and_then(|personal| personal.settings.as_ref())
            .unwrap_or(&EMPTY_SETTINGS)
    }
}

/// Identity fields plus the two gated collections.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoreProfile {
    pub name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub photo_url: Option<String>,
    /// Gated by the `skills` section.
    #[serde(default)]
    pub skills: Vec<String>,
    /// Gated by the `experience` section.
    #[serde(default)]
    pub team_memberships: Vec<String>,
}

/// The optional personal block, gated as a whole by the `personal` section.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    #[serde(default)]
    pub hobbies: Vec<String>,
    /// Category to favorite, e.g. `"book" -> "Dune"`.
    #[serde(default)]
    pub favorites: BTreeMap<String, String>,
    #[serde(default)]
    pub learning_topics: Vec<String>,
    #[serde(default)]
    pub motto: Option<String>,
    #[serde(default)]
    pub activities: Vec<String>,
    #[serde(default)]
    pub custom_fields: BTreeMap<String, Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<VisibilitySettings>,
}
