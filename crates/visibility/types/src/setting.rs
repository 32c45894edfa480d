//! Per-section visibility settings.
//!
//! The profile store keeps each setting as an untyped value that may be a
//! boolean, an object keyed by organization id (with an optional `"all"`
//! catch-all), `null`, or missing entirely. [`VisibilitySetting::from_raw`]
//! is the one place that shape is interpreted; everything downstream matches
//! on the enum.

use std::collections::BTreeMap;

use serde::de::Deserializer;
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::section::Section;

/// Key of the catch-all entry in a per-organization settings object.
pub const FALLBACK_KEY: &str = "all";

/// The visibility rule a member declared for one section.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum VisibilitySetting {
    /// No explicit value was ever set; the default policy table applies.
    #[default]
    Default,
    /// One value regardless of the viewer's organization.
    Uniform(bool),
    /// Organization-specific overrides with an optional catch-all.
    PerOrganization {
        overrides: BTreeMap<String, bool>,
        fallback: Option<bool>,
    },
}

impl VisibilitySetting {
    /// An empty per-organization setting, to be filled with the builder methods.
    pub fn per_organization() -> Self {
        VisibilitySetting::PerOrganization {
            overrides: BTreeMap::new(),
            fallback: None,
        }
    }

    /// Add an override for `org_id`. Turns any other variant into a
    /// per-organization setting first.
    pub fn with_override(self, org_id: impl Into<String>, visible: bool) -> Self {
        let (mut overrides, fallback) = self.into_parts();
        overrides.insert(org_id.into(), visible);
        VisibilitySetting::PerOrganization {
            overrides,
            fallback,
        }
    }

    /// Set the catch-all value. Turns any other variant into a
    /// per-organization setting first.
    pub fn with_fallback(self, visible: bool) -> Self {
        let (overrides, _) = self.into_parts();
        VisibilitySetting::PerOrganization {
            overrides,
            fallback: Some(visible),
        }
    }

    fn into_parts(self) -> (BTreeMap<String, bool>, Option<bool>) {
        match self {
            VisibilitySetting::PerOrganization {
                overrides,
                fallback,
            } => (overrides, fallback),
            VisibilitySetting::Default | VisibilitySetting::Uniform(_) => (BTreeMap::new(), None),
        }
    }

    pub fn is_default(&self) -> bool {
        matches!(self, VisibilitySetting::Default)
    }

    /// Interpret a raw profile-store value.
    ///
    /// Total: any shape that is neither a boolean nor an object of booleans
    /// becomes `Default`, never an implicit "visible".
    pub fn from_raw(raw: &Value) -> Self {
        match raw {
            Value::Null => VisibilitySetting::Default,
            Value::Bool(visible) => VisibilitySetting::Uniform(*visible),
            Value::Object(entries) => {
                let mut overrides = BTreeMap::new();
                let mut fallback = None;
                for (key, value) in entries {
                    let Some(visible) = value.as_bool() else {
                        warn!(
                            key = key.as_str(),
                            "Per-organization visibility entry is not a boolean, using default policy"
                        );
                        return VisibilitySetting::Default;
                    };
                    if key == FALLBACK_KEY {
                        fallback = Some(visible);
                    } else {
                        overrides.insert(key.clone(), visible);
                    }
                }
                VisibilitySetting::PerOrganization {
                    overrides,
                    fallback,
                }
            }
            Value::Number(_) | Value::String(_) | Value::Array(_) => {
                warn!(
                    shape = value_kind(raw),
                    "Malformed visibility setting, using default policy"
                );
                VisibilitySetting::Default
            }
        }
    }

    /// The raw profile-store representation of this setting.
    pub fn to_raw(&self) -> Value {
        match self {
            VisibilitySetting::Default => Value::Null,
            VisibilitySetting::Uniform(visible) => Value::Bool(*visible),
            VisibilitySetting::PerOrganization {
                overrides,
                fallback,
            } => {
                let mut entries: serde_json::Map<String, Value> = overrides
                    .iter()
                    .map(|(org, visible)| (org.clone(), Value::Bool(*visible)))
                    .collect();
                if let Some(visible) = fallback {
                    entries.insert(FALLBACK_KEY.to_string(), Value::Bool(*visible));
                }
                Value::Object(entries)
            }
        }
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl Serialize for VisibilitySetting {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            VisibilitySetting::Default => serializer.serialize_none(),
            VisibilitySetting::Uniform(visible) => serializer.serialize_bool(*visible),
            VisibilitySetting::PerOrganization {
                overrides,
                fallback,
            } => {
                let len = overrides.len() + usize::from(fallback.is_some());
                let mut map = serializer.serialize_map(Some(len))?;
                for (org, visible) in overrides {
                    map.serialize_entry(org, visible)?;
                }
                if let Some(visible) = fallback {
                    map.serialize_entry(FALLBACK_KEY, visible)?;
                }
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for VisibilitySetting {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Value::deserialize(deserializer)?;
        Ok(VisibilitySetting::from_raw(&raw))
    }
}

static DEFAULT_SETTING: VisibilitySetting = VisibilitySetting::Default;

/// The settings block embedded in a profile's `personal` section.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct VisibilitySettings {
    pub skills: VisibilitySetting,
    pub personal: VisibilitySetting,
    pub experience: VisibilitySetting,
    pub contact: VisibilitySetting,
}

impl VisibilitySettings {
    /// All sections at `Default`.
    pub const fn new() -> Self {
        Self {
            skills: VisibilitySetting::Default,
            personal: VisibilitySetting::Default,
            experience: VisibilitySetting::Default,
            contact: VisibilitySetting::Default,
        }
    }

    /// Interpret a raw settings block.
    ///
    /// Only an object carries settings; each known section key goes through
    /// [`VisibilitySetting::from_raw`] and unknown keys are ignored. Any other
    /// shape leaves every section at `Default`.
    pub fn from_raw(raw: &Value) -> Self {
        let mut settings = Self::new();
        match raw {
            Value::Object(entries) => {
                for section in Section::GATED {
                    if let Some(value) = entries.get(section.as_str()) {
                        settings.set(section, VisibilitySetting::from_raw(value));
                    }
                }
            }
            Value::Null => {}
            Value::Bool(_) | Value::Number(_) | Value::String(_) | Value::Array(_) => {
                warn!(
                    shape = value_kind(raw),
                    "Malformed visibility settings block, using default policy"
                );
            }
        }
        settings
    }

    /// Setting for a section. `core` has no setting and always reads as
    /// `Default`.
    pub fn get(&self, section: Section) -> &VisibilitySetting {
        match section {
            Section::Core => &DEFAULT_SETTING,
            Section::Skills => &self.skills,
            Section::Personal => &self.personal,
            Section::Experience => &self.experience,
            Section::Contact => &self.contact,
        }
    }

    /// Replace the setting of a gated section. Returns `false` for `core`,
    /// which cannot be configured.
    pub fn set(&mut self, section: Section, setting: VisibilitySetting) -> bool {
        let slot = match section {
            Section::Core => return false,
            Section::Skills => &mut self.skills,
            Section::Personal => &mut self.personal,
            Section::Experience => &mut self.experience,
            Section::Contact => &mut self.contact,
        };
        *slot = setting;
        true
    }
}

impl<'de> Deserialize<'de> for VisibilitySettings {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Value::deserialize(deserializer)?;
        Ok(VisibilitySettings::from_raw(&raw))
    }
}
