//! Engine configuration.
//!
//! Defines the default policy table consulted when a member never set a
//! section, and the ratio thresholds used to classify exposure levels.

use serde::{Deserialize, Serialize};
use visibility_types::Section;

use crate::error::{Result, VisibilityError};

/// Visibility of each section when no explicit setting applies.
///
/// One field per section so a new section cannot be added without a
/// default; [`DefaultPolicyTable::get`] matches exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultPolicyTable {
    pub core: bool,
    pub skills: bool,
    pub personal: bool,
    pub experience: bool,
    pub contact: bool,
}

impl DefaultPolicyTable {
    /// Identity, skills and experience visible; personal and contact hidden.
    pub const STANDARD: DefaultPolicyTable = DefaultPolicyTable {
        core: true,
        skills: true,
        personal: false,
        experience: true,
        contact: false,
    };

    pub fn get(&self, section: Section) -> bool {
        match section {
            Section::Core => self.core,
            Section::Skills => self.skills,
            Section::Personal => self.personal,
            Section::Experience => self.experience,
            Section::Contact => self.contact,
        }
    }
}

impl Default for DefaultPolicyTable {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Visible-ratio boundaries between exposure levels.
///
/// `ratio >= public` is public, `organization <= ratio < public` is
/// organization, anything lower is private.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryThresholds {
    pub public: f64,
    pub organization: f64,
}

impl Default for SummaryThresholds {
    fn default() -> Self {
        Self {
            public: 0.8,
            organization: 0.4,
        }
    }
}

impl SummaryThresholds {
    pub fn validate(&self) -> Result<()> {
        let in_unit = |v: f64| v.is_finite() && (0.0..=1.0).contains(&v);
        if !in_unit(self.public) || !in_unit(self.organization) {
            return Err(VisibilityError::InvalidConfiguration {
                reason: format!(
                    "summary thresholds must lie in [0, 1], got public={} organization={}",
                    self.public, self.organization
                ),
            });
        }
        if self.organization > self.public {
            return Err(VisibilityError::InvalidConfiguration {
                reason: format!(
                    "organization threshold {} exceeds public threshold {}",
                    self.organization, self.public
                ),
            });
        }
        Ok(())
    }
}

/// Complete configuration for a [`crate::VisibilityEngine`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub default_policy: DefaultPolicyTable,
    pub thresholds: SummaryThresholds,
}

impl EngineConfig {
    /// Parse and validate a JSON configuration document. Omitted fields take
    /// their standard values.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: EngineConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.default_policy.core {
            return Err(VisibilityError::InvalidConfiguration {
                reason: "core identity fields are never gated; default_policy.core must be true"
                    .into(),
            });
        }
        self.thresholds.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_table() {
        let table = DefaultPolicyTable::default();
        let decisions: Vec<bool> = Section::ALL.iter().map(|s| table.get(*s)).collect();
        assert_eq!(decisions, vec![true, true, false, true, false]);
    }

    #[test]
    fn default_config_is_valid() {
        assert!(EngineConfig::default().validate().is_ok());
    }

    #[test]
    fn partial_json_inherits_standard_values() {
        let config =
            EngineConfig::from_json_str(r#"{"default_policy": {"contact": true}}"#).unwrap();
        assert!(config.default_policy.contact);
        assert!(!config.default_policy.personal);
        assert_eq!(config.thresholds, SummaryThresholds::default());
    }

    #[test]
    fn rejects_hidden_core() {
        let err = EngineConfig::from_json_str(r#"{"default_policy": {"core": false}}"#)
            .unwrap_err();
        assert!(matches!(err, VisibilityError::InvalidConfiguration { .. }));
    }

    #[test]
    fn rejects_inverted_or_out_of_range_thresholds() {
        let inverted = SummaryThresholds {
            public: 0.3,
            organization: 0.5,
        };
        assert!(inverted.validate().is_err());

        let out_of_range = SummaryThresholds {
            public: 1.5,
            organization: 0.4,
        };
        assert!(out_of_range.validate().is_err());

        let nan = SummaryThresholds {
            public: f64::NAN,
            organization: 0.4,
        };
        assert!(nan.validate().is_err());
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = EngineConfig::from_json_str("not json").unwrap_err();
        assert!(matches!(err, VisibilityError::ConfigParse { .. }));
    }
}
