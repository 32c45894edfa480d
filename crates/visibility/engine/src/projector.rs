use tracing::trace;
use visibility_types::{CoreProfile, Profile, Section, SectionDecisions};

/// SectionProjector — builds the redacted copy of a profile.
///
/// Hidden collections are emptied, never omitted, because consumers expect
/// the fields to exist. A hidden `personal` block is omitted entirely so
/// that none of it, settings included, reaches the viewer.
pub struct SectionProjector;

impl SectionProjector {
    /// Project `profile` through `decisions`. Sections without a decision
    /// are treated as hidden.
    pub fn project(profile: &Profile, decisions: &SectionDecisions) -> Profile {
        let skills_visible = decisions.is_visible(Section::Skills);
        let experience_visible = decisions.is_visible(Section::Experience);
        let personal_visible = decisions.is_visible(Section::Personal);

        trace!(
            skills = skills_visible,
            experience = experience_visible,
            personal = personal_visible,
            "Projecting profile"
        );

        let core = &profile.core;
        Profile {
            core: CoreProfile {
                name: core.name.clone(),
                title: core.title.clone(),
                photo_url: core.photo_url.clone(),
                skills: if skills_visible {
                    core.skills.clone()
                } else {
                    Vec::new()
                },
                team_memberships: if experience_visible {
                    core.team_memberships.clone()
                } else {
                    Vec::new()
                },
            },
            personal: if personal_visible {
                profile.personal.clone()
            } else {
                None
            },
            organization_profiles: profile.organization_profiles.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use visibility_types::{PersonalInfo, VisibilitySetting, VisibilitySettings};

    fn full_profile() -> Profile {
        Profile {
            core: CoreProfile {
                name: "Ada".into(),
                title: "Engineer".into(),
                photo_url: Some("https://example.com/ada.png".into()),
                skills: vec!["rust".into(), "sql".into()],
                team_memberships: vec!["platform".into()],
            },
            personal: Some(PersonalInfo {
                hobbies: vec!["chess".into()],
                motto: Some("ship it".into()),
                settings: Some(VisibilitySettings {
                    personal: VisibilitySetting::Uniform(true),
                    ..VisibilitySettings::new()
                }),
                ..PersonalInfo::default()
            }),
            organization_profiles: [("org1".to_string(), json!({"badge": 7}))]
                .into_iter()
                .collect(),
        }
    }

    #[test]
    fn everything_visible_is_an_exact_copy() {
        let profile = full_profile();
        let projected = SectionProjector::project(&profile, &SectionDecisions::uniform(true));
        assert_eq!(projected, profile);
    }

    #[test]
    fn hidden_collections_are_emptied_not_omitted() {
        let profile = full_profile();
        let projected = SectionProjector::project(&profile, &SectionDecisions::uniform(false));
        assert!(projected.core.skills.is_empty());
        assert!(projected.core.team_memberships.is_empty());

        let value = serde_json::to_value(&projected).unwrap();
        assert_eq!(value["core"]["skills"], json!([]));
        assert_eq!(value["core"]["teamMemberships"], json!([]));
    }

    #[test]
    fn hidden_personal_is_absent() {
        let profile = full_profile();
        let decisions: SectionDecisions = [(Section::Personal, false)].into_iter().collect();
        let projected = SectionProjector::project(&profile, &decisions);
        assert!(projected.personal.is_none());
        let value = serde_json::to_value(&projected).unwrap();
        assert!(value.get("personal").is_none());
    }

    #[test]
    fn identity_and_organization_profiles_pass_through() {
        let profile = full_profile();
        let projected = SectionProjector::project(&profile, &SectionDecisions::new());
        assert_eq!(projected.core.name, "Ada");
        assert_eq!(projected.core.title, "Engineer");
        assert_eq!(projected.core.photo_url, profile.core.photo_url);
        assert_eq!(projected.organization_profiles, profile.organization_profiles);
    }

    #[test]
    fn sections_are_gated_independently() {
        let profile = full_profile();
        let decisions: SectionDecisions = [
            (Section::Skills, true),
            (Section::Experience, false),
            (Section::Personal, true),
        ]
        .into_iter()
        .collect();
        let projected = SectionProjector::project(&profile, &decisions);
        assert_eq!(projected.core.skills, profile.core.skills);
        assert!(projected.core.team_memberships.is_empty());
        assert_eq!(projected.personal, profile.personal);
    }
}
