use std::collections::BTreeMap;

use tracing::{debug, trace};
use visibility_types::{
    Profile, Resolution, Section, SectionDecisions, ViewerRole, VisibilityContext,
    VisibilitySetting, VisibilitySettings,
};

use crate::config::DefaultPolicyTable;

/// PolicyResolver — computes a visibility decision for every section.
///
/// Pure: the same profile and context always produce the same resolution,
/// so callers may re-run it on every render without caching.
#[derive(Debug, Clone, Default)]
pub struct PolicyResolver {
    defaults: DefaultPolicyTable,
}

impl PolicyResolver {
    pub fn new(defaults: DefaultPolicyTable) -> Self {
        Self { defaults }
    }

    pub fn defaults(&self) -> &DefaultPolicyTable {
        &self.defaults
    }

    /// Resolve every known section of `profile` for `context`.
    pub fn resolve(&self, profile: &Profile, context: &VisibilityContext) -> Resolution {
        if Self::sees_everything(context) {
            debug!(
                viewer = context.viewer_id.as_str(),
                "Own profile, every section visible"
            );
            return Resolution {
                section_decisions: SectionDecisions::uniform(true),
                reasons: BTreeMap::new(),
            };
        }

        let settings = profile.settings();
        let mut section_decisions = SectionDecisions::new();
        let mut reasons = BTreeMap::new();

        for section in Section::ALL {
            let visible = self.resolve_section(settings, section, context);
            trace!(section = section.as_str(), visible, "Section resolved");
            section_decisions.insert(section, visible);
            if !visible {
                reasons.insert(section, section.hidden_reason());
            }
        }

        debug!(
            viewer = context.viewer_id.as_str(),
            organization = context.organization_id.as_deref().unwrap_or("-"),
            hidden = reasons.len(),
            "Profile visibility resolved"
        );

        Resolution {
            section_decisions,
            reasons,
        }
    }

    /// Whether `context` may see `section` of `profile`.
    pub fn section_visible(
        &self,
        profile: &Profile,
        context: &VisibilityContext,
        section: Section,
    ) -> bool {
        Self::sees_everything(context)
            || self.resolve_section(profile.settings(), section, context)
    }

    /// Viewers that bypass per-section settings.
    fn sees_everything(context: &VisibilityContext) -> bool {
        // No role changes visibility yet; give new roles explicit semantics here.
        match context.viewer_role {
            ViewerRole::Member => context.is_own_profile,
        }
    }

    /// Resolve a single section for a non-owner viewer.
    ///
    /// Precedence: organization override, then catch-all, then the default
    /// policy table. `core` is always visible.
    pub fn resolve_section(
        &self,
        settings: &VisibilitySettings,
        section: Section,
        context: &VisibilityContext,
    ) -> bool {
        if !section.is_gated() {
            return true;
        }

        match settings.get(section) {
            VisibilitySetting::Default => self.defaults.get(section),
            VisibilitySetting::Uniform(visible) => *visible,
            VisibilitySetting::PerOrganization {
                overrides,
                fallback,
            } => context
                .organization_id
                .as_ref()
                .and_then(|org| overrides.get(org).copied())
                .or(*fallback)
                .unwrap_or_else(|| self.defaults.get(section)),
        }
    }
}
