use serde::{Deserialize, Serialize};

/// Role of the viewer within the current organization.
///
/// Informational only: no rule consults it yet. The resolver matches it
/// exhaustively, so a new role cannot be added without deciding what it
/// means for visibility.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewerRole {
    #[default]
    Member,
}

/// Who is viewing a profile, and from where.
///
/// Supplied by the organization context provider and trusted as-is; this is
/// not an authentication boundary.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisibilityContext {
    pub viewer_id: String,
    #[serde(default)]
    pub organization_id: Option<String>,
    #[serde(default)]
    pub is_own_profile: bool,
    #[serde(default)]
    pub viewer_role: ViewerRole,
}

impl VisibilityContext {
    /// Another member looking at the profile, outside any organization.
    pub fn viewer(viewer_id: impl Into<String>) -> Self {
        Self {
            viewer_id: viewer_id.into(),
            organization_id: None,
            is_own_profile: false,
            viewer_role: ViewerRole::Member,
        }
    }

    /// The profile's owner looking at their own profile.
    pub fn owner(viewer_id: impl Into<String>) -> Self {
        Self {
            is_own_profile: true,
            ..Self::viewer(viewer_id)
        }
    }

    pub fn in_organization(mut self, organization_id: impl Into<String>) -> Self {
        self.organization_id = Some(organization_id.into());
        self
    }

    pub fn with_role(mut self, role: ViewerRole) -> Self {
        self.viewer_role = role;
        self
    }
}
