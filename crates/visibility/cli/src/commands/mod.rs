//! Command implementations and shared loading helpers

pub mod evaluate;
pub mod policy;
pub mod summary;

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;
use tracing::debug;
use visibility_engine::{EngineConfig, Profile, VisibilityContext, VisibilityEngine};

use crate::error::{CliError, CliResult};

/// Profile document and viewing context shared by `evaluate` and `summary`
#[derive(Args, Debug)]
pub struct ViewArgs {
    /// Profile document (JSON, as stored by the profile store)
    pub profile: PathBuf,

    /// Id of the viewing member
    #[arg(long)]
    pub viewer: String,

    /// Viewer's current organization
    #[arg(long)]
    pub org: Option<String>,

    /// The viewer is the profile's owner
    #[arg(long)]
    pub own: bool,
}

impl ViewArgs {
    pub fn context(&self) -> VisibilityContext {
        let context = if self.own {
            VisibilityContext::owner(self.viewer.clone())
        } else {
            VisibilityContext::viewer(self.viewer.clone())
        };
        match &self.org {
            Some(org) => context.in_organization(org.clone()),
            None => context,
        }
    }
}

fn read(path: &Path) -> CliResult<String> {
    fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.display().to_string(),
        source,
    })
}

/// Build the engine from a config file, or the standard policy.
pub fn load_engine(config: Option<&Path>) -> CliResult<VisibilityEngine> {
    let config = match config {
        Some(path) => {
            debug!(path = %path.display(), "Loading engine configuration");
            EngineConfig::from_json_str(&read(path)?)?
        }
        None => EngineConfig::default(),
    };
    Ok(VisibilityEngine::new(config)?)
}

pub fn load_profile(path: &Path) -> CliResult<Profile> {
    let profile: Profile = serde_json::from_str(&read(path)?)?;
    debug!(path = %path.display(), name = profile.core.name.as_str(), "Loaded profile");
    Ok(profile)
}
