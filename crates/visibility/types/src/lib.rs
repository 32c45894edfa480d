//! # visibility-types
//!
//! Shared data model for the profile visibility policy engine.
//!
//! - **Section** — the named, independently gated parts of a profile
//! - **VisibilitySetting** — the per-section rule a member declared
//!   (`Default`, `Uniform`, or `PerOrganization`)
//! - **Profile** — the raw record supplied by the profile store
//! - **VisibilityContext** — who is looking, and from which organization
//! - **SectionDecisions / VisibilityResult / VisibilitySummary** — what the
//!   engine hands back to presentation consumers
//!
//! Every value here is plain data: created per evaluation, never mutated by
//! the engine.

#![deny(unsafe_code)]

pub mod context;
pub mod decision;
pub mod profile;
pub mod section;
pub mod setting;

pub use context::{ViewerRole, VisibilityContext};
pub use decision::{
    Resolution, SectionDecisions, VisibilityLevel, VisibilityResult, VisibilitySummary,
};
pub use profile::{CoreProfile, PersonalInfo, Profile};
pub use section::{Section, UnknownSection};
pub use setting::{VisibilitySetting, VisibilitySettings, FALLBACK_KEY};
