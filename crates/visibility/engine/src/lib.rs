//! # visibility-engine
//!
//! Decides which sections of a member's profile a viewer may see and
//! produces a redacted copy containing only those sections.
//!
//! Three pure components, each depending only on the one before it:
//!
//! - **PolicyResolver** — settings + viewing context → per-section decisions
//!   and reasons for everything hidden
//! - **SectionProjector** — decisions + profile → projected profile
//! - **VisibilitySummarizer** — decisions → `public` / `organization` /
//!   `private` level and visible/hidden section lists
//!
//! [`VisibilityEngine`] bundles them behind one validated [`EngineConfig`].
//!
//! ## Invariants
//!
//! - An owner always sees their whole profile.
//! - An organization-specific override beats the catch-all, which beats the
//!   default policy table.
//! - Nothing from a hidden section is reachable from the projected profile.
//! - No evaluation can fail; malformed or missing input maps to the default
//!   policy, never to "visible".

#![deny(unsafe_code)]

pub mod config;
pub mod engine;
pub mod error;
pub mod projector;
pub mod resolver;
pub mod summarizer;

pub use config::{DefaultPolicyTable, EngineConfig, SummaryThresholds};
pub use engine::VisibilityEngine;
pub use error::{Result, VisibilityError};
pub use projector::SectionProjector;
pub use resolver::PolicyResolver;
pub use summarizer::VisibilitySummarizer;

pub use visibility_types::*;
