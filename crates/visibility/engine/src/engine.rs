//! Engine facade
//!
//! Wires the resolver, projector and summarizer behind one validated
//! configuration. Holds nothing but that configuration, so a single engine
//! can be shared freely across threads.

use visibility_types::{
    Profile, Resolution, Section, SectionDecisions, VisibilityContext, VisibilityResult,
    VisibilitySummary,
};

use crate::config::EngineConfig;
use crate::error::Result;
use crate::projector::SectionProjector;
use crate::resolver::PolicyResolver;
use crate::summarizer::VisibilitySummarizer;

/// Profile visibility engine
#[derive(Debug, Clone, Default)]
pub struct VisibilityEngine {
    resolver: PolicyResolver,
    summarizer: VisibilitySummarizer,
}

impl VisibilityEngine {
    /// Build an engine from a validated configuration
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            resolver: PolicyResolver::new(config.default_policy),
            summarizer: VisibilitySummarizer::new(config.thresholds)?,
        })
    }

    /// The configuration this engine was built from
    pub fn config(&self) -> EngineConfig {
        EngineConfig {
            default_policy: *self.resolver.defaults(),
            thresholds: *self.summarizer.thresholds(),
        }
    }

    pub fn resolve(&self, profile: &Profile, context: &VisibilityContext) -> Resolution {
        self.resolver.resolve(profile, context)
    }

    pub fn project(&self, profile: &Profile, decisions: &SectionDecisions) -> Profile {
        SectionProjector::project(profile, decisions)
    }

    pub fn summarize(&self, decisions: &SectionDecisions) -> VisibilitySummary {
        self.summarizer.summarize(decisions)
    }

    /// Resolve and project in one call
    pub fn evaluate(&self, profile: &Profile, context: &VisibilityContext) -> VisibilityResult {
        let Resolution {
            section_decisions,
            reasons,
        } = self.resolve(profile, context);
        let projected_profile = self.project(profile, &section_decisions);
        VisibilityResult {
            projected_profile,
            section_decisions,
            reasons,
        }
    }

    /// Whether `context` may see `section` of `profile`
    pub fn can_view(&self, profile: &Profile, context: &VisibilityContext, section: Section) -> bool {
        self.resolver.section_visible(profile, context, section)
    }
}
