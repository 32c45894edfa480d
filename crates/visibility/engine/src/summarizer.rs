use tracing::debug;
use visibility_types::{SectionDecisions, VisibilityLevel, VisibilitySummary};

use crate::config::SummaryThresholds;
use crate::error::Result;

/// VisibilitySummarizer — classifies resolved decisions into an exposure level.
#[derive(Debug, Clone, Default)]
pub struct VisibilitySummarizer {
    thresholds: SummaryThresholds,
}

impl VisibilitySummarizer {
    /// Build a summarizer, rejecting thresholds outside `[0, 1]` or out of order.
    pub fn new(thresholds: SummaryThresholds) -> Result<Self> {
        thresholds.validate()?;
        Ok(Self { thresholds })
    }

    pub fn thresholds(&self) -> &SummaryThresholds {
        &self.thresholds
    }

    /// Partition `decisions` and classify by visible ratio. An empty map has
    /// ratio zero and is private.
    pub fn summarize(&self, decisions: &SectionDecisions) -> VisibilitySummary {
        let visible_sections = decisions.visible_sections();
        let hidden_sections = decisions.hidden_sections();
        let total_sections = decisions.len();

        let ratio = if total_sections == 0 {
            0.0
        } else {
            visible_sections.len() as f64 / total_sections as f64
        };
        let level = self.classify(ratio);

        debug!(
            level = level.as_str(),
            visible = visible_sections.len(),
            total = total_sections,
            "Visibility summarized"
        );

        VisibilitySummary {
            level,
            visible_sections,
            hidden_sections,
            total_sections,
        }
    }

    pub fn classify(&self, ratio: f64) -> VisibilityLevel {
        if ratio >= self.thresholds.public {
            VisibilityLevel::Public
        } else if ratio >= self.thresholds.organization {
            VisibilityLevel::Organization
        } else {
            VisibilityLevel::Private
        }
    }
}
