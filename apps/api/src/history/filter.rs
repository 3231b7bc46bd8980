use serde::Deserialize;

use crate::models::analysis::{AnalysisResult, Classification};

#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ClassificationFilter {
    #[default]
    All,
    Safe,
    Toxic,
    SevereToxic,
}

impl ClassificationFilter {
    fn matches(&self, classification: Classification) -> bool {
        match self {
            ClassificationFilter::All => true,
            ClassificationFilter::Safe => classification == Classification::Safe,
            ClassificationFilter::Toxic => classification == Classification::Toxic,
            ClassificationFilter::SevereToxic => classification == Classification::SevereToxic,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HistoryFilter {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub classification: ClassificationFilter,
}

impl HistoryFilter {
    pub fn matches(&self, entry: &AnalysisResult) -> bool {
        let text_ok = match self.search.as_deref() {
            Some(term) if !term.is_empty() => entry
                .text
                .to_lowercase()
                .contains(&term.to_lowercase()),
            _ => true,
        };
        text_ok && self.classification.matches(entry.classification)
    }
}

/// Read-only view over `entries`; order is preserved.
pub fn filter_history(entries: &[AnalysisResult], filter: &HistoryFilter) -> Vec<AnalysisResult> {
    entries
        .iter()
        .filter(|e| filter.matches(e))
        .cloned()
        .collect()
}
