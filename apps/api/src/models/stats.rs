use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_analyses: u64,
    pub safe_comments: u64,
    pub toxic_comments: u64,
    /// Percentage, 0 – 100.
    pub accuracy_rate: f64,
}

/// One bar of the monthly moderation chart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrendPoint {
    pub name: String,
    pub safe: u64,
    pub toxic: u64,
}
