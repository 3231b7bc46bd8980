//! Dashboard figures. Static product numbers, not derived from history.

pub mod handlers;

use crate::models::stats::{DashboardStats, TrendPoint};

pub fn dashboard_stats() -> DashboardStats {
    DashboardStats {
        total_analyses: 1247,
        safe_comments: 892,
        toxic_comments: 355,
        accuracy_rate: 94.7,
    }
}

const MONTHLY_TREND: [(&str, u64, u64); 6] = [
    ("Jan", 420, 180),
    ("Feb", 380, 200),
    ("Mar", 450, 150),
    ("Apr", 520, 120),
    ("May", 490, 140),
    ("Jun", 580, 90),
];

pub fn monthly_trend() -> Vec<TrendPoint> {
    MONTHLY_TREND
        .iter()
        .map(|(name, safe, toxic)| TrendPoint {
            name: name.to_string(),
            safe: *safe,
            toxic: *toxic,
        })
        .collect()
}
