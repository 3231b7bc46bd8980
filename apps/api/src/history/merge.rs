use std::collections::HashSet;

use crate::models::analysis::AnalysisResult;

/// Combines two history sources into one view.
///
/// Concatenates `primary` then `secondary`, keeps the first record seen for each
/// id, sorts newest first and keeps at most `capacity` records.
pub fn merge_history(
    primary: Vec<AnalysisResult>,
    secondary: Vec<AnalysisResult>,
    capacity: usize,
) -> Vec<AnalysisResult> {
    let mut seen = HashSet::new();
    let mut merged: Vec<AnalysisResult> = primary
        .into_iter()
        .chain(secondary)
        .filter(|r| seen.insert(r.id.clone()))
        .collect();

    // Stable: equal timestamps keep concatenation order.
    merged.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    merged.truncate(capacity);
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};

    use crate::models::analysis::CategoryScores;

    fn entry(id: &str, text: &str, hours_ago: i64) -> AnalysisResult {
        let base = Utc.with_ymd_and_hms(2026, 1, 1, 12, 0, 0).unwrap();
        AnalysisResult::new(
            id,
            text,
            0.1,
            0.9,
            base - Duration::hours(hours_ago),
            CategoryScores {
                toxicity: 0.1,
                severe_toxicity: 0.03,
                obscene: 0.0,
                threat: 0.0,
                insult: 0.0,
                identity_attack: 0.0,
            },
        )
    }

    #[test]
    fn test_duplicate_id_keeps_first_seen() {
        let local = vec![entry("1", "local copy", 5)];
        let seed = vec![entry("1", "seed copy", 0), entry("2", "other", 1)];

        let merged = merge_history(local, seed, 50);

        assert_eq!(merged.len(), 2);
        let dup: Vec<_> = merged.iter().filter(|r| r.id == "1").collect();
        assert_eq!(dup.len(), 1);
        assert_eq!(dup[0].text, "local copy");
    }

    #[test]
    fn test_sorted_newest_first() {
        let merged = merge_history(
            vec![entry("a", "", 3), entry("b", "", 1)],
            vec![entry("c", "", 2), entry("d", "", 0)],
            50,
        );
        let ids: Vec<_> = merged.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["d", "b", "c", "a"]);
    }

    #[test]
    fn test_capacity_drops_oldest() {
        let local: Vec<_> = (0..50).map(|i| entry(&format!("l{i}"), "", i)).collect();
        let seed = vec![entry("s1", "", 100), entry("s0", "", -1)];

        let merged = merge_history(local, seed, 50);

        assert_eq!(merged.len(), 50);
        assert_eq!(merged[0].id, "s0");
        assert!(merged.iter().all(|r| r.id != "s1"));
        assert!(merged.iter().all(|r| r.id != "l49"));
    }

    #[test]
    fn test_empty_sources() {
        assert!(merge_history(vec![], vec![], 50).is_empty());
    }
}
