use chrono::Utc;
use serde::Serialize;

use crate::models::analysis::{AnalysisResult, CategoryScores};

/// A canned walkthrough shown on the demo page.
#[derive(Debug, Clone, Serialize)]
pub struct DemoScenario {
    pub title: &'static str,
    pub description: &'static str,
    pub input: &'static str,
    pub result: AnalysisResult,
}

pub fn demo_scenarios() -> Vec<DemoScenario> {
    let now = Utc::now();
    vec![
        DemoScenario {
            title: "Safe Comment Detection",
            description: "See how ToxiClean identifies positive, constructive comments",
            input: "This is a really helpful tutorial! Thanks for sharing your knowledge with the community.",
            result: AnalysisResult::new(
                "demo-safe",
                "This is a really helpful tutorial! Thanks for sharing your knowledge with the community.",
                0.05,
                0.98,
                now,
                CategoryScores {
                    toxicity: 0.05,
                    severe_toxicity: 0.01,
                    obscene: 0.02,
                    threat: 0.01,
                    insult: 0.03,
                    identity_attack: 0.01,
                },
            ),
        },
        DemoScenario {
            title: "Toxic Comment Detection",
            description: "Watch how our AI identifies and classifies toxic language",
            input: "You are such an idiot for posting this garbage. Nobody wants to see this trash.",
            result: AnalysisResult::new(
                "demo-toxic",
                "You are such an idiot for posting this garbage. Nobody wants to see this trash.",
                0.74,
                0.91,
                now,
                CategoryScores {
                    toxicity: 0.74,
                    severe_toxicity: 0.15,
                    obscene: 0.23,
                    threat: 0.08,
                    insult: 0.89,
                    identity_attack: 0.12,
                },
            ),
        },
        DemoScenario {
            title: "Severe Toxicity Detection",
            description: "See how ToxiClean handles extremely harmful content",
            input: "I hope you die in a fire. The world would be better without people like you.",
            result: AnalysisResult::new(
                "demo-severe",
                "I hope you die in a fire. The world would be better without people like you.",
                0.95,
                0.96,
                now,
                CategoryScores {
                    toxicity: 0.95,
                    severe_toxicity: 0.92,
                    obscene: 0.34,
                    threat: 0.88,
                    insult: 0.76,
                    identity_attack: 0.23,
                },
            ),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::analysis::Classification;

    #[test]
    fn test_scenarios_cover_each_classification() {
        let labels: Vec<_> = demo_scenarios()
            .iter()
            .map(|s| s.result.classification)
            .collect();
        assert_eq!(
            labels,
            vec![
                Classification::Safe,
                Classification::Toxic,
                Classification::SevereToxic
            ]
        );
    }

    #[test]
    fn test_scenario_result_echoes_input() {
        for s in demo_scenarios() {
            assert_eq!(s.result.text, s.input);
        }
    }
}
