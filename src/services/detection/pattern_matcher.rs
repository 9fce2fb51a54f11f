// Pattern Matcher
// Scores lower-cased content against scam / misinformation rule sets

use crate::models::AnalyzerFinding;
use super::rules::{PatternRule, SCORE_CEILING};

/// Each matching rule contributes its weight once, however often it matches.
pub fn match_patterns(content_lower: &str, rules: &[PatternRule]) -> AnalyzerFinding {
    let mut score: u32 = 0;
    let mut triggered = Vec::new();

    for rule in rules {
        if rule.pattern.is_match(content_lower) {
            score = score.saturating_add(rule.weight);
            triggered.push(rule.description());
        }
    }

    AnalyzerFinding {
        score: score.min(SCORE_CEILING),
        triggered,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::config_store::EngineConfig;
    use crate::services::detection::rules::{CompiledRules, PatternCategory};

    fn rules() -> CompiledRules {
        CompiledRules::compile(&EngineConfig::default()).unwrap()
    }

    #[test]
    fn test_no_match_is_zero() {
        let finding = match_patterns("see you at lunch tomorrow", &rules().scam);
        assert_eq!(finding.score, 0);
        assert!(finding.triggered.is_empty());
    }

    #[test]
    fn test_scam_phrase_triggers_multiple_rules() {
        let text = "urgent action required: click here immediately to verify your account suspended";
        let finding = match_patterns(text, &rules().scam);
        assert_eq!(finding.score, 45);
        assert_eq!(
            finding.triggered,
            vec![
                "Scam pattern: urgent.*action.*required",
                "Scam pattern: click.*here.*immediately",
                "Scam pattern: verify.*account.*suspended",
            ]
        );
    }

    #[test]
    fn test_repeated_match_counts_once() {
        let finding = match_patterns("free money! free money! free money!", &rules().scam);
        assert_eq!(finding.score, 15);
        assert_eq!(finding.triggered.len(), 1);
    }

    #[test]
    fn test_score_is_clamped() {
        let heavy: Vec<PatternRule> = (0..10)
            .map(|_| PatternRule::compile("cure", PatternCategory::Misinformation, 20).unwrap())
            .collect();
        let finding = match_patterns("miracle cure", &heavy);
        assert_eq!(finding.score, 100);
        assert_eq!(finding.triggered.len(), 10);
    }

    #[test]
    fn test_misinformation_weights() {
        let text = "doctors hate this miracle cure the government covers up";
        let finding = match_patterns(text, &rules().misinformation);
        assert_eq!(finding.score, 60);
        assert_eq!(finding.triggered[0], "Misinformation pattern: miracle.*cure");
    }
}
