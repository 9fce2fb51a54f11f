use std::sync::Arc;

use xist_ai_lib::models::Verdict;
use xist_ai_lib::services::detection::url_analyzer::analyze_urls;
use xist_ai_lib::services::{classify_verdict, DetectionEngine, UrlSignalConfig, VerdictThresholds};

fn engine() -> DetectionEngine {
    DetectionEngine::with_defaults().expect("reference config compiles")
}

const SAMPLES: &[&str] = &[
    "",
    "See you at lunch tomorrow.",
    "URGENT ACTION REQUIRED: click here immediately to verify your account suspended",
    "doctors hate this miracle cure the government covers up",
    "Congratulations winner! You won $1,000,000. Free money, act now, offer expires! \
     Limited time offer: guaranteed income, make money fast, work from home $500, no experience necessary $300. \
     URGENT ACTION REQUIRED, click here immediately. \
     Investment profit returns portfolio trading cryptocurrency bitcoin forex loan credit debt. \
     http://bit.ly/x http://10.0.0.1/a https://claim.tk/b",
    "WEIGHT LOSS SUPPLEMENT CANCER CURE DIABETES REMEDY VITAMIN THERAPY!!! 100% GUARANTEED",
    "Bitcoin forex trading: guaranteed income, no experience necessary $500 daily, loan and credit welcome",
    "😀 ünïcödé €€€ ¥¥ ££ $$$",
];

#[test]
fn scores_are_bounded_and_lists_capped() {
    let e = engine();
    for sample in SAMPLES {
        let result = e.analyze(sample, "Tester");
        assert!(result.scam_risk <= 100, "scam risk out of range for {sample:?}");
        assert!(result.credibility_score <= 85, "credibility above base for {sample:?}");
        assert!(result.confidence <= 100);
        assert!(result.warnings.len() <= 5);
        assert!(result.recommendations.len() <= 8);
    }
}

#[test]
fn empty_content_scenario() {
    let result = engine().analyze("", "Alice");
    assert_eq!(result.scam_risk, 0);
    assert_eq!(result.credibility_score, 85);
    assert_eq!(result.verdict, Verdict::Credible);
    assert!(result.warnings.is_empty());
    assert!(result.summary.contains("Alice"));
}

#[test]
fn scam_phrase_triggers_multiple_rules() {
    let text = "URGENT ACTION REQUIRED: click here immediately to verify your account suspended";
    let result = engine().analyze(text, "Alice");
    let scam_warnings = result
        .warnings
        .iter()
        .filter(|w| w.starts_with("Scam pattern:"))
        .count();
    assert!(scam_warnings >= 2, "expected >= 2 scam rules, got {scam_warnings}");
    assert!(result.detailed_scores.pattern_matching > 40);
    assert!(result.scam_risk > 0);
}

#[test]
fn url_scenario() {
    let finding = analyze_urls("Claim it here: http://bit.ly/xyz", &UrlSignalConfig::default());
    assert!(finding.risk_score >= 45);
    assert_eq!(finding.url_count, 1);

    let result = engine().analyze("Claim it here: http://bit.ly/xyz", "Alice");
    assert!(result
        .recommendations
        .iter()
        .any(|r| r.contains("Hover over links")));
}

#[test]
fn misinformation_scenario() {
    let result = engine().analyze("doctors hate this miracle cure the government covers up", "Alice");
    assert!(result.credibility_score < 60, "got {}", result.credibility_score);
    assert_ne!(result.verdict, Verdict::Credible);
    assert_eq!(result.warnings[0], "Misinformation pattern: miracle.*cure");
}

#[test]
fn verdict_boundary_is_strict() {
    let thresholds = VerdictThresholds::default();
    assert_eq!(classify_verdict(70.0, 85.0, &thresholds), Verdict::Suspicious);
}

#[test]
fn heavy_scam_is_high_risk() {
    let result = engine().analyze(SAMPLES[4], "Alice");
    assert_eq!(result.verdict, Verdict::HighRisk);
    assert_eq!(result.warnings.len(), 5);
    assert_eq!(result.recommendations.len(), 8);
    assert!(result.recommendations[0].contains("Do not provide personal"));
}

#[test]
fn appending_scam_pattern_to_sentiment_neutral_text_never_lowers_risk() {
    let e = engine();
    let base = "please review the attached meeting notes before tuesday";
    let extended = format!("{base} and learn to make money fast");
    let before = e.analyze(base, "Alice");
    let after = e.analyze(&extended, "Alice");
    assert!(after.scam_risk >= before.scam_risk);
    assert!(after.detailed_scores.pattern_matching > before.detailed_scores.pattern_matching);
}

#[test]
fn appended_scam_pattern_can_dilute_sentiment_extremes() {
    // "free" pulls the mean polarity from 1.0 down to 0.7, dropping the extreme-polarity bonus.
    let e = engine();
    let before = e.analyze("perfect", "Alice");
    let after = e.analyze("perfect free money", "Alice");
    assert_eq!(before.detailed_scores.sentiment_manipulation, 50);
    assert_eq!(before.scam_risk, 10);
    assert_eq!(after.detailed_scores.sentiment_manipulation, 20);
    assert_eq!(after.detailed_scores.pattern_matching, 15);
    assert!(after.scam_risk < before.scam_risk);
}

#[test]
fn analysis_is_deterministic() {
    let e = engine();
    for sample in SAMPLES {
        let a = e.analyze(sample, "Alice");
        let b = e.analyze(sample, "Alice");
        assert_eq!(a.scam_risk, b.scam_risk);
        assert_eq!(a.credibility_score, b.credibility_score);
        assert_eq!(a.verdict, b.verdict);
        assert_eq!(a.warnings, b.warnings);
        assert_eq!(a.recommendations, b.recommendations);
    }
}

#[tokio::test]
async fn concurrent_path_agrees_with_sequential() {
    let e = Arc::new(engine());
    for sample in SAMPLES {
        let seq = e.analyze(sample, "Alice");
        let par = e.analyze_concurrent(sample, "Alice").await;
        assert_eq!(seq.scam_risk, par.scam_risk);
        assert_eq!(seq.verdict, par.verdict);
        assert_eq!(seq.warnings, par.warnings);
    }
}

#[test]
fn result_serializes_with_camel_case_fields() {
    let result = engine().analyze("free money", "Alice");
    let json = serde_json::to_value(&result).unwrap();
    assert!(json.get("scamRisk").is_some());
    assert!(json.get("credibilityScore").is_some());
    assert!(json.get("detailedScores").unwrap().get("patternMatching").is_some());
    assert_eq!(json["verdict"], "Credible");
}
