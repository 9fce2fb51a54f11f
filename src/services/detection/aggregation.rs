// Aggregation Logic
// Fuses analyzer outputs into scam risk, credibility, verdict and ranked warnings

use crate::models::{AnalyzerOutputs, DetailedScores, Verdict};
use crate::services::config_store::{EngineConfig, FusionWeights};
use super::rules::SCORE_CEILING;
use super::verdict::{classify_verdict, confidence};

/// Unrounded fusion output; rounding happens only when the result is surfaced.
#[derive(Debug, Clone, PartialEq)]
pub struct FusedAssessment {
    pub scam_risk: f64,
    pub credibility: f64,
    pub verdict: Verdict,
    pub confidence: u32,
    pub warnings: Vec<String>,
    pub detailed_scores: DetailedScores,
}

fn bounded(score: u32) -> f64 {
    f64::from(score.min(SCORE_CEILING))
}

const CEILING: f64 = SCORE_CEILING as f64;

/// min(cap, uppercase_ratio * 100)
pub fn uppercase_term(uppercase_ratio: f64, weights: &FusionWeights) -> f64 {
    (uppercase_ratio * 100.0).clamp(0.0, weights.uppercase_cap)
}

pub fn scam_risk(outputs: &AnalyzerOutputs, weights: &FusionWeights) -> f64 {
    let raw = bounded(outputs.scam.score) * weights.scam_pattern
        + bounded(outputs.urls.risk_score) * weights.url_risk
        + bounded(outputs.sentiment.manipulation_score) * weights.manipulation
        + bounded(outputs.domain.financial_risk) * weights.financial_risk
        + uppercase_term(outputs.features.uppercase_ratio, weights) * weights.uppercase;
    raw.clamp(0.0, CEILING)
}

/// Floored at 0; never above the base credibility.
pub fn credibility(outputs: &AnalyzerOutputs, scam_risk: f64, weights: &FusionWeights) -> f64 {
    let penalty = bounded(outputs.misinformation.score) * weights.misinfo_credibility
        + bounded(outputs.domain.medical_risk) * weights.medical_credibility
        + scam_risk * weights.scam_credibility;
    (weights.base_credibility - penalty).clamp(0.0, weights.base_credibility.min(CEILING))
}

/// Scam descriptions, then misinformation, then URL warnings; first-found-first-kept.
pub fn rank_warnings(outputs: &AnalyzerOutputs, max: usize) -> Vec<String> {
    outputs
        .scam
        .triggered
        .iter()
        .chain(outputs.misinformation.triggered.iter())
        .chain(outputs.urls.warnings.iter())
        .take(max)
        .cloned()
        .collect()
}

pub fn detailed_scores(outputs: &AnalyzerOutputs, weights: &FusionWeights) -> DetailedScores {
    DetailedScores {
        pattern_matching: outputs.scam.score.min(SCORE_CEILING),
        misinformation: outputs.misinformation.score.min(SCORE_CEILING),
        url_security: outputs.urls.risk_score.min(SCORE_CEILING),
        sentiment_manipulation: outputs.sentiment.manipulation_score.min(SCORE_CEILING),
        domain_specific: outputs.domain.financial_risk.max(outputs.domain.medical_risk).min(SCORE_CEILING),
        linguistic_features: uppercase_term(outputs.features.uppercase_ratio, weights),
    }
}

pub fn fuse(outputs: &AnalyzerOutputs, config: &EngineConfig) -> FusedAssessment {
    let weights = &config.weights;
    let scam_risk = scam_risk(outputs, weights);
    let credibility = credibility(outputs, scam_risk, weights);

    FusedAssessment {
        scam_risk,
        credibility,
        verdict: classify_verdict(scam_risk, credibility, &config.thresholds),
        confidence: confidence(scam_risk, credibility),
        warnings: rank_warnings(outputs, config.limits.max_warnings),
        detailed_scores: detailed_scores(outputs, weights),
    }
}
