// XistAI Data Models
// Typed intermediate findings and the final analysis result

use serde::{Deserialize, Serialize};
use std::fmt;

// ============ Input ============

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisInput {
    #[serde(default)]
    pub content: String,
    #[serde(default = "default_subject_label")]
    pub subject_label: String,
}

impl AnalysisInput {
    pub fn new(content: impl Into<String>, subject_label: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            subject_label: subject_label.into(),
        }
    }
}

fn default_subject_label() -> String {
    "User".to_string()
}

// ============ Analyzer Findings ============

/// Output of the scam / misinformation pattern matcher.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzerFinding {
    pub score: u32,
    #[serde(default)]
    pub triggered: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UrlRiskFinding {
    pub risk_score: u32,
    /// One entry per triggered signal per URL, duplicates included.
    #[serde(default)]
    pub warnings: Vec<String>,
    pub url_count: usize,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SentimentFinding {
    pub polarity: f64,
    pub subjectivity: f64,
    pub manipulation_score: u32,
}

impl SentimentFinding {
    pub fn neutral() -> Self {
        Self::default()
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DomainFinding {
    pub financial_risk: u32,
    pub medical_risk: u32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FeatureVector {
    pub word_count: usize,
    pub char_count: usize,
    pub avg_word_length: f64,
    pub uppercase_ratio: f64,
    pub punctuation_ratio: f64,
    pub number_group_count: usize,
    pub currency_symbol_count: usize,
}

impl FeatureVector {
    /// Number of features exposed to downstream consumers.
    pub const FEATURE_COUNT: usize = 7;
}

/// Everything the combiner needs, gathered after the analyzer fan-in.
#[derive(Debug, Clone, Default)]
pub struct AnalyzerOutputs {
    pub scam: AnalyzerFinding,
    pub misinformation: AnalyzerFinding,
    pub urls: UrlRiskFinding,
    pub sentiment: SentimentFinding,
    pub domain: DomainFinding,
    pub features: FeatureVector,
}

// ============ Verdict ============

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Verdict {
    Credible,
    Suspicious,
    #[serde(rename = "High Risk")]
    HighRisk,
}

impl Verdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Credible => "Credible",
            Verdict::Suspicious => "Suspicious",
            Verdict::HighRisk => "High Risk",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============ Analysis Result ============

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DetailedScores {
    pub pattern_matching: u32,
    pub misinformation: u32,
    pub url_security: u32,
    pub sentiment_manipulation: u32,
    /// max(financial, medical)
    pub domain_specific: u32,
    /// min(50, uppercase ratio * 100)
    pub linguistic_features: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub scam_risk: u32,
    pub credibility_score: u32,
    pub verdict: Verdict,
    pub warnings: Vec<String>,
    pub recommendations: Vec<String>,
    pub summary: String,
    pub confidence: u32,
    pub detailed_scores: DetailedScores,
    pub features: FeatureVector,
    pub features_analyzed: usize,
    pub request_id: String,
    pub analysis_date: String,
    pub processing_time_ms: u64,
    pub engine_version: String,
}

/// Shape handed to the storage collaborator for durable logging.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRecord {
    pub request_id: String,
    pub content_preview: String,
    pub scam_risk: u32,
    pub credibility_score: u32,
    pub verdict: Verdict,
    pub created_at: String,
}

pub const RECORD_PREVIEW_CHARS: usize = 500;

impl AnalysisResult {
    pub fn to_record(&self, content: &str) -> AnalysisRecord {
        AnalysisRecord {
            request_id: self.request_id.clone(),
            content_preview: content.chars().take(RECORD_PREVIEW_CHARS).collect(),
            scam_risk: self.scam_risk,
            credibility_score: self.credibility_score,
            verdict: self.verdict,
            created_at: self.analysis_date.clone(),
        }
    }
}

// ============ Batch Statistics ============

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ThreatLevelCounts {
    pub low: usize,
    pub medium: usize,
    pub high: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VerdictCounts {
    pub credible: usize,
    pub suspicious: usize,
    pub high_risk: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisStats {
    pub total_analyses: usize,
    pub average_scam_risk: f64,
    pub average_credibility: f64,
    pub verdicts: VerdictCounts,
    pub threat_levels: ThreatLevelCounts,
    /// Last results of the slice, oldest first
    pub recent_analyses: Vec<RecentAnalysis>,
    pub credibility_trend: Vec<CredibilityPoint>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecentAnalysis {
    pub date: String,
    pub verdict: Verdict,
    pub scam_risk: u32,
    pub credibility_score: u32,
}

/// One point of the credibility chart; `date` is `MM/DD`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CredibilityPoint {
    pub date: String,
    pub score: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchAnalysisResponse {
    pub results: Vec<AnalysisResult>,
    pub stats: AnalysisStats,
}
