// Rule Sets & Lexicons
// Reference configuration for every analyzer plus regex compilation of the rule sets.

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::services::config_store::EngineConfig;

// ============ Pattern rule sets ============

pub const SCAM_PATTERNS: &[&str] = &[
    r"urgent.*action.*required",
    r"click.*here.*immediately",
    r"you.*won.*\$[\d,]+",
    r"limited.*time.*offer",
    r"verify.*account.*suspended",
    r"congratulations.*winner",
    r"act.*now.*expires",
    r"free.*money",
    r"guaranteed.*income",
    r"work.*from.*home.*\$\d+",
    r"make.*money.*fast",
    r"no.*experience.*necessary.*\$\d+",
];

pub const MISINFO_PATTERNS: &[&str] = &[
    r"miracle.*cure",
    r"doctors.*hate.*this",
    r"100%.*guaranteed",
    r"secret.*government",
    r"they.*don't.*want.*you.*to.*know",
    r"big.*pharma.*conspiracy",
    r"hidden.*truth",
    r"mainstream.*media.*won't.*tell",
    r"natural.*cure.*suppressed",
    r"government.*cover.*up",
];

pub const SCAM_RULE_WEIGHT: u32 = 15;
pub const MISINFO_RULE_WEIGHT: u32 = 20;

// ============ URL signals ============

pub const URL_PATTERN: &str = r"(?i)https?://[^\s]+";
pub const URL_SHORTENERS: &[&str] = &["bit.ly", "tinyurl.com", "t.co", "goo.gl", "ow.ly"];
pub const SUSPICIOUS_TLDS: &[&str] = &[".tk", ".ml", ".ga", ".cf"];

pub const SHORTENER_RISK: u32 = 25;
pub const INSECURE_SCHEME_RISK: u32 = 20;
pub const SUSPICIOUS_TLD_RISK: u32 = 30;
pub const IP_HOST_RISK: u32 = 40;

// ============ Domain lexicons ============

pub const FINANCIAL_TERMS: &[&str] = &[
    "investment", "profit", "returns", "portfolio", "trading",
    "cryptocurrency", "bitcoin", "forex", "binary options",
    "loan", "credit", "debt", "mortgage", "insurance",
];

pub const MEDICAL_TERMS: &[&str] = &[
    "cure", "treatment", "medicine", "drug", "therapy",
    "disease", "cancer", "diabetes", "weight loss",
    "supplement", "vitamin", "remedy", "healing",
];

pub const FINANCIAL_HIT_WEIGHT: u32 = 10;
pub const MEDICAL_HIT_WEIGHT: u32 = 15;

// ============ Sentiment / manipulation ============

/// (word, polarity, subjectivity). Urgency and pressure words carry high subjectivity.
pub const SENTIMENT_LEXICON: &[(&str, f64, f64)] = &[
    ("amazing", 0.6, 0.9),
    ("awesome", 1.0, 1.0),
    ("best", 1.0, 0.3),
    ("excellent", 1.0, 1.0),
    ("fantastic", 0.4, 0.9),
    ("free", 0.4, 0.8),
    ("good", 0.7, 0.6),
    ("great", 0.8, 0.75),
    ("guaranteed", 0.5, 0.9),
    ("happy", 0.8, 1.0),
    ("incredible", 0.9, 0.9),
    ("love", 0.5, 0.6),
    ("lucky", 0.33, 1.0),
    ("perfect", 1.0, 1.0),
    ("safe", 0.5, 0.5),
    ("secure", 0.4, 0.6),
    ("shocking", -1.0, 1.0),
    ("terrible", -1.0, 1.0),
    ("awful", -1.0, 1.0),
    ("bad", -0.7, 0.67),
    ("worst", -1.0, 1.0),
    ("hate", -0.8, 0.9),
    ("dangerous", -0.6, 0.9),
    ("scary", -0.5, 1.0),
    ("horrible", -1.0, 1.0),
    ("suspended", -0.4, 0.6),
    ("urgent", -0.3, 0.9),
    ("immediately", -0.1, 0.8),
    ("final", -0.2, 0.7),
    ("warning", -0.4, 0.6),
    ("risk", -0.3, 0.5),
    ("secret", -0.2, 0.8),
    ("unbelievable", 0.8, 0.9),
    ("miracle", 0.8, 1.0),
    ("winner", 0.8, 0.8),
    ("congratulations", 0.9, 1.0),
];

/// (word, multiplier) applied to the next lexicon word.
pub const INTENSIFIERS: &[(&str, f64)] = &[
    ("very", 1.3),
    ("really", 1.2),
    ("so", 1.3),
    ("extremely", 1.5),
    ("absolutely", 1.5),
    ("totally", 1.4),
    ("incredibly", 1.5),
];

pub const NEGATORS: &[&str] = &["not", "no", "never", "don't", "isn't", "won't", "can't"];
pub const NEGATION_FACTOR: f64 = -0.5;

pub const EXTREME_POLARITY_THRESHOLD: f64 = 0.8;
pub const EXTREME_POLARITY_BONUS: u32 = 30;
pub const HIGH_SUBJECTIVITY_THRESHOLD: f64 = 0.8;
pub const HIGH_SUBJECTIVITY_BONUS: u32 = 20;

// ============ Fusion weights & thresholds ============

pub const SCAM_PATTERN_WEIGHT: f64 = 0.30;
pub const URL_RISK_WEIGHT: f64 = 0.25;
pub const MANIPULATION_WEIGHT: f64 = 0.20;
pub const FINANCIAL_RISK_WEIGHT: f64 = 0.15;
pub const UPPERCASE_WEIGHT: f64 = 0.10;
pub const UPPERCASE_TERM_CAP: f64 = 50.0;

pub const BASE_CREDIBILITY: f64 = 85.0;
pub const MISINFO_CREDIBILITY_WEIGHT: f64 = 0.40;
pub const MEDICAL_CREDIBILITY_WEIGHT: f64 = 0.30;
pub const SCAM_CREDIBILITY_WEIGHT: f64 = 0.30;

pub const HIGH_RISK_SCAM_THRESHOLD: f64 = 70.0;
pub const HIGH_RISK_CREDIBILITY_THRESHOLD: f64 = 30.0;
pub const SUSPICIOUS_SCAM_THRESHOLD: f64 = 40.0;
pub const SUSPICIOUS_CREDIBILITY_THRESHOLD: f64 = 60.0;

pub const MAX_WARNINGS: usize = 5;
pub const MAX_RECOMMENDATIONS: usize = 8;

pub const RECOMMEND_SCAM_THRESHOLD: f64 = 60.0;
pub const RECOMMEND_CREDIBILITY_THRESHOLD: f64 = 50.0;
pub const RECOMMEND_MEDICAL_THRESHOLD: u32 = 30;
pub const RECOMMEND_FINANCIAL_THRESHOLD: u32 = 30;

/// Upper bound for every surfaced score.
pub const SCORE_CEILING: u32 = 100;

// ============ Errors ============

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("invalid {category} pattern `{pattern}`: {source}")]
    InvalidPattern {
        category: PatternCategory,
        pattern: String,
        #[source]
        source: regex::Error,
    },
    #[error("invalid weight `{name}`: {value} (must be finite, non-negative, and score points at most 100)")]
    InvalidWeight { name: &'static str, value: f64 },
}

// ============ Compiled rules ============

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum PatternCategory {
    Scam,
    Misinformation,
}

impl PatternCategory {
    pub fn label(&self) -> &'static str {
        match self {
            PatternCategory::Scam => "Scam",
            PatternCategory::Misinformation => "Misinformation",
        }
    }
}

impl std::fmt::Display for PatternCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone)]
pub struct PatternRule {
    pub pattern: Regex,
    pub category: PatternCategory,
    pub weight: u32,
}

impl PatternRule {
    pub fn compile(source: &str, category: PatternCategory, weight: u32) -> Result<Self, EngineError> {
        let pattern = Regex::new(source).map_err(|e| EngineError::InvalidPattern {
            category,
            pattern: source.to_string(),
            source: e,
        })?;
        Ok(Self { pattern, category, weight })
    }

    /// Human-readable name used in warnings, e.g. `Scam pattern: free.*money`.
    pub fn description(&self) -> String {
        format!("{} pattern: {}", self.category.label(), self.pattern.as_str())
    }
}

/// Regex state compiled once at engine construction.
#[derive(Debug, Clone)]
pub struct CompiledRules {
    pub scam: Vec<PatternRule>,
    pub misinformation: Vec<PatternRule>,
}

impl CompiledRules {
    pub fn compile(config: &EngineConfig) -> Result<Self, EngineError> {
        let scam = config
            .rules
            .scam_patterns
            .iter()
            .map(|p| PatternRule::compile(p, PatternCategory::Scam, config.rules.scam_weight))
            .collect::<Result<Vec<_>, _>>()?;
        let misinformation = config
            .rules
            .misinformation_patterns
            .iter()
            .map(|p| {
                PatternRule::compile(p, PatternCategory::Misinformation, config.rules.misinformation_weight)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { scam, misinformation })
    }
}
