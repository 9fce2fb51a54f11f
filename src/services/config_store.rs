// Configuration Storage Service
// Engine configuration model plus config file read/write and version backup

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::services::detection::rules::*;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config I/O failed for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    pub version: String,
    pub engine: EngineConfig,
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            engine: EngineConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoggingConfig {
    pub level: String,
    pub file_logging: bool,
    pub keep_files: usize,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file_logging: true,
            keep_files: 30,
        }
    }
}

/// Every tunable of the engine. Fixed once a `DetectionEngine` is built from it.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct EngineConfig {
    pub rules: RuleSetConfig,
    pub lexicons: LexiconConfig,
    pub url: UrlSignalConfig,
    pub sentiment: SentimentConfig,
    pub weights: FusionWeights,
    pub thresholds: VerdictThresholds,
    pub recommendations: RecommendationThresholds,
    pub limits: OutputLimits,
}

impl EngineConfig {
    pub fn validate(&self) -> Result<(), EngineError> {
        let w = &self.weights;
        let named = [
            ("scamPattern", w.scam_pattern),
            ("urlRisk", w.url_risk),
            ("manipulation", w.manipulation),
            ("financialRisk", w.financial_risk),
            ("uppercase", w.uppercase),
            ("uppercaseCap", w.uppercase_cap),
            ("baseCredibility", w.base_credibility),
            ("misinfoCredibility", w.misinfo_credibility),
            ("medicalCredibility", w.medical_credibility),
            ("scamCredibility", w.scam_credibility),
        ];
        for (name, value) in named {
            if !value.is_finite() || value < 0.0 {
                return Err(EngineError::InvalidWeight { name, value });
            }
        }

        // Points added per rule, hit, signal or bonus; one alone may fill the 0-100 scale, never more.
        let points = [
            ("scamWeight", self.rules.scam_weight),
            ("misinformationWeight", self.rules.misinformation_weight),
            ("financialHitWeight", self.lexicons.financial_hit_weight),
            ("medicalHitWeight", self.lexicons.medical_hit_weight),
            ("shortenerRisk", self.url.shortener_risk),
            ("insecureSchemeRisk", self.url.insecure_scheme_risk),
            ("suspiciousTldRisk", self.url.suspicious_tld_risk),
            ("ipHostRisk", self.url.ip_host_risk),
            ("extremePolarityBonus", self.sentiment.extreme_polarity_bonus),
            ("highSubjectivityBonus", self.sentiment.high_subjectivity_bonus),
        ];
        for (name, value) in points {
            if value > SCORE_CEILING {
                return Err(EngineError::InvalidWeight { name, value: f64::from(value) });
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct RuleSetConfig {
    pub scam_patterns: Vec<String>,
    pub misinformation_patterns: Vec<String>,
    pub scam_weight: u32,
    pub misinformation_weight: u32,
}

impl Default for RuleSetConfig {
    fn default() -> Self {
        Self {
            scam_patterns: SCAM_PATTERNS.iter().map(|s| s.to_string()).collect(),
            misinformation_patterns: MISINFO_PATTERNS.iter().map(|s| s.to_string()).collect(),
            scam_weight: SCAM_RULE_WEIGHT,
            misinformation_weight: MISINFO_RULE_WEIGHT,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct LexiconConfig {
    pub financial_terms: Vec<String>,
    pub medical_terms: Vec<String>,
    pub financial_hit_weight: u32,
    pub medical_hit_weight: u32,
}

impl Default for LexiconConfig {
    fn default() -> Self {
        Self {
            financial_terms: FINANCIAL_TERMS.iter().map(|s| s.to_string()).collect(),
            medical_terms: MEDICAL_TERMS.iter().map(|s| s.to_string()).collect(),
            financial_hit_weight: FINANCIAL_HIT_WEIGHT,
            medical_hit_weight: MEDICAL_HIT_WEIGHT,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct UrlSignalConfig {
    pub shorteners: Vec<String>,
    pub suspicious_tlds: Vec<String>,
    pub shortener_risk: u32,
    pub insecure_scheme_risk: u32,
    pub suspicious_tld_risk: u32,
    pub ip_host_risk: u32,
}

impl Default for UrlSignalConfig {
    fn default() -> Self {
        Self {
            shorteners: URL_SHORTENERS.iter().map(|s| s.to_string()).collect(),
            suspicious_tlds: SUSPICIOUS_TLDS.iter().map(|s| s.to_string()).collect(),
            shortener_risk: SHORTENER_RISK,
            insecure_scheme_risk: INSECURE_SCHEME_RISK,
            suspicious_tld_risk: SUSPICIOUS_TLD_RISK,
            ip_host_risk: IP_HOST_RISK,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct SentimentConfig {
    pub extreme_polarity: f64,
    pub extreme_polarity_bonus: u32,
    pub high_subjectivity: f64,
    pub high_subjectivity_bonus: u32,
}

impl Default for SentimentConfig {
    fn default() -> Self {
        Self {
            extreme_polarity: EXTREME_POLARITY_THRESHOLD,
            extreme_polarity_bonus: EXTREME_POLARITY_BONUS,
            high_subjectivity: HIGH_SUBJECTIVITY_THRESHOLD,
            high_subjectivity_bonus: HIGH_SUBJECTIVITY_BONUS,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct FusionWeights {
    pub scam_pattern: f64,
    pub url_risk: f64,
    pub manipulation: f64,
    pub financial_risk: f64,
    pub uppercase: f64,
    pub uppercase_cap: f64,
    pub base_credibility: f64,
    pub misinfo_credibility: f64,
    pub medical_credibility: f64,
    pub scam_credibility: f64,
}

impl Default for FusionWeights {
    fn default() -> Self {
        Self {
            scam_pattern: SCAM_PATTERN_WEIGHT,
            url_risk: URL_RISK_WEIGHT,
            manipulation: MANIPULATION_WEIGHT,
            financial_risk: FINANCIAL_RISK_WEIGHT,
            uppercase: UPPERCASE_WEIGHT,
            uppercase_cap: UPPERCASE_TERM_CAP,
            base_credibility: BASE_CREDIBILITY,
            misinfo_credibility: MISINFO_CREDIBILITY_WEIGHT,
            medical_credibility: MEDICAL_CREDIBILITY_WEIGHT,
            scam_credibility: SCAM_CREDIBILITY_WEIGHT,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct VerdictThresholds {
    pub high_risk_scam: f64,
    pub high_risk_credibility: f64,
    pub suspicious_scam: f64,
    pub suspicious_credibility: f64,
}

impl Default for VerdictThresholds {
    fn default() -> Self {
        Self {
            high_risk_scam: HIGH_RISK_SCAM_THRESHOLD,
            high_risk_credibility: HIGH_RISK_CREDIBILITY_THRESHOLD,
            suspicious_scam: SUSPICIOUS_SCAM_THRESHOLD,
            suspicious_credibility: SUSPICIOUS_CREDIBILITY_THRESHOLD,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct RecommendationThresholds {
    pub scam_risk: f64,
    pub credibility: f64,
    pub medical_risk: u32,
    pub financial_risk: u32,
}

impl Default for RecommendationThresholds {
    fn default() -> Self {
        Self {
            scam_risk: RECOMMEND_SCAM_THRESHOLD,
            credibility: RECOMMEND_CREDIBILITY_THRESHOLD,
            medical_risk: RECOMMEND_MEDICAL_THRESHOLD,
            financial_risk: RECOMMEND_FINANCIAL_THRESHOLD,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct OutputLimits {
    pub max_warnings: usize,
    pub max_recommendations: usize,
}

impl Default for OutputLimits {
    fn default() -> Self {
        Self {
            max_warnings: MAX_WARNINGS,
            max_recommendations: MAX_RECOMMENDATIONS,
        }
    }
}

const MAX_BACKUPS: usize = 10;

pub struct ConfigStore {
    config_dir: PathBuf,
    config_file: PathBuf,
}

impl ConfigStore {
    pub fn new(config_dir: PathBuf) -> Self {
        let config_file = config_dir.join("config.json");
        Self { config_dir, config_file }
    }

    /// Get default config directory
    pub fn default_config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("xistAI"))
    }

    pub fn config_file(&self) -> &Path {
        &self.config_file
    }

    /// Ensure config directory exists
    pub fn ensure_dir(&self) -> Result<(), ConfigError> {
        fs::create_dir_all(&self.config_dir).map_err(|source| ConfigError::Io {
            path: self.config_dir.clone(),
            source,
        })
    }

    /// Load configuration from file, falling back to defaults when absent
    pub fn load(&self) -> Result<AppConfig, ConfigError> {
        if !self.config_file.exists() {
            return Ok(AppConfig::default());
        }
        Self::load_from_path(&self.config_file)
    }

    /// Load an explicit config file; the file must exist
    pub fn load_from_path(path: &Path) -> Result<AppConfig, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Save configuration to file
    pub fn save(&self, config: &AppConfig) -> Result<(), ConfigError> {
        self.ensure_dir()?;

        if self.config_file.exists() {
            self.create_backup()?;
        }

        let content = serde_json::to_string_pretty(config)?;

        fs::write(&self.config_file, content).map_err(|source| ConfigError::Io {
            path: self.config_file.clone(),
            source,
        })
    }

    /// Create a backup of current config
    fn create_backup(&self) -> Result<(), ConfigError> {
        let backup_dir = self.config_dir.join("backups");
        fs::create_dir_all(&backup_dir).map_err(|source| ConfigError::Io {
            path: backup_dir.clone(),
            source,
        })?;

        let timestamp = chrono::Utc::now().format("%Y%m%d_%H%M%S%3f");
        let backup_file = backup_dir.join(format!("config_{}.json", timestamp));

        fs::copy(&self.config_file, &backup_file).map_err(|source| ConfigError::Io {
            path: backup_file.clone(),
            source,
        })?;

        self.cleanup_old_backups(&backup_dir, MAX_BACKUPS)
    }

    /// Remove old backups, keeping only the most recent N
    fn cleanup_old_backups(&self, backup_dir: &Path, keep: usize) -> Result<(), ConfigError> {
        let mut entries: Vec<_> = fs::read_dir(backup_dir)
            .map_err(|source| ConfigError::Io {
                path: backup_dir.to_path_buf(),
                source,
            })?
            .filter_map(|e| e.ok())
            .filter(|e| e.path().extension().map_or(false, |ext| ext == "json"))
            .collect();

        if entries.len() <= keep {
            return Ok(());
        }

        // Oldest first
        entries.sort_by_key(|e| {
            e.metadata()
                .and_then(|m| m.modified())
                .unwrap_or(std::time::SystemTime::UNIX_EPOCH)
        });

        let remove_count = entries.len() - keep;
        for entry in entries.iter().take(remove_count) {
            let _ = fs::remove_file(entry.path());
        }

        Ok(())
    }
}
