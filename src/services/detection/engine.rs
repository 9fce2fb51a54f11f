// Detection Engine
// Fans content out to the independent analyzers, then fuses their outputs into one result.

use std::sync::Arc;
use std::time::Instant;
use tokio::task::JoinError;
use tracing::{debug, info, warn};

use crate::models::{
    AnalysisInput, AnalysisResult, AnalyzerOutputs, BatchAnalysisResponse, FeatureVector,
};
use crate::services::config_store::EngineConfig;
use crate::services::text_processor::{compute_features, normalize_for_matching};

use super::aggregation::fuse;
use super::domain_risk::analyze_domain;
use super::pattern_matcher::match_patterns;
use super::recommendations::generate_recommendations;
use super::rules::{CompiledRules, EngineError};
use super::sentiment::analyze_sentiment;
use super::stats::summarize_results;
use super::url_analyzer::analyze_urls;

pub const ENGINE_VERSION: &str = concat!("xist-engine/", env!("CARGO_PKG_VERSION"));

/// Immutable after construction; share across threads with `Arc`.
#[derive(Debug, Clone)]
pub struct DetectionEngine {
    config: EngineConfig,
    rules: CompiledRules,
}

impl DetectionEngine {
    /// Malformed patterns or weights fail here, never per request.
    pub fn new(config: EngineConfig) -> Result<Self, EngineError> {
        config.validate()?;
        let rules = CompiledRules::compile(&config)?;
        info!(
            scam_rules = rules.scam.len(),
            misinformation_rules = rules.misinformation.len(),
            financial_terms = config.lexicons.financial_terms.len(),
            medical_terms = config.lexicons.medical_terms.len(),
            "engine.initialized"
        );
        Ok(Self { config, rules })
    }

    pub fn with_defaults() -> Result<Self, EngineError> {
        Self::new(EngineConfig::default())
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Run every analyzer sequentially on the calling thread
    pub fn run_analyzers(&self, content: &str) -> AnalyzerOutputs {
        let lower = normalize_for_matching(content);
        AnalyzerOutputs {
            scam: match_patterns(&lower, &self.rules.scam),
            misinformation: match_patterns(&lower, &self.rules.misinformation),
            urls: analyze_urls(content, &self.config.url),
            sentiment: analyze_sentiment(content, &self.config.sentiment),
            domain: analyze_domain(&lower, &self.config.lexicons),
            features: compute_features(content),
        }
    }

    pub fn analyze(&self, content: &str, subject_label: &str) -> AnalysisResult {
        let started = Instant::now();
        let outputs = self.run_analyzers(content);
        self.assemble(&outputs, subject_label, started)
    }

    pub fn analyze_input(&self, input: &AnalysisInput) -> AnalysisResult {
        self.analyze(&input.content, &input.subject_label)
    }

    /// Same result as `analyze`, with each analyzer on its own blocking task.
    /// A failed task degrades to that analyzer's neutral finding.
    pub async fn analyze_concurrent(self: &Arc<Self>, content: &str, subject_label: &str) -> AnalysisResult {
        let started = Instant::now();
        let raw: Arc<str> = Arc::from(content);
        let lower: Arc<str> = Arc::from(normalize_for_matching(content));

        let scam = {
            let (engine, lower) = (Arc::clone(self), Arc::clone(&lower));
            tokio::task::spawn_blocking(move || match_patterns(&lower, &engine.rules.scam))
        };
        let misinformation = {
            let (engine, lower) = (Arc::clone(self), Arc::clone(&lower));
            tokio::task::spawn_blocking(move || match_patterns(&lower, &engine.rules.misinformation))
        };
        let urls = {
            let (engine, raw) = (Arc::clone(self), Arc::clone(&raw));
            tokio::task::spawn_blocking(move || analyze_urls(&raw, &engine.config.url))
        };
        let sentiment = {
            let (engine, raw) = (Arc::clone(self), Arc::clone(&raw));
            tokio::task::spawn_blocking(move || analyze_sentiment(&raw, &engine.config.sentiment))
        };
        let domain = {
            let (engine, lower) = (Arc::clone(self), Arc::clone(&lower));
            tokio::task::spawn_blocking(move || analyze_domain(&lower, &engine.config.lexicons))
        };
        let features = {
            let raw = Arc::clone(&raw);
            tokio::task::spawn_blocking(move || compute_features(&raw))
        };

        let (scam, misinformation, urls, sentiment, domain, features) =
            tokio::join!(scam, misinformation, urls, sentiment, domain, features);

        let outputs = AnalyzerOutputs {
            scam: or_neutral("scam_patterns", scam),
            misinformation: or_neutral("misinformation_patterns", misinformation),
            urls: or_neutral("urls", urls),
            sentiment: or_neutral("sentiment", sentiment),
            domain: or_neutral("domain", domain),
            features: or_neutral::<FeatureVector>("features", features),
        };

        self.assemble(&outputs, subject_label, started)
    }

    pub fn analyze_batch(&self, inputs: &[AnalysisInput]) -> BatchAnalysisResponse {
        let results: Vec<AnalysisResult> = inputs.iter().map(|i| self.analyze_input(i)).collect();
        let stats = summarize_results(&results);
        info!(
            count = stats.total_analyses,
            avg_scam_risk = stats.average_scam_risk,
            high_risk = stats.verdicts.high_risk,
            "batch.completed"
        );
        BatchAnalysisResponse { results, stats }
    }

    fn assemble(&self, outputs: &AnalyzerOutputs, subject_label: &str, started: Instant) -> AnalysisResult {
        debug!(
            scam = outputs.scam.score,
            misinformation = outputs.misinformation.score,
            url = outputs.urls.risk_score,
            url_count = outputs.urls.url_count,
            manipulation = outputs.sentiment.manipulation_score,
            financial = outputs.domain.financial_risk,
            medical = outputs.domain.medical_risk,
            "analyzers.completed"
        );

        let fused = fuse(outputs, &self.config);
        let recommendations = generate_recommendations(fused.scam_risk, fused.credibility, outputs, &self.config);

        let scam_risk = fused.scam_risk.round_ties_even() as u32;
        let credibility_score = fused.credibility.round_ties_even() as u32;
        let summary = format!(
            "Multi-layer analysis detected {}% scam risk and {}% credibility. Analysis performed for {}.",
            scam_risk, credibility_score, subject_label
        );

        let result = AnalysisResult {
            scam_risk,
            credibility_score,
            verdict: fused.verdict,
            warnings: fused.warnings,
            recommendations,
            summary,
            confidence: fused.confidence,
            detailed_scores: fused.detailed_scores,
            features: outputs.features,
            features_analyzed: FeatureVector::FEATURE_COUNT,
            request_id: uuid::Uuid::new_v4().to_string(),
            analysis_date: chrono::Utc::now().to_rfc3339(),
            processing_time_ms: started.elapsed().as_millis() as u64,
            engine_version: ENGINE_VERSION.to_string(),
        };

        info!(
            request_id = %result.request_id,
            scam_risk = result.scam_risk,
            credibility = result.credibility_score,
            verdict = %result.verdict,
            warnings = result.warnings.len(),
            elapsed_ms = result.processing_time_ms,
            "analysis.completed"
        );

        result
    }
}

fn or_neutral<T: Default>(analyzer: &str, joined: Result<T, JoinError>) -> T {
    joined.unwrap_or_else(|e| {
        warn!(analyzer, error = %e, "analyzer.task_failed");
        T::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Verdict;

    fn engine() -> DetectionEngine {
        DetectionEngine::with_defaults().unwrap()
    }

    #[test]
    fn test_empty_content() {
        let result = engine().analyze("", "Alice");
        assert_eq!(result.scam_risk, 0);
        assert_eq!(result.credibility_score, 85);
        assert_eq!(result.verdict, Verdict::Credible);
        assert!(result.warnings.is_empty());
        assert_eq!(result.recommendations.len(), 3);
        assert_eq!(result.confidence, 92);
        assert!(result.summary.ends_with("Analysis performed for Alice."));
    }

    #[test]
    fn test_invalid_config_fails_construction() {
        let mut config = EngineConfig::default();
        config.rules.misinformation_patterns = vec!["[bad".to_string()];
        assert!(matches!(DetectionEngine::new(config), Err(EngineError::InvalidPattern { .. })));
    }

    #[test]
    fn test_oversized_signal_risk_fails_construction() {
        let mut config = EngineConfig::default();
        config.url.shortener_risk = u32::MAX;
        assert!(matches!(
            DetectionEngine::new(config),
            Err(EngineError::InvalidWeight { name: "shortenerRisk", .. })
        ));
    }

    #[test]
    fn test_detailed_scores_mirror_findings() {
        let e = engine();
        let text = "Free money! Visit http://bit.ly/win for bitcoin profit";
        let outputs = e.run_analyzers(text);
        let result = e.analyze(text, "Bob");
        assert_eq!(result.detailed_scores.pattern_matching, outputs.scam.score);
        assert_eq!(result.detailed_scores.url_security, 45);
        assert_eq!(result.detailed_scores.domain_specific, 20);
        assert_eq!(result.features, outputs.features);
        assert_eq!(result.features_analyzed, 7);
    }

    #[test]
    fn test_record_preview_is_truncated() {
        let text = "a".repeat(800);
        let result = engine().analyze(&text, "Carol");
        let record = result.to_record(&text);
        assert_eq!(record.content_preview.chars().count(), 500);
        assert_eq!(record.request_id, result.request_id);
        assert_eq!(record.verdict, result.verdict);
    }

    #[tokio::test]
    async fn test_concurrent_matches_sequential() {
        let e = Arc::new(engine());
        let text = "CONGRATULATIONS WINNER! You won $5,000. Claim at http://192.168.1.10/claim now, limited time offer!";
        let sequential = e.analyze(text, "Dana");
        let concurrent = e.analyze_concurrent(text, "Dana").await;
        assert_eq!(sequential.scam_risk, concurrent.scam_risk);
        assert_eq!(sequential.credibility_score, concurrent.credibility_score);
        assert_eq!(sequential.verdict, concurrent.verdict);
        assert_eq!(sequential.warnings, concurrent.warnings);
        assert_eq!(sequential.recommendations, concurrent.recommendations);
    }

    #[test]
    fn test_batch_stats() {
        let inputs = vec![
            AnalysisInput::new("See you at lunch.", "A"),
            AnalysisInput::new("", "B"),
        ];
        let batch = engine().analyze_batch(&inputs);
        assert_eq!(batch.results.len(), 2);
        assert_eq!(batch.stats.total_analyses, 2);
        assert_eq!(batch.stats.verdicts.credible, 2);
        assert_eq!(batch.stats.threat_levels.low, 2);
    }
}
