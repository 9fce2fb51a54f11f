// Detection Module
// Content risk analysis organized into independent analyzers and a fusion step:
// - rules: reference pattern sets, lexicons, weights and regex compilation
// - pattern_matcher: scam / misinformation rule scoring
// - url_analyzer: syntactic URL risk signals
// - sentiment: polarity, subjectivity and manipulation score
// - domain_risk: financial / medical keyword density
// - aggregation + verdict: weighted fusion and categorical verdict
// - recommendations: threshold-gated advice
// - engine: fan-out / fan-in façade
// - stats: batch statistics

pub mod rules;
pub mod pattern_matcher;
pub mod url_analyzer;
pub mod sentiment;
pub mod domain_risk;
pub mod aggregation;
pub mod verdict;
pub mod recommendations;
pub mod stats;
pub mod engine;

pub use rules::{CompiledRules, EngineError, PatternCategory, PatternRule};
pub use pattern_matcher::match_patterns;
pub use url_analyzer::{analyze_urls, extract_urls};
pub use sentiment::{analyze_sentiment, score_sentiment, SentimentError, SentimentScores};
pub use domain_risk::analyze_domain;
pub use aggregation::{fuse, FusedAssessment};
pub use verdict::classify_verdict;
pub use recommendations::generate_recommendations;
pub use stats::summarize_results;
pub use engine::{DetectionEngine, ENGINE_VERSION};
