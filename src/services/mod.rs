// XistAI Core Services

pub mod text_processor;
pub mod config_store;
pub mod detection;

pub use text_processor::*;
pub use config_store::*;

pub use detection::{
    analyze_domain,
    analyze_sentiment,
    analyze_urls,
    classify_verdict,
    fuse,
    generate_recommendations,
    match_patterns,
    summarize_results,
    DetectionEngine,
    EngineError,
    FusedAssessment,
    PatternCategory,
    ENGINE_VERSION,
};
