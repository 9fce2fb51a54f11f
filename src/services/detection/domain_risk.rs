// Domain Risk Analyzer
// Financial and medical keyword density over lower-cased content

use crate::models::DomainFinding;
use crate::services::config_store::LexiconConfig;
use super::rules::SCORE_CEILING;

/// Number of lexicon terms contained in the content (each term counted once).
pub fn lexicon_hits(content_lower: &str, terms: &[String]) -> u32 {
    terms
        .iter()
        .filter(|term| !term.is_empty() && content_lower.contains(&term.to_lowercase()))
        .count() as u32
}

pub fn analyze_domain(content_lower: &str, config: &LexiconConfig) -> DomainFinding {
    let financial = lexicon_hits(content_lower, &config.financial_terms);
    let medical = lexicon_hits(content_lower, &config.medical_terms);

    DomainFinding {
        financial_risk: financial.saturating_mul(config.financial_hit_weight).min(SCORE_CEILING),
        medical_risk: medical.saturating_mul(config.medical_hit_weight).min(SCORE_CEILING),
    }
}
