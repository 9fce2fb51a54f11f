// Sentiment / Manipulation Analyzer
// Lexicon polarity and subjectivity; extreme or highly subjective language raises the manipulation score.

use std::collections::HashMap;
use std::sync::OnceLock;
use thiserror::Error;
use tracing::debug;

use crate::models::SentimentFinding;
use crate::services::config_store::SentimentConfig;
use super::rules::{INTENSIFIERS, NEGATION_FACTOR, NEGATORS, SCORE_CEILING, SENTIMENT_LEXICON};

#[derive(Error, Debug, PartialEq)]
pub enum SentimentError {
    #[error("content is empty")]
    EmptyContent,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SentimentScores {
    pub polarity: f64,
    pub subjectivity: f64,
}

fn lexicon() -> &'static HashMap<&'static str, (f64, f64)> {
    static LEXICON: OnceLock<HashMap<&'static str, (f64, f64)>> = OnceLock::new();
    LEXICON.get_or_init(|| {
        SENTIMENT_LEXICON
            .iter()
            .map(|(word, polarity, subjectivity)| (*word, (*polarity, *subjectivity)))
            .collect()
    })
}

fn intensifier(word: &str) -> Option<f64> {
    INTENSIFIERS.iter().find(|(w, _)| *w == word).map(|(_, m)| *m)
}

fn tokens(content: &str) -> impl Iterator<Item = String> + '_ {
    content
        .split_whitespace()
        .map(|raw| {
            raw.trim_matches(|c: char| !c.is_alphanumeric() && c != '\'')
                .to_lowercase()
                .replace('\u{2019}', "'")
        })
        .filter(|t| !t.is_empty())
}

/// Mean polarity / subjectivity over lexicon words; modifiers apply to the next lexicon word only.
pub fn score_sentiment(content: &str) -> Result<SentimentScores, SentimentError> {
    if content.trim().is_empty() {
        return Err(SentimentError::EmptyContent);
    }

    let mut polarity_sum = 0.0;
    let mut subjectivity_sum = 0.0;
    let mut assessed = 0usize;
    let mut multiplier = 1.0;
    let mut negated = false;

    for token in tokens(content) {
        if let Some(m) = intensifier(&token) {
            multiplier *= m;
            continue;
        }
        if NEGATORS.contains(&token.as_str()) {
            negated = !negated;
            continue;
        }
        if let Some((polarity, subjectivity)) = lexicon().get(token.as_str()) {
            let mut p = (polarity * multiplier).clamp(-1.0, 1.0);
            if negated {
                p *= NEGATION_FACTOR;
            }
            polarity_sum += p;
            subjectivity_sum += (subjectivity * multiplier).clamp(0.0, 1.0);
            assessed += 1;
        }
        multiplier = 1.0;
        negated = false;
    }

    if assessed == 0 {
        return Ok(SentimentScores::default());
    }

    let assessed = assessed as f64;
    Ok(SentimentScores {
        polarity: (polarity_sum / assessed).clamp(-1.0, 1.0),
        subjectivity: (subjectivity_sum / assessed).clamp(0.0, 1.0),
    })
}

pub fn manipulation_score(scores: &SentimentScores, config: &SentimentConfig) -> u32 {
    let mut score = 0u32;
    if scores.polarity.abs() > config.extreme_polarity {
        score = score.saturating_add(config.extreme_polarity_bonus);
    }
    if scores.subjectivity > config.high_subjectivity {
        score = score.saturating_add(config.high_subjectivity_bonus);
    }
    score.min(SCORE_CEILING)
}

/// Never fails: any scoring error yields the neutral finding.
pub fn analyze_sentiment(content: &str, config: &SentimentConfig) -> SentimentFinding {
    match score_sentiment(content) {
        Ok(scores) => SentimentFinding {
            polarity: scores.polarity,
            subjectivity: scores.subjectivity,
            manipulation_score: manipulation_score(&scores, config),
        },
        Err(e) => {
            debug!(error = %e, "sentiment.neutral_fallback");
            SentimentFinding::neutral()
        }
    }
}
