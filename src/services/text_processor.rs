// Text Processing Service
// Structural statistics of submitted text (no semantic judgment)

use regex::Regex;
use std::sync::OnceLock;

use crate::models::FeatureVector;

const PUNCTUATION_CHARS: &[char] = &['!', '?', '.', ',', ';', ':'];

fn digit_run_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\d+").expect("digit run regex"))
}

fn currency_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[\$€£¥]").expect("currency regex"))
}

/// Whitespace-delimited words
pub fn split_words(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Lower-cased copy shared by the case-insensitive analyzers
pub fn normalize_for_matching(text: &str) -> String {
    text.to_lowercase()
}

/// Count of characters for which `pred` holds, divided by total chars (0 for empty text)
fn char_ratio(text: &str, char_count: usize, pred: impl Fn(char) -> bool) -> f64 {
    if char_count == 0 {
        return 0.0;
    }
    text.chars().filter(|c| pred(*c)).count() as f64 / char_count as f64
}

/// Extract the lexical feature vector of a text
pub fn compute_features(text: &str) -> FeatureVector {
    let words = split_words(text);
    let char_count = text.chars().count();

    let avg_word_length = if words.is_empty() {
        0.0
    } else {
        words.iter().map(|w| w.chars().count()).sum::<usize>() as f64 / words.len() as f64
    };

    FeatureVector {
        word_count: words.len(),
        char_count,
        avg_word_length,
        uppercase_ratio: char_ratio(text, char_count, char::is_uppercase),
        punctuation_ratio: char_ratio(text, char_count, |c| PUNCTUATION_CHARS.contains(&c)),
        number_group_count: digit_run_re().find_iter(text).count(),
        currency_symbol_count: currency_re().find_iter(text).count(),
    }
}
