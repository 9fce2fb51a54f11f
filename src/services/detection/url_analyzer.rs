// URL Risk Analyzer
// Syntactic URL checks only; URLs are never dereferenced.

use regex::Regex;
use std::sync::OnceLock;

use crate::models::UrlRiskFinding;
use crate::services::config_store::UrlSignalConfig;
use super::rules::{SCORE_CEILING, URL_PATTERN};

pub const WARN_SHORTENER: &str = "Shortened URL detected";
pub const WARN_INSECURE: &str = "Insecure HTTP connection";
pub const WARN_SUSPICIOUS_TLD: &str = "Suspicious domain extension";
pub const WARN_IP_HOST: &str = "IP address used instead of domain";

fn url_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(URL_PATTERN).expect("url regex"))
}

fn ipv4_host_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d{1,3}(\.\d{1,3}){3}$").expect("ipv4 host regex"))
}

/// All `scheme://non-whitespace` tokens in order of appearance
pub fn extract_urls(content: &str) -> Vec<&str> {
    url_re().find_iter(content).map(|m| m.as_str()).collect()
}

/// Lower-cased host of a URL token, without userinfo, port or trailing dots
pub fn url_host(url: &str) -> String {
    let rest = url.split_once("://").map(|(_, r)| r).unwrap_or(url);
    let authority = rest
        .split(|c| c == '/' || c == '?' || c == '#')
        .next()
        .unwrap_or("");
    let host_port = authority.rsplit_once('@').map(|(_, h)| h).unwrap_or(authority);
    let host = host_port.split(':').next().unwrap_or("");
    host.trim_end_matches(|c: char| c == '.' || c == ',' || c == ')' || c == '!' || c == '?')
        .to_lowercase()
}

fn host_matches_domain(host: &str, domain: &str) -> bool {
    host == domain
        || host
            .strip_suffix(domain)
            .map_or(false, |prefix| prefix.ends_with('.'))
}

/// Score one URL, appending a warning for each signal it trips
fn score_url(url: &str, config: &UrlSignalConfig, warnings: &mut Vec<String>) -> u32 {
    let host = url_host(url);
    let mut risk = 0u32;

    if config.shorteners.iter().any(|s| host_matches_domain(&host, s)) {
        risk = risk.saturating_add(config.shortener_risk);
        warnings.push(WARN_SHORTENER.to_string());
    }

    if url.get(..7).map_or(false, |scheme| scheme.eq_ignore_ascii_case("http://")) {
        risk = risk.saturating_add(config.insecure_scheme_risk);
        warnings.push(WARN_INSECURE.to_string());
    }

    if config.suspicious_tlds.iter().any(|tld| host.ends_with(tld.as_str())) {
        risk = risk.saturating_add(config.suspicious_tld_risk);
        warnings.push(WARN_SUSPICIOUS_TLD.to_string());
    }

    if ipv4_host_re().is_match(&host) {
        risk = risk.saturating_add(config.ip_host_risk);
        warnings.push(WARN_IP_HOST.to_string());
    }

    risk
}

pub fn analyze_urls(content: &str, config: &UrlSignalConfig) -> UrlRiskFinding {
    let urls = extract_urls(content);
    let mut warnings = Vec::new();
    let total: u32 = urls
        .iter()
        .fold(0u32, |acc, url| acc.saturating_add(score_url(url, config, &mut warnings)));

    UrlRiskFinding {
        risk_score: total.min(SCORE_CEILING),
        warnings,
        url_count: urls.len(),
    }
}
