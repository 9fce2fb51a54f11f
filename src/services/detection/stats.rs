// Batch statistics over finished analyses

use crate::models::{
    AnalysisResult, AnalysisStats, CredibilityPoint, RecentAnalysis, ThreatLevelCounts, Verdict, VerdictCounts,
};

const LOW_THREAT_BELOW: u32 = 30;
const MEDIUM_THREAT_BELOW: u32 = 70;
pub const RECENT_WINDOW: usize = 10;

/// `MM/DD` of an RFC 3339 analysis date; unparseable dates pass through unchanged.
fn trend_date(analysis_date: &str) -> String {
    chrono::DateTime::parse_from_rfc3339(analysis_date)
        .map(|d| d.format("%m/%d").to_string())
        .unwrap_or_else(|_| analysis_date.to_string())
}

pub fn summarize_results(results: &[AnalysisResult]) -> AnalysisStats {
    if results.is_empty() {
        return AnalysisStats::default();
    }

    let mut verdicts = VerdictCounts::default();
    let mut threat_levels = ThreatLevelCounts::default();

    for result in results {
        match result.verdict {
            Verdict::Credible => verdicts.credible += 1,
            Verdict::Suspicious => verdicts.suspicious += 1,
            Verdict::HighRisk => verdicts.high_risk += 1,
        }
        if result.scam_risk < LOW_THREAT_BELOW {
            threat_levels.low += 1;
        } else if result.scam_risk < MEDIUM_THREAT_BELOW {
            threat_levels.medium += 1;
        } else {
            threat_levels.high += 1;
        }
    }

    let recent = &results[results.len().saturating_sub(RECENT_WINDOW)..];
    let recent_analyses = recent
        .iter()
        .map(|r| RecentAnalysis {
            date: r.analysis_date.clone(),
            verdict: r.verdict,
            scam_risk: r.scam_risk,
            credibility_score: r.credibility_score,
        })
        .collect();
    let credibility_trend = recent
        .iter()
        .map(|r| CredibilityPoint {
            date: trend_date(&r.analysis_date),
            score: r.credibility_score,
        })
        .collect();

    let n = results.len() as f64;
    AnalysisStats {
        total_analyses: results.len(),
        average_scam_risk: results.iter().map(|r| f64::from(r.scam_risk)).sum::<f64>() / n,
        average_credibility: results.iter().map(|r| f64::from(r.credibility_score)).sum::<f64>() / n,
        verdicts,
        threat_levels,
        recent_analyses,
        credibility_trend,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DetailedScores, FeatureVector};

    fn result(scam_risk: u32, credibility_score: u32, verdict: Verdict) -> AnalysisResult {
        AnalysisResult {
            scam_risk,
            credibility_score,
            verdict,
            warnings: vec![],
            recommendations: vec![],
            summary: String::new(),
            confidence: 0,
            detailed_scores: DetailedScores::default(),
            features: FeatureVector::default(),
            features_analyzed: FeatureVector::FEATURE_COUNT,
            request_id: String::new(),
            analysis_date: String::new(),
            processing_time_ms: 0,
            engine_version: String::new(),
        }
    }

    #[test]
    fn test_empty_summary() {
        assert_eq!(summarize_results(&[]), AnalysisStats::default());
    }

    #[test]
    fn test_buckets_and_averages() {
        let results = vec![
            result(10, 80, Verdict::Credible),
            result(30, 60, Verdict::Credible),
            result(69, 40, Verdict::Suspicious),
            result(70, 20, Verdict::HighRisk),
        ];
        let stats = summarize_results(&results);
        assert_eq!(stats.total_analyses, 4);
        assert_eq!(stats.threat_levels, ThreatLevelCounts { low: 1, medium: 2, high: 1 });
        assert_eq!(stats.verdicts, VerdictCounts { credible: 2, suspicious: 1, high_risk: 1 });
        assert!((stats.average_scam_risk - 44.75).abs() < 1e-9);
        assert!((stats.average_credibility - 50.0).abs() < 1e-9);
        assert_eq!(stats.recent_analyses.len(), 4);
        assert_eq!(stats.recent_analyses[3].verdict, Verdict::HighRisk);
    }

    #[test]
    fn test_recent_window_keeps_last_ten() {
        let results: Vec<AnalysisResult> = (0..12)
            .map(|i| {
                let mut r = result(i, 80 - i, Verdict::Credible);
                r.analysis_date = format!("2026-03-{:02}T08:30:00+00:00", i + 1);
                r
            })
            .collect();
        let stats = summarize_results(&results);
        assert_eq!(stats.total_analyses, 12);
        assert_eq!(stats.recent_analyses.len(), RECENT_WINDOW);
        assert_eq!(stats.recent_analyses[0].scam_risk, 2);
        assert_eq!(stats.recent_analyses[9].date, "2026-03-12T08:30:00+00:00");
        assert_eq!(
            stats.credibility_trend[0],
            CredibilityPoint { date: "03/03".to_string(), score: 78 }
        );
        assert_eq!(stats.credibility_trend[9].date, "03/12");
    }

    #[test]
    fn test_trend_date_falls_back_to_raw() {
        assert_eq!(trend_date("yesterday"), "yesterday");
    }
}
