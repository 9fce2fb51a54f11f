// Verdict classification
// Thresholds gate the categorical verdict; they never alter the underlying scores.

use crate::models::Verdict;
use crate::services::config_store::VerdictThresholds;

/// Precedence: HighRisk, then Suspicious, then Credible. All comparisons are strict.
pub fn classify_verdict(scam_risk: f64, credibility: f64, thresholds: &VerdictThresholds) -> Verdict {
    if scam_risk > thresholds.high_risk_scam || credibility < thresholds.high_risk_credibility {
        Verdict::HighRisk
    } else if scam_risk > thresholds.suspicious_scam || credibility < thresholds.suspicious_credibility {
        Verdict::Suspicious
    } else {
        Verdict::Credible
    }
}

/// Mean of credibility and inverted scam risk; ties round to even.
pub fn confidence(scam_risk: f64, credibility: f64) -> u32 {
    ((credibility + (100.0 - scam_risk)) / 2.0).round_ties_even().clamp(0.0, 100.0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(scam: f64, cred: f64) -> Verdict {
        classify_verdict(scam, cred, &VerdictThresholds::default())
    }

    #[test]
    fn test_boundary_seventy_is_suspicious() {
        assert_eq!(classify(70.0, 85.0), Verdict::Suspicious);
        assert_eq!(classify(70.01, 85.0), Verdict::HighRisk);
    }

    #[test]
    fn test_boundary_forty_is_credible() {
        assert_eq!(classify(40.0, 85.0), Verdict::Credible);
        assert_eq!(classify(40.5, 85.0), Verdict::Suspicious);
    }

    #[test]
    fn test_credibility_gates() {
        assert_eq!(classify(0.0, 29.9), Verdict::HighRisk);
        assert_eq!(classify(0.0, 30.0), Verdict::Suspicious);
        assert_eq!(classify(0.0, 59.9), Verdict::Suspicious);
        assert_eq!(classify(0.0, 60.0), Verdict::Credible);
    }

    #[test]
    fn test_confidence() {
        assert_eq!(confidence(0.0, 85.0), 92);
        assert_eq!(confidence(100.0, 0.0), 0);
        assert_eq!(confidence(20.0, 60.0), 70);
    }

    #[test]
    fn test_confidence_ties_round_to_even() {
        // 93.5 -> 94, 92.5 -> 92, 0.5 -> 0
        assert_eq!(confidence(0.0, 87.0), 94);
        assert_eq!(confidence(15.0, 100.0), 92);
        assert_eq!(confidence(100.0, 1.0), 0);
        assert_eq!(confidence(0.0, 84.0), 92);
    }
}
