// Recommendation Generator
// Threshold-gated advice groups in fixed order, truncated to the configured cap

use crate::models::AnalyzerOutputs;
use crate::services::config_store::EngineConfig;

pub const SCAM_ADVICE: [&str; 3] = [
    "🚫 Do not provide personal, financial, or login information",
    "🔍 Verify the sender through official channels",
    "📞 Contact the organization directly using official contact methods",
];

pub const CREDIBILITY_ADVICE: [&str; 3] = [
    "📚 Cross-reference information with multiple reliable sources",
    "🏛️ Check with authoritative institutions or experts",
    "🔬 Look for peer-reviewed studies or official documentation",
];

pub const LINK_ADVICE: [&str; 3] = [
    "🖱️ Hover over links to preview destinations before clicking",
    "🔒 Only visit secure HTTPS websites",
    "🌐 Use URL scanning tools to check link safety",
];

pub const MEDICAL_ADVICE: &str = "👨‍⚕️ Consult healthcare professionals for medical advice";
pub const FINANCIAL_ADVICE: &str = "💼 Consult licensed financial advisors for investment decisions";

pub const GENERAL_ADVICE: [&str; 3] = [
    "📢 Report suspicious content to help protect the community",
    "🛡️ Trust your instincts - if something seems too good to be true, it probably is",
    "📱 Keep your security software updated and use strong passwords",
];

pub fn generate_recommendations(
    scam_risk: f64,
    credibility: f64,
    outputs: &AnalyzerOutputs,
    config: &EngineConfig,
) -> Vec<String> {
    let gates = &config.recommendations;
    let mut advice: Vec<&str> = Vec::new();

    if scam_risk > gates.scam_risk {
        advice.extend(SCAM_ADVICE);
    }
    if credibility < gates.credibility {
        advice.extend(CREDIBILITY_ADVICE);
    }
    if outputs.urls.url_count > 0 {
        advice.extend(LINK_ADVICE);
    }
    if outputs.domain.medical_risk > gates.medical_risk {
        advice.push(MEDICAL_ADVICE);
    }
    if outputs.domain.financial_risk > gates.financial_risk {
        advice.push(FINANCIAL_ADVICE);
    }
    advice.extend(GENERAL_ADVICE);

    advice
        .into_iter()
        .take(config.limits.max_recommendations)
        .map(str::to_string)
        .collect()
}
