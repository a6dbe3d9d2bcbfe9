/// Page-text sample size sent to the model. Larger samples add latency
/// without improving the score.
const TEXT_SAMPLE_LIMIT: usize = 1500;

pub const SYSTEM_PROMPT: &str = "You are a phishing detection analyst. \
You examine webpage content for credential harvesting, social engineering, \
urgency tactics, and technical red flags, and you answer only in JSON.";

pub fn build_prompt(page_text: &str) -> String {
    let sample: String = page_text.chars().take(TEXT_SAMPLE_LIMIT).collect();
    format!(
        "Analyze this webpage content for phishing indicators. Focus on content \
manipulation tactics, social engineering attempts, suspicious form requests, \
urgency/pressure tactics, and technical red flags.\n\n\
CONTENT SAMPLE:\n{sample}\n\n\
Respond ONLY with valid JSON:\n\
{{\n    \"phishing_likelihood\": <0-100>,\n    \"reasoning\": \"one-sentence explanation\"\n}}"
    )
}
