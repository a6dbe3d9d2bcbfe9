use regex::Regex;
use scraper::{Html, Selector};
use crate::features::tables::{has_suspicious_tld, is_url_shortener};
use crate::models::HeuristicSignals;

/// Tokens whose presence in page text correlates with phishing lures.
const SUSPICIOUS_KEYWORDS: &[&str] = &[
    "urgent", "verify", "suspend", "confirm", "security alert",
    "account blocked", "click here", "limited time", "act now", "winner",
    "congratulations", "free money", "inheritance", "lottery", "prize",
    "banking alert", "suspended", "expired", "immediate action",
    "verify identity", "claim now", "tax refund", "virus detected",
    "system infected",
];

/// Full social-engineering phrases, matched verbatim.
const SOCIAL_ENGINEERING_PHRASES: &[&str] = &[
    "verify your account", "confirm your identity", "update payment method",
    "suspicious activity", "unusual activity", "security breach",
    "account compromised", "click to verify", "avoid account suspension",
    "immediate response required", "act within 24 hours",
];

const URGENCY_WORDS: &[&str] = &[
    "urgent", "immediately", "asap", "expire", "deadline", "last chance",
    "limited time", "hurry", "now or never", "today only",
];

const SUSPICIOUS_JS_PATTERNS: &[&str] = &[
    "eval(", "document.write", "unescape", "fromcharcode", "atob(",
    "document.cookie", "base64",
];

/// Extracts normalized page-content signals from raw HTML. Never fails
/// hard: unparseable markup just yields weaker (or zero) signals.
pub struct HeuristicAnalyzer {
    form_sel: Selector,
    password_sel: Selector,
    hidden_input_sel: Selector,
    iframe_sel: Selector,
    script_sel: Selector,
    anchor_sel: Selector,
    meta_refresh_sel: Selector,
    popup_class_re: Regex,
    popup_js_re: Regex,
    ad_re: Regex,
    hidden_style_re: Regex,
    sensitive_re: Regex,
    redirect_js_re: Regex,
}

impl HeuristicAnalyzer {
    pub fn new() -> Self {
        // Selector::parse only fails on invalid CSS syntax; these are
        // compile-time constants.
        Self {
            form_sel: Selector::parse("form").unwrap(),
            password_sel: Selector::parse(r#"input[type="password"]"#).unwrap(),
            hidden_input_sel: Selector::parse(r#"input[type="hidden"]"#).unwrap(),
            iframe_sel: Selector::parse("iframe").unwrap(),
            script_sel: Selector::parse("script").unwrap(),
            anchor_sel: Selector::parse("a[href]").unwrap(),
            meta_refresh_sel: Selector::parse(r#"meta[http-equiv="refresh"]"#).unwrap(),
            popup_class_re: Regex::new(r#"(?i)class="[^"]*(popup|modal|overlay)"#).unwrap(),
            popup_js_re: Regex::new(r"(?i)window\.open|alert\(|confirm\(|prompt\(").unwrap(),
            ad_re: Regex::new(r#"(?i)(class|id)="[^"]*(advert|banner|sponsor|\bads?\b)"#)
                .unwrap(),
            hidden_style_re: Regex::new(r"(?i)display:\s*none|visibility:\s*hidden").unwrap(),
            sensitive_re: Regex::new(
                r"(?i)social security|ssn|credit card|card number|cvv|cvc|bank account|routing number|driver.?license|passport number",
            )
            .unwrap(),
            redirect_js_re: Regex::new(r"(?i)(location\.href|window\.location)\s*=").unwrap(),
        }
    }

    /// Analyze one fetched page and return the full signal set, each value
    /// normalized to [0,1]. An unparseable or empty page yields all-zero
    /// signals, not an error; only a failed fetch leaves the set empty.
    pub fn analyze(&self, page_text: &str) -> HeuristicSignals {
        let mut signals = HeuristicSignals::new();
        let document = Html::parse_document(page_text);
        let text = document.root_element().text().collect::<String>().to_lowercase();

        // Forms and credential harvesting
        let forms: Vec<_> = document.select(&self.form_sel).collect();
        signals.set("form_presence", forms.len() as f64 * 0.5);

        let external_forms = forms
            .iter()
            .filter(|f| {
                f.value()
                    .attr("action")
                    .map_or(false, |a| a.starts_with("http://") || a.starts_with("https://"))
            })
            .count();
        signals.set("external_form_count", external_forms as f64 * 0.5);

        let password_fields = document.select(&self.password_sel).count();
        signals.set("password_fields", if password_fields > 0 { 1.0 } else { 0.0 });

        // Language signals
        let keyword_hits = SUSPICIOUS_KEYWORDS.iter().filter(|k| text.contains(*k)).count();
        signals.set("suspicious_keywords", keyword_hits as f64 * 0.25);

        let social_hits = SOCIAL_ENGINEERING_PHRASES
            .iter()
            .filter(|p| text.contains(*p))
            .count();
        signals.set("social_engineering", social_hits as f64 / 3.0);

        let urgency_hits = URGENCY_WORDS.iter().filter(|w| text.contains(*w)).count();
        signals.set("urgency_tactics", urgency_hits as f64 * 0.4);

        let sensitive_hits = self.sensitive_re.find_iter(&text).count();
        signals.set("sensitive_data_requests", sensitive_hits as f64 / 3.0);

        // Structural signals
        let popup_hits = self.popup_class_re.find_iter(page_text).count()
            + document
                .select(&self.script_sel)
                .filter(|s| {
                    let body = s.text().collect::<String>();
                    self.popup_js_re.is_match(&body)
                })
                .count();
        signals.set("popup_count", popup_hits as f64 * 0.25);

        let ad_hits = self.ad_re.find_iter(page_text).count();
        signals.set("ad_density", ad_hits as f64 / 10.0);

        let iframe_count = document.select(&self.iframe_sel).count();
        signals.set("iframe_presence", iframe_count as f64 * 0.5);

        let hidden = self.hidden_style_re.find_iter(page_text).count()
            + document.select(&self.hidden_input_sel).count();
        signals.set(
            "hidden_elements",
            (hidden.saturating_sub(5)) as f64 * 0.25,
        );

        // Script behavior
        let js_suspicious = document.select(&self.script_sel).any(|s| {
            let body = s.text().collect::<String>().to_lowercase();
            let src = s.value().attr("src").unwrap_or("").to_lowercase();
            SUSPICIOUS_JS_PATTERNS
                .iter()
                .any(|p| body.contains(p) || src.contains(p))
        });
        signals.set("suspicious_javascript", if js_suspicious { 1.0 } else { 0.0 });

        let redirects = document.select(&self.meta_refresh_sel).count()
            + self.redirect_js_re.find_iter(page_text).count();
        signals.set("redirect_count", redirects as f64 * 0.5);

        // Outbound link quality
        let anchors: Vec<_> = document.select(&self.anchor_sel).collect();
        let suspicious_links = anchors
            .iter()
            .filter_map(|a| a.value().attr("href"))
            .filter(|href| Self::is_suspicious_link(href))
            .count();
        let link_ratio = if anchors.is_empty() {
            0.0
        } else {
            suspicious_links as f64 / anchors.len() as f64
        };
        signals.set("suspicious_link_ratio", link_ratio);

        signals
    }

    fn is_suspicious_link(href: &str) -> bool {
        let Ok(parsed) = url::Url::parse(href) else {
            return false;
        };
        match parsed.host() {
            Some(url::Host::Domain(host)) => {
                let host = host.to_ascii_lowercase();
                has_suspicious_tld(&host) || is_url_shortener(&host)
            }
            Some(_) => true, // raw IP link
            None => false,
        }
    }
}

impl Default for HeuristicAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
