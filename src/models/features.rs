use serde::{Deserialize, Serialize};

/// Lexical and structural attributes of a single URL, in a fixed order.
/// Built once by the feature extractor and consumed only by the URL
/// classifier; never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UrlFeatureVector {
    /// Total character length of the URL.
    pub url_length: f64,
    /// Fraction of characters in the full URL that are digits.
    pub digit_ratio: f64,
    /// Count of special characters (`-`, `_`, `%`, `?`, `=`, `&`, `~`, `@`).
    pub special_char_count: f64,
    /// Number of subdomain labels beyond the registrable domain.
    pub subdomain_depth: f64,
    /// Number of path segments.
    pub path_depth: f64,
    /// Shannon entropy of the host string.
    pub domain_entropy: f64,
    /// 1.0 if the TLD is on the high-abuse list.
    pub suspicious_tld: f64,
    /// 1.0 if the host is a raw IP address.
    pub is_ip_literal: f64,
    /// 1.0 if the host contains a punycode (`xn--`) label.
    pub is_punycode: f64,
    /// 1.0 if the host is a known URL shortener.
    pub is_shortener: f64,
    /// 1.0 if the scheme is https.
    pub uses_https: f64,
    /// 1.0 if the URL embeds userinfo credentials (`user:pass@`).
    pub has_credentials: f64,
    /// 1.0 if the registrable domain is on the trusted list.
    pub trusted_domain: f64,
}

impl UrlFeatureVector {
    pub const LEN: usize = 13;

    /// The vector in its canonical feature order, matching the schema a
    /// trained model is fitted against.
    pub fn to_vec(&self) -> Vec<f64> {
        vec![
            self.url_length,
            self.digit_ratio,
            self.special_char_count,
            self.subdomain_depth,
            self.path_depth,
            self.domain_entropy,
            self.suspicious_tld,
            self.is_ip_literal,
            self.is_punycode,
            self.is_shortener,
            self.uses_https,
            self.has_credentials,
            self.trusted_domain,
        ]
    }

    /// A vector is well-formed when every slot is finite. Classifiers
    /// reject anything else with `InvalidFeatureVector`.
    pub fn is_well_formed(&self) -> bool {
        self.to_vec().iter().all(|v| v.is_finite())
    }
}
