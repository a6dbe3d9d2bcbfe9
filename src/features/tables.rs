//! Static lookup tables consulted during URL feature extraction.

/// Registrable domains treated as reputable. A match pulls the lexical
/// classifier's probability down hard.
pub const TRUSTED_DOMAINS: &[&str] = &[
    "github.com",
    "youtube.com",
    "google.com",
    "gmail.com",
    "microsoft.com",
    "apple.com",
    "facebook.com",
    "twitter.com",
    "linkedin.com",
    "stackoverflow.com",
];

/// TLDs with disproportionate phishing abuse rates.
pub const SUSPICIOUS_TLDS: &[&str] = &[
    "xyz", "top", "tk", "gq", "cf", "ml", "ga", "bond", "click", "win",
    "icu", "buzz", "work", "loan", "date", "stream", "download", "cfd",
    "sbs", "rest",
];

/// Known URL shortener hosts. Shortened links hide their destination and
/// score as a suspicion signal.
pub const URL_SHORTENERS: &[&str] = &[
    "bit.ly", "tinyurl.com", "t.co", "goo.gl", "ow.ly", "is.gd", "buff.ly",
    "rebrand.ly", "cutt.ly", "tiny.cc", "rb.gy", "shorturl.at", "v.gd",
    "s.id", "t.ly",
];

pub fn is_trusted_domain(host: &str) -> bool {
    let host = host.strip_prefix("www.").unwrap_or(host);
    TRUSTED_DOMAINS
        .iter()
        .any(|d| host == *d || host.ends_with(&format!(".{d}")))
}

pub fn has_suspicious_tld(host: &str) -> bool {
    match host.rsplit('.').next() {
        Some(tld) => SUSPICIOUS_TLDS.contains(&tld),
        None => false,
    }
}

pub fn is_url_shortener(host: &str) -> bool {
    let host = host.strip_prefix("www.").unwrap_or(host);
    URL_SHORTENERS.contains(&host)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trusted_domain_with_subdomain() {
        assert!(is_trusted_domain("accounts.google.com"));
        assert!(is_trusted_domain("www.github.com"));
    }

    #[test]
    fn test_lookalike_is_not_trusted() {
        assert!(!is_trusted_domain("google.com.evil.xyz"));
        assert!(!is_trusted_domain("notgoogle.com"));
    }

    #[test]
    fn test_suspicious_tld() {
        assert!(has_suspicious_tld("watchserieshd.bond"));
        assert!(!has_suspicious_tld("example.org"));
    }

    #[test]
    fn test_shortener_lookup() {
        assert!(is_url_shortener("bit.ly"));
        assert!(is_url_shortener("www.tinyurl.com"));
        assert!(!is_url_shortener("example.com"));
    }
}
