use crate::signals::{Signal, SignalHit, UrlContext};
use regex::Regex;

/// Hostnames that phishing domains borrow to look like a support or login
/// portal. Only the first match is reported.
const HOSTNAME_KEYWORDS: &[&str] = &[
    "protection",
    "secure",
    "access",
    "update",
    "verify",
    "support",
    "service",
    "account",
    "login",
    "signin",
    "confirm",
];

/// Host is a dotted-quad IPv4 literal instead of a domain name.
pub struct RawIpHost {
    pattern: Regex,
}

impl Default for RawIpHost {
    fn default() -> Self {
        Self::new()
    }
}

impl RawIpHost {
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(r"^(?:[0-9]{1,3}\.){3}[0-9]{1,3}$").unwrap(),
        }
    }
}

impl Signal for RawIpHost {
    fn name(&self) -> &'static str {
        "raw-ip-host"
    }

    fn check(&self, ctx: &UrlContext) -> Option<SignalHit> {
        if self.pattern.is_match(ctx.hostname) {
            Some(SignalHit {
                weight: 60,
                reason: "It points to a raw server address (IP) instead of a verified domain."
                    .to_string(),
            })
        } else {
            None
        }
    }
}

/// Naive depth count: dot-separated labels minus two. Known to
/// over-count on multi-part public suffixes like .co.uk.
pub struct SubdomainDepth;

impl Signal for SubdomainDepth {
    fn name(&self) -> &'static str {
        "subdomain-depth"
    }

    fn check(&self, ctx: &UrlContext) -> Option<SignalHit> {
        let labels = ctx.hostname.split('.').count() as i32;
        if labels - 2 > 3 {
            Some(SignalHit {
                weight: 15,
                reason: "The domain structure is complicated with many sub-levels.".to_string(),
            })
        } else {
            None
        }
    }
}

/// ACE-prefixed (punycode) hostnames can render as lookalike glyphs.
pub struct PunycodeHost;

impl Signal for PunycodeHost {
    fn name(&self) -> &'static str {
        "punycode-host"
    }

    fn check(&self, ctx: &UrlContext) -> Option<SignalHit> {
        if ctx.hostname.starts_with("xn--") {
            Some(SignalHit {
                weight: 10,
                reason: "It uses special characters that might be used to spoof real sites."
                    .to_string(),
            })
        } else {
            None
        }
    }
}

/// Alarm keywords inside a hostname that already failed the trust
/// short-circuit.
pub struct HostnameKeyword;

impl Signal for HostnameKeyword {
    fn name(&self) -> &'static str {
        "hostname-keyword"
    }

    fn check(&self, ctx: &UrlContext) -> Option<SignalHit> {
        let hostname_lower = ctx.hostname.to_lowercase();
        let found = HOSTNAME_KEYWORDS
            .iter()
            .find(|kw| hostname_lower.contains(*kw))?;

        Some(SignalHit {
            weight: 30,
            reason: format!(
                "The domain name contains alarming keywords (\"{found}\") but is not a verified service."
            ),
        })
    }
}
