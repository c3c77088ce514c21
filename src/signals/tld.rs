use crate::signals::{Signal, SignalHit, UrlContext};

/// TLDs with disproportionate spam and phishing registration rates.
const SUSPICIOUS_TLDS: &[&str] = &["xyz", "top", "gq", "work", "click", "zip", "mov"];

pub struct SuspiciousTld;

impl Signal for SuspiciousTld {
    fn name(&self) -> &'static str {
        "suspicious-tld"
    }

    fn check(&self, ctx: &UrlContext) -> Option<SignalHit> {
        let tld = ctx.hostname.rsplit('.').next()?;
        if SUSPICIOUS_TLDS.contains(&tld) {
            Some(SignalHit {
                weight: 25,
                reason: format!("It uses a domain ending (.{tld}) often associated with spam."),
            })
        } else {
            None
        }
    }
}
