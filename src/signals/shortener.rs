use crate::signals::{Signal, SignalHit, UrlContext};

/// Popular link-shortening services. Not malicious themselves, but they
/// hide the real destination.
const SHORTENERS: &[&str] = &[
    "bit.ly",
    "tinyurl.com",
    "is.gd",
    "t.co",
    "goo.gl",
    "ow.ly",
    "buff.ly",
    "rebrand.ly",
];

pub struct KnownShortener;

impl Signal for KnownShortener {
    fn name(&self) -> &'static str {
        "known-shortener"
    }

    fn check(&self, ctx: &UrlContext) -> Option<SignalHit> {
        if SHORTENERS.contains(&ctx.hostname) {
            Some(SignalHit {
                weight: 20,
                reason: "This is a shortened link. The final destination is hidden.".to_string(),
            })
        } else {
            None
        }
    }
}
