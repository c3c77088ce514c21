use crate::report::{RiskLevel, RiskReport};
use crate::signals::{SignalBattery, UrlContext};
use crate::trust;
use url::Url;

const UNPARSEABLE_TEXT: &str =
    "We couldn't fully read this link structure. Proceed with caution.";
const CUSTOM_TRUSTED_TEXT: &str = "Marked as safe by you (Custom Trusted).";
const TOP_DOMAIN_TEXT: &str = "Verified popular website via internal database.";
const SAFE_TEXT: &str = "This link looks verified and safe.";
const FALLBACK_TEXT: &str = "This link shows irregular patterns.";

/// The risk evaluation engine.
///
/// Pure and synchronous: a report is a deterministic function of the URL
/// string and the whitelist, with no I/O and no shared mutable state, so
/// one scanner can be shared freely across threads.
pub struct RiskScanner {
    battery: SignalBattery,
}

impl Default for RiskScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl RiskScanner {
    pub fn new() -> Self {
        Self {
            battery: SignalBattery::new(),
        }
    }

    /// Scan a URL against the optional caller-supplied whitelist.
    ///
    /// Always returns a report; a string that does not parse as an
    /// absolute URL degrades to a fixed suspicious verdict instead of an
    /// error.
    pub fn scan(&self, url_string: &str, whitelist: &[String]) -> RiskReport {
        let url = match Url::parse(url_string) {
            Ok(url) => url,
            Err(e) => {
                log::debug!("unparseable URL ({e}): {url_string}");
                return RiskReport {
                    level: RiskLevel::Suspicious,
                    score: 50,
                    text: UNPARSEABLE_TEXT.to_string(),
                };
            }
        };

        let ctx = UrlContext::new(url_string, &url);

        // Trust short-circuits, first match wins: the user's own list
        // outranks the static table.
        if trust::in_whitelist(ctx.hostname, whitelist) {
            return RiskReport {
                level: RiskLevel::Safe,
                score: 0,
                text: CUSTOM_TRUSTED_TEXT.to_string(),
            };
        }
        if trust::is_top_domain(ctx.hostname) {
            return RiskReport {
                level: RiskLevel::Safe,
                score: 0,
                text: TOP_DOMAIN_TEXT.to_string(),
            };
        }

        let (score, reasons) = self.battery.run(&ctx);
        let level = RiskLevel::from_score(score);

        let text = if level == RiskLevel::Safe {
            SAFE_TEXT.to_string()
        } else if reasons.is_empty() {
            // Unreachable with the current weights, but never emit an
            // empty explanation.
            FALLBACK_TEXT.to_string()
        } else {
            format!("Caution advised: {}", reasons.join(" "))
        };

        log::info!("scanned {url_string}: {} (score {score})", level.label());

        RiskReport { level, score, text }
    }
}
