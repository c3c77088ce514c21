use crate::distance::levenshtein;
use crate::signals::{Signal, SignalHit, UrlContext};
use crate::trust::TOP_DOMAINS;

/// Brand impersonation: hostname within edit distance 1-2 of a trusted
/// domain. The length pre-filter bounds the DP cost across the table;
/// the first match in table order wins.
pub struct Typosquat;

impl Signal for Typosquat {
    fn name(&self) -> &'static str {
        "typosquat"
    }

    fn check(&self, ctx: &UrlContext) -> Option<SignalHit> {
        let hostname_len = ctx.hostname.chars().count() as i64;

        for trusted in TOP_DOMAINS {
            let trusted_len = trusted.chars().count() as i64;
            if (hostname_len - trusted_len).abs() > 2 {
                continue;
            }

            let dist = levenshtein(ctx.hostname, trusted);
            if (1..=2).contains(&dist) {
                return Some(SignalHit {
                    weight: 45,
                    reason: format!(
                        "This looks potentially like a fake version of {trusted} (Typosquatting)."
                    ),
                });
            }
        }

        None
    }
}
