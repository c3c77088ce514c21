use crate::signals::{Signal, SignalHit, UrlContext};

/// Plain HTTP carries credentials and content in the clear.
pub struct InsecureScheme;

impl Signal for InsecureScheme {
    fn name(&self) -> &'static str {
        "insecure-scheme"
    }

    fn check(&self, ctx: &UrlContext) -> Option<SignalHit> {
        if ctx.url.scheme() == "http" {
            Some(SignalHit {
                weight: 30,
                reason: "It uses an unencrypted connection (HTTP).".to_string(),
            })
        } else {
            None
        }
    }
}

/// Extremely long URLs are a common obfuscation tactic. Measured on the
/// literal input string, not the normalized parse.
pub struct ExcessiveLength;

impl Signal for ExcessiveLength {
    fn name(&self) -> &'static str {
        "excessive-length"
    }

    fn check(&self, ctx: &UrlContext) -> Option<SignalHit> {
        if ctx.raw.chars().count() > 700 {
            Some(SignalHit {
                weight: 20,
                reason: "The link is unusually long and complex.".to_string(),
            })
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signals::test_util::parse;

    #[test]
    fn test_http_scheme_triggers() {
        let url = parse("http://example.com/");
        let ctx = UrlContext::new("http://example.com/", &url);
        let hit = InsecureScheme.check(&ctx).unwrap();
        assert_eq!(hit.weight, 30);
    }

    #[test]
    fn test_https_scheme_clean() {
        let url = parse("https://example.com/");
        let ctx = UrlContext::new("https://example.com/", &url);
        assert!(InsecureScheme.check(&ctx).is_none());
    }

    #[test]
    fn test_length_threshold() {
        let long = format!("https://example.com/?q={}", "a".repeat(700));
        let url = parse(&long);
        let ctx = UrlContext::new(&long, &url);
        assert_eq!(ExcessiveLength.check(&ctx).unwrap().weight, 20);

        let short = "https://example.com/";
        let url = parse(short);
        let ctx = UrlContext::new(short, &url);
        assert!(ExcessiveLength.check(&ctx).is_none());
    }
}
