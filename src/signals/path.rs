use crate::signals::{Signal, SignalHit, UrlContext};

/// Path fragments typical of credential-harvesting pages.
const SENSITIVE_KEYWORDS: &[&str] = &[
    "login", "signin", "verify", "wallet", "secure", "account", "update",
];

/// Direct-download extensions for executables and scripts.
const DANGEROUS_EXTENSIONS: &[&str] = &[
    ".exe", ".bat", ".cmd", ".sh", ".msi", ".apk", ".scr", ".vbs", ".iso",
];

pub struct SensitiveKeyword;

impl Signal for SensitiveKeyword {
    fn name(&self) -> &'static str {
        "sensitive-path-keyword"
    }

    fn check(&self, ctx: &UrlContext) -> Option<SignalHit> {
        let path_lower = ctx.url.path().to_lowercase();
        if SENSITIVE_KEYWORDS.iter().any(|kw| path_lower.contains(kw)) {
            Some(SignalHit {
                weight: 20,
                reason: "The link asks for sensitivity (like 'login') but the source is unverified."
                    .to_string(),
            })
        } else {
            None
        }
    }
}

pub struct DangerousExtension;

impl Signal for DangerousExtension {
    fn name(&self) -> &'static str {
        "dangerous-extension"
    }

    fn check(&self, ctx: &UrlContext) -> Option<SignalHit> {
        let path_lower = ctx.url.path().to_lowercase();
        if DANGEROUS_EXTENSIONS
            .iter()
            .any(|ext| path_lower.ends_with(ext))
        {
            Some(SignalHit {
                weight: 50,
                reason: "This link directly downloads an executable or script file.".to_string(),
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
    fn test_sensitive_keyword_in_path() {
        let raw = "https://example.com/user/Login.php";
        let url = parse(raw);
        let ctx = UrlContext::new(raw, &url);
        assert_eq!(SensitiveKeyword.check(&ctx).unwrap().weight, 20);
    }

    #[test]
    fn test_keyword_in_host_does_not_count_as_path() {
        let raw = "https://login.example.com/welcome";
        let url = parse(raw);
        let ctx = UrlContext::new(raw, &url);
        assert!(SensitiveKeyword.check(&ctx).is_none());
    }

    #[test]
    fn test_dangerous_extension() {
        let raw = "https://example.com/files/setup.EXE";
        let url = parse(raw);
        let ctx = UrlContext::new(raw, &url);
        assert_eq!(DangerousExtension.check(&ctx).unwrap().weight, 50);
    }

    #[test]
    fn test_extension_must_end_path() {
        let raw = "https://example.com/setup.exe/readme.html";
        let url = parse(raw);
        let ctx = UrlContext::new(raw, &url);
        assert!(DangerousExtension.check(&ctx).is_none());
    }
}
