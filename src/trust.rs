//! Trust short-circuit: user whitelist first, then the static table of
//! well-known consumer domains. Both are exact hostname matches on the
//! parser's output.

/// Globally trusted hostnames, bare and `www.` forms listed explicitly.
/// Fixed at build time; never mutated at runtime.
pub const TOP_DOMAINS: &[&str] = &[
    "google.com",
    "www.google.com",
    "youtube.com",
    "www.youtube.com",
    "facebook.com",
    "www.facebook.com",
    "twitter.com",
    "x.com",
    "linkedin.com",
    "www.linkedin.com",
    "amazon.com",
    "www.amazon.com",
    "wikipedia.org",
    "en.wikipedia.org",
    "instagram.com",
    "www.instagram.com",
    "netflix.com",
    "www.netflix.com",
    "microsoft.com",
    "www.microsoft.com",
    "apple.com",
    "www.apple.com",
    "github.com",
    "www.github.com",
    "stackoverflow.com",
];

/// Exact match against the static trust table.
pub fn is_top_domain(hostname: &str) -> bool {
    TOP_DOMAINS.contains(&hostname)
}

/// Exact match against the caller-supplied whitelist.
pub fn in_whitelist(hostname: &str, whitelist: &[String]) -> bool {
    whitelist.iter().any(|d| d == hostname)
}
