pub mod host;
pub mod path;
pub mod shortener;
pub mod tld;
pub mod transport;
pub mod typosquat;

use url::Url;

/// Everything a signal is allowed to look at: the parsed URL, the literal
/// input string, and the hostname as the parser produced it.
pub struct UrlContext<'a> {
    pub raw: &'a str,
    pub url: &'a Url,
    pub hostname: &'a str,
}

impl<'a> UrlContext<'a> {
    pub fn new(raw: &'a str, url: &'a Url) -> Self {
        Self {
            raw,
            url,
            hostname: url.host_str().unwrap_or(""),
        }
    }
}

/// A triggered signal: its fixed weight plus the reason shown to the user.
#[derive(Debug, Clone)]
pub struct SignalHit {
    pub weight: i32,
    pub reason: String,
}

/// One independent heuristic check. Signals never see each other's output
/// and contribute a fixed weight when they trigger.
pub trait Signal: Send + Sync {
    fn name(&self) -> &'static str;
    fn check(&self, ctx: &UrlContext) -> Option<SignalHit>;
}

/// The fixed battery of heuristic signals, in evaluation order.
///
/// Order matters only for the sequence of reasons in the final
/// explanation; the score is the plain sum of triggered weights.
pub struct SignalBattery {
    signals: Vec<Box<dyn Signal>>,
}

impl Default for SignalBattery {
    fn default() -> Self {
        Self::new()
    }
}

impl SignalBattery {
    pub fn new() -> Self {
        Self {
            signals: vec![
                Box::new(transport::InsecureScheme),
                Box::new(host::RawIpHost::new()),
                Box::new(transport::ExcessiveLength),
                Box::new(tld::SuspiciousTld),
                Box::new(path::SensitiveKeyword),
                Box::new(host::SubdomainDepth),
                Box::new(host::PunycodeHost),
                Box::new(host::HostnameKeyword),
                Box::new(shortener::KnownShortener),
                Box::new(path::DangerousExtension),
                Box::new(typosquat::Typosquat),
            ],
        }
    }

    /// Run every signal and accumulate (score, reasons in battery order).
    pub fn run(&self, ctx: &UrlContext) -> (i32, Vec<String>) {
        let mut score = 0;
        let mut reasons = Vec::new();

        for signal in &self.signals {
            if let Some(hit) = signal.check(ctx) {
                log::debug!("signal '{}' triggered (+{})", signal.name(), hit.weight);
                score += hit.weight;
                reasons.push(hit.reason);
            }
        }

        (score, reasons)
    }
}

#[cfg(test)]
pub(crate) mod test_util {
    use url::Url;

    pub fn parse(raw: &str) -> Url {
        Url::parse(raw).expect("test URL must parse")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_util::parse;

    #[test]
    fn test_clean_https_url_triggers_nothing() {
        let url = parse("https://example.com/about");
        let ctx = UrlContext::new("https://example.com/about", &url);

        let (score, reasons) = SignalBattery::new().run(&ctx);
        assert_eq!(score, 0);
        assert!(reasons.is_empty());
    }

    #[test]
    fn test_signals_accumulate_in_order() {
        // http scheme (+30), raw IP host (+60), sensitive path keyword (+20)
        let raw = "http://192.168.1.1/login";
        let url = parse(raw);
        let ctx = UrlContext::new(raw, &url);

        let (score, reasons) = SignalBattery::new().run(&ctx);
        assert_eq!(score, 110);
        assert_eq!(reasons.len(), 3);
        assert!(reasons[0].contains("unencrypted"));
        assert!(reasons[1].contains("raw server address"));
        assert!(reasons[2].contains("sensitivity"));
    }
}
