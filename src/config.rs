use serde::{Deserialize, Serialize};

/// Persisted user settings: the protection flag, the custom trusted
/// domains, and where the last-scan record lives. The scanner itself
/// never reads this; callers load it and pass the trusted domains in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default)]
    pub trusted_domains: Vec<String>,
    #[serde(default = "default_history_path")]
    pub history_path: String,
}

fn default_enabled() -> bool {
    true
}

fn default_history_path() -> String {
    "/var/lib/link-sentinel/last-scan.json".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            enabled: true,
            trusted_domains: Vec::new(),
            history_path: default_history_path(),
        }
    }
}

impl Config {
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    pub fn to_file(&self, path: &str) -> anyhow::Result<()> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load the config, falling back to defaults when the file is absent.
    pub fn load_or_default(path: &str) -> anyhow::Result<Self> {
        if std::path::Path::new(path).exists() {
            Self::from_file(path)
        } else {
            log::warn!("Configuration file '{path}' not found, using default configuration");
            Ok(Self::default())
        }
    }

    /// Add a hostname to the trusted list. Returns false if it was
    /// already present.
    pub fn trust(&mut self, hostname: &str) -> bool {
        if self.trusted_domains.iter().any(|d| d == hostname) {
            return false;
        }
        self.trusted_domains.push(hostname.to_string());
        true
    }

    /// Remove a hostname from the trusted list. Returns false if it was
    /// not present.
    pub fn untrust(&mut self, hostname: &str) -> bool {
        let before = self.trusted_domains.len();
        self.trusted_domains.retain(|d| d != hostname);
        self.trusted_domains.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(config.enabled);
        assert!(config.trusted_domains.is_empty());
        assert!(!config.history_path.is_empty());
    }

    #[test]
    fn test_yaml_round_trip() {
        let mut config = Config::default();
        config.enabled = false;
        config.trusted_domains.push("intranet.corp".to_string());

        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed: Config = serde_yaml::from_str(&yaml).unwrap();

        assert!(!parsed.enabled);
        assert_eq!(parsed.trusted_domains, vec!["intranet.corp".to_string()]);
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let parsed: Config = serde_yaml::from_str("trusted_domains:\n  - a.example\n").unwrap();
        assert!(parsed.enabled);
        assert_eq!(parsed.trusted_domains, vec!["a.example".to_string()]);
        assert_eq!(parsed.history_path, default_history_path());
    }

    #[test]
    fn test_trust_and_untrust() {
        let mut config = Config::default();

        assert!(config.trust("example.com"));
        assert!(!config.trust("example.com"));
        assert_eq!(config.trusted_domains.len(), 1);

        assert!(config.untrust("example.com"));
        assert!(!config.untrust("example.com"));
        assert!(config.trusted_domains.is_empty());
    }
}
