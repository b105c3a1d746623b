// src/config.rs
// =============================================================================
// Loads and validates the TOML configuration file.
//
// Layout:
//
//   [email]
//   sender_email = "bot@example.com"
//   sender_password = "app-password"
//   recipient_email = "me@example.com"
//   smtp_server = "smtp.example.com"
//   smtp_port = 587            # optional
//
//   [scrape]
//   frequency = 300            # seconds between cycles
//   timeout = 30               # optional, per request
//
//   [websites]
//   docs = "https://example.com/docs"
//   status = "https://status.example.com"
//
// [websites] keys are just labels. Sites are monitored in file order.
// =============================================================================

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::errors::ConfigError;
use crate::types::Site;

pub const DEFAULT_SMTP_PORT: u16 = 587;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Deserialize)]
struct RawConfig {
    email: EmailConfig,
    scrape: ScrapeConfig,
    websites: toml::Table,
}

#[derive(Deserialize, Clone)]
pub struct EmailConfig {
    pub sender_email: String,
    pub sender_password: String,
    pub recipient_email: String,
    pub smtp_server: String,
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,
}

// Keeps the password out of logs and panic messages.
impl fmt::Debug for EmailConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmailConfig")
            .field("sender_email", &self.sender_email)
            .field("sender_password", &"<redacted>")
            .field("recipient_email", &self.recipient_email)
            .field("smtp_server", &self.smtp_server)
            .field("smtp_port", &self.smtp_port)
            .finish()
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct ScrapeConfig {
    /// Seconds to sleep after each cycle.
    pub frequency: u64,
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

/// Validated configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub email: EmailConfig,
    pub poll_interval: Duration,
    pub request_timeout: Duration,
    pub sites: Vec<Site>,
}

fn default_smtp_port() -> u16 {
    DEFAULT_SMTP_PORT
}

fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

/// `sentinel.toml` in the working directory.
pub fn default_config_path() -> PathBuf {
    PathBuf::from("sentinel.toml")
}

pub fn load(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    let contents = fs::read_to_string(path.as_ref())?;
    parse(&contents)
}

pub fn parse(contents: &str) -> Result<Config, ConfigError> {
    let raw: RawConfig = toml::from_str(contents)?;
    Config::try_from(raw)
}

impl TryFrom<RawConfig> for Config {
    type Error = ConfigError;

    fn try_from(raw: RawConfig) -> Result<Self, Self::Error> {
        validate_email(&raw.email)?;

        if raw.scrape.frequency == 0 {
            return Err(ConfigError::Invalid(
                "scrape.frequency must be greater than 0".to_string(),
            ));
        }
        if raw.scrape.timeout == 0 {
            return Err(ConfigError::Invalid(
                "scrape.timeout must be greater than 0".to_string(),
            ));
        }

        let sites = parse_sites(&raw.websites)?;

        Ok(Config {
            email: raw.email,
            poll_interval: Duration::from_secs(raw.scrape.frequency),
            request_timeout: Duration::from_secs(raw.scrape.timeout),
            sites,
        })
    }
}

fn validate_email(email: &EmailConfig) -> Result<(), ConfigError> {
    let required = [
        ("email.sender_email", &email.sender_email),
        ("email.recipient_email", &email.recipient_email),
        ("email.smtp_server", &email.smtp_server),
    ];
    for (name, value) in required {
        if value.trim().is_empty() {
            return Err(ConfigError::Invalid(format!("{} must not be empty", name)));
        }
    }
    Ok(())
}

fn parse_sites(websites: &toml::Table) -> Result<Vec<Site>, ConfigError> {
    if websites.is_empty() {
        return Err(ConfigError::Invalid(
            "[websites] must list at least one site".to_string(),
        ));
    }

    let mut sites: Vec<Site> = Vec::with_capacity(websites.len());
    for (label, value) in websites {
        let url = value.as_str().ok_or_else(|| {
            ConfigError::Invalid(format!("websites.{} must be a URL string", label))
        })?;
        let site = Site::parse(url)?;

        // The same site listed twice would be crawled twice per cycle.
        if !sites.contains(&site) {
            sites.push(site);
        }
    }
    Ok(sites)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const VALID: &str = r#"
[email]
sender_email = "bot@example.com"
sender_password = "hunter2"
recipient_email = "me@example.com"
smtp_server = "smtp.example.com"

[scrape]
frequency = 60

[websites]
zeta = "https://zeta.example.com/"
alpha = "https://alpha.example.com/docs"
"#;

    #[test]
    fn test_parse_valid_config() {
        let cfg = parse(VALID).unwrap();

        assert_eq!(cfg.poll_interval, Duration::from_secs(60));
        assert_eq!(cfg.request_timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        assert_eq!(cfg.email.smtp_port, DEFAULT_SMTP_PORT);
        assert_eq!(cfg.email.smtp_server, "smtp.example.com");
    }

    #[test]
    fn test_sites_keep_file_order() {
        let cfg = parse(VALID).unwrap();
        let sites: Vec<&str> = cfg.sites.iter().map(Site::as_str).collect();
        assert_eq!(
            sites,
            vec!["https://zeta.example.com", "https://alpha.example.com/docs"]
        );
    }

    #[test]
    fn test_debug_redacts_password() {
        let cfg = parse(VALID).unwrap();
        let printed = format!("{:?}", cfg);
        assert!(!printed.contains("hunter2"));
        assert!(printed.contains("<redacted>"));
    }

    #[test]
    fn test_zero_frequency_rejected() {
        let input = VALID.replace("frequency = 60", "frequency = 0");
        match parse(&input) {
            Err(ConfigError::Invalid(msg)) => assert!(msg.contains("frequency")),
            other => panic!("Expected Invalid error, got: {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_no_websites_rejected() {
        let input = VALID
            .replace("zeta = \"https://zeta.example.com/\"", "")
            .replace("alpha = \"https://alpha.example.com/docs\"", "");
        assert!(matches!(parse(&input), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_bad_site_url_rejected() {
        let input = VALID.replace("https://zeta.example.com/", "zeta.example.com");
        assert!(matches!(parse(&input), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_missing_section_is_parse_error() {
        let input = VALID.replace("[scrape]\nfrequency = 60\n", "");
        assert!(matches!(parse(&input), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_duplicate_sites_collapsed() {
        let input = VALID.replace(
            "alpha = \"https://alpha.example.com/docs\"",
            "again = \"https://zeta.example.com\"",
        );
        let cfg = parse(&input).unwrap();
        assert_eq!(cfg.sites.len(), 1);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", VALID).unwrap();

        let cfg = load(file.path()).unwrap();
        assert_eq!(cfg.sites.len(), 2);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        assert!(matches!(
            load("/definitely/not/here/sentinel.toml"),
            Err(ConfigError::Io(_))
        ));
    }
}
