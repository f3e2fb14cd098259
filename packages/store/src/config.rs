//! # App configuration — `scholarmatch.toml`
//!
//! Tunables for the simulated boundaries and the display helpers. The launcher
//! embeds the file at build time and falls back to [`ScholarMatchConfig::default`]
//! when it is missing or invalid.
//!
//! ## Structure
//!
//! ```toml
//! [latency]
//! auth_ms = 1500            # email login round-trip
//! wechat_auth_ms = 2000     # WeChat QR login round-trip
//! submit_ms = 1500          # intake form / application submission
//! resume_extract_ms = 2000  # mock résumé parsing
//!
//! [loader]
//! tick_ms = 60              # progress timer period
//! step_ms = 1000            # step-label rotation period
//! progress_step = 2         # percent added per tick
//! complete_delay_ms = 500   # pause at 100% before showing results
//!
//! [currency]                # RMB per unit of foreign currency
//! usd = 7.3
//! gbp = 9.2
//!
//! [auth]
//! returning_emails = ["demo@scholarmatch.cn"]
//!
//! [logging]
//! level = "info"
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`ScholarMatchConfig`] | Top-level config with TOML (de)serialisation and the canonical filename. |
//! | [`LatencyConfig`] | Simulated network delays for the mock backend. |
//! | [`LoaderConfig`] | Timer periods for the matching loader. |
//! | [`CurrencyTable`] | Multipliers used by [`crate::derived::convert_with`]. |
//! | [`AuthConfig`] | Which emails the mock auth boundary treats as returning users. |
//! | [`LoggingConfig`] | Default log level for the launcher. |
//!
//! Every section derives or implements `Default` so an empty file equals the
//! default configuration.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ScholarMatchConfig {
    #[serde(default)]
    pub latency: LatencyConfig,
    #[serde(default)]
    pub loader: LoaderConfig,
    #[serde(default)]
    pub currency: CurrencyTable,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LatencyConfig {
    #[serde(default = "default_auth_ms")]
    pub auth_ms: u64,
    #[serde(default = "default_wechat_auth_ms")]
    pub wechat_auth_ms: u64,
    #[serde(default = "default_submit_ms")]
    pub submit_ms: u64,
    #[serde(default = "default_resume_extract_ms")]
    pub resume_extract_ms: u64,
}

fn default_auth_ms() -> u64 {
    1500
}

fn default_wechat_auth_ms() -> u64 {
    2000
}

fn default_submit_ms() -> u64 {
    1500
}

fn default_resume_extract_ms() -> u64 {
    2000
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            auth_ms: default_auth_ms(),
            wechat_auth_ms: default_wechat_auth_ms(),
            submit_ms: default_submit_ms(),
            resume_extract_ms: default_resume_extract_ms(),
        }
    }
}

impl LatencyConfig {
    /// No simulated delay at all.
    pub fn zero() -> Self {
        Self {
            auth_ms: 0,
            wechat_auth_ms: 0,
            submit_ms: 0,
            resume_extract_ms: 0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoaderConfig {
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
    #[serde(default = "default_step_ms")]
    pub step_ms: u64,
    #[serde(default = "default_progress_step")]
    pub progress_step: u8,
    #[serde(default = "default_complete_delay_ms")]
    pub complete_delay_ms: u64,
}

fn default_tick_ms() -> u64 {
    60
}

fn default_step_ms() -> u64 {
    1000
}

fn default_progress_step() -> u8 {
    2
}

fn default_complete_delay_ms() -> u64 {
    500
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            tick_ms: default_tick_ms(),
            step_ms: default_step_ms(),
            progress_step: default_progress_step(),
            complete_delay_ms: default_complete_delay_ms(),
        }
    }
}

/// RMB per unit of each supported currency.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CurrencyTable {
    #[serde(default = "default_usd")]
    pub usd: f64,
    #[serde(default = "default_gbp")]
    pub gbp: f64,
    #[serde(default = "default_cad")]
    pub cad: f64,
    #[serde(default = "default_aud")]
    pub aud: f64,
    #[serde(default = "default_eur")]
    pub eur: f64,
    #[serde(default = "default_chf")]
    pub chf: f64,
}

fn default_usd() -> f64 {
    7.3
}

fn default_gbp() -> f64 {
    9.2
}

fn default_cad() -> f64 {
    5.4
}

fn default_aud() -> f64 {
    4.8
}

fn default_eur() -> f64 {
    7.8
}

fn default_chf() -> f64 {
    8.1
}

impl Default for CurrencyTable {
    fn default() -> Self {
        Self {
            usd: default_usd(),
            gbp: default_gbp(),
            cad: default_cad(),
            aud: default_aud(),
            eur: default_eur(),
            chf: default_chf(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Emails that skip the intake flow on login.
    #[serde(default = "default_returning_emails")]
    pub returning_emails: Vec<String>,
}

fn default_returning_emails() -> Vec<String> {
    vec!["demo@scholarmatch.cn".to_string()]
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            returning_emails: default_returning_emails(),
        }
    }
}

impl AuthConfig {
    pub fn is_returning(&self, email: &str) -> bool {
        let email = email.trim();
        self.returning_emails
            .iter()
            .any(|e| e.eq_ignore_ascii_case(email))
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// One of `trace`, `debug`, `info`, `warn`, `error`.
    #[serde(default = "default_level")]
    pub level: String,
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

impl ScholarMatchConfig {
    /// Default config with every simulated delay removed.
    pub fn instant() -> Self {
        Self::default().with_latency(LatencyConfig::zero())
    }

    /// Builder method to replace the latency section.
    pub fn with_latency(mut self, latency: LatencyConfig) -> Self {
        self.latency = latency;
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "scholarmatch.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config = ScholarMatchConfig::from_toml("").unwrap();
        assert_eq!(config, ScholarMatchConfig::default());
        assert_eq!(config.latency.auth_ms, 1500);
        assert_eq!(config.loader.tick_ms, 60);
        assert_eq!(config.currency.gbp, 9.2);
    }

    #[test]
    fn test_partial_sections_keep_defaults() {
        let config = ScholarMatchConfig::from_toml(
            r#"
            [latency]
            auth_ms = 10

            [currency]
            gbp = 9.5
            "#,
        )
        .unwrap();
        assert_eq!(config.latency.auth_ms, 10);
        assert_eq!(config.latency.wechat_auth_ms, 2000);
        assert_eq!(config.currency.gbp, 9.5);
        assert_eq!(config.currency.usd, 7.3);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_configured_rate_changes_conversion() {
        let config = ScholarMatchConfig::from_toml("[currency]\ngbp = 10.0\n").unwrap();
        assert_eq!(
            crate::derived::convert_with("£10,000", &config.currency),
            "约合人民币10.0万元"
        );
        assert_eq!(
            crate::derived::convert_with("£10,000", &ScholarMatchConfig::default().currency),
            "约合人民币9.2万元"
        );
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = ScholarMatchConfig::instant();
        let text = config.to_toml().unwrap();
        assert_eq!(ScholarMatchConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn test_returning_emails_case_insensitive() {
        let auth = AuthConfig::default();
        assert!(auth.is_returning(" Demo@ScholarMatch.cn "));
        assert!(!auth.is_returning("new@example.com"));
    }
}
