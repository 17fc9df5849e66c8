//! Configuration loading and resolution
//!
//! A single TOML file drives every tunable of a run: probe endpoints and
//! timeouts, the TLD and social platform lists, the weight table and the
//! concurrency limits. Every field has a built-in default, so an absent or
//! partial file is valid.
//!
//! # Config File Priority
//!
//! 1. Command-line argument (highest priority)
//! 2. Environment variable `NAMECHECK_CONFIG`
//! 3. `<config dir>/namecheck/config.toml` if it exists
//! 4. Built-in defaults (fallback)

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

/// Environment variable naming an explicit config file
pub const CONFIG_ENV_VAR: &str = "NAMECHECK_CONFIG";

/// Environment variable carrying the Discogs API token
pub const DISCOGS_TOKEN_ENV_VAR: &str = "NAMECHECK_DISCOGS_TOKEN";

/// Default TLDs checked by the domain set probe
pub const DEFAULT_TLDS: &[&str] = &[
    "com", "art", "music", "band", "audio", "de", "at", "fm", "dj", "rocks",
];

/// Complete configuration loaded from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    /// Directory receiving the JSON/CSV/text reports
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub probes: ProbeConfig,

    #[serde(default)]
    pub weights: WeightsConfig,

    #[serde(default)]
    pub concurrency: ConcurrencyConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error); `RUST_LOG` overrides it
    #[serde(default = "default_log_level")]
    pub level: String,
}

/// Probe behavior: timeouts, identity, endpoints and the set-probe lists
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProbeConfig {
    /// Upper bound on a single probe call, in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User-Agent sent with every HTTP request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Discogs API token (optional; `NAMECHECK_DISCOGS_TOKEN` wins)
    #[serde(default)]
    pub discogs_token: Option<String>,

    /// TLDs probed by the domain set probe, in report order
    #[serde(default = "default_tlds")]
    pub tlds: Vec<String>,

    /// Social platforms probed by the social set probe, in report order
    #[serde(default = "default_social_platforms")]
    pub social_platforms: Vec<PlatformConfig>,

    #[serde(default)]
    pub endpoints: EndpointsConfig,
}

/// One social platform: its report name and profile/search URL template
///
/// The template may contain `{name}` (inserted verbatim) and `{query}`
/// (inserted percent-encoded).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformConfig {
    pub name: String,
    pub url_template: String,
}

/// Base URLs of the single-value HTTP sources
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointsConfig {
    #[serde(default = "default_wikipedia_url")]
    pub wikipedia: String,
    #[serde(default = "default_duckduckgo_url")]
    pub duckduckgo: String,
    #[serde(default = "default_discogs_url")]
    pub discogs: String,
    #[serde(default = "default_bandcamp_url")]
    pub bandcamp: String,
    #[serde(default = "default_musicbrainz_url")]
    pub musicbrainz: String,
}

/// Score weights for single sources plus the caps of the two sub-scores
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_weight_discogs")]
    pub discogs: f64,
    #[serde(default = "default_weight_bandcamp")]
    pub bandcamp: f64,
    #[serde(default = "default_weight_musicbrainz")]
    pub musicbrainz: f64,
    #[serde(default = "default_weight_wikipedia")]
    pub wikipedia: f64,
    #[serde(default = "default_weight_duckduckgo")]
    pub duckduckgo: f64,
    #[serde(default = "default_weight_domain_com")]
    pub domain_com_taken: f64,
    /// Maximum contribution of the multi-TLD domain sub-score
    #[serde(default = "default_domains_cap")]
    pub domains_cap: f64,
    /// Maximum contribution of the social sub-score
    #[serde(default = "default_social_cap")]
    pub social_cap: f64,
}

/// In-flight limits for the batch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConcurrencyConfig {
    /// Names probed at the same time
    #[serde(default = "default_max_names_in_flight")]
    pub max_names_in_flight: usize,

    /// Probe calls (set members included) in flight for one name
    #[serde(default = "default_max_probes_per_name")]
    pub max_probes_per_name: usize,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("artists")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_timeout_secs() -> u64 {
    8
}

fn default_user_agent() -> String {
    "ArtistNameChecker/1.0".to_string()
}

fn default_tlds() -> Vec<String> {
    DEFAULT_TLDS.iter().map(|t| t.to_string()).collect()
}

fn default_social_platforms() -> Vec<PlatformConfig> {
    [
        ("instagram", "https://www.instagram.com/{name}/"),
        ("tiktok", "https://www.tiktok.com/@{name}"),
        ("youtube", "https://www.youtube.com/results?search_query={query}"),
        ("youtubemusic", "https://music.youtube.com/search?q={query}"),
        ("applemusic", "https://music.apple.com/us/search?term={query}"),
    ]
    .into_iter()
    .map(|(name, url_template)| PlatformConfig {
        name: name.to_string(),
        url_template: url_template.to_string(),
    })
    .collect()
}

fn default_wikipedia_url() -> String {
    "https://en.wikipedia.org".to_string()
}

fn default_duckduckgo_url() -> String {
    "https://duckduckgo.com".to_string()
}

fn default_discogs_url() -> String {
    "https://api.discogs.com".to_string()
}

fn default_bandcamp_url() -> String {
    "https://bandcamp.com".to_string()
}

fn default_musicbrainz_url() -> String {
    "https://musicbrainz.org".to_string()
}

fn default_weight_discogs() -> f64 {
    0.25
}

fn default_weight_bandcamp() -> f64 {
    0.20
}

fn default_weight_musicbrainz() -> f64 {
    0.20
}

fn default_weight_wikipedia() -> f64 {
    0.15
}

fn default_weight_duckduckgo() -> f64 {
    0.10
}

fn default_weight_domain_com() -> f64 {
    0.05
}

fn default_domains_cap() -> f64 {
    0.30
}

fn default_social_cap() -> f64 {
    0.10
}

fn default_max_names_in_flight() -> usize {
    8
}

fn default_max_probes_per_name() -> usize {
    32
}

impl Default for TomlConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            logging: LoggingConfig::default(),
            probes: ProbeConfig::default(),
            weights: WeightsConfig::default(),
            concurrency: ConcurrencyConfig::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
            discogs_token: None,
            tlds: default_tlds(),
            social_platforms: default_social_platforms(),
            endpoints: EndpointsConfig::default(),
        }
    }
}

impl Default for EndpointsConfig {
    fn default() -> Self {
        Self {
            wikipedia: default_wikipedia_url(),
            duckduckgo: default_duckduckgo_url(),
            discogs: default_discogs_url(),
            bandcamp: default_bandcamp_url(),
            musicbrainz: default_musicbrainz_url(),
        }
    }
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            discogs: default_weight_discogs(),
            bandcamp: default_weight_bandcamp(),
            musicbrainz: default_weight_musicbrainz(),
            wikipedia: default_weight_wikipedia(),
            duckduckgo: default_weight_duckduckgo(),
            domain_com_taken: default_weight_domain_com(),
            domains_cap: default_domains_cap(),
            social_cap: default_social_cap(),
        }
    }
}

impl Default for ConcurrencyConfig {
    fn default() -> Self {
        Self {
            max_names_in_flight: default_max_names_in_flight(),
            max_probes_per_name: default_max_probes_per_name(),
        }
    }
}

impl TomlConfig {
    /// Parse configuration from TOML text and validate it
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: TomlConfig = toml::from_str(content)
            .map_err(|e| Error::Config(format!("Parse TOML failed: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a configuration file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::NotFound(format!("config file {}", path.display())));
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Reject values that would make a run meaningless
    pub fn validate(&self) -> Result<()> {
        if self.probes.timeout_secs == 0 {
            return Err(Error::Config("probes.timeout_secs must be > 0".to_string()));
        }
        if self.concurrency.max_names_in_flight == 0 {
            return Err(Error::Config(
                "concurrency.max_names_in_flight must be > 0".to_string(),
            ));
        }
        if self.concurrency.max_probes_per_name == 0 {
            return Err(Error::Config(
                "concurrency.max_probes_per_name must be > 0".to_string(),
            ));
        }

        let w = &self.weights;
        let weights = [
            ("discogs", w.discogs),
            ("bandcamp", w.bandcamp),
            ("musicbrainz", w.musicbrainz),
            ("wikipedia", w.wikipedia),
            ("duckduckgo", w.duckduckgo),
            ("domain_com_taken", w.domain_com_taken),
            ("domains_cap", w.domains_cap),
            ("social_cap", w.social_cap),
        ];
        for (key, value) in weights {
            if !(0.0..=1.0).contains(&value) {
                return Err(Error::Config(format!(
                    "weights.{} must be within [0, 1], got {}",
                    key, value
                )));
            }
        }

        for platform in &self.probes.social_platforms {
            if platform.name.trim().is_empty() {
                return Err(Error::Config("social platform name is empty".to_string()));
            }
            if platform.url_template.trim().is_empty() {
                return Err(Error::Config(format!(
                    "social platform '{}' has an empty url_template",
                    platform.name
                )));
            }
        }

        if self.probes.tlds.iter().any(|t| t.trim().is_empty()) {
            return Err(Error::Config("probes.tlds contains an empty TLD".to_string()));
        }

        Ok(())
    }

    /// Discogs token: environment first, then TOML
    pub fn resolve_discogs_token(&self) -> Option<String> {
        let env_token = std::env::var(DISCOGS_TOKEN_ENV_VAR)
            .ok()
            .filter(|t| is_valid_key(t));
        let toml_token = self
            .probes
            .discogs_token
            .clone()
            .filter(|t| is_valid_key(t));

        if env_token.is_some() && toml_token.is_some() {
            warn!(
                "Discogs token found in environment and TOML. Using environment (highest priority)."
            );
        }

        env_token.or(toml_token)
    }
}

/// Validate API key (non-empty, non-whitespace)
pub fn is_valid_key(key: &str) -> bool {
    !key.trim().is_empty()
}

/// Where the resolved configuration came from
///
/// Returned alongside the config so the caller can report it once logging is
/// set up; resolution runs before the subscriber exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// File named on the command line or in `NAMECHECK_CONFIG`
    Explicit(PathBuf),
    /// File found at the platform default location
    DefaultFile(PathBuf),
    /// No file at the default location (`None`: no config directory)
    BuiltIn(Option<PathBuf>),
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigSource::Explicit(path) => write!(f, "{}", path.display()),
            ConfigSource::DefaultFile(path) => write!(f, "{} (default location)", path.display()),
            ConfigSource::BuiltIn(Some(path)) => {
                write!(f, "built-in defaults (no file at {})", path.display())
            }
            ConfigSource::BuiltIn(None) => {
                write!(f, "built-in defaults (no config directory on this platform)")
            }
        }
    }
}

/// Locates and loads the configuration following the documented priority
#[derive(Debug, Clone, Default)]
pub struct ConfigResolver {
    cli_path: Option<PathBuf>,
}

impl ConfigResolver {
    pub fn new(cli_path: Option<PathBuf>) -> Self {
        Self { cli_path }
    }

    /// Explicitly requested config path (CLI, then environment)
    pub fn explicit_path(&self) -> Option<PathBuf> {
        if let Some(path) = &self.cli_path {
            return Some(path.clone());
        }
        std::env::var(CONFIG_ENV_VAR)
            .ok()
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from)
    }

    /// Platform default location (`~/.config/namecheck/config.toml` on Linux)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("namecheck").join("config.toml"))
    }

    /// Resolve the configuration and report its source
    ///
    /// An explicitly requested file must exist and parse. A missing file at
    /// the default location falls back to built-in defaults.
    pub fn resolve(&self) -> Result<(TomlConfig, ConfigSource)> {
        if let Some(path) = self.explicit_path() {
            let config = TomlConfig::load(&path)?;
            return Ok((config, ConfigSource::Explicit(path)));
        }

        Self::resolve_default(Self::default_path())
    }

    /// Load `default_path` if it exists, otherwise fall back to defaults
    pub fn resolve_default(default_path: Option<PathBuf>) -> Result<(TomlConfig, ConfigSource)> {
        match default_path {
            Some(path) if path.exists() => {
                let config = TomlConfig::load(&path)?;
                Ok((config, ConfigSource::DefaultFile(path)))
            }
            other => Ok((TomlConfig::default(), ConfigSource::BuiltIn(other))),
        }
    }
}
