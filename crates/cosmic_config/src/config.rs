//! Configuration structures for the story client.
//!
//! The configuration system supports:
//! - Bundled defaults (include_str! from cosmic.toml)
//! - User overrides (~/.config/cosmic_tales/cosmic.toml, then ./cosmic.toml)
//! - An explicit file passed on the command line
//! - The `GEMINI_API_KEY` environment variable, which always wins for the key

use cosmic_core::{GenerationConfig, SafetySetting};
use cosmic_error::{
    ConfigError, ConfigErrorKind, CosmicError, CosmicResult, GeminiError, GeminiErrorKind,
};
use config::{Config, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, instrument};

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Bundled default configuration.
const DEFAULT_CONFIG: &str = include_str!("../cosmic.toml");

/// Simplified prompts used as the second prompt variant.
///
/// ```toml
/// [fallback_prompts]
/// story = "Write a short space adventure story..."
/// roleplay = "Write a short space adventure ... Format as: STORY: ... CHOICES: ..."
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct FallbackPrompts {
    /// Retry prompt for single-shot stories
    pub story: String,
    /// Retry prompt for roleplay turns, which must still ask for STORY:/CHOICES:
    pub roleplay: String,
}

/// Top-level Cosmic Tales configuration.
///
/// Read-only once loaded; share it behind an `Arc`.
///
/// # Example
///
/// ```no_run
/// use cosmic_config::CosmicConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = CosmicConfig::load()?;
/// println!("{} endpoints configured", config.endpoints.len());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, PartialEq, Deserialize, Serialize)]
pub struct CosmicConfig {
    /// API key sent as the `key` query parameter
    #[serde(default, skip_serializing)]
    pub api_key: Option<String>,

    /// Candidate `generateContent` URLs, in order of preference
    pub endpoints: Vec<String>,

    /// Sampling parameters sent with every request
    #[serde(default)]
    pub generation: GenerationConfig,

    /// Content-safety thresholds sent with every request
    #[serde(default = "SafetySetting::defaults")]
    pub safety_settings: Vec<SafetySetting>,

    /// Simplified retry prompts
    pub fallback_prompts: FallbackPrompts,
}

impl std::fmt::Debug for CosmicConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CosmicConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("endpoints", &self.endpoints)
            .field("generation", &self.generation)
            .field("safety_settings", &self.safety_settings)
            .field("fallback_prompts", &self.fallback_prompts)
            .finish()
    }
}

impl CosmicConfig {
    /// Load configuration from a specific file path, without bundled defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> CosmicResult<Self> {
        debug!("Loading configuration from file");

        Config::builder()
            .add_source(File::from(path.as_ref()))
            .build()
            .map_err(|e| {
                CosmicError::from(ConfigError::new(ConfigErrorKind::Load {
                    source_name: path.as_ref().display().to_string(),
                    message: e.to_string(),
                }))
            })?
            .try_deserialize()
            .map_err(|e| CosmicError::from(ConfigError::new(ConfigErrorKind::Parse(e.to_string()))))
    }

    /// Load configuration with precedence: env key > current dir > home dir > bundled default.
    ///
    /// User config files are optional and silently skipped if not found.
    #[instrument]
    pub fn load() -> CosmicResult<Self> {
        Self::load_with_override(None)
    }

    /// Load configuration like [`CosmicConfig::load`], layering `path` on top
    /// of the user files when given. The explicit file must exist.
    #[instrument(skip(path))]
    pub fn load_with_override(path: Option<&Path>) -> CosmicResult<Self> {
        debug!("Loading configuration with precedence: env > explicit > current dir > home dir > bundled defaults");

        let mut builder = Config::builder()
            // Start with bundled defaults
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/cosmic_tales/cosmic.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("cosmic").required(false));

        if let Some(path) = path {
            debug!(path = %path.display(), "Adding explicit configuration file");
            builder = builder.add_source(File::from(path));
        }

        let api_key = std::env::var(API_KEY_ENV)
            .ok()
            .filter(|key| !key.trim().is_empty());
        builder = builder
            .set_override_option("api_key", api_key)
            .map_err(|e| {
                CosmicError::from(ConfigError::new(ConfigErrorKind::EnvOverride {
                    variable: API_KEY_ENV,
                    message: e.to_string(),
                }))
            })?;

        let config: Self = builder
            .build()
            .map_err(|e| {
                CosmicError::from(ConfigError::new(ConfigErrorKind::Load {
                    source_name: "configuration layers".to_string(),
                    message: e.to_string(),
                }))
            })?
            .try_deserialize()
            .map_err(|e| CosmicError::from(ConfigError::new(ConfigErrorKind::Parse(e.to_string()))))?;

        config.validate()?;
        Ok(config)
    }

    /// Bundled defaults only, with no API key. Useful for tests and offline runs.
    ///
    /// ```
    /// use cosmic_config::CosmicConfig;
    ///
    /// let config = CosmicConfig::bundled().unwrap();
    /// assert_eq!(config.endpoints.len(), 3);
    /// assert!(config.api_key.is_none());
    /// ```
    pub fn bundled() -> CosmicResult<Self> {
        Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .build()
            .and_then(Config::try_deserialize)
            .map_err(|e| {
                CosmicError::from(ConfigError::new(ConfigErrorKind::Load {
                    source_name: "bundled cosmic.toml".to_string(),
                    message: e.to_string(),
                }))
            })
    }

    /// Check that the configuration can drive a request.
    ///
    /// # Errors
    ///
    /// Fails on an empty endpoint list, blank endpoints or prompts, or
    /// generation parameters outside the ranges the API accepts.
    pub fn validate(&self) -> CosmicResult<()> {
        if self.endpoints.is_empty() {
            return Err(ConfigError::invalid("At least one endpoint must be configured").into());
        }
        if let Some(blank) = self.endpoints.iter().position(|e| e.trim().is_empty()) {
            return Err(ConfigError::invalid(format!("Endpoint {} is blank", blank + 1)).into());
        }

        let generation = &self.generation;
        if !(0.0..=2.0).contains(&generation.temperature) {
            return Err(ConfigError::invalid(format!(
                "temperature must be between 0.0 and 2.0, got {}",
                generation.temperature
            ))
            .into());
        }
        if !(0.0..=1.0).contains(&generation.top_p) {
            return Err(ConfigError::invalid(format!(
                "top_p must be between 0.0 and 1.0, got {}",
                generation.top_p
            ))
            .into());
        }
        if generation.top_k == 0 || generation.max_output_tokens == 0 {
            return Err(ConfigError::invalid("top_k and max_output_tokens must be positive").into());
        }

        if self.fallback_prompts.story.trim().is_empty()
            || self.fallback_prompts.roleplay.trim().is_empty()
        {
            return Err(ConfigError::invalid("Fallback prompts cannot be blank").into());
        }

        Ok(())
    }

    /// The API key, or an error if none was configured.
    pub fn require_api_key(&self) -> CosmicResult<&str> {
        self.api_key
            .as_deref()
            .ok_or_else(|| GeminiError::new(GeminiErrorKind::MissingApiKey).into())
    }
}
