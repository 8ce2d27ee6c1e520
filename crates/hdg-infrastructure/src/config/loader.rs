//! Configuration loader
//!
//! Handles loading configuration from default values, a TOML file and
//! environment variables, in that order of precedence (later wins).

use std::env;
use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use hdg_application::ports::registry::{list_embedding_providers, list_keyword_providers};
use hdg_domain::error::{Error, Result};

use crate::config::{AppConfig, ChunkingConfig, EmbeddingConfig, KeywordConfig, LoggingConfig};
use crate::constants::{
    CONFIG_ENV_PREFIX, CONFIG_ENV_SEPARATOR, DEFAULT_CONFIG_DIR, DEFAULT_CONFIG_FILENAME,
};
use crate::error_ext::ErrorContext;
use crate::logging::{log_config_loaded, parse_log_level};

/// Configuration loader service
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,

    /// Environment prefix
    env_prefix: String,
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
        }
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the environment variable prefix
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Load configuration from all sources
    ///
    /// Configuration sources are merged in this order (later sources override earlier):
    /// 1. Default values from `AppConfig::default()`
    /// 2. TOML configuration file (explicit path, or the first one discovered)
    /// 3. Environment variables with prefix (e.g., `HDG__CHUNKING__MAX_CHUNK_SIZE`)
    ///
    /// The merged configuration is validated before it is returned.
    pub fn load(&self) -> Result<AppConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        if let Some(config_path) = &self.config_path {
            if config_path.exists() {
                figment = figment.merge(Toml::file(config_path));
                log_config_loaded(config_path, true);
            } else {
                log_config_loaded(config_path, false);
            }
        } else if let Some(default_path) = Self::find_default_config_path() {
            figment = figment.merge(Toml::file(&default_path));
            log_config_loaded(&default_path, true);
        }

        figment = figment.merge(
            Env::prefixed(&format!("{}{CONFIG_ENV_SEPARATOR}", self.env_prefix))
                .split(CONFIG_ENV_SEPARATOR),
        );

        let app_config: AppConfig = figment
            .extract()
            .config_context("Failed to extract configuration")?;

        validate_app_config(&app_config)?;

        Ok(app_config)
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, config: &AppConfig, path: P) -> Result<()> {
        let toml_string =
            toml::to_string_pretty(config).context("Failed to serialize config to TOML")?;

        std::fs::write(path.as_ref(), toml_string).io_context(format!(
            "Failed to write config file {}",
            path.as_ref().display()
        ))?;

        Ok(())
    }

    /// Get the current configuration file path
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// First existing file among the conventional locations
    fn find_default_config_path() -> Option<PathBuf> {
        let current_dir = env::current_dir().ok()?;

        let candidates = [
            Some(current_dir.join(DEFAULT_CONFIG_FILENAME)),
            Some(
                current_dir
                    .join(DEFAULT_CONFIG_DIR)
                    .join(DEFAULT_CONFIG_FILENAME),
            ),
            dirs::config_dir().map(|d| d.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME)),
            dirs::home_dir().map(|d| {
                d.join(format!(".{DEFAULT_CONFIG_DIR}"))
                    .join(DEFAULT_CONFIG_FILENAME)
            }),
        ];

        candidates.into_iter().flatten().find(|path| path.exists())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate application configuration
///
/// Runs every section check; the first failure is returned.
pub fn validate_app_config(config: &AppConfig) -> Result<()> {
    validate_chunking_config(&config.chunking)?;
    validate_keyword_config(&config.keywords)?;
    validate_embedding_config(&config.embedding)?;
    validate_logging_config(&config.logging)?;
    // Cross-field checks shared with the processing service
    config.processing_options().validate()
}

// Size fields are checked even while the pass is disabled
fn validate_chunking_config(config: &ChunkingConfig) -> Result<()> {
    config.constraints().ensure_valid()
}

fn validate_keyword_config(config: &KeywordConfig) -> Result<()> {
    if config.max_keywords_per_chunk == 0 {
        return Err(Error::configuration(
            "Maximum keywords per chunk cannot be 0",
        ));
    }
    if config.extract_keywords {
        if config.min_word_length == 0 {
            return Err(Error::configuration("Minimum keyword length cannot be 0"));
        }
        ensure_registered(
            "keyword extractor",
            &config.provider,
            &list_keyword_providers(),
        )?;
    }
    Ok(())
}

fn validate_embedding_config(config: &EmbeddingConfig) -> Result<()> {
    if config.enabled {
        if config.dimensions == 0 {
            return Err(Error::configuration(
                "Embedding dimensions cannot be 0 when embeddings are enabled",
            ));
        }
        ensure_registered(
            "embedding provider",
            &config.provider,
            &list_embedding_providers(),
        )?;
    }
    Ok(())
}

fn validate_logging_config(config: &LoggingConfig) -> Result<()> {
    parse_log_level(&config.level)?;
    if config.file_output.is_some() && config.max_files == 0 {
        return Err(Error::configuration(
            "Maximum log files cannot be 0 when file output is enabled",
        ));
    }
    Ok(())
}

fn ensure_registered(kind: &str, name: &str, registered: &[(&str, &str)]) -> Result<()> {
    if registered.iter().any(|(entry, _)| *entry == name) {
        return Ok(());
    }
    let available: Vec<&str> = registered.iter().map(|(entry, _)| *entry).collect();
    Err(Error::configuration(format!(
        "Unknown {kind} '{name}'. Available providers: {available:?}"
    )))
}

/// Configuration builder for programmatic configuration
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    config: AppConfig,
}

impl ConfigBuilder {
    /// Create a new configuration builder with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set chunking configuration
    pub fn with_chunking(mut self, chunking: ChunkingConfig) -> Self {
        self.config.chunking = chunking;
        self
    }

    /// Set keyword configuration
    pub fn with_keywords(mut self, keywords: KeywordConfig) -> Self {
        self.config.keywords = keywords;
        self
    }

    /// Set embedding configuration
    pub fn with_embedding(mut self, embedding: EmbeddingConfig) -> Self {
        self.config.embedding = embedding;
        self
    }

    /// Set logging configuration
    pub fn with_logging(mut self, logging: LoggingConfig) -> Self {
        self.config.logging = logging;
        self
    }

    /// Build the configuration
    pub fn build(self) -> AppConfig {
        self.config
    }
}
