//! Editor Configuration
//!
//! Everything that used to be a module-level constant (owner account, site
//! colours, id scheme) lives in [`EditorConfig`], which is passed explicitly
//! to editor sessions and the template service.
//!
//! Configuration can come from three places, in increasing precedence:
//! `Default`, a JSON file ([`EditorConfig::load`]) and environment variables
//! ([`EditorConfig::apply_env`]).

use crate::models::{ComponentKind, DEFAULT_PRIMARY_COLOR, DEFAULT_TEXT_COLOR};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tokio::fs;

/// Upper bound accepted for `max_depth`
const MAX_SUPPORTED_DEPTH: usize = 64;

pub const ENV_OWNER_ID: &str = "SITEDESK_OWNER_ID";
pub const ENV_ID_STRATEGY: &str = "SITEDESK_ID_STRATEGY";
pub const ENV_MAX_DEPTH: &str = "SITEDESK_MAX_DEPTH";

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ConfigError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::Invalid(msg.into())
    }
}

/// How new component ids are generated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdStrategy {
    /// `"<type>-<uuid v4>"`
    #[default]
    Uuid,
    /// `"<type>-<epoch millis>"`; two inserts of the same type within one
    /// millisecond produce the same id
    Timestamp,
}

impl IdStrategy {
    /// Generate an id for a new node of `kind`
    pub fn next_id(&self, kind: ComponentKind) -> String {
        match self {
            Self::Uuid => format!("{}-{}", kind, uuid::Uuid::new_v4()),
            Self::Timestamp => Self::timestamp_id(kind, Utc::now().timestamp_millis()),
        }
    }

    /// Legacy id for a given instant
    pub fn timestamp_id(kind: ComponentKind, millis: i64) -> String {
        format!("{}-{}", kind, millis)
    }
}

impl std::str::FromStr for IdStrategy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "uuid" => Ok(Self::Uuid),
            "timestamp" => Ok(Self::Timestamp),
            other => Err(ConfigError::invalid(format!(
                "unknown id strategy '{}' (expected 'uuid' or 'timestamp')",
                other
            ))),
        }
    }
}

/// Site-wide defaults applied to newly inserted components
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ThemeDefaults {
    pub primary_color: String,
    pub text_color: String,
    pub font_family: String,
}

impl Default for ThemeDefaults {
    fn default() -> Self {
        Self {
            primary_color: DEFAULT_PRIMARY_COLOR.to_string(),
            text_color: DEFAULT_TEXT_COLOR.to_string(),
            font_family: "inherit".to_string(),
        }
    }
}

/// Configuration for editor sessions and the template service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EditorConfig {
    /// Staff account stamped on templates created through the service
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<String>,

    pub id_strategy: IdStrategy,

    /// Maximum nesting depth of a component tree (a root leaf has depth 1)
    pub max_depth: usize,

    pub theme: ThemeDefaults,

    /// Buffer size of the template event channel
    pub event_capacity: usize,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            owner_id: None,
            id_strategy: IdStrategy::Uuid,
            max_depth: 16,
            theme: ThemeDefaults::default(),
            event_capacity: 128,
        }
    }
}

impl EditorConfig {
    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_depth == 0 {
            return Err(ConfigError::invalid("max_depth must be greater than 0"));
        }

        if self.max_depth > MAX_SUPPORTED_DEPTH {
            return Err(ConfigError::invalid(format!(
                "max_depth cannot exceed {}",
                MAX_SUPPORTED_DEPTH
            )));
        }

        if self.event_capacity == 0 {
            return Err(ConfigError::invalid("event_capacity must be greater than 0"));
        }

        if let Some(owner) = &self.owner_id {
            if owner.trim().is_empty() {
                return Err(ConfigError::invalid("owner_id cannot be blank"));
            }
        }

        Ok(())
    }

    /// Defaults overridden by environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        config.apply_env()?;
        config.validate()?;
        Ok(config)
    }

    /// Read a JSON config file, then apply environment overrides
    ///
    /// Missing keys take their defaults. A missing file yields the defaults.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let mut config = if fs::try_exists(path).await.unwrap_or(false) {
            let contents = fs::read_to_string(path)
                .await
                .map_err(|source| ConfigError::Io {
                    path: path_str.clone(),
                    source,
                })?;
            serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
                path: path_str.clone(),
                source,
            })?
        } else {
            tracing::debug!("Config file {} not found, using defaults", path_str);
            Self::default()
        };

        config.apply_env()?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `SITEDESK_*` environment overrides in place
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        if let Ok(owner) = std::env::var(ENV_OWNER_ID) {
            if !owner.is_empty() {
                tracing::info!("Using owner id from {}", ENV_OWNER_ID);
                self.owner_id = Some(owner);
            }
        }

        if let Ok(strategy) = std::env::var(ENV_ID_STRATEGY) {
            self.id_strategy = strategy.parse()?;
            tracing::info!("Using id strategy {:?} from {}", self.id_strategy, ENV_ID_STRATEGY);
        }

        if let Ok(depth) = std::env::var(ENV_MAX_DEPTH) {
            self.max_depth = depth.trim().parse().map_err(|_| {
                ConfigError::invalid(format!(
                    "{} must be a positive integer, got '{}'",
                    ENV_MAX_DEPTH, depth
                ))
            })?;
            tracing::info!("Using max depth {} from {}", self.max_depth, ENV_MAX_DEPTH);
        }

        Ok(())
    }
}
