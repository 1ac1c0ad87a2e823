//! Errors for vectorizer settings validation and configuration loading.

use std::path::PathBuf;
use thiserror::Error;

/// Reasons a class configuration is rejected by the vectorizer.
///
/// Variants are checked in declaration order by
/// [`ClassSettings::validate`](crate::ClassSettings::validate); only the
/// first failure is reported.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SettingsError {
    /// No class configuration was supplied (cross-class request).
    #[error("empty config")]
    EmptyConfig,

    /// Document type is not one of the supported types.
    #[error("wrong OpenAI type name {value:?}, available type names are: [{available}]")]
    InvalidType {
        /// The rejected document type
        value: String,
        /// Comma-separated list of accepted types
        available: String,
    },

    /// Model name is not one of the supported models.
    #[error("wrong OpenAI model name {value:?}, available model names are: [{available}]")]
    InvalidModel {
        /// The rejected model name
        value: String,
        /// Comma-separated list of accepted models
        available: String,
    },

    /// Model version is not available for the model/type combination.
    #[error("{0}")]
    InvalidModelVersion(String),

    /// Only one of `resourceName` and `deploymentId` was set.
    #[error("both resourceName and deploymentId must be provided")]
    InvalidAzureConfig,

    /// The class has nothing the vectorizer could build a vector from.
    #[error("{0}")]
    InvalidIndexConfig(String),
}

/// Errors from loading a class configuration document.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Reading the file failed.
    #[error("failed to read config {path}: {source}")]
    Io {
        /// File that could not be read
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// JSON document did not match the expected shape.
    #[error("invalid JSON class config: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML document did not match the expected shape.
    #[error("invalid TOML class config: {0}")]
    Toml(#[from] toml::de::Error),

    /// File extension is neither `.json` nor `.toml`.
    #[error("unsupported config format: {}", .0.display())]
    UnsupportedFormat(PathBuf),
}

/// Result alias for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;
