//! Class configuration providers
//!
//! A [`ClassConfig`] hands out the raw option maps the vectorizer reads: one
//! for the class and one per property. [`ModuleClassConfig`] is the
//! serde-backed implementation, loadable from JSON or TOML documents or
//! extracted from a schema class's `moduleConfig`.
//!
//! # Example TOML
//!
//! ```toml
//! [class]
//! model = "davinci"
//! modelVersion = "003"
//! vectorizeClassName = false
//!
//! [properties.title]
//! vectorizePropertyName = true
//!
//! [properties.internalNotes]
//! skip = true
//! ```

use crate::error::{ConfigError, ConfigResult};
use crate::options::OptionMap;
use crate::schema::Class;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

/// Module name under which the vectorizer's settings live in a class's
/// `moduleConfig`.
pub const MODULE_NAME: &str = "text2vec-openai";

/// Read-only source of class and property options.
///
/// Implementations must be safe for concurrent reads.
pub trait ClassConfig: Send + Sync {
    /// Class-level options.
    fn class(&self) -> &OptionMap;

    /// Options for `property`. `None` is treated as an empty map.
    fn property(&self, property: &str) -> Option<&OptionMap>;
}

/// Serde-backed class configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ModuleClassConfig {
    /// Class-level options
    #[serde(default)]
    pub class: OptionMap,

    /// Options per property name
    #[serde(default)]
    pub properties: HashMap<String, OptionMap>,
}

impl ModuleClassConfig {
    /// Create an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a class-level option.
    pub fn with_class_option(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.class.insert(key.into(), value.into());
        self
    }

    /// Set an option on a property.
    pub fn with_property_option(
        mut self,
        property: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<Value>,
    ) -> Self {
        self.properties
            .entry(property.into())
            .or_default()
            .insert(key.into(), value.into());
        self
    }

    /// Parse a JSON document with `class` and `properties` sections.
    pub fn from_json_str(content: &str) -> ConfigResult<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Parse a TOML document with `[class]` and `[properties.<name>]` tables.
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load a configuration file, choosing the format by extension.
    pub fn load_from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        let parse: fn(&str) -> ConfigResult<Self> = match extension.as_deref() {
            Some("json") => Self::from_json_str,
            Some("toml") => Self::from_toml_str,
            _ => return Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
        };

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        debug!("Loading class config from {}", path.display());
        parse(&content)
    }

    /// Collect the settings stored for `module` in a class definition.
    ///
    /// Class options come from `class.moduleConfig[module]`, property options
    /// from each `property.moduleConfig[module]`. Blocks that are not JSON
    /// objects are ignored.
    pub fn for_module(class: &Class, module: &str) -> Self {
        let mut config = Self {
            class: module_block(&class.module_config, module, &class.name),
            properties: HashMap::new(),
        };

        for property in &class.properties {
            let options = module_block(&property.module_config, module, &property.name);
            if !options.is_empty() {
                config.properties.insert(property.name.clone(), options);
            }
        }

        config
    }

    /// Collect the settings stored for this vectorizer in a class definition.
    pub fn from_class(class: &Class) -> Self {
        Self::for_module(class, MODULE_NAME)
    }
}

fn module_block(module_config: &OptionMap, module: &str, owner: &str) -> OptionMap {
    match module_config.get(module) {
        Some(Value::Object(map)) => map.clone().into_iter().collect(),
        Some(other) => {
            debug!(
                "Ignoring non-object {} config on {}: {}",
                module, owner, other
            );
            OptionMap::new()
        }
        None => OptionMap::new(),
    }
}

impl ClassConfig for ModuleClassConfig {
    fn class(&self) -> &OptionMap {
        &self.class
    }

    fn property(&self, property: &str) -> Option<&OptionMap> {
        self.properties.get(property)
    }
}
