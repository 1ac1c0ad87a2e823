//! Minimal schema class model
//!
//! Only the parts of a class definition the vectorizer reads: property
//! names, their declared data types, and per-module configuration.

use crate::options::OptionMap;
use serde::{Deserialize, Serialize};

/// Data type name of text properties.
pub const DATA_TYPE_TEXT: &str = "text";

/// A schema class with an ordered list of properties.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Class {
    /// Class name
    #[serde(rename = "class")]
    pub name: String,

    /// Properties in declaration order
    #[serde(default)]
    pub properties: Vec<Property>,

    /// Per-module configuration, keyed by module name
    #[serde(default, skip_serializing_if = "OptionMap::is_empty")]
    pub module_config: OptionMap,
}

impl Class {
    /// Create a class without properties.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Append a property.
    pub fn with_property(mut self, property: Property) -> Self {
        self.properties.push(property);
        self
    }

    /// Set the configuration block for `module`.
    pub fn with_module_config(mut self, module: impl Into<String>, config: serde_json::Value) -> Self {
        self.module_config.insert(module.into(), config);
        self
    }

    /// Look up a property by name.
    pub fn property(&self, name: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.name == name)
    }
}

/// A class property.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    /// Property name
    pub name: String,

    /// Declared data types; the first entry is authoritative
    #[serde(default)]
    pub data_type: Vec<String>,

    /// Per-module configuration, keyed by module name
    #[serde(default, skip_serializing_if = "OptionMap::is_empty")]
    pub module_config: OptionMap,
}

impl Property {
    /// Create a property with the given data types.
    pub fn new<I, S>(name: impl Into<String>, data_type: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            data_type: data_type.into_iter().map(Into::into).collect(),
            module_config: OptionMap::new(),
        }
    }

    /// Create a property with a single `text` data type.
    pub fn text(name: impl Into<String>) -> Self {
        Self::new(name, [DATA_TYPE_TEXT])
    }

    /// Set the configuration block for `module`.
    pub fn with_module_config(mut self, module: impl Into<String>, config: serde_json::Value) -> Self {
        self.module_config.insert(module.into(), config);
        self
    }

    /// The authoritative (first) data type, if any.
    pub fn primary_data_type(&self) -> Option<&str> {
        self.data_type.first().map(String::as_str)
    }

    /// Whether the authoritative data type is `text`.
    pub fn is_text(&self) -> bool {
        self.primary_data_type() == Some(DATA_TYPE_TEXT)
    }
}
