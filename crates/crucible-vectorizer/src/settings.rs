//! Per-class vectorizer settings
//!
//! [`ClassSettings`] is a typed view over a [`ClassConfig`]. Every accessor
//! is total and falls back to its default when an option is missing or has
//! the wrong type. Only [`ClassSettings::validate`] can fail.
//!
//! A settings view without a config represents a cross-class request (such
//! as an Explore query). All accessors then return their defaults.

use crate::class_config::ClassConfig;
use crate::error::SettingsError;
use crate::options::OptionLookup;
use crate::schema::Class;
use tracing::debug;

/// Document type used when none is configured.
pub const DEFAULT_OPENAI_DOCUMENT_TYPE: &str = "text";
/// Model used when none is configured.
pub const DEFAULT_OPENAI_MODEL: &str = "ada";
/// Whether the class name is vectorized by default.
pub const DEFAULT_VECTORIZE_CLASS_NAME: bool = true;
/// Whether a property is indexed by default.
pub const DEFAULT_PROPERTY_INDEXED: bool = true;
/// Whether property names are vectorized by default.
pub const DEFAULT_VECTORIZE_PROPERTY_NAME: bool = false;

/// Accepted document types.
pub const AVAILABLE_OPENAI_TYPES: &[&str] = &["text", "code"];

/// Accepted models. Only ada has a 002 default; babbage, curie and davinci
/// default to 001.
pub const AVAILABLE_OPENAI_MODELS: &[&str] = &["ada", "babbage", "curie", "davinci"];

/// Default model version for a model/document type pair.
pub fn pick_default_model_version(model: &str, doc_type: &str) -> &'static str {
    if model == "ada" && doc_type == "text" {
        return "002";
    }

    "001"
}

/// Switches that decide which parts of an object feed its vector.
pub trait VectorizerSettings {
    /// Whether `property` contributes to the vector.
    fn property_indexed(&self, property: &str) -> bool;

    /// Whether the name of `property` is vectorized along with its value.
    fn vectorize_property_name(&self, property: &str) -> bool;

    /// Whether the class name is vectorized.
    fn vectorize_class_name(&self) -> bool;
}

/// Typed, defaulted view over a class configuration.
#[derive(Clone, Copy)]
pub struct ClassSettings<'a> {
    cfg: Option<&'a dyn ClassConfig>,
}

impl std::fmt::Debug for ClassSettings<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClassSettings")
            .field("cross_class", &self.is_cross_class())
            .finish()
    }
}

impl<'a> ClassSettings<'a> {
    /// Settings backed by a class configuration.
    pub fn new(cfg: &'a dyn ClassConfig) -> Self {
        Self { cfg: Some(cfg) }
    }

    /// Settings for a request that spans classes and has no configuration.
    pub fn cross_class() -> Self {
        Self { cfg: None }
    }

    /// Whether this view has no configuration behind it.
    pub fn is_cross_class(&self) -> bool {
        self.cfg.is_none()
    }

    /// Configured model name, lowercased.
    pub fn model(&self) -> String {
        self.string_option("model", DEFAULT_OPENAI_MODEL)
    }

    /// Configured document type (`text` or `code`), lowercased.
    pub fn doc_type(&self) -> String {
        self.string_option("type", DEFAULT_OPENAI_DOCUMENT_TYPE)
    }

    /// Configured model version, or the default for the model and type.
    pub fn model_version(&self) -> String {
        let default_version = pick_default_model_version(&self.model(), &self.doc_type());
        self.string_option("modelVersion", default_version)
    }

    /// Azure resource name, empty when unset.
    pub fn resource_name(&self) -> String {
        self.string_option("resourceName", "")
    }

    /// Azure deployment id, empty when unset.
    pub fn deployment_id(&self) -> String {
        self.string_option("deploymentId", "")
    }

    /// Whether requests are routed through an Azure deployment.
    pub fn is_azure(&self) -> bool {
        !self.resource_name().is_empty() && !self.deployment_id().is_empty()
    }

    /// Check the configuration against `class`.
    ///
    /// Checks run in a fixed order and the first failure is returned:
    /// config presence, document type, model, model version, Azure settings,
    /// then whether the class has anything to vectorize.
    pub fn validate(&self, class: &Class) -> Result<(), SettingsError> {
        let result = self.run_checks(class);
        if let Err(e) = &result {
            debug!("Vectorizer settings for class {} rejected: {}", class.name, e);
        }
        result
    }

    fn run_checks(&self, class: &Class) -> Result<(), SettingsError> {
        if self.cfg.is_none() {
            return Err(SettingsError::EmptyConfig);
        }

        let doc_type = self.doc_type();
        if !AVAILABLE_OPENAI_TYPES.contains(&doc_type.as_str()) {
            return Err(SettingsError::InvalidType {
                value: doc_type,
                available: AVAILABLE_OPENAI_TYPES.join(", "),
            });
        }

        let model = self.model();
        if !AVAILABLE_OPENAI_MODELS.contains(&model.as_str()) {
            return Err(SettingsError::InvalidModel {
                value: model,
                available: AVAILABLE_OPENAI_MODELS.join(", "),
            });
        }

        validate_model_version(&self.model_version(), &model, &doc_type)?;
        validate_azure_config(&self.resource_name(), &self.deployment_id())?;
        validate_index_state(class, self)
    }

    fn string_option(&self, key: &str, default: &str) -> String {
        // No config on cross-class requests
        let Some(cfg) = self.cfg else {
            return default.to_string();
        };

        cfg.class()
            .string_option(key)
            .map(str::to_lowercase)
            .unwrap_or_else(|| default.to_string())
    }

    fn property_bool_option(&self, property: &str, key: &str) -> Option<bool> {
        self.cfg?.property(property)?.bool_option(key)
    }
}

impl VectorizerSettings for ClassSettings<'_> {
    fn property_indexed(&self, property: &str) -> bool {
        match self.property_bool_option(property, "skip") {
            Some(skip) => !skip,
            None => DEFAULT_PROPERTY_INDEXED,
        }
    }

    fn vectorize_property_name(&self, property: &str) -> bool {
        self.property_bool_option(property, "vectorizePropertyName")
            .unwrap_or(DEFAULT_VECTORIZE_PROPERTY_NAME)
    }

    fn vectorize_class_name(&self) -> bool {
        self.cfg
            .and_then(|cfg| cfg.class().bool_option("vectorizeClassName"))
            .unwrap_or(DEFAULT_VECTORIZE_CLASS_NAME)
    }
}

fn validate_model_version(version: &str, model: &str, doc_type: &str) -> Result<(), SettingsError> {
    match version {
        // No restrictions
        "001" => return Ok(()),
        "002" if model != "ada" && model != "davinci" => {
            return Err(SettingsError::InvalidModelVersion(format!(
                "unsupported version {version}"
            )));
        }
        "003" if model != "davinci" => {
            return Err(SettingsError::InvalidModelVersion(format!(
                "unsupported version {version}"
            )));
        }
        "002" | "003" => {}
        _ => {
            return Err(SettingsError::InvalidModelVersion(format!(
                "model {model} is only available in version 001"
            )));
        }
    }

    if doc_type != "text" {
        return Err(SettingsError::InvalidModelVersion(
            "ada-002 no longer distinguishes between text/code, use 'text' for all use cases"
                .to_string(),
        ));
    }

    Ok(())
}

fn validate_azure_config(resource_name: &str, deployment_id: &str) -> Result<(), SettingsError> {
    if resource_name.is_empty() != deployment_id.is_empty() {
        return Err(SettingsError::InvalidAzureConfig);
    }
    Ok(())
}

/// Check that `class` has at least one source for its vector.
///
/// Passes when the class name is vectorized. Otherwise at least one property
/// must be of type `text` and indexed. A property without data types fails
/// the check immediately.
pub fn validate_index_state(
    class: &Class,
    settings: &impl VectorizerSettings,
) -> Result<(), SettingsError> {
    if settings.vectorize_class_name() {
        // The class name alone can position the vector
        return Ok(());
    }

    for property in &class.properties {
        if property.data_type.is_empty() {
            return Err(SettingsError::InvalidIndexConfig(format!(
                "property {} must have at least one datatype: got {:?}",
                property.name, property.data_type
            )));
        }

        if property.is_text() && settings.property_indexed(&property.name) {
            return Ok(());
        }
    }

    Err(SettingsError::InvalidIndexConfig(
        "invalid properties: didn't find a single property which is of type string or text \
         and is not excluded from indexing. In addition the class name is excluded from \
         vectorization as well, meaning that it cannot be used to determine the vector \
         position. To fix this, set 'vectorizeClassName' to true if the class name is \
         contextionary-valid. Alternatively add at least contextionary-valid text/string \
         property which is not excluded from indexing."
            .to_string(),
    ))
}
