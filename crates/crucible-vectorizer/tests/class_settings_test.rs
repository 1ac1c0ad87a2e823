//! End-to-end validation of class definitions as the schema layer sends them.

use crucible_vectorizer::{
    Class, ClassSettings, ModuleClassConfig, SettingsError, VectorizerSettings, MODULE_NAME,
};
use serde_json::json;

fn class_from_json(value: serde_json::Value) -> Class {
    serde_json::from_value(value).expect("Failed to parse class definition")
}

#[test]
fn test_schema_class_with_module_config() {
    let class = class_from_json(json!({
        "class": "Article",
        "moduleConfig": {
            "text2vec-openai": {
                "model": "Davinci",
                "modelVersion": "003",
                "vectorizeClassName": false
            }
        },
        "properties": [
            {
                "name": "title",
                "dataType": ["text"],
                "moduleConfig": {
                    "text2vec-openai": { "vectorizePropertyName": true }
                }
            },
            {
                "name": "internalNotes",
                "dataType": ["text"],
                "moduleConfig": {
                    "text2vec-openai": { "skip": true }
                }
            }
        ]
    }));

    let config = ModuleClassConfig::from_class(&class);
    let settings = ClassSettings::new(&config);

    assert_eq!(settings.model(), "davinci");
    assert_eq!(settings.model_version(), "003");
    assert!(!settings.vectorize_class_name());
    assert!(settings.vectorize_property_name("title"));
    assert!(settings.property_indexed("title"));
    assert!(!settings.property_indexed("internalNotes"));
    assert!(settings.validate(&class).is_ok());
}

#[test]
fn test_all_text_properties_skipped() {
    let class = class_from_json(json!({
        "class": "Secret",
        "moduleConfig": {
            "text2vec-openai": { "vectorizeClassName": false }
        },
        "properties": [
            {
                "name": "payload",
                "dataType": ["text"],
                "moduleConfig": { "text2vec-openai": { "skip": true } }
            },
            { "name": "size", "dataType": ["int"] }
        ]
    }));

    let config = ModuleClassConfig::from_class(&class);
    let result = ClassSettings::new(&config).validate(&class);

    assert!(matches!(result, Err(SettingsError::InvalidIndexConfig(_))));
}

#[test]
fn test_missing_data_type_reported_first() {
    let class = class_from_json(json!({
        "class": "Broken",
        "moduleConfig": { "text2vec-openai": { "vectorizeClassName": false } },
        "properties": [
            { "name": "nothing", "dataType": [] },
            { "name": "title", "dataType": ["text"] }
        ]
    }));

    let config = ModuleClassConfig::from_class(&class);
    let err = ClassSettings::new(&config).validate(&class).unwrap_err();

    assert!(err.to_string().contains("property nothing"));
}

#[test]
fn test_first_failure_wins() {
    // Bad version and half-configured Azure: the version is reported
    let class = Class::new("Article").with_module_config(
        MODULE_NAME,
        json!({ "model": "babbage", "modelVersion": "002", "resourceName": "r" }),
    );

    let config = ModuleClassConfig::from_class(&class);
    let err = ClassSettings::new(&config).validate(&class).unwrap_err();

    assert_eq!(
        err,
        SettingsError::InvalidModelVersion("unsupported version 002".to_string())
    );
}

#[test]
fn test_azure_deployment_from_toml() {
    let config = ModuleClassConfig::from_toml_str(
        r#"
        [class]
        resourceName = "my-openai"
        deploymentId = "embeddings"
        "#,
    )
    .expect("Failed to parse TOML config");
    let settings = ClassSettings::new(&config);

    assert!(settings.is_azure());
    assert_eq!(settings.resource_name(), "my-openai");
    assert_eq!(settings.deployment_id(), "embeddings");
    assert!(settings.validate(&Class::new("Article")).is_ok());
}

#[test]
fn test_settings_shared_across_threads() {
    let config = ModuleClassConfig::new().with_class_option("model", "curie");
    let settings = ClassSettings::new(&config);

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(move || settings.model()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), "curie");
        }
    });
}
