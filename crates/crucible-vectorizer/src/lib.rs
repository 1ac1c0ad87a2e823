//! # Crucible Vectorizer
//!
//! Per-class settings for the OpenAI text vectorizer module.
//!
//! A class carries free-form vectorizer options (model, model version,
//! document type, Azure routing, per-property switches). This crate reads
//! them with defaults and validates the combination against the class
//! schema before any object of the class is vectorized.
//!
//! ## Quick Start
//!
//! ```rust
//! use crucible_vectorizer::{Class, ClassSettings, ModuleClassConfig, Property};
//!
//! let config = ModuleClassConfig::new()
//!     .with_class_option("model", "Davinci")
//!     .with_class_option("modelVersion", "003");
//! let class = Class::new("Article").with_property(Property::text("title"));
//!
//! let settings = ClassSettings::new(&config);
//! assert_eq!(settings.model(), "davinci");
//! assert!(settings.validate(&class).is_ok());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod class_config;
mod error;
mod options;
mod schema;
mod settings;

pub use class_config::*;
pub use error::*;
pub use options::*;
pub use schema::*;
pub use settings::*;
