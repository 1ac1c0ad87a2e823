//! Typed reads over schema-less option maps
//!
//! Option values arrive as [`serde_json::Value`]. Reads are total: a missing
//! key or a value of the wrong type yields `None`, and callers substitute
//! their default.

use serde_json::Value;
use std::collections::HashMap;
use tracing::debug;

/// Flat mapping of option names to arbitrary values.
pub type OptionMap = HashMap<String, Value>;

/// Typed lookups on an [`OptionMap`].
pub trait OptionLookup {
    /// String value of `key`, if present and a string.
    fn string_option(&self, key: &str) -> Option<&str>;

    /// Boolean value of `key`, if present and a boolean.
    fn bool_option(&self, key: &str) -> Option<bool>;
}

impl OptionLookup for OptionMap {
    fn string_option(&self, key: &str) -> Option<&str> {
        let value = self.get(key)?;
        let as_str = value.as_str();
        if as_str.is_none() {
            debug!("Option {} is not a string ({}), using default", key, value);
        }
        as_str
    }

    fn bool_option(&self, key: &str) -> Option<bool> {
        let value = self.get(key)?;
        let as_bool = value.as_bool();
        if as_bool.is_none() {
            debug!("Option {} is not a boolean ({}), using default", key, value);
        }
        as_bool
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn options(value: Value) -> OptionMap {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_string_option() {
        let map = options(json!({ "model": "Ada", "count": 3 }));

        assert_eq!(map.string_option("model"), Some("Ada"));
        assert_eq!(map.string_option("count"), None);
        assert_eq!(map.string_option("missing"), None);
    }

    #[test]
    fn test_bool_option() {
        let map = options(json!({ "skip": true, "flag": "true", "none": null }));

        assert_eq!(map.bool_option("skip"), Some(true));
        // Strings are not coerced
        assert_eq!(map.bool_option("flag"), None);
        assert_eq!(map.bool_option("none"), None);
        assert_eq!(map.bool_option("missing"), None);
    }
}
