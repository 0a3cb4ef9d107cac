use crate::error::ConfigError;
use crate::loader::merger::ConfigMerger;
use crate::models::Config;
use once_cell::sync::Lazy;
use serde_json::Value;

// Embed the default settings YAML file at compile time
const DEFAULT_CONFIG_YAML: &str = include_str!("defaults.yml");

// Parse the default config once at startup
pub static DEFAULT_CONFIG_VALUE: Lazy<Value> = Lazy::new(|| {
    serde_yaml::from_str(DEFAULT_CONFIG_YAML)
        .expect("Failed to parse default config - this is a bug")
});

pub static DEFAULT_CONFIG: Lazy<Config> = Lazy::new(|| {
    serde_json::from_value(DEFAULT_CONFIG_VALUE.clone())
        .expect("Default config does not match Config - this is a bug")
});

/// Merge a user config document over the defaults
/// User values take precedence; lists replace rather than append
pub fn merge_with_defaults(user_config: Value) -> Result<Config, ConfigError> {
    let mut merged = DEFAULT_CONFIG_VALUE.clone();

    // An empty YAML file parses as null
    if !user_config.is_null() {
        ConfigMerger::deep_merge(&mut merged, user_config);
    }

    serde_json::from_value(merged).map_err(ConfigError::Shape)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::OutputFormat;
    use serde_json::json;

    #[test]
    fn test_default_config_loads() {
        // This will panic if the embedded YAML is invalid
        let config = &*DEFAULT_CONFIG;

        assert_eq!(config.context, "http://schema.org");
        assert_eq!(config.layout.id.index(), 2);
        assert_eq!(config.layout.type_name.index(), 3);
        assert_eq!(config.layout.property.index(), 4);
        assert_eq!(config.layout.value.index(), 5);
        assert!(!config.references.include_type);
        assert_eq!(config.array_properties, vec!["sameAs"]);
        assert_eq!(config.catalog.prefix, "http://schema.org/");
        assert_eq!(config.output.format, OutputFormat::Html);
    }

    #[test]
    fn test_merge_empty_config() {
        let merged = merge_with_defaults(Value::Null).unwrap();
        assert_eq!(merged.layout, DEFAULT_CONFIG.layout);
        assert_eq!(merged.catalog, DEFAULT_CONFIG.catalog);
    }

    #[test]
    fn test_merge_preserves_user_config() {
        let user = json!({
            "context": "https://schema.org",
            "layout": { "id": "A" },
            "references": { "include_type": true },
            "array_properties": ["sameAs", "image"]
        });

        let merged = merge_with_defaults(user).unwrap();

        assert_eq!(merged.context, "https://schema.org");
        assert_eq!(merged.layout.id.index(), 0);
        // Untouched siblings keep their defaults
        assert_eq!(merged.layout.type_name.index(), 3);
        assert!(merged.references.include_type);
        assert!(merged.is_array_property("image"));
        assert_eq!(merged.catalog.header_rows, 1);
    }

    #[test]
    fn test_merge_rejects_wrong_shape() {
        let user = json!({ "layout": { "id": "not a column" } });
        assert!(matches!(
            merge_with_defaults(user),
            Err(ConfigError::Shape(_))
        ));
    }
}
