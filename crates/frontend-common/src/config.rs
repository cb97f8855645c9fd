//! Frontend configuration
//!
//! Defaults come from [`AppConfig`]. A page may override any subset by
//! embedding a JSON document:
//!
//! ```html
//! <script id="holocron-config" type="application/json">
//!   { "catalog": { "base_url": "https://swapi.dev/api" } }
//! </script>
//! ```

use holocron_core::AppConfig;
use holocron_core::error::ConfigError;

/// Id of the element carrying the JSON override
pub const CONFIG_ELEMENT_ID: &str = "holocron-config";

/// Load the page configuration
///
/// A missing override element yields the defaults.
pub fn load() -> Result<AppConfig, ConfigError> {
    embedded_json().map_or_else(|| Ok(AppConfig::default()), |raw| parse(&raw))
}

/// Parse an override document; blank documents mean defaults
pub fn parse(raw: &str) -> Result<AppConfig, ConfigError> {
    if raw.trim().is_empty() {
        return Ok(AppConfig::default());
    }
    AppConfig::from_json(raw)
}

fn embedded_json() -> Option<String> {
    web_sys::window()?
        .document()?
        .get_element_by_id(CONFIG_ELEMENT_ID)?
        .text_content()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_document_is_default() {
        assert_eq!(parse("  \n").unwrap(), AppConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config = parse(r#"{"catalog": {"base_url": "http://localhost:8000/api"}}"#).unwrap();
        assert_eq!(config.catalog.base_url, "http://localhost:8000/api");
        assert_eq!(config.auth, AppConfig::default().auth);
    }

    #[test]
    fn test_invalid_document_is_error() {
        assert!(parse("{not json").is_err());
    }
}
