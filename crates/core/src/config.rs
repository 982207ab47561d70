//! Generator configuration.
//!
//! [`GeneratorConfig`] is the one record the pipeline reads: naming options
//! from the command line plus the static [`Policy`] table, which is usually
//! loaded from a TOML file.

use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use serde::Deserialize;

use crate::error::{GenerateError, GenerateResult};

/// Default prefix that marks a `$ref` as pointing at a definition.
pub const DEFAULT_DEFINITIONS_REF_PREFIX: &str = "#/definitions/";

/// Default HTTP status codes treated as success.
pub const DEFAULT_SUCCESS_CODES: [u16; 3] = [200, 201, 202];

/// Format of the banner build date.
pub const BUILD_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Static generation policy.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct Policy {
    /// `$ref` values starting with this prefix resolve to definitions.
    pub definitions_ref_prefix: String,
    /// Raw definition names that are never emitted.
    pub ignored_definitions: Vec<String>,
    /// `verb:/url` -> method name. An empty name skips the endpoint.
    pub method_overrides: BTreeMap<String, String>,
    /// Operations carrying any of these tags are skipped.
    pub ignored_tags: Vec<String>,
    /// Property names exempt from the naming-convention check.
    pub allowed_property_names: Vec<String>,
    /// Status codes that contribute to the return type.
    pub success_codes: Vec<u16>,
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            definitions_ref_prefix: DEFAULT_DEFINITIONS_REF_PREFIX.to_string(),
            ignored_definitions: Vec::new(),
            method_overrides: BTreeMap::new(),
            ignored_tags: Vec::new(),
            allowed_property_names: Vec::new(),
            success_codes: DEFAULT_SUCCESS_CODES.to_vec(),
        }
    }
}

impl Policy {
    /// Parse a policy table from TOML text.
    pub fn from_toml_str(text: &str) -> GenerateResult<Self> {
        toml::from_str(text).map_err(GenerateError::InvalidPolicy)
    }

    /// Look up the override for an endpoint.
    ///
    /// `Some("")` means the endpoint is explicitly skipped.
    pub fn method_override(&self, method: &str, url: &str) -> Option<&str> {
        let key = format!("{}:{url}", method.to_lowercase());
        self.method_overrides.get(&key).map(String::as_str)
    }

    /// Whether a raw definition name is left out.
    pub fn is_ignored_definition(&self, name: &str) -> bool {
        self.ignored_definitions.iter().any(|d| d == name)
    }

    /// Whether a tag disables its operations.
    pub fn is_ignored_tag(&self, tag: &str) -> bool {
        self.ignored_tags.iter().any(|t| t == tag)
    }

    /// Whether a property name skips the naming-convention check.
    pub fn is_allowed_property(&self, name: &str) -> bool {
        self.allowed_property_names.iter().any(|p| p == name)
    }

    /// Whether a status code contributes to the return type.
    pub fn is_success_code(&self, code: u16) -> bool {
        self.success_codes.contains(&code)
    }
}

/// Everything the generator needs besides the document itself.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Name of the emitted abstract client class.
    pub class_name: String,
    /// Prefix prepended to every interface name.
    pub interface_prefix: String,
    /// Timestamp written into the banner.
    pub build_date: NaiveDateTime,
    /// Static generation policy.
    pub policy: Policy,
}

impl GeneratorConfig {
    /// Default policy and a zero build date.
    pub fn new(class_name: impl Into<String>, interface_prefix: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            interface_prefix: interface_prefix.into(),
            build_date: NaiveDateTime::default(),
            policy: Policy::default(),
        }
    }

    /// Replace the banner timestamp.
    pub fn with_build_date(mut self, build_date: NaiveDateTime) -> Self {
        self.build_date = build_date;
        self
    }

    /// Replace the policy table.
    pub fn with_policy(mut self, policy: Policy) -> Self {
        self.policy = policy;
        self
    }

    /// Parse a banner build date in `YYYY-MM-DD HH:MM:SS` form.
    pub fn parse_build_date(text: &str) -> Result<NaiveDateTime, chrono::ParseError> {
        NaiveDateTime::parse_from_str(text, BUILD_DATE_FORMAT)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_defaults() {
        let policy = Policy::default();
        assert_eq!(policy.definitions_ref_prefix, "#/definitions/");
        assert_eq!(policy.success_codes, vec![200, 201, 202]);
        assert!(policy.method_overrides.is_empty());
    }

    #[test]
    fn test_policy_from_toml() {
        let policy = Policy::from_toml_str(
            r#"
ignored-definitions = ["Throwable"]
ignored-tags = ["Legacy"]
allowed-property-names = ["MSINumber"]

[method-overrides]
"post:/login" = "__login"
"get:/websocket/{id}" = ""
"#,
        )
        .unwrap();

        assert!(policy.is_ignored_definition("Throwable"));
        assert!(policy.is_ignored_tag("Legacy"));
        assert!(policy.is_allowed_property("MSINumber"));
        assert_eq!(policy.method_override("POST", "/login"), Some("__login"));
        assert_eq!(policy.method_override("get", "/websocket/{id}"), Some(""));
        assert_eq!(policy.method_override("get", "/login"), None);
        // omitted keys keep their defaults
        assert_eq!(policy.definitions_ref_prefix, "#/definitions/");
        assert!(policy.is_success_code(201));
    }

    #[test]
    fn test_bundled_policy_files() {
        let default = Policy::from_toml_str(include_str!("../../../config/default.toml")).unwrap();
        assert_eq!(default, Policy::default());

        let tyrion = Policy::from_toml_str(include_str!("../../../config/tyrion.toml")).unwrap();
        assert!(tyrion.is_ignored_definition("StackTraceElement"));
        assert!(tyrion.is_ignored_tag("P&G"));
        assert_eq!(tyrion.method_override("get", "/github/{return_link}"), Some("__loginGitHub"));
        assert_eq!(
            tyrion.method_override("post", "/secure/rest_api_token_validation"),
            Some("")
        );
    }

    #[test]
    fn test_policy_rejects_unknown_keys() {
        let err = Policy::from_toml_str("ignored-definition = []").unwrap_err();
        assert!(matches!(err, GenerateError::InvalidPolicy(_)));
    }

    #[test]
    fn test_parse_build_date() {
        let date = GeneratorConfig::parse_build_date("2024-03-01 08:15:00").unwrap();
        assert_eq!(date.format(BUILD_DATE_FORMAT).to_string(), "2024-03-01 08:15:00");
        assert!(GeneratorConfig::parse_build_date("yesterday").is_err());
    }
}
