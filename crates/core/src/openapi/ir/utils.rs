//! Common utilities for TypeScript code generation.
//!
//! This module provides shared helper functions used across normalization and printing.

/// Check if an identifier needs quoting when used as a property key.
///
/// Returns true if the name:
/// - Is empty
/// - Doesn't start with a letter, underscore, or dollar sign
/// - Contains characters other than alphanumeric, underscore, or dollar sign
pub fn needs_bracket_notation(name: &str) -> bool {
    name.is_empty()
        || !name
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$')
        || !name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// Escape a string for use in JavaScript/TypeScript string literals.
/// Escapes backslashes and double quotes.
pub fn escape_js_string(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Quote a string if needed for use as a property key.
/// Returns the name quoted with escaped special characters if needed,
/// or the original name if it's a valid identifier.
pub fn quote_if_needed(name: &str) -> String {
    if needs_bracket_notation(name) {
        format!("\"{}\"", escape_js_string(name))
    } else {
        name.to_string()
    }
}

/// Capitalize the first letter of a string.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}

/// Lower-case the first letter of a string.
pub fn lowercase_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_lowercase().chain(chars).collect(),
    }
}

/// Turn a raw definition name into an interface name.
///
/// Spaces become underscores and apostrophes are dropped, then every
/// underscore-delimited segment is capitalized and the prefix prepended.
/// `boolean` is returned untouched so it never shadows the primitive.
pub fn validate_def_name(name: &str, prefix: &str) -> String {
    let cleaned = name.replace(' ', "_").replace('\'', "");
    if cleaned == "boolean" {
        return cleaned;
    }
    let pascal: String = cleaned.split('_').map(capitalize_first).collect();
    format!("{prefix}{pascal}")
}

/// Property names are expected to be `snake_case`: `a-z`, `0-9` and `_`.
pub fn is_conventional_property_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}

/// Render a documentation value such as `example` or `default`.
///
/// Empty strings, `0`, `false` and `null` carry no information and yield
/// `None`; structured values are rendered as compact JSON.
pub fn doc_value(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::Null | serde_json::Value::Bool(false) => None,
        serde_json::Value::Bool(true) => Some("true".to_string()),
        serde_json::Value::Number(n) => {
            if n.as_f64() == Some(0.0) {
                None
            } else {
                Some(n.to_string())
            }
        }
        serde_json::Value::String(s) if s.is_empty() => None,
        serde_json::Value::String(s) => Some(s.clone()),
        serde_json::Value::Array(_) | serde_json::Value::Object(_) => Some(value.to_string()),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_needs_bracket_notation() {
        // Valid identifiers
        assert!(!needs_bracket_notation("foo"));
        assert!(!needs_bracket_notation("_foo"));
        assert!(!needs_bracket_notation("$foo"));
        assert!(!needs_bracket_notation("foo123"));

        // Need quoting
        assert!(needs_bracket_notation(""));
        assert!(needs_bracket_notation("123foo"));
        assert!(needs_bracket_notation("foo-bar"));
        assert!(needs_bracket_notation("foo bar"));
    }

    #[test]
    fn test_escape_js_string() {
        assert_eq!(escape_js_string("hello"), "hello");
        assert_eq!(escape_js_string("hel\"lo"), "hel\\\"lo");
        assert_eq!(escape_js_string("hel\\lo"), "hel\\\\lo");
    }

    #[test]
    fn test_quote_if_needed() {
        assert_eq!(quote_if_needed("foo"), "foo");
        assert_eq!(quote_if_needed("foo bar"), "\"foo bar\"");
        assert_eq!(quote_if_needed("123"), "\"123\"");
    }

    #[test]
    fn test_capitalize_and_lowercase_first() {
        assert_eq!(capitalize_first("foo"), "Foo");
        assert_eq!(capitalize_first(""), "");
        assert_eq!(capitalize_first("ABC"), "ABC");
        assert_eq!(lowercase_first("WidgetGet"), "widgetGet");
        assert_eq!(lowercase_first(""), "");
    }

    #[test]
    fn test_validate_def_name() {
        assert_eq!(validate_def_name("foo_bar", "I"), "IFooBar");
        assert_eq!(validate_def_name("Widget", "I"), "IWidget");
        assert_eq!(validate_def_name("grid widget", "I"), "IGridWidget");
        assert_eq!(validate_def_name("user's_role", ""), "UsersRole");
        assert_eq!(validate_def_name("already_Pascal_Case", "X"), "XAlreadyPascalCase");
    }

    #[test]
    fn test_validate_def_name_keeps_boolean() {
        assert_eq!(validate_def_name("boolean", "I"), "boolean");
        assert_eq!(validate_def_name("boolean", ""), "boolean");
        assert_eq!(validate_def_name("Boolean", "I"), "IBoolean");
    }

    #[test]
    fn test_is_conventional_property_name() {
        assert!(is_conventional_property_name("name"));
        assert!(is_conventional_property_name("created_at_2"));
        assert!(!is_conventional_property_name("createdAt"));
        assert!(!is_conventional_property_name("has space"));
        assert!(!is_conventional_property_name("kebab-case"));
        assert!(!is_conventional_property_name(""));
    }

    #[test]
    fn test_doc_value() {
        assert_eq!(doc_value(&json!("Bob")), Some("Bob".into()));
        assert_eq!(doc_value(&json!(42)), Some("42".into()));
        assert_eq!(doc_value(&json!(true)), Some("true".into()));
        assert_eq!(doc_value(&json!(["a", "b"])), Some("[\"a\",\"b\"]".into()));
        assert_eq!(doc_value(&json!("")), None);
        assert_eq!(doc_value(&json!(0)), None);
        assert_eq!(doc_value(&json!(false)), None);
        assert_eq!(doc_value(&json!(null)), None);
    }
}
