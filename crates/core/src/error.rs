//! Fatal generation errors.
//!
//! Every variant aborts the run before any output is written. Non-fatal
//! problems are counted in [`crate::Diagnostics`] instead.

use thiserror::Error;

/// A condition that stops generation immediately.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The input text is not a usable Swagger document.
    #[error("Failed to parse Swagger document: {0}")]
    MalformedDocument(#[source] serde_json::Error),

    /// An operation object under `paths` could not be read.
    #[error("Malformed operation {method}:{url}: {source}")]
    MalformedOperation {
        /// Lower-case verb.
        method: String,
        /// URL template.
        url: String,
        /// Deserialization failure.
        #[source]
        source: serde_json::Error,
    },

    /// The policy table could not be read.
    #[error("Invalid policy configuration: {0}")]
    InvalidPolicy(#[source] toml::de::Error),

    /// A definition is not an object schema.
    #[error("Unknown type of definition ({kind}) for definition \"{definition}\"")]
    UnsupportedDefinitionType {
        /// Raw definition name.
        definition: String,
        /// Declared type, `undefined` when absent.
        kind: String,
    },

    /// The same raw definition name occurs twice.
    #[error("Duplicate definition name ({0})")]
    DuplicateDefinition(String),

    /// Two raw definition names sanitize to the same interface name.
    #[error("Duplicate validated definition name ({validated}) for definition \"{definition}\"")]
    DuplicateValidatedDefinition {
        /// Raw name of the later definition.
        definition: String,
        /// The colliding interface name.
        validated: String,
    },

    /// A definition property has no resolvable type.
    #[error("Missing type for key {property} in definition ({definition})")]
    UnresolvedPropertyType {
        /// Raw definition name.
        definition: String,
        /// Property key.
        property: String,
    },

    /// A path, query or body parameter has no resolvable type.
    #[error("Missing type for key {parameter} in method ({method})")]
    UnresolvedParameterType {
        /// Derived method name.
        method: String,
        /// Parameter name.
        parameter: String,
    },

    /// An operation declares more than one `in: body` parameter.
    #[error("More than 1 body method ({0})")]
    MultipleBodyParameters(String),

    /// Two accepted operations derive the same method name.
    #[error("Duplicate name of method \"{name}\" ({method}:{url})")]
    DuplicateMethod {
        /// The colliding method name.
        name: String,
        /// Lower-case verb of the later endpoint.
        method: String,
        /// URL of the later endpoint.
        url: String,
    },

    /// The summary does not yield a verb-like and an object-like token.
    #[error(
        "Missing first or second token in summary \"{summary}\" (something like Get_ Set_ Add_ Delete_) for URL: {method}:{url}, first prefix: {first:?}, second prefix: {second:?}"
    )]
    MissingNamePrefix {
        /// Lower-case verb.
        method: String,
        /// URL template.
        url: String,
        /// The summary as written.
        summary: String,
        /// First cleaned token, if any.
        first: Option<String>,
        /// Second cleaned token, if any.
        second: Option<String>,
    },
}

/// Result alias used across the crate.
pub type GenerateResult<T> = Result<T, GenerateError>;

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_offender() {
        let err = GenerateError::MultipleBodyParameters("widgetCreate".into());
        assert_eq!(err.to_string(), "More than 1 body method (widgetCreate)");

        let err = GenerateError::DuplicateMethod {
            name: "widgetGet".into(),
            method: "get".into(),
            url: "/widget/{id}".into(),
        };
        assert_eq!(
            err.to_string(),
            "Duplicate name of method \"widgetGet\" (get:/widget/{id})"
        );
    }

    #[test]
    fn test_malformed_document_keeps_source() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = GenerateError::MalformedDocument(source);
        assert!(std::error::Error::source(&err).is_some());
    }
}
