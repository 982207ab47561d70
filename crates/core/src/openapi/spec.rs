//! Swagger (OpenAPI v2) document structs for serde deserialization.
//!
//! Only the subset the generator reads is modelled; unknown keys are ignored.
//! The document is parsed once and never mutated.

use std::collections::HashMap;
use std::fmt;

use indexmap::IndexMap;
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

use crate::error::{GenerateError, GenerateResult};

/// Root Swagger document.
#[derive(Debug, Deserialize)]
pub struct SwaggerSpec {
    /// Document metadata.
    pub info: Info,
    /// Named schemas under `definitions`.
    #[serde(default)]
    pub definitions: Definitions,
    /// URL template -> path item, in document order.
    #[serde(default)]
    pub paths: IndexMap<String, PathItem>,
}

/// The `info` block.
#[derive(Debug, Deserialize)]
pub struct Info {
    /// API version shown in the banner.
    pub version: String,
}

/// Named definitions in document order.
///
/// Duplicate JSON keys are kept rather than collapsed so the caller can
/// reject them.
#[derive(Debug, Default)]
pub struct Definitions(Vec<(String, Schema)>);

impl Definitions {
    /// Entries in document order, duplicates included.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Schema)> {
        self.0.iter().map(|(name, schema)| (name.as_str(), schema))
    }

    /// Number of entries, duplicates included.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the document has no definitions.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'de> Deserialize<'de> for Definitions {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct DefinitionsVisitor;

        impl<'de> Visitor<'de> for DefinitionsVisitor {
            type Value = Definitions;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of definition names to schemas")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(entry) = map.next_entry::<String, Schema>()? {
                    entries.push(entry);
                }
                Ok(Definitions(entries))
            }
        }

        deserializer.deserialize_map(DefinitionsVisitor)
    }
}

/// A path item: shared parameters plus one entry per HTTP verb.
#[derive(Debug, Deserialize)]
pub struct PathItem {
    /// Parameters shared by every operation under this path.
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    /// Remaining keys: HTTP verbs and vendor extensions, in document order.
    #[serde(flatten)]
    pub entries: IndexMap<String, serde_json::Value>,
}

/// An API operation (one verb on one URL).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    /// Source of the derived method name.
    pub summary: Option<String>,
    /// Long description.
    pub description: Option<String>,
    /// `operationId`, documented only.
    pub operation_id: Option<String>,
    /// Tags, matched against the ignored-tag policy.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Operation-level parameters.
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    /// Status code -> response, in document order.
    #[serde(default)]
    pub responses: IndexMap<String, Response>,
}

impl Operation {
    /// Read an operation out of a raw path-item entry.
    pub fn from_value(method: &str, url: &str, value: &serde_json::Value) -> GenerateResult<Self> {
        Self::deserialize(value).map_err(|source| GenerateError::MalformedOperation {
            method: method.to_string(),
            url: url.to_string(),
            source,
        })
    }
}

/// An operation parameter.
///
/// A `{ "$ref": "#/parameters/..." }` entry has neither `name` nor `in`;
/// both are left empty and the parameter never reaches a signature.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Parameter {
    /// Argument name in the generated method.
    #[serde(default)]
    pub name: String,
    /// `path`, `query`, `body`, `formData` or `header`.
    #[serde(default, rename = "in")]
    pub location: String,
    /// `None` when the document leaves it out.
    pub required: Option<bool>,
    /// Text for the `@param` doc line.
    pub description: Option<String>,
    /// Swagger primitive type of a non-body parameter.
    #[serde(rename = "type")]
    pub param_type: Option<String>,
    /// Format qualifier such as `int64`.
    pub format: Option<String>,
    /// Element schema of an `array` parameter.
    pub items: Option<Box<Schema>>,
    /// Reference to a shared parameter or a definition.
    #[serde(rename = "$ref")]
    pub ref_path: Option<String>,
    /// Body parameters carry their type here.
    pub schema: Option<Schema>,
    /// Allowed values of a string parameter.
    #[serde(rename = "enum")]
    pub enum_values: Option<Vec<EnumValue>>,
}

/// A response entry.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Response {
    /// Text for the `@returns`/`@throws` line.
    pub description: Option<String>,
    /// Body schema.
    pub schema: Option<Schema>,
    /// Direct reference to a definition.
    #[serde(rename = "$ref")]
    pub ref_path: Option<String>,
}

/// JSON Schema subset used by Swagger definitions.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
    /// `type`; definitions must be `object`.
    #[serde(rename = "type")]
    pub schema_type: Option<String>,

    /// `$ref` to another definition.
    #[serde(rename = "$ref")]
    pub ref_path: Option<String>,

    /// Object properties; emitted in sorted key order.
    pub properties: Option<HashMap<String, Schema>>,

    /// Names of required properties.
    #[serde(default)]
    pub required: Vec<String>,

    /// Element schema of an `array`.
    pub items: Option<Box<Schema>>,

    /// Allowed values of a string schema.
    #[serde(rename = "enum")]
    pub enum_values: Option<Vec<EnumValue>>,

    // --- Documentation passed through to the generated comments ---
    /// `@description`
    pub description: Option<String>,
    /// `@example`
    pub example: Option<serde_json::Value>,
    /// `@format`
    pub format: Option<String>,
    /// `@default`
    pub default: Option<serde_json::Value>,
    /// `@readonly`
    pub read_only: Option<bool>,
}

/// Enum value can be string, integer, float, boolean, or null.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum EnumValue {
    /// A string member; the only kind that becomes a literal type.
    String(String),
    /// An integer member.
    Integer(i64),
    /// A non-integer number.
    Float(f64),
    /// `true` or `false`.
    Bool(bool),
    /// `null`
    Null,
}

impl fmt::Display for EnumValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnumValue::String(s) => f.write_str(s),
            EnumValue::Integer(n) => write!(f, "{n}"),
            EnumValue::Float(n) => write!(f, "{n}"),
            EnumValue::Bool(b) => write!(f, "{b}"),
            EnumValue::Null => f.write_str("null"),
        }
    }
}

/// Any document fragment a type can be resolved from.
#[derive(Debug, Clone, Copy)]
pub enum Fragment<'a> {
    /// A definition, property or `items` schema.
    Schema(&'a Schema),
    /// An operation parameter.
    Parameter(&'a Parameter),
    /// A response entry.
    Response(&'a Response),
}

impl<'a> Fragment<'a> {
    /// Declared `type`; responses carry theirs in `schema`.
    pub fn type_name(self) -> Option<&'a str> {
        match self {
            Fragment::Schema(s) => s.schema_type.as_deref(),
            Fragment::Parameter(p) => p.param_type.as_deref(),
            Fragment::Response(_) => None,
        }
    }

    /// Element schema of an array.
    pub fn items(self) -> Option<&'a Schema> {
        match self {
            Fragment::Schema(s) => s.items.as_deref(),
            Fragment::Parameter(p) => p.items.as_deref(),
            Fragment::Response(_) => None,
        }
    }

    /// Direct `$ref`.
    pub fn ref_path(self) -> Option<&'a str> {
        match self {
            Fragment::Schema(s) => s.ref_path.as_deref(),
            Fragment::Parameter(p) => p.ref_path.as_deref(),
            Fragment::Response(r) => r.ref_path.as_deref(),
        }
    }

    /// Nested `schema` of a body parameter or response.
    pub fn schema(self) -> Option<&'a Schema> {
        match self {
            Fragment::Schema(_) => None,
            Fragment::Parameter(p) => p.schema.as_ref(),
            Fragment::Response(r) => r.schema.as_ref(),
        }
    }

    /// Declared enum values.
    pub fn enum_values(self) -> Option<&'a [EnumValue]> {
        match self {
            Fragment::Schema(s) => s.enum_values.as_deref(),
            Fragment::Parameter(p) => p.enum_values.as_deref(),
            Fragment::Response(_) => None,
        }
    }
}

impl SwaggerSpec {
    /// Parse a Swagger document from a JSON string.
    pub fn from_json(json: &str) -> GenerateResult<Self> {
        serde_json::from_str(json).map_err(GenerateError::MalformedDocument)
    }
}
