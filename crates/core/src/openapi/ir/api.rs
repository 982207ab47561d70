//! API-level IR for normalized definitions and operations.
//!
//! This module defines the intermediate representation between the parsed
//! document and the TypeScript AST:
//! - DefinitionIR: one accepted definition with its resolved fields
//! - OperationIR: one accepted endpoint with classified parameters
//! - ResponseIR: success types and codes plus documented error responses

use std::fmt;

use super::types::TsType;

/// HTTP method
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum HttpMethod {
    /// GET
    Get,
    /// PUT
    Put,
    /// POST
    Post,
    /// DELETE
    Delete,
    /// OPTIONS
    Options,
    /// HEAD
    Head,
    /// PATCH
    Patch,
}

impl HttpMethod {
    /// Match a path-item key; anything else (`parameters`, `x-*`) is `None`.
    pub fn from_key(key: &str) -> Option<Self> {
        match key.to_ascii_lowercase().as_str() {
            "get" => Some(HttpMethod::Get),
            "put" => Some(HttpMethod::Put),
            "post" => Some(HttpMethod::Post),
            "delete" => Some(HttpMethod::Delete),
            "options" => Some(HttpMethod::Options),
            "head" => Some(HttpMethod::Head),
            "patch" => Some(HttpMethod::Patch),
            _ => None,
        }
    }

    /// Upper-case form sent to the transport hook.
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Put => "PUT",
            HttpMethod::Post => "POST",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Options => "OPTIONS",
            HttpMethod::Head => "HEAD",
            HttpMethod::Patch => "PATCH",
        }
    }

    /// Lower-case form used in override keys and messages.
    pub fn key(&self) -> &'static str {
        match self {
            HttpMethod::Get => "get",
            HttpMethod::Put => "put",
            HttpMethod::Post => "post",
            HttpMethod::Delete => "delete",
            HttpMethod::Options => "options",
            HttpMethod::Head => "head",
            HttpMethod::Patch => "patch",
        }
    }
}

/// Accepted definition, ready for codegen
#[derive(Debug, Clone)]
pub struct DefinitionIR {
    /// Sanitized interface name (e.g., "IGridWidget")
    pub name: String,
    /// Header description (falls back to a generated sentence)
    pub description: String,
    /// Fields sorted by key
    pub fields: Vec<FieldIR>,
}

/// One interface field
#[derive(Debug, Clone)]
pub struct FieldIR {
    /// Property key as written
    pub name: String,
    /// Resolved type
    pub ty: TsType,
    /// Listed in the definition's `required` array
    pub required: bool,
    /// Non-empty description
    pub description: Option<String>,
    /// Rendered `example` value
    pub example: Option<String>,
    /// Format hint or the declared `format`
    pub format: Option<String>,
    /// Rendered `default` value
    pub default: Option<String>,
    /// `readOnly: true`
    pub read_only: bool,
}

/// Parameter location
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamLocation {
    /// `in: path`
    Path,
    /// `in: query`
    Query,
    /// `in: body`
    Body,
    /// `in: formData`
    FormData,
}

/// Single method parameter
#[derive(Debug, Clone)]
pub struct ParamIR {
    /// Argument name
    pub name: String,
    /// Argument type; `string|Blob` for multipart fields
    pub ty: TsType,
    /// Emitted as `name?:`
    pub optional: bool,
    /// Where the value travels
    pub location: ParamLocation,
    /// Non-empty description for the `@param` line
    pub description: Option<String>,
}

/// URL template part
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UrlPart {
    /// Static string
    Static(String),
    /// Path placeholder interpolation
    Param(String),
}

/// URL construction IR
#[derive(Debug, Clone)]
pub struct UrlIR {
    /// URL template parts
    pub template: Vec<UrlPart>,
    /// Query parameter names appended as `?a=${a}&b=${b}`
    pub query_params: Vec<String>,
}

impl UrlIR {
    /// Split a URL template into static text and `{placeholder}` parts.
    pub fn parse(path: &str, query_params: Vec<String>) -> Self {
        let mut template = Vec::new();
        let mut rest = path;
        while let Some(start) = rest.find('{') {
            let Some(len) = rest[start..].find('}') else {
                break;
            };
            if start > 0 {
                template.push(UrlPart::Static(rest[..start].to_string()));
            }
            template.push(UrlPart::Param(rest[start + 1..start + len].to_string()));
            rest = &rest[start + len + 1..];
        }
        if !rest.is_empty() {
            template.push(UrlPart::Static(rest.to_string()));
        }
        Self {
            template,
            query_params,
        }
    }
}

/// Request payload of a method
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    /// No body: `{}` is sent
    Empty,
    /// The named body parameter, sent as JSON
    Json(String),
    /// A `FormData` built from the named fields
    FormData(Vec<String>),
}

impl Payload {
    /// Content type passed to the transport hook.
    pub fn content_type(&self) -> &'static str {
        match self {
            Payload::Empty | Payload::Json(_) => "application/json",
            Payload::FormData(_) => "multipart/form-data",
        }
    }
}

/// Response status key
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusCode {
    /// A numeric key such as `200`
    Numeric(u16),
    /// `default` or any other non-numeric key
    Other(String),
}

impl StatusCode {
    /// Classify a response key.
    pub fn parse(key: &str) -> Self {
        key.parse()
            .map_or_else(|_| StatusCode::Other(key.to_string()), StatusCode::Numeric)
    }

    /// 303 and 500 may omit a response type.
    pub fn is_type_exempt(&self) -> bool {
        matches!(self, StatusCode::Numeric(303 | 500))
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusCode::Numeric(code) => write!(f, "{code}"),
            StatusCode::Other(key) => f.write_str(key),
        }
    }
}

/// Documented non-success response
#[derive(Debug, Clone)]
pub struct ErrorResponseIR {
    /// Response key
    pub code: StatusCode,
    /// Resolved type, if any
    pub ty: Option<TsType>,
    /// Non-empty description
    pub description: Option<String>,
}

/// Response classification of an operation
#[derive(Debug, Clone)]
pub struct ResponseIR {
    /// Distinct success types, never empty (`any` when unknown)
    pub return_types: Vec<TsType>,
    /// Status codes the caller treats as success
    pub success_codes: Vec<u16>,
    /// Non-empty success descriptions
    pub descriptions: Vec<String>,
    /// Every other response, in document order
    pub errors: Vec<ErrorResponseIR>,
}

impl ResponseIR {
    /// The single return type, a union when several success types exist.
    pub fn return_type(&self) -> TsType {
        match self.return_types.as_slice() {
            [] => TsType::any(),
            [single] => single.clone(),
            many => TsType::Union(many.to_vec()),
        }
    }
}

/// Normalized API operation
#[derive(Debug, Clone)]
pub struct OperationIR {
    /// Derived, unique method name (e.g., "widgetGet")
    pub name: String,
    /// HTTP verb
    pub method: HttpMethod,
    /// `summary` as written
    pub summary: Option<String>,
    /// `description` as written
    pub description: Option<String>,
    /// `operationId` as written
    pub operation_id: Option<String>,
    /// `tags` as written
    pub tags: Vec<String>,
    /// Parameters grouped path, query, body, formData
    pub params: Vec<ParamIR>,
    /// Request URL built from the path template and query parameters
    pub url: UrlIR,
    /// Request body
    pub payload: Payload,
    /// Success and error responses
    pub response: ResponseIR,
}

/// Normalized API description
#[derive(Debug)]
pub struct ApiIR {
    /// `info.version` of the document
    pub api_version: String,
    /// Accepted definitions sorted by raw name
    pub definitions: Vec<DefinitionIR>,
    /// Accepted operations sorted by method name
    pub operations: Vec<OperationIR>,
    /// Skipped endpoints as `verb:url`
    pub skipped: Vec<String>,
}
