//! Type resolution from document fragments to TypeScript types.

use crate::config::GeneratorConfig;
use crate::openapi::spec::Fragment;

use super::types::TsType;
use super::utils::validate_def_name;

/// A resolved fragment type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedType {
    /// The TypeScript type.
    pub ty: TsType,
    /// Format implied by the source type (`integer` documents as `int32`).
    pub format_hint: Option<&'static str>,
}

impl ResolvedType {
    fn plain(ty: TsType) -> Self {
        Self {
            ty,
            format_hint: None,
        }
    }
}

/// Resolve the TypeScript type of a schema, parameter or response.
///
/// Policy, first match wins:
/// 1. primitive `type` (`integer` becomes `number`)
/// 2. `array` of resolvable `items`
/// 3. `$ref` under the definitions prefix, sanitized like a definition name
/// 4. nested `schema`
///
/// A plain `string` with an `enum` list becomes a union of string literals.
/// Returns `None` when nothing applies; the caller decides whether that is
/// fatal.
pub fn solve_type(fragment: Fragment<'_>, config: &GeneratorConfig) -> Option<ResolvedType> {
    let mut resolved = match fragment.type_name() {
        Some("string") => Some(ResolvedType::plain(TsType::string())),
        Some("boolean") => Some(ResolvedType::plain(TsType::boolean())),
        Some("number") => Some(ResolvedType::plain(TsType::number())),
        Some("integer") => Some(ResolvedType {
            ty: TsType::number(),
            format_hint: Some("int32"),
        }),
        Some("array") => fragment
            .items()
            .and_then(|items| solve_type(Fragment::Schema(items), config))
            .map(|item| ResolvedType::plain(TsType::Array(Box::new(item.ty)))),
        _ => None,
    };

    if resolved.is_none() {
        let prefix = config.policy.definitions_ref_prefix.as_str();
        resolved = fragment
            .ref_path()
            .and_then(|r| r.strip_prefix(prefix))
            .map(|name| {
                ResolvedType::plain(TsType::Ref(validate_def_name(
                    name,
                    &config.interface_prefix,
                )))
            });
    }

    if resolved.is_none() {
        resolved = fragment
            .schema()
            .and_then(|schema| solve_type(Fragment::Schema(schema), config));
    }

    if let Some(ResolvedType { ty, .. }) = resolved.as_mut()
        && ty.is_string()
        && let Some(values) = fragment.enum_values()
    {
        *ty = TsType::LiteralUnion(values.iter().map(ToString::to_string).collect());
    }

    resolved
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::openapi::ir::emit::Emit;
    use crate::openapi::spec::{Parameter, Response, Schema};

    fn config() -> GeneratorConfig {
        GeneratorConfig::new("ApiClient", "I")
    }

    fn schema(json: &str) -> Schema {
        serde_json::from_str(json).unwrap()
    }

    fn resolve_schema(json: &str) -> Option<String> {
        let schema = schema(json);
        solve_type(Fragment::Schema(&schema), &config()).map(|r| r.ty.emit())
    }

    #[test]
    fn test_primitives() {
        assert_eq!(resolve_schema(r#"{"type":"string"}"#).as_deref(), Some("string"));
        assert_eq!(resolve_schema(r#"{"type":"boolean"}"#).as_deref(), Some("boolean"));
        assert_eq!(resolve_schema(r#"{"type":"number"}"#).as_deref(), Some("number"));
    }

    #[test]
    fn test_integer_is_number_with_int32_hint() {
        let schema = schema(r#"{"type":"integer","format":"int64"}"#);
        let resolved = solve_type(Fragment::Schema(&schema), &config()).unwrap();
        assert_eq!(resolved.ty, TsType::number());
        assert_eq!(resolved.format_hint, Some("int32"));
    }

    #[test]
    fn test_arrays() {
        assert_eq!(
            resolve_schema(r#"{"type":"array","items":{"type":"string"}}"#).as_deref(),
            Some("string[]")
        );
        assert_eq!(
            resolve_schema(r##"{"type":"array","items":{"$ref":"#/definitions/Foo"}}"##).as_deref(),
            Some("IFoo[]")
        );
        assert_eq!(
            resolve_schema(r#"{"type":"array","items":{"type":"array","items":{"type":"integer"}}}"#)
                .as_deref(),
            Some("number[][]")
        );
    }

    #[test]
    fn test_unresolved_items_do_not_default_to_any() {
        assert_eq!(resolve_schema(r#"{"type":"array","items":{"type":"file"}}"#), None);
        assert_eq!(resolve_schema(r#"{"type":"array"}"#), None);
    }

    #[test]
    fn test_ref_is_sanitized() {
        assert_eq!(
            resolve_schema(r##"{"$ref":"#/definitions/grid_widget version"}"##).as_deref(),
            Some("IGridWidgetVersion")
        );
        // refs outside the definitions prefix are not resolved
        assert_eq!(resolve_schema(r##"{"$ref":"#/parameters/Foo"}"##), None);
    }

    #[test]
    fn test_custom_ref_prefix() {
        let mut config = config();
        config.policy.definitions_ref_prefix = "#/components/schemas/".into();
        let schema = schema(r##"{"$ref":"#/components/schemas/Foo"}"##);
        let resolved = solve_type(Fragment::Schema(&schema), &config).unwrap();
        assert_eq!(resolved.ty, TsType::Ref("IFoo".into()));
    }

    #[test]
    fn test_nested_schema_of_body_and_response() {
        let param: Parameter = serde_json::from_str(
            r##"{"name":"body","in":"body","schema":{"$ref":"#/definitions/Widget"}}"##,
        )
        .unwrap();
        let resolved = solve_type(Fragment::Parameter(&param), &config()).unwrap();
        assert_eq!(resolved.ty.emit(), "IWidget");

        let response: Response = serde_json::from_str(
            r#"{"description":"ok","schema":{"type":"array","items":{"type":"boolean"}}}"#,
        )
        .unwrap();
        let resolved = solve_type(Fragment::Response(&response), &config()).unwrap();
        assert_eq!(resolved.ty.emit(), "boolean[]");

        let empty: Response = serde_json::from_str(r#"{"description":"redirect"}"#).unwrap();
        assert!(solve_type(Fragment::Response(&empty), &config()).is_none());
    }

    #[test]
    fn test_string_enum_becomes_literal_union() {
        assert_eq!(
            resolve_schema(r#"{"type":"string","enum":["A","B"]}"#).as_deref(),
            Some("(\"A\"|\"B\")")
        );
        // only plain strings are overridden
        assert_eq!(
            resolve_schema(r#"{"type":"integer","enum":[1,2]}"#).as_deref(),
            Some("number")
        );
        assert_eq!(
            resolve_schema(r#"{"type":"array","items":{"type":"string","enum":["x"]}}"#).as_deref(),
            Some("(\"x\")[]")
        );
    }

    #[test]
    fn test_query_parameter_enum() {
        let param: Parameter = serde_json::from_str(
            r#"{"name":"state","in":"query","type":"string","enum":["on","off"]}"#,
        )
        .unwrap();
        let resolved = solve_type(Fragment::Parameter(&param), &config()).unwrap();
        assert_eq!(resolved.ty.emit(), "(\"on\"|\"off\")");
    }
}
