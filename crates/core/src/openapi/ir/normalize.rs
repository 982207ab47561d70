//! Normalization from the Swagger document to API IR.
//!
//! Definitions and operations are each handled in two passes: the first
//! collects and validates the complete name set, the second resolves types
//! from that validated set. Uniqueness is settled before anything is built.

use std::collections::{BTreeMap, HashSet};

use tracing::{debug, info, warn};

use crate::config::GeneratorConfig;
use crate::diagnostics::{DiagnosticKind, Diagnostics};
use crate::error::{GenerateError, GenerateResult};
use crate::openapi::spec::{Fragment, Operation, Parameter, Schema, SwaggerSpec};

use super::api::{
    ApiIR, DefinitionIR, ErrorResponseIR, FieldIR, HttpMethod, OperationIR, ParamIR,
    ParamLocation, Payload, ResponseIR, StatusCode, UrlIR,
};
use super::naming::make_readable_method_name;
use super::resolve::solve_type;
use super::types::TsType;
use super::utils::{doc_value, is_conventional_property_name, validate_def_name};

/// Normalize a Swagger document into API IR.
///
/// Non-fatal findings are raised on `diagnostics`; anything fatal returns
/// an error before the IR is complete.
pub fn normalize_spec(
    spec: &SwaggerSpec,
    config: &GeneratorConfig,
    diagnostics: &mut Diagnostics,
) -> GenerateResult<ApiIR> {
    let definitions = normalize_definitions(spec, config, diagnostics)?;
    let (operations, skipped) = normalize_operations(spec, config, diagnostics)?;

    Ok(ApiIR {
        api_version: spec.info.version.clone(),
        definitions,
        operations,
        skipped,
    })
}

// =============================================================================
// Definitions
// =============================================================================

/// A definition that passed the name checks.
struct AcceptedDefinition<'a> {
    raw_name: &'a str,
    name: String,
    schema: &'a Schema,
}

fn normalize_definitions(
    spec: &SwaggerSpec,
    config: &GeneratorConfig,
    diagnostics: &mut Diagnostics,
) -> GenerateResult<Vec<DefinitionIR>> {
    let accepted = collect_definitions(spec, config)?;
    accepted
        .iter()
        .map(|def| normalize_definition(def, config, diagnostics))
        .collect()
}

/// First pass: sanitize every name and reject duplicates.
fn collect_definitions<'a>(
    spec: &'a SwaggerSpec,
    config: &GeneratorConfig,
) -> GenerateResult<Vec<AcceptedDefinition<'a>>> {
    let mut accepted: Vec<AcceptedDefinition<'a>> = Vec::with_capacity(spec.definitions.len());
    let mut used_names = HashSet::new();

    for (raw_name, schema) in spec.definitions.iter() {
        let name = validate_def_name(raw_name, &config.interface_prefix);

        if accepted.iter().any(|def| def.raw_name == raw_name) {
            return Err(GenerateError::DuplicateDefinition(raw_name.to_string()));
        }
        if used_names.contains(&name) {
            return Err(GenerateError::DuplicateValidatedDefinition {
                definition: raw_name.to_string(),
                validated: name,
            });
        }
        if config.policy.is_ignored_definition(raw_name) {
            info!(definition = %raw_name, "ignoring definition listed in policy");
            continue;
        }

        used_names.insert(name.clone());
        accepted.push(AcceptedDefinition {
            raw_name,
            name,
            schema,
        });
    }

    accepted.sort_by(|a, b| a.raw_name.cmp(b.raw_name));
    Ok(accepted)
}

/// Second pass: resolve the fields of one definition.
fn normalize_definition(
    def: &AcceptedDefinition<'_>,
    config: &GeneratorConfig,
    diagnostics: &mut Diagnostics,
) -> GenerateResult<DefinitionIR> {
    debug!(definition = %def.raw_name, "generating interface");

    let schema = def.schema;
    if schema.schema_type.as_deref() != Some("object") {
        return Err(GenerateError::UnsupportedDefinitionType {
            definition: def.raw_name.to_string(),
            kind: schema
                .schema_type
                .clone()
                .unwrap_or_else(|| "undefined".to_string()),
        });
    }

    let description = schema
        .description
        .clone()
        .filter(|d| !d.is_empty())
        .unwrap_or_else(|| format!("Interface {} definition", def.name));

    let mut fields = Vec::new();
    match schema.properties.as_ref().filter(|p| !p.is_empty()) {
        Some(properties) => {
            let mut keys: Vec<&String> = properties.keys().collect();
            keys.sort();
            for key in keys {
                if let Some(property) = properties.get(key) {
                    fields.push(normalize_field(def, key, property, config, diagnostics)?);
                }
            }
        }
        None => info!(definition = %def.raw_name, "definition has no properties"),
    }

    Ok(DefinitionIR {
        name: def.name.clone(),
        description,
        fields,
    })
}

fn normalize_field(
    def: &AcceptedDefinition<'_>,
    key: &str,
    property: &Schema,
    config: &GeneratorConfig,
    diagnostics: &mut Diagnostics,
) -> GenerateResult<FieldIR> {
    let resolved = solve_type(Fragment::Schema(property), config).ok_or_else(|| {
        GenerateError::UnresolvedPropertyType {
            definition: def.raw_name.to_string(),
            property: key.to_string(),
        }
    })?;

    check_property_name(def.raw_name, key, config, diagnostics);

    Ok(FieldIR {
        name: key.to_string(),
        ty: resolved.ty,
        required: def.schema.required.iter().any(|r| r == key),
        description: property.description.clone().filter(|d| !d.is_empty()),
        example: property.example.as_ref().and_then(doc_value),
        format: resolved
            .format_hint
            .map(str::to_string)
            .or_else(|| property.format.clone())
            .filter(|f| !f.is_empty()),
        default: property.default.as_ref().and_then(doc_value),
        read_only: property.read_only == Some(true),
    })
}

fn check_property_name(
    definition: &str,
    key: &str,
    config: &GeneratorConfig,
    diagnostics: &mut Diagnostics,
) {
    if key.chars().any(char::is_whitespace) {
        diagnostics.raise(
            DiagnosticKind::PropertyNameWhitespace,
            format!("Property name \"{key}\" of definition \"{definition}\" contains whitespace"),
        );
    }

    if !is_conventional_property_name(key) {
        if config.policy.is_allowed_property(key) {
            info!(%definition, property = %key, "property name allowed by policy");
        } else {
            diagnostics.raise(
                DiagnosticKind::PropertyNameConvention,
                format!(
                    "Property name \"{key}\" of definition \"{definition}\" is not made of a-z, 0-9 and _ only"
                ),
            );
        }
    }
}

// =============================================================================
// Operations
// =============================================================================

/// An endpoint that passed the skip and uniqueness checks.
struct AcceptedOperation<'a> {
    method: HttpMethod,
    url: &'a str,
    operation: Operation,
}

fn normalize_operations(
    spec: &SwaggerSpec,
    config: &GeneratorConfig,
    diagnostics: &mut Diagnostics,
) -> GenerateResult<(Vec<OperationIR>, Vec<String>)> {
    let (accepted, skipped) = collect_operations(spec, config)?;
    let operations = accepted
        .into_iter()
        .map(|(name, op)| normalize_operation(name, op, config, diagnostics))
        .collect::<GenerateResult<Vec<_>>>()?;
    Ok((operations, skipped))
}

/// First pass: derive names, apply skip policy, reject duplicates.
///
/// The map key is the method name, so iteration yields sorted order.
fn collect_operations<'a>(
    spec: &'a SwaggerSpec,
    config: &GeneratorConfig,
) -> GenerateResult<(BTreeMap<String, AcceptedOperation<'a>>, Vec<String>)> {
    let mut accepted = BTreeMap::new();
    let mut skipped = Vec::new();

    for (url, item) in &spec.paths {
        for (key, value) in &item.entries {
            let Some(method) = HttpMethod::from_key(key) else {
                debug!(%url, %key, "ignoring non-operation path item key");
                continue;
            };

            let mut operation = Operation::from_value(method.key(), url, value)?;
            merge_path_parameters(&mut operation, &item.parameters);

            let Some(name) =
                make_readable_method_name(method.key(), url, &operation, &config.policy)?
            else {
                warn!(method = method.key(), %url, "Skip generation method for endpoint");
                skipped.push(format!("{}:{url}", method.key()));
                continue;
            };

            if let Some(tag) = operation
                .tags
                .iter()
                .find(|tag| config.policy.is_ignored_tag(tag))
            {
                warn!(method = method.key(), %url, %tag, "Skip method with ignored tag");
                skipped.push(format!("{}:{url}", method.key()));
                continue;
            }

            if accepted.contains_key(&name) {
                return Err(GenerateError::DuplicateMethod {
                    name,
                    method: method.key().to_string(),
                    url: url.clone(),
                });
            }

            debug!(%name, method = method.key(), %url, "accepted method");
            accepted.insert(
                name,
                AcceptedOperation {
                    method,
                    url,
                    operation,
                },
            );
        }
    }

    Ok((accepted, skipped))
}

/// Apply path-level parameters; an operation parameter with the same name
/// and location wins.
fn merge_path_parameters(operation: &mut Operation, shared: &[Parameter]) {
    if shared.is_empty() {
        return;
    }
    let mut merged: Vec<Parameter> = shared
        .iter()
        .filter(|p| {
            !operation
                .parameters
                .iter()
                .any(|own| {
                    own.name == p.name && own.location == p.location && own.ref_path == p.ref_path
                })
        })
        .cloned()
        .collect();
    merged.append(&mut operation.parameters);
    operation.parameters = merged;
}

/// Second pass: classify parameters and responses of one operation.
fn normalize_operation(
    name: String,
    accepted: AcceptedOperation<'_>,
    config: &GeneratorConfig,
    diagnostics: &mut Diagnostics,
) -> GenerateResult<OperationIR> {
    let AcceptedOperation {
        method,
        url,
        operation,
    } = accepted;
    debug!(%name, method = method.key(), %url, "generating method");

    let params = classify_parameters(&name, &operation.parameters, config)?;

    let query_params: Vec<String> = params
        .iter()
        .filter(|p| p.location == ParamLocation::Query)
        .map(|p| p.name.clone())
        .collect();
    let form_fields: Vec<String> = params
        .iter()
        .filter(|p| p.location == ParamLocation::FormData)
        .map(|p| p.name.clone())
        .collect();
    let body = params.iter().find(|p| p.location == ParamLocation::Body);

    let payload = if !form_fields.is_empty() {
        Payload::FormData(form_fields)
    } else if let Some(body) = body {
        Payload::Json(body.name.clone())
    } else {
        Payload::Empty
    };

    let response = classify_responses(&name, method, url, &operation, config, diagnostics);

    Ok(OperationIR {
        url: UrlIR::parse(url, query_params),
        name,
        method,
        summary: operation.summary,
        description: operation.description,
        operation_id: operation.operation_id,
        tags: operation.tags,
        params,
        payload,
        response,
    })
}

/// Group parameters path, query, body, formData; declaration order is kept
/// inside each group. Other locations are not part of the signature.
fn classify_parameters(
    method_name: &str,
    parameters: &[Parameter],
    config: &GeneratorConfig,
) -> GenerateResult<Vec<ParamIR>> {
    let in_location = |location: &'static str| {
        parameters
            .iter()
            .filter(move |p| p.location == location)
    };
    let resolve = |param: &Parameter| {
        solve_type(Fragment::Parameter(param), config)
            .map(|r| r.ty)
            .ok_or_else(|| GenerateError::UnresolvedParameterType {
                method: method_name.to_string(),
                parameter: param.name.clone(),
            })
    };
    let param_ir = |param: &Parameter, ty: TsType, optional: bool, location: ParamLocation| ParamIR {
        name: param.name.clone(),
        ty,
        optional,
        location,
        description: param.description.clone().filter(|d| !d.is_empty()),
    };

    let mut params = Vec::with_capacity(parameters.len());

    for param in in_location("path") {
        let optional = param.required == Some(false);
        params.push(param_ir(param, resolve(param)?, optional, ParamLocation::Path));
    }

    for param in in_location("query") {
        params.push(param_ir(param, resolve(param)?, false, ParamLocation::Query));
    }

    let bodies: Vec<&Parameter> = in_location("body").collect();
    if bodies.len() > 1 {
        return Err(GenerateError::MultipleBodyParameters(method_name.to_string()));
    }
    for param in bodies {
        let optional = param.required != Some(true);
        params.push(param_ir(param, resolve(param)?, optional, ParamLocation::Body));
    }

    for param in in_location("formData") {
        let optional = param.required != Some(true);
        params.push(param_ir(param, TsType::form_field(), optional, ParamLocation::FormData));
    }

    for param in parameters {
        if !matches!(param.location.as_str(), "path" | "query" | "body" | "formData") {
            debug!(
                method = %method_name,
                parameter = %param.name,
                location = %param.location,
                reference = param.ref_path.as_deref().unwrap_or_default(),
                "parameter not part of the signature"
            );
        }
    }

    Ok(params)
}

fn classify_responses(
    method_name: &str,
    method: HttpMethod,
    url: &str,
    operation: &Operation,
    config: &GeneratorConfig,
    diagnostics: &mut Diagnostics,
) -> ResponseIR {
    let mut return_types: Vec<TsType> = Vec::new();
    let mut success_codes: Vec<u16> = Vec::new();
    let mut descriptions = Vec::new();
    let mut errors = Vec::new();

    for (key, response) in &operation.responses {
        let code = StatusCode::parse(key);
        let ty = solve_type(Fragment::Response(response), config).map(|r| r.ty);

        if ty.is_none() && !code.is_type_exempt() {
            diagnostics.raise(
                DiagnosticKind::MissingResponseType,
                format!(
                    "Missing type for response code {key} in method ({method_name}) [{}:{url}]",
                    method.key()
                ),
            );
        }

        let description = response.description.clone().filter(|d| !d.is_empty());
        match code {
            StatusCode::Numeric(n) if config.policy.is_success_code(n) => {
                if let Some(ty) = ty
                    && !return_types.contains(&ty)
                {
                    return_types.push(ty);
                }
                if !success_codes.contains(&n) {
                    success_codes.push(n);
                }
                descriptions.extend(description);
            }
            code => errors.push(ErrorResponseIR {
                code,
                ty,
                description,
            }),
        }
    }

    if success_codes.is_empty() {
        if !operation.responses.contains_key("303") {
            diagnostics.raise(
                DiagnosticKind::MissingOkResponse,
                format!(
                    "Missing ok response in method ({method_name}) [{}:{url}]",
                    method.key()
                ),
            );
        }
        success_codes.push(200);
    }
    if return_types.is_empty() {
        return_types.push(TsType::any());
    }

    ResponseIR {
        return_types,
        success_codes,
        descriptions,
        errors,
    }
}
