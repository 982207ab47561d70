//! Code generation from API IR to TypeScript AST.
//!
//! This module turns accepted definitions into documented interfaces and
//! accepted operations into methods of one abstract client class.
//!
//! The generated AST can then be emitted to strings via the `Emit` trait.

use crate::config::{BUILD_DATE_FORMAT, GeneratorConfig};

use super::api::{
    ApiIR, DefinitionIR, FieldIR, OperationIR, ParamIR, ParamLocation, Payload, ResponseIR,
    UrlIR, UrlPart,
};
use super::emit::Emit;
use super::types::{
    DocComment, TemplatePart, TsBanner, TsClass, TsExpr, TsInterface, TsLiteral, TsMethod,
    TsModule, TsParam, TsProp, TsStmt, TsType,
};

/// The transport hook every concrete client implements.
pub const REQUEST_HOOK: &str = "protected abstract requestRestPath<T>(method:string, path:string, body:Object, success:number[], contentType:string):Promise<T>;";

/// Generate a complete TypeScript module from API IR.
pub fn codegen_module(api: &ApiIR, config: &GeneratorConfig) -> TsModule {
    TsModule {
        banner: TsBanner {
            title: format!("Generated {} API client file", config.class_name),
            build_date: config.build_date.format(BUILD_DATE_FORMAT).to_string(),
            api_version: api.api_version.clone(),
        },
        interfaces: api.definitions.iter().map(codegen_interface).collect(),
        class: TsClass {
            name: config.class_name.clone(),
            abstract_members: vec![REQUEST_HOOK.to_string()],
            methods: api.operations.iter().map(codegen_method).collect(),
        },
    }
}

// =============================================================================
// Interfaces
// =============================================================================

fn codegen_interface(def: &DefinitionIR) -> TsInterface {
    let mut doc = DocComment::default();
    doc.line(format!("@name {}", def.name));
    doc.line(format!("@description: {}", def.description));

    TsInterface {
        name: def.name.clone(),
        doc,
        properties: def.fields.iter().map(codegen_prop).collect(),
    }
}

fn codegen_prop(field: &FieldIR) -> TsProp {
    let mut doc = DocComment::default();
    doc.line(format!("@name {}", field.name));
    doc.line(format!("@type {}", field.ty.emit()));
    if let Some(description) = &field.description {
        doc.line(format!("@description {description}"));
    }
    if let Some(example) = &field.example {
        doc.line(format!("@example {example}"));
    }
    if let Some(format) = &field.format {
        doc.line(format!("@format {format}"));
    }
    if let Some(default) = &field.default {
        doc.line(format!("@default {default}"));
    }
    if field.read_only {
        doc.line("@readonly");
    }
    if field.required {
        doc.line("@required");
    }

    TsProp {
        name: field.name.clone(),
        ty: field.ty.clone(),
        optional: !field.required,
        doc,
    }
}

// =============================================================================
// Methods
// =============================================================================

fn codegen_method(op: &OperationIR) -> TsMethod {
    TsMethod {
        name: op.name.clone(),
        doc: codegen_method_doc(op),
        params: op
            .params
            .iter()
            .map(|p| TsParam {
                name: p.name.clone(),
                ty: p.ty.clone(),
                optional: p.optional,
            })
            .collect(),
        return_type: TsType::Promise(Box::new(op.response.return_type())),
        body: codegen_method_body(op),
    }
}

fn codegen_method_doc(op: &OperationIR) -> DocComment {
    let mut doc = DocComment::default();
    doc.line(format!("@name {}", op.name));
    if let Some(summary) = &op.summary {
        doc.line(format!("@summary {summary}"));
    }
    if let Some(operation_id) = &op.operation_id {
        doc.line(format!("@operationId {operation_id}"));
    }
    if !op.tags.is_empty() {
        doc.line(format!("@tags {}", op.tags.join(", ")));
    }
    if let Some(description) = op.description.as_ref().filter(|d| !d.is_empty()) {
        doc.separator();
        doc.line(format!("@description {description}"));
    }

    doc.separator();
    for param in &op.params {
        doc.line(param_doc(param));
    }
    doc.separator();
    doc.line(returns_doc(&op.response));
    doc.separator();

    for error in &op.response.errors {
        let ty = error
            .ty
            .as_ref()
            .map(|t| format!("{{{}}} ", t.emit()))
            .unwrap_or_default();
        let description = error
            .description
            .as_ref()
            .map(|d| format!(" {d}"))
            .unwrap_or_default();
        doc.line(format!("@throws {ty}[code {}]{description}", error.code));
    }
    doc
}

fn param_doc(param: &ParamIR) -> String {
    // multipart fields are documented loosely
    let ty = match param.location {
        ParamLocation::FormData => "any".to_string(),
        _ => param.ty.emit(),
    };
    match &param.description {
        Some(description) => format!("@param {{{ty}}} {} - {description}", param.name),
        None => format!("@param {{{ty}}} {}", param.name),
    }
}

fn returns_doc(response: &ResponseIR) -> String {
    let types: Vec<_> = response.return_types.iter().map(|t| t.emit()).collect();
    let codes: Vec<_> = response.success_codes.iter().map(u16::to_string).collect();
    let mut line = format!("@returns {{{}}} [code {}]", types.join("|"), codes.join("|"));
    if !response.descriptions.is_empty() {
        line.push(' ');
        line.push_str(&response.descriptions.join("|"));
    }
    line
}

fn codegen_method_body(op: &OperationIR) -> Vec<TsStmt> {
    let mut body = Vec::new();

    for name in &op.url.query_params {
        body.push(TsStmt::Expr(TsExpr::Assign {
            target: Box::new(TsExpr::ident(name)),
            value: Box::new(TsExpr::call(
                TsExpr::ident("encodeURIComponent"),
                vec![TsExpr::ident(name)],
            )),
        }));
    }

    let payload = match &op.payload {
        Payload::Empty => TsExpr::EmptyObject,
        Payload::Json(name) => TsExpr::ident(name),
        Payload::FormData(fields) => {
            body.push(TsStmt::Const {
                name: "formData".into(),
                ty: TsType::Ref("FormData".into()),
                init: TsExpr::New {
                    callee: Box::new(TsExpr::ident("FormData")),
                    args: Vec::new(),
                },
            });
            for field in fields {
                body.push(TsStmt::Expr(TsExpr::call(
                    TsExpr::member(TsExpr::ident("formData"), "append"),
                    vec![
                        TsExpr::Literal(TsLiteral::SingleQuoted(field.clone())),
                        TsExpr::ident(field),
                    ],
                )));
            }
            TsExpr::ident("formData")
        }
    };

    let codes = op
        .response
        .success_codes
        .iter()
        .map(|c| TsExpr::Literal(TsLiteral::Int(i64::from(*c))))
        .collect();

    body.push(TsStmt::Return(TsExpr::call(
        TsExpr::member(TsExpr::ident("this"), "requestRestPath"),
        vec![
            TsExpr::Literal(TsLiteral::String(op.method.as_str().to_string())),
            TsExpr::Template(url_template(&op.url)),
            payload,
            TsExpr::Array(codes),
            TsExpr::Literal(TsLiteral::SingleQuoted(op.payload.content_type().to_string())),
        ],
    )));

    body
}

/// `/widget/{id}` with query `q` becomes `/widget/${id}?q=${q}`.
fn url_template(url: &UrlIR) -> Vec<TemplatePart> {
    let mut parts: Vec<TemplatePart> = url
        .template
        .iter()
        .map(|part| match part {
            UrlPart::Static(s) => TemplatePart::Static(s.clone()),
            UrlPart::Param(name) => TemplatePart::Dynamic(TsExpr::ident(name)),
        })
        .collect();

    for (i, name) in url.query_params.iter().enumerate() {
        let separator = if i == 0 { '?' } else { '&' };
        parts.push(TemplatePart::Static(format!("{separator}{name}=")));
        parts.push(TemplatePart::Dynamic(TsExpr::ident(name)));
    }
    parts
}
