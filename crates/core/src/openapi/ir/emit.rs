//! TypeScript code emission via the Emit trait.
//!
//! Each AST type implements `Emit`; block-level nodes additionally take an
//! indentation level (4 spaces per level). Emission is purely mechanical:
//! every naming and typing decision has already been made upstream.

use super::types::{
    DocComment, TemplatePart, TsBanner, TsClass, TsExpr, TsInterface, TsLiteral, TsMethod,
    TsModule, TsParam, TsPrimitive, TsProp, TsStmt, TsType,
};
use super::utils::{escape_js_string, quote_if_needed};

/// Trait for emitting TypeScript code from AST nodes.
pub trait Emit {
    /// Convert the AST node to its TypeScript string representation.
    fn emit(&self) -> String;
}

const INDENT: &str = "    ";

const BANNER_RULE: &str = "/**************************************************************/";
const BANNER_WIDTH: usize = 57;

fn indent(level: usize) -> String {
    INDENT.repeat(level)
}

// =============================================================================
// Types
// =============================================================================

impl Emit for TsPrimitive {
    fn emit(&self) -> String {
        match self {
            TsPrimitive::String => "string".to_string(),
            TsPrimitive::Number => "number".to_string(),
            TsPrimitive::Boolean => "boolean".to_string(),
            TsPrimitive::Any => "any".to_string(),
        }
    }
}

impl Emit for TsLiteral {
    fn emit(&self) -> String {
        match self {
            TsLiteral::String(s) => format!("\"{}\"", escape_js_string(s)),
            TsLiteral::SingleQuoted(s) => {
                format!("'{}'", s.replace('\\', "\\\\").replace('\'', "\\'"))
            }
            TsLiteral::Int(i) => i.to_string(),
        }
    }
}

impl Emit for TsType {
    fn emit(&self) -> String {
        match self {
            TsType::Primitive(p) => p.emit(),
            TsType::Array(inner) => {
                let inner_str = inner.emit();
                // Wrap plain unions in parentheses
                if matches!(**inner, TsType::Union(_)) {
                    format!("({inner_str})[]")
                } else {
                    format!("{inner_str}[]")
                }
            }
            TsType::Ref(name) => name.clone(),
            TsType::LiteralUnion(values) => {
                let literals: Vec<_> = values
                    .iter()
                    .map(|v| format!("\"{}\"", escape_js_string(v)))
                    .collect();
                format!("({})", literals.join("|"))
            }
            TsType::Union(types) => types.iter().map(|t| t.emit()).collect::<Vec<_>>().join("|"),
            TsType::Promise(inner) => format!("Promise<{}>", inner.emit()),
        }
    }
}

// =============================================================================
// Expressions
// =============================================================================

impl Emit for TsExpr {
    fn emit(&self) -> String {
        match self {
            TsExpr::Ident(name) => name.clone(),
            TsExpr::Literal(lit) => lit.emit(),
            TsExpr::Call { callee, args } => {
                let args_str = args.iter().map(|a| a.emit()).collect::<Vec<_>>().join(", ");
                format!("{}({})", callee.emit(), args_str)
            }
            TsExpr::Member { object, prop } => {
                format!("{}.{}", object.emit(), prop)
            }
            TsExpr::Template(parts) => {
                let content: String = parts
                    .iter()
                    .map(|p| match p {
                        TemplatePart::Static(s) => s.replace('`', "\\`"),
                        TemplatePart::Dynamic(e) => format!("${{{}}}", e.emit()),
                    })
                    .collect();
                format!("`{content}`")
            }
            TsExpr::New { callee, args } => {
                let args_str = args.iter().map(|a| a.emit()).collect::<Vec<_>>().join(", ");
                format!("new {}({})", callee.emit(), args_str)
            }
            TsExpr::Assign { target, value } => {
                format!("{} = {}", target.emit(), value.emit())
            }
            TsExpr::Array(items) => {
                let items_str = items.iter().map(|i| i.emit()).collect::<Vec<_>>().join(",");
                format!("[{items_str}]")
            }
            TsExpr::EmptyObject => "{}".to_string(),
        }
    }
}

impl Emit for TsParam {
    fn emit(&self) -> String {
        let opt = if self.optional { "?" } else { "" };
        format!("{}{}:{}", self.name, opt, self.ty.emit())
    }
}

// =============================================================================
// Statements
// =============================================================================

impl Emit for TsStmt {
    fn emit(&self) -> String {
        self.emit_indented(2)
    }
}

impl TsStmt {
    /// Emit with specified indentation level
    pub fn emit_indented(&self, level: usize) -> String {
        let prefix = indent(level);
        match self {
            TsStmt::Const { name, ty, init } => {
                format!("{prefix}const {name}: {} = {};\n", ty.emit(), init.emit())
            }
            TsStmt::Expr(expr) => format!("{prefix}{};\n", expr.emit()),
            TsStmt::Return(expr) => format!("{prefix}return {};\n", expr.emit()),
        }
    }
}

// =============================================================================
// Declarations
// =============================================================================

impl DocComment {
    /// Emit the block at the given indentation level.
    ///
    /// Embedded newlines continue on ` *    ` lines.
    pub fn emit_indented(&self, level: usize) -> String {
        let prefix = indent(level);
        let mut output = format!("{prefix}/**\n");
        for line in &self.lines {
            match line {
                Some(text) => {
                    let continuation = format!("\n{prefix} *    ");
                    let text = text.lines().collect::<Vec<_>>().join(&continuation);
                    output.push_str(&format!("{prefix} * {text}\n"));
                }
                None => output.push_str(&format!("{prefix} *\n")),
            }
        }
        output.push_str(&format!("{prefix} */\n"));
        output
    }
}

impl Emit for TsProp {
    fn emit(&self) -> String {
        let opt = if self.optional { "?" } else { "" };
        format!(
            "{}{INDENT}{}{opt}: {};\n",
            self.doc.emit_indented(1),
            quote_if_needed(&self.name),
            self.ty.emit()
        )
    }
}

impl Emit for TsInterface {
    fn emit(&self) -> String {
        let mut output = self.doc.emit_indented(0);
        output.push_str(&format!("export interface {} {{\n", self.name));
        for prop in &self.properties {
            output.push_str(&prop.emit());
        }
        output.push_str("}\n");
        output
    }
}

impl Emit for TsMethod {
    fn emit(&self) -> String {
        let params_str = self.params.iter().map(|p| p.emit()).collect::<Vec<_>>().join(", ");
        let mut output = self.doc.emit_indented(1);
        output.push_str(&format!(
            "{INDENT}public {}({params_str}):{} {{\n",
            self.name,
            self.return_type.emit()
        ));
        for stmt in &self.body {
            output.push_str(&stmt.emit_indented(2));
        }
        output.push_str(&format!("{INDENT}}}\n"));
        output
    }
}

impl Emit for TsClass {
    fn emit(&self) -> String {
        let mut output = format!("export abstract class {} {{\n\n", self.name);
        for member in &self.abstract_members {
            output.push_str(&format!("{INDENT}{member}\n\n"));
        }
        for method in &self.methods {
            output.push_str(&method.emit());
            output.push('\n');
        }
        output.push_str("}\n");
        output
    }
}

impl Emit for TsBanner {
    fn emit(&self) -> String {
        let blank = format!("/*{}*/", " ".repeat(BANNER_WIDTH + 3));
        let row = |text: &str| format!("/*   {text:<BANNER_WIDTH$}*/");
        [
            BANNER_RULE.to_string(),
            blank.clone(),
            row(&self.title),
            blank.clone(),
            row(&format!("Build date: {}", self.build_date)),
            row(&format!("API version: {}", self.api_version)),
            blank.clone(),
            row("Generated by automated script from Swagger JSON."),
            blank,
            BANNER_RULE.to_string(),
        ]
        .iter()
        .map(|line| format!("{line}\n"))
        .collect()
    }
}

// =============================================================================
// Module
// =============================================================================

impl Emit for TsModule {
    fn emit(&self) -> String {
        let mut output = self.banner.emit();
        output.push_str("\n/* tslint:disable */\n\n");

        for interface in &self.interfaces {
            output.push_str(&interface.emit());
            output.push_str("\n\n");
        }
        output.push_str("\n\n");

        output.push_str(&self.class.emit());
        output
    }
}

// =============================================================================
// Tests
// =============================================================================
