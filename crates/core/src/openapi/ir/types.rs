//! TypeScript IR types for code generation.
//!
//! This module defines the TypeScript side of the pipeline:
//! - TsType: type expressions (primitives, arrays, references, unions)
//! - TsExpr / TsStmt: the small expression and statement set used in
//!   generated method bodies
//! - TsInterface / TsClass / TsModule: the declarations of one output file

/// Reference to a TypeScript type expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TsType {
    /// Primitive types: string, number, boolean, any
    Primitive(TsPrimitive),
    /// Array type: T[]
    Array(Box<TsType>),
    /// Named reference to an interface or a global type: IWidget, Blob
    Ref(String),
    /// Union of string literals from an enum: ("A"|"B")
    LiteralUnion(Vec<String>),
    /// Plain union: A|B
    Union(Vec<TsType>),
    /// Promise<T>
    Promise(Box<TsType>),
}

impl TsType {
    /// `string`
    pub fn string() -> Self {
        TsType::Primitive(TsPrimitive::String)
    }

    /// `number`
    pub fn number() -> Self {
        TsType::Primitive(TsPrimitive::Number)
    }

    /// `boolean`
    pub fn boolean() -> Self {
        TsType::Primitive(TsPrimitive::Boolean)
    }

    /// `any`
    pub fn any() -> Self {
        TsType::Primitive(TsPrimitive::Any)
    }

    /// `string|Blob`, the argument type of multipart fields.
    pub fn form_field() -> Self {
        TsType::Union(vec![TsType::string(), TsType::Ref("Blob".into())])
    }

    /// Whether this is the `string` primitive.
    pub fn is_string(&self) -> bool {
        matches!(self, TsType::Primitive(TsPrimitive::String))
    }
}

/// TypeScript primitive types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TsPrimitive {
    /// `string`
    String,
    /// `number`
    Number,
    /// `boolean`
    Boolean,
    /// `any`
    Any,
}

/// TypeScript literal values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TsLiteral {
    /// "value"
    String(String),
    /// 'value'
    SingleQuoted(String),
    /// 42
    Int(i64),
}

/// TypeScript expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TsExpr {
    /// Identifier: foo
    Ident(String),
    /// Literal value: "bar", 42
    Literal(TsLiteral),
    /// Function call: foo(a, b)
    Call {
        /// Called expression
        callee: Box<TsExpr>,
        /// Arguments in order
        args: Vec<TsExpr>,
    },
    /// Member access: foo.bar
    Member {
        /// Accessed expression
        object: Box<TsExpr>,
        /// Property name
        prop: String,
    },
    /// Template literal: `${foo}/bar`
    Template(Vec<TemplatePart>),
    /// new FormData()
    New {
        /// Constructor expression
        callee: Box<TsExpr>,
        /// Arguments in order
        args: Vec<TsExpr>,
    },
    /// Assignment: a = b
    Assign {
        /// Assigned place
        target: Box<TsExpr>,
        /// Assigned value
        value: Box<TsExpr>,
    },
    /// Array literal: [a,b,c]
    Array(Vec<TsExpr>),
    /// Empty object literal: {}
    EmptyObject,
}

impl TsExpr {
    /// Identifier expression.
    pub fn ident(name: impl Into<String>) -> Self {
        TsExpr::Ident(name.into())
    }

    /// `callee(args)`
    pub fn call(callee: TsExpr, args: Vec<TsExpr>) -> Self {
        TsExpr::Call {
            callee: Box::new(callee),
            args,
        }
    }

    /// `object.prop`
    pub fn member(object: TsExpr, prop: impl Into<String>) -> Self {
        TsExpr::Member {
            object: Box::new(object),
            prop: prop.into(),
        }
    }
}

/// Template literal part
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplatePart {
    /// Static string part
    Static(String),
    /// Dynamic expression part: ${expr}
    Dynamic(TsExpr),
}

/// Statement in a method body
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TsStmt {
    /// `const name: ty = init;`
    Const {
        /// Bound name
        name: String,
        /// Declared type
        ty: TsType,
        /// Initializer
        init: TsExpr,
    },
    /// Expression statement
    Expr(TsExpr),
    /// Return statement
    Return(TsExpr),
}

/// A `/** ... */` block.
///
/// `None` entries are bare ` *` separator lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocComment {
    /// Tag lines and separators in output order.
    pub lines: Vec<Option<String>>,
}

impl DocComment {
    /// Append a text line.
    pub fn line(&mut self, text: impl Into<String>) {
        self.lines.push(Some(text.into()));
    }

    /// Append a bare ` *` line.
    pub fn separator(&mut self) {
        self.lines.push(None);
    }
}

/// Interface property
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TsProp {
    /// Key, quoted on emission when it is not an identifier
    pub name: String,
    /// Property type
    pub ty: TsType,
    /// Emitted as `name?:`
    pub optional: bool,
    /// Tag block above the property
    pub doc: DocComment,
}

/// `export interface Name { ... }`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TsInterface {
    /// Prefixed interface name
    pub name: String,
    /// Header block
    pub doc: DocComment,
    /// Properties in key order
    pub properties: Vec<TsProp>,
}

/// Method parameter: `name?:type`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TsParam {
    /// Argument name
    pub name: String,
    /// Argument type
    pub ty: TsType,
    /// Emitted as `name?:`
    pub optional: bool,
}

/// `public name(params):ReturnType { body }`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TsMethod {
    /// Method name
    pub name: String,
    /// Tag block above the method
    pub doc: DocComment,
    /// Parameters in signature order
    pub params: Vec<TsParam>,
    /// Declared return type, a `Promise`
    pub return_type: TsType,
    /// Body statements
    pub body: Vec<TsStmt>,
}

/// `export abstract class Name { ... }`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TsClass {
    /// Class name
    pub name: String,
    /// Abstract member declarations, emitted verbatim before the methods.
    pub abstract_members: Vec<String>,
    /// Methods in output order
    pub methods: Vec<TsMethod>,
}

/// Generated-file banner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TsBanner {
    /// First text row
    pub title: String,
    /// Formatted build timestamp
    pub build_date: String,
    /// `info.version` of the document
    pub api_version: String,
}

/// Complete TypeScript module
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TsModule {
    /// Leading comment block
    pub banner: TsBanner,
    /// Interfaces in output order
    pub interfaces: Vec<TsInterface>,
    /// The client class
    pub class: TsClass,
}
