//! Validated Thrift AST consumed by the Rust backend.
//!
//! This module defines the schema document representation:
//! - Program: one schema document with its top-level declarations
//! - TypeNode: the closed Thrift type system
//! - EnumDef, TypedefDef, StructDef, ServiceDef: top-level declarations
//!
//! The AST is produced and validated upstream (parser and semantic
//! analyzer). The backend treats it as read-only input: alias chains are
//! acyclic and service extension chains are strictly linear single-parent
//! links. Constants are recognized upstream but have no representation
//! here because this backend never emits them.

use serde::{Deserialize, Serialize};

/// One schema document: the unit of generation.
///
/// Collections keep the original declaration order; structs and exceptions
/// are interleaved in `structs` exactly as declared.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Program {
    /// Document name (e.g. "tutorial" for tutorial.thrift).
    pub name: String,
    #[serde(default)]
    pub enums: Vec<EnumDef>,
    #[serde(default)]
    pub typedefs: Vec<TypedefDef>,
    #[serde(default)]
    pub structs: Vec<StructDef>,
    #[serde(default)]
    pub services: Vec<ServiceDef>,
}

impl Program {
    /// Look up a typedef declaration by its symbolic name.
    pub fn typedef(&self, name: &str) -> Option<&TypedefDef> {
        self.typedefs.iter().find(|td| td.name == name)
    }
}

/// A Thrift type expression.
///
/// The variant set is closed by construction: every backend matches it
/// exhaustively with no fallback arm, so extending the type system fails
/// to compile in backends that have not been updated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeNode {
    Void,
    Bool,
    Byte,
    I16,
    I32,
    I64,
    Double,
    String,
    Binary,
    /// Reference to a named enum declaration.
    EnumRef(String),
    /// Reference to a named struct or exception declaration.
    StructRef(String),
    /// One-step alias reference; resolving through it (possibly
    /// transitively) yields a true type that is never itself an alias.
    TypedefRef(String),
    List(Box<TypeNode>),
    Set(Box<TypeNode>),
    Map(Box<TypeNode>, Box<TypeNode>),
}

/// An enumeration declaration.
///
/// Discriminants need not be contiguous or sorted. The default variant is
/// the first declared one, independent of discriminant values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnumDef {
    pub name: String,
    /// At least one variant; an empty enum is an upstream contract
    /// violation and is not handled here.
    pub variants: Vec<EnumVariant>,
}

/// A single enum variant with its integer discriminant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnumVariant {
    pub name: String,
    pub value: i32,
}

/// A type alias declaration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypedefDef {
    pub name: String,
    pub ty: TypeNode,
}

/// A struct or exception declaration.
///
/// Exceptions use the identical emission shape as plain structs at this
/// layer; the distinction is resolved by the runtime-expansion layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructDef {
    pub name: String,
    #[serde(default)]
    pub is_exception: bool,
    pub fields: Vec<FieldDef>,
}

/// A field with its wire ordinal tag.
///
/// Tags are unique within their struct and are emitted verbatim: never
/// renumbered, never reordered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldDef {
    pub name: String,
    pub ty: TypeNode,
    pub tag: i32,
}

/// A service (RPC interface) declaration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceDef {
    pub name: String,
    /// Name of the document that declares this service. Ancestors declared
    /// in a different document trigger a wildcard import of that
    /// document's namespace.
    pub document: String,
    pub methods: Vec<MethodDef>,
    /// Single parent service, forming a linear ancestor chain. Acyclic by
    /// construction upstream.
    #[serde(default)]
    pub extends: Option<Box<ServiceDef>>,
}

/// A service method: arguments and exceptions are ordered field lists and
/// may independently be empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MethodDef {
    pub name: String,
    #[serde(default)]
    pub args: Vec<FieldDef>,
    pub ret: TypeNode,
    #[serde(default)]
    pub exceptions: Vec<FieldDef>,
}
