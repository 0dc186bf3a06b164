//! Type mapping from Thrift type expressions to Rust type expressions.
//!
//! Rendering always resolves alias indirection first, so an alias and its
//! ultimate target render identically and aliases never appear verbatim in
//! emitted type expressions. Named user types render as their normalized
//! type name and are not re-expanded: the referenced declaration is
//! emitted elsewhere in the same unit or imported.

use crate::error::GenError;
use crate::schema::{Program, TypeNode};

use super::idents::type_case;

/// Resolve alias indirection down to the true type.
///
/// The result is never a `TypedefRef`: `true_type(true_type(x))` is
/// `true_type(x)`. An alias naming no typedef declaration in the document
/// is a fatal contract violation from the front end.
pub fn true_type<'a>(program: &'a Program, ty: &'a TypeNode) -> Result<&'a TypeNode, GenError> {
    let mut current = ty;
    while let TypeNode::TypedefRef(name) = current {
        let td = program.typedef(name).ok_or_else(|| {
            GenError::UnsupportedType(format!(
                "typedef `{name}` has no declaration in document `{}`",
                program.name
            ))
        })?;
        current = &td.ty;
    }
    Ok(current)
}

/// Render a Rust type expression for the given Thrift type.
pub fn render_type(program: &Program, ty: &TypeNode) -> Result<String, GenError> {
    let rendered = match true_type(program, ty)? {
        TypeNode::Void => "()".to_string(),
        TypeNode::Bool => "bool".to_string(),
        TypeNode::Byte => "i8".to_string(),
        TypeNode::I16 => "i16".to_string(),
        TypeNode::I32 => "i32".to_string(),
        TypeNode::I64 => "i64".to_string(),
        TypeNode::Double => "f64".to_string(),
        TypeNode::String => "String".to_string(),
        TypeNode::Binary => "Vec<u8>".to_string(),
        TypeNode::EnumRef(name) | TypeNode::StructRef(name) => type_case(name),
        TypeNode::TypedefRef(name) => {
            // true_type never yields an alias; reaching this arm means the
            // upstream AST broke the alias-resolution contract.
            return Err(GenError::UnsupportedType(format!("unresolved alias `{name}`")));
        }
        TypeNode::List(elem) => format!("Vec<{}>", render_type(program, elem)?),
        TypeNode::Set(elem) => format!("HashSet<{}>", render_type(program, elem)?),
        TypeNode::Map(key, value) => format!(
            "HashMap<{}, {}>",
            render_type(program, key)?,
            render_type(program, value)?
        ),
    };
    Ok(rendered)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::schema::TypedefDef;

    fn empty_program() -> Program {
        Program {
            name: "test".into(),
            enums: vec![],
            typedefs: vec![],
            structs: vec![],
            services: vec![],
        }
    }

    fn program_with_typedefs(typedefs: Vec<TypedefDef>) -> Program {
        Program {
            typedefs,
            ..empty_program()
        }
    }

    #[test]
    fn test_render_primitives() {
        let program = empty_program();
        let cases = [
            (TypeNode::Void, "()"),
            (TypeNode::Bool, "bool"),
            (TypeNode::Byte, "i8"),
            (TypeNode::I16, "i16"),
            (TypeNode::I32, "i32"),
            (TypeNode::I64, "i64"),
            (TypeNode::Double, "f64"),
            (TypeNode::String, "String"),
            (TypeNode::Binary, "Vec<u8>"),
        ];
        for (ty, expected) in cases {
            assert_eq!(render_type(&program, &ty).unwrap(), expected);
        }
    }

    #[test]
    fn test_render_containers() {
        let program = empty_program();
        let ty = TypeNode::Map(
            Box::new(TypeNode::String),
            Box::new(TypeNode::List(Box::new(TypeNode::Set(Box::new(
                TypeNode::I32,
            ))))),
        );
        assert_eq!(
            render_type(&program, &ty).unwrap(),
            "HashMap<String, Vec<HashSet<i32>>>"
        );
    }

    #[test]
    fn test_render_named_types() {
        let program = empty_program();
        assert_eq!(
            render_type(&program, &TypeNode::EnumRef("operation_kind".into())).unwrap(),
            "OperationKind"
        );
        assert_eq!(
            render_type(&program, &TypeNode::StructRef("shared_struct".into())).unwrap(),
            "SharedStruct"
        );
    }

    #[test]
    fn test_alias_chain_renders_as_true_type() {
        // user_id -> record_id -> i64: every link renders as the target.
        let program = program_with_typedefs(vec![
            TypedefDef {
                name: "record_id".into(),
                ty: TypeNode::I64,
            },
            TypedefDef {
                name: "user_id".into(),
                ty: TypeNode::TypedefRef("record_id".into()),
            },
        ]);

        let alias = TypeNode::TypedefRef("user_id".into());
        assert_eq!(render_type(&program, &alias).unwrap(), "i64");
        assert_eq!(
            render_type(&program, &alias).unwrap(),
            render_type(&program, &TypeNode::I64).unwrap()
        );
        // The alias name never appears in the rendered expression.
        assert!(!render_type(&program, &alias).unwrap().contains("UserId"));
    }

    #[test]
    fn test_true_type_is_idempotent() {
        let program = program_with_typedefs(vec![TypedefDef {
            name: "blob".into(),
            ty: TypeNode::Binary,
        }]);
        let alias = TypeNode::TypedefRef("blob".into());
        let once = true_type(&program, &alias).unwrap();
        let twice = true_type(&program, once).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_alias_inside_container_is_resolved() {
        let program = program_with_typedefs(vec![TypedefDef {
            name: "key".into(),
            ty: TypeNode::String,
        }]);
        let ty = TypeNode::Map(
            Box::new(TypeNode::TypedefRef("key".into())),
            Box::new(TypeNode::Bool),
        );
        assert_eq!(render_type(&program, &ty).unwrap(), "HashMap<String, bool>");
    }

    #[test]
    fn test_unknown_typedef_is_fatal() {
        let program = empty_program();
        let err = render_type(&program, &TypeNode::TypedefRef("missing".into())).unwrap_err();
        assert!(matches!(err, GenError::UnsupportedType(_)));
        assert!(err.to_string().contains("missing"));
    }
}
