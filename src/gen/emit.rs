//! Declaration emission: typedefs, enums, and structs.
//!
//! Declarations are emitted as structured macro invocations (`enom!`,
//! `strukt!`) rather than final idiomatic Rust; the runtime layer expands
//! them into full definitions. Emission here is purely mechanical string
//! building over the already-resolved declaration data.

use crate::error::GenError;
use crate::schema::{EnumDef, Program, StructDef, TypedefDef};

use super::idents::{field_case, type_case};
use super::types::render_type;

/// Append-only output sink for one generated unit.
///
/// Tracks the current indentation depth (two spaces per level). Opened
/// once per generation run and written strictly sequentially, so the same
/// AST always yields byte-identical output.
#[derive(Debug, Default)]
pub struct Unit {
    out: String,
    indent: usize,
}

impl Unit {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write one line at the current indentation depth.
    pub fn line(&mut self, s: &str) {
        for _ in 0..self.indent {
            self.out.push_str("  ");
        }
        self.out.push_str(s);
        self.out.push('\n');
    }

    /// Write pre-formatted text verbatim.
    pub fn raw(&mut self, s: &str) {
        self.out.push_str(s);
    }

    /// Write a blank separator line.
    pub fn blank(&mut self) {
        self.out.push('\n');
    }

    pub fn indent_up(&mut self) {
        self.indent += 1;
    }

    pub fn indent_down(&mut self) {
        self.indent = self.indent.saturating_sub(1);
    }

    pub fn finish(self) -> String {
        self.out
    }
}

/// Emit a type alias as a plain `pub type` item.
pub fn emit_typedef(unit: &mut Unit, program: &Program, td: &TypedefDef) -> Result<(), GenError> {
    let target = render_type(program, &td.ty)?;
    unit.line(&format!("pub type {} = {};", type_case(&td.name), target));
    unit.blank();
    Ok(())
}

/// Emit an enum as an `enom!` invocation.
///
/// Variants keep their literal discriminants in declaration order; the
/// default is the first declared variant, not the lowest-valued one.
pub fn emit_enum(unit: &mut Unit, e: &EnumDef) {
    unit.line("enom! {");
    unit.indent_up();

    unit.line(&format!("name = {},", type_case(&e.name)));

    unit.line("values = [");
    unit.indent_up();
    for variant in &e.variants {
        unit.line(&format!("{} = {},", type_case(&variant.name), variant.value));
    }
    unit.indent_down();
    unit.line("],");

    if let Some(first) = e.variants.first() {
        unit.line(&format!("default = {}", type_case(&first.name)));
    }

    unit.indent_down();
    unit.line("}");
    unit.blank();
}

/// Emit a struct or exception as a `strukt!` invocation.
///
/// Fields appear in declaration order with their ordinal tags verbatim.
/// Exceptions use the identical shape; the runtime layer resolves the
/// distinction.
pub fn emit_struct(unit: &mut Unit, program: &Program, s: &StructDef) -> Result<(), GenError> {
    unit.line("strukt! {");
    unit.indent_up();

    unit.line(&format!("name = {},", type_case(&s.name)));

    unit.line("fields = {");
    unit.indent_up();
    for field in &s.fields {
        unit.line(&format!(
            "{}: {} => {},",
            field_case(&field.name),
            render_type(program, &field.ty)?,
            field.tag
        ));
    }
    unit.indent_down();
    unit.line("}");

    unit.indent_down();
    unit.line("}");
    unit.blank();
    Ok(())
}
