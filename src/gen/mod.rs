//! Thrift AST to Rust source generation.
//!
//! The pipeline is deliberately flat:
//! 1. Normalize identifiers per position (`idents`)
//! 2. Map type expressions through alias indirection (`types`)
//! 3. Emit declarations as structured macro invocations (`emit`, `service`)
//! 4. Walk the document's top-level collections in a fixed order (here)
//!
//! Generation is single-threaded and strictly sequential: one document is
//! walked top to bottom with no parallelism and no suspension points. It
//! either completes or aborts on a fatal mapping error, and the same AST
//! always yields byte-identical output.
//!
//! ## Module structure
//!
//! - `idents`: case conversion and reserved-word escaping
//! - `types`: alias resolution and Rust type rendering
//! - `emit`: typedef/enum/struct emission and the indented output sink
//! - `service`: inheritance linearization and the generics encoding

mod emit;
mod idents;
mod service;
mod types;

use tracing::debug;

use crate::error::GenError;
use crate::schema::Program;

use emit::{emit_enum, emit_struct, emit_typedef, Unit};
use service::{emit_service, linearize};

/// Generate the Rust source unit for one schema document.
///
/// Emits, in fixed order: the autogeneration banner, the import preamble,
/// wildcard imports for ancestor services declared in other documents,
/// enums, typedefs, structs and exceptions in declaration order, and
/// services. Constants are a recognized AST construct that is deliberately
/// never emitted by this backend.
pub fn generate(program: &Program) -> Result<String, GenError> {
    debug!(
        document = %program.name,
        enums = program.enums.len(),
        typedefs = program.typedefs.len(),
        structs = program.structs.len(),
        services = program.services.len(),
        "Generating Rust unit."
    );

    let mut unit = Unit::new();
    unit.raw(&autogen_banner());
    unit.blank();
    unit.raw(IMPORT_PREAMBLE);
    unit.blank();

    emit_ancestor_uses(&mut unit, program)?;

    for e in &program.enums {
        emit_enum(&mut unit, e);
    }

    for td in &program.typedefs {
        emit_typedef(&mut unit, program, td)?;
    }

    // Structs, exceptions, and unions stay interleaved in declared order.
    for s in &program.structs {
        emit_struct(&mut unit, program, s)?;
    }

    for svc in &program.services {
        emit_service(&mut unit, program, svc)?;
    }

    let out = unit.finish();
    debug!(document = %program.name, bytes = out.len(), "Rust unit generated.");
    Ok(out)
}

/// Fixed banner naming the generating tool and its version.
fn autogen_banner() -> String {
    format!(
        "\
///////////////////////////////////////////////////////////////
// Autogenerated by thriftgen ({})
//
// DO NOT EDIT UNLESS YOU ARE SURE YOU KNOW WHAT YOU ARE DOING
///////////////////////////////////////////////////////////////
",
        env!("CARGO_PKG_VERSION")
    )
}

/// Fixed import preamble of every generated unit.
const IMPORT_PREAMBLE: &str = "\
#![allow(unused_mut, dead_code, non_snake_case)]
#[allow(unused_imports)]
use std::collections::{HashMap, HashSet};
";

/// Emit a wildcard import for every ancestor service declared in a
/// different document than the one being generated.
///
/// Linearizing here also validates every chain's depth up front, before
/// any declaration block is written.
fn emit_ancestor_uses(unit: &mut Unit, program: &Program) -> Result<(), GenError> {
    let mut emitted = false;
    for svc in &program.services {
        for ancestor in linearize(svc)?.iter().skip(1) {
            if ancestor.document != program.name {
                unit.line(&format!("use {}::*;", ancestor.document));
                emitted = true;
            }
        }
    }
    if emitted {
        unit.blank();
    }
    Ok(())
}
