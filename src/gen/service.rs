//! Service emission: inheritance linearization and the generics encoding.
//!
//! Rust has no chained structural inheritance for service interfaces, so a
//! service chain is encoded by composition: the emitted processor is
//! generic over one parameter per ancestor level, each bound to that
//! level's service contract, and stores one named slot per level. Any
//! inherited method call dispatches to the slot of the level that declared
//! it. The emitted trait exposes only the methods the service itself
//! declares; ancestor methods are satisfied by the composed sub-objects.

use crate::error::GenError;
use crate::schema::{FieldDef, Program, ServiceDef};

use super::emit::Unit;
use super::idents::{field_case, type_case};
use super::types::render_type;

/// One generic parameter per letter of the alphabet.
pub const MAX_CHAIN_DEPTH: usize = 26;

/// Walk the parent chain into ordered ancestor levels, self first:
/// level 0 is the service being emitted, level 1 its direct parent, and
/// so on. A chain deeper than [`MAX_CHAIN_DEPTH`] cannot be expressed by
/// the letter scheme and fails fast.
pub fn linearize(service: &ServiceDef) -> Result<Vec<&ServiceDef>, GenError> {
    let mut levels = Vec::new();
    let mut current = Some(service);
    while let Some(svc) = current {
        if levels.len() == MAX_CHAIN_DEPTH {
            return Err(GenError::ChainTooDeep {
                service: service.name.clone(),
                depth: chain_depth(service),
            });
        }
        levels.push(svc);
        current = svc.extends.as_deref();
    }
    Ok(levels)
}

/// Total number of levels in a service's chain, self included.
fn chain_depth(service: &ServiceDef) -> usize {
    let mut depth = 0;
    let mut current = Some(service);
    while let Some(svc) = current {
        depth += 1;
        current = svc.extends.as_deref();
    }
    depth
}

/// Uppercase generic-parameter letter for a chain level (`A` for level 0).
fn generic_letter(level: usize) -> char {
    char::from(b'A' + level as u8)
}

/// Lowercase implementation-slot letter for a chain level (`a` for level 0).
fn field_letter(level: usize) -> char {
    char::from(b'a' + level as u8)
}

/// Emit a service as a `service!` invocation.
pub fn emit_service(unit: &mut Unit, program: &Program, svc: &ServiceDef) -> Result<(), GenError> {
    let levels = linearize(svc)?;
    let trait_name = type_case(&svc.name);

    unit.line("service! {");
    unit.indent_up();

    unit.line(&format!("trait_name = {trait_name},"));
    unit.line(&format!("processor_name = {trait_name}Processor,"));
    unit.line(&format!("client_name = {trait_name}Client,"));

    // The methods originating in this service, always keyed to slot `a`.
    unit.line("service_methods = [");
    unit.indent_up();
    emit_level_methods(unit, program, field_letter(0), levels[0])?;
    unit.indent_down();
    unit.line("],");

    // Ancestor methods in ancestor order, each keyed to its level's slot.
    unit.line("parent_methods = [");
    unit.indent_up();
    for (level, ancestor) in levels.iter().enumerate().skip(1) {
        emit_level_methods(unit, program, field_letter(level), ancestor)?;
    }
    unit.indent_down();
    unit.line("],");

    let bounds = levels
        .iter()
        .enumerate()
        .map(|(level, s)| format!("{}: {}", generic_letter(level), type_case(&s.name)))
        .collect::<Vec<_>>()
        .join(", ");
    unit.line(&format!("bounds = [{bounds}],"));

    let fields = (0..levels.len())
        .map(|level| format!("{}: {}", field_letter(level), generic_letter(level)))
        .collect::<Vec<_>>()
        .join(", ");
    unit.line(&format!("fields = [{fields}]"));

    unit.indent_down();
    unit.line("}");
    unit.blank();
    Ok(())
}

/// Emit the method descriptors declared directly at one chain level.
fn emit_level_methods(
    unit: &mut Unit,
    program: &Program,
    slot: char,
    svc: &ServiceDef,
) -> Result<(), GenError> {
    let prefix = type_case(&svc.name);

    for method in &svc.methods {
        let args_name = format!("{prefix}{}Args", type_case(&method.name));
        let result_name = format!("{prefix}{}Result", type_case(&method.name));

        // Method name goes out verbatim; only the wrapper names are cased.
        unit.line(&format!(
            "{args_name} -> {result_name} = {slot}.{}(",
            method.name
        ));
        unit.indent_up();
        emit_field_list(unit, program, &method.args)?;
        unit.indent_down();

        unit.line(&format!(") -> {} => [", render_type(program, &method.ret)?));
        unit.indent_up();
        emit_field_list(unit, program, &method.exceptions)?;
        unit.indent_down();
        unit.line("],");
    }
    Ok(())
}

/// Emit an argument or exception list, one `name: type => tag` entry per
/// line in declaration order.
fn emit_field_list(unit: &mut Unit, program: &Program, fields: &[FieldDef]) -> Result<(), GenError> {
    for field in fields {
        unit.line(&format!(
            "{}: {} => {},",
            field_case(&field.name),
            render_type(program, &field.ty)?,
            field.tag
        ));
    }
    Ok(())
}
