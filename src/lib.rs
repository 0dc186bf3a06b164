//! Rust output backend for the Thrift IDL compiler.
//!
//! Consumes a validated schema AST ([`schema::Program`]) and produces one
//! text unit of structured declaration blocks (`enom!`, `strukt!`,
//! `service!`, `pub type`) for expansion by the companion runtime layer.
//!
//! The backend performs no validation of its own: alias chains are acyclic
//! and service extension chains strictly linear by upstream construction.
//! Generation either completes or aborts with a fatal [`GenError`].

pub mod error;
mod gen;
pub mod schema;

pub use error::GenError;
pub use gen::generate;
