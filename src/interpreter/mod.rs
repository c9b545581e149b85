//! Set calculator execution engine
//!
//! This module provides the core execution logic:
//! - [`engine`]: the [`engine::Interpreter`] that walks the store
//! - [`commands`]: the static command table
//! - [`arguments`]: argument validation and empty-value substitution
//! - [`ops`]: the set and relation algebra
//! - [`errors`]: runtime error types
//!
//! # Execution Model
//!
//! The store is executed once, slot by slot. Declarations are printed.
//! Commands are validated, run, and their output applied: booleans are
//! printed and may jump forward, derived sets and relations are printed and
//! replace the command's own slot.

pub mod arguments;
pub mod commands;
pub mod constants;
pub mod engine;
pub mod errors;
pub mod ops;
