//! Runtime error types for the interpreter
//!
//! This module defines [`RuntimeError`], which represents all errors that can occur
//! while running a parsed store (as opposed to parse errors).
//!
//! All runtime errors are fatal - they halt execution and are reported once.

use super::commands::OperandKind;
use crate::store::entry::EntryKind;
use std::collections::TryReserveError;
use std::io;
use thiserror::Error;

/// Runtime errors that can occur during execution
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// Wrong number of arguments for the command's shape
    #[error(
        "line {line}: '{command}' expects {} argument{}, got {got}",
        expected_count(.min, .max),
        plural(.max)
    )]
    ArgumentCount {
        command: &'static str,
        min: usize,
        max: usize,
        got: usize,
        line: usize,
    },

    /// Argument refers past the end of the program
    #[error("line {line}: '{command}' refers to line {reference}, but the program has {len} lines")]
    LineOutOfRange {
        command: &'static str,
        reference: usize,
        len: usize,
        line: usize,
    },

    /// Argument refers to a slot of an incompatible type
    #[error("line {line}: argument {position} of '{command}' must be a {expected}, but line {reference} is a {found}")]
    ArgumentType {
        command: &'static str,
        position: usize,
        expected: OperandKind,
        found: EntryKind,
        reference: usize,
        line: usize,
    },

    /// Jump target does not lie after the jumping command
    #[error("line {line}: '{command}' cannot jump to line {target}, jumps must move forward")]
    InvalidJumpTarget {
        command: &'static str,
        target: usize,
        line: usize,
    },

    /// Operation result did not match the command's declared output
    #[error("line {line}: '{command}' produced no usable result")]
    MissingResult { command: &'static str, line: usize },

    /// Allocation failed while building a derived value
    #[error("out of memory: {0}")]
    OutOfMemory(#[from] TryReserveError),

    /// Writing program output failed
    #[error("cannot write output: {0}")]
    Output(#[from] io::Error),
}

impl RuntimeError {
    /// Program line the error was raised on, when it belongs to one.
    pub fn line(&self) -> Option<usize> {
        match self {
            RuntimeError::ArgumentCount { line, .. }
            | RuntimeError::LineOutOfRange { line, .. }
            | RuntimeError::ArgumentType { line, .. }
            | RuntimeError::InvalidJumpTarget { line, .. }
            | RuntimeError::MissingResult { line, .. } => Some(*line),
            RuntimeError::OutOfMemory(_) | RuntimeError::Output(_) => None,
        }
    }
}

fn plural(count: &usize) -> &'static str {
    if *count == 1 {
        ""
    } else {
        "s"
    }
}

fn expected_count(min: &usize, max: &usize) -> String {
    if min == max {
        min.to_string()
    } else {
        format!("{} or {}", min, max)
    }
}
