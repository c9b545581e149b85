//! Command argument validation and resolution
//!
//! Arguments are checked right before a command runs, against the store as
//! it is at that moment:
//! 1. the count must fit the command's shape (plus an optional jump target
//!    for boolean commands, a mandatory one for `select`),
//! 2. every store reference must name an existing line,
//! 3. the referenced slot must hold a compatible type.
//!
//! A slot that still holds a command resolves to the store's shared empty
//! set or relation instead of failing.

use super::commands::{CommandSpec, OperandKind};
use super::errors::RuntimeError;
use super::ops::select::Operand;
use crate::store::entry::{Command, Entry};
use crate::store::value::{Relation, Set};
use crate::store::Store;

/// Validated arguments of one command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arguments {
    /// 1-based store references, one per operand of the input shape
    pub operands: Vec<usize>,
    /// 1-based line to continue at when the result is `false` / empty
    pub jump: Option<usize>,
}

/// Check `command`, which sits on 1-based `line`, against `store`.
pub fn validate(command: &Command, line: usize, store: &Store) -> Result<Arguments, RuntimeError> {
    let spec: &CommandSpec = command.spec;
    let kinds = spec.input_shape().operands();
    let (min, max) = spec.accepted_arities();
    let got = command.args.len();

    if got < min || got > max {
        return Err(RuntimeError::ArgumentCount {
            command: spec.name,
            min,
            max,
            got,
            line,
        });
    }

    let (operands, jump) = command.args.split_at(kinds.len());

    for (position, (&reference, &kind)) in operands.iter().zip(kinds).enumerate() {
        let entry = store
            .line(reference)
            .ok_or(RuntimeError::LineOutOfRange {
                command: spec.name,
                reference,
                len: store.len(),
                line,
            })?;

        let compatible = match (kind, entry) {
            (OperandKind::Set, Entry::Relation(_)) => false,
            (OperandKind::Relation, Entry::Set(_)) => false,
            _ => true,
        };
        if !compatible {
            return Err(RuntimeError::ArgumentType {
                command: spec.name,
                position: position + 1,
                expected: kind,
                found: entry.kind(),
                reference,
                line,
            });
        }
    }

    let jump = jump.first().copied();
    if let Some(target) = jump {
        if target <= line {
            return Err(RuntimeError::InvalidJumpTarget {
                command: spec.name,
                target,
                line,
            });
        }
    }

    Ok(Arguments {
        operands: operands.to_vec(),
        jump,
    })
}

/// Set at `line`, or the empty set if that slot has not produced a value.
pub fn resolve_set(store: &Store, line: usize) -> &Set {
    match store.line(line) {
        Some(Entry::Set(set)) => set,
        _ => store.empty_set(),
    }
}

/// Relation at `line`, or the empty relation if that slot has not produced a value.
pub fn resolve_relation(store: &Store, line: usize) -> &Relation {
    match store.line(line) {
        Some(Entry::Relation(relation)) => relation,
        _ => store.empty_relation(),
    }
}

/// Either collection at `line`; an unresolved command reads as the empty set.
pub fn resolve_any(store: &Store, line: usize) -> Operand<'_> {
    match store.line(line) {
        Some(Entry::Relation(relation)) => Operand::Relation(relation),
        Some(Entry::Set(set)) => Operand::Set(set),
        _ => Operand::Set(store.empty_set()),
    }
}
