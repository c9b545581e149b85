//! Store entries: one per program line

use super::value::{Relation, Set};
use crate::interpreter::commands::CommandSpec;
use std::fmt;

/// A parsed `C` line: the table entry it names plus its raw numeric arguments.
///
/// Arguments are 1-based line numbers and are only checked when the command
/// runs.
#[derive(Debug, Clone)]
pub struct Command {
    pub spec: &'static CommandSpec,
    pub args: Vec<usize>,
}

impl Command {
    pub fn new(spec: &'static CommandSpec, args: Vec<usize>) -> Self {
        Command { spec, args }
    }

    pub fn name(&self) -> &'static str {
        self.spec.name
    }
}

/// Tagged store slot.
///
/// A `Command` slot is overwritten by the `Set` or `Relation` it computes.
#[derive(Debug, Clone)]
pub enum Entry {
    Set(Set),
    Relation(Relation),
    Command(Command),
}

impl Entry {
    pub fn kind(&self) -> EntryKind {
        match self {
            Entry::Set(_) => EntryKind::Set,
            Entry::Relation(_) => EntryKind::Relation,
            Entry::Command(_) => EntryKind::Command,
        }
    }

    pub fn is_command(&self) -> bool {
        matches!(self, Entry::Command(_))
    }

    pub fn as_set(&self) -> Option<&Set> {
        match self {
            Entry::Set(set) => Some(set),
            _ => None,
        }
    }

    pub fn as_relation(&self) -> Option<&Relation> {
        match self {
            Entry::Relation(relation) => Some(relation),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Set,
    Relation,
    Command,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryKind::Set => write!(f, "set"),
            EntryKind::Relation => write!(f, "relation"),
            EntryKind::Command => write!(f, "command"),
        }
    }
}
