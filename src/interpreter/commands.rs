//! Command table
//!
//! [`COMMANDS`] is the single source of truth for what every command takes
//! and what it produces. Each [`Operation`] variant carries a function of the
//! exact signature its input shape implies, so the engine matches on the
//! variant to know which arguments to resolve; there is no untyped dispatch.

use super::ops::select::{self, Operand};
use super::ops::{relations, sets, AllocResult};
use crate::store::universe::Universe;
use crate::store::value::{Relation, Set};
use rand::RngCore;
use rustc_hash::FxHashMap;
use std::fmt;
use std::sync::LazyLock;

/// Literal words that may not name universe elements
pub const RESERVED_LITERALS: [&str; 2] = ["true", "false"];

/// Expected type of one explicit argument
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperandKind {
    Set,
    Relation,
    Any,
}

impl fmt::Display for OperandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperandKind::Set => write!(f, "set"),
            OperandKind::Relation => write!(f, "relation"),
            OperandKind::Any => write!(f, "set or relation"),
        }
    }
}

/// What a command consumes. The universe is supplied implicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputShape {
    Set,
    SetSet,
    SetUniverse,
    Relation,
    RelationUniverse,
    RelationSetSet,
    Any,
}

impl InputShape {
    /// Kinds of the explicit store-reference arguments, in order.
    pub fn operands(self) -> &'static [OperandKind] {
        use OperandKind as K;

        match self {
            InputShape::Set | InputShape::SetUniverse => &[K::Set],
            InputShape::SetSet => &[K::Set, K::Set],
            InputShape::Relation | InputShape::RelationUniverse => &[K::Relation],
            InputShape::RelationSetSet => &[K::Relation, K::Set, K::Set],
            InputShape::Any => &[K::Any],
        }
    }

    pub fn arity(self) -> usize {
        self.operands().len()
    }
}

/// What a command produces and how the engine applies it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputShape {
    /// Nothing is stored; a scalar report (`card`) may be printed.
    Void,
    /// Printed; `false` takes the optional jump.
    Bool,
    /// Printed and installed into the command's own slot.
    Set,
    Relation,
    /// Empty input jumps, otherwise the picked element is installed.
    SelectResult,
}

/// Value produced by an operation
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Count(usize),
    Bool(bool),
    Set(Set),
    Relation(Relation),
    Selected(Option<Set>),
}

/// Typed operation, one variant per input shape
#[derive(Clone, Copy)]
pub enum Operation {
    Set(fn(&Set) -> AllocResult<Outcome>),
    SetSet(fn(&Set, &Set) -> AllocResult<Outcome>),
    SetUniverse(fn(&Set, &Universe) -> AllocResult<Outcome>),
    Relation(fn(&Relation) -> AllocResult<Outcome>),
    RelationUniverse(fn(&Relation, &Universe) -> AllocResult<Outcome>),
    RelationSetSet(fn(&Relation, &Set, &Set) -> AllocResult<Outcome>),
    Any(fn(Operand<'_>, &mut dyn RngCore) -> AllocResult<Outcome>),
}

impl Operation {
    pub fn input_shape(&self) -> InputShape {
        match self {
            Operation::Set(_) => InputShape::Set,
            Operation::SetSet(_) => InputShape::SetSet,
            Operation::SetUniverse(_) => InputShape::SetUniverse,
            Operation::Relation(_) => InputShape::Relation,
            Operation::RelationUniverse(_) => InputShape::RelationUniverse,
            Operation::RelationSetSet(_) => InputShape::RelationSetSet,
            Operation::Any(_) => InputShape::Any,
        }
    }
}

impl fmt::Debug for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Operation::{:?}", self.input_shape())
    }
}

/// One row of the command table
#[derive(Debug)]
pub struct CommandSpec {
    pub name: &'static str,
    pub operation: Operation,
    pub output: OutputShape,
}

impl CommandSpec {
    pub fn input_shape(&self) -> InputShape {
        self.operation.input_shape()
    }

    /// Argument counts accepted on a `C` line, explicit operands plus an
    /// optional trailing jump target.
    pub fn accepted_arities(&self) -> (usize, usize) {
        let arity = self.input_shape().arity();
        match self.output {
            OutputShape::Bool => (arity, arity + 1),
            OutputShape::SelectResult => (arity + 1, arity + 1),
            _ => (arity, arity),
        }
    }
}

macro_rules! command {
    ($name:literal, $variant:ident($op:path), $output:ident) => {
        CommandSpec {
            name: $name,
            operation: Operation::$variant($op),
            output: OutputShape::$output,
        }
    };
}

pub static COMMANDS: [CommandSpec; 23] = [
    command!("empty", Set(empty), Bool),
    command!("card", Set(card), Void),
    command!("complement", SetUniverse(complement), Set),
    command!("union", SetSet(union), Set),
    command!("intersect", SetSet(intersect), Set),
    command!("minus", SetSet(minus), Set),
    command!("subseteq", SetSet(subseteq), Bool),
    command!("subset", SetSet(subset), Bool),
    command!("equals", SetSet(equals), Bool),
    command!("reflexive", RelationUniverse(reflexive), Bool),
    command!("symmetric", Relation(symmetric), Bool),
    command!("antisymmetric", Relation(antisymmetric), Bool),
    command!("transitive", Relation(transitive), Bool),
    command!("function", Relation(function), Bool),
    command!("domain", Relation(domain), Set),
    command!("codomain", Relation(codomain), Set),
    command!("injective", RelationSetSet(injective), Bool),
    command!("surjective", RelationSetSet(surjective), Bool),
    command!("bijective", RelationSetSet(bijective), Bool),
    command!("closure_ref", RelationUniverse(closure_ref), Relation),
    command!("closure_sym", Relation(closure_sym), Relation),
    command!("closure_trans", Relation(closure_trans), Relation),
    command!("select", Any(select), SelectResult),
];

static REGISTRY: LazyLock<FxHashMap<&'static str, &'static CommandSpec>> =
    LazyLock::new(|| COMMANDS.iter().map(|spec| (spec.name, spec)).collect());

/// Table entry for `name`, if it is a known command.
pub fn lookup(name: &str) -> Option<&'static CommandSpec> {
    REGISTRY.get(name).copied()
}

/// Command names and boolean literals.
pub fn is_reserved(word: &str) -> bool {
    lookup(word).is_some() || RESERVED_LITERALS.contains(&word)
}

// ===== Table adapters =====

fn empty(set: &Set) -> AllocResult<Outcome> {
    Ok(Outcome::Bool(sets::empty(set)))
}

fn card(set: &Set) -> AllocResult<Outcome> {
    Ok(Outcome::Count(sets::cardinality(set)))
}

fn complement(set: &Set, universe: &Universe) -> AllocResult<Outcome> {
    sets::complement(set, universe).map(Outcome::Set)
}

fn union(a: &Set, b: &Set) -> AllocResult<Outcome> {
    sets::union(a, b).map(Outcome::Set)
}

fn intersect(a: &Set, b: &Set) -> AllocResult<Outcome> {
    sets::intersect(a, b).map(Outcome::Set)
}

fn minus(a: &Set, b: &Set) -> AllocResult<Outcome> {
    sets::minus(a, b).map(Outcome::Set)
}

fn subseteq(a: &Set, b: &Set) -> AllocResult<Outcome> {
    Ok(Outcome::Bool(sets::subseteq(a, b)))
}

fn subset(a: &Set, b: &Set) -> AllocResult<Outcome> {
    Ok(Outcome::Bool(sets::subset(a, b)))
}

fn equals(a: &Set, b: &Set) -> AllocResult<Outcome> {
    Ok(Outcome::Bool(sets::equals(a, b)))
}

fn reflexive(relation: &Relation, universe: &Universe) -> AllocResult<Outcome> {
    Ok(Outcome::Bool(relations::reflexive(relation, universe)))
}

fn symmetric(relation: &Relation) -> AllocResult<Outcome> {
    Ok(Outcome::Bool(relations::symmetric(relation)))
}

fn antisymmetric(relation: &Relation) -> AllocResult<Outcome> {
    Ok(Outcome::Bool(relations::antisymmetric(relation)))
}

fn transitive(relation: &Relation) -> AllocResult<Outcome> {
    Ok(Outcome::Bool(relations::transitive(relation)))
}

fn function(relation: &Relation) -> AllocResult<Outcome> {
    Ok(Outcome::Bool(relations::function(relation)))
}

fn domain(relation: &Relation) -> AllocResult<Outcome> {
    relations::domain(relation).map(Outcome::Set)
}

fn codomain(relation: &Relation) -> AllocResult<Outcome> {
    relations::codomain(relation).map(Outcome::Set)
}

fn injective(relation: &Relation, a: &Set, b: &Set) -> AllocResult<Outcome> {
    Ok(Outcome::Bool(relations::injective(relation, a, b)))
}

fn surjective(relation: &Relation, a: &Set, b: &Set) -> AllocResult<Outcome> {
    relations::surjective(relation, a, b).map(Outcome::Bool)
}

fn bijective(relation: &Relation, a: &Set, b: &Set) -> AllocResult<Outcome> {
    relations::bijective(relation, a, b).map(Outcome::Bool)
}

fn closure_ref(relation: &Relation, universe: &Universe) -> AllocResult<Outcome> {
    relations::closure_reflexive(relation, universe).map(Outcome::Relation)
}

fn closure_sym(relation: &Relation) -> AllocResult<Outcome> {
    relations::closure_symmetric(relation).map(Outcome::Relation)
}

fn closure_trans(relation: &Relation) -> AllocResult<Outcome> {
    relations::closure_transitive(relation).map(Outcome::Relation)
}

fn select(operand: Operand<'_>, rng: &mut dyn RngCore) -> AllocResult<Outcome> {
    select::select(operand, rng).map(Outcome::Selected)
}
