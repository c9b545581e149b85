// Execution engine for the set calculator

use super::arguments::{self, Arguments};
use super::commands::{CommandSpec, Operation, Outcome, OutputShape};
use super::errors::RuntimeError;
use crate::store::entry::Entry;
use crate::store::value::Set;
use crate::store::Store;
use rand::RngCore;
use std::io::Write;
use tracing::{debug, trace};

/// Walks a parsed [`Store`] once, printing declarations and running commands
pub struct Interpreter<W, R> {
    /// Program being executed; command slots are overwritten with their results
    store: Store,

    /// Sink for program output
    out: W,

    /// Random source for `select`
    rng: R,

    /// 0-based slot executed next
    position: usize,

    /// Slots executed so far (jumped-over slots are not counted)
    steps: usize,
}

impl<W: Write, R: RngCore> Interpreter<W, R> {
    pub fn new(store: Store, out: W, rng: R) -> Self {
        Interpreter {
            store,
            out,
            rng,
            position: 0,
            steps: 0,
        }
    }

    /// Run the program from the first slot to the last
    pub fn run(&mut self) -> Result<(), RuntimeError> {
        debug!(slots = self.store.len(), "running program");

        while self.position < self.store.len() {
            self.position = self.step(self.position)?;
            self.steps += 1;
        }

        self.out.flush()?;
        debug!(steps = self.steps, "program finished");
        Ok(())
    }

    /// Execute the slot at `index`, returning the index to execute next
    fn step(&mut self, index: usize) -> Result<usize, RuntimeError> {
        trace!(line = index + 1, "step");

        match self.store.get(index) {
            Some(Entry::Set(_)) if index == 0 => {
                writeln!(self.out, "{}", self.store.universe())?;
                Ok(index + 1)
            }
            Some(Entry::Set(set)) => {
                writeln!(self.out, "{}", set.display(self.store.universe()))?;
                Ok(index + 1)
            }
            Some(Entry::Relation(relation)) => {
                writeln!(self.out, "{}", relation.display(self.store.universe()))?;
                Ok(index + 1)
            }
            Some(Entry::Command(_)) => self.execute_command(index),
            None => Ok(index + 1),
        }
    }

    fn execute_command(&mut self, index: usize) -> Result<usize, RuntimeError> {
        let line = index + 1;
        let (spec, args) = match self.store.get(index) {
            Some(Entry::Command(command)) => {
                (command.spec, arguments::validate(command, line, &self.store)?)
            }
            _ => return Ok(index + 1),
        };

        debug!(line, command = spec.name, ?args, "executing command");
        let outcome = self.invoke(spec, &args)?;

        match (spec.output, outcome) {
            (OutputShape::Void, Outcome::Count(count)) => {
                writeln!(self.out, "{}", count)?;
                Ok(index + 1)
            }
            (OutputShape::Bool, Outcome::Bool(value)) => {
                writeln!(self.out, "{}", value)?;
                if value {
                    Ok(index + 1)
                } else {
                    Ok(self.jump_or_advance(index, args.jump))
                }
            }
            (OutputShape::Set, Outcome::Set(set)) => {
                writeln!(self.out, "{}", set.display(self.store.universe()))?;
                self.install(index, Entry::Set(set));
                Ok(index + 1)
            }
            (OutputShape::Relation, Outcome::Relation(relation)) => {
                writeln!(self.out, "{}", relation.display(self.store.universe()))?;
                self.install(index, Entry::Relation(relation));
                Ok(index + 1)
            }
            (OutputShape::SelectResult, Outcome::Selected(Some(picked))) => {
                self.print_selected(&picked)?;
                self.install(index, Entry::Set(picked));
                Ok(index + 1)
            }
            (OutputShape::SelectResult, Outcome::Selected(None)) => {
                Ok(self.jump_or_advance(index, args.jump))
            }
            _ => Err(RuntimeError::MissingResult {
                command: spec.name,
                line,
            }),
        }
    }

    /// Resolve the operands the operation's signature asks for and call it
    fn invoke(&mut self, spec: &CommandSpec, args: &Arguments) -> Result<Outcome, RuntimeError> {
        let store = &self.store;
        let lines = &args.operands;

        let outcome = match spec.operation {
            Operation::Set(op) => op(arguments::resolve_set(store, lines[0])),
            Operation::SetSet(op) => op(
                arguments::resolve_set(store, lines[0]),
                arguments::resolve_set(store, lines[1]),
            ),
            Operation::SetUniverse(op) => {
                op(arguments::resolve_set(store, lines[0]), store.universe())
            }
            Operation::Relation(op) => op(arguments::resolve_relation(store, lines[0])),
            Operation::RelationUniverse(op) => {
                op(arguments::resolve_relation(store, lines[0]), store.universe())
            }
            Operation::RelationSetSet(op) => op(
                arguments::resolve_relation(store, lines[0]),
                arguments::resolve_set(store, lines[1]),
                arguments::resolve_set(store, lines[2]),
            ),
            Operation::Any(op) => op(arguments::resolve_any(store, lines[0]), &mut self.rng),
        };

        Ok(outcome?)
    }

    /// Continue at the 1-based jump target (which is executed next), or at
    /// the following slot when there is none
    fn jump_or_advance(&self, index: usize, jump: Option<usize>) -> usize {
        match jump {
            Some(target) => {
                debug!(from = index + 1, to = target, "jump");
                target - 1
            }
            None => index + 1,
        }
    }

    fn install(&mut self, index: usize, entry: Entry) {
        trace!(line = index + 1, kind = %entry.kind(), "replacing command slot");
        self.store.replace(index, entry);
    }

    fn print_selected(&mut self, picked: &Set) -> Result<(), RuntimeError> {
        for &element in picked.elements() {
            writeln!(self.out, "{}", self.store.universe().name(element))?;
        }
        Ok(())
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Give back the output sink, e.g. to inspect captured output
    pub fn into_output(self) -> W {
        self.out
    }
}
