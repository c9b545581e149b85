//! Main parser coordinator
//!
//! This module provides the [`Parser`] struct and the [`ParseError`] type.
//! [`Parser::new`] splits the source into lines and tokenizes each one;
//! [`Parser::parse_store`] turns the tokenized lines into a [`Store`], one
//! slot per line.
//!
//! # Program shape
//!
//! ```text
//! U <names>            line 1, always
//! S/R <declarations>   any number, any order
//! C <commands>         at least one; no S/R after the first C
//! ```

use super::lexer::{LexError, LexedLine, Lexer, Marker, Token};
use crate::interpreter::commands;
use crate::interpreter::constants::{MAX_COMMAND_ARGS, MAX_LINES};
use crate::store::entry::{Command, Entry};
use crate::store::universe::{Universe, UniverseError};
use crate::store::value::{Element, Pair, Relation, Set};
use crate::store::Store;
use thiserror::Error;
use tracing::{debug, trace};

/// Parser error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Lexer error at {0}")]
    Lex(#[from] LexError),

    #[error("Program is longer than {limit} lines")]
    TooManyLines { limit: usize },

    #[error("Program is empty")]
    EmptyProgram,

    #[error("line {line}: the universe must be declared on line 1")]
    MisplacedUniverse { line: usize },

    #[error("line {line}: the program must start with a universe declaration")]
    MissingUniverse { line: usize },

    #[error("line {line}: sets and relations must be declared before the first command")]
    DeclarationAfterCommand { line: usize },

    #[error("Program contains no command")]
    MissingCommand,

    #[error("line {line}: invalid universe: {source}")]
    Universe {
        #[source]
        source: UniverseError,
        line: usize,
    },

    #[error("line {line}: '{name}' is not a valid element name, only letters are allowed")]
    InvalidElementName { name: String, line: usize },

    #[error("line {line}: '{name}' is not an element of the universe")]
    UnknownElement { name: String, line: usize },

    #[error("line {line}: element '{name}' appears more than once in the set")]
    DuplicateMember { name: String, line: usize },

    #[error("line {line}: pair ({a} {b}) appears more than once in the relation")]
    DuplicatePair { a: String, b: String, line: usize },

    #[error("line {line}: malformed pair, expected {expected}, found {found}")]
    MalformedPair {
        expected: &'static str,
        found: String,
        line: usize,
    },

    #[error("line {line}: expected {expected}, found {found}")]
    UnexpectedToken {
        expected: &'static str,
        found: String,
        line: usize,
    },

    #[error("line {line}: unknown command '{name}'")]
    UnknownCommand { name: String, line: usize },

    #[error("line {line}: line references must be positive, found {found}")]
    InvalidLineReference { found: String, line: usize },

    #[error("line {line}: a command takes at most {max} arguments, found {count}")]
    TooManyArguments { count: usize, max: usize, line: usize },
}

/// Line parser building a [`Store`]
pub struct Parser {
    pub(crate) lines: Vec<LexedLine>,
}

impl Parser {
    /// Split `source` into lines and tokenize each of them
    pub fn new(source: &str) -> Result<Self, ParseError> {
        let mut raw: Vec<&str> = source.split('\n').collect();
        // A terminating newline does not start another line
        if raw.last() == Some(&"") {
            raw.pop();
        }

        if raw.len() > MAX_LINES {
            return Err(ParseError::TooManyLines { limit: MAX_LINES });
        }

        let lines = raw
            .into_iter()
            .enumerate()
            .map(|(i, text)| {
                let text = text.strip_suffix('\r').unwrap_or(text);
                Lexer::new(text, i + 1).tokenize()
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { lines })
    }

    /// Parse every line into a store slot
    pub fn parse_store(&mut self) -> Result<Store, ParseError> {
        let mut lines = self.lines.iter();

        let first = lines.next().ok_or(ParseError::EmptyProgram)?;
        if first.marker != Marker::Universe {
            return Err(ParseError::MissingUniverse { line: first.line });
        }
        let mut store = Store::new(self.parse_universe(first)?);
        debug!(elements = store.universe().len(), "parsed universe");

        let mut seen_command = false;
        for lexed in lines {
            let entry = match lexed.marker {
                Marker::Universe => {
                    return Err(ParseError::MisplacedUniverse { line: lexed.line });
                }
                Marker::Set | Marker::Relation if seen_command => {
                    return Err(ParseError::DeclarationAfterCommand { line: lexed.line });
                }
                Marker::Set => Entry::Set(self.parse_set(lexed, store.universe())?),
                Marker::Relation => Entry::Relation(self.parse_relation(lexed, store.universe())?),
                Marker::Command => {
                    seen_command = true;
                    Entry::Command(self.parse_command(lexed)?)
                }
            };
            trace!(line = lexed.line, kind = %entry.kind(), "parsed line");
            store.push(entry);
        }

        if !seen_command {
            return Err(ParseError::MissingCommand);
        }

        debug!(
            slots = store.len(),
            commands = store.command_count(),
            "parsed program"
        );
        Ok(store)
    }

    fn parse_universe(&self, lexed: &LexedLine) -> Result<Universe, ParseError> {
        let mut names = Vec::with_capacity(lexed.tokens.len());

        for token in &lexed.tokens {
            let name = self.expect_word(token, "an element name", lexed.line)?;
            if !name.chars().all(|c| c.is_ascii_alphabetic()) {
                return Err(ParseError::InvalidElementName {
                    name: name.to_string(),
                    line: lexed.line,
                });
            }
            names.push(name);
        }

        Universe::from_names(names).map_err(|source| ParseError::Universe {
            source,
            line: lexed.line,
        })
    }

    fn parse_set(&self, lexed: &LexedLine, universe: &Universe) -> Result<Set, ParseError> {
        let mut elements = Vec::with_capacity(lexed.tokens.len());

        for token in &lexed.tokens {
            let name = self.expect_word(token, "an element name", lexed.line)?;
            elements.push(self.resolve_element(name, universe, lexed.line)?);
        }

        Set::normalized(elements).map_err(|duplicate| ParseError::DuplicateMember {
            name: universe.name(duplicate).to_string(),
            line: lexed.line,
        })
    }

    fn parse_relation(
        &self,
        lexed: &LexedLine,
        universe: &Universe,
    ) -> Result<Relation, ParseError> {
        let mut pairs = Vec::with_capacity(lexed.tokens.len() / 4);
        let mut tokens = lexed.tokens.iter();

        while let Some(open) = tokens.next() {
            if !matches!(open, Token::LParen(_)) {
                return Err(malformed("'('", Some(open), lexed.line));
            }

            let mut component = || -> Result<Element, ParseError> {
                match tokens.next() {
                    Some(Token::Word(name, _)) => self.resolve_element(name, universe, lexed.line),
                    other => Err(malformed("an element name", other, lexed.line)),
                }
            };
            let a = component()?;
            let b = component()?;

            match tokens.next() {
                Some(Token::RParen(_)) => {}
                other => return Err(malformed("')'", other, lexed.line)),
            }

            pairs.push(Pair::new(a, b));
        }

        Relation::normalized(pairs).map_err(|duplicate| ParseError::DuplicatePair {
            a: universe.name(duplicate.a).to_string(),
            b: universe.name(duplicate.b).to_string(),
            line: lexed.line,
        })
    }

    fn parse_command(&self, lexed: &LexedLine) -> Result<Command, ParseError> {
        let mut tokens = lexed.tokens.iter();

        let name = match tokens.next() {
            Some(token) => self.expect_word(token, "a command name", lexed.line)?,
            None => {
                return Err(ParseError::UnexpectedToken {
                    expected: "a command name",
                    found: "end of line".to_string(),
                    line: lexed.line,
                });
            }
        };
        let spec = commands::lookup(name).ok_or_else(|| ParseError::UnknownCommand {
            name: name.to_string(),
            line: lexed.line,
        })?;

        let args = tokens
            .map(|token| match token {
                Token::Number(n, _) if *n > 0 => Ok(*n as usize),
                other => Err(ParseError::InvalidLineReference {
                    found: other.to_string(),
                    line: lexed.line,
                }),
            })
            .collect::<Result<Vec<_>, _>>()?;

        if args.len() > MAX_COMMAND_ARGS {
            return Err(ParseError::TooManyArguments {
                count: args.len(),
                max: MAX_COMMAND_ARGS,
                line: lexed.line,
            });
        }

        Ok(Command::new(spec, args))
    }

    // ===== Helper methods =====

    fn expect_word<'t>(
        &self,
        token: &'t Token,
        expected: &'static str,
        line: usize,
    ) -> Result<&'t str, ParseError> {
        match token {
            Token::Word(word, _) => Ok(word),
            other => Err(ParseError::UnexpectedToken {
                expected,
                found: other.to_string(),
                line,
            }),
        }
    }

    fn resolve_element(
        &self,
        name: &str,
        universe: &Universe,
        line: usize,
    ) -> Result<Element, ParseError> {
        universe.index_of(name).ok_or_else(|| ParseError::UnknownElement {
            name: name.to_string(),
            line,
        })
    }
}

fn malformed(expected: &'static str, found: Option<&Token>, line: usize) -> ParseError {
    ParseError::MalformedPair {
        expected,
        found: found.map_or_else(|| "end of line".to_string(), Token::to_string),
        line,
    }
}
