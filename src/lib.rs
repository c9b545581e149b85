//! # Introduction
//!
//! setcal interprets a tiny line-oriented language over a universe of named
//! elements. A program declares the universe, some sets and relations over
//! it, and then a list of commands that test properties, derive new values or
//! pick random elements. Commands may conditionally jump forward, which gives
//! the language primitive control flow.
//!
//! ```text
//! U a b c
//! S a b
//! S b c
//! R (a b) (b c)
//! C union 2 3
//! C closure_trans 4
//! ```
//!
//! ## Execution pipeline
//!
//! ```text
//! Source → Lexer → Parser → Store → Interpreter → output lines
//! ```
//!
//! 1. [`parser`]: tokenises each line and builds the [`store::Store`].
//! 2. [`store`]: the universe plus one typed slot per line.
//! 3. [`interpreter`]: the command table, the set/relation algebra and the
//!    engine that runs the store once, top to bottom.
//! 4. [`config`]: environment settings (log filter, `select` seed).

pub mod config;
pub mod interpreter;
pub mod parser;
pub mod store;

use config::ConfigError;
use interpreter::engine::Interpreter;
use interpreter::errors::RuntimeError;
use parser::parse::{ParseError, Parser};
use rand::RngCore;
use std::io::{self, Write};
use std::path::PathBuf;
use thiserror::Error;

/// Any error that ends a run
#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot read '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

/// Parse `source` and run it, writing program output to `out`.
pub fn execute<W: Write, R: RngCore>(source: &str, out: W, rng: R) -> Result<(), Error> {
    let store = Parser::new(source)?.parse_store()?;
    Interpreter::new(store, out, rng).run()?;
    Ok(())
}
