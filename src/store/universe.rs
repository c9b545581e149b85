//! The universe of named elements
//!
//! Every set and relation in a program is expressed as indices into the
//! [`Universe`]. Names are interned once, in declaration order, and the index
//! of a name never changes afterwards.

use super::value::{Element, Set};
use crate::interpreter::commands;
use rustc_hash::FxHashMap;
use std::fmt;
use thiserror::Error;

/// Reasons a universe declaration is rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UniverseError {
    #[error("element '{0}' is declared more than once")]
    Duplicate(String),

    #[error("'{0}' is a reserved word and cannot be a universe element")]
    Reserved(String),
}

/// Ordered, duplicate-free vocabulary of element names
#[derive(Debug, Clone, Default)]
pub struct Universe {
    names: Vec<String>,
    indices: FxHashMap<String, Element>,
}

impl Universe {
    /// Intern `names` in order, rejecting duplicates and reserved words.
    pub fn from_names<I, S>(names: I) -> Result<Self, UniverseError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut universe = Universe::default();

        for name in names {
            let name = name.into();
            if commands::is_reserved(&name) {
                return Err(UniverseError::Reserved(name));
            }
            if universe.indices.contains_key(&name) {
                return Err(UniverseError::Duplicate(name));
            }
            universe.indices.insert(name.clone(), universe.names.len());
            universe.names.push(name);
        }

        Ok(universe)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Index of `name`, if it belongs to the universe
    pub fn index_of(&self, name: &str) -> Option<Element> {
        self.indices.get(name).copied()
    }

    /// Name of the element at `index`.
    ///
    /// Indices come from sets and relations built against this universe, so
    /// they are always in range.
    pub fn name(&self, index: Element) -> &str {
        &self.names[index]
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// The whole universe as a set: every index in `0..len`.
    pub fn to_set(&self) -> Set {
        Set::from_sorted((0..self.names.len()).collect())
    }
}

impl fmt::Display for Universe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "U")?;
        for name in &self.names {
            write!(f, " {}", name)?;
        }
        Ok(())
    }
}
