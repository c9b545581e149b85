//! Random selection of a single element
//!
//! The random source is passed in by the caller so runs can be made
//! reproducible with a seeded generator.

use super::{buffer, AllocResult};
use crate::store::value::{Relation, Set};
use rand::{Rng, RngCore};

/// A resolved store reference of either collection type.
#[derive(Debug, Clone, Copy)]
pub enum Operand<'a> {
    Set(&'a Set),
    Relation(&'a Relation),
}

/// Pick one element uniformly at random.
///
/// Returns `Ok(None)` when the collection is empty, otherwise a singleton
/// set. For a relation a random pair is chosen first, then one of its two
/// components.
pub fn select(operand: Operand<'_>, rng: &mut dyn RngCore) -> AllocResult<Option<Set>> {
    let element = match operand {
        Operand::Set(set) => {
            if set.is_empty() {
                return Ok(None);
            }
            set.elements()[rng.gen_range(0..set.len())]
        }
        Operand::Relation(relation) => {
            if relation.is_empty() {
                return Ok(None);
            }
            let pair = relation.pairs()[rng.gen_range(0..relation.len())];
            if rng.gen_bool(0.5) {
                pair.a
            } else {
                pair.b
            }
        }
    };

    let mut singleton = buffer(1)?;
    singleton.push(element);
    Ok(Some(Set::from_sorted(singleton)))
}
