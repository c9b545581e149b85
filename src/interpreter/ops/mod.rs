//! Set and relation algebra
//!
//! Pure functions over already-sorted values:
//! - [`sets`]: emptiness, cardinality, complement, union, intersection,
//!   difference and the subset/equality predicates
//! - [`relations`]: relation predicates, domain/codomain and closures
//! - [`select`]: random pick of one element
//!
//! Sortedness of the inputs is a precondition and is not re-checked. Every
//! function that builds a new value reserves its storage with
//! [`Vec::try_reserve`] so allocation failure surfaces as an error instead of
//! aborting the process.

pub mod relations;
pub mod select;
pub mod sets;

use std::collections::TryReserveError;

pub type AllocResult<T> = Result<T, TryReserveError>;

/// Empty vector with room for `capacity` items.
pub(crate) fn buffer<T>(capacity: usize) -> AllocResult<Vec<T>> {
    let mut items = Vec::new();
    items.try_reserve_exact(capacity)?;
    Ok(items)
}

/// Push that reports allocation failure instead of aborting.
pub(crate) fn push<T>(items: &mut Vec<T>, item: T) -> AllocResult<()> {
    items.try_reserve(1)?;
    items.push(item);
    Ok(())
}

/// Fallible clone of a slice.
pub(crate) fn copy<T: Clone>(items: &[T]) -> AllocResult<Vec<T>> {
    let mut copied = buffer(items.len())?;
    copied.extend_from_slice(items);
    Ok(copied)
}
