//! Set operations
//!
//! All binary operations are single sorted merges, `O(|a| + |b|)`.

use super::{buffer, AllocResult};
use crate::store::universe::Universe;
use crate::store::value::Set;
use std::cmp::Ordering;

pub fn empty(set: &Set) -> bool {
    set.is_empty()
}

pub fn cardinality(set: &Set) -> usize {
    set.len()
}

/// Universe indices not present in `set`.
pub fn complement(set: &Set, universe: &Universe) -> AllocResult<Set> {
    let mut result = buffer(universe.len().saturating_sub(set.len()))?;
    let mut members = set.elements().iter().peekable();

    for element in 0..universe.len() {
        if members.peek() == Some(&&element) {
            members.next();
        } else {
            result.push(element);
        }
    }

    Ok(Set::from_sorted(result))
}

pub fn union(a: &Set, b: &Set) -> AllocResult<Set> {
    let (a, b) = (a.elements(), b.elements());
    let mut result = buffer(a.len() + b.len())?;
    let (mut i, mut j) = (0, 0);

    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            Ordering::Less => {
                result.push(a[i]);
                i += 1;
            }
            Ordering::Greater => {
                result.push(b[j]);
                j += 1;
            }
            Ordering::Equal => {
                result.push(a[i]);
                i += 1;
                j += 1;
            }
        }
    }
    result.extend_from_slice(&a[i..]);
    result.extend_from_slice(&b[j..]);

    Ok(Set::from_sorted(result))
}

pub fn intersect(a: &Set, b: &Set) -> AllocResult<Set> {
    let (a, b) = (a.elements(), b.elements());
    let mut result = buffer(a.len().min(b.len()))?;
    let (mut i, mut j) = (0, 0);

    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            Ordering::Less => i += 1,
            Ordering::Greater => j += 1,
            Ordering::Equal => {
                result.push(a[i]);
                i += 1;
                j += 1;
            }
        }
    }

    Ok(Set::from_sorted(result))
}

/// Elements of `a` that are not in `b`.
pub fn minus(a: &Set, b: &Set) -> AllocResult<Set> {
    let (a, b) = (a.elements(), b.elements());
    let mut result = buffer(a.len())?;
    let (mut i, mut j) = (0, 0);

    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            Ordering::Less => {
                result.push(a[i]);
                i += 1;
            }
            Ordering::Greater => j += 1,
            Ordering::Equal => {
                i += 1;
                j += 1;
            }
        }
    }
    result.extend_from_slice(&a[i..]);

    Ok(Set::from_sorted(result))
}

pub fn subseteq(a: &Set, b: &Set) -> bool {
    let (a, b) = (a.elements(), b.elements());
    let (mut i, mut j) = (0, 0);

    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            // a[i] can no longer appear in b
            Ordering::Less => return false,
            Ordering::Greater => j += 1,
            Ordering::Equal => {
                i += 1;
                j += 1;
            }
        }
    }

    i == a.len()
}

/// Proper subset.
pub fn subset(a: &Set, b: &Set) -> bool {
    a.len() != b.len() && subseteq(a, b)
}

pub fn equals(a: &Set, b: &Set) -> bool {
    a.len() == b.len() && subseteq(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(elements: &[usize]) -> Set {
        Set::normalized(elements.to_vec()).unwrap()
    }

    #[test]
    fn test_empty_and_card() {
        assert!(empty(&Set::new()));
        assert!(!empty(&set(&[3])));
        assert_eq!(cardinality(&set(&[0, 4, 7])), 3);
    }

    #[test]
    fn test_complement() {
        let universe = Universe::from_names(["a", "b", "c", "d"]).unwrap();

        assert_eq!(complement(&set(&[1, 3]), &universe).unwrap(), set(&[0, 2]));
        assert_eq!(complement(&Set::new(), &universe).unwrap(), universe.to_set());
        assert!(complement(&universe.to_set(), &universe).unwrap().is_empty());
    }

    #[test]
    fn test_union_intersect_minus() {
        let a = set(&[0, 2, 4, 6]);
        let b = set(&[1, 2, 3, 6, 9]);

        assert_eq!(union(&a, &b).unwrap(), set(&[0, 1, 2, 3, 4, 6, 9]));
        assert_eq!(intersect(&a, &b).unwrap(), set(&[2, 6]));
        assert_eq!(minus(&a, &b).unwrap(), set(&[0, 4]));
        assert_eq!(minus(&b, &a).unwrap(), set(&[1, 3, 9]));
    }

    #[test]
    fn test_with_empty_operand() {
        let a = set(&[1, 5]);
        let e = Set::new();

        assert_eq!(union(&a, &e).unwrap(), a);
        assert!(intersect(&a, &e).unwrap().is_empty());
        assert_eq!(minus(&a, &e).unwrap(), a);
        assert!(subseteq(&e, &a));
        assert!(subset(&e, &a));
        assert!(!subseteq(&a, &e));
    }

    #[test]
    fn test_subset_predicates() {
        let a = set(&[1, 3]);
        let b = set(&[0, 1, 2, 3]);

        assert!(subseteq(&a, &b));
        assert!(subset(&a, &b));
        assert!(!subseteq(&b, &a));
        assert!(subseteq(&a, &a));
        assert!(!subset(&a, &a));
        assert!(equals(&a, &set(&[3, 1])));
        assert!(!equals(&a, &set(&[1, 2])));
        assert!(!subseteq(&set(&[1, 4]), &b));
    }
}
