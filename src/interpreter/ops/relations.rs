//! Relation predicates, projections and closures

use super::{buffer, copy, push, AllocResult};
use crate::store::universe::Universe;
use crate::store::value::{starting_at, Pair, Relation, Set};

/// Every universe element is related to itself.
pub fn reflexive(relation: &Relation, universe: &Universe) -> bool {
    (0..universe.len()).all(|e| relation.contains(Pair::new(e, e)))
}

pub fn symmetric(relation: &Relation) -> bool {
    relation
        .pairs()
        .iter()
        .all(|&pair| relation.contains(pair.reversed()))
}

pub fn antisymmetric(relation: &Relation) -> bool {
    relation
        .pairs()
        .iter()
        .filter(|pair| pair.a != pair.b)
        .all(|&pair| !relation.contains(pair.reversed()))
}

pub fn transitive(relation: &Relation) -> bool {
    relation.pairs().iter().all(|first| {
        relation
            .starting_at(first.b)
            .iter()
            .all(|second| relation.contains(Pair::new(first.a, second.b)))
    })
}

/// No element is related to two different elements.
pub fn function(relation: &Relation) -> bool {
    relation.pairs().windows(2).all(|w| w[0].a != w[1].a)
}

/// Distinct first components.
pub fn domain(relation: &Relation) -> AllocResult<Set> {
    let mut result: Vec<usize> = buffer(relation.len())?;
    for pair in relation.pairs() {
        if result.last() != Some(&pair.a) {
            result.push(pair.a);
        }
    }
    Ok(Set::from_sorted(result))
}

/// Distinct second components.
pub fn codomain(relation: &Relation) -> AllocResult<Set> {
    let mut result: Vec<usize> = buffer(relation.len())?;
    result.extend(relation.pairs().iter().map(|pair| pair.b));
    result.sort_unstable();
    result.dedup();
    Ok(Set::from_sorted(result))
}

pub fn injective(relation: &Relation, a: &Set, _b: &Set) -> bool {
    function(relation) && a.len() == relation.len()
}

pub fn surjective(relation: &Relation, _a: &Set, b: &Set) -> AllocResult<bool> {
    Ok(codomain(relation)?.len() == b.len())
}

pub fn bijective(relation: &Relation, a: &Set, b: &Set) -> AllocResult<bool> {
    Ok(injective(relation, a, b) && surjective(relation, a, b)?)
}

/// Add `(e, e)` for every universe element.
pub fn closure_reflexive(relation: &Relation, universe: &Universe) -> AllocResult<Relation> {
    let mut pairs = copy(relation.pairs())?;

    for e in 0..universe.len() {
        let pair = Pair::new(e, e);
        if !relation.contains(pair) {
            push(&mut pairs, pair)?;
        }
    }

    pairs.sort_unstable();
    Ok(Relation::from_sorted(pairs))
}

/// Add the reverse of every pair.
pub fn closure_symmetric(relation: &Relation) -> AllocResult<Relation> {
    let mut pairs = copy(relation.pairs())?;

    for &pair in relation.pairs() {
        if !relation.contains(pair.reversed()) {
            push(&mut pairs, pair.reversed())?;
        }
    }

    pairs.sort_unstable();
    Ok(Relation::from_sorted(pairs))
}

/// Add `(a, c)` for every `(a, b), (b, c)` until nothing changes.
///
/// The scan starts over from the first pair each time a pair is added.
pub fn closure_transitive(relation: &Relation) -> AllocResult<Relation> {
    let mut pairs = copy(relation.pairs())?;

    'scan: loop {
        for i in 0..pairs.len() {
            let first = pairs[i];
            let missing = starting_at(&pairs, first.b)
                .iter()
                .map(|second| Pair::new(first.a, second.b))
                .find_map(|derived| pairs.binary_search(&derived).err().map(|at| (at, derived)));

            if let Some((at, derived)) = missing {
                pairs.try_reserve(1)?;
                pairs.insert(at, derived);
                continue 'scan;
            }
        }
        break;
    }

    Ok(Relation::from_sorted(pairs))
}
