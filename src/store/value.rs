//! Set and relation values
//!
//! Both types are thin wrappers around a sorted, duplicate-free `Vec`. The
//! algebra in [`crate::interpreter::ops`] relies on that ordering, so values
//! are only ever built through [`Set::normalized`] / [`Relation::normalized`]
//! (which sort and reject duplicates) or [`Set::from_sorted`] /
//! [`Relation::from_sorted`] when the caller already produced sorted data.

use super::universe::Universe;
use std::fmt;

/// Index of an element in the [`Universe`]
pub type Element = usize;

/// Finite subset of the universe, stored as ascending indices
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Set {
    elements: Vec<Element>,
}

impl Set {
    pub fn new() -> Self {
        Set::default()
    }

    /// Wrap indices that are already strictly ascending.
    pub fn from_sorted(elements: Vec<Element>) -> Self {
        debug_assert!(elements.windows(2).all(|w| w[0] < w[1]));
        Set { elements }
    }

    /// Sort `elements`; returns the first repeated element on failure.
    pub fn normalized(mut elements: Vec<Element>) -> Result<Self, Element> {
        elements.sort_unstable();
        if let Some(w) = elements.windows(2).find(|w| w[0] == w[1]) {
            return Err(w[0]);
        }
        Ok(Set { elements })
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn contains(&self, element: Element) -> bool {
        self.elements.binary_search(&element).is_ok()
    }

    /// Render as `S a b c` against `universe`.
    pub fn display<'a>(&'a self, universe: &'a Universe) -> SetDisplay<'a> {
        SetDisplay {
            set: self,
            universe,
        }
    }
}

/// Ordered pair of universe indices; ordering is lexicographic on `(a, b)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pair {
    pub a: Element,
    pub b: Element,
}

impl Pair {
    pub fn new(a: Element, b: Element) -> Self {
        Pair { a, b }
    }

    pub fn reversed(self) -> Self {
        Pair::new(self.b, self.a)
    }
}

/// Binary relation over the universe, stored as ascending pairs
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Relation {
    pairs: Vec<Pair>,
}

impl Relation {
    pub fn new() -> Self {
        Relation::default()
    }

    pub fn from_sorted(pairs: Vec<Pair>) -> Self {
        debug_assert!(pairs.windows(2).all(|w| w[0] < w[1]));
        Relation { pairs }
    }

    /// Sort `pairs`; returns the first repeated pair on failure.
    pub fn normalized(mut pairs: Vec<Pair>) -> Result<Self, Pair> {
        pairs.sort_unstable();
        if let Some(w) = pairs.windows(2).find(|w| w[0] == w[1]) {
            return Err(w[0]);
        }
        Ok(Relation { pairs })
    }

    pub fn pairs(&self) -> &[Pair] {
        &self.pairs
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn contains(&self, pair: Pair) -> bool {
        self.pairs.binary_search(&pair).is_ok()
    }

    /// All pairs whose first component is `a`.
    pub fn starting_at(&self, a: Element) -> &[Pair] {
        starting_at(&self.pairs, a)
    }

    pub fn display<'a>(&'a self, universe: &'a Universe) -> RelationDisplay<'a> {
        RelationDisplay {
            relation: self,
            universe,
        }
    }
}

/// Contiguous run of pairs with first component `a` in a sorted slice.
pub(crate) fn starting_at(pairs: &[Pair], a: Element) -> &[Pair] {
    let lo = pairs.partition_point(|p| p.a < a);
    let hi = pairs.partition_point(|p| p.a <= a);
    &pairs[lo..hi]
}

pub struct SetDisplay<'a> {
    set: &'a Set,
    universe: &'a Universe,
}

impl fmt::Display for SetDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "S")?;
        for &element in self.set.elements() {
            write!(f, " {}", self.universe.name(element))?;
        }
        Ok(())
    }
}

pub struct RelationDisplay<'a> {
    relation: &'a Relation,
    universe: &'a Universe,
}

impl fmt::Display for RelationDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R")?;
        for pair in self.relation.pairs() {
            write!(
                f,
                " ({} {})",
                self.universe.name(pair.a),
                self.universe.name(pair.b)
            )?;
        }
        Ok(())
    }
}
