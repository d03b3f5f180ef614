use serde::{Deserialize, Serialize};
use std::ops::{BitAnd, BitOr};

///
/// QueryExpr
///
/// A boolean expression tree over an opaque native-query payload `Q`.
///
/// The tree is the engine's only view of a query: leaves carry native
/// primitive queries verbatim and are never inspected, inner nodes are the
/// usual boolean connectives. Nodes are plain values and are never mutated
/// after construction; every transformation consumes its input and builds
/// (or moves out) new nodes.
///
/// Well-formedness: `And`/`Or` carry two or more children. Nothing in this
/// module can produce a smaller arity, but trees can be built literally, so
/// adapters re-check arity when compiling.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum QueryExpr<Q> {
    Leaf(Q),
    And(Vec<Self>),
    Or(Vec<Self>),
    Not(Box<Self>),
}

impl<Q> QueryExpr<Q> {
    /// Wrap a native primitive query as a leaf.
    pub const fn leaf(query: Q) -> Self {
        Self::Leaf(query)
    }

    /// Negate this expression algebraically.
    ///
    /// - `Not x` yields `x` — one level of negation is cancelled rather
    ///   than wrapped again, so `Not` applied here recovers the child
    ///   exactly.
    /// - `Or [c1..cn]` yields `And [¬c1..¬cn]` and dually for `And`
    ///   (De Morgan), preserving child order.
    /// - `Leaf` yields `Not(Leaf)`: leaves are opaque, so their negation
    ///   is deferred to the adapter's NOT combinator at compile time.
    ///
    /// Negation is pushed towards the leaves, which means
    /// `x.negate().negate()` is logically but not structurally equal to
    /// `x` in general.
    #[must_use]
    pub fn negate(self) -> Self {
        match self {
            Self::Not(child) => *child,
            Self::Or(children) => Self::And(children.into_iter().map(Self::negate).collect()),
            Self::And(children) => Self::Or(children.into_iter().map(Self::negate).collect()),
            leaf @ Self::Leaf(_) => Self::Not(Box::new(leaf)),
        }
    }

    /// Conjoin two expressions into a two-child `And`.
    ///
    /// Nested `And`s are kept as-is: the checks rely on the exact
    /// two-child shape, so there is no flattening or simplification.
    #[must_use]
    pub fn and(self, other: Self) -> Self {
        Self::And(vec![self, other])
    }

    /// Disjoin two expressions into a two-child `Or`, without flattening.
    #[must_use]
    pub fn or(self, other: Self) -> Self {
        Self::Or(vec![self, other])
    }

    /// Number of leaf nodes in this tree.
    #[must_use]
    pub fn leaf_count(&self) -> usize {
        match self {
            Self::Leaf(_) => 1,
            Self::And(children) | Self::Or(children) => {
                children.iter().map(Self::leaf_count).sum()
            }
            Self::Not(child) => child.leaf_count(),
        }
    }
}

///
/// Bit Operations
/// `&` and `|` build conjunctions and disjunctions.
///
/// There is deliberately no `!` operator: a plain `Not` wrapper would sit
/// next to `negate` as a second, subtly different negation on the same
/// type. Negation always goes through [`QueryExpr::negate`].
///

impl<Q> BitAnd for QueryExpr<Q> {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.and(rhs)
    }
}

impl<Q> BitOr for QueryExpr<Q> {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.or(rhs)
    }
}

///
/// TESTS
///
