use crate::{
    adapter::SystemAdapter,
    error::EngineError,
    expr::QueryExpr,
    oracle::{ResultOracle, SetOracle},
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{info, warn};

/// Trials per check when the caller has no opinion.
pub const DEFAULT_TEST_COUNT: usize = 100;

/// Default lower bound on leaves per generated tree.
pub const DEFAULT_MIN_LEAF: usize = 1;

/// Default upper bound on leaves per generated tree.
pub const DEFAULT_MAX_LEAF: usize = 10;

///
/// CheckKind
///
/// The metamorphic relations the service knows how to drive. Each kind
/// pins down how the second query of a trial is derived from the first
/// and which oracle relation the two result collections must satisfy.
///

#[derive(Clone, Copy, Debug)]
enum CheckKind {
    /// `q2 = NOT(negate(q1))`; results must be equal.
    Equal,
    /// `q2 = negate(q1)`; results must not intersect.
    Not,
    /// `q2 = q1 OR <random>`; `r1` must be a subset of `r2`.
    SupersetByOr,
    /// `q2 = q1 AND <random>`; `r2` must be a subset of `r1`.
    SubsetByAnd,
}

impl CheckKind {
    const fn label(self) -> &'static str {
        match self {
            Self::Equal => "equal",
            Self::Not => "not",
            Self::SupersetByOr => "subset/or",
            Self::SubsetByAnd => "subset/and",
        }
    }

    const fn violation_message(self) -> &'static str {
        match self {
            Self::Equal => "results expected equal under double negation",
            Self::Not => "query and its negation co-selected records",
            Self::SupersetByOr => "OR of queries lost records of its operand",
            Self::SubsetByAnd => "AND of queries returned records outside its operand",
        }
    }
}

///
/// QueryTestingService
///
/// The orchestrator: generates randomized expression trees over the
/// adapter's primitive queries, derives a logically-related partner tree
/// per trial, runs both against the system under test, and counts trials
/// whose result pair breaks the metamorphic relation.
///
/// A violation is the engine's product, not a fault: check runs return the
/// violation count and only fail on adapter errors, which abort the run on
/// first occurrence and propagate.
///
/// Execution is sequential by design; with [`Self::with_seed`] the whole
/// run is deterministic because a single RNG drives generation in trial
/// order.
///

pub struct QueryTestingService<A, O = SetOracle>
where
    A: SystemAdapter,
    O: ResultOracle<A::Record>,
{
    adapter: A,
    oracle: O,
    rng: ChaCha8Rng,
    min_leaf_count: usize,
    max_leaf_count: usize,
}

impl<A: SystemAdapter> QueryTestingService<A> {
    /// Create a service with the default [`SetOracle`] and an
    /// entropy-derived seed.
    pub fn new(adapter: A) -> Self {
        Self::with_oracle(adapter, SetOracle)
    }
}

impl<A, O> QueryTestingService<A, O>
where
    A: SystemAdapter,
    O: ResultOracle<A::Record>,
{
    /// Create a service with a custom oracle and an entropy-derived seed.
    pub fn with_oracle(adapter: A, oracle: O) -> Self {
        let rng = ChaCha8Rng::from_rng(&mut rand::rng());

        Self::with_rng(adapter, oracle, rng)
    }

    /// Create a deterministic service: identical seeds and adapters
    /// reproduce identical trial sequences.
    pub fn with_seed(adapter: A, oracle: O, seed: u64) -> Self {
        Self::with_rng(adapter, oracle, ChaCha8Rng::seed_from_u64(seed))
    }

    fn with_rng(adapter: A, oracle: O, rng: ChaCha8Rng) -> Self {
        Self {
            adapter,
            oracle,
            rng,
            min_leaf_count: DEFAULT_MIN_LEAF,
            max_leaf_count: DEFAULT_MAX_LEAF,
        }
    }

    /// Recover the adapter, e.g. to inspect call counters after a run.
    pub fn into_adapter(self) -> A {
        self.adapter
    }

    // --- leaf-count bounds ---

    /// Lower bound on leaves per generated tree.
    #[must_use]
    pub const fn min_leaf_count(&self) -> usize {
        self.min_leaf_count
    }

    /// Upper bound on leaves per generated tree.
    #[must_use]
    pub const fn max_leaf_count(&self) -> usize {
        self.max_leaf_count
    }

    /// Set the lower bound (clamped to ≥ 1). Raises the upper bound when
    /// the new minimum would pass it, so `min ≤ max` holds at all times.
    pub const fn set_min_leaf_count(&mut self, count: usize) {
        self.min_leaf_count = if count < 1 { 1 } else { count };
        if self.max_leaf_count < self.min_leaf_count {
            self.max_leaf_count = self.min_leaf_count;
        }
    }

    /// Set the upper bound (clamped to ≥ 1). A value below the current
    /// minimum is pulled up to it, so `min ≤ max` holds at all times.
    pub const fn set_max_leaf_count(&mut self, count: usize) {
        let count = if count < 1 { 1 } else { count };
        self.max_leaf_count = if count < self.min_leaf_count {
            self.min_leaf_count
        } else {
            count
        };
    }

    // --- check runs ---

    /// Double-negation check: a query and a fresh `NOT` wrapped around its
    /// negation must select the same records. Returns the violation count.
    pub fn run_equal_test(&mut self, count: usize) -> Result<usize, EngineError> {
        self.run_check(CheckKind::Equal, count)
    }

    /// Complement check: a query and its negation must never co-select a
    /// record. Returns the violation count.
    pub fn run_not_test(&mut self, count: usize) -> Result<usize, EngineError> {
        self.run_check(CheckKind::Not, count)
    }

    /// Subset check: an `OR` is a superset of either operand and an `AND`
    /// a subset of either operand. The first `count / 2` trials take the
    /// OR side, the rest the AND side (the AND half gets the extra trial
    /// when `count` is odd). Returns the combined violation count.
    pub fn run_subset_test(&mut self, count: usize) -> Result<usize, EngineError> {
        info!(check = "subset", trials = count, "starting subset check");

        let half = count / 2;
        let invalid = self.run_trials(CheckKind::SupersetByOr, half)?
            + self.run_trials(CheckKind::SubsetByAnd, count - half)?;

        info!(
            check = "subset",
            "{invalid} out of {count} queries invalid"
        );

        Ok(invalid)
    }

    fn run_check(&mut self, kind: CheckKind, count: usize) -> Result<usize, EngineError> {
        info!(check = kind.label(), trials = count, "starting check");

        let invalid = self.run_trials(kind, count)?;

        info!(
            check = kind.label(),
            "{invalid} out of {count} queries invalid"
        );

        Ok(invalid)
    }

    /// Run `count` trials of one check kind, returning how many violated
    /// the relation. Adapter failures abort the run on first occurrence.
    fn run_trials(&mut self, kind: CheckKind, count: usize) -> Result<usize, EngineError> {
        let mut invalid = 0;

        for _ in 0..count {
            let query1 = self.build_query()?;
            let query2 = match kind {
                // Deliberately a literally-constructed NOT around the
                // negation, not negate() applied twice: the check must
                // exercise a fresh NOT node, not the simplified form.
                CheckKind::Equal => QueryExpr::Not(Box::new(query1.clone().negate())),
                CheckKind::Not => query1.clone().negate(),
                CheckKind::SupersetByOr => query1.clone().or(self.build_query()?),
                CheckKind::SubsetByAnd => query1.clone().and(self.build_query()?),
            };

            let native1 = self.adapter.compile(&query1)?;
            let native2 = self.adapter.compile(&query2)?;
            let result1 = self.adapter.execute(&native1)?;
            let result2 = self.adapter.execute(&native2)?;

            let valid = match kind {
                CheckKind::Equal => self.oracle.is_equals(&result1, &result2),
                CheckKind::Not => !self.oracle.is_intersected(&result1, &result2),
                CheckKind::SupersetByOr => self.oracle.is_subset(&result1, &result2),
                CheckKind::SubsetByAnd => self.oracle.is_subset(&result2, &result1),
            };

            if !valid {
                invalid += 1;
                warn!(
                    check = kind.label(),
                    query1 = %self.adapter.describe_query(&native1),
                    query2 = %self.adapter.describe_query(&native2),
                    result1 = %self.adapter.describe_results(&result1),
                    result2 = %self.adapter.describe_results(&result2),
                    "{}",
                    kind.violation_message(),
                );
            }
        }

        Ok(invalid)
    }

    // --- tree generation ---

    /// Build one random tree with a leaf count drawn uniformly from the
    /// configured bounds.
    fn build_query(&mut self) -> Result<QueryExpr<A::Query>, EngineError> {
        let leaf_count = self
            .rng
            .random_range(self.min_leaf_count..=self.max_leaf_count);

        self.build_expr(leaf_count)
    }

    /// Build a random tree with exactly `leaf_count` leaves.
    ///
    /// A single leaf is negated with probability 1/2; larger trees split
    /// at a random point and join the halves with AND or OR, again with
    /// probability 1/2 each.
    fn build_expr(&mut self, leaf_count: usize) -> Result<QueryExpr<A::Query>, EngineError> {
        debug_assert!(leaf_count >= 1);

        if leaf_count == 1 {
            let leaf = QueryExpr::leaf(self.adapter.build_leaf()?);

            return Ok(if self.rng.random_bool(0.5) {
                leaf
            } else {
                leaf.negate()
            });
        }

        let left_count = self.rng.random_range(1..leaf_count);
        let left = self.build_expr(left_count)?;
        let right = self.build_expr(leaf_count - left_count)?;

        Ok(if self.rng.random_bool(0.5) {
            left.and(right)
        } else {
            left.or(right)
        })
    }
}

///
/// TESTS
///
