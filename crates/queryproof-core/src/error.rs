use thiserror::Error as ThisError;

///
/// EngineError
///
/// Failure classification for the testing engine and its adapters.
///
/// A failed metamorphic invariant is deliberately NOT represented here:
/// logical violations are the engine's output, counted and logged by the
/// service, never raised as errors.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum EngineError {
    /// An expression tree violated a structural invariant (wrong child
    /// arity for its node kind). Generation and transformation code in
    /// this crate never produce one; adapters raise it when compiling an
    /// externally-constructed tree.
    #[error("malformed query expression: {message}")]
    MalformedExpr { message: String },

    /// The adapter could not translate an expression into a native query
    /// (e.g. the store has no negation for the operand).
    #[error("query compilation failed: {message}")]
    Compile { message: String },

    /// The adapter could not execute a native query against the system
    /// under test.
    #[error("query execution failed: {message}")]
    Execute { message: String },

    /// The adapter's leaf-query catalog is empty or unusable, so no
    /// primitive queries can be generated.
    #[error("leaf catalog unusable: {message}")]
    Catalog { message: String },
}

impl EngineError {
    /// Construct a malformed-expression error.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedExpr {
            message: message.into(),
        }
    }

    /// Construct a compile-stage adapter error.
    pub fn compile(message: impl Into<String>) -> Self {
        Self::Compile {
            message: message.into(),
        }
    }

    /// Construct an execute-stage adapter error.
    pub fn execute(message: impl Into<String>) -> Self {
        Self::Execute {
            message: message.into(),
        }
    }

    /// Construct a leaf-catalog configuration error.
    pub fn catalog(message: impl Into<String>) -> Self {
        Self::Catalog {
            message: message.into(),
        }
    }
}

///
/// TESTS
///
