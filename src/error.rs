/*
    Errors
*/

use thiserror::Error;

use crate::algebra::OperationKind;

/// Errors raised while building or evaluating a `Number`.
///
/// Evaluation is pure, so none of these are transient: evaluating
/// the same `Number` again reproduces the same error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// An operand resolved to a value outside the definition set
    /// of the operation consuming it.
    #[error("{kind} is not defined for {values:?}")]
    DomainViolation {
        kind: OperationKind,
        values: Vec<f64>,
    },

    /// A value is not a member of a declared set.
    #[error("{value} is not a member of {set}")]
    OutOfDefinitionSet { value: f64, set: String },

    /// The input could not be read as a number.
    #[error("invalid numeric literal: {0:?}")]
    InvalidLiteral(String),

    /// A variadic operation was built without any operand.
    #[error("{0} requires at least one operand")]
    EmptyOperands(OperationKind),

    /// Not enough data points for a statistic or a fit.
    #[error("expected at least {required} data points, found {found}")]
    InsufficientData { required: usize, found: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
