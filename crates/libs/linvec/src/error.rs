//! Error type for linvec.

/// Errors raised when a vector operation meets a degenerate input.
///
/// A zero divisor is always reported: operations returning a [`Result`]
/// surface it as one of these variants, arithmetic operators panic with the
/// same message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MathError {
    /// A vector was divided by a zero scalar or by a vector with a zero
    /// component.
    #[error("division by zero")]
    DivisionByZero,
    /// The operation needs a vector with non-zero magnitude.
    #[error("cannot {op} a zero-magnitude vector")]
    ZeroMagnitude {
        /// Name of the failed operation.
        op: &'static str,
    },
    /// The operation met an infinite or NaN component, or its result
    /// overflowed.
    #[error("cannot {op} a vector with non-finite components")]
    NonFinite {
        /// Name of the failed operation.
        op: &'static str,
    },
    /// An angle unit could not be parsed.
    #[error("invalid angle unit '{0}'")]
    InvalidAngleUnit(String),
}

/// Result type used across linvec.
pub type Result<T> = std::result::Result<T, MathError>;
