use thiserror::Error;

/// Errors raised by chain construction and the solver entry points.
///
/// Every precondition violation maps to [`IkError::InvalidArgument`]; a solve
/// that fails to converge is reported through
/// [`SolveResult`](crate::ik::SolveResult), never through this type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IkError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl IkError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        IkError::InvalidArgument(reason.into())
    }
}
