use thiserror::Error;

/// Generic error type used by service layer functions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    /// The user is not allowed to perform the operation.
    #[error("unauthorized")]
    Unauthorized,
    /// Requested entity was not found.
    #[error("not found")]
    NotFound,
    /// Submitted data was rejected; the message is shown to the user.
    #[error("{0}")]
    Form(String),
    /// A value violated a domain type constraint.
    #[error("invalid value: {0}")]
    TypeConstraint(String),
    /// An unexpected internal error occurred.
    #[error("internal error")]
    Internal,
}

/// Convenient alias for results returned from service functions.
pub type ServiceResult<T> = Result<T, ServiceError>;
