//! Domain-level failure union.
//!
//! These errors are transport agnostic. The HTTP adapter maps them to the
//! wire envelope; nothing in this module knows about status codes' JSON
//! rendering beyond the numeric classification.
//!
//! Failures escaping the async pipeline may arrive wrapped: the transaction
//! layer aggregates the failure of a chained stage into [`Error::Wrapped`].
//! Classification always operates on the root cause, obtained with
//! [`Error::root_cause`], never on the wrapper itself.

/// Domain failure raised by services and mapped at the HTTP boundary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The client supplied an invalid request shape.
    #[error("{message}")]
    Validation { message: String },
    /// A lookup by identity produced no entity.
    #[error("fruit not found")]
    NotFound,
    /// The store rejected a write because of a uniqueness constraint.
    #[error("{message}")]
    Conflict { message: String },
    /// The store could not be reached.
    #[error("{message}")]
    Unavailable { message: String },
    /// An unexpected fault inside the service.
    #[error("{message}")]
    Internal { message: String },
    /// Composite produced when the async pipeline aggregates a failure from
    /// a chained stage. Never surfaced to clients as-is.
    #[error(transparent)]
    Wrapped(Box<Error>),
}

impl Error {
    /// Convenience constructor for [`Error::Validation`].
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Convenience constructor for [`Error::Conflict`].
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    /// Convenience constructor for [`Error::Unavailable`].
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    /// Convenience constructor for [`Error::Internal`].
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Wrap an existing failure into the pipeline composite.
    pub fn wrapped(cause: Error) -> Self {
        Self::Wrapped(Box::new(cause))
    }

    /// Unwrap composites down to the underlying root cause.
    ///
    /// Pure and idempotent; applied once at the response boundary.
    pub fn root_cause(&self) -> &Error {
        let mut cause = self;
        while let Self::Wrapped(inner) = cause {
            cause = inner;
        }
        cause
    }

    /// Stable classification name reported as `exceptionType`.
    ///
    /// Callers are expected to resolve the root cause first; the wrapper's
    /// own name exists only for logging.
    pub fn exception_type(&self) -> &'static str {
        match self {
            Self::Validation { .. } => "ValidationError",
            Self::NotFound => "NotFound",
            Self::Conflict { .. } => "ConstraintViolation",
            Self::Unavailable { .. } => "ServiceUnavailable",
            Self::Internal { .. } => "InternalError",
            Self::Wrapped(_) => "WrappedFailure",
        }
    }

    /// Message carried by the failure, if any.
    ///
    /// [`Error::NotFound`] deliberately carries none; the wire envelope
    /// omits the `error` field for it.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Validation { message }
            | Self::Conflict { message }
            | Self::Unavailable { message }
            | Self::Internal { message } => Some(message.as_str()),
            Self::NotFound => None,
            Self::Wrapped(inner) => inner.message(),
        }
    }
}
