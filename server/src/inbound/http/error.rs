//! HTTP boundary for domain failures.
//!
//! Purpose: keep the domain error type HTTP-agnostic while giving Actix a
//! single terminal handler that turns any propagated failure into the wire
//! envelope `{exceptionType, code, error?}`. Composite failures are
//! unwrapped to their root cause here, and only here; the envelope never
//! reports the wrapper's classification.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde::Serialize;
use tracing::error;

use crate::domain::Error;
use crate::middleware::{TRACE_ID_HEADER, TraceId};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

/// Wire envelope reported for any unhandled failure.
///
/// `error` is omitted, not null, when the root cause carries no message.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ErrorEnvelope<'a> {
    exception_type: &'a str,
    code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a str>,
}

fn status_for(error: &Error) -> StatusCode {
    match error {
        Error::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        Error::NotFound => StatusCode::NOT_FOUND,
        Error::Conflict { .. } => StatusCode::CONFLICT,
        Error::Unavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
        Error::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        Error::Wrapped(inner) => status_for(inner.root_cause()),
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.root_cause())
    }

    fn error_response(&self) -> HttpResponse {
        error!(error = %self, exception_type = self.root_cause().exception_type(), "request failed");

        let cause = self.root_cause();
        let status = status_for(cause);
        let envelope = ErrorEnvelope {
            exception_type: cause.exception_type(),
            code: status.as_u16(),
            error: cause.message(),
        };

        let mut builder = HttpResponse::build(status);
        if let Some(id) = TraceId::current() {
            builder.insert_header((TRACE_ID_HEADER, id.to_string()));
        }
        builder.json(envelope)
    }
}

impl From<actix_web::Error> for Error {
    fn from(err: actix_web::Error) -> Self {
        // Do not leak implementation details to clients.
        error!(error = %err, "actix error promoted to domain error");
        Self::internal("Internal server error")
    }
}

#[cfg(test)]
mod tests;
