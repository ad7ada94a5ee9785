use std::fmt;

use bifrost_core::ValidationError;

/// The request payload could not be built from the gradient descriptors.
///
/// This is a caller bug (wrong stop counts), not a service condition; it is
/// never worth retrying.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestError(pub ValidationError);

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cannot build generation request: {}", self.0)
    }
}

impl std::error::Error for RequestError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.0)
    }
}

/// The external generation service failed.
///
/// Transient by contract: surfaced to the user with a retry affordance, never
/// retried automatically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// The call itself failed (transport, timeout, model unavailable).
    Unavailable(String),
    /// The service replied, but not in the contracted three-snippet shape.
    BadResponse(String),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceError::Unavailable(reason) => {
                write!(f, "generation service unavailable: {reason}")
            }
            ServiceError::BadResponse(reason) => {
                write!(f, "generation service returned a malformed response: {reason}")
            }
        }
    }
}

impl std::error::Error for ServiceError {}

/// Either side of the request/service failure split.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenAiError {
    Request(RequestError),
    Service(ServiceError),
}

impl GenAiError {
    /// Whether offering the user a manual retry makes sense.
    pub fn is_retryable(&self) -> bool {
        matches!(self, GenAiError::Service(_))
    }
}

impl fmt::Display for GenAiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenAiError::Request(e) => e.fmt(f),
            GenAiError::Service(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for GenAiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GenAiError::Request(e) => Some(e),
            GenAiError::Service(e) => Some(e),
        }
    }
}

impl From<RequestError> for GenAiError {
    fn from(e: RequestError) -> Self {
        GenAiError::Request(e)
    }
}

impl From<ServiceError> for GenAiError {
    fn from(e: ServiceError) -> Self {
        GenAiError::Service(e)
    }
}
