//! Domain-level error type.
//!
//! Transport agnostic: inbound adapters decide how a code maps onto an HTTP
//! status and how the payload is rendered. Components raise these directly
//! for rejections they detect themselves (validation failures, missing
//! entities); storage failures are converted via
//! [`RepositoryError`](super::ports::RepositoryError) mapping.

/// Stable category describing why a request failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// The request is malformed or fails validation.
    InvalidRequest,
    /// The request was well formed but names an entity that does not exist.
    NotFound,
    /// An unexpected failure the service does not want to describe to
    /// clients.
    InternalError,
}

/// Error payload carried from the point of rejection to the HTTP adapter.
///
/// The message is the client-facing text; for [`ErrorCode::InternalError`]
/// the adapter replaces it with a generic message before responding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    code: ErrorCode,
    message: String,
}

impl Error {
    /// Construct an error with an explicit code.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Convenience constructor for [`ErrorCode::InvalidRequest`].
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidRequest, message)
    }

    /// Convenience constructor for [`ErrorCode::NotFound`].
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, message)
    }

    /// Convenience constructor for [`ErrorCode::InternalError`].
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// Category of this failure.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Client-facing message (pre-redaction).
    pub fn message(&self) -> &str {
        self.message.as_str()
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn constructors_set_the_matching_code() {
        assert_eq!(Error::bad_request("nope").code(), ErrorCode::InvalidRequest);
        assert_eq!(Error::not_found("gone").code(), ErrorCode::NotFound);
        assert_eq!(Error::internal("boom").code(), ErrorCode::InternalError);
    }

    #[rstest]
    fn display_renders_the_message_only() {
        let err = Error::not_found("no topic with slug gardening found");
        assert_eq!(err.to_string(), "no topic with slug gardening found");
    }
}
