use thiserror::Error;

/// Failure of a single call to the booking backend.
///
/// Every variant is terminal for the operation that produced it: callers log
/// it and keep whatever state they already had.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, CORS, connection reset...)
    #[error("network error: {0}")]
    Network(String),
    /// The backend answered with a non-2xx status
    #[error("server error {status}: {body}")]
    Http { status: u16, body: String },
    /// The response body was not the JSON we expected
    #[error("failed to decode response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn network(message: impl ToString) -> Self {
        Self::Network(message.to_string())
    }

    pub fn decode(message: impl ToString) -> Self {
        Self::Decode(message.to_string())
    }
}
