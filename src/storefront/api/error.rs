use derive_more::{Display, Error};

/// Every way a call to the rest api can go wrong. The view collapses them all
/// into one message per operation, the detail only reaches the log.
#[derive(Debug, Display, Error, PartialEq)]
pub(crate) enum ApiError {
    #[display("request could not be sent, {reason}")]
    Transport { reason: String },
    #[display("got unexpected status code, {status}")]
    Status { status: u16 },
    #[display("failed to decode response body, {reason}")]
    Decode { reason: String },
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if let Some(status) = e.status() {
            return ApiError::Status { status: status.as_u16() };
        }
        if e.is_decode() {
            return ApiError::Decode { reason: e.to_string() };
        }
        ApiError::Transport { reason: e.to_string() }
    }
}
