use aws_sdk_dynamodb::error::{DisplayErrorContext, SdkError};
use thiserror::Error;

/// Failure talking to the key-value store.
///
/// "Not found" is not an error at this layer: point lookups return `Option`
/// and conditional writes report whether they matched. Anything that reaches
/// this type is a communication, authentication, or unexpected service
/// failure and surfaces to the caller as-is.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("store request failed: {0}")]
    Communication(String),
}

impl StoreError {
    /// Wrap an AWS SDK failure, keeping the full error chain in the message.
    pub fn from_sdk<E, R>(err: SdkError<E, R>) -> Self
    where
        E: std::error::Error + 'static,
        R: std::fmt::Debug,
    {
        Self::Communication(DisplayErrorContext(&err).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn communication_error_carries_message() {
        let err = StoreError::Communication("connection refused".to_string());
        assert_eq!(err.to_string(), "store request failed: connection refused");
    }
}
