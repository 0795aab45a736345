use std::time::Duration;

use crate::ApiClientError;

/// Errors raised while starting a [`RunningServer`](super::RunningServer).
#[derive(Debug, derive_more::Error, derive_more::Display, derive_more::From)]
pub enum TestAppError {
    /// The listener could not be bound or inspected.
    #[display("I/O error: {_0}")]
    IoError(std::io::Error),

    /// The health check client could not be built.
    #[display("API client error: {_0}")]
    ClientError(ApiClientError),

    /// The server never reported healthy.
    #[from(skip)]
    #[display("Server failed to become healthy within {timeout:?}")]
    UnhealthyServer {
        /// How long the health check waited.
        timeout: Duration,
    },
}
