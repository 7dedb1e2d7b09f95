use reqwest::StatusCode;
use thiserror::Error;

/// Failures raised by [`TodoApiClient`](crate::api::client::TodoApiClient).
///
/// Every variant is terminal at the call site that produces it; the binary
/// maps each one to a diagnostic on stderr and a single non-zero exit code.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request could not be sent or the connection failed mid-flight.
    #[error("error fetching data from {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status.
    #[error("error fetching data from {url}: status {status}")]
    Status { url: String, status: StatusCode },

    /// The response body did not match the expected JSON shape.
    #[error("error processing data from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}
