/// Errors that can occur while submitting a booking.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request could not be sent or the response could not be read.
    #[error("network error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("booking API returned {status}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, for the log.
        body: String,
    },

    /// A success response did not contain `bookingDetails`.
    #[error("unexpected booking API response: {0}")]
    Decode(#[from] serde_json::Error),
}
