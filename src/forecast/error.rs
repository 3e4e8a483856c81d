use thiserror::Error;

/// Errors a fetch cycle can produce.
///
/// Every variant is non-fatal: the scheduler turns each one into the
/// error segment line and tries again on the next tick.
#[derive(Debug, Error)]
pub enum ForecastError {
    /// Today's forecast run has not been published yet.
    #[error("not ready: today's data is published after 02:12")]
    NotReady,

    /// The request could not be completed.
    #[error("request failed: {source}")]
    Network {
        #[source]
        source: reqwest::Error,
    },

    /// The provider answered with a non-200 status.
    #[error("status: {status}")]
    HttpStatus { status: u16 },

    /// The provider reported a failure in its envelope.
    #[error("result:{code}: {message}")]
    Api { code: String, message: String },

    /// The response did not have the expected shape.
    #[error("unexpected response: {0}")]
    Parse(String),
}
