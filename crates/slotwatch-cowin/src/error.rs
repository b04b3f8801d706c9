use thiserror::Error;

/// Errors returned by the `CoWIN` API client.
#[derive(Debug, Error)]
pub enum CowinError {
    /// Network, TLS, or timeout failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A success response whose body did not match the expected shape.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("invalid base URL \"{base_url}\": {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },
}

/// Failure to turn a district name into a district identifier.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// No district carries exactly this name. `candidates` lists every name
    /// the provider returned, in provider order.
    #[error("district \"{district}\" not found ({} known districts)", .candidates.len())]
    NotFound {
        district: String,
        candidates: Vec<String>,
    },

    /// The district list itself could not be fetched.
    #[error("district list unavailable: {0}")]
    RemoteUnavailable(#[source] CowinError),
}
