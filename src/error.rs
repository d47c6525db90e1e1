use thiserror::Error;

/// Errors from the collaborator layer (fetching, configuration).
///
/// The extraction core itself never fails: "no recipe found" is an empty
/// list, malformed markup is skipped, and an unusable node is filtered.
#[derive(Error, Debug)]
pub enum GrabError {
    /// Failed to fetch the page
    #[error("Failed to fetch URL: {0}")]
    Fetch(#[from] reqwest::Error),

    /// Error building request headers
    #[error("Header parse error: {0}")]
    Header(#[from] reqwest::header::InvalidHeaderValue),

    /// Only http/https pages can be grabbed
    #[error("Not a fetchable URL: {0}")]
    InvalidUrl(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}
