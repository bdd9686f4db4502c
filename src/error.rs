use thiserror::Error;

/// Why the profile could not be loaded. The site still serves its static
/// markup when this happens; it is logged and never shown to visitors.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("could not read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{url} answered {status}")]
    Status { url: String, status: u16 },

    #[error("profile is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("unsupported profile source: {0}")]
    InvalidSource(String),
}

pub type Result<T> = std::result::Result<T, LoadError>;
