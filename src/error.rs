use thiserror::Error;

/// Failure classes of the portfolio pipeline
///
/// Listing and asset failures are fatal to the page that triggered them and
/// are surfaced with a retry affordance. Enrichment failures never propagate
/// past the pipeline; they degrade or drop a single record.
#[derive(Error, Debug)]
pub enum Error {
    #[error("repository listing failed (HTTP {status})")]
    ListingFetch { status: u16 },

    #[error("enrichment failed for {repo}: {reason}")]
    Enrichment { repo: String, reason: String },

    #[error("certifications data failed to load: {0}")]
    AssetLoad(String),

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("parse error: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Http(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
