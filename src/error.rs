use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while resolving a repository's remote URL
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The path does not exist or is not a git repository
    #[error("no git repository found at '{}'", path.display())]
    RepositoryNotFound {
        path: PathBuf,
        #[source]
        source: git2::Error,
    },

    /// The repository has no remote with this name
    #[error("remote '{0}' not found")]
    RemoteNotFound(String),

    /// The remote exists but has no `url` entries
    #[error("no repository urls configured for remote '{0}'")]
    NoUrlConfigured(String),

    /// The remote URL looks absolute but could not be parsed.
    ///
    /// The raw URL is left out of the message since it may carry credentials.
    #[error("failed to parse remote url: {source}")]
    UrlParse {
        #[source]
        source: url::ParseError,
    },

    /// A configured URL for this remote is not valid UTF-8
    #[error("url configured for remote '{0}' is not valid UTF-8")]
    InvalidUtf8(String),

    /// The URL carries credentials that could not be cleared
    #[error("could not remove credentials from remote url")]
    CredentialsNotRemoved,

    /// Reading the repository configuration failed
    #[error("git error: {0}")]
    Git(#[from] git2::Error),
}

pub type Result<T> = std::result::Result<T, RepositoryError>;
