//! # repo-url
//!
//! Reads the URL configured for a repository's remote and strips any
//! embedded credentials, so the result can be logged or reported safely.
//!
//! ```no_run
//! let url = repo_url::get_repository_url(".")?;
//! println!("{url}");
//! # Ok::<(), repo_url::RepositoryError>(())
//! ```
//!
//! The library is organized into:
//!
//! - Remote lookup over libgit2 ([`repository`])
//! - Credential detection and stripping ([`sanitize`])
//! - Error types ([`error`])
//! - CLI support: configuration and logging ([`config`], [`logger`])

/// Platform-agnostic configuration for the command-line tool.
///
/// Stores the default remote name and output format in `config.toml` under
/// the platform's configuration directory.
pub mod config;

/// Error types for repository and URL failures.
pub mod error;

/// Logging setup for the command-line tool.
pub mod logger;

/// Remote URL lookup for a local repository.
///
/// Opens a repository with libgit2 and reads the `url` entries of a named
/// remote from the repository-local config, in the order they are configured.
pub mod repository;

/// Credential detection and removal for remote URLs.
pub mod sanitize;

pub use error::{RepositoryError, Result};
pub use repository::{
    get_remote_url, get_repository_url, resolve, RepositoryReader, ResolvedUrl, DEFAULT_REMOTE,
};
