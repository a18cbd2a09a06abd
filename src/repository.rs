use git2::{ConfigLevel, Repository};
use serde::Serialize;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::error::{RepositoryError, Result};
use crate::sanitize;

/// Conventional name of the default remote
pub const DEFAULT_REMOTE: &str = "origin";

/// A remote URL resolved from a repository, safe to log or report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedUrl {
    /// Repository path that was opened
    pub path: PathBuf,
    /// Remote that was read
    pub remote: String,
    /// First configured URL with credentials stripped
    pub url: String,
    /// Whether credentials were removed from the URL
    pub sanitized: bool,
}

/// Read-only view over a repository's remote configuration
pub struct RepositoryReader {
    repo: Repository,
    path: PathBuf,
}

/// One `remote.<name>.<key> = <value>` entry from the repository config
struct RemoteEntry {
    remote: String,
    key: String,
    value: Vec<u8>,
}

impl RepositoryReader {
    /// Open the repository at exactly `path`, without searching parent directories
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("Opening repository at {}", path.display());

        let repo = Repository::open(path).map_err(|source| RepositoryError::RepositoryNotFound {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(RepositoryReader {
            repo,
            path: path.to_path_buf(),
        })
    }

    /// Check if a remote exists
    pub fn has_remote(&self, name: &str) -> Result<bool> {
        Ok(self.remote_entries()?.iter().any(|e| e.remote == name))
    }

    /// List configured remote names, sorted
    pub fn remote_names(&self) -> Result<Vec<String>> {
        let names: BTreeSet<String> = self
            .remote_entries()?
            .into_iter()
            .map(|e| e.remote)
            .collect();
        Ok(names.into_iter().collect())
    }

    /// Get every URL configured for a remote, in configuration order.
    ///
    /// Blank values are skipped. The list may be empty when the remote only
    /// has other keys such as `fetch`. Any value that is not UTF-8 fails the
    /// whole lookup with [`RepositoryError::InvalidUtf8`].
    pub fn remote_urls(&self, name: &str) -> Result<Vec<String>> {
        self.raw_urls(name)?
            .into_iter()
            .map(|raw| decode_url(name, raw))
            .collect()
    }

    /// Resolve the first URL of a remote and strip any credentials from it
    pub fn resolve(&self, name: &str) -> Result<ResolvedUrl> {
        log::debug!("Looking up remote '{}' in {}", name, self.path.display());

        let first = self
            .raw_urls(name)?
            .into_iter()
            .next()
            .ok_or_else(|| RepositoryError::NoUrlConfigured(name.to_string()))?;
        let raw = decode_url(name, first)?;

        let url = sanitize::sanitize_url(&raw)?;
        let sanitized = url != raw;

        Ok(ResolvedUrl {
            path: self.path.clone(),
            remote: name.to_string(),
            url,
            sanitized,
        })
    }

    /// Non-blank `url` values of a remote as raw bytes, in configuration order
    fn raw_urls(&self, name: &str) -> Result<Vec<Vec<u8>>> {
        let entries = self.remote_entries()?;

        if !entries.iter().any(|e| e.remote == name) {
            return Err(RepositoryError::RemoteNotFound(name.to_string()));
        }

        Ok(entries
            .into_iter()
            .filter(|e| e.remote == name && e.key == "url")
            .map(|e| e.value)
            .filter(|value| !value.iter().all(u8::is_ascii_whitespace))
            .collect())
    }

    /// Collect `remote.*` entries from the repository-local config.
    ///
    /// Global and system config are not consulted. Values are kept as bytes
    /// so entries that are not UTF-8 keep their place in the list.
    fn remote_entries(&self) -> Result<Vec<RemoteEntry>> {
        let config = self.repo.config()?.open_level(ConfigLevel::Local)?;
        let mut entries = Vec::new();

        config.entries(None)?.for_each(|entry| {
            let name = String::from_utf8_lossy(entry.name_bytes());
            let Some((remote, key)) = name
                .strip_prefix("remote.")
                .and_then(|rest| rest.rsplit_once('.'))
            else {
                return;
            };
            entries.push(RemoteEntry {
                remote: remote.to_string(),
                key: key.to_string(),
                value: if entry.has_value() { entry.value_bytes().to_vec() } else { Vec::new() },
            });
        })?;

        Ok(entries)
    }
}

fn decode_url(remote: &str, raw: Vec<u8>) -> Result<String> {
    String::from_utf8(raw)
        .map(|url| url.trim().to_string())
        .map_err(|_| RepositoryError::InvalidUtf8(remote.to_string()))
}

/// Resolve a remote's URL into a [`ResolvedUrl`]
pub fn resolve<P: AsRef<Path>>(path: P, remote: &str) -> Result<ResolvedUrl> {
    RepositoryReader::open(path)?.resolve(remote)
}

/// Get the sanitized first URL of the named remote
pub fn get_remote_url<P: AsRef<Path>>(path: P, remote: &str) -> Result<String> {
    resolve(path, remote).map(|resolved| resolved.url)
}

/// Get the sanitized first URL of the `origin` remote.
///
/// # Errors
///
/// - [`RepositoryError::RepositoryNotFound`] if `path` is not a repository
/// - [`RepositoryError::RemoteNotFound`] if there is no `origin` remote
/// - [`RepositoryError::NoUrlConfigured`] if `origin` has no URLs
/// - [`RepositoryError::UrlParse`] if the URL is malformed
pub fn get_repository_url<P: AsRef<Path>>(path: P) -> Result<String> {
    get_remote_url(path, DEFAULT_REMOTE)
}
