//! Credential detection and stripping for remote URLs.
//!
//! Detection parses the URL. Stripping is a plain substitution so everything
//! outside the userinfo is returned exactly as configured, and the result is
//! checked against the parser's view of the same URL. When the two disagree
//! the parser's serialization, with the userinfo cleared, is returned instead.

use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

use crate::error::{RepositoryError, Result};

/// Userinfo between the scheme delimiter and the last `@` of the authority
static USERINFO: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<scheme>[A-Za-z][A-Za-z0-9+.\-]*://)[^/?#]*@")
        .expect("userinfo pattern is a valid regex")
});

/// A leading URL scheme followed by `:`
static SCHEME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]*:").expect("scheme pattern is a valid regex")
});

/// Check whether a URL carries a password in its userinfo.
///
/// Anything that fails to parse as a URL (scp-like remotes, local paths)
/// is treated as having no credentials.
pub fn has_credentials(raw_url: &str) -> bool {
    match Url::parse(raw_url) {
        Ok(parsed) => parsed.password().is_some(),
        Err(_) => false,
    }
}

/// Remove the userinfo portion of a URL, keeping the scheme delimiter and host
pub fn sanitize_credentials(raw_url: &str) -> String {
    USERINFO.replace(raw_url, "$scheme").into_owned()
}

/// Return the URL with credentials stripped, or unchanged if it has none.
///
/// # Errors
///
/// - [`RepositoryError::UrlParse`] when the value starts with a scheme but is
///   not a valid URL. Such a value may still hold a secret, so it is never
///   passed through.
/// - [`RepositoryError::CredentialsNotRemoved`] when the parser cannot clear
///   the userinfo.
pub fn sanitize_url(raw_url: &str) -> Result<String> {
    let parsed = match Url::parse(raw_url) {
        Ok(parsed) => parsed,
        Err(source) if has_scheme(raw_url) => return Err(RepositoryError::UrlParse { source }),
        Err(_) => return Ok(raw_url.to_string()),
    };

    if parsed.password().is_none() {
        return Ok(raw_url.to_string());
    }

    log::info!(
        "Stripping credentials from {} remote url for host {}",
        parsed.scheme(),
        parsed.host_str().unwrap_or("<none>")
    );

    let mut expected = parsed;
    expected
        .set_password(None)
        .and_then(|()| expected.set_username(""))
        .map_err(|()| RepositoryError::CredentialsNotRemoved)?;

    let stripped = sanitize_credentials(raw_url);
    if Url::parse(&stripped).is_ok_and(|url| url == expected) {
        Ok(stripped)
    } else {
        log::debug!("Userinfo substitution disagreed with the parser, using normalized url");
        Ok(expected.into())
    }
}

/// Check for a scheme the way the URL parser sees it: ASCII tab and newline
/// are ignored and leading or trailing C0 controls and spaces are trimmed.
fn has_scheme(raw_url: &str) -> bool {
    let cleaned: String = raw_url
        .chars()
        .filter(|c| !matches!(c, '\t' | '\n' | '\r'))
        .collect();
    SCHEME.is_match(cleaned.trim_matches(|c: char| c <= ' '))
}
