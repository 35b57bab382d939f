//! GitHub repository identity parsing.
//!
//! Search results point at arbitrary paths inside a repository (blob URLs,
//! tree URLs, raw files). Everything here reduces those to the canonical
//! `https://github.com/<developer>/<name>` project URL that keys the store.

/// Prefix a URL must carry to be treated as a GitHub URL.
const GITHUB_PREFIX: &str = "https://github.com/";

/// The identity of a repository as derived from a search result URL.
///
/// For URLs that do not look like a GitHub project (wrong host, or fewer
/// than five `/`-separated segments) the original URL is preserved verbatim
/// as `canonical_url` and `developer`/`name` stay empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoIdentity {
    pub developer: String,
    pub name: String,
    pub canonical_url: String,
}

impl RepoIdentity {
    /// Derive a repository identity from a full result URL.
    ///
    /// Pure string splitting, no URL normalization: query strings or
    /// fragments glued to the fifth segment stay part of the name, matching
    /// how the canonical URL is keyed in the store.
    pub fn parse(full_url: &str) -> Self {
        if full_url.starts_with(GITHUB_PREFIX) {
            let parts: Vec<&str> = full_url.split('/').collect();
            if parts.len() >= 5 {
                return Self {
                    developer: parts[3].to_string(),
                    name: parts[4].to_string(),
                    canonical_url: parts[..5].join("/"),
                };
            }
        }
        Self::fallback(full_url)
    }

    /// Identity for a URL that is not a recognizable GitHub project.
    pub fn fallback(url: &str) -> Self {
        Self {
            developer: String::new(),
            name: String::new(),
            canonical_url: url.to_string(),
        }
    }
}
