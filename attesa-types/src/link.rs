//! Helpers for extracting short names from resource links.

/// Returns the last non-empty path segment of a URL or path.
///
/// Cloud APIs address everything by link
/// (`https://.../zones/us-east1-b`, `projects/p/instances/vm-1`); follow-up
/// requests want only the final segment. Input without any `/` is returned
/// unchanged.
#[must_use]
pub fn link_name(link: &str) -> &str {
    let trimmed = link.trim_end_matches('/');
    trimmed.rsplit('/').next().unwrap_or(trimmed)
}
