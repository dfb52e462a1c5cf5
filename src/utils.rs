//! Utility functions for common operations.

use crate::error::ComicError;

/// Returns the final path segment of `url`, used as the saved file name.
///
/// Query strings and fragments are not part of the name. A URL whose path
/// ends in `/` (or has no path) has no usable name.
///
/// # Arguments
/// * `url` - Absolute image URL
///
/// # Returns
/// The file name, or `ComicError::InvalidImageUrl`
pub fn file_name_from_url(url: &str) -> Result<String, ComicError> {
    let parsed = url::Url::parse(url)
        .map_err(|e| ComicError::InvalidImageUrl(format!("{}: {}", url, e)))?;

    parsed
        .path_segments()
        .and_then(|mut segments| segments.next_back())
        .filter(|name| !name.is_empty() && *name != "." && *name != "..")
        .map(|name| name.to_string())
        .ok_or_else(|| ComicError::InvalidImageUrl(format!("{}: no file name in path", url)))
}
