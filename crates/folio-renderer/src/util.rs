//! Shared utility functions for media extraction.

/// Rewrite a post-relative media path to a site-absolute one.
///
/// Posts reference media relative to the content directory
/// (`../images/a.png`), while the site serves it from the root
/// (`/images/a.png`). This is a fixed prefix substitution, not path
/// resolution:
///
/// - `../{dir}/x` becomes `/{dir}/x`
/// - a bare file name `x` becomes `/{dir}/x`
/// - everything else (absolute paths, URLs, other relative paths) is kept
///
/// # Examples
///
/// ```
/// use folio_renderer::absolutize;
///
/// assert_eq!(absolutize("../images/a.png", "images"), "/images/a.png");
/// assert_eq!(absolutize("a.png", "images"), "/images/a.png");
/// assert_eq!(absolutize("https://cdn.example.com/a.png", "images"), "https://cdn.example.com/a.png");
/// ```
#[must_use]
pub fn absolutize(path: &str, dir: &str) -> String {
    let relative = format!("../{dir}/");
    if let Some(rest) = path.strip_prefix(&relative) {
        return format!("/{dir}/{rest}");
    }

    if !path.is_empty() && !path.contains('/') && !path.contains(':') {
        return format!("/{dir}/{path}");
    }

    path.to_owned()
}
