//! Slug validation.

/// Returns `true` if `slug` is non-empty and contains only characters from
/// `[-_a-zA-Z0-9]`.
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
