//! Smooth scrolling for same-page anchors.

/// Element id targeted by an in-page link (`#about` → `about`).
///
/// A bare `#` or a non-fragment href has no target.
pub fn fragment_id(href: &str) -> Option<&str> {
    let id = href.strip_prefix('#')?;
    if id.is_empty() {
        None
    } else {
        Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fragment_id() {
        assert_eq!(fragment_id("#history"), Some("history"));
        assert_eq!(fragment_id("#"), None);
        assert_eq!(fragment_id(""), None);
        assert_eq!(fragment_id("/locations.html#map"), None);
    }
}
