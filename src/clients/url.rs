//! URL joining for request dispatch.
//!
//! Request paths arrive in whatever shape the caller wrote them
//! (`"v3/domains"`, `"/v3/domains"`), and base URLs may or may not carry
//! a trailing slash. [`join`] normalizes both sides so the same route is
//! produced regardless of slash placement.

/// Joins a base URL and a request path with exactly one slash between them.
///
/// Idempotent with respect to slash placement: every combination of a
/// trailing slash on `base` and a leading slash on `path` yields the
/// same result. An empty path returns the base unchanged (minus any
/// trailing slash).
pub(crate) fn join(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');

    if path.is_empty() {
        base.to_string()
    } else {
        format!("{base}/{path}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_is_idempotent_across_slash_placement() {
        let expected = "https://api.mailgun.net/v3/domains";

        assert_eq!(join("https://api.mailgun.net", "v3/domains"), expected);
        assert_eq!(join("https://api.mailgun.net", "/v3/domains"), expected);
        assert_eq!(join("https://api.mailgun.net/", "v3/domains"), expected);
        assert_eq!(join("https://api.mailgun.net/", "/v3/domains"), expected);
    }

    #[test]
    fn test_join_with_nested_path() {
        assert_eq!(
            join("https://api.mailgun.net", "/v3/example.com/messages"),
            "https://api.mailgun.net/v3/example.com/messages"
        );
    }

    #[test]
    fn test_join_with_empty_path_returns_base() {
        assert_eq!(join("https://api.mailgun.net/", ""), "https://api.mailgun.net");
        assert_eq!(join("https://api.mailgun.net", "/"), "https://api.mailgun.net");
    }

    #[test]
    fn test_join_preserves_base_path_segments() {
        assert_eq!(
            join("http://localhost:8080/proxy", "v3/domains"),
            "http://localhost:8080/proxy/v3/domains"
        );
    }
}
