//! Conversion between short codes and full short URLs.

/// Default origin prefixed to every code.
pub const DEFAULT_BASE_URL: &str = "http://clck.ru/";

/// Builds the full short URL for `code`.
pub fn short_url(base: &str, code: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), code)
}

/// Accepts either a bare code or a full short URL under `base` and returns the code.
///
/// Anything that does not start with `base` is taken as a code verbatim.
pub fn code_from_input<'a>(base: &str, input: &'a str) -> &'a str {
    let input = input.trim();
    let base = base.trim_end_matches('/');

    input
        .strip_prefix(base)
        .and_then(|rest| rest.strip_prefix('/'))
        .unwrap_or(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_url_joins_with_single_slash() {
        assert_eq!(short_url("http://clck.ru/", "abc123"), "http://clck.ru/abc123");
        assert_eq!(short_url("http://clck.ru", "abc123"), "http://clck.ru/abc123");
    }

    #[test]
    fn test_code_from_full_url() {
        assert_eq!(
            code_from_input("http://clck.ru/", "http://clck.ru/abc123"),
            "abc123"
        );
    }

    #[test]
    fn test_code_from_bare_code() {
        assert_eq!(code_from_input("http://clck.ru/", "  abc123 "), "abc123");
    }

    #[test]
    fn test_code_from_foreign_url_is_verbatim() {
        assert_eq!(
            code_from_input("http://clck.ru/", "https://other.io/abc123"),
            "https://other.io/abc123"
        );
    }
}
