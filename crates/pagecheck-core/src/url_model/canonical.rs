//! Canonical form: `scheme://host`.

use url::Url;

use super::error::{ValidationError, ValidationErrorKind};

/// Longest accepted canonical name, in characters (width of `urls.name`).
pub const MAX_URL_LEN: usize = 255;

/// Deduplication key for a tracked URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CanonicalUrl(String);

impl CanonicalUrl {
    pub fn into_string(self) -> String {
        self.0
    }
}

/// Validates `raw` as an absolute http(s) URL and reduces it to `scheme://host`.
///
/// Surrounding whitespace is ignored. Only the resulting `scheme://host` is
/// length-checked, so long paths and queries are fine. Scheme and host come back lower-cased
/// (the `url` crate normalizes both for http and https).
///
/// # Examples
///
/// - `normalize("https://Example.com/a?b#c")` → `"https://example.com"`
/// - `normalize("http://example.com:8080/")` → `"http://example.com"`
pub fn normalize(raw: &str) -> Result<CanonicalUrl, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::new(raw, ValidationErrorKind::Empty));
    }
    let parsed = Url::parse(trimmed)
        .map_err(|e| ValidationError::new(raw, ValidationErrorKind::Malformed(e.to_string())))?;

    let scheme = parsed.scheme();
    if scheme != "http" && scheme != "https" {
        return Err(ValidationError::new(
            raw,
            ValidationErrorKind::UnsupportedScheme(scheme.to_string()),
        ));
    }

    let host = match parsed.host_str() {
        Some(h) if !h.is_empty() => h,
        _ => return Err(ValidationError::new(raw, ValidationErrorKind::MissingHost)),
    };

    let name = format!("{scheme}://{host}");
    if name.chars().count() > MAX_URL_LEN {
        return Err(ValidationError::new(raw, ValidationErrorKind::TooLong));
    }
    Ok(CanonicalUrl(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canon(raw: &str) -> String {
        normalize(raw).unwrap().into_string()
    }

    fn kind(raw: &str) -> ValidationErrorKind {
        normalize(raw).unwrap_err().kind
    }

    #[test]
    fn strips_path_query_and_fragment() {
        assert_eq!(canon("https://example.com/a/b?x=1#top"), "https://example.com");
        assert_eq!(canon("https://example.com/"), "https://example.com");
        assert_eq!(canon("https://example.com"), "https://example.com");
    }

    #[test]
    fn drops_port_and_userinfo() {
        assert_eq!(canon("http://example.com:8080/page"), "http://example.com");
        assert_eq!(canon("https://user:pw@example.com/"), "https://example.com");
    }

    #[test]
    fn lowercases_scheme_and_host() {
        assert_eq!(canon("HTTPS://WWW.Example.COM/Path"), "https://www.example.com");
    }

    #[test]
    fn keeps_scheme_distinct() {
        assert_ne!(canon("http://example.com"), canon("https://example.com"));
    }

    #[test]
    fn trims_whitespace() {
        assert_eq!(canon("  https://example.com/x \n"), "https://example.com");
    }

    #[test]
    fn ip_hosts() {
        assert_eq!(canon("http://127.0.0.1:5000/"), "http://127.0.0.1");
        assert_eq!(canon("http://[::1]:8080/"), "http://[::1]");
    }

    #[test]
    fn rejects_empty() {
        assert_eq!(kind(""), ValidationErrorKind::Empty);
        assert_eq!(kind("   "), ValidationErrorKind::Empty);
    }

    #[test]
    fn rejects_relative_and_garbage() {
        assert!(matches!(kind("not a url"), ValidationErrorKind::Malformed(_)));
        assert!(matches!(kind("example.com"), ValidationErrorKind::Malformed(_)));
        assert!(matches!(kind("/just/a/path"), ValidationErrorKind::Malformed(_)));
        assert!(matches!(kind("http://"), ValidationErrorKind::Malformed(_)));
    }

    #[test]
    fn rejects_other_schemes() {
        assert_eq!(
            kind("ftp://example.com/file"),
            ValidationErrorKind::UnsupportedScheme("ftp".to_string())
        );
        assert_eq!(
            kind("mailto:someone@example.com"),
            ValidationErrorKind::UnsupportedScheme("mailto".to_string())
        );
    }

    #[test]
    fn long_path_and_query_are_accepted() {
        let raw = format!("https://example.com/search?utm={}", "x".repeat(300));
        assert_eq!(canon(&raw), "https://example.com");
    }

    #[test]
    fn rejects_too_long_host() {
        // DNS-sized labels, but the whole name is past the limit.
        let host = vec!["a".repeat(50); 6].join(".") + ".com";
        assert!(host.len() > MAX_URL_LEN);
        assert_eq!(kind(&format!("https://{host}/")), ValidationErrorKind::TooLong);
    }

    #[test]
    fn error_keeps_raw_input() {
        let err = normalize("  not a url ").unwrap_err();
        assert_eq!(err.input, "  not a url ");
    }
}
