use std::borrow::Cow;

use regex::Regex;
use tracing::debug;
use url::Url;

fn external_url_patterns() -> &'static [Regex] {
    use std::sync::OnceLock;

    static PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();
    PATTERNS
        .get_or_init(|| {
            vec![
                Regex::new(r"(?i)^[a-z][a-z0-9+.\-]*://").expect("invalid scheme regex"),
                Regex::new(r"^//[^/]").expect("invalid protocol-relative regex"),
            ]
        })
        .as_slice()
}

/// Determine whether a public path points at another host.
///
/// Both `scheme://host/...` and protocol-relative `//host/...` forms count as external.
/// Root-relative (`/build/`) and bare relative (`build/`) paths do not.
pub fn is_external_url(value: &str) -> bool {
    external_url_patterns()
        .iter()
        .any(|pattern| pattern.is_match(value))
}

/// The path portion of a public path.
///
/// For external URLs this is the URL path (`https://cdn.example.com/build/` gives `/build/`);
/// anything else is already a path and is returned as is.
pub fn public_path_portion(value: &str) -> Cow<'_, str> {
    if !is_external_url(value) {
        return Cow::Borrowed(value);
    }

    let parsed = if value.starts_with("//") {
        Url::parse(&format!("https:{value}"))
    } else {
        Url::parse(value)
    };

    match parsed {
        Ok(url) => Cow::Owned(url.path().to_string()),
        Err(err) => {
            debug!(public_path = value, %err, "unparseable external public path");
            Cow::Borrowed("")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognises_scheme_urls() {
        assert!(is_external_url("https://cdn.example.com"));
        assert!(is_external_url("HTTP://cdn.example.com/build"));
        assert!(is_external_url("s3+https://bucket/assets"));
    }

    #[test]
    fn recognises_protocol_relative_urls() {
        assert!(is_external_url("//cdn.example.com/build/"));
    }

    #[test]
    fn keeps_local_paths() {
        assert!(!is_external_url("/build/"));
        assert!(!is_external_url("build/"));
        assert!(!is_external_url("/"));
        assert!(!is_external_url(""));
    }

    #[test]
    fn extracts_url_paths() {
        assert_eq!(public_path_portion("https://cdn.example.com"), "/");
        assert_eq!(public_path_portion("https://cdn.example.com/build/"), "/build/");
        assert_eq!(public_path_portion("//cdn.example.com/app/build"), "/app/build");
    }

    #[test]
    fn returns_local_paths_untouched() {
        assert_eq!(public_path_portion("/subdirectory/build"), "/subdirectory/build");
        assert_eq!(public_path_portion("build/"), "build/");
    }
}
