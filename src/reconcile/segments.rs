/// Split a `/`-delimited selector (public path or manifest key prefix) into segments.
///
/// Leading, trailing and repeated slashes are dropped. The selector is split on `/` on every
/// platform.
pub fn selector_segments(selector: &str) -> Vec<&str> {
    selector
        .trim_matches('/')
        .split('/')
        .filter(|segment| !segment.is_empty())
        .collect()
}

/// Number of trailing `haystack` segments consumed by `needle`, if it matches at all.
///
/// Segments are compared byte for byte: no case folding and no `.`/`..` resolution. An empty
/// needle always matches and consumes nothing.
pub fn trailing_match(haystack: &[&str], needle: &[&str]) -> Option<usize> {
    haystack.ends_with(needle).then_some(needle.len())
}

/// Boolean form of [`trailing_match`].
pub fn is_trailing_subsequence(haystack: &[&str], needle: &[&str]) -> bool {
    trailing_match(haystack, needle).is_some()
}
