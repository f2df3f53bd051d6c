/// Separator convention of an output path.
///
/// The convention is read from the path itself rather than from the host, so a Windows output
/// directory is handled the same way on every platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathStyle {
  /// `/`-separated paths rooted at `/`.
  Posix,
  /// `\`-separated paths with an optional drive or UNC prefix.
  Windows,
}

/// Output path broken into its root and its non-empty segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitPath<'a> {
  /// Convention used to split the path.
  pub style: PathStyle,
  /// Separator used to join segments back together.
  pub separator: char,
  /// Root component including its separator (`/`, `C:\`, `\\`), or empty for relative paths.
  pub root: &'a str,
  /// Path components after the root.
  pub segments: Vec<&'a str>,
}

impl PathStyle {
  /// Windows for drive (`C:`) and backslash-rooted paths, POSIX otherwise.
  ///
  /// A backslash further into a POSIX path is an ordinary file name character.
  pub fn detect(path: &str) -> Self {
    let bytes = path.as_bytes();
    let has_drive = bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':';
    if has_drive || path.starts_with('\\') {
      PathStyle::Windows
    } else {
      PathStyle::Posix
    }
  }

  /// Separator used when joining segments.
  pub fn separator(self) -> char {
    match self {
      PathStyle::Posix => '/',
      PathStyle::Windows => '\\',
    }
  }

  fn is_separator(self, c: char) -> bool {
    match self {
      PathStyle::Posix => c == '/',
      // Windows accepts either separator.
      PathStyle::Windows => c == '\\' || c == '/',
    }
  }

  /// Split `path` into root and segments.
  pub fn split(self, path: &str) -> SplitPath<'_> {
    let root_len = self.root_len(path);
    let (root, rest) = path.split_at(root_len);
    let segments = rest
      .split(|c: char| self.is_separator(c))
      .filter(|segment| !segment.is_empty())
      .collect();

    // Drive paths written with `/` keep it.
    let separator = match self {
      PathStyle::Windows if !path.contains('\\') => '/',
      _ => self.separator(),
    };

    SplitPath {
      style: self,
      separator,
      root,
      segments,
    }
  }

  fn root_len(self, path: &str) -> usize {
    let bytes = path.as_bytes();
    match self {
      PathStyle::Posix => usize::from(bytes.first() == Some(&b'/')),
      PathStyle::Windows => {
        let is_sep = |b: Option<&u8>| matches!(b, Some(b'\\') | Some(b'/'));
        if bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':' {
          if is_sep(bytes.get(2)) { 3 } else { 2 }
        } else if is_sep(bytes.first()) && is_sep(bytes.get(1)) {
          2
        } else if is_sep(bytes.first()) {
          1
        } else {
          0
        }
      }
    }
  }
}

impl SplitPath<'_> {
  /// Root followed by the first `count` segments, joined with the path's own separator.
  ///
  /// The result never ends with a separator unless it is the bare root.
  pub fn join_prefix(&self, count: usize) -> String {
    let kept = &self.segments[..count.min(self.segments.len())];
    let separator = self.separator.to_string();

    let mut joined = String::from(self.root);
    joined.push_str(&kept.join(separator.as_str()));
    joined
  }
}
