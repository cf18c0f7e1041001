const GLOB_META: [char; 7] = ['*', '?', '[', ']', '{', '}', '!'];

/// A slash-separated glob split at its first wildcard segment.
#[derive(Debug, PartialEq, Eq)]
pub struct GlobParts<'a> {
  /// The longest wildcard-free directory prefix, unescaped. Walking starts here.
  pub base: String,
  /// The rest of the glob, matched against paths relative to `base`.
  pub pattern: &'a str,
  /// How many path segments below `base` a match can sit at, `None` if unbounded (`**`).
  pub max_depth: Option<usize>,
}

/// Backslash-escapes glob metacharacters so `value` only matches itself.
pub fn escape_glob(value: &str) -> String {
  let mut escaped = String::with_capacity(value.len());
  for char in value.chars() {
    if GLOB_META.contains(&char) {
      escaped.push('\\');
    }
    escaped.push(char);
  }
  escaped
}

/// Reverts [`escape_glob`]. Backslashes not followed by a metacharacter are kept.
pub fn unescape_glob(value: &str) -> String {
  let mut unescaped = String::with_capacity(value.len());
  let mut chars = value.chars().peekable();
  while let Some(char) = chars.next() {
    if char == '\\' {
      if let Some(&next) = chars.peek().filter(|next| GLOB_META.contains(*next)) {
        unescaped.push(next);
        chars.next();
        continue;
      }
    }
    unescaped.push(char);
  }
  unescaped
}

fn is_dynamic_segment(segment: &str) -> bool {
  let mut escaped = false;
  for char in segment.chars() {
    if escaped {
      escaped = false;
    } else if char == '\\' {
      escaped = true;
    } else if GLOB_META.contains(&char) {
      return true;
    }
  }
  false
}

pub fn split_glob(glob: &str) -> GlobParts<'_> {
  let segments = glob.split('/').collect::<Vec<_>>();
  let static_len = segments.iter().position(|segment| is_dynamic_segment(segment)).unwrap_or_else(
    // Without wildcards the glob names a single file, walk its parent.
    || segments.len().saturating_sub(1),
  );

  let base_len = segments[..static_len].iter().copied().map(str::len).sum::<usize>()
    + static_len.saturating_sub(1);
  let base = match &glob[..base_len] {
    // `/foo/*` keeps the root separator.
    "" if glob.starts_with('/') => "/".to_string(),
    base => unescape_glob(base),
  };
  let pattern = glob[base_len..].trim_start_matches('/');

  let rest = &segments[static_len..];
  let max_depth = if rest.iter().any(|segment| segment.contains("**")) { None } else { Some(rest.len()) };

  GlobParts { base, pattern, max_depth }
}

#[cfg(test)]
fn parts<'a>(base: &str, pattern: &'a str, max_depth: Option<usize>) -> GlobParts<'a> {
  GlobParts { base: base.to_string(), pattern, max_depth }
}

#[test]
fn test_split_glob() {
  assert_eq!(split_glob("/project/src/conf/*.js"), parts("/project/src/conf", "*.js", Some(1)));
  assert_eq!(
    split_glob("/project/src/components/*/index.js"),
    parts("/project/src/components", "*/index.js", Some(2))
  );
  assert_eq!(
    split_glob("/project/src/**/reducers/*.js"),
    parts("/project/src", "**/reducers/*.js", None)
  );
  assert_eq!(split_glob("/project/src/index.js"), parts("/project/src", "index.js", Some(1)));
  assert_eq!(split_glob("/*.js"), parts("/", "*.js", Some(1)));
  assert_eq!(split_glob("C:/app/{a,b}.js"), parts("C:/app", "{a,b}.js", Some(1)));
}

#[test]
fn test_split_glob_keeps_escaped_segments_static() {
  let glob = format!("{}/src/js/reducers/*", escape_glob("/home/shop [v2]"));
  assert_eq!(split_glob(&glob), parts("/home/shop [v2]/src/js/reducers", "*", Some(1)));

  let glob = format!("{}/conf/*.js", escape_glob("/work/shop{old}!"));
  assert_eq!(split_glob(&glob), parts("/work/shop{old}!/conf", "*.js", Some(1)));
}

#[test]
fn test_escape_glob() {
  assert_eq!(escape_glob("/home/shop [v2]"), r"/home/shop \[v2\]");
  assert_eq!(escape_glob("a{b,c}*?!"), r"a\{b,c\}\*\?\!");
  assert_eq!(unescape_glob(&escape_glob("a{b,c}[*?!]")), "a{b,c}[*?!]");
  assert_eq!(unescape_glob(r"C:\app\x"), r"C:\app\x");
}
