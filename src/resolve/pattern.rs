//! Glob pattern expansion.
//!
//! On top of the `glob` crate this adds brace alternation, expanded up
//! front into plain patterns, and `!` exclusions applied to the combined
//! result:
//!
//! ```text
//! assets/*.{png,svg}   ->  assets/*.png, assets/*.svg
//! !assets/**/*.map     ->  drop every matching file, whichever entry found it
//! ```
//!
//! The configured root is always escaped before it is joined onto a
//! pattern, so a project living under `site[1]/` is matched literally.

use std::path::{Component, Path, PathBuf};

use glob::{MatchOptions, Pattern};

use super::{ResolveError, ResolvedFile};
use crate::utils::path::clean_path;

/// Characters that make a path component a wildcard.
const GLOB_META: &[char] = &['*', '?', '['];

fn match_options(dot: bool) -> MatchOptions {
    MatchOptions {
        case_sensitive: true,
        require_literal_separator: true,
        require_literal_leading_dot: !dot,
    }
}

/// Expand one pattern into the regular files it matches, in match order.
///
/// Relative patterns are anchored to `root` when one is given. Directories
/// matched by the pattern are dropped. Dot-prefixed segments only match
/// when `dot` is set.
pub(super) fn expand(
    pattern: &str,
    root: Option<&Path>,
    dot: bool,
) -> Result<Vec<ResolvedFile>, ResolveError> {
    let options = match_options(dot);
    let mut files = Vec::new();

    for alternative in expand_braces(pattern) {
        let anchored = anchor_pattern(&alternative, root);
        let matches =
            glob::glob_with(&anchored, options).map_err(|source| ResolveError::Pattern {
                pattern: pattern.to_string(),
                source,
            })?;

        let base = match root {
            Some(root) => root.join(pattern_base(&alternative)),
            None => pattern_base(&alternative),
        };
        for entry in matches {
            let path = entry?;
            if path.is_file() {
                files.push(ResolvedFile::new(path, &base));
            }
        }
    }

    Ok(files)
}

/// Join a relative pattern onto the escaped root.
fn anchor_pattern(pattern: &str, root: Option<&Path>) -> String {
    match root {
        Some(root) if !root.as_os_str().is_empty() && !Path::new(pattern).is_absolute() => {
            let root = Pattern::escape(&root.to_string_lossy());
            format!("{}/{}", root.trim_end_matches('/'), pattern)
        }
        _ => pattern.to_string(),
    }
}

/// The literal directory a pattern starts from.
///
/// `assets/**/*.png` -> `assets`, `*.css` -> ``. A pattern without any
/// wildcard names a single file, so its base is the parent directory.
pub(super) fn pattern_base(pattern: &str) -> PathBuf {
    let path = Path::new(pattern);
    let mut base = PathBuf::new();

    for comp in path.components() {
        if let Component::Normal(segment) = comp
            && segment.to_string_lossy().contains(GLOB_META)
        {
            return base;
        }
        base.push(comp.as_os_str());
    }

    path.parent().map(Path::to_path_buf).unwrap_or_default()
}

/// Expand `{a,b}` groups into separate patterns, alternatives in written
/// order. Groups nest. A group without a top-level comma is literal.
pub(super) fn expand_braces(pattern: &str) -> Vec<String> {
    let Some((open, close, alternatives)) = first_brace_group(pattern) else {
        return vec![pattern.to_string()];
    };

    let (head, tail) = (&pattern[..open], &pattern[close + 1..]);
    alternatives
        .iter()
        .flat_map(|alt| expand_braces(&format!("{head}{alt}{tail}")))
        .collect()
}

/// Locate the first brace group with a top-level comma.
///
/// Returns the byte offsets of `{` and `}` and the alternatives between them.
fn first_brace_group(pattern: &str) -> Option<(usize, usize, Vec<&str>)> {
    let bytes = pattern.as_bytes();
    let mut search = 0;

    while let Some(offset) = pattern[search..].find('{') {
        let open = search + offset;
        let mut depth = 0usize;
        let mut commas = Vec::new();
        let mut close = None;

        for (i, byte) in bytes.iter().enumerate().skip(open) {
            match byte {
                b'{' => depth += 1,
                b'}' => {
                    depth -= 1;
                    if depth == 0 {
                        close = Some(i);
                        break;
                    }
                }
                b',' if depth == 1 => commas.push(i),
                _ => {}
            }
        }

        // Unbalanced: no later `{` can close either
        let close = close?;

        if !commas.is_empty() {
            let mut alternatives = Vec::with_capacity(commas.len() + 1);
            let mut start = open + 1;
            for comma in commas {
                alternatives.push(&pattern[start..comma]);
                start = comma + 1;
            }
            alternatives.push(&pattern[start..close]);
            return Some((open, close, alternatives));
        }

        search = open + 1;
    }

    None
}

/// `!` entries of an input list, compiled against the project base.
#[derive(Debug)]
pub(super) struct Exclusions {
    patterns: Vec<Pattern>,
    options: MatchOptions,
}

impl Exclusions {
    /// Compile exclusion patterns (without their `!`).
    ///
    /// `base` must be absolute; relative patterns are anchored to it and
    /// matched against absolute, cleaned file paths.
    pub(super) fn new<'a>(
        entries: impl IntoIterator<Item = &'a str>,
        base: &Path,
        dot: bool,
    ) -> Result<Self, ResolveError> {
        let escaped_base = Pattern::escape(&base.to_string_lossy());
        let mut patterns = Vec::new();

        for entry in entries {
            for alternative in expand_braces(entry) {
                let cleaned = clean_path(Path::new(&alternative));
                let full = if cleaned.is_absolute() {
                    cleaned.to_string_lossy().into_owned()
                } else {
                    format!(
                        "{}/{}",
                        escaped_base.trim_end_matches('/'),
                        cleaned.to_string_lossy()
                    )
                };
                let compiled = Pattern::new(&full).map_err(|source| ResolveError::Pattern {
                    pattern: format!("!{entry}"),
                    source,
                })?;
                patterns.push(compiled);
            }
        }

        Ok(Self {
            patterns,
            options: match_options(dot),
        })
    }

    pub(super) fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Whether an absolute, cleaned path is excluded.
    pub(super) fn excludes(&self, path: &Path) -> bool {
        self.patterns
            .iter()
            .any(|pattern| pattern.matches_path_with(path, self.options))
    }
}
