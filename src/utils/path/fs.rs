//! Path normalization utilities.
//!
//! All functions here are lexical: they never touch the filesystem and never
//! resolve symlinks, so the same file always normalizes to the same string
//! whether it was reached through an absolute or a relative path.
//!
//! - `clean_path` - fold `.` and `..` components
//! - `absolutize` - make a path absolute against a base directory
//! - `relative_to` - express a path relative to a base directory
//! - `to_slash` - render a path with `/` separators

use std::path::{Component, Path, PathBuf};

/// Lexically fold `.` and `..` components.
///
/// Leading `..` components of a relative path are kept, since there is
/// nothing left to fold them into.
///
/// # Example
/// ```ignore
/// assert_eq!(clean_path(Path::new("./src/../assets/a.png")), PathBuf::from("assets/a.png"));
/// ```
pub fn clean_path(path: &Path) -> PathBuf {
    let mut out: Vec<Component<'_>> = Vec::new();

    for comp in path.components() {
        match comp {
            Component::CurDir => {}
            Component::ParentDir => match out.last().copied() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                // `/..` is `/`
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => out.push(comp),
            },
            _ => out.push(comp),
        }
    }

    out.iter().map(|c| c.as_os_str()).collect()
}

/// Make `path` absolute by joining it onto `base` when relative, then clean it.
#[inline]
pub fn absolutize(path: &Path, base: &Path) -> PathBuf {
    if path.is_absolute() {
        clean_path(path)
    } else {
        clean_path(&base.join(path))
    }
}

/// Express `path` relative to `base`.
///
/// Both sides are made absolute against `cwd` first. Paths outside `base`
/// get leading `..` components. Different roots (e.g. Windows drives) fall
/// back to the absolute path.
pub fn relative_to(path: &Path, base: &Path, cwd: &Path) -> PathBuf {
    let path = absolutize(path, cwd);
    let base = absolutize(base, cwd);

    if let Ok(rel) = path.strip_prefix(&base) {
        return rel.to_path_buf();
    }

    let path_comps: Vec<_> = path.components().collect();
    let base_comps: Vec<_> = base.components().collect();

    // Different prefix or root: no relative form exists
    if path_comps.first() != base_comps.first() {
        return path;
    }

    let common = path_comps
        .iter()
        .zip(&base_comps)
        .take_while(|(a, b)| a == b)
        .count();

    let mut rel = PathBuf::new();
    for _ in common..base_comps.len() {
        rel.push("..");
    }
    for comp in &path_comps[common..] {
        rel.push(comp.as_os_str());
    }
    rel
}

/// Render a path as a `/`-separated string regardless of host convention.
///
/// `.` components are dropped; everything else is kept in order.
pub fn to_slash(path: &Path) -> String {
    let mut out = String::new();

    for comp in path.components() {
        let part = match comp {
            Component::CurDir => continue,
            Component::RootDir => {
                out.push('/');
                continue;
            }
            Component::Prefix(p) => p.as_os_str().to_string_lossy(),
            Component::ParentDir => "..".into(),
            Component::Normal(s) => s.to_string_lossy(),
        };
        if !out.is_empty() && !out.ends_with('/') {
            out.push('/');
        }
        out.push_str(&part);
    }

    out
}
