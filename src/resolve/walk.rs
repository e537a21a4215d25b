//! Directory tree walking.
//!
//! ```text
//! assets/            <- root
//! ├── fonts/
//! │   └── inter.woff2   (3)
//! ├── icons/
//! │   ├── logo.png      (1)
//! │   └── logo.svg      (2)
//! └── main.css          (4)
//! ```
//!
//! Entries are visited in file-name order, depth first, the same order a
//! recursive listing would produce. The walk uses an explicit stack so deep
//! trees cannot overflow the call stack.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::{ResolveError, ResolvedFile};
use crate::debug;

/// A path waiting on the work-list.
enum Pending {
    Dir(PathBuf),
    File(PathBuf),
}

/// Collect every file below `root`.
///
/// Returns `Ok(None)` when `root` does not exist, so the caller can report
/// it without treating it as an error. A `root` that names a regular file
/// yields that file alone, keyed relative to its parent directory.
///
/// Symlinks to files are included. Symlinks to directories are never
/// followed, which rules out cycles.
pub(super) fn walk_root(root: &Path) -> Result<Option<Vec<ResolvedFile>>, ResolveError> {
    let meta = match fs::metadata(root) {
        Ok(meta) => meta,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(ResolveError::Io(root.to_path_buf(), err)),
    };

    if !meta.is_dir() {
        let parent = root.parent().map(Path::to_path_buf).unwrap_or_default();
        return Ok(Some(vec![ResolvedFile::new(root, parent)]));
    }

    let mut files = Vec::new();
    let mut pending = vec![Pending::Dir(root.to_path_buf())];

    while let Some(next) = pending.pop() {
        match next {
            Pending::File(path) => files.push(ResolvedFile::new(path, root)),
            Pending::Dir(dir) => {
                let children = list_dir(&dir)?;
                // Reverse so the first child is popped first
                pending.extend(children.into_iter().rev());
            }
        }
    }

    Ok(Some(files))
}

/// List one directory, sorted by file name, classified by file type.
fn list_dir(dir: &Path) -> Result<Vec<Pending>, ResolveError> {
    let io_err = |err| ResolveError::Io(dir.to_path_buf(), err);

    let mut entries = fs::read_dir(dir)
        .map_err(io_err)?
        .collect::<Result<Vec<_>, _>>()
        .map_err(io_err)?;
    entries.sort_by_key(|entry| entry.file_name());

    let mut children = Vec::with_capacity(entries.len());
    for entry in entries {
        let path = entry.path();
        let file_type = entry
            .file_type()
            .map_err(|err| ResolveError::Io(path.clone(), err))?;

        if file_type.is_dir() {
            children.push(Pending::Dir(path));
        } else if file_type.is_file() {
            children.push(Pending::File(path));
        } else if file_type.is_symlink() {
            match fs::metadata(&path) {
                Ok(target) if target.is_file() => children.push(Pending::File(path)),
                Ok(target) if target.is_dir() => {
                    debug!("walk"; "not following symlinked directory {}", path.display());
                }
                _ => debug!("walk"; "skipping dangling symlink {}", path.display()),
            }
        }
    }

    Ok(children)
}
