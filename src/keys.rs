//! Entry key derivation.
//!
//! Every resolved file gets a key, the entry-point name the bundler shows in
//! its output. Two strategies:
//!
//! | Strategy | Key                                   | `assets/icons/logo.png` (input `assets`) |
//! |----------|---------------------------------------|------------------------------------------|
//! | `path`   | path relative to the project root     | `assets/icons/logo.png`                  |
//! | `stem`   | path relative to its input, no ext    | `icons/logo`                             |
//!
//! # Stem collisions
//!
//! Under `stem`, files that differ only by extension share a key:
//! `icons/logo.png` and `icons/logo.svg` both become `icons/logo`. No
//! attempt is made to tell them apart; the file resolved later replaces the
//! earlier one. Use `path` when an input directory mixes formats.
//!
//! Keys are always `/`-joined, whatever the host separator is.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::debug;
use crate::host::EntryTable;
use crate::resolve::ResolvedFile;
use crate::utils::path::{relative_to, to_slash};

/// How keys are derived from resolved files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum KeyStrategy {
    /// Project-relative path with extension. Never collides.
    #[default]
    Path,
    /// Input-relative path without extension. Collides across extensions.
    Stem,
}

/// Derives keys and values for one configuration pass.
#[derive(Debug, Clone)]
pub struct KeyMapper {
    strategy: KeyStrategy,
    prefix: String,
    /// Project root that `path` keys are relative to.
    base: PathBuf,
    /// Directory relative resolved paths are relative to.
    cwd: PathBuf,
}

impl KeyMapper {
    pub fn new(
        strategy: KeyStrategy,
        prefix: impl Into<String>,
        base: impl Into<PathBuf>,
        cwd: impl Into<PathBuf>,
    ) -> Self {
        Self {
            strategy,
            prefix: prefix.into(),
            base: base.into(),
            cwd: cwd.into(),
        }
    }

    /// The entry key for `file`.
    pub fn key(&self, file: &ResolvedFile) -> String {
        let body = match self.strategy {
            KeyStrategy::Path => self.project_relative(&file.path),
            KeyStrategy::Stem => self.stem(file),
        };
        format!("{}{}", self.prefix, body)
    }

    /// The path string stored under the key: the file relative to the
    /// project root, whatever the strategy.
    pub fn value(&self, file: &ResolvedFile) -> String {
        self.project_relative(&file.path)
    }

    /// Build the file map, in resolution order.
    ///
    /// On a key collision the later file wins.
    pub fn map(&self, files: &[ResolvedFile]) -> EntryTable {
        let mut table = EntryTable::new();

        for file in files {
            let key = self.key(file);
            let value = self.value(file);
            if let Some(previous) = table.insert(key.clone(), value) {
                debug!("keys"; "`{}` now maps to {} (was {})", key, to_slash(&file.path), previous);
            }
        }

        table
    }

    fn project_relative(&self, path: &Path) -> String {
        to_slash(&relative_to(path, &self.base, &self.cwd))
    }

    fn stem(&self, file: &ResolvedFile) -> String {
        let rel = relative_to(&file.path, &file.root, &self.cwd);
        let stemmed = match (rel.parent(), rel.file_stem()) {
            (Some(parent), Some(stem)) => parent.join(stem),
            _ => rel,
        };
        to_slash(&stemmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CWD: &str = "/project";

    fn mapper(strategy: KeyStrategy, prefix: &str) -> KeyMapper {
        KeyMapper::new(strategy, prefix, CWD, CWD)
    }

    fn file(path: &str, root: &str) -> ResolvedFile {
        ResolvedFile::new(path, root)
    }

    fn table(pairs: &[(&str, &str)]) -> EntryTable {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_stem_keys() {
        let files = [file("src/a.txt", "src"), file("src/b/c.txt", "src")];
        let map = mapper(KeyStrategy::Stem, "").map(&files);
        assert_eq!(map, table(&[("a", "src/a.txt"), ("b/c", "src/b/c.txt")]));
    }

    #[test]
    fn test_path_keys() {
        let files = [file("src/a.txt", "src"), file("src/b/c.txt", "src")];
        let map = mapper(KeyStrategy::Path, "").map(&files);
        assert_eq!(
            map,
            table(&[("src/a.txt", "src/a.txt"), ("src/b/c.txt", "src/b/c.txt")])
        );
    }

    #[test]
    fn test_stem_collision_later_file_wins() {
        let files = [file("a/x.png", ""), file("a/x.svg", "")];
        let map = mapper(KeyStrategy::Stem, "").map(&files);
        assert_eq!(map, table(&[("a/x", "a/x.svg")]));

        // Reversed resolution order flips the winner
        let files = [file("a/x.svg", ""), file("a/x.png", "")];
        let map = mapper(KeyStrategy::Stem, "").map(&files);
        assert_eq!(map, table(&[("a/x", "a/x.png")]));
    }

    #[test]
    fn test_path_keys_keep_extensions_apart() {
        let files = [file("src/file1.txt", "src"), file("src/file1.png", "src")];
        let map = mapper(KeyStrategy::Path, "").map(&files);
        assert_eq!(map.len(), 2);
        assert!(map.contains_key("src/file1.txt"));
        assert!(map.contains_key("src/file1.png"));
    }

    #[test]
    fn test_same_name_different_directories() {
        let files = [file("src/file1.txt", "src"), file("nested/file1.txt", "nested")];
        let map = mapper(KeyStrategy::Path, "").map(&files);
        assert_eq!(
            map,
            table(&[
                ("src/file1.txt", "src/file1.txt"),
                ("nested/file1.txt", "nested/file1.txt"),
            ])
        );
    }

    #[test]
    fn test_prefix_applies_to_both_strategies() {
        let f = file("some-dir/file1.txt", "some-dir");
        assert_eq!(
            mapper(KeyStrategy::Path, "prefix/").key(&f),
            "prefix/some-dir/file1.txt"
        );
        assert_eq!(mapper(KeyStrategy::Stem, "prefix/").key(&f), "prefix/file1");
        // Prefix never reaches the value
        assert_eq!(
            mapper(KeyStrategy::Path, "prefix/").value(&f),
            "some-dir/file1.txt"
        );
    }

    #[test]
    fn test_absolute_and_relative_give_same_key() {
        let m = mapper(KeyStrategy::Path, "");
        let relative = file("src/file1.txt", "src");
        let absolute = file("/project/src/file1.txt", "/project/src");
        let dotted = file("./src/../src/file1.txt", "./src");

        assert_eq!(m.key(&relative), "src/file1.txt");
        assert_eq!(m.key(&absolute), m.key(&relative));
        assert_eq!(m.key(&dotted), m.key(&relative));
        assert_eq!(m.value(&absolute), "src/file1.txt");

        let s = mapper(KeyStrategy::Stem, "");
        assert_eq!(s.key(&absolute), s.key(&relative));
    }

    #[test]
    fn test_key_is_deterministic() {
        let m = mapper(KeyStrategy::Stem, "img/");
        let f = file("assets/icons/logo.png", "assets");
        assert_eq!(m.key(&f), m.key(&f.clone()));
        assert_eq!(m.key(&f), "img/icons/logo");
    }

    #[test]
    fn test_stem_edge_cases() {
        let m = mapper(KeyStrategy::Stem, "");
        assert_eq!(m.key(&file("assets/archive.tar.gz", "assets")), "archive.tar");
        assert_eq!(m.key(&file("assets/.env", "assets")), ".env");
        assert_eq!(m.key(&file("assets/LICENSE", "assets")), "LICENSE");
    }

    #[test]
    fn test_path_outside_base() {
        let m = KeyMapper::new(KeyStrategy::Path, "", "/project/app", CWD);
        let f = file("/project/shared/logo.png", "/project/shared");
        assert_eq!(m.key(&f), "../shared/logo.png");
    }

    #[test]
    fn test_empty_input_gives_empty_map() {
        assert!(mapper(KeyStrategy::Path, "").map(&[]).is_empty());
    }
}
