//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Find config file by searching upward from `start`
///
/// Walks up parent directories until finding `config_name`.
/// An absolute `config_name` is returned as-is if it exists.
///
/// # Example
/// ```text
/// /home/user/web/src/components/  ← start
/// /home/user/web/assethash.toml   ← found!
/// ```
pub fn find_config_file(config_name: &Path, start: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    let mut current = start;
    loop {
        let candidate = current.join(config_name);
        if candidate.is_file() {
            return Some(candidate);
        }

        match current.parent() {
            Some(parent) => current = parent,
            None => return None, // Reached filesystem root
        }
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_find_config_in_ancestor() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("src/components");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join("assethash.toml"), "inputs = []").unwrap();

        let found = find_config_file(Path::new("assethash.toml"), &nested);
        assert_eq!(found, Some(dir.path().join("assethash.toml")));
    }

    #[test]
    fn test_find_config_absolute() {
        let dir = TempDir::new().unwrap();
        let config = dir.path().join("custom.toml");

        assert_eq!(find_config_file(&config, Path::new("/")), None);

        fs::write(&config, "inputs = []").unwrap();
        assert_eq!(find_config_file(&config, Path::new("/")), Some(config));
    }

    #[test]
    fn test_find_config_ignores_directories() {
        let dir = TempDir::new().unwrap();
        let name = "assethash-test-dir-not-a-file.toml";
        fs::create_dir_all(dir.path().join(name)).unwrap();
        assert_eq!(find_config_file(Path::new(name), dir.path()), None);
    }
}
