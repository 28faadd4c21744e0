// Candidate discovery - recursive walk filtered by file-name suffix

use crate::config::AggregateConfig;
use std::path::{Path, PathBuf};
use tracing::warn;
use walkdir::WalkDir;

/// Walk `root` depth-first and yield every non-directory entry whose
/// file name ends with `config.suffix`.
///
/// Walk order is whatever the platform yields unless `config.sort` is set,
/// in which case siblings are visited in file-name order. Unreadable
/// directories are logged and skipped.
pub fn discover<'a>(
    root: &Path,
    config: &'a AggregateConfig,
) -> impl Iterator<Item = PathBuf> + 'a {
    let mut walker = WalkDir::new(root).min_depth(1);
    if config.sort {
        walker = walker.sort_by_file_name();
    }

    walker
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!("Skipping unreadable entry during walk: {}", e);
                None
            }
        })
        // Symlinked directories are not descended into, but must not match either
        .filter(|entry| !entry.file_type().is_dir() && !entry.path().is_dir())
        .filter(move |entry| matches_suffix(entry.path(), &config.suffix))
        .map(|entry| entry.into_path())
}

/// Exact, case-sensitive match of the file name's ending.
pub fn matches_suffix(path: &Path, suffix: &str) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy().ends_with(suffix))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;
    use std::fs;
    use tempfile::TempDir;

    fn relative_set(root: &Path, config: &AggregateConfig) -> BTreeSet<PathBuf> {
        discover(root, config)
            .map(|p| p.strip_prefix(root).unwrap().to_path_buf())
            .collect()
    }

    #[test]
    fn suffix_match_is_exact_and_case_sensitive() {
        assert!(matches_suffix(Path::new("src/App.swift"), ".swift"));
        assert!(!matches_suffix(Path::new("src/App.SWIFT"), ".swift"));
        assert!(!matches_suffix(Path::new("src/App.swift.bak"), ".swift"));
        assert!(!matches_suffix(Path::new("src/swift"), ".swift"));
    }

    #[test]
    fn finds_nested_matches_only() {
        let tmp = TempDir::new().unwrap();
        let nested = tmp.path().join("Views").join("Detail");
        fs::create_dir_all(&nested).unwrap();
        fs::write(tmp.path().join("App.swift"), "app").unwrap();
        fs::write(nested.join("DetailView.swift"), "view").unwrap();
        fs::write(nested.join("notes.md"), "notes").unwrap();

        let found = relative_set(tmp.path(), &AggregateConfig::default());
        let expected: BTreeSet<PathBuf> = [
            PathBuf::from("App.swift"),
            PathBuf::from("Views/Detail/DetailView.swift"),
        ]
        .into_iter()
        .collect();
        assert_eq!(found, expected);
    }

    #[test]
    fn directories_with_matching_names_are_not_candidates() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("Package.swift");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("Inner.swift"), "inner").unwrap();

        let found = relative_set(tmp.path(), &AggregateConfig::default());
        assert_eq!(found.len(), 1);
        assert!(found.contains(&PathBuf::from("Package.swift/Inner.swift")));
    }

    #[test]
    fn sorted_walk_orders_by_relative_path() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("b")).unwrap();
        fs::write(tmp.path().join("c.swift"), "").unwrap();
        fs::write(tmp.path().join("a.swift"), "").unwrap();
        fs::write(tmp.path().join("b").join("z.swift"), "").unwrap();

        let config = AggregateConfig {
            sort: true,
            ..Default::default()
        };
        let order: Vec<PathBuf> = discover(tmp.path(), &config)
            .map(|p| p.strip_prefix(tmp.path()).unwrap().to_path_buf())
            .collect();
        assert_eq!(
            order,
            vec![
                PathBuf::from("a.swift"),
                PathBuf::from("b/z.swift"),
                PathBuf::from("c.swift"),
            ]
        );
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_directory_with_matching_name_is_not_a_candidate() {
        let tmp = TempDir::new().unwrap();
        let real = tmp.path().join("Real");
        fs::create_dir_all(&real).unwrap();
        fs::write(real.join("Inner.swift"), "inner").unwrap();
        std::os::unix::fs::symlink(&real, tmp.path().join("Linked.swift")).unwrap();

        let found = relative_set(tmp.path(), &AggregateConfig::default());
        let expected: BTreeSet<PathBuf> = [PathBuf::from("Real/Inner.swift")].into_iter().collect();
        assert_eq!(found, expected);
    }

    #[cfg(unix)]
    #[test]
    fn unreadable_directory_is_skipped() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = TempDir::new().unwrap();
        let locked = tmp.path().join("Locked");
        fs::create_dir_all(&locked).unwrap();
        fs::write(locked.join("Hidden.swift"), "hidden").unwrap();
        fs::write(tmp.path().join("Open.swift"), "open").unwrap();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        // Privileged users can still list the directory; nothing to check then
        let listable = fs::read_dir(&locked).is_ok();
        let found = relative_set(tmp.path(), &AggregateConfig::default());
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        if listable {
            return;
        }

        let expected: BTreeSet<PathBuf> = [PathBuf::from("Open.swift")].into_iter().collect();
        assert_eq!(found, expected);
    }

    #[test]
    fn custom_suffix_is_honoured() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("main.rs"), "fn main() {}").unwrap();
        fs::write(tmp.path().join("App.swift"), "app").unwrap();

        let config = AggregateConfig {
            suffix: ".rs".to_string(),
            ..Default::default()
        };
        let found = relative_set(tmp.path(), &config);
        assert_eq!(found.into_iter().collect::<Vec<_>>(), vec![PathBuf::from("main.rs")]);
    }
}
