use std::path::Path;
use glob::Pattern;
use log::{debug, trace};
use walkdir::WalkDir;

/// Sum the length of every regular file beneath `path`
///
/// Every subdirectory is visited once and every file is counted once.
/// Sizes are the logical file lengths; no block rounding is applied.
/// Symlinks are followed, so a linked file counts its target's length.
pub fn dir_size(path: &Path) -> Result<u64, walkdir::Error> {
    debug!("Calculating size of {}", path.display());

    let mut total = 0u64;
    let mut files = 0usize;
    for entry in WalkDir::new(path).follow_links(true) {
        let entry = entry?;
        if entry.file_type().is_file() {
            let len = entry.metadata()?.len();
            trace!("  {} ({} bytes)", entry.path().display(), len);
            total += len;
            files += 1;
        }
    }

    debug!("{} files, {} bytes in {}", files, total, path.display());
    Ok(total)
}

/// Length of a single file in bytes
pub fn file_size(path: &Path) -> std::io::Result<u64> {
    Ok(std::fs::metadata(path)?.len())
}

/// Check if the file name of `path` matches a glob-style pattern
pub fn matches_pattern(path: &Path, pattern: &Pattern) -> bool {
    path.file_name()
        .map(|name| pattern.matches(&name.to_string_lossy()))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use std::io::Write;
    use tempfile::TempDir;
    use test_case::test_case;

    fn write_file(path: &Path, len: usize) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        let mut file = File::create(path).unwrap();
        file.write_all(&vec![b'x'; len]).unwrap();
    }

    #[test]
    fn test_dir_size_nested() {
        let temp_dir = TempDir::new().unwrap();
        write_file(&temp_dir.path().join("a.pak"), 10);
        write_file(&temp_dir.path().join("sub/b.pak"), 20);
        write_file(&temp_dir.path().join("sub/deeper/c.pak"), 30);

        assert_eq!(dir_size(temp_dir.path()).unwrap(), 60);
    }

    #[test]
    fn test_dir_size_ignores_empty_directories() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir_all(temp_dir.path().join("empty/also_empty")).unwrap();
        write_file(&temp_dir.path().join("one.bin"), 7);

        assert_eq!(dir_size(temp_dir.path()).unwrap(), 7);
    }

    #[cfg(unix)]
    #[test]
    fn test_dir_size_follows_symlinks() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("store/shared.pak");
        write_file(&target, 100);
        write_file(&temp_dir.path().join("linked/own.pak"), 5);
        std::os::unix::fs::symlink(&target, temp_dir.path().join("linked/shared.pak")).unwrap();
        std::os::unix::fs::symlink(temp_dir.path().join("store"), temp_dir.path().join("linked/store")).unwrap();

        // own.pak + linked file + the linked directory's copy of it
        assert_eq!(dir_size(&temp_dir.path().join("linked")).unwrap(), 205);
    }

    #[test]
    fn test_dir_size_empty() {
        let temp_dir = TempDir::new().unwrap();
        assert_eq!(dir_size(temp_dir.path()).unwrap(), 0);
    }

    #[test]
    fn test_dir_size_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        assert!(dir_size(&temp_dir.path().join("missing")).is_err());
    }

    #[test]
    fn test_file_size() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("game.apk");
        write_file(&path, 1234);

        assert_eq!(file_size(&path).unwrap(), 1234);
        assert!(file_size(&temp_dir.path().join("nope.apk")).is_err());
    }

    #[test_case("game.apk", "*.apk", true ; "extension")]
    #[test_case("game.APK", "*.apk", false ; "case sensitive")]
    #[test_case("game.apk.bak", "*.apk", false ; "trailing extension")]
    #[test_case("libUE4.so", "libUE4.so", true ; "literal")]
    #[test_case("pakchunk0-EngineContent", "*Engine*", true ; "infix")]
    #[test_case("Engine", "*Engine*", true ; "infix whole name")]
    #[test_case("RushGame", "*Rush*", true ; "project prefix")]
    #[test_case("Brush", "*Rush*", false ; "project case")]
    fn test_matches_pattern(name: &str, pattern: &str, expected: bool) {
        let pattern = Pattern::new(pattern).unwrap();
        let path = Path::new("/builds/root").join(name);
        assert_eq!(matches_pattern(&path, &pattern), expected);
    }

    #[test]
    fn test_matches_pattern_only_file_name() {
        let pattern = Pattern::new("*Engine*").unwrap();
        assert!(!matches_pattern(Path::new("/Engine/pak/data.bin"), &pattern));
    }
}
