/// Filesystem primitives the scaffolder is built on.
pub mod fs {
    use std::fs;
    use std::io;
    use std::path::Path;

    /// Ensure a directory exists, creating missing parents. Fails if any
    /// component is an existing non-directory.
    pub fn ensure_dir(path: &Path) -> io::Result<()> {
        fs::create_dir_all(path)
    }

    /// Create or truncate `path` and write `contents` to it.
    pub fn write_truncate(path: &Path, contents: &str) -> io::Result<()> {
        fs::write(path, contents)
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn ensure_dir_is_idempotent() {
            let tmp = tempfile::tempdir().unwrap();
            let nested = tmp.path().join("a").join("b");
            ensure_dir(&nested).unwrap();
            ensure_dir(&nested).unwrap();
            assert!(nested.is_dir());
        }

        #[test]
        fn ensure_dir_rejects_existing_file() {
            let tmp = tempfile::tempdir().unwrap();
            let blocker = tmp.path().join("blocker");
            fs::write(&blocker, "x").unwrap();
            assert!(ensure_dir(&blocker).is_err());
            assert!(ensure_dir(&blocker.join("child")).is_err());
        }

        #[test]
        fn write_truncate_discards_old_contents() {
            let tmp = tempfile::tempdir().unwrap();
            let path = tmp.path().join("README.md");
            fs::write(&path, "notes the user wrote").unwrap();
            write_truncate(&path, "").unwrap();
            assert_eq!(fs::read_to_string(&path).unwrap(), "");
        }

        #[test]
        fn write_truncate_needs_parent() {
            let tmp = tempfile::tempdir().unwrap();
            let path = tmp.path().join("missing").join("file.py");
            assert!(write_truncate(&path, "").is_err());
        }
    }
}
