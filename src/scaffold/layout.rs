use camino::Utf8Path;

use super::ScaffoldError;

/// A placeholder file and the text it is reset to on every run.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FileEntry {
    pub path: &'static str,
    pub contents: &'static str,
}

const fn empty(path: &'static str) -> FileEntry {
    FileEntry { path, contents: "" }
}

/// Directories guaranteed to exist under the base path.
pub const DIRECTORIES: &[&str] = &[
    "data/raw",
    "data/interim",
    "data/processed",
    "data/external",
    "notebooks",
    "src/data",
    "src/features",
    "src/models",
    "src/visualization",
    "src/routes",
    "src/scripts",
    "models",
    "tests/data",
    "tests/features",
    "tests/models",
    "tests/visualization",
    "reports/figures",
    "docs",
    "configs",
];

/// Files written (truncated) under the base path.
pub const FILES: &[FileEntry] = &[
    empty("src/__init__.py"),
    empty("src/data/make_dataset.py"),
    empty("src/features/build_features.py"),
    empty("src/models/train_model.py"),
    empty("src/models/predict_model.py"),
    empty("src/visualization/visualize.py"),
    empty("src/routes/routes.py"),
    empty("tests/data/__init__.py"),
    empty("tests/features/__init__.py"),
    empty("tests/models/__init__.py"),
    empty("tests/visualization/__init__.py"),
    // keeps the otherwise empty directory under version control
    empty("notebooks/.gitkeep"),
    empty(".gitignore"),
    empty(".dockerignore"),
    empty("README.md"),
    empty("requirements.txt"),
    empty("requirements-dev.txt"),
    empty("environment.yml"),
    empty("setup.py"),
    empty("Makefile"),
    empty("Dockerfile"),
    empty("docker-compose.yaml"),
    empty(".pre-commit-configs.yaml"),
    empty(".env"),
    empty(".isort.cfg"),
];

/// Check that every file's parent is the base or is created by some
/// directory entry, so file creation never runs into a missing parent.
pub fn check_parents(directories: &[&str], files: &[FileEntry]) -> Result<(), ScaffoldError> {
    for file in files {
        let parent = Utf8Path::new(file.path)
            .parent()
            .map(Utf8Path::as_str)
            .unwrap_or("");
        if parent.is_empty() {
            continue;
        }
        let covered = directories
            .iter()
            .any(|dir| Utf8Path::new(dir).starts_with(parent));
        if !covered {
            return Err(ScaffoldError::Layout {
                file: file.path,
                parent: parent.to_owned(),
            });
        }
    }
    Ok(())
}
