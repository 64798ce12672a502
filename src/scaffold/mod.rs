pub mod layout;

use std::io;

use camino::{Utf8Path, Utf8PathBuf};
use thiserror::Error;
use tracing::debug;

use crate::util::fs::{ensure_dir, write_truncate};

use self::layout::{DIRECTORIES, FILES, FileEntry};

#[derive(Debug, Error)]
pub enum ScaffoldError {
    #[error("failed to create {path}: {source}")]
    FileSystem {
        path: Utf8PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("layout lists file `{file}` but no directory entry creates `{parent}`")]
    Layout { file: &'static str, parent: String },
}

/// Paths created by one run, in creation order.
#[derive(Debug, Default)]
pub struct Report {
    pub directories: Vec<Utf8PathBuf>,
    pub files: Vec<Utf8PathBuf>,
}

/// Materialize the fixed layout under `base`.
///
/// Directory creation is idempotent; placeholder files are truncated on
/// every run. The first failure aborts and leaves earlier work in place.
pub fn scaffold(base: &Utf8Path) -> Result<Report, ScaffoldError> {
    Scaffolder::new(base).run(DIRECTORIES, FILES)
}

struct Scaffolder<'a> {
    base: &'a Utf8Path,
    report: Report,
}

impl<'a> Scaffolder<'a> {
    fn new(base: &'a Utf8Path) -> Self {
        Self {
            base,
            report: Report::default(),
        }
    }

    fn run(mut self, directories: &[&str], files: &[FileEntry]) -> Result<Report, ScaffoldError> {
        layout::check_parents(directories, files)?;

        // An empty base would resolve every entry against the working directory.
        if self.base.as_str().is_empty() {
            return Err(ScaffoldError::FileSystem {
                path: self.base.to_owned(),
                source: io::Error::new(io::ErrorKind::NotFound, "project name is empty"),
            });
        }

        self.create_dir(self.base.to_owned(), "Created base project directory")?;
        for dir in directories {
            self.create_dir(self.base.join(dir), "Created directory")?;
        }
        for file in files {
            self.create_file(self.base.join(file.path), file.contents)?;
        }
        Ok(self.report)
    }

    fn create_dir(&mut self, path: Utf8PathBuf, notice: &str) -> Result<(), ScaffoldError> {
        debug!(%path, "create_dir_all");
        ensure_dir(path.as_std_path()).map_err(|source| ScaffoldError::FileSystem {
            path: path.clone(),
            source,
        })?;
        println!("{notice}: {path}");
        self.report.directories.push(path);
        Ok(())
    }

    fn create_file(&mut self, path: Utf8PathBuf, contents: &str) -> Result<(), ScaffoldError> {
        debug!(%path, bytes = contents.len(), "write");
        write_truncate(path.as_std_path(), contents).map_err(|source| ScaffoldError::FileSystem {
            path: path.clone(),
            source,
        })?;
        println!("Created file: {path}");
        self.report.files.push(path);
        Ok(())
    }
}
