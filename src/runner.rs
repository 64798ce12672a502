use anyhow::{Context, Result};
use camino::Utf8PathBuf;
use tracing::info;

use crate::cli::Cli;
use crate::scaffold;

pub fn run(cli: Cli) -> Result<()> {
    let base = Utf8PathBuf::from(cli.project_name);

    let report = scaffold::scaffold(&base).with_context(|| format!("scaffolding {}", base))?;
    info!(
        base = %base,
        directories = report.directories.len(),
        files = report.files.len(),
        "scaffold finished"
    );

    println!("Project setup completed.");
    Ok(())
}
