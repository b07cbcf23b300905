use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

use crate::generate::RenderedFile;

/// A rendered file paired with its destination under the output directory.
#[derive(Debug)]
pub struct PlannedWrite<'a> {
    pub path: PathBuf,
    pub file: &'a RenderedFile,
}

/// Resolve every destination under `dir` before anything is written.
///
/// Fails without touching the filesystem when any destination is the input
/// document itself, so a refused render leaves no partial output behind.
pub fn plan_writes<'a>(
    dir: &Path,
    files: &'a [RenderedFile],
    input: &Path,
) -> Result<Vec<PlannedWrite<'a>>> {
    let input_real = input
        .canonicalize()
        .with_context(|| format!("failed to resolve input document {}", input.display()))?;

    let plan: Vec<PlannedWrite<'a>> = files
        .iter()
        .map(|file| PlannedWrite {
            path: dir.join(&file.file_name),
            file,
        })
        .collect();

    for planned in &plan {
        // A destination that does not exist yet cannot be the input.
        if !planned.path.exists() {
            continue;
        }
        let target_real = planned
            .path
            .canonicalize()
            .with_context(|| format!("failed to resolve {}", planned.path.display()))?;
        if target_real == input_real {
            bail!(
                "refusing to overwrite input document {}: interface '{}' renders to {}",
                input.display(),
                planned.file.interface,
                planned.path.display()
            );
        }
    }

    tracing::debug!(dir = %dir.display(), files = plan.len(), "planned output files");
    Ok(plan)
}

/// Create `dir` and write every planned file with a trailing newline.
pub fn write_all(dir: &Path, plan: &[PlannedWrite<'_>]) -> Result<()> {
    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create output directory {}", dir.display()))?;
    for planned in plan {
        fs::write(&planned.path, format!("{}\n", planned.file.content))
            .with_context(|| format!("failed to write {}", planned.path.display()))?;
        tracing::info!(path = %planned.path.display(), "wrote hostname.if file");
    }
    Ok(())
}
