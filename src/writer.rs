//! Lab artifact persistence.
//!
//! The renderer produces the whole artifact set in memory; this module
//! owns the lab directory lifecycle and writes everything in one pass, so
//! a failed run never leaves a partial lab on disk. Boot scripts are
//! marked executable after being written.

use crate::render::RenderedLab;
use log::{info, warn};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Errors raised while persisting a rendered lab.
#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    #[error("lab directory '{0}' already exists (pass --force to overwrite it)")]
    DestinationConflict(PathBuf),
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Write a rendered lab beneath `output_dir/<lab_name>`.
///
/// An already-populated destination aborts the run with
/// [`WriteError::DestinationConflict`] unless `force` is set, in which case
/// the old directory is removed first. Returns the lab directory path.
pub fn write_lab(
    rendered: &RenderedLab,
    lab_name: &str,
    output_dir: &Path,
    force: bool,
) -> Result<PathBuf, WriteError> {
    let lab_dir = output_dir.join(lab_name);

    if lab_dir.exists() {
        if !force {
            return Err(WriteError::DestinationConflict(lab_dir));
        }
        warn!("Removing existing lab directory {:?}", lab_dir);
        fs::remove_dir_all(&lab_dir)?;
    }
    fs::create_dir_all(&lab_dir)?;

    let lab_conf_path = lab_dir.join("lab.conf");
    fs::write(&lab_conf_path, &rendered.lab_conf)?;
    info!("Created lab.conf");

    for (device_name, script) in &rendered.startups {
        let startup_path = lab_dir.join(format!("{}.startup", device_name));
        fs::write(&startup_path, script)?;
        mark_executable(&startup_path)?;
        info!("Created {}.startup", device_name);
    }

    Ok(lab_dir)
}

#[cfg(unix)]
fn mark_executable(path: &Path) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o755))
}

#[cfg(not(unix))]
fn mark_executable(_path: &Path) -> io::Result<()> {
    Ok(())
}
