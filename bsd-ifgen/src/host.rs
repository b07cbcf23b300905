use std::process::Command;
use std::sync::OnceLock;

use hostname_if::PlatformVersion;
use thiserror::Error;

static KERNEL_VERSION: OnceLock<PlatformVersion> = OnceLock::new();

/// Errors returned when the platform release cannot be determined.
#[derive(Debug, Error)]
pub enum HostVersionError {
    #[error("failed to run uname: {0}")]
    Spawn(#[from] std::io::Error),
    #[error("uname -r exited with {0}")]
    Failed(std::process::ExitStatus),
    #[error("uname -r printed no release; pass --kernel-version")]
    Empty,
}

/// The platform release to format for: the explicit override when given,
/// otherwise the running kernel's release (looked up once per process).
pub fn platform_version(
    override_version: Option<&str>,
) -> Result<PlatformVersion, HostVersionError> {
    if let Some(version) = override_version {
        return Ok(PlatformVersion::new(version));
    }
    if let Some(version) = KERNEL_VERSION.get() {
        return Ok(version.clone());
    }

    let version = detect_kernel_version()?;
    tracing::info!(%version, "detected kernel release");
    Ok(KERNEL_VERSION.get_or_init(|| version).clone())
}

fn detect_kernel_version() -> Result<PlatformVersion, HostVersionError> {
    let output = Command::new("uname").arg("-r").output()?;
    if !output.status.success() {
        return Err(HostVersionError::Failed(output.status));
    }
    let release = String::from_utf8_lossy(&output.stdout);
    if release.trim().is_empty() {
        return Err(HostVersionError::Empty);
    }
    Ok(PlatformVersion::new(release.into_owned()))
}
