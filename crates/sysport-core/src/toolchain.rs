//! Go toolchain queries.

use std::path::PathBuf;
use std::process::Command;

use crate::{GenError, Result};

/// Ask `<go> env GOROOT` for the installation root.
///
/// Spawn failures, a non-zero exit and an empty answer are all fatal.
pub fn resolve_goroot(go: &str) -> Result<PathBuf> {
    let command = format!("{go} env GOROOT");
    tracing::debug!(component = "GEN", command = %command, "resolving GOROOT");

    let output = Command::new(go)
        .args(["env", "GOROOT"])
        .output()
        .map_err(|source| GenError::Toolchain {
            command: command.clone(),
            source,
        })?;

    if !output.status.success() {
        return Err(GenError::ToolchainStatus {
            command,
            status: output.status.to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    let root = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if root.is_empty() {
        return Err(GenError::ToolchainStatus {
            command,
            status: output.status.to_string(),
            stderr: "empty GOROOT".to_string(),
        });
    }

    tracing::debug!(component = "GEN", goroot = %root, "resolved GOROOT");
    Ok(PathBuf::from(root))
}
