use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum size of any manifest or graph document we are willing to read (100 MB)
pub const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Whether a symbolic link may stand in for the file being read.
///
/// Project inputs named on the command line are read with `Reject`;
/// port manifests inside a registry checkout are read with `Follow`,
/// since registries are commonly assembled from linked directories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymlinkPolicy {
    Reject,
    Follow,
}

/// Validates that a path exists and is a regular file
///
/// # Arguments
/// * `path` - The path to validate
/// * `file_description` - Description of the file (e.g., "vcpkg.json", "dependencies.dgml")
/// * `policy` - Whether a symbolic link is acceptable in place of the file
///
/// # Errors
/// Returns an error if:
/// - The path doesn't exist
/// - The path is a symbolic link and the policy rejects links
/// - The path (or the link target) is not a regular file
pub fn validate_regular_file(path: &Path, file_description: &str, policy: SymlinkPolicy) -> Result<u64> {
    let metadata = match policy {
        SymlinkPolicy::Reject => fs::symlink_metadata(path),
        SymlinkPolicy::Follow => fs::metadata(path),
    }
    .map_err(|e| anyhow::anyhow!("Failed to read {} metadata: {}", file_description, e))?;

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} is a symbolic link. For security reasons, symbolic links are not allowed.",
            path.display()
        );
    }

    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    Ok(metadata.len())
}

/// Validates file size is within acceptable limits
///
/// # Errors
/// Returns an error if the file size exceeds the maximum
pub fn validate_file_size(file_size: u64, path: &Path, max_size: u64) -> Result<()> {
    if file_size > max_size {
        anyhow::bail!(
            "Security: {} is too large ({} bytes). Maximum allowed size is {} bytes.",
            path.display(),
            file_size,
            max_size
        );
    }
    Ok(())
}

/// Reads a file to a string after the regular-file and size checks
pub fn read_checked_file(path: &Path, file_description: &str, policy: SymlinkPolicy) -> Result<String> {
    let file_size = validate_regular_file(path, file_description, policy)?;
    validate_file_size(file_size, path, MAX_FILE_SIZE)?;

    fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", file_description, e))
}
