use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum size for configuration files (1 MB)
pub const MAX_CONFIG_FILE_SIZE: u64 = 1024 * 1024;

/// Maximum size for license listing files (50 MB)
///
/// cargo-license output for a large workspace is a few hundred kilobytes,
/// anything beyond this limit is not a listing.
pub const MAX_LISTING_FILE_SIZE: u64 = 50 * 1024 * 1024;

/// Maximum size for the workflow event payload (25 MB, the webhook payload cap)
pub const MAX_EVENT_FILE_SIZE: u64 = 25 * 1024 * 1024;

/// Reads a file after checking it is a regular file within the size limit
///
/// # Security
/// Uses `symlink_metadata()` so a symbolic link is rejected rather than followed.
///
/// # Arguments
/// * `path` - The file to read
/// * `file_description` - Human readable name used in error messages
/// * `max_size` - Maximum allowed size in bytes
///
/// # Errors
/// Returns an error if:
/// - The metadata cannot be read (e.g. the file does not exist)
/// - The path is a symbolic link or not a regular file
/// - The file exceeds `max_size`
/// - The content is not valid UTF-8
pub fn read_regular_file(path: &Path, file_description: &str, max_size: u64) -> Result<String> {
    let metadata = fs::symlink_metadata(path).map_err(|e| {
        anyhow::anyhow!(
            "Failed to read {} metadata at {}: {}",
            file_description,
            path.display(),
            e
        )
    })?;

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} is a symbolic link. For security reasons, symbolic links are not allowed.",
            path.display()
        );
    }

    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    validate_file_size(metadata.len(), path, max_size)?;

    fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", file_description, e))
}

/// Validates file size is within acceptable limits
fn validate_file_size(file_size: u64, path: &Path, max_size: u64) -> Result<()> {
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
