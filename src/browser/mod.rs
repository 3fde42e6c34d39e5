use anyhow::{Context, Result};
use std::path::Path;

/// Open an exported certificate with the desktop's default viewer
///
/// # Errors
/// Returns error if no viewer can be launched (e.g., headless session)
pub fn open_file(path: &Path) -> Result<()> {
    let absolute = path
        .canonicalize()
        .with_context(|| format!("Certificate not found at {}", path.display()))?;
    webbrowser::open(&absolute.to_string_lossy())
        .with_context(|| format!("Failed to open viewer for {}", absolute.display()))?;
    Ok(())
}
