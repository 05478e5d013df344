use std::fs::File;
use std::io::Read;
use std::path::{Component, Path};

use anyhow::{Context, Result, bail};

// Maximum size of a saved HTML page: 10MB
const MAX_HTML_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Validates that a dataset name can be used as a file name prefix
///
/// Dataset names become `{name}-data.json`, `{name}-icon/`, ... inside the
/// plugin directory, so they must stay a single, visible path component.
///
/// # Errors
///
/// Returns an error if the name:
/// - is empty or only whitespace
/// - contains a path separator
/// - starts with `.`, which covers `.` and `..` (and would collide with the
///   plugin's hidden `.cache`)
pub fn validate_dataset_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        bail!("Dataset name must not be empty");
    }
    if name.contains('/') || name.contains('\\') {
        bail!("Dataset name must not contain path separators: {}", name);
    }
    if name.starts_with('.') {
        bail!("Dataset name must not start with '.': {}", name);
    }
    if name.chars().any(char::is_control) {
        bail!("Dataset name must not contain control characters: {:?}", name);
    }

    // Paranoia for platform-specific separators
    let mut components = Path::new(name).components();
    if !matches!((components.next(), components.next()), (Some(Component::Normal(_)), None)) {
        bail!("Dataset name must be a single path component: {}", name);
    }

    Ok(())
}

/// Reads a saved HTML page, refusing files over 10MB
///
/// The size check uses the open handle's metadata, so the file that is
/// measured is the file that is read.
///
/// # Errors
///
/// Returns an error if the file is missing, unreadable, too large, or not UTF-8.
pub fn read_html_file(path: &Path) -> Result<String> {
    let mut file = File::open(path)
        .with_context(|| format!("Failed to open HTML file: {}", path.display()))?;
    let metadata = file
        .metadata()
        .with_context(|| format!("Failed to read file metadata: {}", path.display()))?;

    let file_size = metadata.len();
    if file_size > MAX_HTML_SIZE_BYTES {
        bail!(
            "File too large: {} ({} bytes, max {} bytes)",
            path.display(),
            file_size,
            MAX_HTML_SIZE_BYTES
        );
    }

    let mut html = String::with_capacity(file_size as usize);
    file.read_to_string(&mut html)
        .with_context(|| format!("Failed to read HTML file: {}", path.display()))?;
    Ok(html)
}

/// Formats a path with ~ substitution for the home directory
pub fn format_path_with_tilde(path: &Path) -> String {
    let home = dirs::home_dir();
    format_path_with_tilde_internal(path, home.as_deref())
}

pub(crate) fn format_path_with_tilde_internal(path: &Path, home: Option<&Path>) -> String {
    if let Some(home) = home
        && let Ok(rest) = path.strip_prefix(home)
    {
        if rest.as_os_str().is_empty() {
            return "~".to_string();
        }
        return format!("~/{}", rest.display());
    }

    path.to_string_lossy().into_owned()
}
