use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Alfred workflow data directory of `afwf_fts_anything`, relative to home
const FTS_DIR_RELATIVE: &str = ".alfred-afwf/afwf_fts_anything";

/// Get the plugin data directory (~/.alfred-afwf/afwf_fts_anything)
pub fn get_fts_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(fts_dir_in(&home))
}

/// Plugin data directory under an explicit home directory
pub fn fts_dir_in(home: &Path) -> PathBuf {
    home.join(FTS_DIR_RELATIVE)
}
