//! Slug cache: a flat JSON array of slugs saved between runs

use crate::CacheError;
use std::fs;
use std::path::Path;

/// Reads a cached slug list
pub fn load_slugs(path: &Path) -> Result<Vec<String>, CacheError> {
    let content = fs::read_to_string(path).map_err(|source| CacheError::Io {
        path: path.display().to_string(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| CacheError::Malformed {
        path: path.display().to_string(),
        source,
    })
}

/// Writes a slug list, creating parent directories
pub fn save_slugs(path: &Path, slugs: &[String]) -> Result<(), CacheError> {
    let io_error = |source| CacheError::Io {
        path: path.display().to_string(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_error)?;
    }

    let content = serde_json::to_string(slugs).map_err(|source| CacheError::Malformed {
        path: path.display().to_string(),
        source,
    })?;
    fs::write(path, content).map_err(io_error)
}
