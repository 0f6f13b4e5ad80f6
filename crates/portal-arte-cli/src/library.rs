use portal_arte_engine::AuthoredText;
use relative_path::{RelativePath, RelativePathBuf};
use std::fs;
use std::path::{Path, PathBuf};

/// Extension of authored-text files in a content folder.
pub const EXTENSION: &str = "txt";

#[derive(Debug, thiserror::Error)]
pub enum LibraryError {
    #[error("Content folder not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Path outside content folder: {0}")]
    NotRelative(#[from] relative_path::FromPathError),
}

/// Lists authored-text files under `root`, sorted, relative to `root`.
pub fn scan(root: &Path) -> Result<Vec<RelativePathBuf>, LibraryError> {
    if !root.is_dir() {
        return Err(LibraryError::NotFound(root.to_path_buf()));
    }
    let mut files = Vec::new();
    scan_directory_recursive(root, root, &mut files)?;
    files.sort();
    Ok(files)
}

fn scan_directory_recursive(
    root: &Path,
    dir: &Path,
    files: &mut Vec<RelativePathBuf>,
) -> Result<(), LibraryError> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            scan_directory_recursive(root, &path, files)?;
        } else if path.extension().is_some_and(|ext| ext == EXTENSION) {
            let relative = path.strip_prefix(root).unwrap_or(&path);
            files.push(RelativePathBuf::from_path(relative)?);
        }
    }
    Ok(())
}

/// Reads one authored-text file.
pub fn read(root: &Path, relative: &RelativePath) -> Result<AuthoredText, LibraryError> {
    let path = relative.to_path(root);
    if !path.exists() {
        return Err(LibraryError::NotFound(path));
    }
    Ok(AuthoredText::new(fs::read_to_string(path)?))
}
