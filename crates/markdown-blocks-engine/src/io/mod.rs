use std::fs;
use std::path::{Path, PathBuf};

use crate::{
    blocks::Block,
    parsing::{ParseOptions, parse_with},
    serialize::{SerializeOptions, serialize_with},
};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Read a markdown file and parse it into blocks
pub fn read_document(path: &Path, options: &ParseOptions) -> Result<Vec<Block>, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    let content = fs::read_to_string(path)?;
    log::debug!("read {} bytes from {}", content.len(), path.display());
    Ok(parse_with(&content, options))
}

/// Serialize blocks and write them to a markdown file
pub fn write_document(
    path: &Path,
    blocks: &[Block],
    options: &SerializeOptions,
) -> Result<(), IoError> {
    // Create parent directories if they don't exist
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, serialize_with(blocks, options))?;
    log::debug!("wrote {} blocks to {}", blocks.len(), path.display());
    Ok(())
}
