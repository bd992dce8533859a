use crate::models::Document;
use crate::parsing::{LoadError, ParseError, parse_reader};
use crate::rendering::render_to;
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse {}: {source}", .path.display())]
    Parse { path: PathBuf, source: ParseError },
    #[error("Failed to replace {}: {source}", .path.display())]
    Persist {
        path: PathBuf,
        source: tempfile::PersistError,
    },
}

/// Load a task list, treating a missing file as an empty document
pub fn load_document(path: &Path) -> Result<Document, IoError> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::info!("{} does not exist yet, starting empty", path.display());
            return Ok(Document::new());
        }
        Err(e) => return Err(IoError::Io(e)),
    };

    parse_reader(BufReader::new(file)).map_err(|e| match e {
        LoadError::Io(e) => IoError::Io(e),
        LoadError::Parse(source) => IoError::Parse {
            path: path.to_path_buf(),
            source,
        },
    })
}

/// Write a task list in canonical form.
///
/// The document is rendered into a temporary file next to `path` which then
/// replaces `path` in one rename, so a failed write leaves the old file intact.
pub fn save_document(path: &Path, doc: &Document) -> Result<(), IoError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    // Create parent directories if they don't exist
    fs::create_dir_all(dir)?;

    let mut tmp = NamedTempFile::new_in(dir)?;
    render_to(doc, BufWriter::new(tmp.as_file_mut()))?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|source| IoError::Persist {
        path: path.to_path_buf(),
        source,
    })?;

    log::debug!("Saved {} blocks to {}", doc.blocks.len(), path.display());
    Ok(())
}
