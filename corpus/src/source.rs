use crate::config::CorpusOptions;
use crate::error::{CorpusError, Result};
use std::ffi::OsStr;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A document read from disk.
#[derive(Debug, Clone)]
pub struct Document {
    pub path: PathBuf,
    pub text: String,
}

/// List the regular files directly inside `folder` that carry the configured extension.
pub fn list_documents(folder: &Path, options: &CorpusOptions) -> Result<Vec<PathBuf>> {
    if !folder.is_dir() {
        return Err(CorpusError::InvalidPath(folder.to_path_buf()));
    }

    let wanted = OsStr::new(&options.extension);
    let mut files: Vec<PathBuf> = Vec::new();
    for entry in WalkDir::new(folder).min_depth(1).max_depth(1).follow_links(true) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if is_dangling_link(&e) => {
                tracing::debug!(path = ?e.path(), "skipping dangling symlink");
                continue;
            }
            Err(source) => return Err(CorpusError::DirectoryRead { path: folder.to_path_buf(), source }),
        };
        let p = entry.path();
        if entry.file_type().is_file() && p.extension() == Some(wanted) {
            files.push(p.to_path_buf());
        }
    }

    if files.is_empty() {
        return Err(CorpusError::NoDocumentsFound(folder.to_path_buf()));
    }
    if options.sort_files {
        files.sort();
    }
    tracing::debug!(folder = %folder.display(), count = files.len(), "listed documents");
    Ok(files)
}

/// A symlink directly inside the folder whose target is gone. It is not a regular file,
/// so it is skipped like any other non-document entry.
fn is_dangling_link(err: &walkdir::Error) -> bool {
    let not_found = err.io_error().map_or(false, |io| io.kind() == ErrorKind::NotFound);
    let is_link = err
        .path()
        .and_then(|p| fs::symlink_metadata(p).ok())
        .map_or(false, |m| m.file_type().is_symlink());
    err.depth() == 1 && not_found && is_link
}

/// Read a whole document. Bytes that are not valid UTF-8 are replaced, which only ever
/// turns them into term separators.
pub fn read_document(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|source| CorpusError::FileRead { path: path.to_path_buf(), source })?;
    match String::from_utf8(bytes) {
        Ok(text) => Ok(text),
        Err(e) => {
            tracing::warn!(path = %path.display(), "document is not valid UTF-8, decoding lossily");
            Ok(String::from_utf8_lossy(e.as_bytes()).into_owned())
        }
    }
}

/// List and read every document; the first failure aborts.
pub fn load_documents(folder: &Path, options: &CorpusOptions) -> Result<Vec<Document>> {
    read_documents(list_documents(folder, options)?)
}

/// Read the given paths in order. Nothing is returned unless every read succeeds.
pub fn read_documents(paths: Vec<PathBuf>) -> Result<Vec<Document>> {
    paths
        .into_iter()
        .map(|path| {
            let text = read_document(&path)?;
            Ok(Document { path, text })
        })
        .collect()
}
