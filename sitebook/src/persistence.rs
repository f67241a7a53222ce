//! Reading and writing the whole document as one JSON file.
//!
//! Two file shapes are accepted on open: the legacy bare array of projects and the
//! composite `{projects, timeEntries, employees}` object. Saving always writes the
//! composite shape, pretty-printed with two-space indentation.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{error, info};

use crate::{Project, ProjectDocument, Session};

/// File name used by the download fallback when nothing better is known.
pub const DEFAULT_DOWNLOAD_NAME: &str = "project_data.json";

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{path} is not a project data file: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to serialize document: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("{0} cannot be written in place")]
    ReadOnly(PathBuf),
    #[error("no download directory available")]
    NoDownloadDir,
}

/// How saves reach the disk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SaveMode {
    /// Overwrite the opened (or save-as chosen) file.
    #[default]
    InPlace,
    /// Never touch existing files; every save produces a new copy in the download
    /// directory.
    Download,
}

/// Which on-disk shape a document was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentShape {
    Legacy,
    Composite,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StoredDocument {
    Legacy(Vec<Project>),
    Composite(ProjectDocument),
}

/// An opened or save-as chosen file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileHandle {
    path: PathBuf,
    writable: bool,
}

impl FileHandle {
    pub fn new(path: impl Into<PathBuf>, writable: bool) -> Self {
        Self {
            path: path.into(),
            writable,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }

    pub fn is_writable(&self) -> bool {
        self.writable
    }
}

/// A document read from disk together with the handle it came from.
#[derive(Debug, Clone)]
pub struct LoadedDocument {
    pub handle: FileHandle,
    pub document: ProjectDocument,
    pub shape: DocumentShape,
}

/// What a save ended up doing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Written to this file; later saves may reuse the handle.
    Written(FileHandle),
    /// A new copy was written at this path.
    Downloaded(PathBuf),
    /// There is no file yet; ask the user for a path and call [`FileStore::save_as`].
    NeedsPath,
}

pub fn parse_document(text: &str) -> Result<(ProjectDocument, DocumentShape), serde_json::Error> {
    Ok(match serde_json::from_str::<StoredDocument>(text)? {
        StoredDocument::Legacy(projects) => (
            ProjectDocument {
                projects,
                ..Default::default()
            },
            DocumentShape::Legacy,
        ),
        StoredDocument::Composite(document) => (document, DocumentShape::Composite),
    })
}

pub fn serialize_document(document: &ProjectDocument) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(document)
}

/// Suggested name for a first save, e.g. `project_2025-03-01.json`.
pub fn suggested_file_name(date: time::Date) -> String {
    format!(
        "project_{:04}-{:02}-{:02}.json",
        date.year(),
        date.month() as u8,
        date.day()
    )
}

/// The persistence adapter: opens files and saves the session according to the
/// configured [`SaveMode`].
#[derive(Debug, Clone, Default)]
pub struct FileStore {
    mode: SaveMode,
    download_dir: Option<PathBuf>,
}

impl FileStore {
    pub fn new(mode: SaveMode, download_dir: Option<PathBuf>) -> Self {
        Self { mode, download_dir }
    }

    pub fn mode(&self) -> SaveMode {
        self.mode
    }

    /// Whether saves can update files in place.
    pub fn supports_in_place(&self) -> bool {
        self.mode == SaveMode::InPlace
    }

    /// Open a document. `None` means the user cancelled the prompt, which is not an
    /// error.
    pub async fn open(
        &self,
        path: Option<&Path>,
    ) -> Result<Option<LoadedDocument>, PersistenceError> {
        let Some(path) = path else {
            return Ok(None);
        };
        let text = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| PersistenceError::Read {
                path: path.to_path_buf(),
                source,
            })?;
        let (document, shape) =
            parse_document(&text).map_err(|source| PersistenceError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        let writable = match tokio::fs::metadata(path).await {
            Ok(meta) => !meta.permissions().readonly(),
            Err(_) => false,
        };
        info!(
            path = %path.display(),
            ?shape,
            writable,
            projects = document.projects.len(),
            usage_records = document.time_entries.len(),
            employees = document.employees.len(),
            "opened document"
        );
        Ok(Some(LoadedDocument {
            handle: FileHandle::new(path, writable),
            document,
            shape,
        }))
    }

    /// Save the session. With a writable handle in in-place mode this overwrites the
    /// file; without a handle it asks for a path; otherwise it falls back to a
    /// download copy named after `file_name`.
    pub async fn save(
        &self,
        session: &mut Session,
        handle: Option<&FileHandle>,
        file_name: Option<&str>,
    ) -> Result<SaveOutcome, PersistenceError> {
        match handle {
            Some(handle) if self.supports_in_place() && handle.is_writable() => {
                self.write(session, handle).await?;
                Ok(SaveOutcome::Written(handle.clone()))
            }
            None if self.supports_in_place() => Ok(SaveOutcome::NeedsPath),
            _ => {
                let name = file_name
                    .map(str::to_string)
                    .or_else(|| handle.map(FileHandle::name))
                    .unwrap_or_else(|| DEFAULT_DOWNLOAD_NAME.to_string());
                let path = self.download(session, &name).await?;
                Ok(SaveOutcome::Downloaded(path))
            }
        }
    }

    /// Write the whole document over `handle`'s file.
    pub async fn write(
        &self,
        session: &mut Session,
        handle: &FileHandle,
    ) -> Result<(), PersistenceError> {
        if !handle.is_writable() {
            return Err(PersistenceError::ReadOnly(handle.path.clone()));
        }
        let text = serialize_document(session.document())?;
        write_atomically(handle.path(), &text).await?;
        session.mark_saved();
        info!(path = %handle.path().display(), "saved document");
        Ok(())
    }

    /// Save to a newly chosen path. `None` means the prompt was cancelled.
    pub async fn save_as(
        &self,
        session: &mut Session,
        path: Option<&Path>,
    ) -> Result<Option<FileHandle>, PersistenceError> {
        let Some(path) = path else {
            return Ok(None);
        };
        let handle = FileHandle::new(path, true);
        self.write(session, &handle).await?;
        Ok(Some(handle))
    }

    /// Write a fresh copy into the download directory without overwriting anything.
    pub async fn download(
        &self,
        session: &mut Session,
        file_name: &str,
    ) -> Result<PathBuf, PersistenceError> {
        let dir = self
            .download_dir
            .clone()
            .or_else(dirs::download_dir)
            .ok_or(PersistenceError::NoDownloadDir)?;
        tokio::fs::create_dir_all(&dir)
            .await
            .map_err(|source| PersistenceError::Write {
                path: dir.clone(),
                source,
            })?;
        let path = unused_path(&dir, file_name).await;
        let text = serialize_document(session.document())?;
        tokio::fs::write(&path, text)
            .await
            .map_err(|source| {
                error!(path = %path.display(), "download copy failed");
                PersistenceError::Write {
                    path: path.clone(),
                    source,
                }
            })?;
        session.mark_saved();
        info!(path = %path.display(), "saved document copy");
        Ok(path)
    }
}

async fn write_atomically(path: &Path, text: &str) -> Result<(), PersistenceError> {
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);
    let write_err = |source| PersistenceError::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Err(e) = tokio::fs::write(&tmp, text).await {
        error!(path = %path.display(), "write failed");
        return Err(write_err(e));
    }
    if let Err(e) = tokio::fs::rename(&tmp, path).await {
        let _ = tokio::fs::remove_file(&tmp).await;
        error!(path = %path.display(), "rename over target failed");
        return Err(write_err(e));
    }
    Ok(())
}

/// `name.json`, then `name (1).json`, `name (2).json`, ... until one is free.
async fn unused_path(dir: &Path, file_name: &str) -> PathBuf {
    let candidate = dir.join(file_name);
    if !exists(&candidate).await {
        return candidate;
    }
    let name = Path::new(file_name);
    let stem = name
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| file_name.to_string());
    let ext = name
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default();
    let mut n = 1;
    loop {
        let candidate = dir.join(format!("{} ({}){}", stem, n, ext));
        if !exists(&candidate).await {
            return candidate;
        }
        n += 1;
    }
}

async fn exists(path: &Path) -> bool {
    tokio::fs::try_exists(path).await.unwrap_or(false)
}
