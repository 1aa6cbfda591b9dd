use std::cell::RefCell;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;

use xconnect_core::error::{DecodeError, Error, Result, StorageError};
use xconnect_core::types::ColleagueRecord;
use xconnect_format::{atomic_write, codec, KeyValueStore};

use crate::Directory;

pub const EXPORT_FILE_NAME: &str = "colleagues.json";
pub const EXPORT_MEDIA_TYPE: &str = "application/json";

/// A whole-directory snapshot ready to hand to a [`FileSink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedFile {
    pub file_name: &'static str,
    pub media_type: &'static str,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ImportOutcome {
    pub imported: usize,
    pub replaced: usize,
    pub dry_run: bool,
}

/// Host capability that delivers an exported file to the user.
pub trait FileSink {
    /// Deliver `file`; returns a human-readable description of where it went.
    fn deliver(&self, file: &ExportedFile) -> Result<String>;
}

/// Native delivery: writes the file into a directory.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn target_path(&self, file: &ExportedFile) -> PathBuf {
        self.dir.join(file.file_name)
    }
}

impl FileSink for DirectorySink {
    fn deliver(&self, file: &ExportedFile) -> Result<String> {
        std::fs::create_dir_all(&self.dir).map_err(io_error(&self.dir))?;
        let path = self.target_path(file);
        atomic_write(&path, &file.bytes).map_err(io_error(&path))?;
        Ok(path.display().to_string())
    }
}

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> Error {
    let path = path.to_path_buf();
    move |source| Error::Storage(StorageError::Io { path, source })
}

/// Download-style delivery: streams the bytes to a writer such as stdout.
pub struct WriterSink<W: Write> {
    out: RefCell<W>,
}

impl<W: Write> WriterSink<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: RefCell::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }
}

impl<W: Write> FileSink for WriterSink<W> {
    fn deliver(&self, file: &ExportedFile) -> Result<String> {
        let mut out = self.out.borrow_mut();
        out.write_all(&file.bytes)
            .and_then(|()| out.write_all(b"\n"))
            .and_then(|()| out.flush())
            .map_err(io_error(Path::new(file.file_name)))?;
        Ok(format!("{} ({})", file.file_name, file.media_type))
    }
}

/// Serialize `records` as the pretty-printed export file. Does not touch storage.
pub fn export_snapshot(records: &[ColleagueRecord]) -> Result<ExportedFile> {
    let text = codec::encode_many(records)?;
    Ok(ExportedFile {
        file_name: EXPORT_FILE_NAME,
        media_type: EXPORT_MEDIA_TYPE,
        bytes: text.into_bytes(),
    })
}

/// Export `records` and hand the file to `sink`.
pub fn export_to(sink: &dyn FileSink, records: &[ColleagueRecord]) -> Result<String> {
    let file = export_snapshot(records)?;
    let location = sink.deliver(&file)?;
    tracing::info!(count = records.len(), %location, "exported directory snapshot");
    Ok(location)
}

/// Decode an import file. All or nothing: one bad element fails the whole file.
pub fn import_snapshot(bytes: &[u8]) -> std::result::Result<Vec<ColleagueRecord>, DecodeError> {
    let text = std::str::from_utf8(bytes)
        .map_err(|e| DecodeError::invalid_json(format!("file is not valid utf-8: {e}")))?;
    codec::decode_many(text.strip_prefix('\u{feff}').unwrap_or(text))
}

/// Decode `bytes` and, unless `dry_run`, replace the directory's contents with them.
///
/// On a decode failure the directory is not touched.
pub fn import_into<S: KeyValueStore>(
    directory: &mut Directory<S>,
    bytes: &[u8],
    dry_run: bool,
) -> Result<ImportOutcome> {
    let records = import_snapshot(bytes)?;
    let outcome = ImportOutcome {
        imported: records.len(),
        replaced: directory.len(),
        dry_run,
    };
    if !dry_run {
        directory.replace_all(records)?;
        tracing::info!(
            imported = outcome.imported,
            replaced = outcome.replaced,
            "imported directory snapshot"
        );
    }
    Ok(outcome)
}
