use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

/// Replace `path` with `bytes` without ever exposing a partially written file.
///
/// The bytes land in a sibling temp file first, are synced, and the temp file is
/// renamed over the target. A crash leaves either the old or the new content.
pub fn atomic_write(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let base = path
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("value");

    let mut i = 0u32;
    loop {
        let tmp_name = if i == 0 {
            format!(".{base}.tmp")
        } else {
            format!(".{base}.tmp.{i}")
        };
        let tmp_path = dir.join(tmp_name);
        match OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&tmp_path)
        {
            Ok(mut f) => {
                let written = f
                    .write_all(bytes)
                    .and_then(|()| f.sync_all())
                    .and_then(|()| std::fs::rename(&tmp_path, path));
                if written.is_err() {
                    let _ = std::fs::remove_file(&tmp_path);
                }
                return written;
            }
            Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {
                i = i.saturating_add(1);
                continue;
            }
            Err(e) => return Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn atomic_write_replaces_existing_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("colleagues");

        atomic_write(&path, b"first").unwrap();
        atomic_write(&path, b"second").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "second");
    }

    #[test]
    fn atomic_write_steps_past_stale_temp_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("colleagues");
        std::fs::write(dir.path().join(".colleagues.tmp"), b"stale").unwrap();

        atomic_write(&path, b"fresh").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "fresh");
        assert!(!dir.path().join(".colleagues.tmp.1").exists());
    }
}
