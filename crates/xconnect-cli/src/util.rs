use anyhow::Context;

use xconnect_core::types::{ColleagueRecord, RecordFields};
use xconnect_format::FileKvStore;
use xconnect_ops::util::truncate_preview;
use xconnect_ops::Directory;

use crate::cli::RecordArgs;

const PREVIEW_CHARS: usize = 60;

pub(crate) fn open_store(root: &str) -> FileKvStore {
    FileKvStore::new(root)
}

pub(crate) fn open_directory(root: &str) -> anyhow::Result<Directory<FileKvStore>> {
    Directory::open(open_store(root)).with_context(|| format!("read directory under {root}"))
}

pub(crate) fn record_fields(args: RecordArgs) -> RecordFields {
    RecordFields {
        name: args.name,
        surname: args.surname,
        department: args.department,
        description: args.description,
        last_protocol: args.protocol,
    }
}

pub(crate) fn print_record(r: &ColleagueRecord) {
    let full_name = format!("{} {}", r.name, r.surname);
    println!("[{}] {}", r.id, full_name.trim());
    if !r.department.is_empty() {
        println!("  department: {}", truncate_preview(&r.department, PREVIEW_CHARS));
    }
    if !r.description.is_empty() {
        println!("  description: {}", truncate_preview(&r.description, PREVIEW_CHARS));
    }
    if !r.last_protocol.is_empty() {
        println!("  last catch-up: {}", truncate_preview(&r.last_protocol, PREVIEW_CHARS));
    }
}

#[cfg(test)]
pub(crate) fn make_temp_dir() -> tempfile::TempDir {
    tempfile::Builder::new()
        .prefix("xconnect_cli_test_")
        .tempdir()
        .expect("create temp dir")
}
