use anyhow::Context;

use xconnect_ops::transfer::{export_to, DirectorySink, FileSink, WriterSink};

use crate::types::ExportJson;
use crate::util::open_directory;

pub(crate) fn cmd_export(root: &str, out_dir: Option<&str>, json: bool) -> anyhow::Result<()> {
    let dir = open_directory(root)?;

    let sink: Box<dyn FileSink> = match out_dir {
        Some(p) => Box::new(DirectorySink::new(p)),
        None => Box::new(WriterSink::new(std::io::stdout())),
    };
    let location = export_to(sink.as_ref(), dir.records()).context("export directory")?;

    if out_dir.is_none() {
        return Ok(());
    }
    if json {
        let out = ExportJson {
            ok: true,
            path: &location,
            count: dir.len(),
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("Exported {} colleagues to {location}", dir.len());
    }
    Ok(())
}
