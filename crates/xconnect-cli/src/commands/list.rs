use crate::types::RecordsJson;
use crate::util::{open_directory, print_record};

pub(crate) fn cmd_list(root: &str, json: bool) -> anyhow::Result<()> {
    let dir = open_directory(root)?;
    let records = dir.records();

    if json {
        let out = RecordsJson {
            count: records.len(),
            records,
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    if records.is_empty() {
        println!("No colleagues yet.");
        return Ok(());
    }
    for r in records {
        print_record(r);
    }
    Ok(())
}
