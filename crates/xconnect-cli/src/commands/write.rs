use anyhow::Context;

use xconnect_core::types::ColleagueRecord;

use crate::cli::RecordArgs;
use crate::types::WriteJson;
use crate::util::{open_directory, print_record, record_fields};

pub(crate) fn cmd_add(root: &str, fields: RecordArgs, json: bool) -> anyhow::Result<()> {
    let mut dir = open_directory(root)?;
    let record = dir
        .create(record_fields(fields))
        .with_context(|| format!("add colleague under {root}"))?;
    report("added", &record, json)
}

pub(crate) fn cmd_update(
    root: &str,
    id: &str,
    fields: RecordArgs,
    json: bool,
) -> anyhow::Result<()> {
    let mut dir = open_directory(root)?;
    let record = dir
        .update(id, record_fields(fields))
        .with_context(|| format!("update colleague {id}"))?;
    report("updated", &record, json)
}

pub(crate) fn report(action: &'static str, record: &ColleagueRecord, json: bool) -> anyhow::Result<()> {
    if json {
        let out = WriteJson {
            ok: true,
            action,
            record,
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("Colleague {action}:");
        print_record(record);
    }
    Ok(())
}
