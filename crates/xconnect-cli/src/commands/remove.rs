use anyhow::Context;

use crate::types::RemoveJson;
use crate::util::open_directory;

pub(crate) fn cmd_remove(root: &str, id: &str, json: bool) -> anyhow::Result<()> {
    let mut dir = open_directory(root)?;
    let removed = dir
        .delete(id)
        .with_context(|| format!("remove colleague {id}"))?;

    if json {
        let out = RemoveJson {
            ok: true,
            id,
            removed,
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else if removed {
        println!("Removed colleague {id}");
    } else {
        println!("No colleague with id {id}; nothing to remove");
    }
    Ok(())
}
