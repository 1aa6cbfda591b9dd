use crate::types::SearchJson;
use crate::util::{open_directory, print_record};

pub(crate) fn cmd_search(root: &str, query: &str, json: bool) -> anyhow::Result<()> {
    let dir = open_directory(root)?;
    let hits = dir.search(query);

    if json {
        let out = SearchJson {
            query,
            count: hits.len(),
            records: &hits,
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    if hits.is_empty() {
        println!("No colleagues match {query:?}");
        return Ok(());
    }
    for r in &hits {
        print_record(r);
    }
    Ok(())
}
