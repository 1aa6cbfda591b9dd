use anyhow::Context;

use xconnect_ops::import_into;

use crate::types::ImportJson;
use crate::util::open_directory;

pub(crate) fn cmd_import(root: &str, file: &str, dry_run: bool, json: bool) -> anyhow::Result<()> {
    let bytes = std::fs::read(file).with_context(|| format!("read {file}"))?;

    let mut dir = open_directory(root)?;
    let outcome =
        import_into(&mut dir, &bytes, dry_run).with_context(|| format!("import {file}"))?;

    if json {
        let out = ImportJson {
            ok: true,
            file,
            imported: outcome.imported,
            replaced: outcome.replaced,
            dry_run: outcome.dry_run,
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else if dry_run {
        println!(
            "Dry-run: would replace {} colleagues with {} from {file}",
            outcome.replaced, outcome.imported
        );
    } else {
        println!(
            "Imported {} colleagues from {file} (replaced {})",
            outcome.imported, outcome.replaced
        );
    }
    Ok(())
}
