use anyhow::Context;

use xconnect_ops::ExchangeChannel;

use crate::types::ScanJson;
use crate::util::{open_directory, print_record};

#[allow(clippy::too_many_arguments)]
pub(crate) fn cmd_scan(
    root: &str,
    text: Option<&str>,
    input: Option<&str>,
    commit: bool,
    update: Option<&str>,
    protocol: &str,
    json: bool,
) -> anyhow::Result<()> {
    let raw = match (text, input) {
        (Some(t), None) => t.to_string(),
        (None, Some(path)) => {
            std::fs::read_to_string(path).with_context(|| format!("read {path}"))?
        }
        (Some(_), Some(_)) => anyhow::bail!("provide only one of TEXT or --in"),
        (None, None) => anyhow::bail!("missing scanned text (pass TEXT or --in FILE)"),
    };

    let mut channel = ExchangeChannel::new();
    channel.ingest(&raw).context("scanned code is not a profile")?;
    let Some(prefill) = channel.take_staged() else {
        anyhow::bail!("nothing staged after scan");
    };
    let staged = prefill.profile.clone();

    let committed = if commit || update.is_some() {
        let mut dir = open_directory(root)?;
        let fields = prefill.into_fields(protocol);
        let record = match update {
            Some(id) => dir
                .update(id, fields)
                .with_context(|| format!("update colleague {id} from scan"))?,
            None => dir.create(fields).context("add colleague from scan")?,
        };
        Some(record)
    } else {
        None
    };

    if json {
        let out = ScanJson {
            ok: true,
            staged: &staged,
            committed: committed.as_ref(),
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!("Scanned profile:");
    println!("  name: {}", staged.name);
    println!("  surname: {}", staged.surname);
    println!("  department: {}", staged.department);
    println!("  description: {}", staged.description);
    match committed {
        Some(r) => {
            println!("Saved as:");
            print_record(&r);
        }
        None => println!("Not saved (use --commit or --update ID to save)"),
    }
    Ok(())
}
