use anyhow::Context;

use xconnect_ops::{ExchangeChannel, ProfileStore};

use crate::types::ShareJson;
use crate::util::open_store;

pub(crate) fn cmd_share(root: &str, json: bool) -> anyhow::Result<()> {
    let profile = ProfileStore::new(open_store(root))
        .load()
        .context("load profile")?;
    let payload = ExchangeChannel::new()
        .build_payload(&profile)
        .context("build exchange payload")?;

    if json {
        let out = ShareJson { payload: &payload };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        // Bare payload on stdout so it can be piped into a code renderer.
        println!("{payload}");
    }
    Ok(())
}
