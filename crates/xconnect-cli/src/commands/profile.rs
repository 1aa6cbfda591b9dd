use anyhow::Context;

use xconnect_core::types::ProfileSnapshot;
use xconnect_ops::ProfileStore;

use crate::types::ProfileJson;
use crate::util::open_store;

pub(crate) fn cmd_profile_show(root: &str, json: bool) -> anyhow::Result<()> {
    let profile = ProfileStore::new(open_store(root))
        .load()
        .context("load profile")?;
    print_profile(&profile, json)
}

pub(crate) fn cmd_profile_set(root: &str, profile: ProfileSnapshot, json: bool) -> anyhow::Result<()> {
    ProfileStore::new(open_store(root))
        .save(&profile)
        .context("save profile")?;
    print_profile(&profile, json)
}

pub(crate) fn cmd_profile_clear(root: &str, json: bool) -> anyhow::Result<()> {
    ProfileStore::new(open_store(root))
        .clear()
        .context("clear profile")?;
    if json {
        println!("{}", serde_json::json!({ "ok": true }));
    } else {
        println!("Profile cleared");
    }
    Ok(())
}

fn print_profile(profile: &ProfileSnapshot, json: bool) -> anyhow::Result<()> {
    if json {
        let out = ProfileJson { ok: true, profile };
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }
    println!("Name:        {}", profile.name);
    println!("Surname:     {}", profile.surname);
    println!("Department:  {}", profile.department);
    println!("Description: {}", profile.description);
    Ok(())
}
