use crate::cli::{Cli, Command, ProfileCommand};

pub(crate) fn run(cli: Cli) -> anyhow::Result<()> {
    let root = cli.root.as_str();
    match cli.cmd {
        Command::List => crate::commands::list::cmd_list(root, cli.json),
        Command::Add { fields } => crate::commands::write::cmd_add(root, fields, cli.json),
        Command::Update { id, fields } => {
            crate::commands::write::cmd_update(root, &id, fields, cli.json)
        }
        Command::Remove { id } => crate::commands::remove::cmd_remove(root, &id, cli.json),
        Command::Search { query } => crate::commands::search::cmd_search(root, &query, cli.json),
        Command::Profile { cmd } => match cmd {
            ProfileCommand::Show => crate::commands::profile::cmd_profile_show(root, cli.json),
            ProfileCommand::Set {
                name,
                surname,
                department,
                description,
            } => crate::commands::profile::cmd_profile_set(
                root,
                xconnect_core::types::ProfileSnapshot {
                    name,
                    surname,
                    department,
                    description,
                },
                cli.json,
            ),
            ProfileCommand::Clear => crate::commands::profile::cmd_profile_clear(root, cli.json),
        },
        Command::Share => crate::commands::share::cmd_share(root, cli.json),
        Command::Scan {
            text,
            input,
            commit,
            update,
            protocol,
        } => crate::commands::scan::cmd_scan(
            root,
            text.as_deref(),
            input.as_deref(),
            commit,
            update.as_deref(),
            &protocol,
            cli.json,
        ),
        Command::Export { out } => {
            if cli.json && out.is_none() {
                anyhow::bail!("--json is not supported for export to stdout (the export is already JSON)");
            }
            crate::commands::export::cmd_export(root, out.as_deref(), cli.json)
        }
        Command::Import { file, dry_run } => {
            crate::commands::import::cmd_import(root, &file, dry_run, cli.json)
        }
    }
}
