use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "xconnect",
    version,
    about = "Keep a personal directory of colleagues and swap profiles by code.",
    long_about = "Keep a personal directory of colleagues and swap profiles by code.\n\nNotes:\n  - Every change rewrites the whole directory snapshot.\n  - `import` replaces the directory; it does not merge."
)]
pub(crate) struct Cli {
    /// Directory holding the store files.
    #[arg(long, global = true, env = "XCONNECT_ROOT", default_value = ".xconnect")]
    pub(crate) root: String,

    /// Emit machine-readable JSON instead of human output.
    #[arg(long, global = true)]
    pub(crate) json: bool,

    #[command(subcommand)]
    pub(crate) cmd: Command,
}

/// Free-text fields of a colleague record. Omitted flags are stored as empty text.
#[derive(Args, Debug, Clone, Default)]
pub(crate) struct RecordArgs {
    #[arg(long, default_value = "")]
    pub(crate) name: String,
    #[arg(long, default_value = "")]
    pub(crate) surname: String,
    #[arg(long, default_value = "")]
    pub(crate) department: String,
    #[arg(long, default_value = "")]
    pub(crate) description: String,
    /// Notes from the last catch-up.
    #[arg(long, default_value = "")]
    pub(crate) protocol: String,
}

#[derive(Subcommand)]
pub(crate) enum Command {
    /// List every colleague in the directory.
    List,
    /// Add a colleague; a new id is assigned.
    Add {
        #[command(flatten)]
        fields: RecordArgs,
    },
    /// Replace all fields of an existing colleague.
    Update {
        /// Id of the record to update.
        id: String,
        #[command(flatten)]
        fields: RecordArgs,
    },
    /// Remove a colleague (removing an unknown id is not an error).
    Remove {
        /// Id of the record to remove.
        id: String,
    },
    /// Case-insensitive substring search across all text fields.
    Search {
        /// Text to look for; empty matches everything.
        #[arg(default_value = "")]
        query: String,
    },
    /// Show or edit your own profile.
    Profile {
        #[command(subcommand)]
        cmd: ProfileCommand,
    },
    /// Print your profile as an exchange payload for code rendering.
    Share,
    /// Read a scanned exchange payload and stage it, optionally saving it.
    #[command(
        after_help = "Examples:\n  xconnect scan '{\"name\":\"Ben\",\"surname\":\"Ho\",\"department\":\"Sales\",\"description\":\"new hire\"}'\n  xconnect scan --in payload.txt --commit --protocol \"met at expo\"\n  xconnect scan --in payload.txt --update 1712000000000"
    )]
    Scan {
        /// Scanned text (alternative to `--in`).
        text: Option<String>,
        /// File holding the scanned text.
        #[arg(long = "in", conflicts_with = "text")]
        input: Option<String>,
        /// Save the staged profile as a new colleague.
        #[arg(long, conflicts_with = "update")]
        commit: bool,
        /// Replace an existing colleague with the staged profile.
        #[arg(long, value_name = "ID")]
        update: Option<String>,
        /// Catch-up notes to store alongside the scanned profile.
        #[arg(long, default_value = "")]
        protocol: String,
    },
    /// Export the whole directory as `colleagues.json`.
    Export {
        /// Directory to write `colleagues.json` into (stdout if omitted).
        #[arg(long)]
        out: Option<String>,
    },
    /// Replace the whole directory with the contents of an exported file.
    Import {
        /// Path to a JSON array of colleague records.
        file: String,
        /// Validate the file without changing the directory.
        #[arg(long)]
        dry_run: bool,
    },
}

#[derive(Subcommand)]
pub(crate) enum ProfileCommand {
    /// Print the stored profile.
    Show,
    /// Overwrite the stored profile.
    Set {
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "")]
        surname: String,
        #[arg(long, default_value = "")]
        department: String,
        #[arg(long, default_value = "")]
        description: String,
    },
    /// Remove the stored profile.
    Clear,
}
