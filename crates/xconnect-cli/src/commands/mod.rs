//! This module contains the implementation of the various subcommands for the `xconnect` tool.

pub(crate) mod export;
pub(crate) mod import;
pub(crate) mod list;
pub(crate) mod profile;
pub(crate) mod remove;
pub(crate) mod scan;
pub(crate) mod search;
pub(crate) mod share;
pub(crate) mod write;
