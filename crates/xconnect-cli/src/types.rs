use serde::Serialize;

use xconnect_core::types::{ColleagueRecord, ProfileSnapshot};

#[derive(Serialize)]
pub(crate) struct RecordsJson<'a> {
    pub(crate) count: usize,
    pub(crate) records: &'a [ColleagueRecord],
}

#[derive(Serialize)]
pub(crate) struct SearchJson<'a> {
    pub(crate) query: &'a str,
    pub(crate) count: usize,
    pub(crate) records: &'a [ColleagueRecord],
}

#[derive(Serialize)]
pub(crate) struct WriteJson<'a> {
    pub(crate) ok: bool,
    pub(crate) action: &'static str,
    pub(crate) record: &'a ColleagueRecord,
}

#[derive(Serialize)]
pub(crate) struct RemoveJson<'a> {
    pub(crate) ok: bool,
    pub(crate) id: &'a str,
    pub(crate) removed: bool,
}

#[derive(Serialize)]
pub(crate) struct ProfileJson<'a> {
    pub(crate) ok: bool,
    pub(crate) profile: &'a ProfileSnapshot,
}

#[derive(Serialize)]
pub(crate) struct ShareJson<'a> {
    pub(crate) payload: &'a str,
}

#[derive(Serialize)]
pub(crate) struct ScanJson<'a> {
    pub(crate) ok: bool,
    pub(crate) staged: &'a ProfileSnapshot,
    pub(crate) committed: Option<&'a ColleagueRecord>,
}

#[derive(Serialize)]
pub(crate) struct ExportJson<'a> {
    pub(crate) ok: bool,
    pub(crate) path: &'a str,
    pub(crate) count: usize,
}

#[derive(Serialize)]
pub(crate) struct ImportJson<'a> {
    pub(crate) ok: bool,
    pub(crate) file: &'a str,
    pub(crate) imported: usize,
    pub(crate) replaced: usize,
    pub(crate) dry_run: bool,
}
