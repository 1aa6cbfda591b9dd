//! Profile sharing through a short textual payload meant for a scannable code.
//!
//! Sharing is identity-less: the payload carries the four public profile fields
//! and no `id`. Scanning is a staging step. A successful [`ExchangeChannel::ingest`]
//! only replaces the staged [`Prefill`]; the caller commits it through
//! `Directory::create` or `Directory::update` after the user has reviewed it.

use xconnect_core::error::{DecodeError, Result};
use xconnect_core::types::{ProfileSnapshot, RecordFields};
use xconnect_format::codec;

/// Encode `profile` as the exchange payload string.
pub fn build_payload(profile: &ProfileSnapshot) -> Result<String> {
    codec::encode_profile(profile)
}

/// Decode scanned text into a profile without staging it.
pub fn parse_payload(raw: &str) -> std::result::Result<ProfileSnapshot, DecodeError> {
    codec::decode_profile(raw.trim())
}

/// A scanned profile waiting for the user to confirm it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prefill {
    pub profile: ProfileSnapshot,
}

impl Prefill {
    /// Field set for committing this prefill as a directory record.
    pub fn into_fields(self, last_protocol: impl Into<String>) -> RecordFields {
        RecordFields {
            name: self.profile.name,
            surname: self.profile.surname,
            department: self.profile.department,
            description: self.profile.description,
            last_protocol: last_protocol.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct ExchangeChannel {
    staged: Option<Prefill>,
}

impl ExchangeChannel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn build_payload(&self, profile: &ProfileSnapshot) -> Result<String> {
        build_payload(profile)
    }

    /// Parse scanned text and stage it.
    ///
    /// On error the previously staged prefill is left as it was.
    pub fn ingest(&mut self, raw: &str) -> std::result::Result<&Prefill, DecodeError> {
        let profile = parse_payload(raw).inspect_err(|e| {
            tracing::warn!(error = %e, "rejected scanned payload");
        })?;
        tracing::debug!("staged scanned profile");
        Ok(self.staged.insert(Prefill { profile }))
    }

    pub fn staged(&self) -> Option<&Prefill> {
        self.staged.as_ref()
    }

    /// Hand the staged prefill to the caller, leaving nothing staged.
    pub fn take_staged(&mut self) -> Option<Prefill> {
        self.staged.take()
    }

    pub fn discard(&mut self) {
        self.staged = None;
    }
}
