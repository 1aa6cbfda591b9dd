use std::collections::HashSet;

use xconnect_core::error::{Error, Result};
use xconnect_core::types::{ColleagueRecord, RecordFields};
use xconnect_format::{codec, KeyValueStore};

use crate::util::now_unix_ms;

/// Storage key holding the JSON array of colleague records.
pub const COLLECTION_KEY: &str = "colleagues";

/// Authoritative in-memory set of colleague records, persisted as one value.
///
/// Every mutator builds the next set, writes the whole set to the store, and only
/// then adopts it in memory. A failed write leaves both the store and the
/// in-memory baseline untouched. Mutators take `&mut self`, so two mutations
/// against the same directory can never interleave.
pub struct Directory<S> {
    store: S,
    records: Vec<ColleagueRecord>,
    clock: fn() -> u64,
}

impl<S: KeyValueStore> Directory<S> {
    /// An empty directory over `store`. Call [`Directory::load`] to read the snapshot.
    pub fn new(store: S) -> Self {
        Self {
            store,
            records: Vec::new(),
            clock: now_unix_ms,
        }
    }

    /// Construct and load in one step.
    pub fn open(store: S) -> Result<Self> {
        let mut dir = Self::new(store);
        dir.load()?;
        Ok(dir)
    }

    /// Replace the millisecond clock used to mint ids.
    pub fn with_clock(mut self, clock: fn() -> u64) -> Self {
        self.clock = clock;
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Read the persisted snapshot and make it the in-memory baseline.
    ///
    /// A missing or corrupt snapshot yields an empty directory. A failed read is
    /// returned as [`Error::Storage`] and leaves the current baseline in place, so
    /// a later commit cannot overwrite a snapshot that was never seen.
    pub fn load(&mut self) -> Result<&[ColleagueRecord]> {
        self.records = match self.store.get(COLLECTION_KEY)? {
            Some(text) => match codec::decode_many(&text) {
                Ok(records) => records,
                Err(e) => {
                    tracing::warn!(error = %e, "stored directory snapshot is corrupt; starting empty");
                    Vec::new()
                }
            },
            None => Vec::new(),
        };
        tracing::debug!(count = self.records.len(), "loaded directory");
        Ok(&self.records)
    }

    pub fn records(&self) -> &[ColleagueRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&ColleagueRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn create(&mut self, fields: RecordFields) -> Result<ColleagueRecord> {
        let id = {
            let taken: HashSet<&str> = self.records.iter().map(|r| r.id.as_str()).collect();
            crate::util::mint_id(&taken, (self.clock)())
        };
        let record = ColleagueRecord::from_fields(id, fields);

        let mut next = self.records.clone();
        next.push(record.clone());
        self.commit(next)?;

        tracing::info!(id = %record.id, "created colleague record");
        Ok(record)
    }

    /// Replace every field of the record `id` with `fields`; the id is kept.
    pub fn update(&mut self, id: &str, fields: RecordFields) -> Result<ColleagueRecord> {
        let Some(pos) = self.records.iter().position(|r| r.id == id) else {
            return Err(Error::NotFound { id: id.to_string() });
        };
        let record = ColleagueRecord::from_fields(id, fields);

        let mut next = self.records.clone();
        next[pos] = record.clone();
        self.commit(next)?;

        tracing::info!(id = %record.id, "updated colleague record");
        Ok(record)
    }

    /// Remove the record `id` if present.
    ///
    /// Returns `Ok(true)` if a record was removed and `Ok(false)` if no record had
    /// that id. An unknown id touches nothing, so it cannot fail.
    pub fn delete(&mut self, id: &str) -> Result<bool> {
        if self.get(id).is_none() {
            tracing::debug!(id, "delete of unknown id ignored");
            return Ok(false);
        }
        let next: Vec<ColleagueRecord> = self
            .records
            .iter()
            .filter(|r| r.id != id)
            .cloned()
            .collect();
        self.commit(next)?;

        tracing::info!(id, "deleted colleague record");
        Ok(true)
    }

    /// Records whose free-text fields contain `query`, case-insensitively, in set order.
    pub fn search(&self, query: &str) -> Vec<ColleagueRecord> {
        let hits: Vec<ColleagueRecord> = self
            .records
            .iter()
            .filter(|r| r.matches(query))
            .cloned()
            .collect();
        tracing::debug!(query, hits = hits.len(), "searched directory");
        hits
    }

    /// Discard the whole set and persist `records` verbatim.
    ///
    /// Ids are not checked for uniqueness; the caller's source is trusted.
    pub fn replace_all(&mut self, records: Vec<ColleagueRecord>) -> Result<()> {
        let count = records.len();
        self.commit(records)?;
        tracing::info!(count, "replaced directory contents");
        Ok(())
    }

    fn commit(&mut self, next: Vec<ColleagueRecord>) -> Result<()> {
        let text = codec::encode_many_compact(&next)?;
        self.store.set(COLLECTION_KEY, &text)?;
        self.records = next;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use xconnect_core::error::StorageError;
    use xconnect_format::MemoryKvStore;

    /// Memory store whose reads and writes can be switched off.
    #[derive(Default)]
    struct FlakyStore {
        inner: MemoryKvStore,
        fail_reads: Cell<bool>,
        fail_writes: Cell<bool>,
    }

    impl KeyValueStore for FlakyStore {
        fn get(&self, key: &str) -> std::result::Result<Option<String>, StorageError> {
            if self.fail_reads.get() {
                return Err(StorageError::Unavailable("device busy".to_string()));
            }
            self.inner.get(key)
        }
        fn set(&self, key: &str, value: &str) -> std::result::Result<(), StorageError> {
            if self.fail_writes.get() {
                return Err(StorageError::Unavailable("disk full".to_string()));
            }
            self.inner.set(key, value)
        }
        fn remove(&self, key: &str) -> std::result::Result<(), StorageError> {
            self.inner.remove(key)
        }
    }

    fn fields(name: &str, description: &str) -> RecordFields {
        RecordFields {
            name: name.to_string(),
            surname: "Lee".to_string(),
            department: "R&D".to_string(),
            description: description.to_string(),
            last_protocol: String::new(),
        }
    }

    fn fixed_clock() -> u64 {
        1_700_000_000_000
    }

    #[test]
    fn creates_get_unique_ids_in_creation_order() {
        let store = MemoryKvStore::new();
        let mut dir = Directory::new(&store).with_clock(fixed_clock);

        let a = dir.create(fields("Ann", "a")).unwrap();
        let b = dir.create(fields("Bo", "b")).unwrap();
        let c = dir.create(fields("Cy", "c")).unwrap();

        assert_ne!(a.id, b.id);
        assert_ne!(b.id, c.id);
        assert_ne!(a.id, c.id);
        let all = dir.search("");
        assert_eq!(all, vec![a, b, c]);
    }

    #[test]
    fn created_records_survive_reload() {
        let store = MemoryKvStore::new();
        let created = {
            let mut dir = Directory::new(&store);
            dir.create(fields("Ann", "met at expo")).unwrap()
        };

        let mut reopened = Directory::new(&store);
        assert_eq!(reopened.load().unwrap(), &[created][..]);
    }

    #[test]
    fn ids_do_not_collide_with_loaded_records() {
        let store = MemoryKvStore::new();
        store
            .set(
                COLLECTION_KEY,
                &format!(r#"[{{"id":"{}","name":"Old"}}]"#, fixed_clock()),
            )
            .unwrap();
        let mut dir = Directory::open(&store).unwrap().with_clock(fixed_clock);
        let created = dir.create(fields("New", "")).unwrap();
        assert_ne!(created.id, fixed_clock().to_string());
        assert_eq!(dir.len(), 2);
    }

    #[test]
    fn update_replaces_all_fields_and_keeps_id() {
        let store = MemoryKvStore::new();
        let mut dir = Directory::new(&store);
        let created = dir.create(fields("Ann", "old notes")).unwrap();

        let replacement = RecordFields {
            name: "Anne".to_string(),
            last_protocol: "follow up in May".to_string(),
            ..RecordFields::default()
        };
        let updated = dir.update(&created.id, replacement.clone()).unwrap();
        assert_eq!(updated.id, created.id);

        let mut reopened = Directory::new(&store);
        let loaded = reopened.load().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id, created.id);
        assert_eq!(loaded[0].fields(), replacement);
    }

    #[test]
    fn update_of_unknown_id_is_not_found() {
        let store = MemoryKvStore::new();
        let mut dir = Directory::new(&store);
        let err = dir.update("nope", fields("X", "")).unwrap_err();
        assert!(matches!(err, Error::NotFound { ref id } if id == "nope"));
        assert_eq!(store.get(COLLECTION_KEY).unwrap(), None);
    }

    #[test]
    fn delete_removes_and_is_idempotent() {
        let store = MemoryKvStore::new();
        let mut dir = Directory::new(&store);
        let a = dir.create(fields("Ann", "")).unwrap();
        let b = dir.create(fields("Bo", "")).unwrap();

        assert!(dir.delete(&a.id).unwrap());
        assert!(dir.search("").iter().all(|r| r.id != a.id));

        let before = dir.records().to_vec();
        assert!(!dir.delete(&a.id).unwrap());
        assert!(!dir.delete("never-existed").unwrap());
        assert_eq!(dir.records(), &before[..]);
        assert_eq!(dir.records(), &[b][..]);
    }

    #[test]
    fn search_matches_any_field_without_mutating() {
        let store = MemoryKvStore::new();
        store
            .set(
                COLLECTION_KEY,
                r#"[{"id":"1","name":"Ann","surname":"Lee","department":"R&D","description":"met at expo","protocol":"discussed roadmap"}]"#,
            )
            .unwrap();
        let dir = Directory::open(&store).unwrap();

        assert_eq!(dir.search("expo").len(), 1);
        assert_eq!(dir.search("ANN")[0].id, "1");
        assert!(dir.search("sales").is_empty());
        assert_eq!(dir.len(), 1);
    }

    #[test]
    fn corrupt_or_missing_snapshot_loads_empty() {
        let store = MemoryKvStore::new();
        assert!(Directory::open(&store).unwrap().is_empty());

        store.set(COLLECTION_KEY, "{not json").unwrap();
        assert!(Directory::open(&store).unwrap().is_empty());

        store.set(COLLECTION_KEY, r#"{"id":"1"}"#).unwrap();
        assert!(Directory::open(&store).unwrap().is_empty());
    }

    #[test]
    fn failed_write_leaves_state_unchanged() {
        let store = FlakyStore::default();
        let mut dir = Directory::new(&store);
        let kept = dir.create(fields("Ann", "")).unwrap();
        let persisted = store.get(COLLECTION_KEY).unwrap();

        store.fail_writes.set(true);
        assert!(matches!(
            dir.create(fields("Bo", "")),
            Err(Error::Storage(_))
        ));
        assert!(dir.update(&kept.id, fields("Changed", "")).is_err());
        assert!(dir.delete(&kept.id).is_err());
        assert!(dir.replace_all(Vec::new()).is_err());

        assert_eq!(dir.records(), &[kept][..]);
        assert_eq!(store.get(COLLECTION_KEY).unwrap(), persisted);
    }

    #[test]
    fn failed_read_is_reported_and_snapshot_survives() {
        let store = FlakyStore::default();
        store
            .inner
            .set(
                COLLECTION_KEY,
                r#"[{"id":"1","name":"Ann"},{"id":"2","name":"Bo"}]"#,
            )
            .unwrap();
        let persisted = store.get(COLLECTION_KEY).unwrap();

        store.fail_reads.set(true);
        assert!(matches!(
            Directory::open(&store),
            Err(Error::Storage(StorageError::Unavailable(_)))
        ));
        assert_eq!(store.inner.get(COLLECTION_KEY).unwrap(), persisted);

        store.fail_reads.set(false);
        let mut dir = Directory::open(&store).unwrap();
        dir.create(fields("New", "")).unwrap();
        let names: Vec<&str> = dir.records().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["Ann", "Bo", "New"]);
    }

    #[test]
    fn failed_reload_keeps_previous_baseline() {
        let store = FlakyStore::default();
        let mut dir = Directory::new(&store);
        let kept = dir.create(fields("Ann", "")).unwrap();

        store.fail_reads.set(true);
        assert!(dir.load().is_err());
        assert_eq!(dir.records(), &[kept][..]);
    }

    #[test]
    fn delete_of_unknown_id_does_not_touch_storage() {
        let store = FlakyStore::default();
        let mut dir = Directory::new(&store);
        let kept = dir.create(fields("Ann", "")).unwrap();

        store.fail_writes.set(true);
        assert!(!dir.delete("never-existed").unwrap());
        assert_eq!(dir.records(), &[kept][..]);
    }

    #[test]
    fn replace_all_persists_verbatim_without_dedup() {
        let store = MemoryKvStore::new();
        let mut dir = Directory::new(&store);
        dir.create(fields("Ann", "")).unwrap();

        let dup = ColleagueRecord::from_fields("7", fields("Dup", ""));
        dir.replace_all(vec![dup.clone(), dup.clone()]).unwrap();

        let mut reopened = Directory::new(&store);
        assert_eq!(reopened.load().unwrap(), &[dup.clone(), dup][..]);
    }
}
