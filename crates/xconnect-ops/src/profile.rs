use xconnect_core::error::Result;
use xconnect_core::types::ProfileSnapshot;
use xconnect_format::KeyValueStore;

pub const NAME_KEY: &str = "name";
pub const SURNAME_KEY: &str = "surname";
pub const DEPARTMENT_KEY: &str = "department";
pub const DESCRIPTION_KEY: &str = "description";

const PROFILE_KEYS: [&str; 4] = [NAME_KEY, SURNAME_KEY, DEPARTMENT_KEY, DESCRIPTION_KEY];

/// The user's own profile, one raw string per storage key.
pub struct ProfileStore<S> {
    store: S,
}

impl<S: KeyValueStore> ProfileStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Absent keys read as empty strings.
    pub fn load(&self) -> Result<ProfileSnapshot> {
        let read = |key: &str| -> Result<String> {
            Ok(self.store.get(key)?.unwrap_or_default())
        };
        Ok(ProfileSnapshot {
            name: read(NAME_KEY)?,
            surname: read(SURNAME_KEY)?,
            department: read(DEPARTMENT_KEY)?,
            description: read(DESCRIPTION_KEY)?,
        })
    }

    pub fn save(&self, profile: &ProfileSnapshot) -> Result<()> {
        self.store.set(NAME_KEY, &profile.name)?;
        self.store.set(SURNAME_KEY, &profile.surname)?;
        self.store.set(DEPARTMENT_KEY, &profile.department)?;
        self.store.set(DESCRIPTION_KEY, &profile.description)?;
        tracing::info!("saved profile");
        Ok(())
    }

    pub fn clear(&self) -> Result<()> {
        for key in PROFILE_KEYS {
            self.store.remove(key)?;
        }
        tracing::info!("cleared profile");
        Ok(())
    }
}
