pub mod directory;
pub mod exchange;
pub mod profile;
pub mod transfer;
pub mod util;

// Re-export commonly used types for convenience
pub use directory::{Directory, COLLECTION_KEY};
pub use exchange::{ExchangeChannel, Prefill};
pub use profile::ProfileStore;
pub use transfer::{export_snapshot, import_into, import_snapshot, ExportedFile, FileSink};
