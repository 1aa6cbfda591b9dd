pub mod codec;
mod store;
mod writer;

pub use codec::{decode_many, decode_one, encode_many, encode_many_compact, encode_one};
pub use store::{FileKvStore, KeyValueStore, MemoryKvStore};
pub use writer::atomic_write;
