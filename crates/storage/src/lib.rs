#![forbid(unsafe_code)]

pub mod repository;
pub mod snapshot;
pub mod sqlite;

pub use repository::{InMemoryRepository, KeyValueRepository, Storage, StorageError};
pub use snapshot::{PROGRESS_STORAGE_KEY, decode_state, encode_state};
