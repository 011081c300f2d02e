#![forbid(unsafe_code)]

pub mod identity;
pub mod repository;
pub mod sqlite;

pub use identity::{IDENTITY_KEY, IdentityStore};
pub use repository::{
    CourseRepository, InMemoryRepository, KeyValueStore, Storage, StorageError,
};
