//! Snapshot store backends.

pub mod in_memory;
pub mod json_file;
#[cfg(feature = "storage-rocksdb")]
pub mod rocksdb;

/// Storage key for the serialized profile.
pub const KEY_PROFILE: &str = "profile";
/// Storage key for the serialized job list.
pub const KEY_JOBS: &str = "jobs";
