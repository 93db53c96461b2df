pub mod in_memory;
pub mod lock_table;
#[cfg(feature = "storage-rocksdb")]
pub mod rocksdb;
