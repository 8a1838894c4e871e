pub mod app_config;
pub mod json_file;
pub mod keys;
pub mod memory;
pub mod store;

pub use app_config::AppConfig;
pub use json_file::JsonFileStore;
pub use memory::MemoryStore;
pub use store::{BlobStore, StoreError};
