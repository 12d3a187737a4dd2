//! # rv-app
//!
//! Application layer: use cases and the store processor that serializes every
//! mutation of the clipboard store.

pub mod app_paths;
pub mod deps;
pub mod processor;
pub mod usecases;

pub use app_paths::AppPaths;
pub use deps::AppDeps;
pub use processor::{spawn_store_processor, ProcessorError, ProcessorHandle, ProcessorOptions};
