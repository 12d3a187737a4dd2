pub mod config;
pub mod run;
pub mod runtime;
pub mod tracing;
pub mod wiring;

pub use config::{load_config, resolve_config};
pub use run::run_app;
pub use runtime::create_runtime;
pub use wiring::{resolve_app_paths, wire_dependencies, WiringError};
