mod defaults;
mod model;

pub use defaults::{DEFAULT_EXIT_KEY, DEFAULT_LAUNCH_ON_STARTUP, DEFAULT_THEME};
pub use model::Settings;
