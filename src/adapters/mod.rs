pub mod stdio_ui;

pub use stdio_ui::{StdioUiPort, StdoutUiPort};
