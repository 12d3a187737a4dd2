pub mod clipboard;
pub mod load_store;
pub mod settings;

pub use clipboard::{IngestClipboardSample, IngestOutcome, PasteItem};
pub use load_store::LoadStore;
pub use settings::ApplyAutostartSetting;
