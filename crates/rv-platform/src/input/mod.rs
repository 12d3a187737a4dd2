mod keystroke;

pub use keystroke::EnigoKeystroke;
