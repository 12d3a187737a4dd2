use anyhow::{anyhow, Context, Result};
use enigo::{Direction, Enigo, Key, Keyboard, Settings};
use rv_core::ports::{KeyModifier, KeystrokePort};
use tracing::debug;

/// Synthetic keystrokes through `enigo`.
///
/// A connection is opened per call; pastes are rare and the handle is not
/// `Send` on every platform.
#[derive(Debug, Default, Clone)]
pub struct EnigoKeystroke;

impl EnigoKeystroke {
    pub fn new() -> Self {
        Self
    }
}

fn modifier_key(modifier: KeyModifier) -> Key {
    match modifier {
        KeyModifier::Command => Key::Meta,
        KeyModifier::Control => Key::Control,
    }
}

impl KeystrokePort for EnigoKeystroke {
    fn send_keystroke(&self, key: char, modifier: KeyModifier) -> Result<()> {
        let mut enigo = Enigo::new(&Settings::default())
            .map_err(|e| anyhow!("{e:?}"))
            .context("open input connection failed")?;
        let modifier = modifier_key(modifier);

        enigo
            .key(modifier, Direction::Press)
            .map_err(|e| anyhow!("{e:?}"))?;
        let clicked = enigo.key(Key::Unicode(key), Direction::Click);
        // Release even if the click failed so the modifier is never left held.
        enigo
            .key(modifier, Direction::Release)
            .map_err(|e| anyhow!("{e:?}"))?;
        clicked.map_err(|e| anyhow!("{e:?}"))?;

        debug!(key = %key, ?modifier, "keystroke sent");
        Ok(())
    }
}
