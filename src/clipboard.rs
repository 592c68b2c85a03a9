//! Clipboard operations over OSC 52
//!
//! Composes the capability gate, the sequence encoder, and the terminal
//! adapter into copy/clear operations. Nothing is cached between calls:
//! capability and nesting context are re-read on every operation.

use crate::capability::{SupportPolicy, should_attempt};
use crate::error::ClipboardResult;
use crate::multiplexer::Multiplexer;
use crate::osc52;
use crate::selection::Selection;
use crate::terminal::{Environment, ProcessEnv, StdoutTerminal, Terminal};

/// OSC 52 clipboard bound to a terminal and an environment source.
pub struct Osc52Clipboard<T, E = ProcessEnv> {
    terminal: T,
    env: E,
    policy: SupportPolicy,
}

impl Osc52Clipboard<StdoutTerminal> {
    /// Stdout-backed clipboard with the default (optimistic) policy.
    pub fn stdout() -> Self {
        Osc52Clipboard::new(StdoutTerminal::new(), ProcessEnv, SupportPolicy::default())
    }
}

impl<T: Terminal, E: Environment> Osc52Clipboard<T, E> {
    pub fn new(terminal: T, env: E, policy: SupportPolicy) -> Self {
        Osc52Clipboard {
            terminal,
            env,
            policy,
        }
    }

    /// Copy `text` to the system clipboard.
    ///
    /// Returns whether a sequence was written: `Ok(false)` means the
    /// capability gate declined and the terminal was left untouched.
    pub fn copy(&mut self, text: &str) -> ClipboardResult<bool> {
        self.copy_to(text, Selection::Clipboard)
    }

    /// Copy `text` to a specific selection.
    pub fn copy_to(&mut self, text: &str, selection: Selection) -> ClipboardResult<bool> {
        self.write_payload(text.as_bytes(), selection)
    }

    /// Clear the system clipboard (an empty payload clears).
    pub fn clear(&mut self) -> ClipboardResult<bool> {
        self.clear_to(Selection::Clipboard)
    }

    /// Clear a specific selection.
    pub fn clear_to(&mut self, selection: Selection) -> ClipboardResult<bool> {
        self.write_payload(&[], selection)
    }

    /// The capability gate's verdict for this terminal. Writes nothing.
    pub fn is_supported(&self) -> bool {
        should_attempt(
            self.terminal.is_interactive(),
            self.terminal.osc52_support(),
            self.policy,
        )
    }

    fn write_payload(&mut self, payload: &[u8], selection: Selection) -> ClipboardResult<bool> {
        if !self.is_supported() {
            #[cfg(debug_assertions)]
            log::debug!(
                "clipboard gate declined: interactive={} support={:?} policy={:?}",
                self.terminal.is_interactive(),
                self.terminal.osc52_support(),
                self.policy
            );
            return Ok(false);
        }

        let nesting = Multiplexer::from_snapshot(&self.env.snapshot());
        let sequence = osc52::encode(payload, selection, nesting);

        #[cfg(debug_assertions)]
        log::debug!(
            "writing {} byte OSC 52 sequence ({:?}, {:?})",
            sequence.len(),
            selection,
            nesting
        );

        self.terminal.write_sequence(&sequence)?;
        Ok(true)
    }
}

/// Copy to the system clipboard through stdout with the default policy.
pub fn copy_to_clipboard(text: &str) -> ClipboardResult<bool> {
    Osc52Clipboard::stdout().copy(text)
}

/// Clear the system clipboard through stdout with the default policy.
pub fn clear_clipboard() -> ClipboardResult<bool> {
    Osc52Clipboard::stdout().clear()
}

#[cfg(test)]
#[path = "clipboard_tests.rs"]
mod clipboard_tests;
