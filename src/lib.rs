//! oscyank library - OSC 52 terminal clipboard
//!
//! Sets the system clipboard from terminal applications by writing OSC 52
//! escape sequences, wrapped for tmux/screen passthrough, so copying works
//! over SSH and inside nested multiplexers where only the outer terminal
//! emulator has clipboard access.

pub mod capability;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod multiplexer;
pub mod osc52;
pub mod selection;
pub mod terminal;

#[cfg(test)]
pub mod test_utils;

// Re-export commonly used types for convenience
pub use capability::{Osc52Support, SupportPolicy};
pub use clipboard::{Osc52Clipboard, clear_clipboard, copy_to_clipboard};
pub use error::{ClipboardError, ClipboardResult};
pub use multiplexer::{EnvSnapshot, Multiplexer};
pub use selection::Selection;
pub use terminal::{Environment, ProcessEnv, StdoutTerminal, Terminal};
