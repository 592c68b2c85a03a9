//! OSC 52 escape sequence encoding
//!
//! Builds the escape sequence that asks the terminal emulator to set a
//! clipboard selection, wrapped for however many multiplexer layers sit
//! between the application and the terminal.

use base64::{Engine as _, engine::general_purpose::STANDARD};

use crate::multiplexer::Multiplexer;
use crate::selection::Selection;

/// Build the complete, passthrough-wrapped sequence for a payload.
///
/// The payload travels as base64 and is never inspected, so newlines,
/// NUL bytes, and non-UTF8 content all survive. An empty payload clears
/// the selection.
pub fn encode(payload: &[u8], selection: Selection, multiplexer: Multiplexer) -> String {
    let base = encode_base(payload, selection);

    match multiplexer {
        Multiplexer::None => base,
        Multiplexer::Screen => wrap_screen(&base),
        Multiplexer::Tmux(depth) => {
            let mut sequence = base;
            for _ in 0..depth {
                sequence = wrap_tmux(&sequence);
            }
            sequence
        }
    }
}

/// The unwrapped sequence.
///
/// Format: `\x1b]52;{code};{base64}\x1b\\`
///
/// The sequence consists of:
/// - `\x1b]52;` - OSC 52 introducer
/// - `{code};` - selection code (c = clipboard, p = primary, ...)
/// - `{base64}` - base64-encoded content
/// - `\x1b\\` - string terminator (ST)
///
/// ST is used instead of BEL because some terminals mishandle a
/// BEL-terminated OSC once it is wrapped inside a passthrough frame.
pub fn encode_base(payload: &[u8], selection: Selection) -> String {
    let encoded = STANDARD.encode(payload);
    format!("\x1b]52;{};{}\x1b\\", selection.code(), encoded)
}

/// Double every ESC so the sequence survives one layer of DCS
/// passthrough without terminating the frame early.
fn double_escapes(sequence: &str) -> String {
    let mut doubled = String::with_capacity(sequence.len() * 2);
    for c in sequence.chars() {
        doubled.push(c);
        if c == '\x1b' {
            doubled.push('\x1b');
        }
    }
    doubled
}

/// One layer of tmux passthrough: `\x1bPtmux;{doubled}\x1b\\`.
///
/// Each tmux only unwraps one frame before forwarding, so this is applied
/// once per nesting level and the escape doubling compounds with depth.
fn wrap_tmux(sequence: &str) -> String {
    format!("\x1bPtmux;{}\x1b\\", double_escapes(sequence))
}

/// GNU screen DCS passthrough: `\x1bP{doubled}\x1b\\`.
fn wrap_screen(sequence: &str) -> String {
    format!("\x1bP{}\x1b\\", double_escapes(sequence))
}

#[cfg(test)]
#[path = "osc52_tests.rs"]
mod osc52_tests;
