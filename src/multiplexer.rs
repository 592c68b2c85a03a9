//! Terminal multiplexer detection
//!
//! tmux and GNU screen sit between the application and the terminal and
//! drop escape sequences they do not recognize unless those sequences are
//! wrapped for passthrough. This module derives the nesting context from
//! the session-identifier environment variables.

use std::env;

/// Multiplexer-related environment values captured at call time.
///
/// Detection never reads the process environment directly; production
/// code captures a snapshot with [`EnvSnapshot::from_env`] and tests
/// construct one by hand.
#[derive(Debug, Clone, Default)]
pub struct EnvSnapshot {
    /// `$TMUX`: socket path, server pid, and session id, comma separated.
    pub tmux: Option<String>,
    /// `$STY`: GNU screen session name.
    pub screen: Option<String>,
}

impl EnvSnapshot {
    /// Capture the current process environment.
    ///
    /// Non-unicode values read as absent, so a mangled variable degrades
    /// to "no multiplexer" instead of failing.
    pub fn from_env() -> Self {
        EnvSnapshot {
            tmux: env::var("TMUX").ok(),
            screen: env::var("STY").ok(),
        }
    }
}

/// Multiplexer layering between the application and the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Multiplexer {
    /// Talking to the terminal directly.
    None,
    /// Inside tmux; the depth counts nested sessions (1 = one session).
    Tmux(u32),
    /// Inside GNU screen. Screen-in-screen is not modeled.
    Screen,
}

impl Multiplexer {
    /// Derive the nesting context from an environment snapshot.
    ///
    /// When both identifiers are present tmux wins: tmux set the
    /// environment of the innermost layer.
    pub fn from_snapshot(snapshot: &EnvSnapshot) -> Self {
        if let Some(tmux) = &snapshot.tmux {
            return Multiplexer::Tmux(tmux_depth(tmux));
        }

        if snapshot.screen.is_some() {
            return Multiplexer::Screen;
        }

        Multiplexer::None
    }

    /// Detect from the live process environment.
    pub fn detect() -> Self {
        Multiplexer::from_snapshot(&EnvSnapshot::from_env())
    }
}

/// Nesting depth from the session identifier: one level per separator,
/// plus the session itself. The field contents are never parsed, so an
/// arbitrary value still yields a usable depth.
fn tmux_depth(value: &str) -> u32 {
    value.matches(',').count() as u32 + 1
}
