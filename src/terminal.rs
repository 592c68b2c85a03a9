//! Terminal and environment adapters
//!
//! Clipboard operations never touch process globals directly; they go
//! through these two seams, so tests substitute in-memory doubles instead
//! of mutating the real environment.

use std::env;
use std::io::{self, Write};

use crossterm::tty::IsTty;

use crate::capability::{self, Osc52Support};
use crate::multiplexer::EnvSnapshot;

/// Byte sink plus capability report for the destination terminal.
pub trait Terminal {
    /// Hand the sequence to the terminal. Fire-and-forget: a successful
    /// write is the only acknowledgement OSC 52 offers.
    fn write_sequence(&mut self, sequence: &str) -> io::Result<()>;

    /// Whether the sink is attached to an interactive terminal.
    fn is_interactive(&self) -> bool;

    /// What the terminal is believed to do with OSC 52.
    fn osc52_support(&self) -> Osc52Support;
}

/// Source of the multiplexer-related environment state.
pub trait Environment {
    fn snapshot(&self) -> EnvSnapshot;
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl Environment for ProcessEnv {
    fn snapshot(&self) -> EnvSnapshot {
        EnvSnapshot::from_env()
    }
}

/// Production terminal writing to stdout.
#[derive(Debug, Clone, Copy)]
pub struct StdoutTerminal {
    support: Osc52Support,
    force: bool,
}

impl StdoutTerminal {
    /// Stdout terminal with OSC 52 support detected from the environment.
    pub fn new() -> Self {
        let term = env::var("TERM").unwrap_or_default();
        let term_program = env::var("TERM_PROGRAM").unwrap_or_default();

        StdoutTerminal {
            support: capability::detect_support(&term, &term_program),
            force: false,
        }
    }

    /// Report the terminal as interactive and OSC 52 capable no matter
    /// what detection says. Lets scripts capture the raw sequence.
    pub fn forced() -> Self {
        StdoutTerminal {
            support: Osc52Support::Supported,
            force: true,
        }
    }

    /// Override the detected support level.
    pub fn with_support(support: Osc52Support) -> Self {
        StdoutTerminal {
            support,
            force: false,
        }
    }
}

impl Default for StdoutTerminal {
    fn default() -> Self {
        StdoutTerminal::new()
    }
}

impl Terminal for StdoutTerminal {
    fn write_sequence(&mut self, sequence: &str) -> io::Result<()> {
        let mut stdout = io::stdout();
        stdout.write_all(sequence.as_bytes())?;
        stdout.flush()
    }

    fn is_interactive(&self) -> bool {
        self.force || io::stdout().is_tty()
    }

    fn osc52_support(&self) -> Osc52Support {
        self.support
    }
}
