//! OSC 52 capability gating
//!
//! Decides whether emitting an OSC 52 sequence is worth attempting.
//! Detection is heuristic and fail-safe: a terminal is only reported as
//! supporting or rejecting OSC 52 when its identity says so, and the
//! unknown case is left to an explicit policy.

use serde::Deserialize;

/// What the destination terminal is believed to do with OSC 52.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Osc52Support {
    /// The terminal is known to set the clipboard from OSC 52.
    Supported,
    /// The terminal is known to ignore or reject OSC 52.
    Unsupported,
    /// No capability information is available.
    #[default]
    Unknown,
}

/// How to treat a terminal whose OSC 52 support is unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SupportPolicy {
    /// Attempt the write; terminals without OSC 52 ignore the sequence
    /// with no visible side effect.
    #[default]
    Optimistic,
    /// Skip the write unless support has been positively detected.
    Pessimistic,
}

/// Whether a copy/clear attempt should proceed.
///
/// Interactivity is checked first: control sequences written to a
/// redirected stream corrupt output meant for pipes.
pub fn should_attempt(interactive: bool, support: Osc52Support, policy: SupportPolicy) -> bool {
    if !interactive {
        return false;
    }

    match support {
        Osc52Support::Supported => true,
        Osc52Support::Unsupported => false,
        Osc52Support::Unknown => policy == SupportPolicy::Optimistic,
    }
}

/// Terminal programs known to implement OSC 52.
const OSC52_TERMINAL_PROGRAMS: &[&str] = &[
    "iTerm.app",
    "WezTerm",
    "Alacritty",
    "Ghostty",
    "kitty",
    "Rio",
    "Contour",
    "vscode",
];

/// Best-effort OSC 52 support detection from `TERM` / `TERM_PROGRAM`.
///
/// Anything not positively identified stays [`Osc52Support::Unknown`];
/// inside a multiplexer `TERM` reports the multiplexer, not the outer
/// terminal, so unknown is the common answer there.
pub fn detect_support(term: &str, term_program: &str) -> Osc52Support {
    if term == "dumb" {
        return Osc52Support::Unsupported;
    }

    if OSC52_TERMINAL_PROGRAMS.contains(&term_program) {
        return Osc52Support::Supported;
    }

    match term {
        "xterm-kitty" | "foot" | "alacritty" | "xterm-ghostty" => Osc52Support::Supported,
        _ => Osc52Support::Unknown,
    }
}

#[cfg(test)]
#[path = "capability_tests.rs"]
mod capability_tests;
