//! Clipboard selection targets for OSC 52
//!
//! The selection parameter in an OSC 52 sequence names which
//! clipboard/selection buffer the terminal operates on.

use clap::ValueEnum;
use serde::Deserialize;

/// Which clipboard/selection buffer an OSC 52 sequence targets.
///
/// Most terminals only honor `c` (clipboard) and `p` (primary); the other
/// codes are accepted on the wire for compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Selection {
    /// System clipboard ('c')
    #[default]
    Clipboard,
    /// Primary selection ('p') - X11 style mouse selection
    Primary,
    /// Secondary selection ('s')
    Secondary,
    /// Query code ('q'); this crate only writes, so the variant exists for
    /// protocol completeness and is not exposed on the CLI or in config.
    #[value(skip)]
    #[serde(skip)]
    Query,
}

impl Selection {
    /// Single-character protocol code used in the escape sequence.
    pub fn code(self) -> char {
        match self {
            Selection::Clipboard => 'c',
            Selection::Primary => 'p',
            Selection::Secondary => 's',
            Selection::Query => 'q',
        }
    }
}
