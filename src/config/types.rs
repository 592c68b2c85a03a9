// Configuration type definitions

use serde::Deserialize;

use crate::capability::SupportPolicy;
use crate::selection::Selection;

/// Clipboard configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct ClipboardConfig {
    #[serde(default)]
    pub policy: SupportPolicy,
    #[serde(default)]
    pub selection: Selection,
}

impl Default for ClipboardConfig {
    fn default() -> Self {
        ClipboardConfig {
            policy: SupportPolicy::Optimistic,
            selection: Selection::Clipboard,
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub clipboard: ClipboardConfig,
}
