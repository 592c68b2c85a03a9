//! Shared test utilities for oscyank
//!
//! This module provides in-memory doubles for the terminal and
//! environment seams, used across multiple test modules.

#[cfg(test)]
pub mod test_helpers {
    use std::io;

    use crate::capability::Osc52Support;
    use crate::multiplexer::EnvSnapshot;
    use crate::terminal::{Environment, Terminal};

    /// Terminal double that records everything written to it.
    pub struct MemoryTerminal {
        pub written: String,
        pub interactive: bool,
        pub support: Osc52Support,
        pub fail_writes: bool,
    }

    impl MemoryTerminal {
        /// An interactive terminal with full OSC 52 support.
        pub fn interactive() -> Self {
            MemoryTerminal {
                written: String::new(),
                interactive: true,
                support: Osc52Support::Supported,
                fail_writes: false,
            }
        }

        /// A redirected (non-tty) sink.
        pub fn piped() -> Self {
            MemoryTerminal {
                interactive: false,
                ..MemoryTerminal::interactive()
            }
        }

        /// An interactive terminal with the given support level.
        pub fn with_support(support: Osc52Support) -> Self {
            MemoryTerminal {
                support,
                ..MemoryTerminal::interactive()
            }
        }
    }

    impl Terminal for MemoryTerminal {
        fn write_sequence(&mut self, sequence: &str) -> io::Result<()> {
            if self.fail_writes {
                return Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"));
            }
            self.written.push_str(sequence);
            Ok(())
        }

        fn is_interactive(&self) -> bool {
            self.interactive
        }

        fn osc52_support(&self) -> Osc52Support {
            self.support
        }
    }

    /// Environment double returning a fixed snapshot.
    #[derive(Default)]
    pub struct FixedEnv {
        pub tmux: Option<String>,
        pub screen: Option<String>,
    }

    impl FixedEnv {
        pub fn bare() -> Self {
            FixedEnv::default()
        }

        pub fn tmux(value: &str) -> Self {
            FixedEnv {
                tmux: Some(value.to_string()),
                screen: None,
            }
        }

        pub fn screen(value: &str) -> Self {
            FixedEnv {
                tmux: None,
                screen: Some(value.to_string()),
            }
        }
    }

    impl Environment for FixedEnv {
        fn snapshot(&self) -> EnvSnapshot {
            EnvSnapshot {
                tmux: self.tmux.clone(),
                screen: self.screen.clone(),
            }
        }
    }
}
