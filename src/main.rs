use clap::Parser;
use color_eyre::Result;
use color_eyre::eyre::eyre;
use std::io::Read;
use std::path::{Path, PathBuf};

mod capability;
mod clipboard;
mod config;
mod error;
mod multiplexer;
mod osc52;
mod selection;
mod terminal;
#[cfg(test)]
mod test_utils;

use capability::SupportPolicy;
use clipboard::Osc52Clipboard;
use selection::Selection;
use terminal::{ProcessEnv, StdoutTerminal};

/// Terminal clipboard tool
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Copy to the system clipboard from anywhere via OSC 52 escape sequences"
)]
struct Args {
    /// Input file (if not provided, reads from stdin)
    input: Option<PathBuf>,

    /// Clear the selection instead of copying
    #[arg(long)]
    clear: bool,

    /// Selection to operate on
    #[arg(long, short, value_enum)]
    selection: Option<Selection>,

    /// Attempt the write even when OSC 52 support is undetected
    #[arg(long, conflicts_with = "pessimistic")]
    optimistic: bool,

    /// Skip the write unless OSC 52 support is positively detected
    #[arg(long)]
    pessimistic: bool,

    /// Bypass capability checks and write the sequence unconditionally
    #[arg(long)]
    force: bool,
}

fn main() -> Result<()> {
    // Writes to /tmp/oscyank-debug.log at DEBUG level
    #[cfg(debug_assertions)]
    {
        use std::io::Write;

        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/oscyank-debug.log")
            .expect("Failed to open /tmp/oscyank-debug.log");

        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Debug)
            .target(env_logger::Target::Pipe(Box::new(log_file)))
            .format(|buf, record| {
                use std::time::SystemTime;
                let datetime: chrono::DateTime<chrono::Local> = SystemTime::now().into();
                writeln!(
                    buf,
                    "[{}] [{}] {}",
                    datetime.format("%Y-%m-%dT%H:%M:%S%.3f"),
                    record.level(),
                    record.args()
                )
            })
            .init();

        log::debug!("=== OSCYANK DEBUG SESSION STARTED ===");
    }

    color_eyre::install()?;

    // Load config early so flag handling can layer on top of it
    let config_result = config::load_config();
    if let Some(warning) = &config_result.warning {
        eprintln!("warning: {warning}");
    }

    let args = Args::parse();

    let policy = if args.optimistic {
        SupportPolicy::Optimistic
    } else if args.pessimistic {
        SupportPolicy::Pessimistic
    } else {
        config_result.config.clipboard.policy
    };

    let selection = args
        .selection
        .unwrap_or(config_result.config.clipboard.selection);

    let terminal = if args.force {
        StdoutTerminal::forced()
    } else {
        StdoutTerminal::new()
    };
    let mut clipboard = Osc52Clipboard::new(terminal, ProcessEnv, policy);

    let written = if args.clear {
        clipboard.clear_to(selection)?
    } else {
        let text = read_input(args.input.as_deref())?;
        clipboard.copy_to(&text, selection)?
    };

    #[cfg(debug_assertions)]
    log::debug!("=== OSCYANK DEBUG SESSION ENDED (written={written}) ===");

    if !written {
        return Err(eyre!(
            "clipboard unavailable: stdout is not an interactive terminal or OSC 52 is \
             unsupported (use --force to write the sequence anyway)"
        ));
    }

    Ok(())
}

/// Read the payload from a file argument or stdin
fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}
