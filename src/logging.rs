//! Logger setup for the binary.
//!
//! Output goes to stderr. While the game owns the terminal only warnings and
//! errors are worth seeing there, so the default level is `warn`.

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Installs the global logger. `RUST_LOG` takes precedence over `verbose`.
///
/// Returns `false` when a logger was already installed; the existing one is
/// kept.
pub fn init(verbose: bool) -> bool {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    Builder::from_env(Env::default().default_filter_or(level.to_string()))
        .try_init()
        .is_ok()
}
