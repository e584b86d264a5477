//! Installs the global `tracing` subscriber. `RUST_LOG` overrides the
//! default `info` level; `-q/--quiet` drops it to `warn` so a scripted
//! run's stdout stays limited to what it writes itself.

use tracing_subscriber::EnvFilter;

pub fn init(quiet: bool) {
    let default_level = if quiet { "warn" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
