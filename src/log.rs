// src/log.rs
// Subscriber setup for the binary. The library itself only emits `tracing`
// events and never installs a subscriber.

use tracing_subscriber::EnvFilter;

/// stderr logger; `RUST_LOG` overrides the default level.
pub fn init(verbose: bool) {
    let default = if verbose { "namnsdag=debug" } else { "namnsdag=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    // A second init (e.g. in tests) is harmless.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
