//! Tracing subscriber setup for hosts that want the crate's default logging
//!
//! Entirely optional: the engine itself only emits `tracing` events and
//! works under whatever subscriber the host installs.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize a stderr tracing subscriber filtered to this crate
///
/// The `SIMILAR_POSTS_LOG` environment variable overrides `level`.
/// Fails if a global subscriber is already installed.
pub fn init_tracing(level: &str) -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_env("SIMILAR_POSTS_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if level.contains('=') {
            level.to_string()
        } else {
            format!("similar_posts={}", level)
        })
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_ansi(false))
        .try_init()?;

    Ok(())
}
