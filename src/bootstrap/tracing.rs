//! Tracing configuration for BukuGo
//!
//! Installs the global `tracing-subscriber` registry. Log output goes to
//! stderr so stdout carries only the rendered catalog.

use std::io;

use tracing_subscriber::{fmt, prelude::*, registry, EnvFilter};

/// Check if running in development environment
fn is_development() -> bool {
    cfg!(debug_assertions)
}

/// Build the default filter directives for tracing
///
/// - **Development**: debug level for workspace crates
/// - **Production**: info level everywhere
/// - HTTP client internals stay at warn
fn build_filter_directives(is_dev: bool) -> Vec<String> {
    let crate_level = if is_dev { "debug" } else { "info" };
    let mut directives = vec!["info".to_string()];
    for target in ["bukugo", "bukugo_lib", "bg_app", "bg_infra"] {
        directives.push(format!("{target}={crate_level}"));
    }
    directives.push("hyper=warn".to_string());
    directives.push("reqwest=warn".to_string());
    directives
}

/// Initialize the tracing subscriber.
///
/// `RUST_LOG` overrides the default directives when set.
///
/// ## Errors
///
/// Returns `Err` if a subscriber is already registered.
pub fn init_tracing_subscriber() -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(build_filter_directives(is_development()).join(",")));

    // "2025-01-15 10:30:45.123 INFO [file.rs:42] [target] message"
    let stderr_layer = fmt::layer()
        .with_timer(fmt::time::ChronoUtc::new(
            "%Y-%m-%d %H:%M:%S%.3f".to_string(),
        ))
        .with_level(true)
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .with_ansi(cfg!(not(test)))
        .with_writer(io::stderr);

    registry().with(env_filter).with(stderr_layer).try_init()?;

    Ok(())
}
