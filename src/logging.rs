use tracing_subscriber::{fmt, prelude::*, EnvFilter};


/// Environment variable consulted after `RUST_LOG`
pub const LOG_ENV: &str = "FREIGHTPATH_LOG";


/// Install a stderr subscriber for the binary
/// `RUST_LOG` or `FREIGHTPATH_LOG` override the level picked from the flags
pub fn init_tracing(verbose: bool, log_level: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let level = match (verbose, log_level) {
        (_, Some(level)) => level,
        (true, None) => "debug",
        (false, None) => "warn",
    };

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_from_env(LOG_ENV))
        .unwrap_or_else(|_| EnvFilter::new(directive(level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr)
                .with_ansi(false),
        )
        .try_init()?;

    Ok(())
}

/// Bare levels apply to this crate only, full directives pass through
fn directive(level: &str) -> String {
    if level.contains('=') {
        level.to_string()
    } else {
        format!("freightpath={level}")
    }
}
