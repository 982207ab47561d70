use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "SWAGGEN_LOG";

const LOG_TARGETS: [&str; 2] = ["swaggen_core", "swaggen_cli"];

/// Install the stderr subscriber.
///
/// `--debug` forces `debug`; otherwise SWAGGEN_LOG is either a plain level
/// ("trace", "debug", "info", "warn", "error") applied to both crates, or a
/// full tracing filter spec like "swaggen_core=debug,reqwest=warn".
pub fn init_tracing(debug: bool) {
    let filter = filter_spec(debug, std::env::var(LOG_ENV).ok().as_deref());

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_file(true)
        .with_filter(EnvFilter::new(filter));

    if tracing_subscriber::registry()
        .with(fmt_layer)
        .try_init()
        .is_err()
    {
        eprintln!("Warning: tracing subscriber already initialized");
    }
}

/// Filter directive for the given `--debug` flag and SWAGGEN_LOG value.
pub(crate) fn filter_spec(debug: bool, env_value: Option<&str>) -> String {
    match env_value {
        _ if debug => targets("debug"),
        Some(level) if is_plain_level(level) => targets(&level.to_ascii_lowercase()),
        Some(spec) if !spec.trim().is_empty() => spec.to_string(),
        _ => targets("info"),
    }
}

fn targets(level: &str) -> String {
    LOG_TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

fn is_plain_level(s: &str) -> bool {
    matches!(
        s.to_ascii_lowercase().as_str(),
        "trace" | "debug" | "info" | "warn" | "error"
    )
}
