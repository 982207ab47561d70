use std::path::Path;
use std::time::Instant;

use chrono::NaiveDateTime;
use console::style;
use swaggen_core::{GeneratedClient, GeneratorConfig, Policy, generate};
use tracing::{debug, info};

use crate::args::Cli;
use crate::error::CliError;
use crate::output::write_output;
use crate::source::load_document;

/// Load, generate and write. Nothing is written unless generation succeeds.
pub async fn run(args: Cli) -> Result<(), CliError> {
    let start_time = Instant::now();
    let config = build_config(&args)?;

    let document = load_document(&args.input).await?;
    debug!(bytes = document.len(), "document loaded");

    let client = generate(&document, &config)?;

    info!(path = %args.output.display(), "writing output file");
    write_output(&args.output, &client.code)?;

    print_summary(&client, &args.output, start_time);
    Ok(())
}

/// Assemble the generator configuration from the command line.
pub fn build_config(args: &Cli) -> Result<GeneratorConfig, CliError> {
    let policy = match &args.policy {
        Some(path) => load_policy(path)?,
        None => Policy::default(),
    };

    let build_date = match &args.build_date {
        Some(value) => {
            GeneratorConfig::parse_build_date(value).map_err(|source| CliError::BuildDate {
                value: value.clone(),
                source,
            })?
        }
        None => now(),
    };

    Ok(
        GeneratorConfig::new(args.class_name.as_str(), args.prefix_interfaces.as_str())
            .with_build_date(build_date)
            .with_policy(policy),
    )
}

fn load_policy(path: &Path) -> Result<Policy, CliError> {
    debug!(path = %path.display(), "loading policy");
    let text = std::fs::read_to_string(path).map_err(|source| CliError::ReadPolicy {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Policy::from_toml_str(&text)?)
}

fn now() -> NaiveDateTime {
    chrono::Local::now().naive_local()
}

fn print_summary(client: &GeneratedClient, output: &Path, start_time: Instant) {
    println!(
        "{} {} ({} interfaces, {} methods, {} skipped) in {}",
        style("✓").green(),
        output.display(),
        client.interfaces,
        client.methods,
        client.skipped.len(),
        format_elapsed_ms(start_time)
    );

    let count = client.diagnostics.count();
    if count > 0 {
        println!(
            "{}",
            style("NOT CRITICAL BUGS in Swagger annotations - please fix them").red()
        );
        println!("{}", style(format!("Number of bugs: {count}")).red());
        for diagnostic in client.diagnostics.iter() {
            println!("   {} {diagnostic}", style("⚠").yellow());
        }
    }
}

fn format_elapsed_ms(start: Instant) -> String {
    let elapsed = start.elapsed();
    if elapsed.as_secs() == 0 {
        return format!("{}ms", elapsed.as_millis());
    }
    let seconds = elapsed.as_secs();
    let remaining_ms = elapsed.subsec_millis();
    format!("{seconds}s {remaining_ms}ms")
}
