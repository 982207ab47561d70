//! Command-line driver for the Swagger to TypeScript generator.
//!
//! The binary calls [`run_cli`]; it is the only place an error becomes a
//! process exit code.

use clap::Parser;

mod args;
mod error;
mod generate;
mod logging;
mod output;
mod source;

pub use args::Cli;
pub use error::CliError;
pub use generate::build_config;
pub use logging::{LOG_ENV, init_tracing};
pub use output::write_output;
pub use source::{is_remote, load_document};

/// Run the generator with process-style arguments (program name first).
///
/// Returns the exit code: 0 on success, even when diagnostics were counted.
pub fn run_cli(args: Vec<String>) -> i32 {
    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(err) => {
            eprintln!("{}", CliError::Runtime(err));
            return 1;
        }
    };

    runtime.block_on(run_cli_async(args))
}

/// [`run_cli`] on an already running runtime.
pub async fn run_cli_async(args: Vec<String>) -> i32 {
    match Cli::try_parse_from(args) {
        Ok(cli) => {
            init_tracing(cli.debug);
            match generate::run(cli).await {
                Ok(()) => 0,
                Err(err) => {
                    eprintln!("{}", console::style(&err).red());
                    1
                }
            }
        }
        Err(e) => {
            let code = e.exit_code();
            let _ = e.print();
            code
        }
    }
}
