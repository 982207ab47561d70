//! `swaggen` command-line entry point.

fn main() {
    std::process::exit(swaggen_cli::run_cli(std::env::args().collect()));
}
