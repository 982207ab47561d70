//! Command-line arguments.

use clap::Parser;
use std::path::PathBuf;

const DEFAULT_CLASS_NAME: &str = "ApiClient";
const DEFAULT_INTERFACE_PREFIX: &str = "I";

/// Arguments of one generator run.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "swaggen",
    version,
    about = "Generate a typed TypeScript API client from a Swagger (OpenAPI v2) document"
)]
pub struct Cli {
    /// Swagger JSON document: an http(s) URL or a local file path
    #[arg(short = 'i', long = "input", value_name = "URL_OR_PATH")]
    pub input: String,
    /// TypeScript file to write
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: PathBuf,
    /// Name of the generated abstract client class
    #[arg(short = 'c', long = "class-name", default_value = DEFAULT_CLASS_NAME)]
    pub class_name: String,
    /// Prefix for all generated interface names (may be empty)
    #[arg(
        short = 'p',
        long = "prefix-interfaces",
        default_value = DEFAULT_INTERFACE_PREFIX
    )]
    pub prefix_interfaces: String,
    /// Verbose logging
    #[arg(short = 'd', long = "debug")]
    pub debug: bool,
    /// TOML policy file (ignored definitions, method overrides, ignored tags, ...)
    #[arg(long = "policy", value_name = "FILE")]
    pub policy: Option<PathBuf>,
    /// Timestamp written into the banner. Defaults to the current local time
    #[arg(
        long = "build-date",
        env = "SWAGGEN_BUILD_DATE",
        value_name = "YYYY-MM-DD HH:MM:SS"
    )]
    pub build_date: Option<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["swaggen", "-i", "swagger.json", "-o", "out.ts"]).unwrap();
        assert_eq!(cli.input, "swagger.json");
        assert_eq!(cli.output, PathBuf::from("out.ts"));
        assert_eq!(cli.class_name, "ApiClient");
        assert_eq!(cli.prefix_interfaces, "I");
        assert!(!cli.debug);
        assert!(cli.policy.is_none());
    }

    #[test]
    fn test_long_flags_and_empty_prefix() {
        let cli = Cli::try_parse_from([
            "swaggen",
            "--input",
            "http://127.0.0.1:9000/swagger.json",
            "--output",
            "api.ts",
            "--class-name",
            "TyrionAPI",
            "--prefix-interfaces",
            "",
            "--debug",
            "--policy",
            "config/tyrion.toml",
            "--build-date",
            "2024-01-02 03:04:05",
        ])
        .unwrap();
        assert_eq!(cli.class_name, "TyrionAPI");
        assert_eq!(cli.prefix_interfaces, "");
        assert!(cli.debug);
        assert_eq!(cli.policy, Some(PathBuf::from("config/tyrion.toml")));
        assert_eq!(cli.build_date.as_deref(), Some("2024-01-02 03:04:05"));
    }

    #[test]
    fn test_input_and_output_are_required() {
        assert!(Cli::try_parse_from(["swaggen", "-o", "out.ts"]).is_err());
        assert!(Cli::try_parse_from(["swaggen", "-i", "swagger.json"]).is_err());
    }
}
