//! Errors that end a CLI run.

use std::io;
use std::path::PathBuf;

use swaggen_core::GenerateError;
use thiserror::Error;

/// Anything that makes the process exit with status 1.
#[derive(Debug, Error)]
pub enum CliError {
    /// A fatal problem in the document or the policy.
    #[error(transparent)]
    Generate(#[from] GenerateError),

    /// The input file could not be read.
    #[error("Cannot open Swagger JSON file from {} (error: {source})", .path.display())]
    ReadInput {
        /// Input path as given.
        path: PathBuf,
        /// I/O failure.
        #[source]
        source: io::Error,
    },

    /// The request for the input URL failed.
    #[error("Cannot download Swagger JSON from URL {url} (error: {source})")]
    Download {
        /// Input URL.
        url: String,
        /// Transport failure.
        #[source]
        source: reqwest::Error,
    },

    /// The input URL answered with a non-success status.
    #[error("Cannot download Swagger JSON from URL {url} (status: {status})")]
    DownloadStatus {
        /// Input URL.
        url: String,
        /// Received status.
        status: reqwest::StatusCode,
    },

    /// The `--policy` file could not be read.
    #[error("Cannot read policy file {}: {source}", .path.display())]
    ReadPolicy {
        /// Policy path as given.
        path: PathBuf,
        /// I/O failure.
        #[source]
        source: io::Error,
    },

    /// The output file or its directory could not be written.
    #[error("Cannot write output file {}: {source}", .path.display())]
    WriteOutput {
        /// Output path as given.
        path: PathBuf,
        /// I/O failure.
        #[source]
        source: io::Error,
    },

    /// `--build-date` is not `YYYY-MM-DD HH:MM:SS`.
    #[error("Invalid build date \"{value}\", expected YYYY-MM-DD HH:MM:SS: {source}")]
    BuildDate {
        /// The rejected text.
        value: String,
        /// Parse failure.
        #[source]
        source: chrono::ParseError,
    },

    /// The async runtime could not start.
    #[error("Failed to create tokio runtime: {0}")]
    Runtime(#[source] io::Error),
}
