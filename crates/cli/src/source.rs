//! Loading the Swagger document from a URL or a file.

use std::path::PathBuf;

use tracing::{debug, info};

use crate::error::CliError;

/// Inputs starting with `http` (any case) are downloaded, everything else is
/// read from disk.
pub fn is_remote(input: &str) -> bool {
    input.to_ascii_lowercase().starts_with("http")
}

/// Read the whole document text.
pub async fn load_document(input: &str) -> Result<String, CliError> {
    if is_remote(input) {
        download(input).await
    } else {
        info!(path = %input, "opening Swagger file");
        std::fs::read_to_string(input).map_err(|source| CliError::ReadInput {
            path: PathBuf::from(input),
            source,
        })
    }
}

async fn download(url: &str) -> Result<String, CliError> {
    info!(%url, "downloading Swagger document");

    let client = reqwest::Client::builder()
        .user_agent(concat!("swaggen/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|source| CliError::Download {
            url: url.to_string(),
            source,
        })?;

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|source| CliError::Download {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    debug!(%url, %status, "received response");
    if !status.is_success() {
        return Err(CliError::DownloadStatus {
            url: url.to_string(),
            status,
        });
    }

    response.text().await.map_err(|source| CliError::Download {
        url: url.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_remote() {
        assert!(is_remote("http://127.0.0.1:9000/swagger.json"));
        assert!(is_remote("HTTPS://example.com/swagger.json"));
        assert!(!is_remote("./swagger.json"));
        assert!(!is_remote("/tmp/http/swagger.json"));
    }
}
