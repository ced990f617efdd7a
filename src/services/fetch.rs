// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Data source resolution - remote URL or local file.

use std::path::Path;

/// Errors from reading a data source.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),
}

/// Fetch the raw text of a data source.
///
/// Sources starting with `http://` or `https://` are fetched over the
/// network; anything else is treated as a filesystem path.
pub async fn fetch_text(source: &str) -> Result<String, FetchError> {
    if source.starts_with("http://") || source.starts_with("https://") {
        let response = reqwest::get(source).await?.error_for_status()?;
        Ok(response.text().await?)
    } else {
        Ok(tokio::fs::read_to_string(Path::new(source)).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let result = fetch_text("does/not/exist.geojson").await;

        assert!(matches!(result, Err(FetchError::Io(_))));
    }
}
