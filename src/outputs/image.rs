//! Image download.

use crate::error::MonitorError;
use crate::utils::{extension_of, image_file_path};
use futures::StreamExt;
use reqwest::Client;
use std::path::{Path, PathBuf};
use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use tracing::{info, instrument};
use url::Url;

/// Download `link` to `<output_dir>/image_<keyword>.<ext>`.
///
/// The extension is the link's last `.` segment with its case preserved. The
/// response body is streamed to disk whatever the status code; an existing
/// file of the same name is overwritten.
///
/// # Arguments
///
/// * `http` - Client used for the download
/// * `output_dir` - Directory receiving the file
/// * `keyword` - Search keyword, part of the file name
/// * `link` - Absolute URL of a png or jpg image
///
/// # Returns
///
/// The path of the written image.
///
/// # Errors
///
/// - [`MonitorError::InvalidUrl`] if `link` does not parse
/// - [`MonitorError::Transport`] if the request or body stream fails
/// - [`MonitorError::Io`] if the file cannot be written
#[instrument(level = "info", skip_all, fields(%keyword, %link))]
pub async fn download_image(
    http: &Client,
    output_dir: &Path,
    keyword: &str,
    link: &str,
) -> Result<PathBuf, MonitorError> {
    let url = Url::parse(link)?;
    let path = image_file_path(output_dir, keyword, extension_of(link));

    let response = http.get(url).send().await?;
    info!(status = response.status().as_u16(), "Image response code");

    let mut file = File::create(&path).await?;
    let mut bytes = 0usize;
    let mut body = response.bytes_stream();
    while let Some(chunk) = body.next().await {
        let chunk = chunk?;
        bytes += chunk.len();
        file.write_all(&chunk).await?;
    }
    file.flush().await?;

    info!(path = %path.display(), bytes, "Saved image");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const PNG_MAGIC: &[u8] = &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];

    #[tokio::test]
    async fn test_download_image_writes_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/img/cat.png"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(PNG_MAGIC))
            .expect(1)
            .mount(&server)
            .await;

        let dir = tempfile::tempdir().unwrap();
        let link = format!("{}/img/cat.png", server.uri());
        let saved = download_image(&Client::new(), dir.path(), "cat", &link)
            .await
            .unwrap();

        assert_eq!(saved, dir.path().join("image_cat.png"));
        assert_eq!(std::fs::read(saved).unwrap(), PNG_MAGIC);
    }

    #[tokio::test]
    async fn test_download_image_keeps_extension_case_and_overwrites() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/b.JPG"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(b"new".to_vec()))
            .mount(&server)
            .await;

        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("image_test.JPG"), b"old image bytes").unwrap();

        let link = format!("{}/b.JPG", server.uri());
        let saved = download_image(&Client::new(), dir.path(), "test", &link)
            .await
            .unwrap();

        assert_eq!(saved, dir.path().join("image_test.JPG"));
        assert_eq!(std::fs::read(saved).unwrap(), b"new");
    }

    #[tokio::test]
    async fn test_download_image_invalid_link() {
        let dir = tempfile::tempdir().unwrap();
        let err = download_image(&Client::new(), dir.path(), "test", "not-a-url.png")
            .await
            .unwrap_err();
        assert!(matches!(err, MonitorError::InvalidUrl(_)));
        assert!(!dir.path().join("image_test.png").exists());
    }

    #[tokio::test]
    async fn test_download_image_transport_failure() {
        let dir = tempfile::tempdir().unwrap();
        let err = download_image(&Client::new(), dir.path(), "test", "http://127.0.0.1:1/a.png")
            .await
            .unwrap_err();
        assert!(matches!(err, MonitorError::Transport(_)));
    }
}
