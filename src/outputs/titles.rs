//! News title file output.

use crate::error::MonitorError;
use crate::utils::titles_file_path;
use std::path::{Path, PathBuf};
use tokio::fs::File;
use tokio::io::{AsyncWriteExt, BufWriter};
use tracing::{info, instrument};

/// Write `titles` to `<output_dir>/<keyword>.txt`, one per line.
///
/// The file is created or truncated, and fully flushed before this returns.
///
/// # Arguments
///
/// * `output_dir` - Directory receiving the file
/// * `keyword` - Search keyword, used as the file stem
/// * `titles` - Titles in the order they should appear
///
/// # Returns
///
/// The path of the written file.
///
/// # Errors
///
/// Any failure to create or write the file is returned as [`MonitorError::Io`].
#[instrument(level = "info", skip_all, fields(%keyword, count = titles.len()))]
pub async fn save_titles(
    output_dir: &Path,
    keyword: &str,
    titles: &[String],
) -> Result<PathBuf, MonitorError> {
    let path = titles_file_path(output_dir, keyword);
    let mut writer = BufWriter::new(File::create(&path).await?);

    for title in titles {
        writer.write_all(title.as_bytes()).await?;
        writer.write_all(b"\n").await?;
    }
    writer.flush().await?;

    info!(path = %path.display(), "Saved news titles");
    Ok(path)
}
