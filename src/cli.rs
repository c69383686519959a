//! Command-line interface definitions.
//!
//! Every option can also come from the environment. Nothing is validated up
//! front: a missing keyword or credential becomes an empty string and the run
//! proceeds, letting the API reject it.

use crate::api::DEFAULT_BASE_URL;
use crate::models::ParseMode;
use crate::monitor::{DEFAULT_DISPLAY, DEFAULT_START};
use clap::Parser;
use clap::error::ErrorKind;
use std::ffi::OsString;
use std::path::PathBuf;
use tracing::error;

/// Command-line arguments.
///
/// # Examples
///
/// ```sh
/// # Credentials and keyword from the environment
/// KEYWORD=rust NAVER_CLIENT_ID=... NAVER_CLIENT_SECRET=... naver_news_monitor
///
/// # Explicit keyword, output into ./out, structured parsing
/// naver_news_monitor -k rust -o ./out --parse-mode json
/// ```
#[derive(Parser)]
#[command(author, version, about)]
pub struct Cli {
    /// Search keyword; also names the output files
    #[arg(short, long, env = "KEYWORD", default_value = "")]
    pub keyword: String,

    /// Naver API client id
    #[arg(long, env = "NAVER_CLIENT_ID", default_value = "", hide_env_values = true)]
    pub client_id: String,

    /// Naver API client secret
    #[arg(long, env = "NAVER_CLIENT_SECRET", default_value = "", hide_env_values = true)]
    pub client_secret: String,

    /// Search API root; `news` and `image` are appended to it
    #[arg(long, env = "NAVER_API_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub api_base_url: String,

    /// Number of results requested from each endpoint
    #[arg(long, default_value_t = DEFAULT_DISPLAY)]
    pub display: u32,

    /// 1-based offset of the first result
    #[arg(long, default_value_t = DEFAULT_START)]
    pub start: u32,

    /// Directory receiving `<keyword>.txt` and `image_<keyword>.<ext>`
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    /// How titles and image links are extracted from responses
    #[arg(long, value_enum, default_value_t = ParseMode::Literal)]
    pub parse_mode: ParseMode,

    /// Treat non-2xx search responses as errors instead of parsing them
    #[arg(long)]
    pub strict_status: bool,
}

/// Parse `args` into a [`Cli`] without ever exiting on bad input.
///
/// `--help` and `--version` keep clap's behavior (print and exit 0). Any other
/// rejection, such as a non-UTF-8 `KEYWORD` or a non-numeric `--display`, is
/// logged at error level like a failed run.
///
/// # Arguments
///
/// * `args` - Program name followed by the command-line arguments
///
/// # Returns
///
/// The parsed arguments, or `None` if they were rejected.
pub fn parse_or_log<I, T>(args: I) -> Option<Cli>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Cli::try_parse_from(args) {
        Ok(cli) => Some(cli),
        Err(e)
            if matches!(
                e.kind(),
                ErrorKind::DisplayHelp
                    | ErrorKind::DisplayVersion
                    | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
            ) =>
        {
            e.exit()
        }
        Err(e) => {
            error!(kind = ?e.kind(), error = %e, "Invalid arguments");
            None
        }
    }
}
