use std::path::PathBuf;

use clap::{Parser, Subcommand};
use submit_core::Platform;

use crate::platform::logging::LogDestination;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "video-submitter",
    about = "Submit videos to the publishing webhook and review past submissions",
    version
)]
pub struct Cli {
    /// Configuration file (RON). Defaults to the per-user config directory.
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Override the submission endpoint URL.
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    /// Directory holding the submission history and log file.
    #[arg(long = "data-dir", global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Where log output goes.
    #[arg(long, global = true, value_enum)]
    pub log: Option<LogDestination>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Submit a video to one or more platforms.
    Submit {
        /// Absolute URL of the video.
        #[arg(long)]
        url: String,

        /// Target platform; repeat for several (youtube, tiktok, instagram, facebook, twitter, linkedin).
        #[arg(short = 'p', long = "platform", value_name = "PLATFORM")]
        platforms: Vec<Platform>,

        /// Hashtags, separated by spaces or commas. `#` is added where missing.
        #[arg(long, default_value = "")]
        hashtags: String,

        /// Free-text description.
        #[arg(long, default_value = "")]
        description: String,
    },
    /// Show the submission history, newest first.
    History,
    /// Delete the submission history.
    Clear,
    /// Check whether a URL would be accepted.
    CheckUrl { url: String },
    /// Print hashtags in normalized form.
    FormatHashtags { text: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_repeated_platforms() {
        let cli = Cli::try_parse_from([
            "video-submitter",
            "submit",
            "--url",
            "https://example.com/v",
            "-p",
            "youtube",
            "--platform",
            "TikTok",
        ])
        .unwrap();
        match cli.command {
            Command::Submit { platforms, .. } => {
                assert_eq!(platforms, vec![Platform::Youtube, Platform::Tiktok]);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn rejects_unknown_platform() {
        let result = Cli::try_parse_from([
            "video-submitter",
            "submit",
            "--url",
            "https://example.com/v",
            "-p",
            "myspace",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn global_flags_follow_subcommand() {
        let cli = Cli::try_parse_from(["video-submitter", "history", "--data-dir", "/tmp/x"]).unwrap();
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/x")));
        assert!(matches!(cli.command, Command::History));
    }
}
