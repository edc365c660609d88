use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use pk_core::PostId;

/// Helpers for the personal website: embed URLs, liked posts, clipboard copy.
#[derive(Debug, Parser)]
#[command(name = "pagekit", version, about)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Config file (TOML). Defaults to `<data dir>/config.toml` when present
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Storage file overriding `[storage] data_file`
    #[arg(long, global = true, value_name = "PATH")]
    pub data_file: Option<PathBuf>,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the embed URL for a content type and id
    Embed {
        /// docs, slide, img, pdf, spreadsheet, html or folder (any case)
        #[arg(value_name = "TYPE")]
        kind: String,
        /// Drive file id, or file name for `html`
        id: String,
    },

    /// Read or change the liked post ids
    Likes {
        #[command(subcommand)]
        action: LikesAction,
    },

    /// Copy text to the system clipboard
    Copy {
        text: String,
        /// Skip the system clipboard (always reports failure)
        #[arg(long)]
        headless: bool,
        /// Linux only: seconds to keep serving the text unless a clipboard
        /// manager takes it over first. Without one, the copy is lost when
        /// pagekit exits
        #[arg(long, value_name = "SECS", default_value_t = 3)]
        hold: u64,
    },

    /// Print the effective configuration
    Config,
}

#[derive(Debug, Subcommand)]
pub enum LikesAction {
    /// Print the stored ids
    List {
        #[arg(long)]
        json: bool,
    },
    /// Like a post (no-op if already liked)
    Add {
        #[arg(allow_negative_numbers = true)]
        id: PostId,
    },
    /// Unlike a post
    Remove {
        #[arg(allow_negative_numbers = true)]
        id: PostId,
    },
    /// Flip a post's liked state
    Toggle {
        #[arg(allow_negative_numbers = true)]
        id: PostId,
    },
    /// Replace the stored ids with exactly these, in order
    Save {
        #[arg(num_args = 0.., allow_negative_numbers = true)]
        ids: Vec<PostId>,
    },
    /// Forget every liked post
    Clear,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_embed() {
        let cli = Cli::parse_from(["pagekit", "embed", "DOCS", "abc"]);
        match cli.command {
            Command::Embed { kind, id } => {
                assert_eq!(kind, "DOCS");
                assert_eq!(id, "abc");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_likes_save_keeps_order() {
        let cli = Cli::parse_from(["pagekit", "likes", "save", "3", "1.5", "-2"]);
        match cli.command {
            Command::Likes {
                action: LikesAction::Save { ids },
            } => {
                let ids: Vec<String> = ids.iter().map(PostId::to_string).collect();
                assert_eq!(ids, vec!["3", "1.5", "-2"]);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_copy_hold() {
        match Cli::parse_from(["pagekit", "copy", "hi"]).command {
            Command::Copy { hold, headless, .. } => {
                assert_eq!(hold, 3);
                assert!(!headless);
            }
            other => panic!("unexpected command: {other:?}"),
        }
        match Cli::parse_from(["pagekit", "copy", "hi", "--hold", "0"]).command {
            Command::Copy { hold, .. } => assert_eq!(hold, 0),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_rejects_non_numeric_id() {
        assert!(Cli::try_parse_from(["pagekit", "likes", "add", "seven"]).is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "pagekit",
            "likes",
            "list",
            "--data-file",
            "/tmp/s.json",
            "-vv",
        ]);
        assert_eq!(cli.global.data_file, Some(PathBuf::from("/tmp/s.json")));
        assert_eq!(cli.global.verbose, 2);
    }
}
