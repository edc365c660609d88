//! Command handlers.

use std::io::Write;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::{Context, Result};
use pk_app::AppDeps;
use pk_core::{build_embed_url, EmbedKind, LikedPosts};
use tracing::info;

use crate::bootstrap::{build_deps, resolve_site_config, ClipboardMode};
use crate::cli::{Cli, Command, LikesAction};

pub async fn run(cli: Cli) -> Result<ExitCode> {
    let mut stdout = std::io::stdout();

    match cli.command {
        Command::Embed { kind, id } => Ok(if embed(&mut stdout, &kind, &id)? {
            ExitCode::SUCCESS
        } else {
            ExitCode::from(2)
        }),
        Command::Likes { action } => {
            let deps = build_deps(&cli.global, ClipboardMode::Headless)?;
            likes(&mut stdout, &deps, action)
        }
        Command::Copy {
            text,
            headless,
            hold,
        } => {
            let mode = if headless {
                ClipboardMode::Headless
            } else {
                ClipboardMode::System {
                    hold: Duration::from_secs(hold),
                }
            };
            let deps = build_deps(&cli.global, mode)?;
            let outcome = deps.copy_and_notify().execute(&text).await;
            Ok(if outcome.is_copied() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Command::Config => {
            let config = resolve_site_config(&cli.global)?;
            writeln!(stdout, "backend_url = {}", config.backend_url)?;
            writeln!(stdout, "liked_posts_key = {}", config.liked_posts_key)?;
            match &config.data_file {
                Some(path) => writeln!(stdout, "data_file = {}", path.display())?,
                None => writeln!(stdout, "data_file = (app data dir)")?,
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Returns `false` when the type is not recognized.
fn embed(out: &mut impl Write, kind: &str, id: &str) -> Result<bool> {
    let url = build_embed_url(kind, id);
    if url.is_empty() {
        eprintln!("unknown embed type: {kind}");
        return Ok(false);
    }

    if EmbedKind::from_tag(kind).is_some_and(|kind| !kind.is_frame_embeddable()) {
        eprintln!("note: {kind} URLs are usually blocked inside iframes; link to it directly");
    }

    writeln!(out, "{url}")?;
    Ok(true)
}

fn likes(out: &mut impl Write, deps: &AppDeps, action: LikesAction) -> Result<ExitCode> {
    match action {
        LikesAction::List { json } => {
            let liked = deps.get_liked_posts().execute();
            if json {
                writeln!(out, "{}", serde_json::to_string(&liked)?)?;
            } else {
                for id in &liked {
                    writeln!(out, "{id}")?;
                }
            }
        }
        LikesAction::Add { id } => {
            let mut liked = deps.get_liked_posts().execute();
            let label = id.to_string();
            if liked.insert(id) {
                deps.save_liked_posts().execute(&liked)?;
            }
            writeln!(out, "liked {label}")?;
        }
        LikesAction::Remove { id } => {
            let mut liked = deps.get_liked_posts().execute();
            if liked.remove(&id) {
                deps.save_liked_posts().execute(&liked)?;
            }
            writeln!(out, "unliked {id}")?;
        }
        LikesAction::Toggle { id } => {
            let label = id.to_string();
            let now_liked = deps.toggle_liked_post().execute(id)?;
            writeln!(out, "{} {label}", if now_liked { "liked" } else { "unliked" })?;
        }
        LikesAction::Save { ids } => {
            let liked: LikedPosts = ids.into_iter().collect();
            deps.save_liked_posts()
                .execute(&liked)
                .context("save liked posts failed")?;
            info!(count = liked.len(), "Replaced liked posts");
        }
        LikesAction::Clear => {
            deps.clear_liked_posts().execute()?;
        }
    }
    Ok(ExitCode::SUCCESS)
}
