//! Groupcast CLI: send one message with attachments to many groups.
//!
//! Set GROUPCAST_BASE_URL and GROUPCAST_CSRF_TOKEN (or pass --csrf-token).

use anyhow::Context;
use clap::{Parser, Subcommand};
use groupcast_api_client::ApiClient;
use groupcast_cli::{init_tracing, load_file, unique_groups};
use groupcast_composer::{Composer, Handled, UiEvent};
use groupcast_core::{format_file_size, ComposerConfig, GroupOption};

#[derive(Parser)]
#[command(name = "groupcast", about = "Mass message composer CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compose and send a mass message
    Send {
        /// Target group id (repeatable)
        #[arg(long = "group", allow_negative_numbers = true)]
        groups: Vec<i64>,
        /// Message text
        #[arg(long)]
        message: Option<String>,
        /// File to attach (repeatable)
        #[arg(long = "file")]
        files: Vec<std::path::PathBuf>,
        /// Anti-forgery token; overrides GROUPCAST_CSRF_TOKEN
        #[arg(long)]
        csrf_token: Option<String>,
    },
    /// Format a byte count the way the file list does
    Size {
        /// Number of bytes
        bytes: u64,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();

    match cli.command {
        Commands::Send {
            groups,
            message,
            files,
            csrf_token,
        } => {
            let config = ComposerConfig::from_env().context("Invalid configuration")?;
            let csrf_token = csrf_token
                .or_else(|| config.csrf_token.clone())
                .context("Missing anti-forgery token. Set GROUPCAST_CSRF_TOKEN or pass --csrf-token")?;
            let client = ApiClient::from_config(&config)?;

            let groups = unique_groups(&groups);
            let options = groups
                .iter()
                .map(|id| GroupOption::new(*id, id.to_string()));
            let mut composer = Composer::new(options, client, csrf_token, &config);

            let mut staged = Vec::with_capacity(files.len());
            for path in &files {
                staged.push(load_file(path).await?);
            }
            composer.handle(UiEvent::FilesPicked(staged)).await;
            for row in composer.view().files {
                tracing::info!(
                    name = %row.name,
                    size = %row.size_label,
                    category = row.category.as_str(),
                    "Staged file"
                );
            }

            for group_id in groups {
                composer
                    .handle(UiEvent::GroupToggled {
                        group_id,
                        checked: true,
                    })
                    .await;
            }
            if let Some(text) = message {
                composer.handle(UiEvent::MessageEdited(text)).await;
            }

            let mut progress = composer.subscribe_progress();
            let reporter = tokio::spawn(async move {
                while progress.changed().await.is_ok() {
                    let state = *progress.borrow_and_update();
                    if state.visible {
                        tracing::debug!(percent = state.percent, "Upload progress");
                    }
                }
            });

            let handled = composer.handle(UiEvent::Submit).await;
            if let Some(banner) = composer.view().status {
                println!("{}", banner.message);
            }
            reporter.abort();

            match handled {
                Handled::Submitted(Ok(outcome)) if outcome.is_delivered() => {}
                Handled::Submitted(Ok(_)) => {
                    return Err(anyhow::anyhow!("Mass message was not delivered"));
                }
                Handled::Submitted(Err(err)) => return Err(err.into()),
                _ => return Err(anyhow::anyhow!("Submission did not start")),
            }
        }
        Commands::Size { bytes } => {
            println!("{}", format_file_size(bytes));
        }
    }

    Ok(())
}
