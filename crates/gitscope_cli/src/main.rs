//! gitscope CLI - explore GitHub repositories and commit history.

mod commands;
mod config;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use console::Term;
use tracing_subscriber::EnvFilter;

use crate::commands::commits::SortArg;
use crate::commands::shared::OutputFormat;

#[derive(Parser)]
#[command(name = "gitscope")]
#[command(version)]
#[command(about = "Explore GitHub repositories and commit history")]
#[command(
    long_about = "gitscope browses a user's public GitHub repositories, pages through commit \
history, inspects per-commit file diffs, and keeps a locally persisted list of \
favorite commits. All data comes from the public GitHub REST API."
)]
#[command(after_long_help = r#"EXAMPLES
    List a user's repositories:
        $ gitscope repos octocat

    Page through commit history, oldest first:
        $ gitscope commits octocat Hello-World --pages 3 --sort oldest

    Inspect one commit with its unified diff:
        $ gitscope show octocat Hello-World 6dcb09b --patch

    Bookmark a commit and list bookmarks:
        $ gitscope favorites add octocat Hello-World 6dcb09b
        $ gitscope favorites list

    Generate shell completions:
        $ gitscope completions bash > ~/.local/share/bash-completion/completions/gitscope

CONFIGURATION
    gitscope reads configuration from:
      1. ~/.config/gitscope/config.toml (or $XDG_CONFIG_HOME/gitscope/config.toml)
      2. ./gitscope.toml in the current directory
      3. Environment variables (GITSCOPE_* prefix, e.g., GITSCOPE_GITHUB_TOKEN)
      4. .env file in the current directory

ENVIRONMENT VARIABLES
    GITSCOPE_GITHUB_TOKEN     GitHub personal access token (optional, raises rate limits)
    GITSCOPE_GITHUB_URL       API base URL (default: https://api.github.com)
    GITSCOPE_FAVORITES_PATH   Favorites file (default: ~/.local/state/gitscope/favorites.json)
"#)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List a user's public repositories
    Repos {
        /// GitHub username
        username: String,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        output: OutputFormat,
    },
    /// Page through a repository's commit history
    Commits {
        /// GitHub username
        username: String,

        /// Repository name
        repo: String,

        /// Number of 10-commit pages to fetch
        #[arg(short, long, default_value_t = 1)]
        pages: u32,

        /// Commit ordering
        #[arg(short, long, value_enum, default_value_t = SortArg::Newest)]
        sort: SortArg,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        output: OutputFormat,
    },
    /// Show one commit with its file-level changes
    Show {
        /// GitHub username
        username: String,

        /// Repository name
        repo: String,

        /// Commit SHA (full or abbreviated)
        sha: String,

        /// Print unified diffs for each changed file
        #[arg(short, long)]
        patch: bool,
    },
    /// Manage the locally persisted favorites list
    Favorites {
        #[command(subcommand)]
        action: FavoritesAction,
    },
    /// Save a GitHub personal access token to the config file
    Auth {
        /// Personal access token
        token: String,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        shell: clap_complete::Shell,
    },
    /// Generate man page(s)
    Man {
        /// Output directory for man pages (prints to stdout if not specified)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
enum FavoritesAction {
    /// List bookmarked commits
    List {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        output: OutputFormat,
    },
    /// Fetch a commit and bookmark it
    Add {
        /// GitHub username
        username: String,

        /// Repository name
        repo: String,

        /// Commit SHA
        sha: String,
    },
    /// Remove a bookmark by SHA
    Remove {
        /// Commit SHA
        sha: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    // Initialize tracing for non-TTY mode (structured logging)
    if !Term::stdout().is_term() {
        let env_filter = match EnvFilter::try_from_default_env() {
            Ok(filter) => filter,
            Err(_) => EnvFilter::new("gitscope=info,gitscope_cli=info"),
        };

        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .init();
    }

    let config = config::Config::load();

    let cli = Cli::parse();

    match cli.command {
        Commands::Repos { username, output } => {
            commands::repos::handle_repos(&username, output, &config).await?;
        }
        Commands::Commits {
            username,
            repo,
            pages,
            sort,
            output,
        } => {
            commands::commits::handle_commits(&username, &repo, pages, sort, output, &config)
                .await?;
        }
        Commands::Show {
            username,
            repo,
            sha,
            patch,
        } => {
            commands::show::handle_show(&username, &repo, &sha, patch, &config).await?;
        }
        Commands::Favorites { action } => match action {
            FavoritesAction::List { output } => {
                commands::favorites::handle_list(output, &config)?;
            }
            FavoritesAction::Add {
                username,
                repo,
                sha,
            } => {
                commands::favorites::handle_add(&username, &repo, &sha, &config).await?;
            }
            FavoritesAction::Remove { sha } => {
                commands::favorites::handle_remove(&sha, &config)?;
            }
        },
        Commands::Auth { token } => {
            commands::auth::handle_auth(&token)?;
        }
        Commands::Completions { shell } => {
            commands::meta::handle_completions(shell)?;
        }
        Commands::Man { output } => {
            commands::meta::handle_man(output)?;
        }
    }

    Ok(())
}
