// ABOUTME: GameShelf CLI - command-line front end for a personal game library
// ABOUTME: Handles login, entry management, catalog lookups, and statistics through the client core
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GameShelf Contributors
//!
//! Usage:
//! ```bash
//! export GAMESHELF_API_BASE_URL=https://api.gameshelf.example
//!
//! # Start a session (credentials persist across runs)
//! gameshelf-cli login --email me@example.com --password secret
//!
//! # Show your library, best rated first
//! gameshelf-cli entries list --sort rating
//!
//! # Track a game
//! gameshelf-cli entries add --game-id 42 --status playing --platform PC
//!
//! # Finish it
//! gameshelf-cli entries update 7 --status completed --rating 9
//!
//! # Library statistics
//! gameshelf-cli stats
//! ```

mod commands;
mod helpers;

use anyhow::Context;
use clap::{Parser, Subcommand};
use gameshelf_client::{
    actions::Actions,
    api::ApiClient,
    config::{ClientConfig, LogLevel},
    credentials::FileCredentialStore,
    errors::ApiError,
    logging::LoggingConfig,
    models::{GameEntryStatus, Rating},
    store::Store,
};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

#[derive(Parser)]
#[command(
    name = "gameshelf-cli",
    about = "GameShelf game library CLI",
    long_about = "Track the games you want to play, are playing, and have finished."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// API base URL override (defaults to GAMESHELF_API_BASE_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Credential file override (defaults to GAMESHELF_CREDENTIALS_PATH or the user config dir)
    #[arg(long, global = true)]
    credentials: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Log in and remember the session
    Login {
        /// Account email
        #[arg(long)]
        email: String,

        /// Account password
        #[arg(long)]
        password: String,
    },

    /// Create an account and log in
    Register {
        /// Account email
        #[arg(long)]
        email: String,

        /// Display name
        #[arg(long)]
        username: String,

        /// Account password
        #[arg(long)]
        password: String,
    },

    /// Forget the stored session
    Logout,

    /// Show the logged-in user
    Whoami,

    /// Game entry commands
    Entries {
        #[command(subcommand)]
        action: EntriesCommand,
    },

    /// Game catalog commands
    Game {
        #[command(subcommand)]
        action: GameCommand,
    },

    /// Show library statistics
    Stats,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum EntriesCommand {
    /// List entries (your own unless a filter says otherwise)
    List {
        /// Page number
        #[arg(long)]
        page: Option<u32>,

        /// Free-text search
        #[arg(long)]
        query: Option<String>,

        /// Another user's entries
        #[arg(long)]
        user_id: Option<i64>,

        /// Entries for one catalog game
        #[arg(long)]
        game_id: Option<i64>,

        /// Only show this status
        #[arg(long, value_parser = parse_status)]
        status: Option<GameEntryStatus>,

        /// Sort order: id, rating, status, name
        #[arg(long, default_value = "id")]
        sort: String,
    },

    /// Add a game to your library
    Add {
        /// Catalog game id
        #[arg(long)]
        game_id: i64,

        /// Play status
        #[arg(long, value_parser = parse_status, default_value = "backlog")]
        status: GameEntryStatus,

        /// Rating from 0 to 10
        #[arg(long, value_parser = parse_rating)]
        rating: Option<Rating>,

        /// Platform played on (repeatable)
        #[arg(long = "platform")]
        platforms: Vec<String>,

        /// Short review
        #[arg(long)]
        review: Option<String>,
    },

    /// Change an entry
    Update {
        /// Entry id
        id: i64,

        /// New play status
        #[arg(long, value_parser = parse_status)]
        status: Option<GameEntryStatus>,

        /// New rating from 0 to 10
        #[arg(long, value_parser = parse_rating, conflicts_with = "clear_rating")]
        rating: Option<Rating>,

        /// Remove the rating
        #[arg(long)]
        clear_rating: bool,

        /// Replace platforms (repeatable)
        #[arg(long = "platform")]
        platforms: Vec<String>,

        /// New review
        #[arg(long)]
        review: Option<String>,
    },

    /// Remove an entry
    Delete {
        /// Entry id
        id: i64,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum GameCommand {
    /// Show catalog details for a game
    Show {
        /// Catalog game id
        id: i64,
    },
}

fn parse_status(raw: &str) -> Result<GameEntryStatus, String> {
    GameEntryStatus::from_name(raw).ok_or_else(|| {
        let names: Vec<&str> = GameEntryStatus::ALL.iter().map(|s| s.as_str()).collect();
        format!("unknown status '{raw}', expected one of {}", names.join(", "))
    })
}

fn parse_rating(raw: &str) -> Result<Rating, String> {
    raw.parse::<u8>()
        .ok()
        .and_then(Rating::new)
        .ok_or_else(|| format!("rating must be a whole number from 0 to 10, got '{raw}'"))
}

async fn build_actions(cli: &Cli) -> anyhow::Result<Actions> {
    let mut config = match &cli.api_url {
        Some(url) => ClientConfig::new(url)?,
        None => ClientConfig::from_env()?,
    };
    if let Some(path) = &cli.credentials {
        config.credentials_path.clone_from(path);
    }
    config.log_summary();

    let credentials = FileCredentialStore::open(&config.credentials_path)
        .await
        .with_context(|| {
            format!(
                "Cannot read credentials at {}",
                config.credentials_path.display()
            )
        })?;

    Ok(Actions::new(
        ApiClient::from_config(&config, Arc::new(credentials)),
        Store::spawn(),
    ))
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let actions = build_actions(&cli).await?;

    match cli.command {
        Command::Login { email, password } => {
            commands::session::login(&actions, email, password).await?;
        }
        Command::Register {
            email,
            username,
            password,
        } => {
            commands::session::register(&actions, email, username, password).await?;
        }
        Command::Logout => commands::session::logout(&actions).await?,
        Command::Whoami => commands::session::whoami(&actions).await?,
        Command::Entries { action } => match action {
            EntriesCommand::List {
                page,
                query,
                user_id,
                game_id,
                status,
                sort,
            } => {
                commands::entries::list(
                    &actions,
                    commands::entries::ListOptions {
                        page,
                        query,
                        user_id,
                        game_id,
                        status,
                        sort,
                    },
                )
                .await?;
            }
            EntriesCommand::Add {
                game_id,
                status,
                rating,
                platforms,
                review,
            } => {
                commands::entries::add(&actions, game_id, status, rating, platforms, review)
                    .await?;
            }
            EntriesCommand::Update {
                id,
                status,
                rating,
                clear_rating,
                platforms,
                review,
            } => {
                commands::entries::update(
                    &actions,
                    id,
                    commands::entries::EntryChanges {
                        status,
                        rating,
                        clear_rating,
                        platforms,
                        review,
                    },
                )
                .await?;
            }
            EntriesCommand::Delete { id } => commands::entries::delete(&actions, id).await?,
        },
        Command::Game { action } => match action {
            GameCommand::Show { id } => commands::games::show(&actions, id).await?,
        },
        Command::Stats => commands::stats::show(&actions).await?,
    }

    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let logging = LoggingConfig::from_env();
    let logging = if cli.verbose {
        logging.with_level(LogLevel::Debug)
    } else {
        logging
    };
    if let Err(e) = logging.init() {
        eprintln!("Failed to initialize logging: {e}");
    }

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            helpers::display::print_error(&error);
            if error
                .downcast_ref::<ApiError>()
                .is_some_and(ApiError::requires_login)
            {
                eprintln!("Run `gameshelf-cli login` to start a new session.");
            }
            ExitCode::FAILURE
        }
    }
}
