//! CLI administration tool for geo-registry.
//!
//! Mints bearer tokens, shows hierarchy counts and performs database checks
//! without requiring HTTP API access.
//!
//! # Usage
//!
//! ```bash
//! # Issue a bearer token (prompts for the username)
//! cargo run --bin admin -- token issue
//!
//! # Issue a token for a given user
//! cargo run --bin admin -- token issue --username ops
//!
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `JWT_SECRET` (required for `token`): same key the server signs with
//! - `DATABASE_URL` or `DB_*` (required for `stats` and `db`)

use geo_registry::application::services::AuthService;
use geo_registry::config;
use geo_registry::server::connect_pool;
use geo_registry::state::AppState;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Input;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing geo-registry.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage bearer tokens
    Token {
        #[command(subcommand)]
        action: TokenAction,
    },

    /// Show country, state and city counts
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

#[derive(Subcommand)]
enum TokenAction {
    /// Issue a signed bearer token
    Issue {
        /// Subject of the token
        #[arg(short, long)]
        username: Option<String>,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Token { action } => handle_token_action(action)?,
        Commands::Stats => {
            let config = config::load_from_env()?;
            let pool = connect_pool(&config).await?;
            handle_stats(pool, &config).await?;
        }
        Commands::Db { action } => {
            let config = config::load_from_env()?;
            let pool = connect_pool(&config).await?;
            handle_db_action(action, &pool).await?;
        }
    }

    Ok(())
}

/// Dispatches token commands. Signing happens locally; no database needed.
fn handle_token_action(action: TokenAction) -> Result<()> {
    match action {
        TokenAction::Issue { username } => issue_token(username),
    }
}

/// Issues a bearer token with the configured JWT settings.
///
/// The token is accepted by any server sharing the same `JWT_SECRET`,
/// `JWT_ISSUER` and `JWT_AUDIENCE`.
fn issue_token(username: Option<String>) -> Result<()> {
    println!("{}", "🔑 Issue Bearer Token".bright_blue().bold());
    println!();

    let jwt = config::load_jwt_from_env()?;

    let username = match username {
        Some(u) => u,
        None => Input::new()
            .with_prompt("Username")
            .with_initial_text("admin")
            .interact_text()?,
    };

    let auth = AuthService::new(jwt);
    let issued = auth
        .issue_token(&username)
        .map_err(|e| anyhow::anyhow!("Failed to issue token: {}", e))?;

    println!("{}", "Token details:".bright_white().bold());
    println!("  Subject: {}", username.cyan());
    println!(
        "  Expires: {}",
        issued
            .expires_at
            .format("%Y-%m-%d %H:%M UTC")
            .to_string()
            .bright_black()
    );
    println!("  Token:   {}", issued.token.bright_yellow().bold());
    println!();
    println!("{}", "Example:".bright_white());
    println!(
        "  curl -H \"Authorization: Bearer {}\" http://localhost:3000/api/countries",
        issued.token.bright_yellow()
    );
    println!();

    Ok(())
}

/// Displays hierarchy counts.
async fn handle_stats(pool: PgPool, config: &config::Config) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let state = AppState::new(Arc::new(pool), config.jwt());

    let countries = state.country_service.count_countries().await?;
    let states = state.state_service.count_states().await?;
    let cities = state.city_service.count_cities().await?;

    println!(
        "  Countries: {}",
        countries.to_string().bright_green().bold()
    );
    println!("  States:    {}", states.to_string().bright_green().bold());
    println!("  Cities:    {}", cities.to_string().bright_green().bold());
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            let migrations: i64 =
                sqlx::query_scalar("SELECT COUNT(*) FROM _sqlx_migrations WHERE success")
                    .fetch_one(pool)
                    .await
                    .unwrap_or(0);

            println!("  PostgreSQL: {}", version.bright_white());
            println!("  Migrations: {}", migrations.to_string().bright_white());
            println!();
        }
    }

    Ok(())
}
