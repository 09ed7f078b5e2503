//! CLI administration tool for social-media-api.
//!
//! Provides commands for inspecting and seeding accounts and messages
//! without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Create an account (prompts for missing values)
//! cargo run --bin admin -- account create
//!
//! # List all accounts
//! cargo run --bin admin -- account list
//!
//! # List messages, optionally for one account
//! cargo run --bin admin -- messages --account 1
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL`: PostgreSQL connection string, or the `DB_HOST`,
//!   `DB_PORT`, `DB_USER`, `DB_PASSWORD`, `DB_NAME` components the server
//!   also accepts

use social_media_api::application::services::{AccountService, MessageService};
use social_media_api::config::Config;
use social_media_api::domain::entities::{MIN_PASSWORD_LENGTH, NewAccount};
use social_media_api::infrastructure::persistence::{PgAccountRepository, PgMessageRepository};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input, Password};
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing social-media-api.
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
    /// Manage accounts
    Account {
        #[command(subcommand)]
        action: AccountAction,
    },

    /// List messages
    Messages {
        /// Only show messages posted by this account id
        #[arg(short, long)]
        account: Option<i64>,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Account management subcommands.
#[derive(Subcommand)]
enum AccountAction {
    /// Register a new account
    Create {
        #[arg(short, long)]
        username: Option<String>,

        /// Password (prompted without echo if omitted)
        #[arg(short, long)]
        password: Option<String>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// List all accounts
    List,
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info and row counts
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url =
        Config::load_database_url().context("Failed to load database configuration")?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;
    let pool = Arc::new(pool);

    match cli.command {
        Commands::Account { action } => handle_account_action(action, pool).await?,
        Commands::Messages { account } => list_messages(pool, account).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches account management commands.
async fn handle_account_action(action: AccountAction, pool: Arc<PgPool>) -> Result<()> {
    let service = AccountService::new(Arc::new(PgAccountRepository::new(pool)));

    match action {
        AccountAction::Create {
            username,
            password,
            yes,
        } => create_account(&service, username, password, yes).await,
        AccountAction::List => list_accounts(&service).await,
    }
}

/// Registers an account, applying the same rules as `POST /register`.
async fn create_account(
    service: &AccountService<PgAccountRepository>,
    username: Option<String>,
    password: Option<String>,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "👤 Create Account".bright_blue().bold());
    println!();

    let username = match username {
        Some(u) => u,
        None => Input::new().with_prompt("Username").interact_text()?,
    };
    if username.trim().is_empty() {
        anyhow::bail!("Username must not be blank");
    }

    let password = match password {
        Some(p) => p,
        None => Password::new()
            .with_prompt("Password")
            .with_confirmation("Repeat password", "Passwords do not match")
            .interact()?,
    };
    if (password.chars().count() as u64) < MIN_PASSWORD_LENGTH {
        anyhow::bail!("Password must be at least {MIN_PASSWORD_LENGTH} characters");
    }

    if service
        .find_by_username(&username)
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?
        .is_some()
    {
        println!("{}", "⚠️  Username already taken".yellow());
        return Ok(());
    }

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt(format!("Create account '{username}'?"))
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let account = service
        .persist(NewAccount { username, password })
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create account: {}", e))?;

    println!();
    println!("{}", "✅ Account created successfully!".green().bold());
    println!("  ID:       {}", account.id.to_string().bright_white().bold());
    println!("  Username: {}", account.username.cyan());
    println!();

    Ok(())
}

/// Lists all accounts.
///
/// # Output Format
///
/// ```text
/// 📋 Accounts
///
///   ID    Username
///   ──────────────────────────────────────
///   1     testuser1
///   2     bob
/// ```
async fn list_accounts(service: &AccountService<PgAccountRepository>) -> Result<()> {
    println!("{}", "📋 Accounts".bright_blue().bold());
    println!();

    let accounts = service
        .find_all()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list accounts: {}", e))?;

    if accounts.is_empty() {
        println!("{}", "  No accounts found".yellow());
        return Ok(());
    }

    println!(
        "  {:<5} {}",
        "ID".bright_white().bold(),
        "Username".bright_white().bold()
    );
    println!("  {}", "─".repeat(40).bright_black());

    for account in &accounts {
        println!(
            "  {:<5} {}",
            account.id.to_string().bright_black(),
            account.username.cyan()
        );
    }

    println!();
    println!(
        "  Total: {}",
        accounts.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Lists messages, all or for a single author.
async fn list_messages(pool: Arc<PgPool>, account: Option<i64>) -> Result<()> {
    let service = MessageService::new(Arc::new(PgMessageRepository::new(pool)));

    let messages = match account {
        Some(id) => {
            println!(
                "{}",
                format!("💬 Messages by account {id}").bright_blue().bold()
            );
            service.find_by_posted_by(id).await
        }
        None => {
            println!("{}", "💬 Messages".bright_blue().bold());
            service.find_all().await
        }
    }
    .map_err(|e| anyhow::anyhow!("Failed to list messages: {}", e))?;
    println!();

    if messages.is_empty() {
        println!("{}", "  No messages found".yellow());
        return Ok(());
    }

    for message in &messages {
        println!(
            "  {:<5} {:<8} {:<12} {}",
            message.id.to_string().bright_black(),
            format!("@{}", message.posted_by).cyan(),
            message.time_posted_epoch.to_string().bright_black(),
            message.message_text
        );
    }

    println!();
    println!(
        "  Total: {}",
        messages.len().to_string().bright_white().bold()
    );
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

            let accounts_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM accounts")
                .fetch_one(pool)
                .await?;

            let messages_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM messages")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!(
                "  Accounts:   {}",
                accounts_count.to_string().bright_green().bold()
            );
            println!(
                "  Messages:   {}",
                messages_count.to_string().bright_green().bold()
            );
            println!();
        }
    }

    Ok(())
}
