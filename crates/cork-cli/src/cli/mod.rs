//! CLI entry and dispatch.

use anyhow::{Context, Result};
use clap::Parser;
use cork_client::Config;

mod commands;

#[derive(Parser)]
#[command(name = "cork")]
#[command(version = "0.1")]
#[command(about = "Terminal client for a corkboard posts service")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Log in and store the session token
    Login {
        /// Account email
        #[arg(long)]
        email: String,

        /// Account password (read from stdin if omitted)
        #[arg(long)]
        password: Option<String>,
    },

    /// Create an account
    Register {
        /// Display name
        #[arg(long)]
        name: String,

        /// Account email
        #[arg(long)]
        email: String,

        /// Account password
        #[arg(long)]
        password: String,

        /// Password confirmation (must match)
        #[arg(long)]
        confirm: String,
    },

    /// Log out and delete the stored token
    Logout,

    /// Show the signed-in user's profile
    Whoami,

    /// Manage posts without the interactive board
    Posts {
        #[command(subcommand)]
        command: PostCommands,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum PostCommands {
    /// List all posts
    List {
        /// Print the raw collection as JSON
        #[arg(long)]
        json: bool,
    },
    /// Create a post
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: String,
    },
    /// Update a post
    Update {
        /// The ID of the post to update
        #[arg(value_name = "POST_ID")]
        id: String,
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: String,
    },
    /// Delete a post
    Delete {
        /// The ID of the post to delete
        #[arg(value_name = "POST_ID")]
        id: String,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // one tokio runtime for everything
    let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;

    rt.block_on(async move { dispatch(cli).await })
}

async fn dispatch(cli: Cli) -> Result<()> {
    let config = Config::load().context("load config")?;
    let _log_guard = cork_client::logging::init().context("init logging")?;

    // default to the interactive board
    let Some(command) = cli.command else {
        return cork_tui::run_board(&config).await;
    };

    match command {
        Commands::Login { email, password } => {
            commands::auth::login(&config, &email, password.as_deref()).await
        }
        Commands::Register {
            name,
            email,
            password,
            confirm,
        } => commands::auth::register(&config, &name, &email, &password, &confirm).await,
        Commands::Logout => commands::auth::logout(),
        Commands::Whoami => commands::auth::whoami(&config).await,

        Commands::Posts { command } => match command {
            PostCommands::List { json } => commands::posts::list(&config, json).await,
            PostCommands::Create { title, description } => {
                commands::posts::create(&config, &title, &description).await
            }
            PostCommands::Update {
                id,
                title,
                description,
            } => commands::posts::update(&config, &id, &title, &description).await,
            PostCommands::Delete { id } => commands::posts::delete(&config, &id).await,
        },

        Commands::Config { command } => match command {
            ConfigCommands::Path => commands::config::path(),
            ConfigCommands::Init => commands::config::init(),
        },
    }
}
