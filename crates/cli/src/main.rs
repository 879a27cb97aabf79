//! Cake Shop CLI - Browse cakes, manage the cart and edit the catalog.
//!
//! # Usage
//!
//! ```bash
//! # Browse the catalog
//! cake-shop list --search cream --sort price-desc
//! cake-shop show 3
//!
//! # Work with the cart (persisted in CAKE_SHOP_DATA_DIR)
//! cake-shop cart add 1
//! cake-shop cart dec 1
//! cake-shop cart show
//! cake-shop checkout
//!
//! # Catalog admin (changes last until the process exits)
//! cake-shop shell
//! ```
//!
//! # Commands
//!
//! - `list` / `show` - Catalog projection and detail view
//! - `cart show|add|inc|dec|remove` - Cart operations
//! - `checkout` - Show the order total
//! - `admin list|add|edit|delete` - Catalog CRUD
//! - `shell` - Interactive session accepting all of the above

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::io::Write;
use std::path::PathBuf;

use cake_shop_core::CakeId;
use cake_shop_storefront::config::{LogFormat, StorefrontConfig};
use cake_shop_storefront::projection::SortKey;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod prompt;
mod render;

#[derive(Parser)]
#[command(name = "cake-shop")]
#[command(author, version, about = "Cake shop storefront")]
struct Cli {
    /// Answer yes to every confirmation
    #[arg(short, long, global = true)]
    yes: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Shop(ShopCommand),
    /// Start an interactive session
    Shell,
}

/// Commands available both on the command line and inside `shell`.
#[derive(Subcommand)]
pub enum ShopCommand {
    /// List cakes matching a search, in sort order
    ///
    /// Inside `shell` the search and sort stick until changed.
    List {
        /// Case-insensitive name filter (empty shows everything)
        #[arg(short, long)]
        search: Option<String>,

        /// name-asc, name-desc, price-asc or price-desc
        #[arg(long)]
        sort: Option<SortKey>,
    },
    /// Show one cake in detail
    Show { id: CakeId },
    /// Work with the cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Show the order total (no payment is taken)
    Checkout,
    /// Manage the catalog
    Admin {
        #[command(subcommand)]
        action: AdminAction,
    },
}

impl ShopCommand {
    /// True for commands that change the in-memory catalog.
    const fn edits_catalog(&self) -> bool {
        matches!(
            self,
            Self::Admin {
                action: AdminAction::Add(_) | AdminAction::Edit { .. } | AdminAction::Delete { .. },
            }
        )
    }
}

#[derive(Subcommand)]
pub enum CartAction {
    /// Show cart lines and totals
    Show,
    /// Add one of a catalog cake
    Add { id: CakeId },
    /// Add one more of a cart line
    Inc { id: CakeId },
    /// Take one away from a cart line
    Dec { id: CakeId },
    /// Remove a cart line
    Remove { id: CakeId },
}

#[derive(Subcommand)]
pub enum AdminAction {
    /// List the whole catalog in catalog order
    List,
    /// Add a cake
    Add(CakeFields),
    /// Edit a cake; omitted fields keep their value
    Edit {
        id: CakeId,
        #[command(flatten)]
        fields: CakeFields,
    },
    /// Delete a cake (and drop it from the cart)
    Delete { id: CakeId },
}

/// Cake form fields. All are free text; the price is parsed leniently.
#[derive(Args, Default)]
pub struct CakeFields {
    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub description: Option<String>,

    #[arg(long)]
    pub long_description: Option<String>,

    #[arg(long)]
    pub price: Option<String>,

    /// Image URL
    #[arg(long, conflicts_with = "image_file")]
    pub image_url: Option<String>,

    /// Local image file to embed
    #[arg(long)]
    pub image_file: Option<PathBuf>,
}

fn init_tracing(config: &StorefrontConfig) {
    // Defaults to warnings only so logs don't drown command output
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "cake_shop_storefront=warn,cake_shop_cli=warn".into());

    let registry = tracing_subscriber::registry().with(env_filter);
    match config.log_format {
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init(),
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init(),
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let config = match StorefrontConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing_subscriber::fmt::init();
            tracing::error!("Failed to load configuration: {e}");
            std::process::exit(2);
        }
    };
    init_tracing(&config);

    let cli = Cli::parse();

    if let Err(e) = run(cli, &config).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli, config: &StorefrontConfig) -> Result<(), commands::CommandError> {
    let mut shop = commands::open_shop(config);
    let mut prompt = prompt::TerminalPrompt::new(cli.yes);
    let mut out = std::io::stdout();

    match cli.command {
        Commands::Shop(command) => {
            let edits_catalog = command.edits_catalog();
            commands::dispatch(&mut shop, command, &mut prompt, config, &mut out).await?;
            if edits_catalog {
                writeln!(
                    out,
                    "Note: catalog changes last until the process exits; use `cake-shop shell` to keep working with them."
                )?;
            }
            Ok(())
        }
        Commands::Shell => {
            let input = commands::shell::stdin_lines();
            commands::shell::run(&mut shop, &mut prompt, config, input, &mut out).await
        }
    }
}
