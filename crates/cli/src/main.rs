//! Fiber X CLI - drive the cart, checkout and landing widgets from a terminal.
//!
//! # Usage
//!
//! ```bash
//! # Add one unit of a variant
//! fx cart add gid://shopify/ProductVariant/1 --product gid://shopify/Product/1 \
//!     --title "30 Day Challenge" --price 24.99
//!
//! # Set a quantity (0 removes the line)
//! fx cart update gid://shopify/ProductVariant/1 3
//!
//! # Show the cart, or the rendered drawer HTML
//! fx cart show
//! fx cart show --html
//!
//! # Hand the cart to Shopify and print the checkout URL
//! fx cart checkout
//!
//! # Show landing widget configuration
//! fx landing show
//! ```
//!
//! # Commands
//!
//! - `cart add|remove|update|show|clear|checkout` - Cart operations
//! - `landing show` - Accordion panels and widget settings

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use fiber_x_storefront::config::StorefrontConfig;
use fiber_x_storefront::error::{AppError, report};
use rust_decimal::Decimal;
use sentry::integrations::tracing as sentry_tracing;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "fx")]
#[command(author, version, about = "Fiber X cart and landing tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage the cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Inspect landing widgets
    Landing {
        #[command(subcommand)]
        action: LandingAction,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Add one unit of a product variant
    Add {
        /// Product variant ID
        variant_id: String,

        /// Parent product ID
        #[arg(short, long)]
        product: String,

        /// Display title
        #[arg(short, long)]
        title: String,

        /// Unit price
        #[arg(long)]
        price: Decimal,

        /// Product image URL
        #[arg(long)]
        image: Option<String>,
    },
    /// Remove a line item
    Remove {
        /// Product variant ID
        variant_id: String,
    },
    /// Set a line item's quantity (0 or less removes it)
    Update {
        /// Product variant ID
        variant_id: String,

        /// New quantity
        #[arg(allow_negative_numbers = true)]
        quantity: i64,
    },
    /// Show the cart
    Show {
        /// Print the rendered drawer HTML instead of a summary
        #[arg(long)]
        html: bool,
    },
    /// Remove every line item
    Clear,
    /// Start a Shopify checkout for the cart
    Checkout,
}

#[derive(Subcommand)]
enum LandingAction {
    /// Show accordion panels and widget settings
    Show {
        /// Toggle these panels open, in order, and show the resulting image
        #[arg(long = "toggle")]
        toggles: Vec<String>,
    },
}

/// Initialize Sentry error tracking and return guard that must be kept alive.
fn init_sentry(config: &StorefrontConfig) -> Option<sentry::ClientInitGuard> {
    let dsn = config.sentry_dsn.as_ref()?;

    let guard = sentry::init((
        dsn.as_str(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            environment: config
                .sentry_environment
                .clone()
                .map(std::borrow::Cow::Owned),
            attach_stacktrace: true,
            ..Default::default()
        },
    ));

    tracing::info!("Sentry initialized");
    Some(guard)
}

/// Filter tracing events to Sentry event types.
fn sentry_event_filter(metadata: &tracing::Metadata<'_>) -> sentry_tracing::EventFilter {
    match *metadata.level() {
        tracing::Level::ERROR | tracing::Level::WARN => sentry_tracing::EventFilter::Event,
        tracing::Level::INFO | tracing::Level::DEBUG => sentry_tracing::EventFilter::Breadcrumb,
        _ => sentry_tracing::EventFilter::Ignore,
    }
}

fn init_tracing() {
    // Defaults to info level for our crates if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "fiber_x_storefront=info,fiber_x_cli=info".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(sentry_tracing::layer().event_filter(sentry_event_filter))
        .init();
}

#[allow(clippy::print_stderr)]
#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match StorefrontConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            init_tracing();
            report(&AppError::from(e));
            return ExitCode::from(2);
        }
    };

    // Initialize Sentry (must be done before tracing subscriber)
    let _sentry_guard = init_sentry(&config);
    init_tracing();

    match run(cli, &config).await {
        Ok(code) => code,
        Err(e) => {
            report(&e);
            eprintln!("{}", e.user_message());
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli, config: &StorefrontConfig) -> Result<ExitCode, AppError> {
    match cli.command {
        Commands::Cart { action } => match action {
            CartAction::Add {
                variant_id,
                product,
                title,
                price,
                image,
            } => commands::cart::add(config, variant_id, product, title, price, image)?,
            CartAction::Remove { variant_id } => commands::cart::remove(config, &variant_id)?,
            CartAction::Update {
                variant_id,
                quantity,
            } => commands::cart::update(config, &variant_id, quantity)?,
            CartAction::Show { html } => commands::cart::show(config, html)?,
            CartAction::Clear => commands::cart::clear(config)?,
            CartAction::Checkout => return commands::cart::checkout(config).await,
        },
        Commands::Landing { action } => match action {
            LandingAction::Show { toggles } => commands::landing::show(config, &toggles)?,
        },
    }
    Ok(ExitCode::SUCCESS)
}
