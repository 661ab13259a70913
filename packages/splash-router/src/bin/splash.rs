//! Dev CLI for the splash router
//!
//! Runs the launch-time routing against an in-memory store seeded from flags,
//! and mints or inspects unsigned fixture tokens. Outputs JSON.

use anyhow::{Context, Result};
use async_trait::async_trait;
use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::{Map, Value};
use splash_router::kernel::{BaseNavigator, FixedClock, InMemoryKeyValueStore, StorageKey};
use splash_router::{
    decode, encode_unsigned, RoutingDecision, SplashConfig, SplashFlow, TokenClaims,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "splash")]
#[command(about = "Splash screen routing CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Route a stored session and print the destination screen
    Run {
        /// Stored `isFirstLaunch` value (omit to simulate a first launch)
        #[arg(long)]
        first_launch_flag: Option<String>,
        /// Stored `jwtToken` value
        #[arg(long)]
        token: Option<String>,
        /// Stored `userType` value
        #[arg(long)]
        user_type: Option<String>,
        /// Pin "now" (epoch seconds) instead of reading the wall clock
        #[arg(long)]
        now: Option<i64>,
        /// Skip the splash delay
        #[arg(long)]
        no_delay: bool,
    },

    /// Mint an unsigned token expiring at `exp` (epoch seconds)
    Mint {
        #[arg(long)]
        exp: i64,
        #[arg(long)]
        sub: Option<String>,
    },

    /// Decode a token's payload without verifying it
    Decode { token: String },
}

// ============================================================================
// JSON Response Types
// ============================================================================

#[derive(Serialize)]
struct RunResponse {
    decision: RoutingDecision,
    screen: &'static str,
    first_launch_flag: Option<String>,
}

#[derive(Serialize)]
struct MintResponse {
    token: String,
}

#[derive(Serialize)]
struct DecodeResponse {
    claims: TokenClaims,
}

// ============================================================================
// Navigator
// ============================================================================

/// Navigator that only logs; the CLI prints the decision itself.
struct LoggingNavigator;

#[async_trait]
impl BaseNavigator for LoggingNavigator {
    async fn replace(&self, screen_name: &str) -> Result<()> {
        tracing::info!(screen = screen_name, "navigator.replace");
        Ok(())
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so stdout stays parseable JSON
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,splash_router=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            first_launch_flag,
            token,
            user_type,
            now,
            no_delay,
        } => {
            let config = if no_delay {
                SplashConfig::immediate()
            } else {
                SplashConfig::from_env().context("Failed to load configuration")?
            };

            let mut store = InMemoryKeyValueStore::new();
            for (key, value) in [
                (StorageKey::IsFirstLaunch, first_launch_flag),
                (StorageKey::JwtToken, token),
                (StorageKey::UserType, user_type),
            ] {
                if let Some(value) = value {
                    store = store.with_entry(key.as_str(), &value);
                }
            }

            let mut flow =
                SplashFlow::new(Arc::new(store.clone()), Arc::new(LoggingNavigator), config);
            if let Some(now) = now {
                flow = flow.with_clock(Arc::new(FixedClock(now)));
            }

            let decision = flow.run().await.context("Splash flow failed")?;
            print_json(&RunResponse {
                decision,
                screen: decision.screen_name(),
                first_launch_flag: store.value(StorageKey::IsFirstLaunch.as_str()),
            })
        }
        Commands::Mint { exp, sub } => {
            let mut payload = Map::new();
            if let Some(sub) = sub {
                payload.insert("sub".to_string(), Value::String(sub));
            }
            payload.insert("exp".to_string(), Value::from(exp));
            print_json(&MintResponse {
                token: encode_unsigned(&payload),
            })
        }
        Commands::Decode { token } => {
            let claims = decode(&token).context("Token is malformed")?;
            print_json(&DecodeResponse { claims })
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize response")?;
    println!("{}", json);
    Ok(())
}
