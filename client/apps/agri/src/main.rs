//! Marketplace CLI Entry Point
//!
//! Uses `anyhow` for startup and command errors; everything below the
//! command layer reports `kernel::error::AppError`.

mod cli;

use std::env;
use std::sync::Arc;

use clap::Parser;
use codec::Payload;
use kernel::error::app_error::AppResult;
use market::models::LoginRequest;
use market::{MarketApi, SignInUseCase, SignOutUseCase};
use platform::{ApiConfig, FileSessionStore, HttpTransport, SessionContext, SessionStore};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::{Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "agri=info,platform=info,market=info,codec=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    // Local commands need neither the backend nor a session
    if let Command::Normalize { file, direction } = &cli.command {
        print_json(&cli::normalize_file(file, *direction).await?)?;
        return Ok(());
    }

    let config = ApiConfig::from_env();
    let store = Arc::new(FileSessionStore::new(cli::session_file(|key| {
        env::var(key).ok()
    })));
    let session = SessionContext::restore(store.as_ref()).await?;
    let transport = HttpTransport::new(config, session.clone())?;
    let api = Arc::new(MarketApi::new(transport));

    tracing::debug!(
        base_url = %api.transport().config().base_url,
        authenticated = session.is_authenticated(),
        "Client ready"
    );

    match run(cli.command, api, store.clone(), session).await {
        Ok(()) => Ok(()),
        Err(e) => {
            if e.is_unauthorized() {
                store.clear().await?;
            }
            Err(e.into())
        }
    }
}

async fn run(
    command: Command,
    api: Arc<MarketApi>,
    store: Arc<FileSessionStore>,
    session: SessionContext,
) -> AppResult<()> {
    match command {
        Command::Login { username, password } => {
            let use_case = SignInUseCase::new(api, store, session);
            let signed_in = use_case
                .execute(LoginRequest::new(username, password))
                .await?;
            println!(
                "Signed in as {} ({})",
                signed_in.username.as_deref().unwrap_or("?"),
                signed_in.role.as_deref().unwrap_or("?")
            );
        }
        Command::Logout => {
            SignOutUseCase::new(api, store, session).execute().await?;
            println!("Signed out");
        }
        Command::Whoami => match session.current() {
            Some(current) if !current.is_expired() => {
                let fields: [(&str, Payload); 4] = [
                    ("userId", current.user_id.into()),
                    ("username", current.username.into()),
                    ("role", current.role.into()),
                    (
                        "expiresAt",
                        current.expires_at.map(|at| at.to_rfc3339()).into(),
                    ),
                ];
                print_json(&Payload::object(fields))?;
            }
            _ => println!("Not signed in"),
        },
        Command::Get { path, query } => {
            let data = api.transport().get(&path, &query).await?;
            print_json(&data)?;
        }
        Command::Normalize { .. } => {}
    }
    Ok(())
}

fn print_json(payload: &Payload) -> AppResult<()> {
    println!("{}", serde_json::to_string_pretty(payload)?);
    Ok(())
}
