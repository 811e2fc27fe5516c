//! Command line definition

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, ValueEnum};
use codec::{
    Direction, Payload, RequestPayload, decode_response_payload, encode_request_payload,
    normalize_identifier_fields_deep, parse_trusted_json,
};

pub const SESSION_FILE_VAR: &str = "AGRI_SESSION_FILE";
pub const DEFAULT_SESSION_FILE: &str = ".agri-session.json";

#[derive(Parser)]
#[command(
    name = "agri",
    about = "Command line client for the agricultural trade marketplace",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Parser)]
pub enum Command {
    /// Sign in and remember the session
    Login {
        username: String,
        password: String,
    },

    /// Sign out and forget the session
    Logout,

    /// Show the signed-in user
    Whoami,

    /// GET an API path and print the normalized data
    Get {
        /// API path, e.g. /api/farmer/products/my
        path: String,

        /// Query parameter, repeatable
        #[arg(long, short = 'q', value_name = "KEY=VALUE", value_parser = parse_query_pair)]
        query: Vec<(String, String)>,
    },

    /// Run a local JSON file through an identifier normalization
    Normalize {
        /// JSON document to read
        file: PathBuf,

        #[arg(long, short = 'd', value_enum, default_value = "response")]
        direction: DirectionArg,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DirectionArg {
    /// Allowlisted id fields to decimal strings
    ToString,
    /// `id` / `*Id` / `*ID` fields, and every other scalar leaf, to big integers
    ToNumeric,
    /// Outgoing request body rule
    Request,
    /// Incoming response body rule
    Response,
}

impl DirectionArg {
    pub fn apply(self, document: Payload) -> Payload {
        match self {
            DirectionArg::ToString => {
                normalize_identifier_fields_deep(document, Direction::ToDecimalString)
            }
            DirectionArg::ToNumeric => {
                normalize_identifier_fields_deep(document, Direction::ToNumeric)
            }
            DirectionArg::Request => match encode_request_payload(document.into()) {
                RequestPayload::Document(document) => document,
                RequestPayload::Form(_) => Payload::Null,
            },
            DirectionArg::Response => decode_response_payload(document),
        }
    }
}

/// Read a JSON file and run it through `direction`
pub async fn normalize_file(file: &Path, direction: DirectionArg) -> anyhow::Result<Payload> {
    let text = tokio::fs::read_to_string(file)
        .await
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let document = parse_trusted_json(&text)?;
    Ok(direction.apply(document))
}

fn parse_query_pair(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected KEY=VALUE, got '{raw}'")),
    }
}

/// Session file location from an environment lookup
pub fn session_file(lookup: impl Fn(&str) -> Option<String>) -> PathBuf {
    lookup(SESSION_FILE_VAR)
        .filter(|p| !p.trim().is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SESSION_FILE))
}
