//! labdesk - identity administration CLI
//!
//! A command-line interface for the lab dashboard identity service.
//!
//! # Examples
//!
//! ```bash
//! # List identities
//! labdesk identity list --search tech --pretty
//!
//! # Create an identity
//! labdesk identity create --email t@lab.example --name "Tech" \
//!     --alias t --password secret --grant workbench
//!
//! # Block an identity
//! labdesk identity update <id> --status blocked
//! ```

mod cli;
mod commands;
mod identity_commands;
mod logger;

use crate::{cli::Cli, commands::Commands, identity_commands::IdentityCommands};

use labdesk_client::{
    ClientError, ClientResult, IdentityClient, IdentityCreateBody, IdentityUpdateBody, ListQuery,
    SortDirection,
};
use labdesk_core::{IdentityStatus, PermissionMap, RoleKey, RoleSet};

use std::io::IsTerminal;
use std::process::ExitCode;
use std::str::FromStr;
use std::time::Duration;

use clap::Parser;
use serde_json::{json, Value};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match labdesk_config::Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading config: {e}");
            return ExitCode::FAILURE;
        }
    };
    if let Err(e) = config.validate() {
        eprintln!("Invalid config: {e}");
        return ExitCode::FAILURE;
    }

    if let Err(e) = logger::initialize(
        config.logging.level,
        config.logging.file.clone(),
        std::io::stderr().is_terminal(),
    ) {
        eprintln!("Error initializing logger: {e}");
    }

    // Explicit flag wins over configured server
    let server_url = cli.server.unwrap_or_else(|| config.api.server_url.clone());
    let actor_id = cli.actor_id.or_else(|| config.api.actor_id.clone());
    let client = match IdentityClient::with_timeout(
        &server_url,
        actor_id.as_deref(),
        Duration::from_secs(config.api.timeout_secs),
    ) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Error building HTTP client: {e}");
            return ExitCode::FAILURE;
        }
    };

    let result = match cli.command {
        Commands::Identity { action } => run_identity(&client, action).await,
    };

    match result {
        Ok(value) => {
            let output = if cli.pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(json) => {
                    println!("{}", json);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error serializing response: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run_identity(client: &IdentityClient, action: IdentityCommands) -> ClientResult<Value> {
    match action {
        IdentityCommands::List {
            page,
            items_per_page,
            sort_column,
            sort_direction,
            search,
            entity_type,
        } => {
            let sort_direction = sort_direction
                .as_deref()
                .map(parse_sort_direction)
                .transpose()?;
            let query = ListQuery {
                page,
                items_per_page,
                sort_column,
                sort_direction,
                search,
                entity_type,
            };

            let response = client.list(&query).await?;
            let meta = response.meta().copied();
            let items = response.into_result()?;
            Ok(json!({ "data": items, "pagination": meta }))
        }

        IdentityCommands::Show { id } => {
            let identity = client.detail(&id).await?.into_result()?;
            Ok(serde_json::to_value(identity)?)
        }

        IdentityCommands::Create {
            email,
            name,
            alias,
            password,
            grants,
            status,
            permissions,
        } => {
            let mut roles = RoleSet::all_false();
            for grant in &grants {
                roles.grant(parse_role(grant)?);
            }

            let body = IdentityCreateBody {
                email,
                identity_name: name,
                alias,
                password,
                roles,
                permissions: permissions
                    .as_deref()
                    .map(parse_permissions)
                    .transpose()?
                    .unwrap_or_default(),
                identity_status: parse_status(&status)?,
            };

            let created = client.create(&body).await?.into_result()?;
            Ok(serde_json::to_value(created)?)
        }

        IdentityCommands::Update {
            id,
            email,
            name,
            alias,
            password,
            grants,
            revokes,
            status,
            permissions,
        } => {
            // Role flags send the full map, seeded all-false then patched
            let roles = if grants.is_empty() && revokes.is_empty() {
                None
            } else {
                let mut roles = RoleSet::all_false();
                for grant in &grants {
                    roles.grant(parse_role(grant)?);
                }
                for revoke in &revokes {
                    roles.revoke(parse_role(revoke)?);
                }
                Some(roles)
            };

            let body = IdentityUpdateBody {
                identity_id: id,
                email,
                identity_name: name,
                alias,
                password,
                roles,
                permissions: permissions.as_deref().map(parse_permissions).transpose()?,
                identity_status: status.as_deref().map(parse_status).transpose()?,
            };

            let updated = client.update(&body).await?.into_result()?;
            Ok(serde_json::to_value(updated)?)
        }

        IdentityCommands::Delete { id } => {
            let receipt = client.delete(&id).await?.into_result()?;
            Ok(serde_json::to_value(receipt)?)
        }
    }
}

fn parse_sort_direction(s: &str) -> ClientResult<SortDirection> {
    match s {
        "asc" => Ok(SortDirection::Asc),
        "desc" => Ok(SortDirection::Desc),
        other => Err(ClientError::validation(format!(
            "invalid sort direction: {other} (expected asc or desc)"
        ))),
    }
}

fn parse_role(s: &str) -> ClientResult<RoleKey> {
    RoleKey::from_str(s).map_err(|e| ClientError::validation(e.to_string()))
}

fn parse_status(s: &str) -> ClientResult<IdentityStatus> {
    IdentityStatus::from_str(s).map_err(|e| ClientError::validation(e.to_string()))
}

fn parse_permissions(text: &str) -> ClientResult<PermissionMap> {
    match serde_json::from_str::<Value>(text)? {
        Value::Object(map) => Ok(map),
        _ => Err(ClientError::validation(
            "permissions must be a JSON object",
        )),
    }
}
