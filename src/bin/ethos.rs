//! Ethos person hold CLI binary.
//!
//! A command-line interface for reading and ending Colleague person holds.

use chrono::{DateTime, Utc};
use clap::Parser;
use ethos_client::cli::{Cli, Command, HoldTypeArgs};
use ethos_client::{EthosClient, HoldType, PersonHold, PrettyPrint};
use serde::Serialize;
use std::process::ExitCode;
use tabled::{Table, Tabled};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match cli.config() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("Hint: Set ETHOS_PROXY_URL and ETHOS_API_KEY environment variables");
            return ExitCode::FAILURE;
        }
    };

    let client = match EthosClient::connect(&config).await {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    match run(&client, cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(client: &EthosClient, cli: Cli) -> ethos_client::Result<()> {
    let json = cli.json;
    match cli.command {
        Command::Person { rcid } => {
            let person = client.get_person_by_external_id(&rcid).await?;
            output_single(&person, json)?;
        }
        Command::Holds { id, guid } => {
            let holds = if guid {
                client.get_holds_by_person_guid(&id).await?
            } else {
                client.get_holds_by_external_id(&id).await?
            };
            output_list::<_, HoldRow>(&holds, json)?;
        }
        Command::Hold { rcid, hold_type } => {
            let type_guid = resolve_type_guid(client, &hold_type).await?;
            let hold = client
                .get_hold_by_external_id_and_type_guid(&rcid, &type_guid)
                .await?;
            output_single(&hold, json)?;
        }
        Command::HoldTypes => {
            let types = client.list_hold_types().await?;
            output_list::<_, HoldTypeRow>(&types, json)?;
        }
        Command::HoldType { code } => {
            let guid = client.get_hold_type_guid_by_code(&code).await?;
            if json {
                println!("{}", serde_json::json!({ "code": code, "id": guid }));
            } else {
                println!("{guid}");
            }
        }
        Command::EndHold {
            rcid,
            hold_type,
            comment,
        } => {
            let hold = match hold_type {
                HoldTypeArgs {
                    type_code: Some(code),
                    ..
                } => {
                    client
                        .end_hold_by_external_id_and_type_code(&rcid, &code, &comment)
                        .await?
                }
                other => {
                    let type_guid = resolve_type_guid(client, &other).await?;
                    client
                        .end_hold_by_external_id_and_type_guid(&rcid, &type_guid, &comment)
                        .await?
                }
            };
            output_single(&hold, json)?;
        }
    }
    Ok(())
}

async fn resolve_type_guid(
    client: &EthosClient,
    hold_type: &HoldTypeArgs,
) -> ethos_client::Result<String> {
    // clap guarantees exactly one selector
    match &hold_type.type_guid {
        Some(guid) => Ok(guid.clone()),
        None => {
            let code = hold_type.type_code.as_deref().unwrap_or_default();
            client.get_hold_type_guid_by_code(code).await
        }
    }
}

fn output_single<T: Serialize + PrettyPrint>(item: &T, json: bool) -> ethos_client::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(item)?);
    } else {
        println!("{}", item.pretty_print());
    }
    Ok(())
}

fn output_list<'a, T, R>(items: &'a [T], json: bool) -> ethos_client::Result<()>
where
    T: Serialize,
    R: Tabled + From<&'a T>,
{
    if json {
        println!("{}", serde_json::to_string_pretty(items)?);
    } else {
        let rows: Vec<R> = items.iter().map(R::from).collect();
        println!("{}", Table::new(rows));
        println!("\n{} total", items.len());
    }
    Ok(())
}

// Table row types for non-JSON output

#[derive(Tabled)]
struct HoldRow {
    id: String,
    #[tabled(rename = "type")]
    type_guid: String,
    start: String,
    end: String,
    comment: String,
}

impl From<&PersonHold> for HoldRow {
    fn from(h: &PersonHold) -> Self {
        Self {
            id: h.guid().unwrap_or_default().to_string(),
            type_guid: h.type_guid().unwrap_or_default().to_string(),
            start: day(h.starts_at(), h.start_on.as_deref()),
            end: day(h.ends_at(), h.end_on.as_deref()),
            comment: h.comment.clone().unwrap_or_default(),
        }
    }
}

/// Date part of a hold timestamp, falling back to the raw value.
fn day(parsed: Option<DateTime<Utc>>, raw: Option<&str>) -> String {
    match parsed {
        Some(t) => t.format("%Y-%m-%d").to_string(),
        None => raw.unwrap_or_default().to_string(),
    }
}

#[derive(Tabled)]
struct HoldTypeRow {
    code: String,
    id: String,
    title: String,
}

impl From<&HoldType> for HoldTypeRow {
    fn from(t: &HoldType) -> Self {
        Self {
            code: t.code.clone(),
            id: t.id.clone(),
            title: t.title.clone().unwrap_or_default(),
        }
    }
}
