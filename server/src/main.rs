mod config;
mod http;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use crm_core::EntityStore;
use estate_api::{
    actions::LoggingActions,
    schema::{AppSchema, CrmData, build_schema},
};
use platform_obs::{ObsConfig, init_tracing};
use tokio::sync::RwLock;
use tracing::info;

use crate::{
    config::AppConfig,
    http::{AppState, ServeConfig},
};

#[derive(Parser, Debug)]
#[command(name = "estate-server", version, about = "EstateFlow Real Estate CRM")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP + GraphQL server.
    Serve(ServeCommand),
    /// Print the GraphQL schema SDL.
    #[command(name = "schema:print")]
    SchemaPrint {
        #[arg(long, value_name = "FILE", help = "Destination file path")]
        output: Option<PathBuf>,
    },
    /// Print a summary of the seeded demo collections.
    #[command(name = "seed:summary")]
    SeedSummary,
}

#[derive(Args, Debug)]
struct ServeCommand {
    #[arg(long, default_value = "0.0.0.0")]
    host: std::net::IpAddr,
    #[arg(long, default_value_t = 8080)]
    port: u16,
}

impl From<ServeCommand> for ServeConfig {
    fn from(value: ServeCommand) -> Self {
        ServeConfig::new(value.host, value.port)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing(ObsConfig::from_env())?;
    let cli = Cli::parse();
    let app_config = Arc::new(AppConfig::load()?);
    match cli.command {
        Command::Serve(cmd) => run_server(cmd, app_config).await,
        Command::SchemaPrint { output } => schema_print(output, &app_config),
        Command::SeedSummary => seed_summary(),
    }
}

fn demo_schema(config: &AppConfig) -> AppSchema {
    build_schema(CrmData {
        store: Arc::new(RwLock::new(EntityStore::demo())),
        actions: Arc::new(LoggingActions),
        default_agent_target: config.default_agent_target,
    })
}

async fn run_server(cmd: ServeCommand, config: Arc<AppConfig>) -> Result<()> {
    let AppSchema(schema) = demo_schema(&config);
    let state = AppState {
        schema,
        config: config.clone(),
    };
    http::serve(cmd.into(), state).await
}

fn schema_print(path: Option<PathBuf>, config: &AppConfig) -> Result<()> {
    let AppSchema(schema) = demo_schema(config);
    let sdl = schema.sdl();
    match path {
        Some(target) => {
            std::fs::write(&target, sdl)
                .with_context(|| format!("failed to write {}", target.display()))?;
            info!(path = %target.display(), "schema snapshot written");
        }
        None => println!("{sdl}"),
    }
    Ok(())
}

fn seed_summary() -> Result<()> {
    let store = EntityStore::demo();
    let summary = serde_json::json!({
        "leads": store.leads.len(),
        "properties": store.properties.len(),
        "clients": store.clients.len(),
        "deals": store.deals.len(),
        "tasks": store.tasks.len(),
        "users": store.users.len(),
        "totalRevenue": store.metrics.total_revenue,
    });
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
