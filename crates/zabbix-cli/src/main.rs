//! Zabbix command-line client
//!
//! Thin front end over `zabbix-api`: reads connection settings, logs in,
//! runs one query and prints the records.

mod config;
mod render;

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use zabbix_api::{Api, Params};
use zabbix_rpc::{ClientConfig, HttpTransport};
use zabbix_types::ValueType;

use crate::render::write_records;

#[derive(Parser)]
#[command(name = "zbx")]
#[command(about = "Query and operate a Zabbix server over its JSON-RPC API")]
#[command(version)]
#[command(after_help = "\
Examples:
  zbx version                       Show the server API version
  zbx hosts                         List hosts
  zbx items --host-id 10084         List items of a host
  zbx triggers --host-id 10084      List triggers of a host
  zbx exec 1 10084                  Run global script 1 on host 10084
  zbx history 23296 --limit 10      Show the latest values of an item
  zbx --json templates              Print templates as JSON

Connection settings come from config.json in the user config directory
and may be overridden with ZABBIX_URL, ZABBIX_USER, ZABBIX_PASSWORD and
ZABBIX_API_TOKEN.
")]
struct Cli {
    /// Path to a config file instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print decoded records as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug, PartialEq)]
enum Commands {
    /// Show the server API version
    Version,

    /// List hosts
    Hosts {
        /// Only hosts in these host groups
        #[arg(long = "group-id")]
        group_ids: Vec<String>,
    },

    /// List items
    Items {
        #[arg(long)]
        host_id: Option<String>,

        #[arg(long)]
        application_id: Option<String>,
    },

    /// List triggers
    Triggers {
        #[arg(long)]
        host_id: Option<String>,
    },

    /// List templates
    Templates,

    /// List proxies
    Proxies,

    /// List global scripts
    Scripts,

    /// Run a global script on a host
    Exec { script_id: String, host_id: String },

    /// Show collected values of an item
    History {
        item_id: String,

        /// Number of values to fetch
        #[arg(long, default_value_t = 100)]
        limit: u32,

        /// History table: 0 float, 1 character, 2 log, 3 unsigned, 4 text
        #[arg(long, default_value_t = 0)]
        value_type: i64,
    },
}

impl Commands {
    fn needs_login(&self) -> bool {
        !matches!(self, Commands::Version)
    }
}

fn setup_logging() {
    let default_level = if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "zbx={default_level},zabbix_rpc={default_level},zabbix_api={default_level}"
        ))
    });

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
        .with(filter)
        .init();
}

/// Build the transport and open a session unless an API token is configured.
async fn connect(config: &ClientConfig, login: bool) -> Result<(HttpTransport, bool)> {
    let transport = HttpTransport::new(config).context("Invalid connection settings")?;

    if login
        && config.api_token.is_none()
        && let Some((user, password)) = config.credentials()
    {
        transport
            .login(user, password)
            .await
            .with_context(|| format!("Login to {} failed", config.url))?;
        return Ok((transport, true));
    }

    Ok((transport, false))
}

async fn run(api: &Api<HttpTransport>, command: Commands, json: bool) -> Result<()> {
    let mut out = Vec::new();

    match command {
        Commands::Version => {
            let version = api.version().await.context("apiinfo.version failed")?;
            writeln!(out, "{version}")?;
        }
        Commands::Hosts { group_ids } => {
            let hosts = if group_ids.is_empty() {
                api.hosts().get(Params::new()).await
            } else {
                api.hosts().get_by_host_group_ids(&group_ids).await
            };
            write_records(&mut out, &hosts.context("host.get failed")?, json)?;
        }
        Commands::Items {
            host_id,
            application_id,
        } => {
            let mut params = Params::new();
            if let Some(id) = host_id {
                params.insert("hostids", id);
            }
            if let Some(id) = application_id {
                params.insert("applicationids", id);
            }
            let items = api.items().get(params).await.context("item.get failed")?;
            write_records(&mut out, &items, json)?;
        }
        Commands::Triggers { host_id } => {
            let triggers = match host_id {
                Some(id) => api.triggers().get_by_host_id(&id).await,
                None => api.triggers().get(Params::new()).await,
            };
            write_records(&mut out, &triggers.context("trigger.get failed")?, json)?;
        }
        Commands::Templates => {
            let templates = api
                .templates()
                .get(Params::new())
                .await
                .context("template.get failed")?;
            write_records(&mut out, &templates, json)?;
        }
        Commands::Proxies => {
            let proxies = api
                .proxies()
                .get(Params::new())
                .await
                .context("proxy.get failed")?;
            write_records(&mut out, &proxies, json)?;
        }
        Commands::Scripts => {
            let scripts = api
                .scripts()
                .get(Params::new())
                .await
                .context("script.get failed")?;
            write_records(&mut out, &scripts, json)?;
        }
        Commands::Exec { script_id, host_id } => {
            let outcome = api
                .scripts()
                .execute(&script_id, &host_id)
                .await
                .context("script.execute failed")?;
            write_records(&mut out, std::slice::from_ref(&outcome), json)?;
        }
        Commands::History {
            item_id,
            limit,
            value_type,
        } => {
            let value_type = ValueType::from(value_type);
            if !value_type.is_known() {
                bail!("{value_type} is not a history table");
            }
            let rows = api
                .history()
                .get_by_item_id(&item_id, value_type, limit)
                .await
                .context("history.get failed")?;
            write_records(&mut out, &rows, json)?;
        }
    }

    std::io::stdout().lock().write_all(&out)?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging();

    let config = config::load(cli.config.as_deref())?;
    debug!("Using {config:?}");

    let (transport, logged_in) = connect(&config, cli.command.needs_login()).await?;
    let api = Api::new(transport);

    let result = run(&api, cli.command, cli.json).await;

    if logged_in && let Err(e) = api.transport().logout().await {
        debug!("Logout failed: {e}");
    }

    result
}
