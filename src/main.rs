//! sfrest - command line access to a Service Fabric cluster
//!
//! Each subcommand maps onto one client operation and prints its result as
//! JSON or CSV.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sfrest::config::Config;
use sfrest::output::{self, OutputFormat};
use sfrest::{HttpTransport, ServiceFabricClient};

/// sfrest - Service Fabric REST client
#[derive(Parser, Debug)]
#[command(name = "sfrest")]
#[command(about = "Query and manage a Service Fabric cluster over its REST API")]
#[command(version)]
struct Args {
    /// Cluster management endpoint (e.g., http://localhost:19080)
    #[arg(short, long, env = "SF_ENDPOINT")]
    endpoint: Option<String>,

    /// REST API version (defaults to 3.0)
    #[arg(long, env = "SF_API_VERSION")]
    api_version: Option<String>,

    /// Request timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    /// Remember the endpoint as the current cluster
    #[arg(long, default_value = "false")]
    save: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check whether the cluster reports itself healthy
    Health,
    /// List applications
    Apps,
    /// List the services of an application
    Services { app: String },
    /// List the partitions of a service
    Partitions { service_id: String },
    /// List the replicas of a stateful partition
    Replicas { partition_id: String },
    /// List the instances of a stateless partition
    Instances { partition_id: String },
    /// Show the string properties stored under a name
    Properties { name: String },
    /// Decode a service type extension as a label map
    Extension {
        app_type: String,
        app_version: String,
        service_type: String,
        key: String,
    },
    /// Delete an application
    DeleteApp { id: String },
    /// Delete a service
    DeleteService { id: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Set RUST_LOG=sfrest=debug to see requests
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args = Args::parse();

    let mut config = Config::load().context("Failed to load configuration")?;
    let client_config = config
        .resolve(args.endpoint.as_deref(), args.api_version.as_deref())
        .context("No cluster endpoint given. Pass --endpoint or set SF_ENDPOINT")?;

    if args.save {
        config.add_cluster(client_config.endpoint.clone());
        config.save().context("Failed to save configuration")?;
    }

    let transport = match args.timeout {
        Some(secs) => HttpTransport::with_timeout(Duration::from_secs(secs)),
        None => HttpTransport::new(),
    }
    .context("Failed to create HTTP client")?;

    let client = ServiceFabricClient::from_config(Arc::new(transport), &client_config)?;

    run(&client, args.command, args.format).await
}

async fn run(client: &ServiceFabricClient, command: Command, format: OutputFormat) -> Result<()> {
    match command {
        Command::Health => print(&client.get_cluster_health().await?, format),
        Command::Apps => print(&client.get_applications().await?, format),
        Command::Services { app } => print(&client.get_services(&app).await?, format),
        Command::Partitions { service_id } => {
            print(&client.get_partitions(&service_id).await?, format)
        }
        Command::Replicas { partition_id } => {
            print(&client.get_replicas(&partition_id).await?, format)
        }
        Command::Instances { partition_id } => {
            print(&client.get_instances(&partition_id).await?, format)
        }
        Command::Properties { name } => match client.get_properties(&name).await? {
            Some(properties) => print(&properties, format),
            None => anyhow::bail!("Name '{}' does not exist", name),
        },
        Command::Extension {
            app_type,
            app_version,
            service_type,
            key,
        } => {
            let labels = client
                .get_service_extension::<sfrest::models::ServiceExtensionLabels>(
                    &app_type,
                    &app_version,
                    &service_type,
                    &key,
                )
                .await?
                .unwrap_or_default()
                .into_map();
            print(&labels, format)
        }
        Command::DeleteApp { id } => print(&client.delete_application(&id).await?, format),
        Command::DeleteService { id } => print(&client.delete_service(&id).await?, format),
    }
}

fn print<T: Serialize>(value: &T, format: OutputFormat) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    output::render(value, format, &mut out)
}
