use std::net::SocketAddr;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;

use boxscore_config::Config;
use boxscore_gateway::GatewayState;
use boxscore_logging::init_logger;

#[derive(Parser)]
#[command(name = "boxscore")]
#[command(about = "Boxscore sports intelligence agent gateway")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the gateway HTTP server
    Serve {
        /// Port to bind the HTTP server to
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Show current gateway status
    Status,
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env();
    init_logger("logs", &config.log_level);

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { port } => {
            let config = Config {
                port: port.unwrap_or(config.port),
                ..config
            };
            run_server(config).await?;
        }
        Commands::Status => {
            let client = reqwest::Client::new();
            match client
                .get(format!("http://localhost:{}/api/health", config.port))
                .send()
                .await
            {
                Ok(resp) => {
                    let body: serde_json::Value = resp.json().await?;
                    println!("{}", serde_json::to_string_pretty(&body)?);
                }
                Err(_) => {
                    println!("Boxscore is not running on port {}", config.port);
                }
            }
        }
    }

    Ok(())
}

async fn run_server(config: Config) -> Result<()> {
    info!(
        port = config.port,
        bind = %config.bind_address,
        backend = %config.backend_base_url,
        "Starting Boxscore gateway"
    );

    let addr: SocketAddr = format!("{}:{}", config.bind_address, config.port).parse()?;
    let state = GatewayState::from_config(config);

    info!(
        agents = state.registry.len(),
        providers = ?state.chain.provider_names(),
        "Agent registry ready"
    );

    boxscore_gateway::start_server(addr, state).await
}
