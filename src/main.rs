use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mission_board::config::AppConfig;
use mission_board::graphql::GraphQlClient;
use mission_board::{aggregator, api, tui};

#[derive(Parser)]
#[command(name = "mission-board")]
#[command(about = "Terminal mission browser with local search")]
struct Cli {
    /// Upstream GraphQL endpoint (overrides config and environment)
    #[arg(long, global = true)]
    endpoint: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch missions and open the interactive browser
    Browse,
    /// Fetch missions and print them as JSON
    Fetch {
        /// Pretty-print the output
        #[arg(short, long)]
        pretty: bool,
    },
    /// Host the aggregation endpoint over HTTP
    Serve {
        /// Port for the HTTP API
        #[arg(short, long)]
        port: Option<u16>,
    },
}

/// Initialize tracing with output to stderr (for modes that own stdout) or stdout
fn init_tracing(use_stderr: bool) {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "mission_board=debug,tower_http=debug".into()),
    );

    if use_stderr {
        // Browse mode draws the UI on stdout; fetch mode prints JSON there
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

/// Endpoint precedence: flag, then environment, then config file, then default.
fn resolve_client(flag: Option<String>, config: &AppConfig) -> GraphQlClient {
    if let Some(endpoint) = flag {
        return GraphQlClient::new(endpoint);
    }
    if let Ok(endpoint) = std::env::var("MISSION_BOARD_GRAPHQL_URL") {
        return GraphQlClient::new(endpoint);
    }
    if let Some(endpoint) = &config.endpoint {
        return GraphQlClient::new(endpoint.clone());
    }
    GraphQlClient::from_env()
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Serve is the only mode whose stdout is free for log lines
    let use_stderr = !matches!(cli.command, Some(Commands::Serve { .. }));
    init_tracing(use_stderr);

    let config = AppConfig::load();
    let client = resolve_client(cli.endpoint, &config);

    match cli.command {
        Some(Commands::Fetch { pretty }) => {
            tracing::info!("Fetching missions from {}", client.endpoint());
            let records = aggregator::aggregate(&client).await?;

            let output = if pretty {
                serde_json::to_string_pretty(&records)?
            } else {
                serde_json::to_string(&records)?
            };
            println!("{}", output);
        }
        Some(Commands::Serve { port }) => {
            let port = port.or(config.port).unwrap_or(3000);
            let app = api::create_router(client);

            let listener = tokio::net::TcpListener::bind(format!("127.0.0.1:{}", port)).await?;
            tracing::info!("Mission Board serving on http://127.0.0.1:{}", port);

            axum::serve(listener, app).await?;
        }
        Some(Commands::Browse) | None => {
            tracing::info!("Fetching missions from {}", client.endpoint());
            let records = aggregator::aggregate(&client).await?;
            tracing::info!("Loaded {} missions", records.len());

            tui::BrowseApp::new(records).run()?;
        }
    }

    Ok(())
}
