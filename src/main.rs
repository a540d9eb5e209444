//! staticd — static file HTTP server with access logging.
//!
//! ```text
//! process start
//!     → parse CLI flags
//!     → resolve root path (~ expansion, normalization)
//!     → bind listener (failure: exit 1, no banner)
//!     → serve, one access-log line per request
//!     → on SIGINT/SIGTERM/SIGQUIT: close listener, exit 0
//! ```

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use staticd::config::ServerConfig;
use staticd::http::Server;
use staticd::lifecycle;

#[derive(Parser)]
#[command(name = "staticd")]
#[command(about = "Serve static files over HTTP with access logging", long_about = None)]
struct Cli {
    /// Server root directory; a leading `~` expands to $HOME.
    #[arg(long, default_value = ".")]
    path: String,

    /// Server listen address.
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Server listen port.
    #[arg(long, default_value_t = 8080)]
    port: u16,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Diagnostics go to stderr; stdout is reserved for access-log lines.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "staticd=info,tower_http=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = ServerConfig::new(&cli.path, cli.host, cli.port);

    tracing::info!(
        root = %config.root.display(),
        host = %config.host,
        port = config.port,
        "configuration loaded"
    );

    let server = match Server::bind(&config).await {
        Ok(server) => server,
        Err(error) => {
            eprintln!("An error occurred: {error}");
            return ExitCode::FAILURE;
        }
    };

    println!("Serving HTTP on {} port {}...", config.host.trim(), config.port);

    match server.serve(lifecycle::shutdown_signal()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("An error occurred: {error}");
            ExitCode::FAILURE
        }
    }
}
