//! Broadcast chat server.
//!
//! Relays every chat message to all connected clients and broadcasts the
//! number of connected clients whenever it changes.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin chatcast-server
//! cargo run --bin chatcast-server -- --host 0.0.0.0 --port 3001 --allowed-origin http://localhost:3000
//! ```

use chatcast_server::{
    build_server,
    config::{DEFAULT_ALLOWED_ORIGIN, DEFAULT_PORT, ServerConfig},
};
use chatcast_shared::logger::setup_logger;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "chatcast-server")]
#[command(about = "WebSocket chat server with broadcast and presence support", long_about = None)]
struct Args {
    /// Host address to bind the server to
    #[arg(short = 'H', long, default_value = "127.0.0.1")]
    host: String,

    /// Port number to bind the server to
    #[arg(short = 'p', long, default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Origin allowed to connect from a browser
    #[arg(short = 'o', long, default_value = DEFAULT_ALLOWED_ORIGIN)]
    allowed_origin: String,
}

impl From<Args> for ServerConfig {
    fn from(args: Args) -> Self {
        Self {
            host: args.host,
            port: args.port,
            allowed_origin: args.allowed_origin,
        }
    }
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "debug");

    let config = ServerConfig::from(Args::parse());

    let server = match build_server(&config) {
        Ok(server) => server,
        Err(e) => {
            tracing::error!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = server.run(config.host, config.port).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
