//! Terminal chat client.
//!
//! Connects to a Chatcast server, sends every line typed on stdin as a chat
//! message and prints every message and presence update broadcast by the server.
//! Automatically reconnects on disconnection (max 5 attempts with 5 second interval).
//!
//! Run with:
//! ```not_rust
//! cargo run --bin chatcast-client -- --name Alice
//! cargo run --bin chatcast-client -- -n Bob -u ws://127.0.0.1:3001/ws
//! ```

use clap::Parser;

use chatcast_shared::logger::setup_logger;

#[derive(Parser, Debug)]
#[command(name = "chatcast-client")]
#[command(about = "WebSocket chat client for broadcast chat", long_about = None)]
struct Args {
    /// Display name shown with your messages (not unique, not verified)
    #[arg(short = 'n', long)]
    name: String,

    /// WebSocket server URL
    #[arg(short = 'u', long, default_value = "ws://127.0.0.1:3001/ws")]
    url: String,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "info");

    let args = Args::parse();

    if let Err(e) = chatcast_client::run_client(args.url, args.name).await {
        tracing::error!("Client error: {}", e);
        std::process::exit(1);
    }
}
