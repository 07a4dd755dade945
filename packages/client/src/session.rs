//! WebSocket client session management.

use chatcast_shared::{
    protocol::{ClientEvent, ServerEvent},
    time::SystemClock,
};
use futures_util::{SinkExt, StreamExt};
use rustyline::{DefaultEditor, error::ReadlineError};
use tokio::sync::mpsc;
use tokio_tungstenite::{
    connect_async,
    tungstenite::{self, protocol::Message},
};

use crate::error::ClientError;

use super::{domain::compose_message, formatter::MessageFormatter, ui::redisplay_prompt};

/// Map a handshake failure to a client error.
fn connect_error(error: tungstenite::Error) -> ClientError {
    match error {
        tungstenite::Error::Http(response) => ClientError::Rejected(response.status().as_u16()),
        other => ClientError::ConnectionError(other.to_string()),
    }
}

/// Render one text frame from the server.
fn render_text(text: &str, name: &str) -> String {
    match serde_json::from_str::<ServerEvent>(text) {
        Ok(ServerEvent::ReceiveMessage(message)) => {
            MessageFormatter::format_chat_message(&message, name)
        }
        Ok(ServerEvent::PresenceUpdate { count }) => MessageFormatter::format_presence(count),
        Err(_) => MessageFormatter::format_raw_message(text),
    }
}

/// Run one WebSocket client session until the user exits or the connection is lost
pub async fn run_client_session(url: &str, name: &str) -> Result<(), ClientError> {
    let (ws_stream, _response) = connect_async(url).await.map_err(connect_error)?;

    tracing::info!("Connected to chat server!");
    print!("{}", MessageFormatter::format_connected(name));

    let (mut write, mut read) = ws_stream.split();

    // Spawn a task to handle incoming events
    let name_for_read = name.to_string();
    let mut read_task = tokio::spawn(async move {
        let mut connection_error = false;

        while let Some(message) = read.next().await {
            match message {
                Ok(Message::Text(text)) => {
                    print!("{}", render_text(text.as_str(), &name_for_read));
                    redisplay_prompt(&name_for_read);
                }
                Ok(Message::Binary(data)) => {
                    print!("{}", MessageFormatter::format_binary_message(data.len()));
                    redisplay_prompt(&name_for_read);
                }
                Ok(Message::Close(_)) => {
                    tracing::info!("Server closed the connection");
                    connection_error = true;
                    break;
                }
                Err(e) => {
                    tracing::warn!("WebSocket read error: {}", e);
                    connection_error = true;
                    break;
                }
                _ => {}
            }
        }

        connection_error
    });

    // Create channel for rustyline input
    let (input_tx, mut input_rx) = mpsc::unbounded_channel::<String>();

    // Spawn a blocking thread for rustyline (synchronous readline)
    let prompt = format!("{}> ", name);
    let _readline_handle = std::thread::spawn(move || {
        let mut rl = match DefaultEditor::new() {
            Ok(rl) => rl,
            Err(e) => {
                eprintln!("Failed to initialize readline: {}", e);
                return;
            }
        };

        loop {
            match rl.readline(&prompt) {
                Ok(line) => {
                    if !line.trim().is_empty() {
                        rl.add_history_entry(line.as_str()).ok();
                    }
                    if input_tx.send(line).is_err() {
                        // Channel closed, exit thread
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    // Ctrl+C
                    tracing::info!("Interrupted");
                    break;
                }
                Err(ReadlineError::Eof) => {
                    // Ctrl+D
                    tracing::info!("EOF");
                    break;
                }
                Err(err) => {
                    tracing::error!("Readline error: {}", err);
                    break;
                }
            }
        }
    });

    // Spawn a task to send input lines to the server
    let name_for_write = name.to_string();
    let mut write_task = tokio::spawn(async move {
        let clock = SystemClock;
        let mut write_error = false;

        while let Some(line) = input_rx.recv().await {
            // Blank lines are never sent
            let Some(payload) = compose_message(&name_for_write, &line, &clock) else {
                redisplay_prompt(&name_for_write);
                continue;
            };

            let json = match serde_json::to_string(&ClientEvent::SendMessage(payload)) {
                Ok(json) => json,
                Err(e) => {
                    tracing::error!("Failed to serialize message: {}", e);
                    continue;
                }
            };

            if let Err(e) = write.send(Message::Text(json.into())).await {
                tracing::warn!("Failed to send message: {}", e);
                write_error = true;
                break;
            }
        }

        write_error
    });

    // If any one of the tasks completes, abort the other
    tokio::select! {
        read_result = &mut read_task => {
            write_task.abort();
            if read_result.unwrap_or(false) {
                return Err(ClientError::ConnectionError("Connection lost".to_string()));
            }
        }
        write_result = &mut write_task => {
            read_task.abort();
            if write_result.unwrap_or(false) {
                return Err(ClientError::ConnectionError("Connection lost".to_string()));
            }
        }
    }

    Ok(())
}
