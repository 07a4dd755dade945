//! Message formatting utilities for client display.

use chatcast_shared::protocol::ChatPayload;

use super::domain::display_name;

/// Message formatter for client display
pub struct MessageFormatter;

impl MessageFormatter {
    /// Format a chat message as `[time] sender: text`
    ///
    /// # Arguments
    ///
    /// * `message` - The received message
    /// * `own_name` - The local display name (shown as "You")
    pub fn format_chat_message(message: &ChatPayload, own_name: &str) -> String {
        format!(
            "\n[{}] {}: {}\n",
            message.timestamp,
            display_name(&message.user, own_name),
            message.text
        )
    }

    /// Format a presence update
    pub fn format_presence(count: usize) -> String {
        let noun = if count == 1 { "user" } else { "users" };
        format!("\n* {} {} online\n", count, noun)
    }

    /// Format the banner shown after connecting
    pub fn format_connected(name: &str) -> String {
        format!(
            "\nYou are '{}'. Type messages and press Enter to send. Press Ctrl+C to exit.\n",
            name
        )
    }

    /// Format a text frame that is not a known server event
    pub fn format_raw_message(text: &str) -> String {
        format!("\n{}\n", text)
    }

    /// Format a binary frame notification
    pub fn format_binary_message(len: usize) -> String {
        format!("\nReceived binary data: {} bytes\n", len)
    }
}
