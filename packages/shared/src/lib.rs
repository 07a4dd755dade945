//! Code shared by the Chatcast server and client.
//!
//! - `protocol`: WebSocket wire events exchanged between client and server
//! - `logger`: tracing subscriber setup
//! - `time`: clock abstraction and time label formatting

pub mod logger;
pub mod protocol;
pub mod time;
