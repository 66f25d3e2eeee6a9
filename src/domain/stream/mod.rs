pub mod client;
pub mod policy;

pub use client::StreamClient;
pub use policy::{ReconnectPolicy, StreamState, RECONNECT_DELAY_MS};
