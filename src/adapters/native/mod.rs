/// Host-side adapters. The domain layer is exercised off-wasm through
/// these: a real stdout logger plus deliberate test doubles for the timer,
/// API, view and stream ports.

pub mod console_logger;
pub mod manual_timer;
pub mod recording_view;
pub mod scripted_api;
pub mod scripted_stream;

pub use console_logger::ConsoleLogger;
pub use manual_timer::ManualTimer;
pub use recording_view::{RecordingView, ViewEvent};
pub use scripted_api::ScriptedApi;
pub use scripted_stream::ScriptedStream;
