/// Delay before a reconnect attempt after a stream error.
pub const RECONNECT_DELAY_MS: i32 = 5_000;

/// Connection state of the push stream. There is no terminal state; the
/// client cycles between these two for the lifetime of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamState {
    Disconnected,
    Connected,
}

/// Reconnect policy: a fixed delay, no backoff, no retry cap.
///
/// Injectable so tests can shrink the delay; time itself is simulated
/// through the timer port.
#[derive(Debug, Clone, Copy)]
pub struct ReconnectPolicy {
    delay_ms: i32,
}

impl ReconnectPolicy {
    pub fn fixed(delay_ms: i32) -> Self {
        Self { delay_ms }
    }

    pub fn delay_ms(&self) -> i32 {
        self.delay_ms
    }
}

impl Default for ReconnectPolicy {
    fn default() -> Self {
        Self::fixed(RECONNECT_DELAY_MS)
    }
}
