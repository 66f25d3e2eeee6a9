use crate::domain::notification::WidgetError;

/// Handle for a scheduled timeout, usable to cancel it before it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerId(pub i32);

/// Port for one-shot deferred execution.
///
/// The widget schedules two kinds of work through this port: toast
/// auto-removal and stream reconnect attempts. Tests drive it with a
/// manually advanced implementation so no real waiting happens.
pub trait TimerPort {
    /// Runs `callback` once after `delay_ms` milliseconds.
    fn set_timeout(
        &self,
        callback: Box<dyn FnOnce()>,
        delay_ms: i32,
    ) -> Result<TimerId, WidgetError>;

    /// Cancels a scheduled timeout. Expired or unknown ids are a no-op.
    fn clear_timeout(&self, id: TimerId);
}
