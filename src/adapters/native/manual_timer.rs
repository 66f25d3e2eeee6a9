use crate::domain::notification::WidgetError;
use crate::ports::{TimerId, TimerPort};
use std::cell::{Cell, RefCell};

struct Scheduled {
    id: TimerId,
    due_ms: i64,
    callback: Box<dyn FnOnce()>,
}

/// Timer whose clock only moves when a test advances it.
#[derive(Default)]
pub struct ManualTimer {
    now_ms: Cell<i64>,
    next_id: Cell<i32>,
    scheduled: RefCell<Vec<Scheduled>>,
}

impl ManualTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now_ms(&self) -> i64 {
        self.now_ms.get()
    }

    /// Timeouts scheduled and not yet fired or cleared.
    pub fn pending(&self) -> usize {
        self.scheduled.borrow().len()
    }

    /// Absolute due time of the next timeout, if any.
    pub fn next_due_ms(&self) -> Option<i64> {
        self.scheduled.borrow().iter().map(|s| s.due_ms).min()
    }

    /// Advances the clock by `delta_ms`, firing everything that falls due
    /// in due order. Callbacks may schedule further timeouts; those fire
    /// too if they land inside the advanced window.
    pub fn advance(&self, delta_ms: i64) {
        let target = self.now_ms.get() + delta_ms;
        loop {
            let next = {
                let mut scheduled = self.scheduled.borrow_mut();
                let due_index = scheduled
                    .iter()
                    .enumerate()
                    .filter(|(_, s)| s.due_ms <= target)
                    .min_by_key(|(_, s)| s.due_ms)
                    .map(|(index, _)| index);
                due_index.map(|index| scheduled.remove(index))
            };

            match next {
                Some(timeout) => {
                    if timeout.due_ms > self.now_ms.get() {
                        self.now_ms.set(timeout.due_ms);
                    }
                    (timeout.callback)();
                }
                None => break,
            }
        }
        self.now_ms.set(target);
    }
}

impl TimerPort for ManualTimer {
    fn set_timeout(
        &self,
        callback: Box<dyn FnOnce()>,
        delay_ms: i32,
    ) -> Result<TimerId, WidgetError> {
        let id = TimerId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.scheduled.borrow_mut().push(Scheduled {
            id,
            due_ms: self.now_ms.get() + i64::from(delay_ms.max(0)),
            callback,
        });
        Ok(id)
    }

    fn clear_timeout(&self, id: TimerId) {
        self.scheduled.borrow_mut().retain(|s| s.id != id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    #[test]
    fn test_fires_at_due_time_only() {
        let timer = ManualTimer::new();
        let fired = Rc::new(Cell::new(false));
        let flag = Rc::clone(&fired);
        timer
            .set_timeout(Box::new(move || flag.set(true)), 100)
            .unwrap();

        timer.advance(99);
        assert!(!fired.get());

        timer.advance(1);
        assert!(fired.get());
        assert_eq!(timer.pending(), 0);
    }

    #[test]
    fn test_clear_timeout_cancels() {
        let timer = ManualTimer::new();
        let fired = Rc::new(Cell::new(false));
        let flag = Rc::clone(&fired);
        let id = timer
            .set_timeout(Box::new(move || flag.set(true)), 100)
            .unwrap();

        timer.clear_timeout(id);
        timer.advance(1_000);

        assert!(!fired.get());
    }

    #[test]
    fn test_fires_in_due_order() {
        let timer = ManualTimer::new();
        let order = Rc::new(RefCell::new(Vec::new()));

        for (label, delay) in [("late", 200), ("early", 50), ("middle", 100)] {
            let order = Rc::clone(&order);
            timer
                .set_timeout(Box::new(move || order.borrow_mut().push(label)), delay)
                .unwrap();
        }

        timer.advance(500);
        assert_eq!(*order.borrow(), vec!["early", "middle", "late"]);
    }

    #[test]
    fn test_callback_may_reschedule() {
        let timer = Rc::new(ManualTimer::new());
        let count = Rc::new(Cell::new(0));

        let inner_timer = Rc::clone(&timer);
        let inner_count = Rc::clone(&count);
        timer
            .set_timeout(
                Box::new(move || {
                    inner_count.set(inner_count.get() + 1);
                    let chained = Rc::clone(&inner_count);
                    inner_timer
                        .set_timeout(Box::new(move || chained.set(chained.get() + 1)), 100)
                        .unwrap();
                }),
                100,
            )
            .unwrap();

        timer.advance(200);
        assert_eq!(count.get(), 2);
    }
}
