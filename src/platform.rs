/// Platform - Dependency injection container for all ports.
///
/// Hybrid approach:
/// - Stateless ports: `&'static` references (zero-cost)
/// - Stateful ports: `Rc<dyn Trait>` (ref-counted; everything runs on the
///   single UI thread and the adapters hold browser handles, so `Rc` is the
///   right count)

use crate::ports::{ApiPort, LoggerPort, StreamPort, TimerPort, ViewPort};
use std::rc::Rc;

#[derive(Clone)]
pub struct Platform {
    logger: &'static dyn LoggerPort,
    api: Rc<dyn ApiPort>,
    view: Rc<dyn ViewPort>,
    timer: Rc<dyn TimerPort>,
    stream: Rc<dyn StreamPort>,
}

impl Platform {
    /// Creates a new Platform around the given stateful ports; the logger
    /// is the compile-time default for the current target.
    pub fn new(
        api: Rc<dyn ApiPort>,
        view: Rc<dyn ViewPort>,
        timer: Rc<dyn TimerPort>,
        stream: Rc<dyn StreamPort>,
    ) -> Self {
        Self {
            logger: crate::adapters::logger(),
            api,
            view,
            timer,
            stream,
        }
    }

    #[inline]
    pub fn logger(&self) -> &'static dyn LoggerPort {
        self.logger
    }

    #[inline]
    pub fn api(&self) -> &dyn ApiPort {
        self.api.as_ref()
    }

    #[inline]
    pub fn view(&self) -> &dyn ViewPort {
        self.view.as_ref()
    }

    #[inline]
    pub fn timer(&self) -> &dyn TimerPort {
        self.timer.as_ref()
    }

    #[inline]
    pub fn stream(&self) -> &dyn StreamPort {
        self.stream.as_ref()
    }
}
