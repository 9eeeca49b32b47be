//! Trailing-edge debounce over a pluggable timer.

use std::cell::RefCell;

use gloo_timers::callback::Timeout;

/// Starts one-shot timers. Dropping a handle must cancel its timer.
pub trait TimerSource {
    type Handle;

    fn start(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Self::Handle;
}

/// Browser timers via `setTimeout`.
pub struct GlooTimers;

impl TimerSource for GlooTimers {
    type Handle = Timeout;

    fn start(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(delay_ms, callback)
    }
}

/// Runs only the last call of a burst, `delay_ms` after it.
pub struct Debouncer<S: TimerSource> {
    timers: S,
    delay_ms: u32,
    pending: RefCell<Option<S::Handle>>,
}

impl<S: TimerSource> Debouncer<S> {
    pub fn new(timers: S, delay_ms: u32) -> Self {
        Self {
            timers,
            delay_ms,
            pending: RefCell::new(None),
        }
    }

    pub fn call(&self, f: impl FnOnce() + 'static) {
        let handle = self.timers.start(self.delay_ms, Box::new(f));
        // replacing the handle drops, and so cancels, the previous timer
        self.pending.borrow_mut().replace(handle);
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use super::TimerSource;

    struct Scheduled {
        due: u32,
        alive: Rc<Cell<bool>>,
        callback: Box<dyn FnOnce()>,
    }

    /// Timers driven by `advance` instead of a clock.
    #[derive(Clone, Default)]
    pub struct ManualTimers {
        now: Rc<Cell<u32>>,
        queue: Rc<RefCell<Vec<Scheduled>>>,
    }

    pub struct ManualHandle(Rc<Cell<bool>>);

    impl Drop for ManualHandle {
        fn drop(&mut self) {
            self.0.set(false);
        }
    }

    impl TimerSource for ManualTimers {
        type Handle = ManualHandle;

        fn start(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> ManualHandle {
            let alive = Rc::new(Cell::new(true));
            self.queue.borrow_mut().push(Scheduled {
                due: self.now.get() + delay_ms,
                alive: alive.clone(),
                callback,
            });
            ManualHandle(alive)
        }
    }

    impl ManualTimers {
        /// Move time forward and run every live timer that came due.
        pub fn advance(&self, ms: u32) {
            let now = self.now.get() + ms;
            self.now.set(now);

            let due = {
                let mut queue = self.queue.borrow_mut();
                let (due, waiting): (Vec<Scheduled>, Vec<Scheduled>) =
                    queue.drain(..).partition(|t| t.due <= now);
                *queue = waiting;
                due
            };
            for timer in due.into_iter().filter(|t| t.alive.get()) {
                (timer.callback)();
            }
        }
    }
}
