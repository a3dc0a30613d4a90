//! Cancellable scheduled-task primitive.
//!
//! [`DebounceSlot`] holds at most one pending timer for one logical purpose
//! (observer resync, share-label reset): scheduling replaces and cancels any
//! pending timer, so two timers for the same purpose never coexist. The timer
//! API is abstracted behind [`TimerHost`] so the slot is unit-testable with a
//! virtual clock; the browser host wraps `gloo_timers`.

use std::cell::RefCell;
use std::rc::Rc;

/// A source of one-shot timers.
pub trait TimerHost {
    type Handle: 'static;
    /// Schedule `callback` to run after `delay_ms`.
    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Self::Handle;
    /// Cancel a previously scheduled timer. Cancelling one that already fired
    /// must be harmless.
    fn cancel(&self, handle: Self::Handle);
}

/// At most one pending timer for one logical operation.
pub struct DebounceSlot<H: TimerHost> {
    host: H,
    pending: Rc<RefCell<Option<H::Handle>>>,
}

impl<H: TimerHost> DebounceSlot<H> {
    pub fn new(host: H) -> Self {
        Self {
            host,
            pending: Rc::new(RefCell::new(None)),
        }
    }

    /// Schedule `callback`, cancelling any pending timer in this slot first.
    pub fn schedule(&self, delay_ms: u32, callback: impl FnOnce() + 'static) {
        let slot = Rc::clone(&self.pending);
        let handle = self.host.schedule(
            delay_ms,
            Box::new(move || {
                slot.borrow_mut().take();
                callback();
            }),
        );
        if let Some(previous) = self.pending.borrow_mut().replace(handle) {
            self.host.cancel(previous);
        }
    }

    /// Cancel the pending timer, if any.
    pub fn cancel(&self) {
        if let Some(handle) = self.pending.borrow_mut().take() {
            self.host.cancel(handle);
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.borrow().is_some()
    }
}

/// Timer host backed by the browser event loop.
#[derive(Clone, Copy, Default)]
pub struct BrowserTimers;

impl TimerHost for BrowserTimers {
    type Handle = gloo_timers::callback::Timeout;

    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Self::Handle {
        gloo_timers::callback::Timeout::new(delay_ms, callback)
    }

    fn cancel(&self, handle: Self::Handle) {
        handle.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    /// Deterministic timer host driven by `advance`.
    #[derive(Clone, Default)]
    struct VirtualClock {
        inner: Rc<RefCell<ClockInner>>,
    }

    #[derive(Default)]
    struct ClockInner {
        now: u64,
        next_id: u64,
        tasks: BTreeMap<u64, (u64, Box<dyn FnOnce()>)>,
    }

    impl VirtualClock {
        fn advance(&self, ms: u64) {
            let deadline = self.inner.borrow().now + ms;
            loop {
                // Pull the earliest due task out before running it, since a
                // callback may schedule or cancel.
                let due = {
                    let mut inner = self.inner.borrow_mut();
                    let next = inner
                        .tasks
                        .iter()
                        .filter(|(_, (at, _))| *at <= deadline)
                        .map(|(id, (at, _))| (*at, *id))
                        .min();
                    match next {
                        Some((at, id)) => {
                            inner.now = at;
                            inner.tasks.remove(&id)
                        }
                        None => None,
                    }
                };
                match due {
                    Some((_, callback)) => callback(),
                    None => break,
                }
            }
            self.inner.borrow_mut().now = deadline;
        }
    }

    impl TimerHost for VirtualClock {
        type Handle = u64;

        fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> u64 {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id;
            inner.next_id += 1;
            let at = inner.now + u64::from(delay_ms);
            inner.tasks.insert(id, (at, callback));
            id
        }

        fn cancel(&self, handle: u64) {
            self.inner.borrow_mut().tasks.remove(&handle);
        }
    }

    fn counter() -> (Rc<RefCell<u32>>, impl Fn() -> Box<dyn FnOnce()>) {
        let count = Rc::new(RefCell::new(0));
        let make = {
            let count = Rc::clone(&count);
            move || {
                let count = Rc::clone(&count);
                Box::new(move || *count.borrow_mut() += 1) as Box<dyn FnOnce()>
            }
        };
        (count, make)
    }

    #[test]
    fn test_burst_coalesces_to_one_fire() {
        let clock = VirtualClock::default();
        let slot = DebounceSlot::new(clock.clone());
        let (count, make) = counter();

        for _ in 0..5 {
            slot.schedule(100, make());
            clock.advance(10);
        }
        assert!(slot.is_pending());
        clock.advance(100);
        assert_eq!(*count.borrow(), 1);
        assert!(!slot.is_pending());
    }

    #[test]
    fn test_cancel_prevents_fire() {
        let clock = VirtualClock::default();
        let slot = DebounceSlot::new(clock.clone());
        let (count, make) = counter();

        slot.schedule(50, make());
        slot.cancel();
        clock.advance(1000);
        assert_eq!(*count.borrow(), 0);
        assert!(!slot.is_pending());
    }

    #[test]
    fn test_slot_is_reusable_after_fire() {
        let clock = VirtualClock::default();
        let slot = DebounceSlot::new(clock.clone());
        let (count, make) = counter();

        slot.schedule(10, make());
        clock.advance(10);
        slot.schedule(10, make());
        clock.advance(10);
        assert_eq!(*count.borrow(), 2);
    }

    #[test]
    fn test_callback_may_reschedule() {
        let clock = VirtualClock::default();
        let slot = Rc::new(DebounceSlot::new(clock.clone()));
        let (count, make) = counter();

        let inner_cb = make();
        let slot2 = Rc::clone(&slot);
        slot.schedule(10, move || slot2.schedule(10, inner_cb));
        clock.advance(20);
        assert_eq!(*count.borrow(), 1);
    }
}
