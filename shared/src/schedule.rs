//! Delayed callbacks for the cosmetic timers.
//!
//! The browser backs [`Scheduler`] with real timeouts; [`ManualScheduler`]
//! runs the same callbacks against a virtual clock so timed effects can be
//! checked without waiting.

use std::{
    cell::RefCell,
    collections::BTreeMap,
    rc::{Rc, Weak},
    time::Duration,
};

/// Boxed one-shot callback.
pub type Task = Box<dyn FnOnce()>;

/// Handle to a scheduled callback.
///
/// Dropping a handle leaves the callback scheduled; only [`cancel`]
/// stops it.
///
/// [`cancel`]: TimerHandle::cancel
pub trait TimerHandle {
    /// Stop the callback if it has not run yet.
    fn cancel(self);
}

/// Runs callbacks after a delay on the current thread.
pub trait Scheduler {
    /// Handle returned for each scheduled callback.
    type Handle: TimerHandle;

    /// Run `task` once, `delay` from now.
    fn schedule(&self, delay: Duration, task: Task) -> Self::Handle;
}

#[derive(Default)]
struct Queue {
    now: Duration,
    next_seq: u64,
    // Keyed by (due time, insertion order) so equal deadlines run FIFO.
    tasks: BTreeMap<(Duration, u64), Task>,
}

/// Virtual-clock [`Scheduler`]; time only moves through [`advance`].
///
/// Clones share the same clock and queue.
///
/// [`advance`]: ManualScheduler::advance
#[derive(Clone, Default)]
pub struct ManualScheduler {
    queue: Rc<RefCell<Queue>>,
}

impl ManualScheduler {
    /// Scheduler at virtual time zero with nothing queued.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time.
    pub fn now(&self) -> Duration {
        self.queue.borrow().now
    }

    /// Number of callbacks still waiting.
    pub fn pending(&self) -> usize {
        self.queue.borrow().tasks.len()
    }

    /// Move the clock forward by `by`, running every callback that falls
    /// due, including ones scheduled by callbacks along the way.
    pub fn advance(&self, by: Duration) {
        let target = self.now() + by;
        loop {
            let next = {
                let mut queue = self.queue.borrow_mut();
                let due = queue.tasks.first_key_value().map(|(&(due, _), _)| due);
                match due {
                    Some(due) if due <= target => {
                        queue.now = due;
                        queue.tasks.pop_first().map(|(_, task)| task)
                    },
                    _ => None,
                }
            };
            // The queue borrow is released before running so the task may
            // schedule more work.
            match next {
                Some(task) => task(),
                None => break,
            }
        }
        self.queue.borrow_mut().now = target;
    }
}

/// Handle returned by [`ManualScheduler`].
pub struct ManualTimer {
    key: (Duration, u64),
    queue: Weak<RefCell<Queue>>,
}

impl TimerHandle for ManualTimer {
    fn cancel(self) {
        if let Some(queue) = self.queue.upgrade() {
            queue.borrow_mut().tasks.remove(&self.key);
        }
    }
}

impl Scheduler for ManualScheduler {
    type Handle = ManualTimer;

    fn schedule(&self, delay: Duration, task: Task) -> ManualTimer {
        let mut queue = self.queue.borrow_mut();
        let key = (queue.now + delay, queue.next_seq);
        queue.next_seq += 1;
        queue.tasks.insert(key, task);
        ManualTimer {
            key,
            queue: Rc::downgrade(&self.queue),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn callbacks_run_only_once_due() {
        let scheduler = ManualScheduler::new();
        let fired = Rc::new(Cell::new(false));
        let flag = fired.clone();
        let _handle = scheduler.schedule(Duration::from_millis(500), Box::new(move || flag.set(true)));

        scheduler.advance(Duration::from_millis(499));
        assert!(!fired.get());
        scheduler.advance(Duration::from_millis(1));
        assert!(fired.get());
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn cancelled_callback_never_runs() {
        let scheduler = ManualScheduler::new();
        let fired = Rc::new(Cell::new(false));
        let flag = fired.clone();
        let handle = scheduler.schedule(Duration::from_millis(10), Box::new(move || flag.set(true)));
        handle.cancel();

        scheduler.advance(Duration::from_secs(1));
        assert!(!fired.get());
    }

    #[test]
    fn nested_schedules_run_within_the_same_advance() {
        let scheduler = ManualScheduler::new();
        let order = Rc::new(RefCell::new(Vec::new()));

        let inner_scheduler = scheduler.clone();
        let log = order.clone();
        let _outer = scheduler.schedule(
            Duration::from_millis(100),
            Box::new(move || {
                log.borrow_mut().push("outer");
                let log = log.clone();
                let _inner = inner_scheduler
                    .schedule(Duration::from_millis(50), Box::new(move || log.borrow_mut().push("inner")));
            }),
        );

        scheduler.advance(Duration::from_millis(150));
        assert_eq!(*order.borrow(), vec!["outer", "inner"]);
        assert_eq!(scheduler.now(), Duration::from_millis(150));
    }

    #[test]
    fn equal_deadlines_run_in_insertion_order() {
        let scheduler = ManualScheduler::new();
        let order = Rc::new(RefCell::new(Vec::new()));
        for label in ["a", "b", "c"] {
            let log = order.clone();
            let _ = scheduler.schedule(Duration::from_millis(5), Box::new(move || log.borrow_mut().push(label)));
        }

        scheduler.advance(Duration::from_millis(5));
        assert_eq!(*order.borrow(), vec!["a", "b", "c"]);
    }
}
