//! Recurring callbacks, decoupled from the browser timer that drives them.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo_timers::callback::Interval;

pub type TickCallback = Box<dyn FnMut()>;

pub trait Scheduler {
    /// Runs `callback` every `period_ms` until the returned subscription is dropped.
    fn every(&self, period_ms: u32, callback: TickCallback) -> Subscription;
}

/// Live registration with a [`Scheduler`]. Dropping it unsubscribes.
#[must_use = "dropping a Subscription cancels it immediately"]
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

/// `setInterval` through gloo.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IntervalScheduler;

impl Scheduler for IntervalScheduler {
    fn every(&self, period_ms: u32, mut callback: TickCallback) -> Subscription {
        let interval = Interval::new(period_ms, move || callback());
        Subscription::new(move || drop(interval))
    }
}

type SharedCallback = Rc<RefCell<TickCallback>>;

#[derive(Default)]
struct ManualTasks {
    next_id: u64,
    tasks: Vec<(u64, u32, SharedCallback)>,
}

/// Fires subscribed callbacks only when told to. Periods are recorded but
/// not enforced.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    inner: Rc<RefCell<ManualTasks>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs every live callback once and returns how many ran.
    pub fn fire(&self) -> usize {
        let callbacks: Vec<SharedCallback> = self
            .inner
            .borrow()
            .tasks
            .iter()
            .map(|(_, _, cb)| cb.clone())
            .collect();
        for cb in &callbacks {
            (cb.borrow_mut())();
        }
        callbacks.len()
    }

    pub fn active(&self) -> usize {
        self.inner.borrow().tasks.len()
    }

    pub fn periods(&self) -> Vec<u32> {
        self.inner
            .borrow()
            .tasks
            .iter()
            .map(|(_, period, _)| *period)
            .collect()
    }
}

impl Scheduler for ManualScheduler {
    fn every(&self, period_ms: u32, callback: TickCallback) -> Subscription {
        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id;
            inner.next_id += 1;
            inner
                .tasks
                .push((id, period_ms, Rc::new(RefCell::new(callback))));
            id
        };
        let weak: Weak<RefCell<ManualTasks>> = Rc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.borrow_mut().tasks.retain(|(task_id, _, _)| *task_id != id);
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn manual_scheduler_fires_until_unsubscribed() {
        let scheduler = ManualScheduler::new();
        let hits = Rc::new(Cell::new(0));
        let sub = {
            let hits = hits.clone();
            scheduler.every(1_000, Box::new(move || hits.set(hits.get() + 1)))
        };
        assert_eq!(scheduler.periods(), vec![1_000]);
        assert_eq!(scheduler.fire(), 1);
        assert_eq!(scheduler.fire(), 1);
        assert_eq!(hits.get(), 2);

        drop(sub);
        assert_eq!(scheduler.active(), 0);
        assert_eq!(scheduler.fire(), 0);
        assert_eq!(hits.get(), 2);
    }

    #[test]
    fn cancelling_one_subscription_leaves_others() {
        let scheduler = ManualScheduler::new();
        let a = Rc::new(Cell::new(0));
        let b = Rc::new(Cell::new(0));
        let sub_a = {
            let a = a.clone();
            scheduler.every(100, Box::new(move || a.set(a.get() + 1)))
        };
        let _sub_b = {
            let b = b.clone();
            scheduler.every(200, Box::new(move || b.set(b.get() + 1)))
        };
        drop(sub_a);
        scheduler.fire();
        assert_eq!((a.get(), b.get()), (0, 1));
    }

    #[test]
    fn subscription_outliving_scheduler_drops_cleanly() {
        let scheduler = ManualScheduler::new();
        let sub = scheduler.every(10, Box::new(|| {}));
        drop(scheduler);
        drop(sub);
    }
}
