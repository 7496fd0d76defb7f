use itertools::Itertools;
use parking_lot::Mutex;

use crate::host::Task;

struct Scheduled {
    due: u64,
    seq: u64,
    task: Task,
}

#[derive(Default)]
struct Inner {
    tick: u64,
    seq: u64,
    tasks: Vec<Scheduled>,
}

/// Delayed tasks for hosts without a scheduler of their own.
///
/// Tasks run when [`TickScheduler::tick`] reaches their due tick, in the order
/// they were scheduled. A task scheduled while ticking never runs in that same tick.
#[derive(Default)]
pub struct TickScheduler {
    inner: Mutex<Inner>,
}

impl TickScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// A delay of 0 is treated as 1, the task always waits for the next tick.
    pub fn schedule(&self, delay_ticks: u32, task: Task) {
        let mut inner = self.inner.lock();
        let due = inner.tick + u64::from(delay_ticks.max(1));
        let seq = inner.seq;
        inner.seq += 1;
        inner.tasks.push(Scheduled { due, seq, task });
    }

    /// Advances one tick and runs everything that became due.
    pub fn tick(&self) {
        let due = {
            let mut inner = self.inner.lock();
            inner.tick += 1;
            let now = inner.tick;
            let (due, pending): (Vec<_>, Vec<_>) =
                inner.tasks.drain(..).partition(|task| task.due <= now);
            inner.tasks = pending;
            due
        };

        // tasks may schedule more tasks, so the lock is released first
        for scheduled in due
            .into_iter()
            .sorted_by_key(|task| (task.due, task.seq))
        {
            (scheduled.task)();
        }
    }

    pub fn current_tick(&self) -> u64 {
        self.inner.lock().tick
    }

    pub fn pending(&self) -> usize {
        self.inner.lock().tasks.len()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use parking_lot::Mutex;

    use super::TickScheduler;

    #[test]
    fn runs_after_delay() {
        let scheduler = TickScheduler::new();
        let log = Arc::new(Mutex::new(Vec::new()));

        let late = log.clone();
        scheduler.schedule(3, Box::new(move || late.lock().push("late")));
        let early = log.clone();
        scheduler.schedule(1, Box::new(move || early.lock().push("early")));

        scheduler.tick();
        assert_eq!(*log.lock(), vec!["early"]);
        scheduler.tick();
        assert_eq!(log.lock().len(), 1);
        scheduler.tick();
        assert_eq!(*log.lock(), vec!["early", "late"]);
        assert_eq!(scheduler.pending(), 0);
        assert_eq!(scheduler.current_tick(), 3);
    }

    #[test]
    fn same_tick_keeps_submission_order() {
        let scheduler = TickScheduler::new();
        let log = Arc::new(Mutex::new(Vec::new()));
        for i in 0..5 {
            let log = log.clone();
            scheduler.schedule(2, Box::new(move || log.lock().push(i)));
        }
        scheduler.tick();
        scheduler.tick();
        assert_eq!(*log.lock(), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn zero_delay_waits_for_next_tick() {
        let scheduler = Arc::new(TickScheduler::new());
        let log = Arc::new(Mutex::new(Vec::new()));

        let inner_scheduler = scheduler.clone();
        let inner_log = log.clone();
        scheduler.schedule(
            0,
            Box::new(move || {
                inner_log.lock().push(1);
                let again = inner_log.clone();
                inner_scheduler.schedule(0, Box::new(move || again.lock().push(2)));
            }),
        );

        scheduler.tick();
        assert_eq!(*log.lock(), vec![1]);
        assert_eq!(scheduler.pending(), 1);
        scheduler.tick();
        assert_eq!(*log.lock(), vec![1, 2]);
    }
}
