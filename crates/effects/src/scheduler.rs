//! A cancellable, single-threaded task scheduler.
//!
//! The host event loop calls [`Scheduler::tick`] with a monotonic
//! millisecond timestamp; every due task runs once, synchronously, in
//! creation order. Tasks signal their own completion by returning
//! [`TaskControl::Stop`], and cancellation is idempotent. Task bodies
//! mutate presentation state only through the context, so a task firing
//! after its target element is gone degrades to a no-op instead of
//! erroring.

use vantage_traits::{NotificationSink, PresentationSurface};

/// What a task body may touch while running.
pub struct TaskContext<'a> {
    /// Timestamp of the current tick, in ms.
    pub now_ms: u64,
    pub surface: &'a mut dyn PresentationSurface,
    pub notifications: &'a mut dyn NotificationSink,
}

/// Returned by a task body after each run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskControl {
    /// Run again at the next interval (repeating tasks only).
    Continue,
    /// Done; drop the task.
    Stop,
}

/// Opaque handle for cancelling a scheduled task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskHandle(u64);

type TaskFn = Box<dyn FnMut(&mut TaskContext) -> TaskControl>;

struct Task {
    handle: TaskHandle,
    due_ms: u64,
    interval_ms: Option<u64>,
    run: TaskFn,
}

/// Owns all pending scheduled tasks.
///
/// Timestamps are host-supplied and never read from a system clock, so
/// simulations and tests control time completely.
#[derive(Default)]
pub struct Scheduler {
    tasks: Vec<Task>,
    now_ms: u64,
    next_handle: u64,
}

impl std::fmt::Debug for Scheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scheduler")
            .field("tasks", &self.tasks.len())
            .field("now_ms", &self.now_ms)
            .finish()
    }
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `f` once, `delay_ms` after the current tick.
    pub fn schedule_once(
        &mut self,
        delay_ms: u64,
        f: impl FnMut(&mut TaskContext) -> TaskControl + 'static,
    ) -> TaskHandle {
        self.push(delay_ms, None, Box::new(f))
    }

    /// Run `f` every `interval_ms` until it returns [`TaskControl::Stop`]
    /// or is cancelled. The first run happens one interval from now.
    pub fn schedule_repeating(
        &mut self,
        interval_ms: u64,
        f: impl FnMut(&mut TaskContext) -> TaskControl + 'static,
    ) -> TaskHandle {
        self.push(interval_ms, Some(interval_ms), Box::new(f))
    }

    fn push(&mut self, delay_ms: u64, interval_ms: Option<u64>, run: TaskFn) -> TaskHandle {
        let handle = TaskHandle(self.next_handle);
        self.next_handle += 1;
        self.tasks.push(Task {
            handle,
            due_ms: self.now_ms + delay_ms,
            interval_ms,
            run,
        });
        log::trace!("scheduled task {:?} due at {}ms", handle, self.now_ms + delay_ms);
        handle
    }

    /// Cancel a task. Cancelling an unknown or finished task is a no-op.
    pub fn cancel(&mut self, handle: TaskHandle) {
        self.tasks.retain(|t| t.handle != handle);
    }

    /// Number of tasks still pending.
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    /// Advance to `now_ms` and run every due task once, in creation
    /// order. Returns the number of task runs. Time never moves
    /// backwards; a stale timestamp is clamped to the current tick.
    pub fn tick(
        &mut self,
        now_ms: u64,
        surface: &mut dyn PresentationSurface,
        notifications: &mut dyn NotificationSink,
    ) -> usize {
        self.now_ms = self.now_ms.max(now_ms);
        let now_ms = self.now_ms;
        let mut context = TaskContext {
            now_ms,
            surface,
            notifications,
        };

        let mut finished = Vec::new();
        let mut runs = 0;
        for task in &mut self.tasks {
            if task.due_ms > now_ms {
                continue;
            }
            runs += 1;
            let control = (task.run)(&mut context);
            match (control, task.interval_ms) {
                (TaskControl::Continue, Some(interval)) => {
                    task.due_ms = now_ms + interval;
                }
                _ => finished.push(task.handle),
            }
        }
        if !finished.is_empty() {
            self.tasks.retain(|t| !finished.contains(&t.handle));
        }
        runs
    }
}
