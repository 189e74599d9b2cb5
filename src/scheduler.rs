use std::time::Duration;

const MIN_PERIOD: Duration = Duration::from_millis(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(u64);

#[derive(Debug)]
struct Entry<T> {
    id: TaskId,
    deadline: Duration,
    period: Option<Duration>,
    task: T,
}

/// Cancellable one-shot and repeating tasks over a virtual clock.
///
/// The clock only moves when the owner pops due tasks or calls [`Scheduler::set_now`],
/// so hosts drive it from their frame delta and tests drive it by hand.
#[derive(Debug)]
pub struct Scheduler<T> {
    now: Duration,
    next_id: u64,
    entries: Vec<Entry<T>>,
}

impl<T: Clone> Default for Scheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Scheduler<T> {
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_id: 0,
            entries: Vec::new(),
        }
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    /// Moves the clock forward. Never moves it backwards.
    pub fn set_now(&mut self, now: Duration) {
        self.now = self.now.max(now);
    }

    pub fn schedule_once(&mut self, delay: Duration, task: T) -> TaskId {
        self.push(delay, None, task)
    }

    /// First run is one `period` from now.
    pub fn schedule_repeating(&mut self, period: Duration, task: T) -> TaskId {
        let period = period.max(MIN_PERIOD);
        self.push(period, Some(period), task)
    }

    pub fn cancel(&mut self, id: TaskId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        self.entries.len() != before
    }

    pub fn is_scheduled(&self, id: TaskId) -> bool {
        self.entries.iter().any(|entry| entry.id == id)
    }

    pub fn deadline(&self, id: TaskId) -> Option<Duration> {
        self.entries.iter().find(|entry| entry.id == id).map(|entry| entry.deadline)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Pops the earliest task due at or before `until`, advancing the clock to its deadline.
    /// Ties go to the task scheduled first. Repeating tasks are re-queued one period later.
    pub fn pop_due(&mut self, until: Duration) -> Option<T> {
        let position = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.deadline <= until)
            .min_by_key(|(_, entry)| (entry.deadline, entry.id))
            .map(|(position, _)| position)?;

        let deadline = self.entries[position].deadline;
        self.set_now(deadline);

        match self.entries[position].period {
            Some(period) => {
                let entry = &mut self.entries[position];
                entry.deadline += period;
                Some(entry.task.clone())
            }
            None => Some(self.entries.swap_remove(position).task),
        }
    }

    fn push(&mut self, delay: Duration, period: Option<Duration>, task: T) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry {
            id,
            deadline: self.now + delay,
            period,
            task,
        });
        id
    }
}
