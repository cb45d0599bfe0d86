use chrono::TimeDelta;
use std::collections::{BTreeMap, HashMap};

/// Handle returned by [`EventQueue::schedule_in`], used for cancellation.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, PartialOrd, Ord)]
pub struct EventHandle(u64);

/// A cooperative timer queue driven by per-tick deltas.
///
/// Entries are ordered by deadline and, for equal deadlines, by scheduling order.
/// Nothing runs on its own: every due entry is handed back from [`EventQueue::advance`].
///
/// # Fields
/// - `now`: logical time elapsed since the queue was created.
/// - `entries`: pending events keyed by `(deadline, sequence)`.
/// - `deadlines`: reverse index for cancellation by handle.
#[derive(Debug)]
pub struct EventQueue<E> {
    now: TimeDelta,
    next_seq: u64,
    entries: BTreeMap<(TimeDelta, u64), E>,
    deadlines: HashMap<EventHandle, TimeDelta>,
}

impl<E> Default for EventQueue<E> {
    fn default() -> Self { Self::new() }
}

impl<E> EventQueue<E> {
    pub fn new() -> Self {
        Self {
            now: TimeDelta::zero(),
            next_seq: 0,
            entries: BTreeMap::new(),
            deadlines: HashMap::new(),
        }
    }

    /// Logical time elapsed since creation.
    pub fn now(&self) -> TimeDelta { self.now }

    pub fn len(&self) -> usize { self.entries.len() }

    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    /// Schedules `event` to become due `delay` after the current logical time.
    pub fn schedule_in(&mut self, delay: TimeDelta, event: E) -> EventHandle {
        self.schedule_at(self.now + delay.max(TimeDelta::zero()), event)
    }

    /// Schedules `event` at an absolute logical deadline. Past deadlines fire on the next advance.
    pub fn schedule_at(&mut self, deadline: TimeDelta, event: E) -> EventHandle {
        let seq = self.next_seq;
        self.next_seq += 1;
        let handle = EventHandle(seq);
        self.entries.insert((deadline, seq), event);
        self.deadlines.insert(handle, deadline);
        handle
    }

    /// Deadline of a pending entry.
    pub fn deadline(&self, handle: EventHandle) -> Option<TimeDelta> {
        self.deadlines.get(&handle).copied()
    }

    /// Removes a pending entry. Returns `false` if it already fired or was cancelled.
    pub fn cancel(&mut self, handle: EventHandle) -> bool {
        match self.deadlines.remove(&handle) {
            Some(deadline) => self.entries.remove(&(deadline, handle.0)).is_some(),
            None => false,
        }
    }

    /// Drops every pending entry.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.deadlines.clear();
    }

    /// Moves logical time forward by `dt` and pops every entry that is now due,
    /// in deadline order, together with its handle and deadline.
    pub fn advance(&mut self, dt: TimeDelta) -> Vec<(EventHandle, TimeDelta, E)> {
        self.now += dt.max(TimeDelta::zero());
        let mut due = Vec::new();
        while let Some(entry) = self.entries.first_entry() {
            let (deadline, seq) = *entry.key();
            if deadline > self.now {
                break;
            }
            let event = entry.remove();
            let handle = EventHandle(seq);
            self.deadlines.remove(&handle);
            due.push((handle, deadline, event));
        }
        due
    }
}
