//! Logical timer queue for follow-up work posted by commands.
//!
//! Tasks are plain values carrying the data they need, so nothing is read
//! back from the command that scheduled them. The clock only moves when the
//! surface is ticked; a task never runs inside the handler that posted it.

use std::collections::BTreeMap;

use gridlink_types::ScrollState;

/// Follow-up work a command asks the surface to do later.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduledTask {
    /// Select the track at this index of the current bank page.
    SelectTrack(usize),
    /// Paint the four arrow buttons from this scroll snapshot.
    RepaintArrows(ScrollState),
}

/// Due time in milliseconds plus scheduling sequence, so equal due times keep
/// their posting order.
type TaskKey = (u64, u64);

#[derive(Debug, Default)]
pub struct Scheduler {
    now_ms: u64,
    next_seq: u64,
    queue: BTreeMap<TaskKey, ScheduledTask>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Move the clock forward. Earlier times are ignored.
    pub fn advance_to(&mut self, now_ms: u64) {
        if now_ms > self.now_ms {
            self.now_ms = now_ms;
        }
    }

    /// Post `task` to run once at least `delay_ms` have passed.
    pub fn schedule(&mut self, task: ScheduledTask, delay_ms: u64) {
        let due = self.now_ms.saturating_add(delay_ms);
        let seq = self.next_seq;
        self.next_seq += 1;
        log::trace!(target: "schedule", "{:?} due at {} ms", task, due);
        self.queue.insert((due, seq), task);
    }

    /// Remove and return every task due at the current time, oldest first.
    pub fn drain_due(&mut self) -> Vec<ScheduledTask> {
        let later = self.queue.split_off(&(self.now_ms.saturating_add(1), 0));
        let due = std::mem::replace(&mut self.queue, later);
        due.into_values().collect()
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Due time of the earliest pending task.
    pub fn next_due_ms(&self) -> Option<u64> {
        self.queue.keys().next().map(|(due, _)| *due)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tasks_wait_for_their_delay() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(ScheduledTask::SelectTrack(0), 75);
        assert!(scheduler.drain_due().is_empty());
        scheduler.advance_to(74);
        assert!(scheduler.drain_due().is_empty());
        scheduler.advance_to(75);
        assert_eq!(scheduler.drain_due(), vec![ScheduledTask::SelectTrack(0)]);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn due_tasks_run_in_due_then_posting_order() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(ScheduledTask::SelectTrack(1), 150);
        scheduler.schedule(ScheduledTask::SelectTrack(2), 75);
        scheduler.schedule(ScheduledTask::SelectTrack(3), 75);
        assert_eq!(scheduler.next_due_ms(), Some(75));
        scheduler.advance_to(200);
        assert_eq!(
            scheduler.drain_due(),
            vec![
                ScheduledTask::SelectTrack(2),
                ScheduledTask::SelectTrack(3),
                ScheduledTask::SelectTrack(1),
            ]
        );
    }

    #[test]
    fn clock_never_moves_backwards() {
        let mut scheduler = Scheduler::new();
        scheduler.advance_to(100);
        scheduler.advance_to(50);
        assert_eq!(scheduler.now_ms(), 100);
        scheduler.schedule(ScheduledTask::SelectTrack(0), 0);
        assert_eq!(scheduler.drain_due().len(), 1);
    }
}
