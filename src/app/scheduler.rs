//! Deadline queue for UI timers
//!
//! Timers are plain data: the event loop asks for everything due at `now` and
//! hands the events back to the controller. Nothing runs on another thread.

use std::time::{Duration, Instant};

#[derive(Debug)]
struct Pending<E> {
    due: Instant,
    seq: u64,
    event: E,
}

/// Pending timer events ordered by deadline, then by scheduling order
#[derive(Debug)]
pub struct TimerQueue<E> {
    pending: Vec<Pending<E>>,
    next_seq: u64,
}

impl<E> TimerQueue<E> {
    pub fn new() -> Self {
        Self {
            pending: Vec::new(),
            next_seq: 0,
        }
    }

    /// Fire `event` once `delay` has elapsed after `now`
    pub fn schedule(&mut self, now: Instant, delay: Duration, event: E) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.pending.push(Pending {
            due: now + delay,
            seq,
            event,
        });
    }

    /// Remove and return the earliest event due at or before `now`, with its deadline
    pub fn pop_due(&mut self, now: Instant) -> Option<(Instant, E)> {
        let index = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, p)| p.due <= now)
            .min_by_key(|(_, p)| (p.due, p.seq))
            .map(|(index, _)| index)?;
        let fired = self.pending.swap_remove(index);
        Some((fired.due, fired.event))
    }

    /// Earliest pending deadline
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.iter().map(|p| p.due).min()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

impl<E> Default for TimerQueue<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain<E>(queue: &mut TimerQueue<E>, now: Instant) -> Vec<E> {
        std::iter::from_fn(|| queue.pop_due(now).map(|(_, event)| event)).collect()
    }

    #[test]
    fn test_nothing_due_before_deadline() {
        let t0 = Instant::now();
        let mut queue = TimerQueue::new();
        queue.schedule(t0, Duration::from_millis(200), "fade");

        assert!(drain(&mut queue, t0 + Duration::from_millis(199)).is_empty());
        assert_eq!(queue.len(), 1);
        assert_eq!(drain(&mut queue, t0 + Duration::from_millis(200)), vec!["fade"]);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_due_events_fire_in_deadline_order() {
        let t0 = Instant::now();
        let mut queue = TimerQueue::new();
        queue.schedule(t0, Duration::from_millis(400), "open");
        queue.schedule(t0, Duration::from_millis(50), "enter");
        queue.schedule(t0, Duration::from_millis(200), "fade");

        let fired = drain(&mut queue, t0 + Duration::from_secs(1));
        assert_eq!(fired, vec!["enter", "fade", "open"]);
    }

    #[test]
    fn test_equal_deadlines_keep_scheduling_order() {
        let t0 = Instant::now();
        let mut queue = TimerQueue::new();
        queue.schedule(t0, Duration::from_millis(10), 1);
        queue.schedule(t0, Duration::from_millis(10), 2);
        queue.schedule(t0, Duration::from_millis(10), 3);

        assert_eq!(drain(&mut queue, t0 + Duration::from_millis(10)), vec![1, 2, 3]);
    }

    #[test]
    fn test_next_deadline() {
        let t0 = Instant::now();
        let mut queue = TimerQueue::new();
        assert!(queue.next_deadline().is_none());

        queue.schedule(t0, Duration::from_millis(300), ());
        queue.schedule(t0, Duration::from_millis(100), ());
        assert_eq!(queue.next_deadline(), Some(t0 + Duration::from_millis(100)));
    }
}
