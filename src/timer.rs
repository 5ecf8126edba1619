use std::time::Duration;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct TimerId(u64);

/// Recurring-timer capability handed to the slider.
pub trait Scheduler {
    fn schedule_repeating(&mut self, interval: Duration) -> TimerId;
    fn cancel(&mut self, id: TimerId);
    fn pending(&self) -> usize;
    /// Moves time forward and returns every timer that fired, in order.
    fn advance(&mut self, elapsed: Duration) -> Vec<TimerId>;
}

struct Timer {
    id: TimerId,
    interval: Duration,
    elapsed: Duration,
}

/// Scheduler driven by the render loop's frame time.
#[derive(Default)]
pub struct FrameScheduler {
    timers: Vec<Timer>,
    next_id: u64,
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Scheduler for FrameScheduler {
    fn schedule_repeating(&mut self, interval: Duration) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.timers.push(Timer { id, interval, elapsed: Duration::ZERO });
        id
    }

    fn cancel(&mut self, id: TimerId) {
        self.timers.retain(|t| t.id != id);
    }

    fn pending(&self) -> usize {
        self.timers.len()
    }

    fn advance(&mut self, elapsed: Duration) -> Vec<TimerId> {
        let mut fired = Vec::new();
        for timer in self.timers.iter_mut() {
            // A zero interval would never stop firing
            if timer.interval.is_zero() {
                continue;
            }
            timer.elapsed += elapsed;
            // A stalled frame fires once, the backlog is dropped
            if timer.elapsed >= timer.interval {
                let remainder = timer.elapsed.as_nanos() % timer.interval.as_nanos();
                timer.elapsed = Duration::from_nanos(remainder as u64);
                fired.push(timer.id);
            }
        }
        fired
    }
}
