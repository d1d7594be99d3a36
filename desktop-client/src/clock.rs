use std::time::{Duration, Instant};

const MAX_CATCH_UP_TICKS: u32 = 3;

/// Fixed-rate tick schedule. After a long stall it runs a few catch-up ticks
/// and then resynchronises instead of replaying the whole backlog.
pub struct TickClock {
    interval: Duration,
    next_tick: Instant,
}

impl TickClock {
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            next_tick: now + interval,
        }
    }

    pub fn reset(&mut self, now: Instant) {
        self.next_tick = now + self.interval;
    }

    pub fn due_ticks(&mut self, now: Instant) -> u32 {
        let mut due = 0;
        while now >= self.next_tick && due < MAX_CATCH_UP_TICKS {
            due += 1;
            self.next_tick += self.interval;
        }
        if now >= self.next_tick {
            self.next_tick = now + self.interval;
        }
        due
    }

    pub fn until_next(&self, now: Instant) -> Duration {
        self.next_tick.saturating_duration_since(now)
    }
}
