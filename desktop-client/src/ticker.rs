use std::time::{Duration, Instant};

/// Fixed-interval tick schedule driven by frame timestamps.
///
/// At most one tick is due per frame. Ticks that piled up during a stall
/// collapse into one and the schedule restarts from "now".
pub struct Ticker {
    interval: Duration,
    next_tick: Instant,
}

impl Ticker {
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            next_tick: now + interval,
        }
    }

    pub fn reset(&mut self, now: Instant) {
        self.next_tick = now + self.interval;
    }

    /// Whether a tick fell due up to `now`, consuming it.
    pub fn tick_due(&mut self, now: Instant) -> bool {
        if now < self.next_tick {
            return false;
        }

        self.next_tick += self.interval;
        if now >= self.next_tick {
            self.reset(now);
        }
        true
    }

    pub fn time_until_next(&self, now: Instant) -> Duration {
        self.next_tick.saturating_duration_since(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INTERVAL: Duration = Duration::from_millis(150);

    #[test]
    fn test_nothing_due_before_first_interval() {
        let start = Instant::now();
        let mut ticker = Ticker::new(INTERVAL, start);
        assert!(!ticker.tick_due(start));
        assert!(!ticker.tick_due(start + Duration::from_millis(149)));
        assert_eq!(ticker.time_until_next(start + Duration::from_millis(100)), Duration::from_millis(50));
    }

    #[test]
    fn test_one_tick_per_interval() {
        let start = Instant::now();
        let mut ticker = Ticker::new(INTERVAL, start);
        assert!(ticker.tick_due(start + INTERVAL));
        assert!(!ticker.tick_due(start + INTERVAL));
        assert!(ticker.tick_due(start + INTERVAL * 2 + Duration::from_millis(10)));
        assert_eq!(
            ticker.time_until_next(start + INTERVAL * 2 + Duration::from_millis(10)),
            Duration::from_millis(140)
        );
    }

    #[test]
    fn test_late_frame_keeps_phase() {
        let start = Instant::now();
        let mut ticker = Ticker::new(INTERVAL, start);
        let late = start + INTERVAL + Duration::from_millis(100);
        assert!(ticker.tick_due(late));
        assert!(!ticker.tick_due(late));
        assert_eq!(ticker.time_until_next(late), Duration::from_millis(50));
    }

    #[test]
    fn test_stall_collapses_into_single_tick() {
        let start = Instant::now();
        let mut ticker = Ticker::new(INTERVAL, start);
        let late = start + INTERVAL * 20;
        assert!(ticker.tick_due(late));
        assert!(!ticker.tick_due(late));
        assert_eq!(ticker.time_until_next(late), INTERVAL);
    }

    #[test]
    fn test_reset_restarts_the_interval() {
        let start = Instant::now();
        let mut ticker = Ticker::new(INTERVAL, start);
        let later = start + Duration::from_millis(140);
        ticker.reset(later);
        assert!(!ticker.tick_due(start + INTERVAL));
        assert!(ticker.tick_due(later + INTERVAL));
    }
}
