/// Leading-edge limiter: the first call fires, later calls inside the window
/// are dropped.
pub struct Throttle {
    window_ms: f64,
    last_fired: Option<f64>,
}

impl Throttle {
    pub fn new(window_ms: u32) -> Self {
        Self {
            window_ms: f64::from(window_ms),
            last_fired: None,
        }
    }

    pub fn ready(&mut self, now_ms: f64) -> bool {
        match self.last_fired {
            Some(last) if now_ms - last < self.window_ms => false,
            _ => {
                self.last_fired = Some(now_ms);
                true
            }
        }
    }
}

/// Trailing-edge limiter. Each trigger takes a ticket and arms a timer for
/// `wait_ms`; when the timer fires only the newest ticket runs.
pub struct Debounce {
    wait_ms: u32,
    latest: u64,
}

impl Debounce {
    pub fn new(wait_ms: u32) -> Self {
        Self { wait_ms, latest: 0 }
    }

    pub fn wait_ms(&self) -> u32 {
        self.wait_ms
    }

    pub fn schedule(&mut self) -> u64 {
        self.latest = self.latest.wrapping_add(1);
        self.latest
    }

    pub fn is_latest(&self, ticket: u64) -> bool {
        ticket == self.latest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn throttle_fires_on_leading_edge_and_drops_inside_window() {
        let mut throttle = Throttle::new(16);

        assert!(throttle.ready(1_000.0));
        assert!(!throttle.ready(1_005.0));
        assert!(!throttle.ready(1_015.9));
        assert!(throttle.ready(1_016.0));
        assert!(!throttle.ready(1_020.0));
    }

    #[test]
    fn dropped_calls_do_not_extend_the_window() {
        let mut throttle = Throttle::new(100);

        assert!(throttle.ready(0.0));
        for now in (10..100).step_by(10) {
            assert!(!throttle.ready(f64::from(now)));
        }
        assert!(throttle.ready(100.0));
    }

    #[test]
    fn debounce_runs_only_the_last_trigger_of_a_burst() {
        let mut debounce = Debounce::new(250);
        let first = debounce.schedule();
        let second = debounce.schedule();
        let third = debounce.schedule();

        assert!(!debounce.is_latest(first));
        assert!(!debounce.is_latest(second));
        assert!(debounce.is_latest(third));
        assert_eq!(debounce.wait_ms(), 250);
    }

    #[test]
    fn debounce_after_quiet_period_runs_again() {
        let mut debounce = Debounce::new(250);
        let first = debounce.schedule();
        assert!(debounce.is_latest(first));

        let next = debounce.schedule();
        assert!(debounce.is_latest(next));
        assert_ne!(first, next);
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod properties {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn throttle_never_fires_twice_within_window(gaps in proptest::collection::vec(0u32..40, 1..200)) {
            let mut throttle = Throttle::new(16);
            let mut now = 0.0;
            let mut fired_at: Vec<f64> = Vec::new();

            for gap in gaps {
                now += f64::from(gap);
                if throttle.ready(now) {
                    fired_at.push(now);
                }
            }

            prop_assert!(!fired_at.is_empty());
            for pair in fired_at.windows(2) {
                prop_assert!(pair[1] - pair[0] >= 16.0);
            }
        }
    }
}
