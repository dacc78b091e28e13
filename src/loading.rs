pub const COMPLETE_PERCENT: f64 = 100.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LoadingStep {
    pub percent: f64,
    /// True on the single step that reached 100.
    pub completed: bool,
}

/// Simulated load progress for the splash overlay.
#[derive(Default)]
pub struct LoadingProgress {
    percent: f64,
}

impl LoadingProgress {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn percent(&self) -> f64 {
        self.percent
    }

    pub fn is_complete(&self) -> bool {
        self.percent >= COMPLETE_PERCENT
    }

    pub fn advance(&mut self, increment: f64) -> LoadingStep {
        if self.is_complete() {
            return LoadingStep {
                percent: self.percent,
                completed: false,
            };
        }

        self.percent = (self.percent + increment.max(0.0)).min(COMPLETE_PERCENT);

        LoadingStep {
            percent: self.percent,
            completed: self.is_complete(),
        }
    }
}

pub fn width_style(percent: f64) -> String {
    format!("width: {percent}%;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_starts_at_zero() {
        let progress = LoadingProgress::new();
        assert_eq!(progress.percent(), 0.0);
        assert!(!progress.is_complete());
    }

    #[test]
    fn fast_forwarded_ticks_land_exactly_on_one_hundred() {
        let mut progress = LoadingProgress::new();
        let mut steps = Vec::new();

        while !progress.is_complete() {
            steps.push(progress.advance(14.9));
        }

        let last = steps.last().copied().expect("at least one tick");
        assert_eq!(last.percent, 100.0);
        assert!(last.completed);
        assert_eq!(steps.iter().filter(|step| step.completed).count(), 1);
        assert!(steps.iter().all(|step| step.percent <= 100.0));
    }

    #[test]
    fn ticks_after_completion_are_inert() {
        let mut progress = LoadingProgress::new();
        assert!(progress.advance(250.0).completed);

        let again = progress.advance(10.0);
        assert_eq!(again.percent, 100.0);
        assert!(!again.completed);
    }

    #[test]
    fn width_style_formats_percent() {
        assert_eq!(width_style(0.0), "width: 0%;");
        assert_eq!(width_style(100.0), "width: 100%;");
        assert_eq!(width_style(12.5), "width: 12.5%;");
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod properties {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn progress_is_monotonic_and_capped(increments in proptest::collection::vec(0.0f64..15.0, 1..300)) {
            let mut progress = LoadingProgress::new();
            let mut previous = 0.0;

            for increment in increments {
                let step = progress.advance(increment);
                prop_assert!(step.percent >= previous);
                prop_assert!(step.percent <= COMPLETE_PERCENT);
                previous = step.percent;
            }
        }
    }
}
