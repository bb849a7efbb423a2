//! Eased count-up from zero to a target.
//!
//! [`CountUp`] is a small state machine driven by frame timestamps:
//! `Idle` until [`CountUp::start`], `Running` while frames arrive, and
//! `Settled` once the full duration has elapsed. Settled is terminal.

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Phase {
    Idle,
    /// `started_at` is filled in by the first frame after `start`.
    Running { started_at: Option<f64> },
    Settled,
}

impl Phase {
    pub fn is_running(&self) -> bool {
        matches!(self, Phase::Running { .. })
    }
}

/// Quartic ease-out: fast start, slow finish. `p` is clamped to `[0, 1]`.
pub fn ease_out_quart(p: f64) -> f64 {
    let p = p.clamp(0.0, 1.0);
    1.0 - (1.0 - p).powi(4)
}

#[derive(Clone, Debug, PartialEq)]
pub struct CountUp {
    target: u32,
    duration_ms: u32,
    value: u32,
    phase: Phase,
}

impl CountUp {
    pub fn new(target: u32, duration_ms: u32) -> Self {
        Self {
            target,
            duration_ms,
            value: 0,
            phase: Phase::Idle,
        }
    }

    /// Leaves `Idle`. Returns false if the counter already ran or is running.
    pub fn start(&mut self) -> bool {
        if self.phase != Phase::Idle {
            return false;
        }
        self.phase = Phase::Running { started_at: None };
        true
    }

    /// Applies one animation frame at `now_ms` and returns the new phase.
    pub fn advance(&mut self, now_ms: f64) -> Phase {
        let started_at = match self.phase {
            Phase::Running { started_at: Some(t) } => t,
            Phase::Running { started_at: None } => {
                self.phase = Phase::Running { started_at: Some(now_ms) };
                now_ms
            }
            Phase::Idle | Phase::Settled => return self.phase,
        };

        let progress = if self.duration_ms == 0 {
            1.0
        } else {
            ((now_ms - started_at) / self.duration_ms as f64).clamp(0.0, 1.0)
        };

        if progress >= 1.0 {
            self.finish();
        } else {
            let eased = (ease_out_quart(progress) * self.target as f64).floor() as u32;
            self.value = eased.clamp(self.value, self.target);
        }
        self.phase
    }

    /// Jumps to the end without animating.
    pub fn finish(&mut self) {
        self.value = self.target;
        self.phase = Phase::Settled;
    }

    pub fn display(&self, suffix: &str) -> String {
        format!("{}{}", self.value, suffix)
    }
}

#[cfg(test)]
impl CountUp {
    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Runs a started counter at 16ms frames from `t0` until it settles.
    fn run_frames(counter: &mut CountUp, t0: f64) -> Vec<u32> {
        let mut values = Vec::new();
        let mut now = t0;
        while counter.advance(now).is_running() {
            values.push(counter.value());
            now += 16.0;
        }
        values.push(counter.value());
        values
    }

    #[test]
    fn easing_endpoints() {
        assert_eq!(ease_out_quart(0.0), 0.0);
        assert_eq!(ease_out_quart(1.0), 1.0);
        assert_eq!(ease_out_quart(-2.0), 0.0);
        assert_eq!(ease_out_quart(5.0), 1.0);
        assert!((ease_out_quart(0.5) - 0.9375).abs() < 1e-12);
    }

    #[test]
    fn idle_counter_ignores_frames() {
        let mut counter = CountUp::new(150, 2000);
        assert_eq!(counter.advance(500.0), Phase::Idle);
        assert_eq!(counter.value(), 0);
    }

    #[test]
    fn counts_to_target_with_suffix() {
        let mut counter = CountUp::new(150, 2000);
        assert!(counter.start());

        let t = 10_000.0;
        counter.advance(t);
        assert_eq!(counter.display("+"), "0+");

        counter.advance(t + 1000.0);
        let halfway = counter.value();
        assert!(halfway > 75 && halfway < 150, "eased halfway value {}", halfway);

        assert_eq!(counter.advance(t + 2000.0), Phase::Settled);
        assert_eq!(counter.display("+"), "150+");
    }

    #[test]
    fn sequence_is_monotonic_and_bounded() {
        let mut counter = CountUp::new(987, 1500);
        counter.start();
        let values = run_frames(&mut counter, 0.0);
        assert_eq!(values.first(), Some(&0));
        assert_eq!(values.last(), Some(&987));
        assert!(values.windows(2).all(|w| w[0] <= w[1]));
        assert!(values.iter().all(|v| *v <= 987));
    }

    #[test]
    fn late_or_reordered_timestamps_never_decrease() {
        let mut counter = CountUp::new(100, 1000);
        counter.start();
        counter.advance(0.0);
        counter.advance(600.0);
        let before = counter.value();
        counter.advance(300.0);
        assert_eq!(counter.value(), before);
        counter.advance(-50.0);
        assert_eq!(counter.value(), before);
    }

    #[test]
    fn duplicate_start_does_not_restart() {
        let mut counter = CountUp::new(40, 1000);
        assert!(counter.start());
        counter.advance(0.0);
        counter.advance(500.0);
        let mid = counter.value();

        assert!(!counter.start());
        counter.advance(500.0);
        assert_eq!(counter.value(), mid);

        counter.advance(1000.0);
        assert!(!counter.start());
        assert_eq!(counter.phase(), Phase::Settled);
        assert_eq!(counter.advance(99_999.0), Phase::Settled);
        assert_eq!(counter.value(), 40);
    }

    #[test]
    fn zero_target_stays_zero() {
        let mut counter = CountUp::new(0, 2000);
        counter.start();
        let values = run_frames(&mut counter, 0.0);
        assert!(values.iter().all(|v| *v == 0));
        assert_eq!(counter.phase(), Phase::Settled);
    }

    #[test]
    fn zero_duration_settles_on_first_frame() {
        let mut counter = CountUp::new(24, 0);
        counter.start();
        assert_eq!(counter.advance(123.0), Phase::Settled);
        assert_eq!(counter.display("/7"), "24/7");
    }

    #[test]
    fn staggered_counters_finish_independently() {
        let targets = [150, 100, 35, 5];
        let mut counters: Vec<CountUp> = targets
            .iter()
            .enumerate()
            .map(|(i, target)| CountUp::new(*target, 2000 + i as u32 * 200))
            .collect();
        for counter in &mut counters {
            counter.start();
            counter.advance(0.0);
        }

        for counter in &mut counters {
            counter.advance(2000.0);
        }
        assert_eq!(counters[0].phase(), Phase::Settled);
        assert!(counters[1..].iter().all(|c| c.phase().is_running()));

        for counter in &mut counters {
            counter.advance(2600.0);
        }
        let finals: Vec<u32> = counters.iter().map(CountUp::value).collect();
        assert_eq!(finals, targets);
    }

    #[test]
    fn finish_jumps_to_target() {
        let mut counter = CountUp::new(98, 2400);
        counter.start();
        counter.finish();
        assert_eq!(counter.value(), 98);
        assert_eq!(counter.phase(), Phase::Settled);
    }
}
