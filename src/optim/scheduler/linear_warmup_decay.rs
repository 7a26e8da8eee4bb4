//! Linear warmup then linear decay to zero at `total_steps - 1`

use super::linear_schedule::{validate_steps, LinearSchedule};
use super::{LRScheduler, Result, SchedulerState};
use crate::optim::Optimizer;

/// Linear Warmup + Linear Decay Learning Rate Scheduler
///
/// Same shape as [`LinearWarmupLR`](super::LinearWarmupLR) with shifted
/// boundaries: the warmup reaches the base rate on its last step and the
/// decay hits zero on the last training step.
///
/// Formula:
/// ```text
/// t < warmup:  lr_t = lr_base * (t + 1) / warmup
/// t >= warmup: lr_t = lr_base * (total - t - 1) / (total - warmup)
/// ```
///
/// With `warmup_steps == 0` the schedule is pure decay from
/// `(total - 1) / total`.
#[derive(Debug, Clone)]
pub struct LinearWarmupDecayLR {
    schedule: LinearSchedule,
}

impl LinearWarmupDecayLR {
    const NAME: &'static str = "LinearWarmupDecayLR";

    /// Create a new warmup + decay scheduler starting at step 0
    ///
    /// # Arguments
    /// * `base_lrs` - Base learning rate per parameter group
    /// * `total_steps` - Total training steps (including warmup)
    /// * `warmup_steps` - Number of warmup steps, must be < `total_steps`
    pub fn new(base_lrs: Vec<f32>, total_steps: usize, warmup_steps: usize) -> Result<Self> {
        Self::with_last_step(base_lrs, total_steps, warmup_steps, -1)
    }

    /// Create a scheduler resuming after `last_step`
    ///
    /// `-1` starts fresh at step 0; `k >= 0` resumes at step `k + 1`.
    pub fn with_last_step(
        base_lrs: Vec<f32>,
        total_steps: usize,
        warmup_steps: usize,
        last_step: i64,
    ) -> Result<Self> {
        validate_steps(total_steps, warmup_steps)?;
        let schedule = LinearSchedule::new(
            Self::NAME,
            multiplier,
            base_lrs,
            total_steps,
            warmup_steps,
            last_step,
        )?;
        Ok(Self { schedule })
    }

    /// Create a scheduler using the optimizer's current learning rates as base rates
    pub fn from_optimizer(
        optimizer: &dyn Optimizer,
        total_steps: usize,
        warmup_steps: usize,
    ) -> Result<Self> {
        Self::new(optimizer.group_lrs(), total_steps, warmup_steps)
    }

    /// Multiplier at the current step
    pub fn multiplier(&self) -> f32 {
        self.schedule.multiplier_at(self.schedule.last_step())
    }

    /// Multiplier at an arbitrary step
    pub fn multiplier_at(&self, step: i64) -> f32 {
        self.schedule.multiplier_at(step)
    }

    /// Base learning rate per parameter group
    pub fn base_lrs(&self) -> &[f32] {
        self.schedule.base_lrs()
    }

    /// Total training steps
    pub fn total_steps(&self) -> usize {
        self.schedule.total_steps()
    }

    /// Number of warmup steps
    pub fn warmup_steps(&self) -> usize {
        self.schedule.warmup_steps()
    }
}

fn multiplier(step: i64, warmup_steps: usize, total_steps: usize) -> f32 {
    let (step, warmup, total) = (step as f64, warmup_steps as f64, total_steps as f64);
    // warmup_steps == 0 has no warmup phase, even before step 0
    if warmup_steps > 0 && step < warmup {
        ((step + 1.0) / warmup) as f32
    } else {
        ((total - step - 1.0) / (total - warmup)) as f32
    }
}

impl LRScheduler for LinearWarmupDecayLR {
    fn get_lrs(&self) -> Vec<f32> {
        self.schedule.lrs_at(self.schedule.last_step())
    }

    fn get_last_lr(&self) -> &[f32] {
        self.schedule.last_lrs()
    }

    fn last_step(&self) -> i64 {
        self.schedule.last_step()
    }

    fn step(&mut self) {
        self.schedule.advance();
    }

    fn state_dict(&self) -> SchedulerState {
        self.schedule.state()
    }

    fn load_state_dict(&mut self, state: &SchedulerState) -> Result<()> {
        validate_steps(state.total_steps, state.warmup_steps)?;
        self.schedule.restore(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_multiplier_boundaries() {
        assert_abs_diff_eq!(multiplier(0, 10, 100), 0.1, epsilon = 1e-6);
        assert_abs_diff_eq!(multiplier(9, 10, 100), 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(multiplier(10, 10, 100), 89.0 / 90.0, epsilon = 1e-6);
        assert_abs_diff_eq!(multiplier(99, 10, 100), 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_multiplier_past_end_is_negative() {
        assert!(multiplier(100, 10, 100) < 0.0);
    }

    #[test]
    fn test_multiplier_without_warmup() {
        assert_abs_diff_eq!(multiplier(-1, 0, 100), 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(multiplier(0, 0, 100), 0.99, epsilon = 1e-6);
        assert_abs_diff_eq!(multiplier(99, 0, 100), 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_multiplier_extreme_steps_do_not_overflow() {
        assert!(multiplier(i64::MIN, 10, 100).is_finite());
        assert!(multiplier(i64::MAX, 10, 100) < 0.0);
    }

    #[test]
    fn test_zero_warmup_decays_from_first_step() {
        let mut scheduler = LinearWarmupDecayLR::new(vec![1.0], 100, 0).unwrap();
        assert_abs_diff_eq!(scheduler.get_lr(), 0.99, epsilon = 1e-6);
        while scheduler.last_step() < 99 {
            scheduler.step();
        }
        assert_abs_diff_eq!(scheduler.get_lr(), 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_load_state_accepts_zero_warmup() {
        let mut scheduler = LinearWarmupDecayLR::new(vec![1.0], 100, 10).unwrap();
        let mut state = scheduler.state_dict();
        state.warmup_steps = 0;
        state.last_step = -1;
        scheduler.load_state_dict(&state).unwrap();
        scheduler.step();
        assert_eq!(scheduler.last_step(), 0);
        assert_abs_diff_eq!(scheduler.get_lr(), 0.99, epsilon = 1e-6);
    }
}
