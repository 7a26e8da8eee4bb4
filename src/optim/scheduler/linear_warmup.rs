//! Linear warmup then linear decay to zero at `total_steps`

use super::linear_schedule::{validate_steps, LinearSchedule};
use super::{LRScheduler, Result, SchedulerState};
use crate::optim::Optimizer;

/// Linear Warmup Learning Rate Scheduler
///
/// Linearly increases the learning rate over `warmup_steps`, then linearly
/// decays it, reaching zero at step `total_steps`.
///
/// Formula:
/// ```text
/// t < warmup:  lr_t = lr_base * (t + 1) / (warmup + 1)
/// t >= warmup: lr_t = lr_base * (total - t) / (total - warmup)
/// ```
///
/// The warmup never reaches the base rate exactly; step `warmup` does.
#[derive(Debug, Clone)]
pub struct LinearWarmupLR {
    schedule: LinearSchedule,
}

impl LinearWarmupLR {
    const NAME: &'static str = "LinearWarmupLR";

    /// Create a new linear warmup scheduler starting at step 0
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
    if step < warmup {
        ((step + 1.0) / (warmup + 1.0)) as f32
    } else {
        ((total - step) / (total - warmup)) as f32
    }
}

impl LRScheduler for LinearWarmupLR {
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
