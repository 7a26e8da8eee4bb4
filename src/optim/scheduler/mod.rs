//! Learning rate schedulers
//!
//! Provides linear warmup followed by linear decay, in two boundary
//! conventions:
//! - `LinearWarmupLR` - warmup `(t + 1) / (warmup + 1)`, decay `(T - t) / (T - warmup)`
//! - `LinearWarmupDecayLR` - warmup `(t + 1) / warmup`, decay `(T - t - 1) / (T - warmup)`
//!
//! Both scale every parameter group's base learning rate by the same
//! multiplier. Construction takes the first step, so a fresh scheduler
//! already reports the step-0 learning rates.

mod error;
mod linear_schedule;
mod linear_warmup;
mod linear_warmup_decay;
mod state;


pub use error::{Result, SchedulerError};
pub use linear_warmup::LinearWarmupLR;
pub use linear_warmup_decay::LinearWarmupDecayLR;
pub use state::SchedulerState;

use super::Optimizer;

/// Learning rate scheduler trait
pub trait LRScheduler {
    /// Get the current learning rate of the first parameter group
    fn get_lr(&self) -> f32 {
        self.get_lrs().first().copied().unwrap_or_default()
    }

    /// Get the current learning rate of every parameter group
    fn get_lrs(&self) -> Vec<f32>;

    /// Learning rates recorded by the last step
    fn get_last_lr(&self) -> &[f32];

    /// Index of the step the scheduler sits on
    fn last_step(&self) -> i64;

    /// Step the scheduler (typically called after each batch)
    fn step(&mut self);

    /// Export the scheduler state for checkpointing
    fn state_dict(&self) -> SchedulerState;

    /// Restore the scheduler state from a checkpoint
    fn load_state_dict(&mut self, state: &SchedulerState) -> Result<()>;

    /// Apply the current learning rates to an optimizer
    ///
    /// Groups are paired by index; extra groups on either side are left alone.
    fn apply(&self, optimizer: &mut dyn Optimizer) {
        let groups = optimizer.param_groups();
        let lrs = self.get_lrs();
        if lrs.len() != groups {
            tracing::debug!(
                scheduler_groups = lrs.len(),
                optimizer_groups = groups,
                "parameter group count differs between scheduler and optimizer"
            );
        }
        for (idx, lr) in lrs.into_iter().take(groups).enumerate() {
            optimizer.set_group_lr(idx, lr);
        }
    }
}
