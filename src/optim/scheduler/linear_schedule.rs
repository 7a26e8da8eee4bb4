//! Step counter and rate bookkeeping shared by the linear warmup schedulers

use super::error::{Result, SchedulerError};
use super::state::SchedulerState;

/// Multiplier as a function of `(step, warmup_steps, total_steps)`
pub(super) type MultiplierFn = fn(i64, usize, usize) -> f32;

/// Piecewise linear schedule over a fixed set of base learning rates
///
/// Owns everything except the multiplier formula, which each scheduler
/// supplies as a plain function.
#[derive(Debug, Clone)]
pub(super) struct LinearSchedule {
    name: &'static str,
    multiplier: MultiplierFn,
    total_steps: usize,
    warmup_steps: usize,
    base_lrs: Vec<f32>,
    last_step: i64,
    last_lrs: Vec<f32>,
    past_end: bool,
}

impl LinearSchedule {
    /// Build the schedule and take the initial step to `last_step + 1`
    ///
    /// Step counts must already be checked by the caller.
    pub(super) fn new(
        name: &'static str,
        multiplier: MultiplierFn,
        base_lrs: Vec<f32>,
        total_steps: usize,
        warmup_steps: usize,
        last_step: i64,
    ) -> Result<Self> {
        validate_base_lrs(&base_lrs)?;
        validate_last_step(last_step)?;

        let mut schedule = Self {
            name,
            multiplier,
            total_steps,
            warmup_steps,
            last_lrs: base_lrs.clone(),
            base_lrs,
            last_step,
            past_end: false,
        };
        schedule.advance();
        Ok(schedule)
    }

    pub(super) fn multiplier_at(&self, step: i64) -> f32 {
        (self.multiplier)(step, self.warmup_steps, self.total_steps)
    }

    pub(super) fn lrs_at(&self, step: i64) -> Vec<f32> {
        let factor = self.multiplier_at(step);
        self.base_lrs.iter().map(|lr| factor * lr).collect()
    }

    pub(super) fn advance(&mut self) {
        self.last_step = self.last_step.saturating_add(1);
        let factor = self.multiplier_at(self.last_step);
        self.last_lrs = self.lrs_at(self.last_step);

        tracing::debug!(
            scheduler = self.name,
            step = self.last_step,
            multiplier = factor,
            "scheduler step"
        );
        if factor < 0.0 && !self.past_end {
            self.past_end = true;
            tracing::warn!(
                scheduler = self.name,
                step = self.last_step,
                total_steps = self.total_steps,
                "stepped past the end of the schedule, learning rates are negative"
            );
        }
    }

    pub(super) fn total_steps(&self) -> usize {
        self.total_steps
    }

    pub(super) fn warmup_steps(&self) -> usize {
        self.warmup_steps
    }

    pub(super) fn base_lrs(&self) -> &[f32] {
        &self.base_lrs
    }

    pub(super) fn last_step(&self) -> i64 {
        self.last_step
    }

    pub(super) fn last_lrs(&self) -> &[f32] {
        &self.last_lrs
    }

    pub(super) fn state(&self) -> SchedulerState {
        SchedulerState {
            total_steps: self.total_steps,
            warmup_steps: self.warmup_steps,
            last_step: self.last_step,
            base_lrs: self.base_lrs.clone(),
            last_lrs: self.last_lrs.clone(),
        }
    }

    /// Replace the schedule state from a checkpoint
    ///
    /// Step counts must already be checked by the caller.
    pub(super) fn restore(&mut self, state: &SchedulerState) -> Result<()> {
        let expected = self.base_lrs.len();
        for found in [state.base_lrs.len(), state.last_lrs.len()] {
            if found != expected {
                return Err(SchedulerError::GroupCountMismatch { expected, found });
            }
        }
        validate_base_lrs(&state.base_lrs)?;
        validate_last_step(state.last_step)?;

        self.total_steps = state.total_steps;
        self.warmup_steps = state.warmup_steps;
        self.base_lrs = state.base_lrs.clone();
        self.last_step = state.last_step;
        self.last_lrs = state.last_lrs.clone();
        self.past_end = self.multiplier_at(self.last_step) < 0.0;

        tracing::debug!(
            scheduler = self.name,
            step = self.last_step,
            "scheduler state restored"
        );
        Ok(())
    }
}

/// Check the step counts common to every linear warmup schedule
pub(super) fn validate_steps(total_steps: usize, warmup_steps: usize) -> Result<()> {
    if total_steps == 0 {
        return Err(SchedulerError::InvalidTotalSteps(total_steps));
    }
    if warmup_steps > total_steps {
        return Err(SchedulerError::WarmupExceedsTotal {
            warmup_steps,
            total_steps,
        });
    }
    // Both decay formulas divide by (total_steps - warmup_steps)
    if warmup_steps == total_steps {
        return Err(SchedulerError::NoDecayPhase(total_steps));
    }
    Ok(())
}

fn validate_base_lrs(base_lrs: &[f32]) -> Result<()> {
    if base_lrs.is_empty() {
        return Err(SchedulerError::EmptyBaseLrs);
    }
    if let Some((index, &lr)) = base_lrs
        .iter()
        .enumerate()
        .find(|(_, lr)| !lr.is_finite() || **lr <= 0.0)
    {
        return Err(SchedulerError::InvalidBaseLr { index, lr });
    }
    Ok(())
}

fn validate_last_step(last_step: i64) -> Result<()> {
    // Construction steps once more, so i64::MAX has no successor
    if last_step < -1 || last_step == i64::MAX {
        return Err(SchedulerError::InvalidLastStep(last_step));
    }
    Ok(())
}
