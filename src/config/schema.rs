//! YAML schema for learning rate schedule configuration
//!
//! ```yaml
//! name: linear_warmup_decay
//! total_steps: 1000
//! warmup_steps: 100
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::error::Result;
use crate::optim::{LRScheduler, LinearWarmupDecayLR, LinearWarmupLR};

/// Which linear warmup schedule to build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScheduleKind {
    /// [`LinearWarmupLR`]
    #[default]
    LinearWarmup,
    /// [`LinearWarmupDecayLR`]
    LinearWarmupDecay,
}

/// Learning rate schedule description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchedulerSpec {
    /// Schedule variant
    #[serde(default)]
    pub name: ScheduleKind,

    /// Total training steps
    pub total_steps: usize,

    /// Warmup steps
    #[serde(default)]
    pub warmup_steps: usize,

    /// Step to resume after (-1 starts fresh)
    #[serde(default = "default_last_step")]
    pub last_step: i64,

    /// Any other keys; accepted and ignored
    #[serde(flatten)]
    pub params: HashMap<String, serde_json::Value>,
}

fn default_last_step() -> i64 {
    -1
}

impl SchedulerSpec {
    /// Create a spec for `kind` starting fresh
    pub fn new(name: ScheduleKind, total_steps: usize, warmup_steps: usize) -> Self {
        Self {
            name,
            total_steps,
            warmup_steps,
            last_step: default_last_step(),
            params: HashMap::new(),
        }
    }

    /// Set the step to resume after
    pub fn with_last_step(mut self, last_step: i64) -> Self {
        self.last_step = last_step;
        self
    }

    /// Parse a spec from YAML text
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Serialize the spec to YAML text
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Check the step counts without building a scheduler
    pub fn validate(&self) -> Result<()> {
        // Any valid base rate works; only the step counts are checked
        self.build(vec![1.0]).map(|_| ())
    }

    /// Build the scheduler over the given base learning rates
    pub fn build(&self, base_lrs: Vec<f32>) -> Result<Box<dyn LRScheduler>> {
        if !self.params.is_empty() {
            tracing::debug!(
                keys = ?self.params.keys().collect::<Vec<_>>(),
                "ignoring extra scheduler parameters"
            );
        }
        let scheduler: Box<dyn LRScheduler> = match self.name {
            ScheduleKind::LinearWarmup => Box::new(LinearWarmupLR::with_last_step(
                base_lrs,
                self.total_steps,
                self.warmup_steps,
                self.last_step,
            )?),
            ScheduleKind::LinearWarmupDecay => Box::new(LinearWarmupDecayLR::with_last_step(
                base_lrs,
                self.total_steps,
                self.warmup_steps,
                self.last_step,
            )?),
        };
        Ok(scheduler)
    }
}
