//! Serializable scheduler checkpoint.

use serde::{Deserialize, Serialize};

/// Snapshot of a warmup schedule for checkpoint save/restore
///
/// Produced by `state_dict()` and consumed by `load_state_dict()` on
/// [`LinearWarmupLR`](super::LinearWarmupLR) and
/// [`LinearWarmupDecayLR`](super::LinearWarmupDecayLR).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchedulerState {
    /// Total training steps
    pub total_steps: usize,
    /// Warmup steps
    pub warmup_steps: usize,
    /// Step the schedule sits on
    pub last_step: i64,
    /// Base learning rate per parameter group
    pub base_lrs: Vec<f32>,
    /// Learning rates produced by the last step
    pub last_lrs: Vec<f32>,
}
