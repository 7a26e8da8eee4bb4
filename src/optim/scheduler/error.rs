//! Error types for learning rate schedulers.

use thiserror::Error;

/// Scheduler construction and restore errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SchedulerError {
    #[error("Invalid total steps: {0} (must be > 0)")]
    InvalidTotalSteps(usize),

    #[error("Warmup steps ({warmup_steps}) exceed total steps ({total_steps})")]
    WarmupExceedsTotal {
        warmup_steps: usize,
        total_steps: usize,
    },

    #[error("Warmup steps equal total steps ({0}): no decay phase left")]
    NoDecayPhase(usize),

    #[error("At least one base learning rate is required")]
    EmptyBaseLrs,

    #[error("Invalid base learning rate {lr} for parameter group {index} (must be finite and > 0.0)")]
    InvalidBaseLr { index: usize, lr: f32 },

    #[error("Invalid last step: {0} (must be >= -1 and < i64::MAX)")]
    InvalidLastStep(i64),

    #[error("Parameter group count mismatch: scheduler has {expected}, state has {found}")]
    GroupCountMismatch { expected: usize, found: usize },
}

/// Result type for scheduler operations
pub type Result<T> = std::result::Result<T, SchedulerError>;
