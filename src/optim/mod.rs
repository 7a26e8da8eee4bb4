//! Learning rate scheduling for optimizers

mod optimizer;
pub mod scheduler;

pub use optimizer::Optimizer;
pub use scheduler::{
    LRScheduler, LinearWarmupDecayLR, LinearWarmupLR, Result, SchedulerError, SchedulerState,
};
