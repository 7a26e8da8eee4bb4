//! # entrenar-schedule
//!
//! Linear warmup / linear decay learning rate schedules.
//!
//! A schedule maps the current step index to a multiplier that scales the
//! base learning rate of every parameter group. Two boundary conventions are
//! provided:
//!
//! - [`LinearWarmupLR`]: warmup `(t + 1) / (warmup + 1)`, decay to zero at
//!   `total_steps`
//! - [`LinearWarmupDecayLR`]: warmup `(t + 1) / warmup`, decay to zero at
//!   `total_steps - 1`
//!
//! # Example
//!
//! ```
//! use entrenar_schedule::{LRScheduler, LinearWarmupLR};
//!
//! let mut scheduler = LinearWarmupLR::new(vec![0.1, 0.01], 100, 10)?;
//! for _ in 0..10 {
//!     scheduler.step();
//! }
//! assert_eq!(scheduler.last_step(), 10);
//! assert!((scheduler.get_lr() - 0.1).abs() < 1e-6);
//! # Ok::<(), entrenar_schedule::SchedulerError>(())
//! ```
//!
//! Schedules can also be described in YAML, see [`config`].

pub mod config;
pub mod optim;

pub use config::{load_spec, ConfigError, ScheduleKind, SchedulerSpec};
pub use optim::{
    LRScheduler, LinearWarmupDecayLR, LinearWarmupLR, Optimizer, SchedulerError, SchedulerState,
};
