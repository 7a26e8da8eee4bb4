//! Declarative scheduler configuration
//!
//! Schedules are described in YAML, validated, then built over the base
//! learning rates of the optimizer's parameter groups.

mod error;
mod loader;
mod schema;

#[cfg(test)]
mod proptests;

pub use error::{ConfigError, Result};
pub use loader::load_spec;
pub use schema::{ScheduleKind, SchedulerSpec};
