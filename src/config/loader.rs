//! Load scheduler specs from YAML files

use std::fs;
use std::path::Path;

use super::error::{ConfigError, Result};
use super::schema::SchedulerSpec;

/// Load and validate a scheduler spec from a YAML file
///
/// # Example
///
/// ```no_run
/// use entrenar_schedule::config::load_spec;
///
/// let spec = load_spec("schedule.yaml")?;
/// let mut scheduler = spec.build(vec![3e-4])?;
/// scheduler.step();
/// # Ok::<(), entrenar_schedule::ConfigError>(())
/// ```
pub fn load_spec<P: AsRef<Path>>(path: P) -> Result<SchedulerSpec> {
    let path = path.as_ref();
    let yaml_content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let spec = SchedulerSpec::from_yaml(&yaml_content)?;
    spec.validate()?;

    tracing::info!(
        path = %path.display(),
        name = ?spec.name,
        total_steps = spec.total_steps,
        warmup_steps = spec.warmup_steps,
        "loaded scheduler config"
    );
    Ok(spec)
}
