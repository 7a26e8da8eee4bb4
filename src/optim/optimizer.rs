//! Optimizer trait

/// The learning-rate surface of an optimization algorithm
///
/// Schedulers only need to read and write learning rates, so this is the
/// whole contract. Optimizers with a single parameter group implement
/// [`lr`](Optimizer::lr) and [`set_lr`](Optimizer::set_lr); optimizers with
/// several groups also override the `group` methods.
pub trait Optimizer {
    /// Get learning rate
    fn lr(&self) -> f32;

    /// Set learning rate
    fn set_lr(&mut self, lr: f32);

    /// Number of parameter groups
    fn param_groups(&self) -> usize {
        1
    }

    /// Get the learning rate of parameter group `idx`
    fn group_lr(&self, idx: usize) -> f32 {
        debug_assert!(idx < self.param_groups());
        self.lr()
    }

    /// Set the learning rate of parameter group `idx`
    fn set_group_lr(&mut self, idx: usize, lr: f32) {
        debug_assert!(idx < self.param_groups());
        self.set_lr(lr);
    }

    /// Learning rates of all parameter groups, in group order
    fn group_lrs(&self) -> Vec<f32> {
        (0..self.param_groups()).map(|i| self.group_lr(i)).collect()
    }
}
