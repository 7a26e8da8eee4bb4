//! Property-based tests for scheduler configs and the schedules they build

use super::error::ConfigError;
use super::schema::{ScheduleKind, SchedulerSpec};
use crate::optim::SchedulerError;
use proptest::prelude::*;

fn arb_kind() -> impl Strategy<Value = ScheduleKind> {
    prop_oneof![
        Just(ScheduleKind::LinearWarmup),
        Just(ScheduleKind::LinearWarmupDecay),
    ]
}

fn arb_valid_spec() -> impl Strategy<Value = SchedulerSpec> {
    (arb_kind(), 2usize..2000)
        .prop_flat_map(|(kind, total_steps)| (Just(kind), Just(total_steps), 0..total_steps))
        .prop_map(|(kind, total_steps, warmup_steps)| {
            SchedulerSpec::new(kind, total_steps, warmup_steps)
        })
}

fn arb_base_lrs() -> impl Strategy<Value = Vec<f32>> {
    proptest::collection::vec(1e-6f32..1.0, 1..4)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_valid_spec_passes(spec in arb_valid_spec()) {
        prop_assert!(spec.validate().is_ok());
    }

    #[test]
    fn prop_warmup_beyond_total_fails(spec in arb_valid_spec(), extra in 1usize..100) {
        let mut spec = spec;
        spec.warmup_steps = spec.total_steps + extra;
        let is_warmup_error = matches!(
            spec.validate(),
            Err(ConfigError::Scheduler(SchedulerError::WarmupExceedsTotal { .. }))
        );
        prop_assert!(is_warmup_error);
    }

    #[test]
    fn prop_yaml_roundtrip(spec in arb_valid_spec()) {
        let yaml = spec.to_yaml().unwrap();
        prop_assert_eq!(SchedulerSpec::from_yaml(&yaml).unwrap(), spec);
    }

    #[test]
    fn prop_lrs_within_base_over_schedule(spec in arb_valid_spec(), base_lrs in arb_base_lrs()) {
        let mut scheduler = spec.build(base_lrs.clone()).unwrap();
        // Both variants stay within [0, base] up to and including total_steps - 1
        while scheduler.last_step() < spec.total_steps as i64 - 1 {
            for (lr, base) in scheduler.get_lrs().iter().zip(&base_lrs) {
                prop_assert!(*lr >= 0.0 && *lr <= *base * (1.0 + 1e-6));
            }
            scheduler.step();
        }
    }

    #[test]
    fn prop_groups_share_multiplier(spec in arb_valid_spec(), base_lrs in arb_base_lrs(), steps in 0usize..50) {
        let mut scheduler = spec.build(base_lrs.clone()).unwrap();
        for _ in 0..steps {
            scheduler.step();
        }
        let lrs = scheduler.get_lrs();
        prop_assert_eq!(lrs.len(), base_lrs.len());
        let factor = lrs[0] / base_lrs[0];
        for (lr, base) in lrs.iter().zip(&base_lrs) {
            prop_assert!((lr / base - factor).abs() <= 1e-5 * factor.abs().max(1.0));
        }
    }

    #[test]
    fn prop_state_dict_resumes_identically(spec in arb_valid_spec(), steps in 0usize..50) {
        let mut saved = spec.build(vec![0.1]).unwrap();
        for _ in 0..steps {
            saved.step();
        }
        let mut resumed = spec.build(vec![0.5]).unwrap();
        resumed.load_state_dict(&saved.state_dict()).unwrap();
        saved.step();
        resumed.step();
        prop_assert_eq!(saved.get_last_lr(), resumed.get_last_lr());
    }
}
