//! Property-based tests for configuration validation

use super::error::ValidationError;
use super::validator::validate_config;
use crate::config::schema::*;
use crate::train::Monitor;
use proptest::prelude::*;
use std::path::PathBuf;

fn arb_callback() -> impl Strategy<Value = CallbackSpec> {
    prop_oneof![
        proptest::option::of(1usize..1000)
            .prop_map(|log_interval| CallbackSpec::Progress { log_interval }),
        (1usize..20, 0.0f32..1.0).prop_map(|(patience, min_delta)| {
            CallbackSpec::EarlyStopping {
                patience,
                min_delta,
                monitor: Monitor::ValidLoss,
            }
        }),
        (proptest::option::of(1usize..10), any::<bool>()).prop_map(|(every, save_best)| {
            CallbackSpec::Checkpoint {
                dir: PathBuf::from("checkpoints"),
                every,
                save_best,
                monitor: Monitor::TrainLoss,
            }
        }),
        Just(CallbackSpec::History),
    ]
}

fn arb_valid_config() -> impl Strategy<Value = TrainConfig> {
    (
        1usize..100,                                     // epochs
        1usize..500,                                     // log_interval
        any::<bool>(),                                   // validate
        proptest::collection::vec(arb_callback(), 0..6), // callbacks
    )
        .prop_map(|(epochs, log_interval, validate, callbacks)| TrainConfig {
            epochs,
            log_interval,
            validate,
            callbacks,
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_valid_config_passes(config in arb_valid_config()) {
        prop_assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn prop_zero_epochs_fails(config in arb_valid_config()) {
        let mut config = config;
        config.epochs = 0;
        prop_assert_eq!(
            validate_config(&config),
            Err(ValidationError::InvalidEpochs(0))
        );
    }

    #[test]
    fn prop_yaml_roundtrip_stays_valid(config in arb_valid_config()) {
        let yaml = serde_yaml::to_string(&config).unwrap();
        let back: TrainConfig = serde_yaml::from_str(&yaml).unwrap();
        prop_assert_eq!(&back.callbacks.len(), &config.callbacks.len());
        prop_assert!(validate_config(&back).is_ok());
    }
}
