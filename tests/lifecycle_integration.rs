//! Integration tests for callback dispatch and the reference trainer

use std::sync::{Arc, Mutex};

use train_hooks::config::{load_config, TrainConfig};
use train_hooks::train::{
    CheckpointCallback, EarlyStopping, HistoryCallback, SyntheticModel, Trainer, TrainerState,
};
use train_hooks::{Callback, CallbackRunner, HookArgs, HookError, Result, TrainingEvent};

type Log = Arc<Mutex<Vec<String>>>;

/// Opaque trainer handle passed through the runner
struct ExternalTrainer {
    name: &'static str,
}

struct AppendOnTrainStart {
    tag: &'static str,
    log: Log,
}

impl Callback<ExternalTrainer> for AppendOnTrainStart {
    fn on_train_start(&mut self, _: &mut ExternalTrainer, _: &HookArgs) -> Result<()> {
        self.log.lock().expect("lock acquisition should succeed").push(self.tag.into());
        Ok(())
    }
}

struct RaiseOnTrainStart;

impl Callback<ExternalTrainer> for RaiseOnTrainStart {
    fn on_train_start(&mut self, trainer: &mut ExternalTrainer, _: &HookArgs) -> Result<()> {
        Err(HookError::callback(
            "RaiseOnTrainStart",
            TrainingEvent::TrainStart,
            format!("refusing to start {}", trainer.name),
        ))
    }
}

struct NoOverrides;
impl Callback<ExternalTrainer> for NoOverrides {}

#[test]
fn test_overriding_observer_then_silent_observer() {
    let log = Log::default();
    let mut runner = CallbackRunner::new()
        .with(AppendOnTrainStart {
            tag: "A",
            log: log.clone(),
        })
        .with(NoOverrides);

    let mut trainer = ExternalTrainer { name: "t" };
    runner
        .fire(TrainingEvent::TrainStart, &mut trainer)
        .expect("dispatch should succeed");

    assert_eq!(*log.lock().expect("lock acquisition should succeed"), vec!["A"]);
}

#[test]
fn test_failing_observer_blocks_later_observers() {
    let log = Log::default();
    let mut runner = CallbackRunner::new()
        .with(RaiseOnTrainStart)
        .with(AppendOnTrainStart {
            tag: "B",
            log: log.clone(),
        });

    let mut trainer = ExternalTrainer { name: "t" };
    let err = runner
        .fire(TrainingEvent::TrainStart, &mut trainer)
        .expect_err("dispatch should fail");

    assert!(err.to_string().contains("refusing to start t"));
    assert!(log.lock().expect("lock acquisition should succeed").is_empty());
}

#[test]
fn test_silent_observers_accept_every_event() {
    let mut runner = CallbackRunner::new().with(NoOverrides).with(NoOverrides);
    let mut trainer = ExternalTrainer { name: "t" };
    let args = HookArgs::new().with("anything", 1);

    for event in TrainingEvent::ALL {
        assert!(runner.dispatch(event, &mut trainer, &args).is_ok());
    }
}

#[test]
fn test_parsed_event_names_dispatch() {
    let log = Log::default();
    let mut runner = CallbackRunner::new().with(AppendOnTrainStart {
        tag: "parsed",
        log: log.clone(),
    });

    let event: TrainingEvent = "on_train_start".parse().expect("hook name should parse");
    runner
        .fire(event, &mut ExternalTrainer { name: "t" })
        .expect("dispatch should succeed");
    assert_eq!(log.lock().expect("lock acquisition should succeed").len(), 1);
}

#[test]
fn test_trainer_from_yaml_with_checkpoints() {
    let dir = tempfile::tempdir().expect("temp dir creation should succeed");
    let ckpt_dir = dir.path().join("ckpt");
    let config_path = dir.path().join("train.yaml");
    std::fs::write(
        &config_path,
        format!(
            "epochs: 3\nlog_interval: 1\ncallbacks:\n  - type: progress\n  - type: checkpoint\n    dir: {}\n    every: 1\n",
            ckpt_dir.display()
        ),
    )
    .expect("config write should succeed");

    let config = load_config(&config_path).expect("config should load");
    let mut trainer =
        Trainer::from_config(SyntheticModel::new(1.0, 0.9), &config).expect("config should be valid");
    let history = HistoryCallback::new();
    trainer.add_callback(history.clone());

    let batches = vec![(); 2];
    let result = trainer
        .fit(&batches, Some(batches.as_slice()))
        .expect("training should succeed");

    assert_eq!(result.epochs_run, 3);
    for epoch in 0..3 {
        assert!(ckpt_dir.join(format!("state_epoch_{epoch}.json")).exists());
    }
    assert!(ckpt_dir.join("state_best.json").exists());

    let last: TrainerState = serde_json::from_str(
        &std::fs::read_to_string(ckpt_dir.join("state_last.json"))
            .expect("last checkpoint should exist"),
    )
    .expect("checkpoint should be valid JSON");
    assert_eq!(last.global_step, 6);
    assert_eq!(last.last_event, Some(TrainingEvent::TrainEnd));
    assert_eq!(history.count(TrainingEvent::EpochEnd), 3);
}

#[test]
fn test_checkpoint_failure_aborts_training() {
    let dir = tempfile::tempdir().expect("temp dir creation should succeed");
    let blocker = dir.path().join("file");
    std::fs::write(&blocker, "x").expect("write should succeed");

    let history = HistoryCallback::new();
    let mut trainer = Trainer::new(SyntheticModel::new(1.0, 0.9), 5);
    trainer.add_callback(CheckpointCallback::new(&blocker));
    trainer.add_callback(history.clone());

    let err = trainer.fit(&[()], None).expect_err("checkpoint write should fail");
    assert!(matches!(err, HookError::Io { .. }));
    // The checkpoint callback failed first, so the history never saw epoch_end
    assert_eq!(history.count(TrainingEvent::EpochEnd), 0);
    assert_eq!(history.count(TrainingEvent::TrainEnd), 0);
}

#[test]
fn test_early_stopping_ends_run() {
    let mut trainer = Trainer::new(SyntheticModel::new(1.0, 0.5).with_valid_floor(0.2), 100);
    trainer.add_callback(EarlyStopping::new(3, 0.0));

    let batches = vec![(); 2];
    let result = trainer
        .fit(&batches, Some(batches.as_slice()))
        .expect("training should succeed");

    assert!(result.stopped_early);
    assert!(result.epochs_run < 100);
    assert_eq!(result.best_valid_loss, Some(0.2));
}

#[test]
fn test_inline_config_roundtrip() {
    let config = TrainConfig::from_yaml_str(
        "epochs: 2\ncallbacks:\n  - type: history\n  - type: early_stopping\n    patience: 1\n",
    )
    .expect("config should parse");
    config.validate().expect("config should be valid");
    assert_eq!(config.callbacks.len(), 2);
}
