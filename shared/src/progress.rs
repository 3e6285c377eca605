//! # Staged Generation Progress
//!
//! A fake generation pipeline: after a prompt is accepted the view walks a
//! fixed list of labels, one per interval, and stops on the last one. There is
//! no real work behind it, no failure path and no cancellation.
//!
//! [`GenerationProgress`] is the state machine, [`run_progress`] is the
//! sequential timer chain that drives it. The chain is generic over its sleep
//! function so the browser can plug in `gloo-timers` while tests resolve
//! delays immediately.

use std::future::Future;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Delay between two progress steps.
pub const DEFAULT_STEP_INTERVAL_MS: u32 = 8_000;

pub const DEFAULT_STEP_LABELS: [&str; 5] = [
    "Analyzing prompt...",
    "Setting up core systems...",
    "Generating required assets...",
    "Configuring interactive elements...",
    "Building your game now...",
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Progress needs at least one step label")]
    NoLabels,
}

/// Timing and labels of the simulated pipeline.
///
/// Always holds at least one label; deserialization goes through the same
/// check as [`ProgressConfig::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawProgressConfig")]
pub struct ProgressConfig {
    step_interval_ms: u32,
    labels: Vec<String>,
}

#[derive(Deserialize)]
#[serde(default)]
struct RawProgressConfig {
    step_interval_ms: u32,
    labels: Vec<String>,
}

impl Default for RawProgressConfig {
    fn default() -> Self {
        Self {
            step_interval_ms: DEFAULT_STEP_INTERVAL_MS,
            labels: DEFAULT_STEP_LABELS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl TryFrom<RawProgressConfig> for ProgressConfig {
    type Error = ConfigError;

    fn try_from(raw: RawProgressConfig) -> Result<Self, Self::Error> {
        Self::new(raw.step_interval_ms, raw.labels)
    }
}

impl Default for ProgressConfig {
    fn default() -> Self {
        let raw = RawProgressConfig::default();
        Self {
            step_interval_ms: raw.step_interval_ms,
            labels: raw.labels,
        }
    }
}

impl ProgressConfig {
    pub fn new(step_interval_ms: u32, labels: Vec<String>) -> Result<Self, ConfigError> {
        if labels.is_empty() {
            return Err(ConfigError::NoLabels);
        }
        Ok(Self {
            step_interval_ms,
            labels,
        })
    }

    pub fn step_interval(&self) -> Duration {
        Duration::from_millis(u64::from(self.step_interval_ms))
    }

    pub fn total_steps(&self) -> usize {
        self.labels.len()
    }
}

/// How a visible step is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    /// Static filled marker.
    Completed,
    /// Spinning marker. Exactly one visible step has this status.
    InProgress,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepView {
    pub index: usize,
    pub label: String,
    pub status: StepStatus,
}

/// Position inside the fixed label list.
///
/// `step` only moves forward, one at a time, and never passes the last label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationProgress {
    step: usize,
    labels: Vec<String>,
}

impl GenerationProgress {
    pub fn start(config: &ProgressConfig) -> Self {
        Self {
            step: 0,
            labels: config.labels.clone(),
        }
    }

    /// True once the last label is showing. The last label keeps its
    /// in-progress marker; nothing follows it.
    pub fn is_finished(&self) -> bool {
        self.step + 1 >= self.labels.len()
    }

    /// Move to the next label. Returns `false` when already on the last one.
    pub fn advance(&mut self) -> bool {
        if self.is_finished() {
            return false;
        }
        self.step += 1;
        true
    }

    /// Steps up to and including the current one; later steps are hidden.
    pub fn visible_steps(&self) -> Vec<StepView> {
        self.labels
            .iter()
            .enumerate()
            .take(self.step + 1)
            .map(|(index, label)| StepView {
                index,
                label: label.clone(),
                status: if index == self.step {
                    StepStatus::InProgress
                } else {
                    StepStatus::Completed
                },
            })
            .collect()
    }
}

/// Drive a freshly started pipeline to its last step.
///
/// Awaits `sleep(interval)` and then calls `on_tick(step)` for steps
/// `1..total_steps`, strictly one after another: the next delay is only
/// created after the previous tick ran.
pub async fn run_progress<S, F, T>(config: &ProgressConfig, mut sleep: S, mut on_tick: T)
where
    S: FnMut(Duration) -> F,
    F: Future<Output = ()>,
    T: FnMut(usize),
{
    let interval = config.step_interval();
    for step in 1..config.total_steps() {
        sleep(interval).await;
        log::debug!("generation step {}/{}", step + 1, config.total_steps());
        on_tick(step);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use futures::future::ready;
    use std::cell::RefCell;

    fn labels_at(progress: &GenerationProgress) -> Vec<(String, StepStatus)> {
        progress
            .visible_steps()
            .into_iter()
            .map(|view| (view.label, view.status))
            .collect()
    }

    #[test]
    fn test_default_config() {
        let config = ProgressConfig::default();
        assert_eq!(config.total_steps(), 5);
        assert_eq!(config.step_interval(), Duration::from_secs(8));
        assert_eq!(config.labels[0], "Analyzing prompt...");
        assert_eq!(config.labels[4], "Building your game now...");
    }

    #[test]
    fn test_config_partial_override() {
        let config: ProgressConfig = serde_json::from_str(r#"{"step_interval_ms": 250}"#).unwrap();
        assert_eq!(config.step_interval(), Duration::from_millis(250));
        assert_eq!(config.total_steps(), 5);
    }

    #[test]
    fn test_config_requires_a_label() {
        assert_eq!(ProgressConfig::new(250, Vec::new()), Err(ConfigError::NoLabels));

        let err = serde_json::from_str::<ProgressConfig>(r#"{"labels": []}"#).unwrap_err();
        assert!(err.to_string().contains("at least one step label"));
    }

    #[test]
    fn test_visible_steps_follow_step_index() {
        let mut progress = GenerationProgress::start(&ProgressConfig::default());

        assert_eq!(
            labels_at(&progress),
            vec![("Analyzing prompt...".to_string(), StepStatus::InProgress)]
        );

        assert!(progress.advance());
        assert_eq!(
            labels_at(&progress),
            vec![
                ("Analyzing prompt...".to_string(), StepStatus::Completed),
                ("Setting up core systems...".to_string(), StepStatus::InProgress),
            ]
        );

        while progress.advance() {}
        let shown = progress.visible_steps();
        assert_eq!(shown.len(), 5);
        assert_eq!(shown[4].status, StepStatus::InProgress);
        assert!(shown[..4].iter().all(|s| s.status == StepStatus::Completed));
    }

    #[test]
    fn test_advance_stops_at_last_step() {
        let config = ProgressConfig::new(10, vec!["a".into(), "b".into()]).unwrap();
        let mut progress = GenerationProgress::start(&config);
        assert!(!progress.is_finished());
        assert!(progress.advance());
        assert!(progress.is_finished());
        assert!(!progress.advance());
        assert_eq!(progress.step, 1);
    }

    #[test]
    fn test_run_progress_is_sequential() {
        #[derive(Debug, PartialEq)]
        enum Event {
            Sleep(Duration),
            Tick(usize),
        }

        let config = ProgressConfig::default();
        let events = RefCell::new(Vec::new());
        let mut progress = GenerationProgress::start(&config);

        block_on(run_progress(
            &config,
            |delay| {
                events.borrow_mut().push(Event::Sleep(delay));
                ready(())
            },
            |step| {
                events.borrow_mut().push(Event::Tick(step));
                assert!(progress.advance());
                assert_eq!(progress.step, step);
            },
        ));

        let interval = Duration::from_millis(8_000);
        let expected: Vec<Event> = (1..5)
            .flat_map(|step| [Event::Sleep(interval), Event::Tick(step)])
            .collect();
        assert_eq!(events.into_inner(), expected);
        assert!(progress.is_finished());
    }

    #[test]
    fn test_run_progress_single_label_never_sleeps() {
        let config = ProgressConfig::new(10, vec!["only".into()]).unwrap();
        let mut slept = 0;
        let mut ticks = 0;
        block_on(run_progress(
            &config,
            |_| {
                slept += 1;
                ready(())
            },
            |_| ticks += 1,
        ));
        assert_eq!((slept, ticks), (0, 0));
    }
}
