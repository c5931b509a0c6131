//! Scheduler: labelled actions executed in registration order.
//!
//! Labels look like times of day (`"08:00"`) but are documentation only:
//! [`Scheduler::run_tasks`] runs every task in one synchronous pass without
//! waiting or parsing the label.

use std::fmt;

use homectl_domain::error::HomeError;

use crate::ports::SharedSink;

/// Zero-argument action bound to devices through captured handles.
pub type TaskAction = Box<dyn FnMut() -> Result<(), HomeError> + Send>;

/// One labelled action.
pub struct ScheduledTask {
    label: String,
    action: TaskAction,
}

impl ScheduledTask {
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl fmt::Debug for ScheduledTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScheduledTask")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

/// Lifecycle of the scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SchedulerState {
    #[default]
    Idle,
    Running,
}

/// Outcome of one [`Scheduler::run_tasks`] pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    pub executed: usize,
    pub failed: usize,
}

/// Ordered list of labelled actions.
pub struct Scheduler {
    tasks: Vec<ScheduledTask>,
    state: SchedulerState,
    sink: SharedSink,
}

impl Scheduler {
    #[must_use]
    pub fn new(sink: SharedSink) -> Self {
        Self {
            tasks: Vec::new(),
            state: SchedulerState::Idle,
            sink,
        }
    }

    /// Append a task. It will run after every task added before it.
    pub fn add_task<F>(&mut self, label: impl Into<String>, action: F)
    where
        F: FnMut() -> Result<(), HomeError> + Send + 'static,
    {
        let label = label.into();
        self.sink.emit(&format!("Task scheduled for {label}."));
        tracing::debug!(%label, position = self.tasks.len(), "task scheduled");
        self.tasks.push(ScheduledTask {
            label,
            action: Box::new(action),
        });
    }

    #[must_use]
    pub fn state(&self) -> SchedulerState {
        self.state
    }

    #[must_use]
    pub fn tasks(&self) -> &[ScheduledTask] {
        &self.tasks
    }

    /// Run every task once, in registration order.
    ///
    /// A failing task is reported and does not prevent later tasks from
    /// running. Taking `&mut self` rules out overlapping runs.
    pub fn run_tasks(&mut self) -> RunSummary {
        self.state = SchedulerState::Running;
        let mut summary = RunSummary::default();

        for task in &mut self.tasks {
            self.sink
                .emit(&format!("Running task scheduled for {}...", task.label));
            summary.executed += 1;
            if let Err(err) = (task.action)() {
                summary.failed += 1;
                tracing::warn!(label = %task.label, error = %err, "scheduled task failed");
                self.sink
                    .emit_error(&format!("Task scheduled for {} failed: {err}", task.label));
            }
        }

        self.state = SchedulerState::Idle;
        tracing::info!(
            executed = summary.executed,
            failed = summary.failed,
            "scheduled tasks complete"
        );
        summary
    }
}
