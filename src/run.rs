//! Run identity, cancellation and the single-active-run controller.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::sync::Notify;
use tokio::task::JoinHandle;

use crate::render::RenderAdapter;
use crate::scheduler::Scheduler;
use crate::sort::Algorithm;
use crate::store::ArrayStore;

/// Monotonic identifier of one run. Later runs compare greater.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RunId(u64);

impl RunId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "run#{}", self.0)
    }
}

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Every step was shown.
    Completed { steps: usize },
    /// A newer run or a regenerated array took over after `steps` frames.
    Cancelled { steps: usize },
}

impl RunOutcome {
    pub fn steps(self) -> usize {
        match self {
            RunOutcome::Completed { steps } | RunOutcome::Cancelled { steps } => steps,
        }
    }

    pub fn is_cancelled(self) -> bool {
        matches!(self, RunOutcome::Cancelled { .. })
    }
}

/// Cancellation flag shared between the controller and one run task.
#[derive(Clone, Debug, Default)]
pub struct RunToken {
    cancelled: Arc<AtomicBool>,
    notify: Arc<Notify>,
}

impl RunToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        if !self.cancelled.swap(true, Ordering::SeqCst) {
            self.notify.notify_waiters();
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Resolves once [`cancel`](Self::cancel) has been called.
    pub async fn cancelled(&self) {
        // Register interest before reading the flag, otherwise a cancel()
        // landing between the check and the await would be missed.
        let notified = self.notify.notified();
        tokio::pin!(notified);
        notified.as_mut().enable();
        if self.is_cancelled() {
            return;
        }
        notified.await;
    }
}

struct ActiveRun {
    id: RunId,
    algorithm: Algorithm,
    token: RunToken,
}

/// A run that was spawned onto the runtime.
pub struct StartedRun {
    pub id: RunId,
    pub handle: JoinHandle<RunOutcome>,
}

/// Owns the "at most one active run" rule. Starting a run cancels the
/// previous one before the new task is spawned.
pub struct RunController {
    runtime: Handle,
    scheduler: Scheduler,
    next_id: u64,
    active: Option<ActiveRun>,
}

impl RunController {
    pub fn new(runtime: Handle, scheduler: Scheduler) -> Self {
        Self {
            runtime,
            scheduler,
            next_id: 1,
            active: None,
        }
    }

    pub fn scheduler(&self) -> Scheduler {
        self.scheduler
    }

    pub fn active(&self) -> Option<RunId> {
        self.active.as_ref().map(|run| run.id)
    }

    pub fn active_algorithm(&self) -> Option<Algorithm> {
        self.active.as_ref().map(|run| run.algorithm)
    }

    /// Signal the active run to stop. Returns the id that was cancelled.
    pub fn cancel_active(&mut self) -> Option<RunId> {
        let run = self.active.take()?;
        run.token.cancel();
        tracing::debug!(run = %run.id, algorithm = run.algorithm.name(), "run cancelled");
        Some(run.id)
    }

    /// Forget `id` if it is still the active run. Called once its task has
    /// reported an outcome.
    pub fn finish(&mut self, id: RunId) {
        if self.active() == Some(id) {
            self.active = None;
        }
    }

    /// Start sorting the contents of `store`.
    ///
    /// Any active run is cancelled first. An empty store starts nothing and
    /// returns `None`. `renderer` is built once the new run's id is known.
    /// `on_finish` runs on the runtime after the scheduler returns, whether
    /// the run completed or was cancelled.
    pub fn start<M, R, F>(
        &mut self,
        algorithm: Algorithm,
        store: &ArrayStore,
        renderer: M,
        on_finish: F,
    ) -> Option<StartedRun>
    where
        M: FnOnce(RunId) -> R,
        R: RenderAdapter + Send + 'static,
        F: FnOnce(RunId, RunOutcome) + Send + 'static,
    {
        self.cancel_active();
        if store.is_empty() {
            tracing::debug!(algorithm = algorithm.name(), "empty array, nothing to sort");
            return None;
        }

        let id = RunId::new(self.next_id);
        self.next_id += 1;

        let values = store.claim(id);
        tracing::debug!(run = %id, algorithm = algorithm.name(), len = values.len(), "run started");
        let steps = algorithm.steps(values);

        let mut renderer = renderer(id);
        let token = RunToken::new();
        let task_token = token.clone();
        let task_store = store.clone();
        let scheduler = self.scheduler;
        let handle = self.runtime.spawn(async move {
            let outcome = scheduler
                .drive(id, steps, &task_store, &mut renderer, &task_token)
                .await;
            task_store.release(id);
            tracing::debug!(run = %id, ?outcome, "run finished");
            on_finish(id, outcome);
            outcome
        });

        self.active = Some(ActiveRun {
            id,
            algorithm,
            token,
        });
        Some(StartedRun { id, handle })
    }
}
