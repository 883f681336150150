//! Paces a step sequence and drives the render adapter.
//!
//! Per step the order is fixed:
//!
//! ```text
//! highlight ──→ apply + draw ──→ sleep(delay) ──→ reset highlight
//! ```
//!
//! The sleep is the only suspension point and it races the run token, so a
//! cancelled run stops mid-delay without issuing its pending reset.
//!
//! Highlight and draw are emitted while the store is locked for the write.
//! Render adapters must not touch the [`ArrayStore`] themselves.

use std::time::Duration;

use crate::render::RenderAdapter;
use crate::run::{RunId, RunOutcome, RunToken};
use crate::sort::Step;
use crate::store::ArrayStore;

pub const DEFAULT_STEP_DELAY: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scheduler {
    delay: Duration,
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new(DEFAULT_STEP_DELAY)
    }
}

impl Scheduler {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Animate `steps` for `run` until they are exhausted or the run is
    /// cancelled.
    pub async fn drive<I, R>(
        &self,
        run: RunId,
        steps: I,
        store: &ArrayStore,
        renderer: &mut R,
        token: &RunToken,
    ) -> RunOutcome
    where
        I: IntoIterator<Item = Step>,
        R: RenderAdapter + ?Sized,
    {
        let mut shown = 0;
        for step in steps {
            if token.is_cancelled() || store.owner() != Some(run) {
                return RunOutcome::Cancelled { steps: shown };
            }
            debug_assert!(
                step.in_bounds(),
                "step indices {:?} out of bounds for length {}",
                step.indices,
                step.snapshot.len()
            );

            // Ownership check, write and both render calls happen under the
            // store lock, so a run that lost the store emits nothing more.
            let emitted = store.apply_with(run, &step.snapshot, || {
                renderer.highlight(step.indices);
                renderer.draw(&step.snapshot);
            });
            if !emitted {
                return RunOutcome::Cancelled { steps: shown };
            }
            shown += 1;

            tokio::select! {
                _ = tokio::time::sleep(self.delay) => {}
                _ = token.cancelled() => return RunOutcome::Cancelled { steps: shown },
            }

            renderer.reset_highlight(step.indices);
        }
        RunOutcome::Completed { steps: shown }
    }
}
