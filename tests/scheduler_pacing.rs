//! Scheduler ordering, pacing and cancellation behavior.

mod common;

use common::*;
use sortviz::render::{RenderAdapter, RenderEvent};
use sortviz::run::{RunId, RunOutcome, RunToken};
use sortviz::scheduler::Scheduler;
use sortviz::sort::{Algorithm, Step, StepKind};
use sortviz::store::ArrayStore;
use std::thread::{self, JoinHandle};
use tokio::time::Instant;

#[tokio::test(start_paused = true)]
async fn each_step_highlights_draws_then_resets() {
    let recorder = Recorder::default();
    let run = RunId::new(1);
    let store = ArrayStore::new(vec![3, 1, 2]);
    let steps = Algorithm::Bubble.steps(store.claim(run));

    let outcome = Scheduler::new(ms(100))
        .drive(run, steps, &store, &mut recorder.for_run(run), &RunToken::new())
        .await;

    assert_eq!(outcome, RunOutcome::Completed { steps: 3 });
    let events: Vec<RenderEvent> = recorder.events().into_iter().map(|(_, e)| e).collect();
    assert_eq!(
        events,
        vec![
            RenderEvent::Highlight(0, 1),
            RenderEvent::Draw(vec![1, 3, 2]),
            RenderEvent::Reset(0, 1),
            RenderEvent::Highlight(1, 2),
            RenderEvent::Draw(vec![1, 2, 3]),
            RenderEvent::Reset(1, 2),
            RenderEvent::Highlight(0, 1),
            RenderEvent::Draw(vec![1, 2, 3]),
            RenderEvent::Reset(0, 1),
        ]
    );
    assert_eq!(store.snapshot(), vec![1, 2, 3]);
}

#[tokio::test(start_paused = true)]
async fn steps_are_spaced_by_the_configured_delay() {
    let recorder = Recorder::default();
    let run = RunId::new(1);
    let store = ArrayStore::new(vec![2, 1, 4, 3]);
    let steps = Algorithm::Bubble.steps(store.claim(run));

    let started = Instant::now();
    let outcome = Scheduler::new(ms(100))
        .drive(run, steps, &store, &mut recorder.for_run(run), &RunToken::new())
        .await;

    assert_eq!(outcome.steps(), 6);
    let elapsed = started.elapsed();
    assert!(elapsed >= ms(600) && elapsed < ms(700), "{elapsed:?}");
}

#[tokio::test(start_paused = true)]
async fn empty_sequence_completes_without_rendering() {
    let recorder = Recorder::default();
    let run = RunId::new(1);
    let store = ArrayStore::new(vec![7]);
    let steps = Algorithm::Quick.steps(store.claim(run));

    let started = Instant::now();
    let outcome = Scheduler::default()
        .drive(run, steps, &store, &mut recorder.for_run(run), &RunToken::new())
        .await;

    assert_eq!(outcome, RunOutcome::Completed { steps: 0 });
    assert_eq!(recorder.len(), 0);
    assert!(started.elapsed() < ms(1));
}

#[tokio::test(start_paused = true)]
async fn cancellation_abandons_the_pending_delay() {
    let recorder = Recorder::default();
    let run = RunId::new(1);
    let store = ArrayStore::new(vec![5, 4, 3, 2, 1]);
    let steps = Algorithm::Insertion.steps(store.claim(run));
    let token = RunToken::new();

    let task = {
        let store = store.clone();
        let token = token.clone();
        let mut renderer = recorder.for_run(run);
        tokio::spawn(async move {
            Scheduler::new(ms(100))
                .drive(run, steps, &store, &mut renderer, &token)
                .await
        })
    };

    tokio::time::sleep(ms(150)).await;
    token.cancel();
    let outcome = task.await.expect("scheduler task panicked");

    assert_eq!(outcome, RunOutcome::Cancelled { steps: 2 });
    // Second step was highlighted and drawn but its reset never happened.
    let last = recorder.events().last().cloned().map(|(_, e)| e);
    assert!(matches!(last, Some(RenderEvent::Draw(_))), "{last:?}");
}

#[tokio::test(start_paused = true)]
async fn losing_the_store_stops_the_run() {
    let recorder = Recorder::default();
    let run = RunId::new(1);
    let store = ArrayStore::new(vec![4, 3, 2, 1]);
    let steps: Vec<Step> = Algorithm::Bubble.steps(store.claim(run)).collect();

    // Someone regenerated the array before the run began.
    store.replace(vec![9, 9, 9, 9]);

    let outcome = Scheduler::new(ms(10))
        .drive(run, steps, &store, &mut recorder.for_run(run), &RunToken::new())
        .await;

    assert_eq!(outcome, RunOutcome::Cancelled { steps: 0 });
    assert_eq!(recorder.len(), 0);
    assert_eq!(store.snapshot(), vec![9, 9, 9, 9]);
}

#[tokio::test]
#[should_panic(expected = "out of bounds")]
async fn out_of_range_step_fails_loudly() {
    let recorder = Recorder::default();
    let run = RunId::new(1);
    let store = ArrayStore::new(vec![2, 1]);
    store.claim(run);
    let bad = Step {
        kind: StepKind::Compare,
        indices: (0, 5),
        swapped: false,
        snapshot: vec![2, 1],
    };

    Scheduler::new(ms(1))
        .drive(run, [bad], &store, &mut recorder.for_run(run), &RunToken::new())
        .await;
}

/// Hands the store to `successor` from another thread while the first
/// highlight is being emitted, then waits for that claim during the reset.
struct ClaimDuringHighlight {
    inner: RunRecorder,
    store: ArrayStore,
    successor: RunId,
    claimer: Option<JoinHandle<()>>,
    handed_over: bool,
}

impl RenderAdapter for ClaimDuringHighlight {
    fn draw(&mut self, snapshot: &[u32]) {
        self.inner.draw(snapshot);
    }

    fn highlight(&mut self, indices: (usize, usize)) {
        if !self.handed_over {
            self.handed_over = true;
            let store = self.store.clone();
            let successor = self.successor;
            self.claimer = Some(thread::spawn(move || {
                store.claim(successor);
            }));
        }
        self.inner.highlight(indices);
    }

    fn reset_highlight(&mut self, indices: (usize, usize)) {
        self.inner.reset_highlight(indices);
        if let Some(claimer) = self.claimer.take() {
            claimer.join().expect("claimer thread panicked");
        }
    }
}

#[tokio::test(start_paused = true)]
async fn successor_claim_never_splits_highlight_from_draw() {
    let recorder = Recorder::default();
    let run = RunId::new(1);
    let successor = RunId::new(2);
    let store = ArrayStore::new(vec![4, 3, 2, 1]);
    let steps = Algorithm::Bubble.steps(store.claim(run));

    let mut renderer = ClaimDuringHighlight {
        inner: recorder.for_run(run),
        store: store.clone(),
        successor,
        claimer: None,
        handed_over: false,
    };
    let outcome = Scheduler::new(ms(10))
        .drive(run, steps, &store, &mut renderer, &RunToken::new())
        .await;

    // The claim waited for the first step to finish emitting, and the run
    // saw it before the second step.
    assert_eq!(outcome, RunOutcome::Cancelled { steps: 1 });
    let events: Vec<RenderEvent> = recorder.events().into_iter().map(|(_, e)| e).collect();
    assert_eq!(
        events,
        vec![
            RenderEvent::Highlight(0, 1),
            RenderEvent::Draw(vec![3, 4, 2, 1]),
            RenderEvent::Reset(0, 1),
        ]
    );
    assert_eq!(store.owner(), Some(successor));
    assert_eq!(store.snapshot(), vec![3, 4, 2, 1]);
}
