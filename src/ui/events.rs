use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent};

use crate::render::{RenderAdapter, RenderEvent};
use crate::run::{RunId, RunOutcome};

pub enum AppEvent {
    Key(KeyEvent),
    /// Render call from a run task, tagged so stale runs can be dropped.
    Render { run: RunId, event: RenderEvent },
    /// A run task returned.
    RunFinished { run: RunId, outcome: RunOutcome },
}

/// How long the input thread blocks in one poll before checking whether
/// the loop is still listening.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

pub struct EventHandler {
    rx: Receiver<AppEvent>,
    tx: Sender<AppEvent>,
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl EventHandler {
    /// Spawn the terminal input thread. It exits once every receiver is gone.
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        let event_tx = tx.clone();

        thread::spawn(move || loop {
            match event::poll(POLL_INTERVAL) {
                Ok(true) => match event::read() {
                    Ok(Event::Key(key)) => {
                        if event_tx.send(AppEvent::Key(key)).is_err() {
                            break;
                        }
                    }
                    // Resizes need no state; the next redraw picks up the
                    // new frame size.
                    Ok(_) => {}
                    Err(err) => {
                        tracing::error!(%err, "terminal read failed");
                        break;
                    }
                },
                Ok(false) => {}
                Err(err) => {
                    tracing::error!(%err, "terminal poll failed");
                    break;
                }
            }
        });

        Self { rx, tx }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }

    pub fn sender(&self) -> Sender<AppEvent> {
        self.tx.clone()
    }
}

/// Render adapter for a run task: forwards every call to the event loop.
pub struct ChannelRenderer {
    run: RunId,
    tx: Sender<AppEvent>,
}

impl ChannelRenderer {
    pub fn new(run: RunId, tx: Sender<AppEvent>) -> Self {
        Self { run, tx }
    }

    fn send(&self, event: RenderEvent) {
        // The loop is gone only during shutdown.
        let _ = self.tx.send(AppEvent::Render {
            run: self.run,
            event,
        });
    }
}

impl RenderAdapter for ChannelRenderer {
    fn draw(&mut self, snapshot: &[u32]) {
        self.send(RenderEvent::Draw(snapshot.to_vec()));
    }

    fn highlight(&mut self, indices: (usize, usize)) {
        self.send(RenderEvent::Highlight(indices.0, indices.1));
    }

    fn reset_highlight(&mut self, indices: (usize, usize)) {
        self.send(RenderEvent::Reset(indices.0, indices.1));
    }
}
