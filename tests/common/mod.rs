//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use parking_lot::Mutex;
use sortviz::config::Config;
use sortviz::render::{RenderAdapter, RenderEvent};
use sortviz::run::RunId;
use sortviz::ui::app::App;
use sortviz::ui::events::AppEvent;
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;

pub fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

// -- Render spies --------------------------------------------------------------

/// Render adapter that records every call, tagged with the run it came from.
#[derive(Clone, Default)]
pub struct Recorder {
    events: Arc<Mutex<Vec<(RunId, RenderEvent)>>>,
}

impl Recorder {
    pub fn for_run(&self, run: RunId) -> RunRecorder {
        RunRecorder {
            run,
            events: Arc::clone(&self.events),
        }
    }

    pub fn events(&self) -> Vec<(RunId, RenderEvent)> {
        self.events.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    pub fn draws(&self, run: RunId) -> Vec<Vec<u32>> {
        self.events
            .lock()
            .iter()
            .filter_map(|(id, event)| match event {
                RenderEvent::Draw(values) if *id == run => Some(values.clone()),
                _ => None,
            })
            .collect()
    }
}

pub struct RunRecorder {
    run: RunId,
    events: Arc<Mutex<Vec<(RunId, RenderEvent)>>>,
}

impl RenderAdapter for RunRecorder {
    fn draw(&mut self, snapshot: &[u32]) {
        self.events
            .lock()
            .push((self.run, RenderEvent::Draw(snapshot.to_vec())));
    }

    fn highlight(&mut self, indices: (usize, usize)) {
        self.events
            .lock()
            .push((self.run, RenderEvent::Highlight(indices.0, indices.1)));
    }

    fn reset_highlight(&mut self, indices: (usize, usize)) {
        self.events
            .lock()
            .push((self.run, RenderEvent::Reset(indices.0, indices.1)));
    }
}

// -- Config helpers --------------------------------------------------------------

/// Write `content` to a temporary `config.toml`.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

/// Default config with a fixed seed and the given step delay.
pub fn test_config(delay_ms: u64) -> Config {
    let mut config = Config::default();
    config.array.seed = Some(42);
    config.animation.step_delay_ms = delay_ms;
    config
}

// -- App helpers -----------------------------------------------------------------

/// App on the current tokio runtime, plus the receiving end of its events.
pub fn make_app(values: Vec<u32>, delay_ms: u64) -> (App, Receiver<AppEvent>) {
    let (tx, rx) = mpsc::channel();
    let app = App::with_values(
        test_config(delay_ms),
        tokio::runtime::Handle::current(),
        tx,
        values,
    );
    (app, rx)
}

/// Feed every queued event back into the app, as the UI loop does.
pub fn pump(app: &mut App, rx: &Receiver<AppEvent>) -> usize {
    let mut handled = 0;
    while let Ok(event) = rx.try_recv() {
        app.handle_event(event);
        handled += 1;
    }
    handled
}

pub fn press_key(code: KeyCode) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Press,
        state: KeyEventState::NONE,
    }
}

pub fn ctrl_key(ch: char) -> KeyEvent {
    KeyEvent {
        code: KeyCode::Char(ch),
        modifiers: KeyModifiers::CONTROL,
        kind: KeyEventKind::Press,
        state: KeyEventState::NONE,
    }
}
