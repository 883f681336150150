use crate::config::Config;
use crate::ui::app::App;
use crate::ui::events::EventHandler;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;

/// Frame budget while a run is animating.
const FRAME_INTERVAL: Duration = Duration::from_millis(16);
/// Redraw cadence when idle, which also picks up terminal resizes.
const IDLE_REDRAW: Duration = Duration::from_millis(250);

/// Run the interactive visualizer until the user quits.
///
/// Run tasks live on a tokio runtime owned here; the UI loop itself stays on
/// the calling thread and blocks on the event channel.
pub fn run(config: Config, initial: Option<Vec<u32>>) -> io::Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .thread_name("sortviz-run")
        .enable_time()
        .build()?;

    let events = EventHandler::new();
    let mut app = match initial {
        Some(values) => App::with_values(config, runtime.handle().clone(), events.sender(), values),
        None => App::new(config, runtime.handle().clone(), events.sender()),
    };

    let (mut terminal, guard) = setup_terminal()?;
    tracing::info!(algorithm = app.selected_algorithm().name(), "visualizer started");

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        let timeout = if app.panel().is_running() {
            FRAME_INTERVAL
        } else {
            IDLE_REDRAW
        };
        match events.next(timeout) {
            Ok(event) => {
                app.handle_event(event);
                // Drain whatever a run queued so one redraw covers it.
                while let Ok(event) = events.next(Duration::ZERO) {
                    app.handle_event(event);
                }
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    runtime.shutdown_timeout(Duration::from_millis(200));
    tracing::info!("visualizer stopped");
    Ok(())
}
