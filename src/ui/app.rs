use std::sync::mpsc::Sender;

use tokio::runtime::Handle;

use crate::config::Config;
use crate::run::{RunController, RunId, RunOutcome};
use crate::scheduler::Scheduler;
use crate::sort::Algorithm;
use crate::store::{ArrayGenerator, ArrayStore};
use crate::ui::chart::ChartState;
use crate::ui::events::{AppEvent, ChannelRenderer};
use crate::ui::mvi::Reducer;
use crate::ui::panel::{PanelIntent, PanelReducer, PanelState};

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    config: Config,
    /// Working array; the active run writes, the app replaces.
    store: ArrayStore,
    generator: ArrayGenerator,
    /// What is on screen (render adapter state).
    chart: ChartState,
    /// Algorithm selection and run status (MVI pattern).
    panel: PanelState,
    controller: RunController,
    events: Sender<AppEvent>,
}

impl App {
    /// Build the app with a freshly generated array.
    pub fn new(config: Config, runtime: Handle, events: Sender<AppEvent>) -> Self {
        let mut generator = ArrayGenerator::new(&config.array);
        let values = generator.generate();
        Self::with_generator(config, runtime, events, generator, values)
    }

    /// Build the app around a fixed starting array.
    pub fn with_values(
        config: Config,
        runtime: Handle,
        events: Sender<AppEvent>,
        values: Vec<u32>,
    ) -> Self {
        let generator = ArrayGenerator::new(&config.array);
        Self::with_generator(config, runtime, events, generator, values)
    }

    fn with_generator(
        config: Config,
        runtime: Handle,
        events: Sender<AppEvent>,
        generator: ArrayGenerator,
        values: Vec<u32>,
    ) -> Self {
        let scheduler = Scheduler::new(config.animation.step_delay());
        Self {
            should_quit: false,
            panel: PanelState::new(config.defaults.algorithm),
            store: ArrayStore::new(values.clone()),
            chart: ChartState::new(values),
            generator,
            controller: RunController::new(runtime, scheduler),
            config,
            events,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.controller.cancel_active();
        self.should_quit = true;
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn chart(&self) -> &ChartState {
        &self.chart
    }

    pub fn panel(&self) -> &PanelState {
        &self.panel
    }

    pub fn store(&self) -> &ArrayStore {
        &self.store
    }

    pub fn selected_algorithm(&self) -> Algorithm {
        self.panel.selected
    }

    /// Starting needs something to sort.
    pub fn can_start(&self) -> bool {
        !self.store.is_empty()
    }

    pub fn dispatch_panel(&mut self, intent: PanelIntent) {
        dispatch_mvi!(self, panel, PanelReducer, intent);
    }

    pub fn select_algorithm(&mut self, algorithm: Algorithm) {
        self.dispatch_panel(PanelIntent::Select(algorithm));
    }

    pub fn next_algorithm(&mut self) {
        self.dispatch_panel(PanelIntent::SelectNext);
    }

    pub fn prev_algorithm(&mut self) {
        self.dispatch_panel(PanelIntent::SelectPrev);
    }

    /// Replace the array with a new random one, abandoning any active run.
    pub fn generate_array(&mut self) {
        let values = self.generator.generate();
        self.load_values(values);
    }

    /// Replace the array with `values`, abandoning any active run.
    pub fn load_values(&mut self, values: Vec<u32>) {
        if let Some(run) = self.controller.cancel_active() {
            tracing::debug!(%run, "array replaced mid-run");
        }
        self.store.replace(values.clone());
        self.chart.reset(values);
        self.dispatch_panel(PanelIntent::ArrayReplaced);
    }

    /// Sort the current array with the selected algorithm. Any active run
    /// is cancelled first. Returns `None` when the array is empty.
    pub fn start_sort(&mut self) -> Option<RunId> {
        let algorithm = self.panel.selected;
        let render_tx = self.events.clone();
        let finish_tx = self.events.clone();
        let started = self.controller.start(
            algorithm,
            &self.store,
            move |run| ChannelRenderer::new(run, render_tx),
            move |run, outcome| {
                let _ = finish_tx.send(AppEvent::RunFinished { run, outcome });
            },
        );

        let Some(started) = started else {
            self.chart.unfollow();
            self.dispatch_panel(PanelIntent::ArrayReplaced);
            return None;
        };

        // Show the array the run starts from; a cancelled predecessor may
        // have left the chart mid-step.
        self.chart.reset(self.store.snapshot());
        self.chart.follow(started.id);
        self.dispatch_panel(PanelIntent::RunStarted {
            run: started.id,
            algorithm,
        });
        Some(started.id)
    }

    /// Stop the active run, leaving the array as it was at cutover.
    pub fn cancel_sort(&mut self) -> Option<RunId> {
        let run = self.controller.cancel_active()?;
        self.chart.unfollow();
        self.dispatch_panel(PanelIntent::RunCancelled { run });
        Some(run)
    }

    pub fn on_run_finished(&mut self, run: RunId, outcome: RunOutcome) {
        self.controller.finish(run);
        if self.chart.following() == Some(run) {
            self.chart.unfollow();
        }
        self.dispatch_panel(PanelIntent::RunFinished { run, outcome });
    }

    /// Route every non-input event; keys go through `input::handle_key`.
    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Key(key) => crate::ui::input::handle_key(self, key),
            AppEvent::Render { run, event } => {
                self.chart.accept(run, &event);
            }
            AppEvent::RunFinished { run, outcome } => self.on_run_finished(run, outcome),
        }
    }
}
