//! Bar chart: the terminal side of the render adapter.

use std::collections::BTreeSet;

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Paragraph, Widget};

use crate::render::{RenderAdapter, RenderEvent};
use crate::run::RunId;
use crate::ui::theme::{BAR, BAR_HIGHLIGHT, HEADER_TEXT};

const EIGHTHS: [&str; 8] = [" ", "▁", "▂", "▃", "▄", "▅", "▆", "▇"];

/// What the chart currently shows, and which run may change it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChartState {
    values: Vec<u32>,
    highlighted: BTreeSet<usize>,
    following: Option<RunId>,
}

impl ChartState {
    pub fn new(values: Vec<u32>) -> Self {
        Self {
            values,
            ..Self::default()
        }
    }

    pub fn values(&self) -> &[u32] {
        &self.values
    }

    pub fn highlighted(&self) -> &BTreeSet<usize> {
        &self.highlighted
    }

    pub fn following(&self) -> Option<RunId> {
        self.following
    }

    /// Show a new array. Nothing is followed until the next run starts.
    pub fn reset(&mut self, values: Vec<u32>) {
        self.values = values;
        self.highlighted.clear();
        self.following = None;
    }

    /// Accept render events from `run` only.
    pub fn follow(&mut self, run: RunId) {
        self.following = Some(run);
        self.highlighted.clear();
    }

    pub fn unfollow(&mut self) {
        self.following = None;
        self.highlighted.clear();
    }

    /// Apply `event` if it came from the followed run. Returns whether it
    /// was applied.
    pub fn accept(&mut self, run: RunId, event: &RenderEvent) -> bool {
        if self.following != Some(run) {
            return false;
        }
        event.apply_to(self);
        true
    }
}

impl RenderAdapter for ChartState {
    fn draw(&mut self, snapshot: &[u32]) {
        self.values.clear();
        self.values.extend_from_slice(snapshot);
    }

    fn highlight(&mut self, indices: (usize, usize)) {
        self.highlighted.insert(indices.0);
        self.highlighted.insert(indices.1);
    }

    fn reset_highlight(&mut self, indices: (usize, usize)) {
        self.highlighted.remove(&indices.0);
        self.highlighted.remove(&indices.1);
    }
}

/// Widget drawing one vertical bar per element, scaled against
/// `max_value`, with value labels along the bottom row when there is room.
pub struct Bars<'a> {
    chart: &'a ChartState,
    max_value: u32,
}

impl<'a> Bars<'a> {
    pub fn new(chart: &'a ChartState, max_value: u32) -> Self {
        Self { chart, max_value }
    }
}

impl Widget for Bars<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let values = self.chart.values();
        if area.width == 0 || area.height == 0 {
            return;
        }
        if values.is_empty() {
            Paragraph::new("No array yet. Press g to generate one.")
                .alignment(Alignment::Center)
                .style(Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM))
                .render(area, buf);
            return;
        }

        let slot = area.width as usize / values.len();
        if slot == 0 {
            Paragraph::new("Terminal too narrow for this array.")
                .alignment(Alignment::Center)
                .render(area, buf);
            return;
        }
        let bar_width = if slot >= 3 { slot - 1 } else { slot };
        let left = area.x as usize + (area.width as usize - slot * values.len()) / 2;

        let label_rows = if area.height > 2 && bar_width >= 2 { 1 } else { 0 };
        let bar_rows = (area.height - label_rows) as u64;
        let bottom = area.y + area.height - 1 - label_rows;

        let scale = u64::from(
            self.max_value
                .max(values.iter().copied().max().unwrap_or(0))
                .max(1),
        );

        for (idx, &value) in values.iter().enumerate() {
            let color = if self.chart.highlighted().contains(&idx) {
                BAR_HIGHLIGHT
            } else {
                BAR
            };
            let style = Style::default().fg(color);
            let x0 = (left + idx * slot) as u16;

            // Height in eighths of a row.
            let eighths = u64::from(value) * bar_rows * 8 / scale;
            let full = (eighths / 8) as u16;
            let partial = (eighths % 8) as usize;

            for dx in 0..bar_width as u16 {
                let x = x0 + dx;
                for row in 0..full {
                    buf[(x, bottom - row)].set_symbol("█").set_style(style);
                }
                if partial > 0 && u64::from(full) < bar_rows {
                    buf[(x, bottom - full)]
                        .set_symbol(EIGHTHS[partial])
                        .set_style(style);
                }
            }

            if label_rows > 0 {
                let label: String = value.to_string().chars().take(bar_width).collect();
                let pad = (bar_width - label.chars().count()) / 2;
                buf.set_string(x0 + pad as u16, bottom + 1, label, style);
            }
        }
    }
}
