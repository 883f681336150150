use crate::run::RunOutcome;
use crate::ui::panel::{PanelState, RunStatus};
use crate::ui::theme::{
    ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_BUSY, STATUS_ERROR, STATUS_OK,
};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::sort::Algorithm;

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, panel: &PanelState, len: usize) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);

        let mut spans = vec![Span::styled("  ", text_style)];
        for (idx, algorithm) in Algorithm::ALL.iter().enumerate() {
            if idx > 0 {
                spans.push(Span::styled(" ", text_style));
            }
            let label = format!("{} {}", idx + 1, algorithm.label());
            if *algorithm == panel.selected {
                spans.push(Span::styled(
                    format!("[{label}]"),
                    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
                ));
            } else {
                spans.push(Span::styled(format!(" {label} "), text_style));
            }
        }

        let (status_text, status_color) = status_label(&panel.status);
        spans.push(Span::styled("  │  ", separator_style));
        spans.push(Span::styled(status_text, Style::default().fg(status_color)));
        spans.push(Span::styled("  │  ", separator_style));
        spans.push(Span::styled(format!("{len} elements"), text_style));

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

fn status_label(status: &RunStatus) -> (String, ratatui::style::Color) {
    match status {
        RunStatus::Idle => ("Ready".to_string(), STATUS_OK),
        RunStatus::Running { algorithm, .. } => (format!("Sorting ({algorithm})…"), STATUS_BUSY),
        RunStatus::Finished {
            algorithm,
            outcome: RunOutcome::Completed { steps },
            ..
        } => (format!("{algorithm} done in {steps} steps"), STATUS_OK),
        RunStatus::Finished {
            outcome: RunOutcome::Cancelled { steps },
            ..
        } => (format!("Stopped after {steps} steps"), STATUS_ERROR),
    }
}
