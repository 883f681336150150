//! Outbound visual effects of a run.

use std::collections::BTreeSet;
use std::io::{self, Write};

/// Receiver of a run's visual effects. Calls are fire-and-forget; the
/// scheduler never inspects a result.
pub trait RenderAdapter {
    /// Redraw every bar from `snapshot`.
    fn draw(&mut self, snapshot: &[u32]);
    /// Mark the bars at `indices` as active.
    fn highlight(&mut self, indices: (usize, usize));
    /// Return the bars at `indices` to their normal color.
    fn reset_highlight(&mut self, indices: (usize, usize));
}

impl<R: RenderAdapter + ?Sized> RenderAdapter for Box<R> {
    fn draw(&mut self, snapshot: &[u32]) {
        (**self).draw(snapshot);
    }

    fn highlight(&mut self, indices: (usize, usize)) {
        (**self).highlight(indices);
    }

    fn reset_highlight(&mut self, indices: (usize, usize)) {
        (**self).reset_highlight(indices);
    }
}

/// A render call captured as data, so it can cross a channel or be
/// recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderEvent {
    Draw(Vec<u32>),
    Highlight(usize, usize),
    Reset(usize, usize),
}

impl RenderEvent {
    /// Replay this event onto an adapter.
    pub fn apply_to<R: RenderAdapter + ?Sized>(&self, renderer: &mut R) {
        match self {
            RenderEvent::Draw(values) => renderer.draw(values),
            RenderEvent::Highlight(a, b) => renderer.highlight((*a, *b)),
            RenderEvent::Reset(a, b) => renderer.reset_highlight((*a, *b)),
        }
    }
}

/// Writes one line per drawn frame, with highlighted values in angle
/// brackets:
///
/// ```text
/// 1 <3> <2>
/// ```
pub struct TextRenderer<W: Write> {
    out: W,
    highlighted: BTreeSet<usize>,
    frames: usize,
    error: Option<io::Error>,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            highlighted: BTreeSet::new(),
            frames: 0,
            error: None,
        }
    }

    pub fn frames(&self) -> usize {
        self.frames
    }

    /// Flush and surface the first write error, if any.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        self.out.flush()?;
        Ok(self.out)
    }

    fn format_frame(&self, snapshot: &[u32]) -> String {
        snapshot
            .iter()
            .enumerate()
            .map(|(idx, value)| {
                if self.highlighted.contains(&idx) {
                    format!("<{value}>")
                } else {
                    value.to_string()
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl<W: Write> RenderAdapter for TextRenderer<W> {
    fn draw(&mut self, snapshot: &[u32]) {
        if self.error.is_some() {
            return;
        }
        let line = self.format_frame(snapshot);
        if let Err(err) = writeln!(self.out, "{line}") {
            self.error = Some(err);
            return;
        }
        self.frames += 1;
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
