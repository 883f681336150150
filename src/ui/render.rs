use crate::ui::app::App;
use crate::ui::chart::Bars;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{chart_rect, layout_regions};
use crate::ui::theme::GLOBAL_BORDER;
use ratatui::style::Style;
use ratatui::widgets::{Block, Borders, Clear};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    let header_widget = Header::new();
    frame.render_widget(
        header_widget.widget(app.panel(), app.chart().values().len()),
        header,
    );

    frame.render_widget(Clear, body);
    frame.render_widget(
        Block::default()
            .borders(Borders::LEFT | Borders::RIGHT)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
        body,
    );
    frame.render_widget(
        Bars::new(app.chart(), app.config().array.max_value),
        chart_rect(body),
    );

    let footer_widget = Footer::new();
    frame.render_widget(footer_widget.widget(footer, app.can_start()), footer);
}
