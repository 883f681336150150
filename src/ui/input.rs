use crate::sort::Algorithm;
use crate::ui::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') || is_ctrl_char(key, 'q') {
        app.request_quit();
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        KeyCode::Char('g') => app.generate_array(),
        KeyCode::Enter | KeyCode::Char('s') => {
            if app.can_start() {
                app.start_sort();
            }
        }
        KeyCode::Char('c') => {
            app.cancel_sort();
        }
        KeyCode::Tab | KeyCode::Right => app.next_algorithm(),
        KeyCode::BackTab | KeyCode::Left => app.prev_algorithm(),
        KeyCode::Char(digit @ '1'..='3') => {
            let idx = digit as usize - '1' as usize;
            app.select_algorithm(Algorithm::ALL[idx]);
        }
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, ch: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char(c) if c.eq_ignore_ascii_case(&ch))
}
