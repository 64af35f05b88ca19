use crate::ui::app::App;
use crate::ui::menu::MenuIntent;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') || matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
        app.request_quit();
        return;
    }

    match key.code {
        KeyCode::Right | KeyCode::Tab | KeyCode::Char('l') => {
            app.dispatch(MenuIntent::NextCategory)
        }
        KeyCode::Left | KeyCode::BackTab | KeyCode::Char('h') => {
            app.dispatch(MenuIntent::PrevCategory)
        }
        KeyCode::Up | KeyCode::Char('k') => app.dispatch(MenuIntent::CursorUp),
        KeyCode::Down | KeyCode::Char('j') => app.dispatch(MenuIntent::CursorDown),
        KeyCode::Char('+') | KeyCode::Char('=') => app.increment_focused(),
        KeyCode::Char('-') | KeyCode::Char('_') => app.decrement_focused(),
        KeyCode::Char(ch) => {
            if let Some(digit) = ch.to_digit(10).filter(|digit| *digit > 0) {
                app.dispatch(MenuIntent::SelectCategoryAt {
                    index: digit as usize - 1,
                });
            }
        }
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, ch: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char(c) if c.eq_ignore_ascii_case(&ch))
}
