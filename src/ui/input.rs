use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::ui::app::{App, Screen};

/// Route one key press to the active screen.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('q') | KeyCode::Char('c'))
    {
        app.request_quit();
        return;
    }

    match app.screen() {
        Screen::Browse => handle_browse_key(app, key),
        Screen::Detail => handle_detail_key(app, key),
    }
}

fn handle_browse_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up => app.move_selection(-1),
        KeyCode::Down => app.move_selection(1),
        KeyCode::Enter => {
            // Enter doubles as the manual retry action on the error view.
            if app.browse().error_message().is_some() {
                app.retry_list();
            } else {
                app.open_selected();
            }
        }
        KeyCode::Esc => app.clear_query(),
        KeyCode::Backspace => app.on_backspace(),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => app.on_char(c),
        _ => {}
    }
}

fn handle_detail_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Left | KeyCode::Backspace => app.close_detail(),
        KeyCode::Enter => {
            if app
                .detail()
                .is_some_and(|detail| detail.error_message().is_some())
            {
                app.retry_detail();
            }
        }
        _ => {}
    }
}
