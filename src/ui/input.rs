//! Key handling, routed by screen and modal state.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::ui::app::{App, Route};
use crate::ui::form::{FormField, FormIntent, FormScreenState};
use crate::ui::list::ListIntent;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') {
        app.request_quit();
        return;
    }

    match app.route() {
        Route::List => handle_list_key(app, key),
        Route::Form => handle_form_key(app, key),
    }
}

fn handle_list_key(app: &mut App, key: KeyEvent) {
    // The confirmation prompt swallows everything until answered.
    if app.list().is_prompting() {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => app.confirm_delete(),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.cancel_delete(),
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Char('q') => app.request_quit(),
        KeyCode::Up | KeyCode::Char('k') => app.dispatch_list(ListIntent::MoveUp),
        KeyCode::Down | KeyCode::Char('j') => app.dispatch_list(ListIntent::MoveDown),
        KeyCode::Char('a') => app.open_form(None),
        KeyCode::Char('e') | KeyCode::Enter => app.edit_selected(),
        KeyCode::Char('d') | KeyCode::Delete => app.request_delete(),
        KeyCode::Char('r') => app.refresh_list(),
        _ => {}
    }
}

fn handle_form_key(app: &mut App, key: KeyEvent) {
    // A failed edit load only offers the way back.
    if matches!(app.form(), FormScreenState::LoadFailed { .. }) {
        if matches!(key.code, KeyCode::Esc | KeyCode::Enter) {
            app.cancel_form();
        }
        return;
    }

    let on_gender = app.form().focused() == Some(FormField::Gender);

    match key.code {
        KeyCode::Esc => app.cancel_form(),
        KeyCode::Enter => app.submit_form(),
        KeyCode::Tab | KeyCode::Down => app.dispatch_form(FormIntent::FocusNext),
        KeyCode::BackTab | KeyCode::Up => app.dispatch_form(FormIntent::FocusPrev),
        KeyCode::Backspace => app.dispatch_form(FormIntent::Backspace),
        KeyCode::Left | KeyCode::Right if on_gender => {
            app.dispatch_form(FormIntent::CycleGender)
        }
        KeyCode::Char(' ') if on_gender => app.dispatch_form(FormIntent::CycleGender),
        KeyCode::Char(ch) => app.dispatch_form(FormIntent::Input { ch }),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
