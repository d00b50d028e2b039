use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::*;
use crate::ui::button;
use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => {
            state.dirty = true;
            handle_terminal(state, cevent)
        }
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) if key.kind != KeyEventKind::Release => handle_key(state, key),
        CEvent::Resize(_, _) => {
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    // Global keybindings
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }

    match key.code {
        KeyCode::Tab => {
            state.cycle_focus();
            return vec![];
        }
        KeyCode::BackTab => {
            state.cycle_focus_back();
            return vec![];
        }
        _ => {}
    }

    match state.focus {
        FocusPanel::Search => handle_search_key(state, key),
        FocusPanel::AddTitle | FocusPanel::AddAuthor => handle_add_form_key(state, key),
        FocusPanel::Books => handle_books_key(state, key),
        FocusPanel::EditTitle | FocusPanel::EditAuthor => handle_edit_key(state, key),
    }
}

fn handle_search_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Esc => state.set_query(""),
        KeyCode::Enter | KeyCode::Down => state.focus = FocusPanel::Books,
        _ => {
            if edit_text(state, key) {
                state.query_changed();
            }
        }
    }
    vec![]
}

fn handle_add_form_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Enter => vec![button::add_book().activate()],
        KeyCode::Esc => {
            state.focus = FocusPanel::Books;
            vec![]
        }
        _ => {
            edit_text(state, key);
            vec![]
        }
    }
}

fn handle_edit_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    let Some(id) = state.edit.editing_id() else {
        state.focus = FocusPanel::Books;
        return vec![];
    };
    match key.code {
        KeyCode::Enter => vec![Action::SaveEdit(id)],
        KeyCode::Esc => vec![Action::CancelEdit],
        KeyCode::Up | KeyCode::Down => {
            state.focus = match state.focus {
                FocusPanel::EditTitle => FocusPanel::EditAuthor,
                _ => FocusPanel::EditTitle,
            };
            vec![]
        }
        _ => {
            edit_text(state, key);
            vec![]
        }
    }
}

fn handle_books_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Up => state.select_prev(),
        KeyCode::Down => state.select_next(),
        KeyCode::Home => state.select_first(),
        KeyCode::End => state.select_last(),
        KeyCode::Left => state.control = RowControl::Primary,
        KeyCode::Right => state.control = RowControl::Secondary,
        KeyCode::Enter => {
            if let Some(book) = state.selected_book() {
                let editing = state.edit.editing_id() == Some(book.id);
                let controls = button::row_controls(&book, editing);
                return vec![controls[state.control.index()].activate()];
            }
        }
        // The row under edit only offers Save and Cancel.
        KeyCode::Char('e') => {
            if let Some(book) = state.selected_book() {
                if state.edit.editing_id() != Some(book.id) {
                    return vec![Action::StartEdit(book.id)];
                }
            }
        }
        KeyCode::Char('d') | KeyCode::Delete => {
            if let Some(book) = state.selected_book() {
                if state.edit.editing_id() != Some(book.id) {
                    return vec![Action::RemoveBook(book.id)];
                }
            }
        }
        KeyCode::Esc if state.edit.editing_id().is_some() => return vec![Action::CancelEdit],
        KeyCode::Char('/') => state.focus = FocusPanel::Search,
        KeyCode::Char('a') => state.focus = FocusPanel::AddTitle,
        KeyCode::Char('q') => return vec![Action::Quit],
        _ => {}
    }
    vec![]
}

/// Apply a text-editing key to the focused input. Returns whether the text
/// changed.
fn edit_text(state: &mut AppState, key: KeyEvent) -> bool {
    let focus = state.focus;
    let Some(input) = state.draft_mut(focus) else {
        return false;
    };
    let before = input.text.len();
    match key.code {
        KeyCode::Char('w') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            input.delete_word_back();
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            input.insert_char(c);
        }
        KeyCode::Backspace => input.delete_back(),
        KeyCode::Delete => input.delete_forward(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Home => input.move_home(),
        KeyCode::End => input.move_end(),
        _ => {}
    }
    input.text.len() != before
}
