use crate::app::action::Action;
use crate::config::AppConfig;
use crate::library::{Book, BookId, Library, LibraryError};
use std::sync::Arc;
use tracing::{debug, info};
use unicode_width::UnicodeWidthStr;

/// Single-line text input with a byte-offset cursor.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputState {
    pub text: String,
    pub cursor: usize,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(text: &str) -> Self {
        Self {
            text: text.to_string(),
            cursor: text.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn delete_back(&mut self) {
        if self.cursor > 0 {
            let prev = self.prev_boundary();
            self.text.drain(prev..self.cursor);
            self.cursor = prev;
        }
    }

    pub fn delete_forward(&mut self) {
        if self.cursor < self.text.len() {
            let next = self.next_boundary();
            self.text.drain(self.cursor..next);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.prev_boundary();
    }

    pub fn move_right(&mut self) {
        self.cursor = self.next_boundary();
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }

    pub fn delete_word_back(&mut self) {
        let head = &self.text[..self.cursor];
        let trimmed = head.trim_end_matches(' ');
        let pos = trimmed.rfind(' ').map(|i| i + 1).unwrap_or(0);
        self.text.drain(pos..self.cursor);
        self.cursor = pos;
    }

    /// Display columns between the start of the text and the cursor.
    pub fn cursor_width(&self) -> usize {
        self.text[..self.cursor].width()
    }

    fn prev_boundary(&self) -> usize {
        self.text[..self.cursor]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
            .unwrap_or(0)
    }

    fn next_boundary(&self) -> usize {
        self.text[self.cursor..]
            .char_indices()
            .nth(1)
            .map(|(i, _)| self.cursor + i)
            .unwrap_or(self.text.len())
    }
}

/// The single interactive edit, if any. Draft values live here and only reach
/// the library on a successful save.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum EditSession {
    #[default]
    Idle,
    Editing {
        id: BookId,
        title: InputState,
        author: InputState,
    },
}

impl EditSession {
    pub fn editing_id(&self) -> Option<BookId> {
        match self {
            EditSession::Idle => None,
            EditSession::Editing { id, .. } => Some(*id),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusPanel {
    Search,
    AddTitle,
    AddAuthor,
    Books,
    EditTitle,
    EditAuthor,
}

/// Which of the two per-row controls is highlighted in the book list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RowControl {
    #[default]
    Primary,
    Secondary,
}

impl RowControl {
    pub fn index(self) -> usize {
        match self {
            RowControl::Primary => 0,
            RowControl::Secondary => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyState {
    NoBooks,
    NoMatches,
}

pub struct AppState {
    pub config: AppConfig,
    pub library: Library,
    pub query: InputState,
    pub add_title: InputState,
    pub add_author: InputState,
    pub edit: EditSession,
    pub focus: FocusPanel,
    pub selected: usize,
    pub control: RowControl,
    pub should_quit: bool,
    pub dirty: bool,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            library: Library::new(),
            query: InputState::new(),
            add_title: InputState::new(),
            add_author: InputState::new(),
            edit: EditSession::Idle,
            focus: FocusPanel::AddTitle,
            selected: 0,
            control: RowControl::Primary,
            should_quit: false,
            dirty: true,
        }
    }

    /// Apply one action. All library mutations go through here.
    pub fn apply(&mut self, action: Action) {
        let before = self.library.snapshot();
        match action {
            Action::AddBook => {
                self.submit_add();
            }
            Action::StartEdit(id) => self.start_edit(id),
            Action::SaveEdit(id) => {
                self.save_edit(id);
            }
            Action::CancelEdit => self.cancel_edit(),
            Action::RemoveBook(id) => {
                self.remove_book(id);
            }
            Action::Quit => self.should_quit = true,
        }
        if !Arc::ptr_eq(&before, &self.library.snapshot()) {
            self.clamp_selection();
        }
        self.dirty = true;
    }

    /// Books matching the current query, in collection order.
    pub fn visible_books(&self) -> Vec<Book> {
        self.library.filter(&self.query.text)
    }

    pub fn selected_book(&self) -> Option<Book> {
        self.visible_books().into_iter().nth(self.selected)
    }

    /// Filtered count, shown only once the collection has any books.
    pub fn count_label(&self) -> Option<usize> {
        if self.library.is_empty() {
            None
        } else {
            Some(self.visible_books().len())
        }
    }

    pub fn empty_state(&self) -> Option<EmptyState> {
        if !self.visible_books().is_empty() {
            None
        } else if self.query.is_empty() {
            Some(EmptyState::NoBooks)
        } else {
            Some(EmptyState::NoMatches)
        }
    }

    /// Called after every edit of the search field.
    pub fn query_changed(&mut self) {
        self.selected = 0;
        self.control = RowControl::Primary;
        self.dirty = true;
    }

    pub fn set_query(&mut self, text: &str) {
        self.query = InputState::with_text(text);
        self.query_changed();
    }

    /// Add a book from the add form. The form is cleared only on success.
    pub fn submit_add(&mut self) -> bool {
        match self.library.add(&self.add_title.text, &self.add_author.text) {
            Ok(book) => {
                info!(id = book.id, title = %book.title, author = %book.author, "book added");
                let id = book.id;
                self.add_title.clear();
                self.add_author.clear();
                if let Some(pos) = self.visible_books().iter().position(|b| b.id == id) {
                    self.selected = pos;
                }
                true
            }
            Err(e) => {
                debug!(error = %e, "add rejected");
                false
            }
        }
    }

    /// Open an edit session for `id`, replacing any session already open.
    pub fn start_edit(&mut self, id: BookId) {
        let Some(book) = self.library.get(id) else {
            return;
        };
        if let Some(previous) = self.edit.editing_id().filter(|prev| *prev != id) {
            debug!(previous, id, "discarding unsaved edit");
        }
        self.edit = EditSession::Editing {
            id,
            title: InputState::with_text(&book.title),
            author: InputState::with_text(&book.author),
        };
        self.focus = FocusPanel::EditTitle;
    }

    /// Commit the drafts for `id`. Blank drafts leave the session open.
    pub fn save_edit(&mut self, id: BookId) -> bool {
        let (title, author) = match &self.edit {
            EditSession::Editing { id: eid, title, author } if *eid == id => {
                (title.text.clone(), author.text.clone())
            }
            _ => return false,
        };
        match self.library.update(id, &title, &author) {
            Ok(book) => {
                info!(id, title = %book.title, author = %book.author, "book updated");
                self.close_edit();
                true
            }
            Err(LibraryError::NotFound(_)) => {
                debug!(id, "edited book no longer exists");
                self.close_edit();
                false
            }
            Err(e) => {
                debug!(id, error = %e, "save rejected");
                false
            }
        }
    }

    pub fn cancel_edit(&mut self) {
        if self.edit != EditSession::Idle {
            self.close_edit();
        }
    }

    pub fn remove_book(&mut self, id: BookId) -> bool {
        match self.library.remove(id) {
            Some(book) => {
                info!(id, title = %book.title, remaining = self.library.len(), "book removed");
                if self.edit.editing_id() == Some(id) {
                    self.close_edit();
                }
                true
            }
            None => false,
        }
    }

    pub fn draft_mut(&mut self, focus: FocusPanel) -> Option<&mut InputState> {
        match (focus, &mut self.edit) {
            (FocusPanel::Search, _) => Some(&mut self.query),
            (FocusPanel::AddTitle, _) => Some(&mut self.add_title),
            (FocusPanel::AddAuthor, _) => Some(&mut self.add_author),
            (FocusPanel::EditTitle, EditSession::Editing { title, .. }) => Some(title),
            (FocusPanel::EditAuthor, EditSession::Editing { author, .. }) => Some(author),
            _ => None,
        }
    }

    pub fn cycle_focus(&mut self) {
        let order = self.focus_order();
        let idx = order.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = order[(idx + 1) % order.len()];
        self.dirty = true;
    }

    pub fn cycle_focus_back(&mut self) {
        let order = self.focus_order();
        let idx = order.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = order[(idx + order.len() - 1) % order.len()];
        self.dirty = true;
    }

    pub fn select_next(&mut self) {
        let len = self.visible_books().len();
        if self.selected + 1 < len {
            self.selected += 1;
            self.control = RowControl::Primary;
        }
    }

    pub fn select_prev(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
            self.control = RowControl::Primary;
        }
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
        self.control = RowControl::Primary;
    }

    pub fn select_last(&mut self) {
        self.selected = self.visible_books().len().saturating_sub(1);
        self.control = RowControl::Primary;
    }

    fn focus_order(&self) -> &'static [FocusPanel] {
        use FocusPanel::*;
        match self.edit.editing_id() {
            Some(id) if self.visible_books().iter().any(|b| b.id == id) => {
                &[Search, AddTitle, AddAuthor, Books, EditTitle, EditAuthor]
            }
            _ => &[Search, AddTitle, AddAuthor, Books],
        }
    }

    fn close_edit(&mut self) {
        self.edit = EditSession::Idle;
        if matches!(self.focus, FocusPanel::EditTitle | FocusPanel::EditAuthor) {
            self.focus = FocusPanel::Books;
        }
    }

    fn clamp_selection(&mut self) {
        let len = self.visible_books().len();
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn state_with(books: &[(BookId, &str, &str)]) -> AppState {
        let mut state = AppState::new(AppConfig::default());
        state.library = Library::from_books(
            books
                .iter()
                .map(|(id, t, a)| Book::new(*id, t, a).unwrap())
                .collect(),
        );
        state
    }

    fn type_into(input: &mut InputState, text: &str) {
        for c in text.chars() {
            input.insert_char(c);
        }
    }

    #[test]
    fn test_input_editing() {
        let mut input = InputState::new();
        type_into(&mut input, "héllo wörld");
        input.move_left();
        input.delete_back();
        assert_eq!(input.text, "héllo wörd");
        input.move_home();
        input.move_right();
        input.delete_forward();
        assert_eq!(input.text, "hllo wörd");
        input.move_end();
        input.delete_word_back();
        assert_eq!(input.text, "hllo ");
        assert_eq!(input.cursor, input.text.len());
    }

    #[test]
    fn test_cursor_width_counts_columns() {
        let input = InputState::with_text("日本");
        assert_eq!(input.cursor, 6);
        assert_eq!(input.cursor_width(), 4);
    }

    #[test]
    fn test_add_clears_form_on_success() {
        let mut state = AppState::new(AppConfig::default());
        type_into(&mut state.add_title, "Dune");
        type_into(&mut state.add_author, "Herbert");
        state.apply(Action::AddBook);
        assert_eq!(state.library.len(), 1);
        assert!(state.add_title.is_empty());
        assert!(state.add_author.is_empty());
        assert_eq!(state.count_label(), Some(1));
    }

    #[test]
    fn test_add_keeps_form_on_failure() {
        let mut state = AppState::new(AppConfig::default());
        type_into(&mut state.add_title, "  ");
        type_into(&mut state.add_author, "X");
        state.apply(Action::AddBook);
        assert!(state.library.is_empty());
        assert_eq!(state.add_title.text, "  ");
        assert_eq!(state.add_author.text, "X");
        assert_eq!(state.count_label(), None);
    }

    #[test]
    fn test_switching_edit_discards_draft() {
        let mut state = state_with(&[(1, "A", "Alice"), (2, "B", "Bob")]);
        state.apply(Action::StartEdit(1));
        if let Some(draft) = state.draft_mut(FocusPanel::EditTitle) {
            type_into(draft, " changed");
        }
        state.apply(Action::StartEdit(2));
        assert_eq!(
            state.edit,
            EditSession::Editing {
                id: 2,
                title: InputState::with_text("B"),
                author: InputState::with_text("Bob"),
            }
        );

        state.apply(Action::CancelEdit);
        assert_eq!(state.edit, EditSession::Idle);
        assert_eq!(state.library.get(1).unwrap().title, "A");
        assert_eq!(state.library.get(2).unwrap().title, "B");
    }

    #[test]
    fn test_save_requires_valid_drafts() {
        let mut state = state_with(&[(1, "Old", "X")]);
        state.apply(Action::StartEdit(1));
        state.draft_mut(FocusPanel::EditTitle).unwrap().clear();
        state.apply(Action::SaveEdit(1));
        assert_eq!(state.edit.editing_id(), Some(1));
        assert_eq!(state.library.get(1).unwrap().title, "Old");

        type_into(state.draft_mut(FocusPanel::EditTitle).unwrap(), "New");
        state.apply(Action::SaveEdit(1));
        assert_eq!(state.edit, EditSession::Idle);
        let book = state.library.get(1).unwrap();
        assert_eq!((book.title.as_str(), book.author.as_str()), ("New", "X"));
        assert_eq!(state.focus, FocusPanel::Books);
    }

    #[test]
    fn test_save_for_other_id_is_ignored() {
        let mut state = state_with(&[(1, "A", "Alice"), (2, "B", "Bob")]);
        state.apply(Action::StartEdit(1));
        assert!(!state.save_edit(2));
        assert_eq!(state.edit.editing_id(), Some(1));
    }

    #[test]
    fn test_start_edit_unknown_id_is_noop() {
        let mut state = state_with(&[(1, "A", "Alice")]);
        state.apply(Action::StartEdit(9));
        assert_eq!(state.edit, EditSession::Idle);
    }

    #[test]
    fn test_removing_edited_book_closes_session() {
        let mut state = state_with(&[(1, "A", "Alice"), (2, "B", "Bob")]);
        state.apply(Action::StartEdit(2));
        state.apply(Action::RemoveBook(2));
        assert_eq!(state.edit, EditSession::Idle);
        assert_eq!(state.library.len(), 1);
    }

    #[test]
    fn test_remove_clamps_selection() {
        let mut state = state_with(&[(3, "C", "Carol"), (2, "B", "Bob"), (1, "A", "Alice")]);
        state.select_last();
        assert_eq!(state.selected, 2);
        state.apply(Action::RemoveBook(1));
        assert_eq!(state.selected, 1);
        assert_eq!(state.selected_book().unwrap().id, 2);
    }

    #[test]
    fn test_empty_states() {
        let mut state = AppState::new(AppConfig::default());
        assert_eq!(state.empty_state(), Some(EmptyState::NoBooks));
        state.set_query("dune");
        assert_eq!(state.empty_state(), Some(EmptyState::NoMatches));

        let mut state = state_with(&[(1, "Dune", "Herbert")]);
        assert_eq!(state.empty_state(), None);
        state.set_query("xyz");
        assert_eq!(state.empty_state(), Some(EmptyState::NoMatches));
        assert_eq!(state.count_label(), Some(0));
        state.set_query("HERB");
        assert_eq!(state.empty_state(), None);
        assert_eq!(state.count_label(), Some(1));
    }

    #[test]
    fn test_query_resets_selection() {
        let mut state = state_with(&[(2, "B", "Bob"), (1, "A", "Alice")]);
        state.select_next();
        assert_eq!(state.selected, 1);
        state.set_query("b");
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn test_focus_cycle_includes_edit_fields_while_editing() {
        let mut state = state_with(&[(1, "A", "Alice")]);
        state.focus = FocusPanel::Books;
        state.cycle_focus();
        assert_eq!(state.focus, FocusPanel::Search);

        state.apply(Action::StartEdit(1));
        assert_eq!(state.focus, FocusPanel::EditTitle);
        state.cycle_focus();
        assert_eq!(state.focus, FocusPanel::EditAuthor);
        state.cycle_focus_back();
        state.cycle_focus_back();
        assert_eq!(state.focus, FocusPanel::Books);
    }

    #[test]
    fn test_focus_cycle_skips_edit_fields_of_hidden_row() {
        let mut state = state_with(&[(2, "Dune", "Herbert"), (1, "Emma", "Austen")]);
        state.apply(Action::StartEdit(2));
        state.set_query("emma");
        state.focus = FocusPanel::Search;

        let mut seen = Vec::new();
        for _ in 0..8 {
            state.cycle_focus();
            seen.push(state.focus);
        }
        assert!(!seen.contains(&FocusPanel::EditTitle));
        assert!(!seen.contains(&FocusPanel::EditAuthor));
        state.cycle_focus_back();
        assert_ne!(state.focus, FocusPanel::EditAuthor);

        state.set_query("");
        state.focus = FocusPanel::Books;
        state.cycle_focus();
        assert_eq!(state.focus, FocusPanel::EditTitle);
    }
}
