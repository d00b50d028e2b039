use crate::library::BookId;

/// A state transition requested by user input. Produced by the key handler
/// and by [`LibraryButton::activate`](crate::ui::button::LibraryButton::activate),
/// applied by [`AppState::apply`](crate::app::state::AppState::apply).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    AddBook,
    StartEdit(BookId),
    SaveEdit(BookId),
    CancelEdit,
    RemoveBook(BookId),
    Quit,
}
