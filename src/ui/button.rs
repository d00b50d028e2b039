//! Library action controls.
//!
//! A [`LibraryButton`] is a stateless control: a semantic variant that picks
//! its colors, a label, and the [`Action`] it yields when activated.

use crate::app::action::Action;
use crate::library::Book;
use crate::ui::theme::Theme;
use ratatui::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonVariant {
    Add,
    Edit,
    Remove,
}

impl ButtonVariant {
    fn color(self) -> Color {
        match self {
            ButtonVariant::Add => Theme::ACCENT_BLUE,
            ButtonVariant::Edit => Theme::ACCENT_AMBER,
            ButtonVariant::Remove => Theme::ACCENT_RED,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryButton {
    pub variant: ButtonVariant,
    pub label: &'static str,
    action: Action,
}

impl LibraryButton {
    pub fn new(variant: ButtonVariant, label: &'static str, action: Action) -> Self {
        Self { variant, label, action }
    }

    pub fn activate(&self) -> Action {
        self.action.clone()
    }

    /// Highlighted buttons are drawn filled, others as colored text.
    pub fn span(&self, highlighted: bool) -> Span<'static> {
        let color = self.variant.color();
        let style = if highlighted {
            Style::default()
                .fg(Theme::BG_DARK)
                .bg(color)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(color)
        };
        Span::styled(format!("[ {} ]", self.label), style)
    }
}

pub fn add_book() -> LibraryButton {
    LibraryButton::new(ButtonVariant::Add, "Add Book", Action::AddBook)
}

/// The two controls shown on a book row: Edit/Remove normally, Save/Cancel
/// while that row is being edited.
pub fn row_controls(book: &Book, editing: bool) -> [LibraryButton; 2] {
    if editing {
        [
            LibraryButton::new(ButtonVariant::Add, "Save", Action::SaveEdit(book.id)),
            LibraryButton::new(ButtonVariant::Remove, "Cancel", Action::CancelEdit),
        ]
    } else {
        [
            LibraryButton::new(ButtonVariant::Edit, "Edit", Action::StartEdit(book.id)),
            LibraryButton::new(ButtonVariant::Remove, "Remove", Action::RemoveBook(book.id)),
        ]
    }
}
