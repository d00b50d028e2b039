use crate::app::state::*;
use crate::library::Book;
use crate::ui::button;
use crate::ui::text_field;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};

pub const EMPTY_LIBRARY: &str = "Your library is empty. Start adding books!";
pub const NO_MATCHES: &str = "No books match your search";

pub fn title(state: &AppState) -> String {
    match state.count_label() {
        Some(n) => format!(" My Collection ({}) ", n),
        None => " My Collection ".to_string(),
    }
}

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let (border_style, border_type) = match state.focus {
        FocusPanel::Books => (Theme::border_focused(), Theme::border_type_focused()),
        FocusPanel::EditTitle | FocusPanel::EditAuthor => {
            (Theme::border_editing(), Theme::border_type_focused())
        }
        _ => (Theme::border(), Theme::border_type()),
    };

    let block = Block::default()
        .title(title(state))
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border_style)
        .style(Theme::panel_bg());

    if let Some(empty) = state.empty_state() {
        let text = match empty {
            EmptyState::NoBooks => EMPTY_LIBRARY,
            EmptyState::NoMatches => NO_MATCHES,
        };
        let paragraph = Paragraph::new(Line::from(Span::styled(text, Theme::empty_state())))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block);
        frame.render_widget(paragraph, area);
        return;
    }

    let books = state.visible_books();
    let items: Vec<ListItem> = books
        .iter()
        .enumerate()
        .map(|(i, book)| {
            let selected = i == state.selected && state.focus == FocusPanel::Books;
            book_item(book, state, selected)
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Theme::selected_row());
    let mut list_state = ListState::default().with_selected(Some(state.selected));
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn book_item<'a>(book: &Book, state: &'a AppState, selected: bool) -> ListItem<'a> {
    let mut lines: Vec<Line> = Vec::new();

    let controls = match &state.edit {
        EditSession::Editing { id, title, author } if *id == book.id => {
            lines.push(Line::from(Span::styled(
                " ✏ Editing Book",
                Style::default().fg(Theme::ACCENT_AMBER).add_modifier(Modifier::BOLD),
            )));
            lines.push(draft_line("Title ", title, state.focus == FocusPanel::EditTitle));
            lines.push(draft_line("Author", author, state.focus == FocusPanel::EditAuthor));
            button::row_controls(book, true)
        }
        _ => {
            lines.push(Line::from(vec![
                Span::raw(" 📕 "),
                Span::styled(book.title.clone(), Theme::book_title()),
            ]));
            lines.push(Line::from(vec![
                Span::raw("    ✍ "),
                Span::styled(book.author.clone(), Theme::book_author()),
            ]));
            button::row_controls(book, false)
        }
    };

    let mut control_spans = vec![Span::raw("    ")];
    for (i, control) in controls.iter().enumerate() {
        if i > 0 {
            control_spans.push(Span::raw(" "));
        }
        control_spans.push(control.span(selected && i == state.control.index()));
    }
    lines.push(Line::from(control_spans));
    lines.push(Line::default());

    ListItem::new(lines)
}

fn draft_line<'a>(label: &'static str, input: &'a InputState, focused: bool) -> Line<'a> {
    let mut spans = vec![Span::styled(
        format!("    {}: ", label),
        Style::default().fg(Theme::TEXT_SECONDARY),
    )];
    spans.extend(text_field::inline_spans(input, focused));
    Line::from(spans)
}
