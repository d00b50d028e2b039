pub mod book_list;
pub mod button;
mod layout;
mod status_bar;
pub mod text_field;
pub mod theme;

use crate::app::state::{AppState, FocusPanel};
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use theme::Theme;

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let app_layout = layout::compute_layout(area, state.config.ui.show_header);

    if let Some(header) = app_layout.header {
        render_header(frame, header);
    }
    text_field::render(
        frame,
        app_layout.search,
        "🔍 Search",
        &state.query,
        "Search books by title or author...",
        state.focus == FocusPanel::Search,
    );
    text_field::render(
        frame,
        app_layout.add_title,
        "📖 Book Title",
        &state.add_title,
        "Enter book title",
        state.focus == FocusPanel::AddTitle,
    );
    text_field::render(
        frame,
        app_layout.add_author,
        "✍ Author Name",
        &state.add_author,
        "Enter author name",
        state.focus == FocusPanel::AddAuthor,
    );
    render_add_button(frame, app_layout.add_button, state);
    book_list::render(frame, app_layout.books, state);
    status_bar::render(frame, app_layout.status_bar, state);
}

fn render_header(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(" 📚 My Library", Theme::header())),
        Line::from(Span::styled(
            " Manage your favorite books with joy!",
            Theme::header_subtitle(),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).style(Theme::header_subtitle()), area);
}

fn render_add_button(frame: &mut Frame, area: Rect, state: &AppState) {
    let highlighted = matches!(state.focus, FocusPanel::AddTitle | FocusPanel::AddAuthor);
    let line = Line::from(vec![Span::raw(" "), button::add_book().span(highlighted)]);
    frame.render_widget(Paragraph::new(line), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::action::Action;
    use crate::config::AppConfig;
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;
    use ratatui::Terminal;

    fn draw(state: &AppState) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal.draw(|f| render(f, state)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn screen_text(buffer: &Buffer) -> String {
        let area = buffer.area;
        let mut out = String::new();
        for y in 0..area.height {
            for x in 0..area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    fn add(state: &mut AppState, title: &str, author: &str) {
        state.add_title = crate::app::state::InputState::with_text(title);
        state.add_author = crate::app::state::InputState::with_text(author);
        state.apply(Action::AddBook);
    }

    #[test]
    fn test_render_is_idempotent() {
        let mut state = AppState::new(AppConfig::default());
        add(&mut state, "Dune", "Herbert");
        add(&mut state, "Emma", "Austen");
        assert_eq!(draw(&state), draw(&state));
    }

    #[test]
    fn test_empty_library_message() {
        let state = AppState::new(AppConfig::default());
        let text = screen_text(&draw(&state));
        assert!(text.contains(book_list::EMPTY_LIBRARY));
        assert!(text.contains("My Collection"));
        assert!(!text.contains("My Collection ("));
    }

    #[test]
    fn test_no_matches_message_and_count() {
        let mut state = AppState::new(AppConfig::default());
        add(&mut state, "Dune", "Herbert");
        state.set_query("xyz");
        let text = screen_text(&draw(&state));
        assert!(text.contains(book_list::NO_MATCHES));
        assert!(text.contains("My Collection (0)"));
    }

    #[test]
    fn test_rows_show_books_and_controls() {
        let mut state = AppState::new(AppConfig::default());
        add(&mut state, "Dune", "Herbert");
        let text = screen_text(&draw(&state));
        assert!(text.contains("Dune"));
        assert!(text.contains("Herbert"));
        assert!(text.contains("[ Edit ]"));
        assert!(text.contains("[ Remove ]"));
        assert!(text.contains("My Collection (1)"));

        let id = state.library.books()[0].id;
        state.apply(Action::StartEdit(id));
        let text = screen_text(&draw(&state));
        assert!(text.contains("Editing Book"));
        assert!(text.contains("[ Save ]"));
        assert!(text.contains("[ Cancel ]"));
        assert!(!text.contains("[ Remove ]"));
    }
}
