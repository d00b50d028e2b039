use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct AppLayout {
    pub header: Option<Rect>,
    pub search: Rect,
    pub add_title: Rect,
    pub add_author: Rect,
    pub add_button: Rect,
    pub books: Rect,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect, show_header: bool) -> AppLayout {
    let header_height = if show_header { 2 } else { 0 };

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(header_height), // Banner
            Constraint::Length(3),             // Search
            Constraint::Length(3),             // Add form inputs
            Constraint::Length(1),             // Add button
            Constraint::Min(3),                // Collection
            Constraint::Length(1),             // Status bar
        ])
        .split(area);

    let form_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .spacing(1)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(main_chunks[2]);

    AppLayout {
        header: show_header.then_some(main_chunks[0]),
        search: main_chunks[1],
        add_title: form_chunks[0],
        add_author: form_chunks[1],
        add_button: main_chunks[3],
        books: main_chunks[4],
        status_bar: main_chunks[5],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_without_header() {
        let layout = compute_layout(Rect::new(0, 0, 80, 24), false);
        assert!(layout.header.is_none());
        assert_eq!(layout.search.y, 0);
        assert_eq!(layout.status_bar.y, 23);
        assert_eq!(layout.books.height, 24 - 3 - 3 - 1 - 1);
    }

    #[test]
    fn test_form_splits_horizontally() {
        let layout = compute_layout(Rect::new(0, 0, 81, 24), true);
        assert_eq!(layout.header.map(|h| h.height), Some(2));
        assert_eq!(layout.add_title.y, layout.add_author.y);
        assert!(layout.add_title.right() < layout.add_author.x);
    }
}
