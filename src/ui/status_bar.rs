use crate::app::state::*;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn focus_name(focus: FocusPanel) -> &'static str {
    match focus {
        FocusPanel::Search => "SEARCH",
        FocusPanel::AddTitle | FocusPanel::AddAuthor => "ADD",
        FocusPanel::Books => "BOOKS",
        FocusPanel::EditTitle | FocusPanel::EditAuthor => "EDIT",
    }
}

pub fn hints(focus: FocusPanel) -> &'static [(&'static str, &'static str)] {
    match focus {
        FocusPanel::Search => &[("Tab", "Next"), ("Enter", "Books"), ("Esc", "Clear"), ("^C", "Quit")],
        FocusPanel::AddTitle | FocusPanel::AddAuthor => {
            &[("Tab", "Next"), ("Enter", "Add"), ("Esc", "Books"), ("^C", "Quit")]
        }
        FocusPanel::Books => &[
            ("↑↓", "Select"),
            ("←→", "Control"),
            ("Enter", "Press"),
            ("e", "Edit"),
            ("d", "Remove"),
            ("/", "Search"),
            ("a", "Add"),
            ("q", "Quit"),
        ],
        FocusPanel::EditTitle | FocusPanel::EditAuthor => {
            &[("↑↓", "Field"), ("Enter", "Save"), ("Esc", "Cancel"), ("Tab", "Next")]
        }
    }
}

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut parts: Vec<Span> = Vec::new();

    if state.config.ui.show_hints {
        for (key, label) in hints(state.focus) {
            parts.push(Span::styled(format!(" {}", key), Theme::status_key()));
            parts.push(Span::styled(format!(" {} ", label), Theme::status_bar()));
        }
    }

    // Focus indicator, right-aligned
    let focus_name = focus_name(state.focus);
    let used: usize = parts.iter().map(|s| s.width()).sum();
    let remaining = (area.width as usize).saturating_sub(used + focus_name.len() + 3);
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
    parts.push(Span::styled(
        format!(" [{}] ", focus_name),
        Style::default().fg(Theme::ACCENT_PURPLE).bg(Theme::BG_PANEL),
    ));

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}
