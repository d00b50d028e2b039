use crate::app::state::InputState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, Borders, Paragraph};

/// Bordered single-line input. The terminal cursor is placed in the field
/// when it has focus; an empty unfocused field shows its placeholder.
pub fn render(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    input: &InputState,
    placeholder: &str,
    focused: bool,
) {
    let (border_style, border_type) = if focused {
        (Theme::border_focused(), Theme::border_type_focused())
    } else {
        (Theme::border(), Theme::border_type())
    };

    let block = Block::default()
        .title(format!(" {} ", title))
        .title_style(if focused { Theme::title() } else { Theme::border() })
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border_style)
        .padding(Padding::horizontal(1))
        .style(Theme::panel_bg());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let paragraph = if input.is_empty() && !focused {
        Paragraph::new(Span::styled(placeholder, Theme::placeholder()))
    } else {
        Paragraph::new(Span::styled(input.text.as_str(), Theme::input_text()))
    };
    frame.render_widget(paragraph, inner);

    if focused && inner.width > 0 && inner.height > 0 {
        let cursor_x = inner.x + input.cursor_width() as u16;
        frame.set_cursor_position((cursor_x.min(inner.right() - 1), inner.y));
    }
}

/// Inline rendering for inputs drawn inside other widgets, with a block
/// cursor when focused.
pub fn inline_spans(input: &InputState, focused: bool) -> Vec<Span<'_>> {
    if !focused {
        return vec![Span::styled(input.text.as_str(), Theme::input_text())];
    }
    let (before, rest) = input.text.split_at(input.cursor);
    let mut spans = vec![Span::styled(before, Theme::input_text())];
    match rest.chars().next() {
        Some(c) => {
            let split = c.len_utf8();
            spans.push(Span::styled(&rest[..split], Theme::cursor()));
            spans.push(Span::styled(&rest[split..], Theme::input_text()));
        }
        None => spans.push(Span::styled(" ", Theme::cursor())),
    }
    spans
}
