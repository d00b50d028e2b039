use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

pub struct Theme;

impl Theme {
    pub const BG_DARK: Color = Color::Rgb(24, 20, 37);
    pub const BG_PANEL: Color = Color::Rgb(32, 28, 48);
    pub const ACCENT_PURPLE: Color = Color::Rgb(147, 112, 219);
    pub const ACCENT_BLUE: Color = Color::Rgb(59, 130, 246);
    pub const ACCENT_AMBER: Color = Color::Rgb(245, 158, 11);
    pub const ACCENT_RED: Color = Color::Rgb(239, 68, 68);
    pub const TEXT_PRIMARY: Color = Color::Rgb(230, 230, 240);
    pub const TEXT_SECONDARY: Color = Color::Rgb(170, 165, 190);
    pub const TEXT_MUTED: Color = Color::Rgb(110, 105, 130);

    pub fn border() -> Style {
        Style::default().fg(Self::TEXT_MUTED)
    }

    pub fn border_focused() -> Style {
        Style::default().fg(Self::ACCENT_PURPLE)
    }

    pub fn border_editing() -> Style {
        Style::default().fg(Self::ACCENT_AMBER)
    }

    pub fn border_type() -> BorderType {
        BorderType::Plain
    }

    pub fn border_type_focused() -> BorderType {
        BorderType::Rounded
    }

    pub fn panel_bg() -> Style {
        Style::default().bg(Self::BG_DARK)
    }

    pub fn title() -> Style {
        Style::default()
            .fg(Self::TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn header() -> Style {
        Style::default()
            .fg(Color::White)
            .bg(Self::ACCENT_PURPLE)
            .add_modifier(Modifier::BOLD)
    }

    pub fn header_subtitle() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY).bg(Self::ACCENT_PURPLE)
    }

    pub fn book_title() -> Style {
        Style::default()
            .fg(Self::TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn book_author() -> Style {
        Style::default().fg(Self::TEXT_SECONDARY)
    }

    pub fn selected_row() -> Style {
        Style::default().bg(Self::BG_PANEL)
    }

    pub fn placeholder() -> Style {
        Style::default().fg(Self::TEXT_MUTED)
    }

    pub fn input_text() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY)
    }

    pub fn cursor() -> Style {
        Style::default().fg(Self::BG_DARK).bg(Self::ACCENT_AMBER)
    }

    pub fn empty_state() -> Style {
        Style::default().fg(Self::TEXT_SECONDARY)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY).bg(Self::BG_PANEL)
    }

    pub fn status_key() -> Style {
        Style::default()
            .fg(Self::ACCENT_AMBER)
            .bg(Self::BG_PANEL)
            .add_modifier(Modifier::BOLD)
    }
}
