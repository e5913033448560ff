//! Terminal rendering of the semantic style tokens carried by the models

use ratatui::style::{Color, Modifier, Style};

use crate::models::{Accent, Icon};

pub fn accent_color(accent: Accent) -> Color {
    match accent {
        Accent::Blue => Color::LightBlue,
        Accent::Emerald => Color::LightGreen,
        Accent::Purple => Color::LightMagenta,
    }
}

pub fn icon_glyph(icon: Icon) -> &'static str {
    match icon {
        Icon::ArrowRight => "→",
        Icon::Award => "★",
        Icon::BookOpen => "▤",
        Icon::ChevronRight => "›",
        Icon::ExternalLink => "↗",
        Icon::Globe => "◍",
        Icon::Plus => "+",
        Icon::Search => "⌕",
        Icon::Shield => "◈",
        Icon::TrendingUp => "↗",
        Icon::Zap => "ϟ",
    }
}

pub fn title() -> Style {
    Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
}

pub fn muted() -> Style {
    Style::default().fg(Color::Gray)
}

pub fn faint() -> Style {
    Style::default().fg(Color::DarkGray)
}

pub fn key_hint() -> Style {
    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
}

/// Content style while the screen is fading or before the entry animation
pub fn fade(style: Style, visible: bool) -> Style {
    if visible {
        style
    } else {
        style.add_modifier(Modifier::DIM)
    }
}
