//! Skip walkthrough dialog
//!
//! Modal overlay offering a permanent skip, a one-session skip, or a way
//! back into the walkthrough.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::centered_rect;
use crate::app::theme;

/// Dialog choices, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipChoice {
    Permanently,
    ThisTime,
    Continue,
}

impl SkipChoice {
    pub fn all() -> [Self; 3] {
        [Self::Permanently, Self::ThisTime, Self::Continue]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Permanently => "Skip Permanently",
            Self::ThisTime => "Skip This Time",
            Self::Continue => "Continue Walkthrough",
        }
    }

    fn style(&self) -> Style {
        match self {
            Self::Permanently => Style::default().fg(Color::LightRed),
            Self::ThisTime => Style::default().fg(Color::White),
            Self::Continue => theme::muted(),
        }
    }
}

#[derive(Debug)]
pub struct SkipDialog {
    focused: usize,
}

impl SkipDialog {
    pub fn new() -> Self {
        Self { focused: 0 }
    }

    /// Put focus back on the first choice
    pub fn reset(&mut self) {
        self.focused = 0;
    }

    pub fn focused_choice(&self) -> SkipChoice {
        SkipChoice::all()[self.focused]
    }

    pub fn select_next(&mut self) {
        self.focused = (self.focused + 1) % SkipChoice::all().len();
    }

    pub fn select_previous(&mut self) {
        let len = SkipChoice::all().len();
        self.focused = (self.focused + len - 1) % len;
    }

    pub fn render(&self, f: &mut Frame, area: Rect) {
        let popup = centered_rect(50, 13, area);

        let mut lines = vec![
            Line::from(Span::styled("Skip Walkthrough", theme::title())),
            Line::from(""),
            Line::from(Span::styled(
                "Would you like to skip the walkthrough permanently or just for this session?",
                theme::muted(),
            )),
            Line::from(""),
        ];
        for (index, choice) in SkipChoice::all().iter().enumerate() {
            let (marker, style) = if index == self.focused {
                ("› ", choice.style().add_modifier(Modifier::BOLD | Modifier::REVERSED))
            } else {
                ("  ", choice.style())
            };
            lines.push(Line::from(vec![
                Span::raw(marker),
                Span::styled(format!(" {} ", choice.label()), style),
            ]));
            lines.push(Line::from(""));
        }

        let dialog = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(Color::White)),
            );

        f.render_widget(Clear, popup);
        f.render_widget(dialog, popup);
    }
}

impl Default for SkipDialog {
    fn default() -> Self {
        Self::new()
    }
}
