//! TUI screen components
//!
//! Contains individual screen implementations plus the overlays shared by
//! both screens.

pub mod modes;
pub mod skip_dialog;
pub mod walkthrough;

pub use modes::{ModeCard, ModeScreen};
pub use skip_dialog::{SkipChoice, SkipDialog};
pub use walkthrough::WalkthroughScreen;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::controller::{Notice, NoticeKind};

/// Render a transient notice near the bottom of the screen
pub fn render_notice(f: &mut Frame, notice: &Notice) {
    let size = f.size();
    let area = Rect {
        y: size.height.saturating_sub(8),
        ..centered_rect(60, 5, size)
    };

    let color = match notice.kind {
        NoticeKind::Info => Color::Cyan,
        NoticeKind::Error => Color::LightRed,
    };
    let paragraph = Paragraph::new(notice.message.as_str())
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color))
                .title(" Notice "),
        );

    f.render_widget(Clear, area);
    f.render_widget(paragraph, area);
}

pub(crate) fn centered_rect(percent_x: u16, height: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
