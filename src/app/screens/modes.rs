//! Mode selection screen implementation
//!
//! Shows one card per research mode plus a "Create New Mode" card.
//! Keyboard focus and the last rendered card areas are local to the screen;
//! the selected mode itself lives in [`ViewState`].

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::controller::ViewState;
use crate::app::theme;
use crate::models::{research_modes, Icon, ResearchMode};

/// What a card on this screen stands for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeCard {
    Mode(&'static ResearchMode),
    Create,
}

/// Mode selection screen component
#[derive(Debug, Default)]
pub struct ModeScreen {
    focused_index: usize,
    card_areas: Vec<Rect>,
}

impl ModeScreen {
    pub fn new() -> Self {
        Self::default()
    }

    fn card_count() -> usize {
        research_modes().len() + 1
    }

    pub fn focused_index(&self) -> usize {
        self.focused_index
    }

    /// Card under keyboard focus
    pub fn focused_card(&self) -> ModeCard {
        Self::card(self.focused_index)
    }

    fn card(index: usize) -> ModeCard {
        research_modes()
            .get(index)
            .map(ModeCard::Mode)
            .unwrap_or(ModeCard::Create)
    }

    pub fn select_next(&mut self) {
        self.focused_index = (self.focused_index + 1) % Self::card_count();
    }

    pub fn select_previous(&mut self) {
        if self.focused_index > 0 {
            self.focused_index -= 1;
        } else {
            self.focused_index = Self::card_count() - 1;
        }
    }

    /// Card at a terminal position from the last render, focusing it
    pub fn card_at(&mut self, column: u16, row: u16) -> Option<ModeCard> {
        let index = self.card_areas.iter().position(|area| {
            column >= area.x
                && column < area.x + area.width
                && row >= area.y
                && row < area.y + area.height
        })?;
        self.focused_index = index;
        Some(Self::card(index))
    }

    /// Render the mode selection screen
    pub fn render(&mut self, f: &mut Frame, state: &ViewState) {
        let size = f.size();
        let visible = !state.is_transitioning();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Top margin
                Constraint::Length(5), // Header
                Constraint::Min(14),   // Cards
                Constraint::Length(1), // Back to walkthrough
                Constraint::Length(1), // Trust indicators
                Constraint::Length(3), // Help
            ])
            .split(size);

        self.render_header(f, chunks[1], visible);
        self.render_cards(f, chunks[2], state, visible);
        self.render_back(f, chunks[3], visible);
        self.render_trust(f, chunks[4]);
        self.render_help(f, chunks[5]);
    }

    fn render_header(&self, f: &mut Frame, area: Rect, visible: bool) {
        let text = vec![
            Line::from(Span::styled(theme::icon_glyph(Icon::Search), theme::muted())),
            Line::from(Span::styled(
                "Choose Your Research Mode",
                theme::fade(theme::title(), visible),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Select the mode that best fits your current research needs and objectives",
                theme::fade(theme::muted(), visible),
            )),
        ];
        let header = Paragraph::new(text)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        f.render_widget(header, area);
    }

    fn render_cards(&mut self, f: &mut Frame, area: Rect, state: &ViewState, visible: bool) {
        let count = Self::card_count() as u32;
        let constraints: Vec<Constraint> =
            (0..count).map(|_| Constraint::Ratio(1, count)).collect();
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(constraints)
            .split(area);

        self.card_areas = columns.to_vec();
        let shown = visible && state.is_entered();

        for (index, column) in columns.iter().enumerate() {
            let focused = index == self.focused_index;
            match Self::card(index) {
                ModeCard::Mode(mode) => {
                    let selected = state.selected_mode_id() == Some(mode.id);
                    self.render_mode_card(f, *column, mode, focused, selected, shown);
                }
                ModeCard::Create => self.render_create_card(f, *column, focused, shown),
            }
        }
    }

    fn render_mode_card(
        &self,
        f: &mut Frame,
        area: Rect,
        mode: &ResearchMode,
        focused: bool,
        selected: bool,
        shown: bool,
    ) {
        let accent = theme::accent_color(mode.accent);
        let border_style = if selected || focused {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(accent)
        };

        let mut lines = vec![
            Line::from(Span::styled(
                theme::icon_glyph(mode.icon),
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(mode.title, theme::title())),
            Line::from(Span::styled(mode.subtitle, theme::muted())),
            Line::from(""),
            Line::from(Span::styled(mode.description, theme::faint())),
            Line::from(""),
        ];
        for feature in mode.features {
            lines.push(Line::from(Span::styled(format!("· {}", feature), theme::faint())));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("Enter Mode {}", theme::icon_glyph(Icon::ChevronRight)),
            theme::muted(),
        )));

        let title = if selected { " Opening… " } else { "" };
        let card = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .style(theme::fade(Style::default(), shown))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(if focused {
                        BorderType::Thick
                    } else {
                        BorderType::Rounded
                    })
                    .border_style(border_style)
                    .title(title)
                    .title_alignment(Alignment::Center),
            );
        f.render_widget(card, area);
    }

    fn render_create_card(&self, f: &mut Frame, area: Rect, focused: bool, shown: bool) {
        let lines = vec![
            Line::from(Span::styled(theme::icon_glyph(Icon::Plus), theme::muted())),
            Line::from(""),
            Line::from(Span::styled("Create New Mode", theme::title())),
            Line::from(""),
            Line::from(Span::styled(
                "Customize your own research environment with specific tools and workflows",
                theme::faint(),
            )),
        ];

        let border_style = if focused {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        } else {
            theme::faint()
        };
        let card = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .style(theme::fade(Style::default(), shown))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(if focused {
                        BorderType::Thick
                    } else {
                        BorderType::Plain
                    })
                    .border_style(border_style),
            );
        f.render_widget(card, area);
    }

    fn render_back(&self, f: &mut Frame, area: Rect, visible: bool) {
        let back = Paragraph::new(Line::from(vec![
            Span::styled("Esc", theme::key_hint()),
            Span::styled(" ← Back to Walkthrough", theme::fade(theme::muted(), visible)),
        ]))
        .alignment(Alignment::Center);
        f.render_widget(back, area);
    }

    fn render_trust(&self, f: &mut Frame, area: Rect) {
        let items = [
            (Icon::Shield, "Secure Platform"),
            (Icon::Award, "Academic Grade"),
            (Icon::Globe, "Global Access"),
        ];
        let mut spans = Vec::new();
        for (index, (icon, label)) in items.iter().enumerate() {
            if index > 0 {
                spans.push(Span::raw("     "));
            }
            spans.push(Span::styled(
                format!("{} {}", theme::icon_glyph(*icon), label),
                theme::faint(),
            ));
        }
        f.render_widget(
            Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
            area,
        );
    }

    fn render_help(&self, f: &mut Frame, area: Rect) {
        let help_text = vec![Line::from(vec![
            Span::styled("←→", theme::key_hint()),
            Span::raw(" Navigate  "),
            Span::styled("Enter", theme::key_hint()),
            Span::raw(" Open  "),
            Span::styled("+", theme::key_hint()),
            Span::raw(" Create  "),
            Span::styled("Q", theme::key_hint()),
            Span::raw(" Quit"),
        ])];

        let help = Paragraph::new(help_text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        );
        f.render_widget(help, area);
    }
}
