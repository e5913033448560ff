//! Walkthrough screen implementation
//!
//! Renders the current onboarding step with a progress indicator and the
//! step-specific section (standards, portfolio or metrics).

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::controller::ViewState;
use crate::app::theme;
use crate::models::{is_last_step, walkthrough_steps, Icon, Metric, PortfolioEntry, Standard, WalkthroughStep};

/// Walkthrough screen component; all state comes from [`ViewState`]
#[derive(Debug, Default)]
pub struct WalkthroughScreen;

/// Marker style for one progress position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepMarker {
    Past,
    Current,
    Future,
}

impl StepMarker {
    pub fn for_index(index: usize, current: usize) -> Self {
        match index.cmp(&current) {
            std::cmp::Ordering::Less => Self::Past,
            std::cmp::Ordering::Equal => Self::Current,
            std::cmp::Ordering::Greater => Self::Future,
        }
    }

    fn span(self) -> Span<'static> {
        match self {
            Self::Current => Span::styled(
                "━━━━━━━━",
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
            Self::Past => Span::styled("━━━━", Style::default().fg(Color::Gray)),
            Self::Future => Span::styled("━━━━", Style::default().fg(Color::DarkGray)),
        }
    }
}

/// Text of the forward button for `step`
pub fn next_label(step: usize) -> &'static str {
    if is_last_step(step) {
        "Get Started"
    } else {
        "Next"
    }
}

impl WalkthroughScreen {
    pub fn new() -> Self {
        Self
    }

    /// Render the walkthrough screen
    pub fn render(&self, f: &mut Frame, state: &ViewState) {
        let size = f.size();
        let index = state.walkthrough_step();
        let step = &walkthrough_steps()[index];
        let visible = !state.is_transitioning();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Top margin
                Constraint::Length(2), // Progress indicator
                Constraint::Length(6), // Header
                Constraint::Min(8),    // Step section
                Constraint::Length(3), // Navigation
            ])
            .split(size);

        self.render_progress(f, chunks[1], index);
        self.render_header(f, chunks[2], step, visible);

        if visible && state.is_entered() {
            if let Some(standards) = step.standards {
                self.render_standards(f, chunks[3], standards);
            } else if let Some(entries) = step.portfolio {
                self.render_portfolio(f, chunks[3], entries);
            } else if let Some(metrics) = step.metrics {
                self.render_metrics(f, chunks[3], metrics);
            }
        }

        self.render_navigation(f, chunks[4], index, visible);
    }

    fn render_progress(&self, f: &mut Frame, area: Rect, current: usize) {
        let mut spans = Vec::new();
        for index in 0..walkthrough_steps().len() {
            if index > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(StepMarker::for_index(index, current).span());
        }

        let progress = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
        f.render_widget(progress, area);
    }

    fn render_header(&self, f: &mut Frame, area: Rect, step: &WalkthroughStep, visible: bool) {
        let text = vec![
            Line::from(Span::styled(step.title, theme::fade(theme::title(), visible))),
            Line::from(Span::styled(step.subtitle, theme::fade(theme::muted(), visible))),
            Line::from(""),
            Line::from(Span::styled(step.description, theme::fade(theme::faint(), visible))),
        ];

        let header = Paragraph::new(text)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        f.render_widget(header, area);
    }

    fn render_standards(&self, f: &mut Frame, area: Rect, standards: &[Standard]) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme::faint())
            .title(" Good Laboratory Practice Standards ")
            .title_alignment(Alignment::Center);
        let inner = block.inner(area);
        f.render_widget(block, area);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(inner);

        let half = (standards.len() + 1) / 2;
        for (column, chunk) in columns.iter().zip(standards.chunks(half.max(1))) {
            let mut lines = Vec::new();
            for standard in chunk {
                lines.push(Line::from(vec![
                    Span::styled("● ", Style::default().fg(Color::LightBlue)),
                    Span::styled(standard.title, theme::title()),
                ]));
                lines.push(Line::from(Span::styled(
                    format!("  {}", standard.description),
                    theme::muted(),
                )));
            }
            let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
            f.render_widget(paragraph, *column);
        }
    }

    fn render_portfolio(&self, f: &mut Frame, area: Rect, entries: &[PortfolioEntry]) {
        let constraints: Vec<Constraint> = entries
            .iter()
            .map(|_| Constraint::Length(5))
            .chain(std::iter::once(Constraint::Min(0)))
            .collect();
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area);

        for (entry, row) in entries.iter().zip(rows.iter()) {
            let (border, text, detail, icon) = if entry.is_placeholder {
                (
                    BorderType::Plain,
                    theme::faint(),
                    theme::faint(),
                    Icon::Plus,
                )
            } else {
                (
                    BorderType::Rounded,
                    theme::title(),
                    Style::default().fg(Color::LightBlue),
                    Icon::ExternalLink,
                )
            };

            let lines = vec![
                Line::from(vec![
                    Span::styled(entry.title, text),
                    Span::raw("  "),
                    Span::styled(theme::icon_glyph(icon), theme::muted()),
                ]),
                Line::from(Span::styled(entry.journal, detail)),
                Line::from(Span::styled(
                    format!("{}  •  {} citations", entry.year, entry.citations),
                    theme::faint(),
                )),
            ];

            let card = Paragraph::new(lines).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(border)
                    .border_style(theme::faint()),
            );
            f.render_widget(card, *row);
        }
    }

    fn render_metrics(&self, f: &mut Frame, area: Rect, metrics: &[Metric]) {
        let constraints: Vec<Constraint> = metrics
            .iter()
            .map(|_| Constraint::Ratio(1, metrics.len() as u32))
            .collect();
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(constraints)
            .split(Rect {
                height: area.height.min(7),
                ..area
            });

        for (metric, column) in metrics.iter().zip(columns.iter()) {
            let lines = vec![
                Line::from(Span::styled(theme::icon_glyph(metric.icon), theme::muted())),
                Line::from(""),
                Line::from(Span::styled(metric.value, theme::title())),
                Line::from(Span::styled(metric.label, theme::faint())),
            ];
            let card = Paragraph::new(lines)
                .alignment(Alignment::Center)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_type(BorderType::Rounded)
                        .border_style(theme::faint()),
                );
            f.render_widget(card, *column);
        }
    }

    fn render_navigation(&self, f: &mut Frame, area: Rect, step: usize, visible: bool) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);

        let skip = Paragraph::new(Line::from(vec![
            Span::styled("S", theme::key_hint()),
            Span::styled(" Skip Walkthrough", theme::fade(theme::muted(), visible)),
        ]))
        .block(Block::default().borders(Borders::TOP).border_style(theme::faint()));
        f.render_widget(skip, columns[0]);

        let mut next = vec![
            Span::styled("Enter", theme::key_hint()),
            Span::styled(
                format!(" {} {}", next_label(step), theme::icon_glyph(Icon::ArrowRight)),
                theme::fade(theme::title(), visible),
            ),
        ];
        if walkthrough_steps()[step].portfolio.is_some() {
            next.insert(0, Span::styled("+ Add work   ", theme::muted()));
        }
        let next = Paragraph::new(Line::from(next))
            .alignment(Alignment::Right)
            .block(Block::default().borders(Borders::TOP).border_style(theme::faint()));
        f.render_widget(next, columns[1]);
    }
}
