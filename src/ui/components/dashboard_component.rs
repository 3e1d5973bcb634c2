use crate::config::DisplayConfig;
use crate::constants::{
    EMPTY_PENDING_ASSIGNMENTS, EMPTY_PENDING_PROJECTS, HEADER_DASHBOARD, HEADER_PENDING_ASSIGNMENTS,
    HEADER_PENDING_PROJECTS, HEADER_QUICK_ACTIONS, HEADER_UPCOMING,
};
use crate::entities::Collections;
use crate::ui::core::{actions::Action, Component};
use crate::ui::view::{self, DashboardSummary, QUICK_ACTIONS};
use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{block::BorderType, Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Summary cards: upcoming deadlines, pending work and quick-add shortcuts.
pub struct DashboardComponent {
    items: Collections,
    today: NaiveDate,
    display: DisplayConfig,
}

impl Default for DashboardComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardComponent {
    pub fn new() -> Self {
        Self {
            items: Collections::default(),
            today: crate::utils::datetime::today(),
            display: DisplayConfig::default(),
        }
    }

    pub fn update_display_config(&mut self, display: DisplayConfig) {
        self.display = display;
    }

    pub fn update_data(&mut self, items: Collections, today: NaiveDate) {
        self.items = items;
        self.today = today;
    }

    fn card<'a>(title: &'a str, lines: Vec<Line<'a>>) -> Paragraph<'a> {
        Paragraph::new(lines).wrap(Wrap { trim: false }).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(format!(" {} ", title))
                .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
                .border_style(Style::default().fg(Color::DarkGray)),
        )
    }
}

impl Component for DashboardComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            // Ctrl/Alt chords belong to the global handler (Ctrl+C quits)
            KeyCode::Char(c) if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => QUICK_ACTIONS
                .iter()
                .find(|(shortcut, _)| *shortcut == c)
                .map(|(_, category)| Action::OpenAdd(*category))
                .unwrap_or(Action::None),
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let summary = DashboardSummary::build(&self.items, self.today);

        let outer = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(format!(" {} ", HEADER_DASHBOARD))
            .title_style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = outer.inner(rect);
        f.render_widget(outer, rect);

        let rows = Layout::vertical([Constraint::Min(4), Constraint::Min(4), Constraint::Length(3)]).split(inner);
        let pending_cols = Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).split(rows[1]);

        f.render_widget(
            Self::card(HEADER_UPCOMING, view::upcoming_lines(&summary, self.today, &self.display)),
            rows[0],
        );
        f.render_widget(
            Self::card(
                HEADER_PENDING_PROJECTS,
                view::pending_lines(&summary.pending_projects, EMPTY_PENDING_PROJECTS, &self.display),
            ),
            pending_cols[0],
        );
        f.render_widget(
            Self::card(
                HEADER_PENDING_ASSIGNMENTS,
                view::pending_lines(&summary.pending_assignments, EMPTY_PENDING_ASSIGNMENTS, &self.display),
            ),
            pending_cols[1],
        );
        f.render_widget(
            Self::card(HEADER_QUICK_ACTIONS, vec![view::quick_action_line()]).alignment(Alignment::Center),
            rows[2],
        );
    }
}
