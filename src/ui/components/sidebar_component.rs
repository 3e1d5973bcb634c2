//! Sidebar navigation component for the academic planner.
//!
//! Lists the dashboard followed by every category and highlights the entry
//! matching the active view.

use crate::entities::{Category, View};
use crate::ui::core::{actions::Action, Component};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{block::BorderType, Block, Borders, List, ListItem, ListState},
    Frame,
};

/// Navigation sidebar component for switching between the dashboard and categories.
///
/// Features:
/// - `J`/`K` (or Shift+Down/Up) to move between views
/// - `1`..`6` to jump straight to a view
/// - Visual indicator for the active view
pub struct SidebarComponent {
    pub selection: View,
    /// Item counts per category, shown next to each entry
    counts: [usize; 5],
    list_state: ListState,
}

impl Default for SidebarComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl SidebarComponent {
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            selection: View::Dashboard,
            counts: [0; 5],
            list_state,
        }
    }

    pub fn update_counts(&mut self, counts: [usize; 5]) {
        self.counts = counts;
    }

    fn views() -> Vec<View> {
        View::all()
    }

    fn selection_index(&self) -> usize {
        Self::views().iter().position(|view| *view == self.selection).unwrap_or(0)
    }

    fn count_for(&self, category: Category) -> usize {
        Category::ALL
            .iter()
            .position(|c| *c == category)
            .map(|index| self.counts[index])
            .unwrap_or(0)
    }

    fn step(&self, forward: bool) -> View {
        let views = Self::views();
        let current = self.selection_index();
        let next = if forward {
            (current + 1) % views.len()
        } else {
            (current + views.len() - 1) % views.len()
        };
        views[next]
    }

    fn render_entry(&self, index: usize, view: View) -> ListItem<'static> {
        let is_active = view == self.selection;
        let marker = if is_active { "▶ " } else { "  " };
        let style = if is_active {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };

        let mut spans = vec![
            Span::styled(marker, style),
            Span::styled(format!("{} ", index + 1), Style::default().fg(Color::DarkGray)),
            Span::styled(view.label().to_string(), style),
        ];
        if let View::Category(category) = view {
            spans.push(Span::styled(
                format!(" ({})", self.count_for(category)),
                Style::default().fg(Color::DarkGray),
            ));
        }
        ListItem::new(Line::from(spans))
    }
}

impl Component for SidebarComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('J') => Action::Navigate(self.step(true)),
            KeyCode::Char('K') => Action::Navigate(self.step(false)),
            KeyCode::Down if key.modifiers.contains(KeyModifiers::SHIFT) => Action::Navigate(self.step(true)),
            KeyCode::Up if key.modifiers.contains(KeyModifiers::SHIFT) => Action::Navigate(self.step(false)),
            KeyCode::Char(c @ '1'..='6') => {
                let index = c as usize - '1' as usize;
                Self::views()
                    .get(index)
                    .map(|view| Action::Navigate(*view))
                    .unwrap_or(Action::None)
            }
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::Navigate(view) => {
                self.selection = view;
                self.list_state.select(Some(self.selection_index()));
                // Pass the action through to AppComponent for further processing
                Action::Navigate(view)
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let items: Vec<ListItem> = Self::views()
            .into_iter()
            .enumerate()
            .map(|(index, view)| self.render_entry(index, view))
            .collect();

        self.list_state.select(Some(self.selection_index()));

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .title("Academic Planner")
                    .title_style(Style::default().fg(Color::White))
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .style(Style::default().fg(Color::White));

        f.render_stateful_widget(list, rect, &mut self.list_state);
    }
}
