use crate::config::DisplayConfig;
use crate::entities::{Category, Item};
use crate::ui::core::{actions::Action, Component};
use crate::ui::view;
use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{block::BorderType, Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

/// List of the items of one category with a movable selection.
pub struct ItemListComponent {
    pub category: Category,
    pub items: Vec<Item>,
    pub selected_index: usize,
    pub list_state: ListState,
    today: NaiveDate,
    display: DisplayConfig,
}

impl Default for ItemListComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemListComponent {
    pub fn new() -> Self {
        Self {
            category: Category::Projects,
            items: Vec::new(),
            selected_index: 0,
            list_state: ListState::default(),
            today: crate::utils::datetime::today(),
            display: DisplayConfig::default(),
        }
    }

    pub fn update_display_config(&mut self, display: DisplayConfig) {
        self.display = display;
    }

    pub fn update_data(&mut self, category: Category, items: Vec<Item>, today: NaiveDate) {
        if category != self.category {
            self.selected_index = 0;
        }
        self.category = category;
        self.items = items;
        self.today = today;
        self.update_list_state();
    }

    fn update_list_state(&mut self) {
        if self.items.is_empty() {
            self.selected_index = 0;
            self.list_state.select(None);
        } else {
            if self.selected_index >= self.items.len() {
                self.selected_index = self.items.len().saturating_sub(1);
            }
            self.list_state.select(Some(self.selected_index));
        }
    }

    pub fn get_selected_item(&self) -> Option<&Item> {
        self.items.get(self.selected_index)
    }

    fn with_selected(&self, build: impl FnOnce(&Item) -> Action) -> Action {
        self.get_selected_item().map(build).unwrap_or(Action::None)
    }

    /// Key hints for the selected row
    pub fn selected_hints(&self) -> Line<'static> {
        let mut spans = vec![
            Span::styled("a", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
            Span::styled(format!(" {}", self.category.add_label()), Style::default().fg(Color::Gray)),
        ];
        if let Some(item) = self.get_selected_item() {
            for (key, label) in view::item_actions(item) {
                spans.push(Span::styled(" • ", Style::default().fg(Color::DarkGray)));
                spans.push(Span::styled(key, Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)));
                spans.push(Span::styled(format!(" {}", label), Style::default().fg(Color::Gray)));
            }
        }
        Line::from(spans)
    }
}

impl Component for ItemListComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        let category = self.category;
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => Action::PreviousItem,
            KeyCode::Down | KeyCode::Char('j') => Action::NextItem,
            KeyCode::Char('a') => Action::OpenAdd(category),
            KeyCode::Char('e') => self.with_selected(|item| Action::OpenEdit {
                category,
                id: item.id.clone(),
            }),
            KeyCode::Char('d') => self.with_selected(|item| Action::ConfirmDelete {
                category,
                id: item.id.clone(),
            }),
            KeyCode::Char(' ') | KeyCode::Enter if category.has_status() => {
                self.with_selected(|item| Action::ToggleStatus {
                    category,
                    id: item.id.clone(),
                })
            }
            KeyCode::Char('o') => self.with_selected(|item| {
                if item.attachment().is_some() {
                    Action::SaveAttachment {
                        category,
                        id: item.id.clone(),
                    }
                } else {
                    Action::None
                }
            }),
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::NextItem => {
                if !self.items.is_empty() {
                    self.selected_index = (self.selected_index + 1) % self.items.len();
                    self.update_list_state();
                }
                Action::None
            }
            Action::PreviousItem => {
                if !self.items.is_empty() {
                    self.selected_index = if self.selected_index == 0 {
                        self.items.len() - 1
                    } else {
                        self.selected_index - 1
                    };
                    self.update_list_state();
                }
                Action::None
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(format!(" {} ", self.category.title()))
            .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .title_bottom(self.selected_hints())
            .border_style(Style::default().fg(Color::DarkGray));

        if self.items.is_empty() {
            let empty = Paragraph::new(view::empty_category_message(self.category))
                .style(Style::default().fg(Color::DarkGray))
                .block(block);
            f.render_widget(empty, rect);
            return;
        }

        let rows: Vec<ListItem> = self
            .items
            .iter()
            .map(|item| ListItem::new(view::item_line(item, self.today, &self.display)))
            .collect();

        let list = List::new(rows)
            .block(block)
            .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD));

        f.render_stateful_widget(list, rect, &mut self.list_state);
    }
}
