use super::common::{
    create_dialog_block, create_input_paragraph, create_instructions_paragraph, create_selection_paragraph, shortcuts,
};
use crate::constants::ENCODING_IN_PROGRESS;
use crate::entities::{Category, ItemId};
use crate::form::{fields_for, modal_title, submit_label, FieldKind, FormValues};
use crate::ui::layout::LayoutManager;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Wrap},
    Frame,
};

/// Editing state of the open item modal.
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    pub category: Category,
    pub editing: Option<ItemId>,
    pub values: FormValues,
    pub focus: usize,
    pub current_attachment: Option<String>,
    pub busy: bool,
    /// Problem reported on the last submit, shown above the buttons
    pub alert: Option<String>,
}

impl FormState {
    pub fn new(
        category: Category,
        editing: Option<ItemId>,
        values: FormValues,
        current_attachment: Option<String>,
    ) -> Self {
        Self {
            category,
            editing,
            values,
            focus: 0,
            current_attachment,
            busy: false,
            alert: None,
        }
    }

    pub fn fields(&self) -> &'static [FieldKind] {
        fields_for(self.category)
    }

    pub fn focused_field(&self) -> FieldKind {
        self.fields().get(self.focus).copied().unwrap_or(FieldKind::Title)
    }

    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % self.fields().len();
    }

    pub fn focus_previous(&mut self) {
        let len = self.fields().len();
        self.focus = (self.focus + len - 1) % len;
    }

    pub fn insert_char(&mut self, c: char) {
        let field = self.focused_field();
        if !field.is_choice() {
            self.values.value_mut(field).push(c);
        }
    }

    pub fn backspace(&mut self) {
        let field = self.focused_field();
        if !field.is_choice() {
            self.values.value_mut(field).pop();
        }
    }

    /// Left/Right on a choice field
    pub fn cycle_choice(&mut self, forward: bool) {
        if self.focused_field() == FieldKind::Day {
            self.values.cycle_day(forward);
        }
    }

    fn shows_attachment_readout(&self) -> bool {
        self.category == Category::Books && self.editing.is_some()
    }
}

pub fn render_item_form(f: &mut Frame, area: Rect, form: &FormState) {
    let fields = form.fields();
    let readout = u16::from(form.shows_attachment_readout());
    // borders + fields + readout + alert + button + instructions
    let height = 2 + fields.len() as u16 * 3 + readout + 2 + 1 + 1;
    let dialog_area = LayoutManager::centered_rect_lines(60, height, area);
    f.render_widget(Clear, dialog_area);

    let editing = form.editing.is_some();
    let block = create_dialog_block(format!(" {} ", modal_title(form.category, editing)), Color::Cyan);
    let inner = block.inner(dialog_area);
    f.render_widget(block, dialog_area);

    let mut constraints: Vec<Constraint> = fields.iter().map(|_| Constraint::Length(3)).collect();
    constraints.push(Constraint::Length(readout));
    constraints.push(Constraint::Length(2));
    constraints.push(Constraint::Length(1));
    constraints.push(Constraint::Length(1));
    let chunks = Layout::vertical(constraints).split(inner);

    for (index, field) in fields.iter().enumerate() {
        let focused = index == form.focus && !form.busy;
        let value = form.values.get(*field);
        let widget = if field.is_choice() {
            create_selection_paragraph(value, field.label(), focused)
        } else {
            create_input_paragraph(value, field.label(), focused, field.hint())
        };
        f.render_widget(widget, chunks[index]);
    }

    let base = fields.len();
    if form.shows_attachment_readout() {
        let text = match &form.current_attachment {
            Some(name) => format!("Current file: {}", name),
            None => "No file attached".to_string(),
        };
        f.render_widget(
            Paragraph::new(text).style(Style::default().fg(Color::DarkGray)),
            chunks[base],
        );
    }

    let status = if form.busy {
        Some(Line::from(Span::styled(
            ENCODING_IN_PROGRESS,
            Style::default().fg(Color::Yellow),
        )))
    } else {
        form.alert.as_ref().map(|alert| {
            Line::from(Span::styled(
                format!("⚠ {}", alert),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ))
        })
    };
    if let Some(line) = status {
        f.render_widget(Paragraph::new(line).wrap(Wrap { trim: true }), chunks[base + 1]);
    }

    let button_style = if form.busy {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::Black).bg(Color::Green).add_modifier(Modifier::BOLD)
    };
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            format!("  {}  ", submit_label(editing)),
            button_style,
        )))
        .alignment(Alignment::Center),
        chunks[base + 2],
    );

    let mut instructions = vec![shortcuts::TAB_NEXT, shortcuts::SEPARATOR];
    if fields.contains(&FieldKind::Day) {
        instructions.push(shortcuts::ARROWS_DAY);
        instructions.push(shortcuts::SEPARATOR);
    }
    instructions.extend([shortcuts::ENTER_SUBMIT, shortcuts::SEPARATOR, shortcuts::ESC_CANCEL]);
    f.render_widget(create_instructions_paragraph(&instructions), chunks[base + 3]);
}
