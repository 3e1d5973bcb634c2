//! Modal dialog component for the planner.
//!
//! Hosts the item form (add and edit for every category), the delete
//! confirmation and the text dialogs (info, error, help, logs). Only one
//! dialog is visible at a time.

use crate::logger::Logger;
use crate::ui::components::dialogs::{
    render_delete_confirmation_dialog, render_error_dialog, render_help_dialog, render_info_dialog, render_item_form,
    render_logs_dialog, DialogScroll, FormState,
};
use crate::ui::core::{
    actions::{Action, DialogType},
    Component,
};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{layout::Rect, Frame};

pub struct DialogComponent {
    pub dialog_type: Option<DialogType>,
    /// Live state of the item form while an `ItemForm` dialog is shown
    pub form: Option<FormState>,
    pub scroll: DialogScroll,
    logger: Logger,
}

impl Default for DialogComponent {
    fn default() -> Self {
        Self::new(Logger::new())
    }
}

impl DialogComponent {
    pub fn new(logger: Logger) -> Self {
        Self {
            dialog_type: None,
            form: None,
            scroll: DialogScroll::default(),
            logger,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.dialog_type.is_some()
    }

    pub fn is_form_open(&self) -> bool {
        self.form.is_some()
    }

    pub fn set_form_busy(&mut self, busy: bool) {
        if let Some(form) = self.form.as_mut() {
            form.busy = busy;
            if busy {
                form.alert = None;
            }
        }
    }

    fn clear_dialog(&mut self) {
        self.dialog_type = None;
        self.form = None;
        self.scroll.reset();
    }

    fn handle_form_keys(&mut self, key: KeyEvent) -> Action {
        let Some(form) = self.form.as_mut() else {
            return Action::None;
        };
        match key.code {
            KeyCode::Esc => Action::HideDialog,
            // Submit is disabled while an attachment is encoding
            KeyCode::Enter if form.busy => Action::None,
            KeyCode::Enter => Action::SubmitForm(form.values.clone()),
            _ if form.busy => Action::None,
            KeyCode::Tab => {
                form.focus_next();
                Action::None
            }
            KeyCode::BackTab => {
                form.focus_previous();
                Action::None
            }
            KeyCode::Left => {
                form.cycle_choice(false);
                Action::None
            }
            KeyCode::Right => {
                form.cycle_choice(true);
                Action::None
            }
            KeyCode::Backspace => {
                form.backspace();
                form.alert = None;
                Action::None
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                form.insert_char(c);
                form.alert = None;
                Action::None
            }
            _ => Action::None,
        }
    }

    /// Scrolling keys shared by the text dialogs. Returns false for other keys.
    fn handle_scroll_keys(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.scroll.up(),
            KeyCode::Down | KeyCode::Char('j') => self.scroll.down(),
            KeyCode::PageUp => self.scroll.page_up(),
            KeyCode::PageDown => self.scroll.page_down(),
            KeyCode::Home => self.scroll.top(),
            KeyCode::End => self.scroll.bottom(),
            _ => return false,
        }
        true
    }
}

impl Component for DialogComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match self.dialog_type.clone() {
            None => Action::None,
            Some(DialogType::ItemForm { .. }) => self.handle_form_keys(key),
            Some(DialogType::DeleteConfirmation { category, id, .. }) => match key.code {
                KeyCode::Enter | KeyCode::Char('y') => Action::DeleteItem { category, id },
                KeyCode::Esc | KeyCode::Char('n') => Action::HideDialog,
                _ => Action::None,
            },
            Some(DialogType::Info(_)) | Some(DialogType::Error(_)) => {
                if self.handle_scroll_keys(key) {
                    Action::None
                } else {
                    // Any other key dismisses the dialog
                    Action::HideDialog
                }
            }
            Some(DialogType::Help) => match key.code {
                KeyCode::Esc | KeyCode::Char('?') => Action::HideDialog,
                _ => {
                    self.handle_scroll_keys(key);
                    Action::None
                }
            },
            Some(DialogType::Logs) => match key.code {
                KeyCode::Esc | KeyCode::Char('G') | KeyCode::Char('q') => Action::HideDialog,
                _ => {
                    self.handle_scroll_keys(key);
                    Action::None
                }
            },
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::ShowDialog(dialog_type) => {
                self.scroll.reset();
                self.form = match &dialog_type {
                    DialogType::ItemForm {
                        category,
                        editing,
                        values,
                        current_attachment,
                    } => Some(FormState::new(
                        *category,
                        editing.clone(),
                        values.clone(),
                        current_attachment.clone(),
                    )),
                    _ => None,
                };
                self.dialog_type = Some(dialog_type);
                Action::None
            }
            Action::HideDialog => {
                self.clear_dialog();
                Action::None
            }
            Action::FormAlert(message) => {
                if let Some(form) = self.form.as_mut() {
                    form.busy = false;
                    form.alert = Some(message);
                }
                Action::None
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let Some(dialog_type) = self.dialog_type.clone() else {
            return;
        };
        match dialog_type {
            DialogType::ItemForm { .. } => {
                if let Some(form) = &self.form {
                    render_item_form(f, rect, form);
                }
            }
            DialogType::DeleteConfirmation { title, .. } => render_delete_confirmation_dialog(f, rect, &title),
            DialogType::Info(message) => render_info_dialog(f, rect, &message, &mut self.scroll),
            DialogType::Error(message) => render_error_dialog(f, rect, &message, &mut self.scroll),
            DialogType::Help => render_help_dialog(f, rect, &mut self.scroll),
            DialogType::Logs => render_logs_dialog(f, rect, &self.logger, &mut self.scroll),
        }
    }
}
