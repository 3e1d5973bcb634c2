use crate::config::Config;
use crate::constants::{
    ERROR_ATTACHMENT_READ_FAILED, ERROR_ATTACHMENT_SAVE_FAILED, ERROR_NO_ATTACHMENT, ERROR_SAVE_FAILED,
    SUCCESS_ATTACHMENT_SAVED, SUCCESS_ITEM_ADDED, SUCCESS_ITEM_DELETED, SUCCESS_ITEM_UPDATED, SUCCESS_STATUS_TOGGLED,
};
use crate::entities::{Category, Item, ItemId, View};
use crate::form::FormValues;
use crate::logger::Logger;
use crate::planner::{ModalSession, Planner, PlannerError, PlannerSettings, Submission};
use crate::storage::KeyValueStore;
use crate::ui::components::{DashboardComponent, DialogComponent, ItemListComponent, SidebarComponent};
use crate::ui::core::{
    actions::{Action, DialogType},
    event_handler::EventType,
    task_manager::TaskManager,
    Component,
};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};
use tokio::sync::mpsc;

/// Application root: owns the planner and routes actions between components.
pub struct AppComponent<S: KeyValueStore> {
    // Component composition
    sidebar: SidebarComponent,
    dashboard: DashboardComponent,
    item_list: ItemListComponent,
    dialog: DialogComponent,

    planner: Planner<S>,
    config: Config,

    // Services
    task_manager: TaskManager,
    background_action_rx: mpsc::UnboundedReceiver<Action>,
    logger: Logger,

    /// Last outcome shown in the status bar
    notice: Option<String>,
    should_quit: bool,
}

impl<S: KeyValueStore> AppComponent<S> {
    pub fn new(store: S, config: Config, logger: Logger) -> Self {
        let planner = Planner::load(store, PlannerSettings::from(&config));
        let (task_manager, background_action_rx) = TaskManager::new();

        let mut dashboard = DashboardComponent::new();
        dashboard.update_display_config(config.display.clone());
        let mut item_list = ItemListComponent::new();
        item_list.update_display_config(config.display.clone());

        logger.log(format!(
            "AppComponent: loaded {} items, starting on {}",
            planner.state().items.len(),
            planner.state().active_view
        ));

        let mut app = Self {
            sidebar: SidebarComponent::new(),
            dashboard,
            item_list,
            dialog: DialogComponent::new(logger.clone()),
            planner,
            config,
            task_manager,
            background_action_rx,
            logger,
            notice: None,
            should_quit: false,
        };
        app.sync_component_data();
        app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn planner(&self) -> &Planner<S> {
        &self.planner
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn dialog(&self) -> &DialogComponent {
        &self.dialog
    }

    /// Push the planner state into every component
    fn sync_component_data(&mut self) {
        let state = self.planner.state();
        let today = crate::utils::datetime::today();

        self.sidebar.selection = state.active_view;
        let mut counts = [0; 5];
        for (count, category) in counts.iter_mut().zip(Category::ALL) {
            *count = state.items.list(category).len();
        }
        self.sidebar.update_counts(counts);

        match state.active_view {
            View::Dashboard => self.dashboard.update_data(state.items.clone(), today),
            View::Category(category) => {
                self.item_list
                    .update_data(category, state.items.list(category).to_vec(), today)
            }
        }
    }

    /// Handle global keyboard shortcuts that aren't component-specific
    fn handle_global_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') => {
                self.logger.log("Global key: 'q' - quitting application".to_string());
                Action::Quit
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.logger.log("Global key: Ctrl+C - quitting application".to_string());
                Action::Quit
            }
            KeyCode::Char('?') => Action::ShowDialog(DialogType::Help),
            KeyCode::Char('G') => Action::ShowDialog(DialogType::Logs),
            KeyCode::Esc => {
                if self.dialog.is_visible() {
                    Action::HideDialog
                } else {
                    Action::Quit
                }
            }
            _ => Action::None,
        }
    }

    /// Handle app-level actions that require planner logic
    pub fn handle_app_action(&mut self, action: Action) -> Action {
        match action {
            Action::Quit => {
                self.should_quit = true;
                Action::None
            }
            Action::Navigate(view) => {
                self.planner.navigate(view);
                Action::None
            }
            Action::OpenAdd(category) => {
                let session = self.planner.open_add(category);
                Self::show_form(session, None, FormValues::blank(category), None)
            }
            Action::OpenEdit { category, id } => match self.planner.open_edit(category, &id) {
                Ok(session) => {
                    let item = self.planner.item(category, &id).cloned();
                    let values = item.as_ref().map(FormValues::from_item).unwrap_or_else(|| FormValues::blank(category));
                    let current = item.as_ref().and_then(Item::attachment).map(|a| a.file_name.clone());
                    Self::show_form(session, Some(id), values, current)
                }
                Err(_) => Action::None,
            },
            Action::SubmitForm(values) => self.submit_form(values),
            Action::AttachmentEncoded {
                generation,
                values,
                result,
            } => {
                let editing = self.planner.state().editing_item.is_some();
                if let Err(e) = &result {
                    self.logger.log(format!("{}: {}", ERROR_ATTACHMENT_READ_FAILED, e));
                }
                match self.planner.finish_submit(generation, &values, result) {
                    Ok(Some(id)) => self.committed(&id, editing),
                    Ok(None) => Action::None,
                    Err(e) => self.submit_failed(e),
                }
            }
            Action::ConfirmDelete { category, id } => match self.planner.item(category, &id) {
                Some(item) => Action::ShowDialog(DialogType::DeleteConfirmation {
                    category,
                    id,
                    title: item.title.clone(),
                }),
                None => Action::None,
            },
            Action::DeleteItem { category, id } => {
                self.dialog.update(Action::HideDialog);
                match self.planner.delete_item(category, &id, |_| true) {
                    Ok(_) => self.set_notice(SUCCESS_ITEM_DELETED.to_string()),
                    Err(e) => self.report(e),
                }
            }
            Action::ToggleStatus { category, id } => match self.planner.toggle_status(category, &id) {
                Ok(Some(_)) => self.set_notice(SUCCESS_STATUS_TOGGLED.to_string()),
                Ok(None) => Action::None,
                Err(e) => self.report(e),
            },
            Action::SaveAttachment { category, id } => match self.planner.save_attachment(category, &id, None) {
                Ok(path) => {
                    let message = format!("{} {}", SUCCESS_ATTACHMENT_SAVED, path.display());
                    self.logger.log(message.clone());
                    self.notice = Some(message.clone());
                    Action::ShowDialog(DialogType::Info(message))
                }
                Err(PlannerError::NoAttachment { .. }) => {
                    Action::ShowDialog(DialogType::Info(ERROR_NO_ATTACHMENT.to_string()))
                }
                Err(e) => {
                    let message = format!("{}: {}", ERROR_ATTACHMENT_SAVE_FAILED, e);
                    self.logger.log(message.clone());
                    Action::ShowDialog(DialogType::Error(message))
                }
            },
            other => other,
        }
    }

    fn show_form(
        session: ModalSession,
        editing: Option<ItemId>,
        values: FormValues,
        current_attachment: Option<String>,
    ) -> Action {
        Action::ShowDialog(DialogType::ItemForm {
            category: session.category,
            editing,
            values,
            current_attachment,
        })
    }

    fn submit_form(&mut self, values: FormValues) -> Action {
        let editing = self.planner.state().editing_item.is_some();
        match self.planner.begin_submit(&values) {
            Ok(Submission::Committed(id)) => self.committed(&id, editing),
            Ok(Submission::Encoding(request)) => {
                self.logger.log(format!(
                    "AppComponent: encoding {} for form #{}",
                    request.path.display(),
                    request.generation
                ));
                self.dialog.set_form_busy(true);
                self.task_manager.spawn_attachment_encode(request);
                Action::None
            }
            Err(e) => self.submit_failed(e),
        }
    }

    fn committed(&mut self, id: &ItemId, editing: bool) -> Action {
        self.dialog.update(Action::HideDialog);
        let notice = if editing { SUCCESS_ITEM_UPDATED } else { SUCCESS_ITEM_ADDED };
        self.logger.log(format!("{} ({})", notice, id));
        self.set_notice(notice.to_string())
    }

    /// Form, attachment and busy errors stay on the form; storage errors get a dialog
    fn submit_failed(&mut self, error: PlannerError) -> Action {
        match error {
            PlannerError::Storage(_) => {
                // The item is already in memory and the form closed
                self.planner.close_modal();
                self.dialog.update(Action::HideDialog);
                self.report(error)
            }
            PlannerError::Busy => Action::None,
            other => {
                self.logger.log(format!("AppComponent: submit rejected: {}", other));
                Action::FormAlert(other.to_string())
            }
        }
    }

    fn report(&mut self, error: PlannerError) -> Action {
        match error {
            PlannerError::MissingTarget { .. } => {
                self.logger.log(format!("AppComponent: ignored: {}", error));
                Action::None
            }
            PlannerError::Storage(e) => {
                let message = format!("{}: {}", ERROR_SAVE_FAILED, e);
                self.logger.log(message.clone());
                self.notice = Some(ERROR_SAVE_FAILED.to_string());
                Action::ShowDialog(DialogType::Error(message))
            }
            other => Action::ShowDialog(DialogType::Error(other.to_string())),
        }
    }

    fn set_notice(&mut self, notice: String) -> Action {
        self.notice = Some(notice);
        Action::None
    }

    /// Process background actions from task manager
    pub fn process_background_actions(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();

        while let Ok(action) = self.background_action_rx.try_recv() {
            self.logger.log(format!("Background: Received action {:?}", DebugAction(&action)));
            actions.push(action);
        }

        let completed_tasks = self.task_manager.cleanup_finished_tasks();
        for (id, description) in &completed_tasks {
            self.logger.log(format!("Background: Task #{} finished: {}", id, description));
        }
        if !completed_tasks.is_empty() {
            self.logger.log(format!(
                "Background: {} tasks still running",
                self.task_manager.task_count()
            ));
        }

        actions
    }

    /// Run one action through the component hierarchy, then the app
    pub fn dispatch(&mut self, action: Action) {
        let mut action = action;
        // Follow-up actions (dialogs, alerts) go round once more
        for _ in 0..4 {
            if matches!(action, Action::None) {
                break;
            }
            let routed = self.update(action);
            action = self.handle_app_action(routed);
        }
        self.sync_component_data();
    }

    /// Process an event through the component hierarchy
    pub fn handle_event(&mut self, event_type: EventType) {
        let action = match event_type {
            EventType::Key(key) => self.route_key(key),
            EventType::Resize(_, _) | EventType::Tick | EventType::Other => Action::None,
        };
        self.dispatch(action);
    }

    fn route_key(&mut self, key: KeyEvent) -> Action {
        // Dialog has priority when visible
        if self.dialog.is_visible() {
            return self.dialog.handle_key_events(key);
        }

        let sidebar_action = self.sidebar.handle_key_events(key);
        if !matches!(sidebar_action, Action::None) {
            return sidebar_action;
        }

        let main_action = match self.planner.state().active_view {
            View::Dashboard => self.dashboard.handle_key_events(key),
            View::Category(_) => self.item_list.handle_key_events(key),
        };
        if !matches!(main_action, Action::None) {
            return main_action;
        }

        self.handle_global_key(key)
    }

    fn status_line(&self) -> Paragraph<'static> {
        let (text, color) = match &self.notice {
            Some(notice) if notice.starts_with('❌') => (notice.clone(), Color::Red),
            Some(notice) => (notice.clone(), Color::Green),
            None => (
                "J/K: switch view • j/k: select • a: add • ?: help • q: quit".to_string(),
                Color::Gray,
            ),
        };
        Paragraph::new(text)
            .alignment(Alignment::Center)
            .style(Style::default().fg(color))
    }
}

/// Keeps base64 payloads out of the log buffer
struct DebugAction<'a>(&'a Action);

impl std::fmt::Debug for DebugAction<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Action::AttachmentEncoded { generation, result, .. } => write!(
                f,
                "AttachmentEncoded {{ generation: {}, ok: {} }}",
                generation,
                result.is_ok()
            ),
            other => write!(f, "{:?}", other),
        }
    }
}

impl<S: KeyValueStore> Component for AppComponent<S> {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        self.route_key(key)
    }

    fn update(&mut self, action: Action) -> Action {
        // Closing the form invalidates any encode still in flight
        if matches!(action, Action::HideDialog) {
            self.planner.close_modal();
        }
        let action = self.dialog.update(action);
        let action = self.sidebar.update(action);
        self.item_list.update(action)
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let [body, status] = LayoutManager::main_layout(rect);
        let [sidebar_area, main_area] = LayoutManager::body_layout(body, self.config.ui.sidebar_width);

        self.sidebar.render(f, sidebar_area);
        match self.planner.state().active_view {
            View::Dashboard => self.dashboard.render(f, main_area),
            View::Category(_) => self.item_list.render(f, main_area),
        }
        f.render_widget(self.status_line(), status);

        // Dialog on top
        if self.dialog.is_visible() {
            self.dialog.render(f, rect);
        }
    }
}
