//! Planner action handlers
//!
//! [`Planner`] owns the application state and the store it is persisted to.
//! Every mutating operation writes the whole state back before returning, so
//! the UI only has to re-render afterwards.

use crate::attachment::{self, AttachmentError, AttachmentResult};
use crate::config::Config;
use crate::constants::{DEFAULT_MAX_ATTACHMENT_BYTES, STORAGE_KEY};
use crate::entities::{AppState, Attachment, Category, Item, ItemDetails, ItemId, Status, View};
use crate::form::{FormError, FormValues, ItemDraft};
use crate::storage::{self, KeyValueStore, StorageError};
use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};

/// Errors returned by planner operations.
#[derive(Debug, thiserror::Error)]
pub enum PlannerError {
    #[error("No {category} item with id {id}")]
    MissingTarget { category: Category, id: ItemId },

    #[error("No form is open")]
    NoModal,

    #[error("An attachment is still being encoded")]
    Busy,

    #[error("{category} item {id} has no attachment")]
    NoAttachment { category: Category, id: ItemId },

    #[error(transparent)]
    Form(#[from] FormError),

    #[error(transparent)]
    Attachment(#[from] AttachmentError),

    #[error("Failed to save planner state: {0}")]
    Storage(#[from] StorageError),
}

pub type PlannerResult<T> = Result<T, PlannerError>;

/// Settings the planner needs from the configuration.
#[derive(Debug, Clone)]
pub struct PlannerSettings {
    pub storage_key: String,
    pub max_attachment_bytes: u64,
    pub initial_view: View,
    pub download_dir: Option<PathBuf>,
}

impl Default for PlannerSettings {
    fn default() -> Self {
        Self {
            storage_key: STORAGE_KEY.to_string(),
            max_attachment_bytes: DEFAULT_MAX_ATTACHMENT_BYTES,
            initial_view: View::Dashboard,
            download_dir: None,
        }
    }
}

impl From<&Config> for PlannerSettings {
    fn from(config: &Config) -> Self {
        Self {
            storage_key: config.storage.key.clone(),
            max_attachment_bytes: config.attachments.max_size_bytes,
            initial_view: config.ui.initial_view(),
            download_dir: config.attachments.download_dir.clone(),
        }
    }
}

/// The item form currently open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModalSession {
    pub category: Category,
    /// Incremented on every opening; encode results from older openings are stale
    pub generation: u64,
    /// An attachment encode is in flight
    pub busy: bool,
}

/// Work the UI must finish before a submit can be committed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodeRequest {
    pub generation: u64,
    pub path: PathBuf,
    pub limit: u64,
    pub values: FormValues,
}

/// Result of starting a submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// The item was saved and the form closed
    Committed(ItemId),
    /// A file has to be encoded first; the form stays open and busy
    Encoding(EncodeRequest),
}

/// Hands out millisecond-timestamp ids that never repeat within a session.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    last: i64,
}

impl IdGenerator {
    pub fn next(&mut self, now: DateTime<Utc>) -> ItemId {
        let millis = now.timestamp_millis().max(self.last + 1);
        self.last = millis;
        ItemId::from_millis(millis)
    }
}

pub struct Planner<S: KeyValueStore> {
    state: AppState,
    store: S,
    settings: PlannerSettings,
    ids: IdGenerator,
    modal: Option<ModalSession>,
    generation: u64,
}

impl<S: KeyValueStore> Planner<S> {
    /// Load saved state from `store`. Unreadable data starts an empty planner.
    pub fn load(store: S, settings: PlannerSettings) -> Self {
        let state = storage::load_state(&store, &settings.storage_key, settings.initial_view);
        Self {
            state,
            store,
            settings,
            ids: IdGenerator::default(),
            modal: None,
            generation: 0,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn settings(&self) -> &PlannerSettings {
        &self.settings
    }

    pub fn modal(&self) -> Option<&ModalSession> {
        self.modal.as_ref()
    }

    pub fn item(&self, category: Category, id: &ItemId) -> Option<&Item> {
        self.state.items.find(category, id)
    }

    /// Switch the main view. Not persisted.
    pub fn navigate(&mut self, view: View) {
        log::debug!("Planner: navigate to {}", view);
        self.state.active_view = view;
    }

    /// Open a blank form for `category`
    pub fn open_add(&mut self, category: Category) -> ModalSession {
        self.state.editing_item = None;
        self.open_modal(category)
    }

    /// Open the form pre-filled with an existing item
    pub fn open_edit(&mut self, category: Category, id: &ItemId) -> PlannerResult<ModalSession> {
        let item = self.state.items.find(category, id).cloned().ok_or_else(|| {
            log::warn!("Planner: cannot edit missing {} item {}", category, id);
            PlannerError::MissingTarget {
                category,
                id: id.clone(),
            }
        })?;
        self.state.editing_item = Some(item);
        Ok(self.open_modal(category))
    }

    pub fn close_modal(&mut self) {
        self.modal = None;
        self.state.editing_item = None;
    }

    fn open_modal(&mut self, category: Category) -> ModalSession {
        self.generation += 1;
        let session = ModalSession {
            category,
            generation: self.generation,
            busy: false,
        };
        self.modal = Some(session);
        session
    }

    /// Submit the open form. Without a file the item is committed at once;
    /// with a file the size is checked and an encode request is returned.
    pub fn begin_submit(&mut self, values: &FormValues) -> PlannerResult<Submission> {
        let session = self.modal.ok_or(PlannerError::NoModal)?;
        if session.busy {
            return Err(PlannerError::Busy);
        }
        ItemDraft::parse(session.category, values)?;

        match values.file_path() {
            Some(path) if session.category == Category::Books => {
                let size = std::fs::metadata(&path)
                    .map_err(|source| AttachmentError::Read {
                        path: path.clone(),
                        source,
                    })?
                    .len();
                attachment::check_size(size, self.settings.max_attachment_bytes)?;

                if let Some(modal) = self.modal.as_mut() {
                    modal.busy = true;
                }
                Ok(Submission::Encoding(EncodeRequest {
                    generation: session.generation,
                    path,
                    limit: self.settings.max_attachment_bytes,
                    values: values.clone(),
                }))
            }
            _ => self.submit(values, None).map(Submission::Committed),
        }
    }

    /// Apply the outcome of a background encode. Returns `Ok(None)` when the
    /// form it belongs to has since been closed or reopened.
    pub fn finish_submit(
        &mut self,
        generation: u64,
        values: &FormValues,
        encoded: AttachmentResult<Attachment>,
    ) -> PlannerResult<Option<ItemId>> {
        match self.modal.as_mut() {
            Some(modal) if modal.generation == generation => modal.busy = false,
            _ => {
                log::info!("Planner: discarding attachment for stale form #{}", generation);
                return Ok(None);
            }
        }
        let attachment = encoded?;
        self.submit(values, Some(attachment)).map(Some)
    }

    /// Commit the open form with an already encoded attachment.
    pub fn submit(&mut self, values: &FormValues, attachment: Option<Attachment>) -> PlannerResult<ItemId> {
        let session = self.modal.ok_or(PlannerError::NoModal)?;
        let draft = ItemDraft::parse(session.category, values)?;

        let id = match self.state.editing_item.as_ref().map(|item| item.id.clone()) {
            Some(id) => self.update_item(session.category, &id, draft, attachment)?,
            None => self.add_item(session.category, draft, attachment),
        };

        self.close_modal();
        self.persist()?;
        Ok(id)
    }

    fn add_item(&mut self, category: Category, draft: ItemDraft, attachment: Option<Attachment>) -> ItemId {
        let now = Utc::now();
        let mut id = self.ids.next(now);
        while self.state.items.contains(category, &id) {
            id = self.ids.next(now);
        }

        let mut details = draft.details;
        if let ItemDetails::Book(material) = &mut details {
            material.attachment = attachment;
        }

        log::info!("Planner: added {} item {} '{}'", category, id, draft.title);
        self.state.items.list_mut(category).push(Item {
            id: id.clone(),
            title: draft.title,
            created_at: now,
            details,
        });
        id
    }

    fn update_item(
        &mut self,
        category: Category,
        id: &ItemId,
        draft: ItemDraft,
        attachment: Option<Attachment>,
    ) -> PlannerResult<ItemId> {
        let item = self
            .state
            .items
            .find_mut(category, id)
            .ok_or_else(|| PlannerError::MissingTarget {
                category,
                id: id.clone(),
            })?;

        let mut details = draft.details;
        match (&mut details, &item.details) {
            (ItemDetails::Project(new), ItemDetails::Project(old))
            | (ItemDetails::Assignment(new), ItemDetails::Assignment(old)) => new.status = old.status,
            (ItemDetails::Book(new), ItemDetails::Book(old)) => {
                new.attachment = attachment.or_else(|| old.attachment.clone());
            }
            _ => {}
        }

        item.title = draft.title;
        item.details = details;
        log::info!("Planner: updated {} item {}", category, id);
        Ok(id.clone())
    }

    /// Remove an item once `confirm` agrees. Returns whether it was removed.
    pub fn delete_item(
        &mut self,
        category: Category,
        id: &ItemId,
        confirm: impl FnOnce(&Item) -> bool,
    ) -> PlannerResult<bool> {
        let Some(item) = self.state.items.find(category, id) else {
            return Err(PlannerError::MissingTarget {
                category,
                id: id.clone(),
            });
        };
        if !confirm(item) {
            return Ok(false);
        }

        self.state.items.list_mut(category).retain(|item| &item.id != id);
        log::info!("Planner: deleted {} item {}", category, id);
        self.persist()?;
        Ok(true)
    }

    /// Flip pending/done. Categories without a status and unknown ids are ignored.
    pub fn toggle_status(&mut self, category: Category, id: &ItemId) -> PlannerResult<Option<Status>> {
        let Some(item) = self.state.items.find_mut(category, id) else {
            log::debug!("Planner: toggle ignored, no {} item {}", category, id);
            return Ok(None);
        };
        if !item.toggle_status() {
            return Ok(None);
        }
        let status = item.status();
        log::info!("Planner: {} item {} is now {:?}", category, id, status);
        self.persist()?;
        Ok(status)
    }

    pub fn attachment(&self, category: Category, id: &ItemId) -> Option<&Attachment> {
        self.item(category, id).and_then(Item::attachment)
    }

    /// Write an item's attachment into `dir`, or the configured download directory
    pub fn save_attachment(&self, category: Category, id: &ItemId, dir: Option<&Path>) -> PlannerResult<PathBuf> {
        let attachment = self.attachment(category, id).ok_or_else(|| PlannerError::NoAttachment {
            category,
            id: id.clone(),
        })?;
        let dir = match dir {
            Some(dir) => dir.to_path_buf(),
            None => self
                .settings
                .download_dir
                .clone()
                .or_else(attachment::default_download_dir)
                .unwrap_or_else(|| PathBuf::from(".")),
        };
        Ok(attachment::save_to_dir(attachment, &dir)?)
    }

    /// Write the whole state back to the store
    pub fn persist(&mut self) -> PlannerResult<()> {
        storage::save_state(&mut self.store, &self.settings.storage_key, &self.state).map_err(|e| {
            log::error!("Planner: failed to save state: {}", e);
            PlannerError::Storage(e)
        })
    }
}
