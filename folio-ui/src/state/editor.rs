//! Entry Editor
//!
//! Screen-local state shared by the Blog and Projects pages: the persisted
//! collection, the modal's form and whether the modal is creating or editing.

use folio::entries::{Entry, EntryForm};
use folio::store::{EntryCollection, StoreError};
use leptos::*;

use super::global::GlobalState;
use super::prompt;
use super::storage::BrowserStore;

/// What the open modal will do on save
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditMode {
    Create,
    Edit(String),
}

impl EditMode {
    pub fn is_edit(&self) -> bool {
        matches!(self, EditMode::Edit(_))
    }
}

/// Reactive CRUD state for one collection
pub struct EntryEditor<F: EntryForm> {
    pub collection: RwSignal<EntryCollection<F::Entry, BrowserStore>>,
    pub form: RwSignal<F>,
    pub mode: RwSignal<Option<EditMode>>,
    /// False when writes only live in memory
    pub persistent: bool,
}

impl<F: EntryForm> Clone for EntryEditor<F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F: EntryForm> Copy for EntryEditor<F> {}

impl<F: EntryForm> EntryEditor<F> {
    /// Rehydrate the collection stored under `key`
    pub fn new(key: &str) -> Self {
        let store = BrowserStore::open();
        let persistent = store.is_persistent();

        let collection = EntryCollection::load(store, key);
        if let Some(warning) = collection.load_warning() {
            web_sys::console::warn_1(&warning.into());
        }

        Self {
            collection: create_rw_signal(collection),
            form: create_rw_signal(F::default()),
            mode: create_rw_signal(None),
            persistent,
        }
    }

    /// Snapshot of the entries, newest first
    pub fn entries(&self) -> Vec<F::Entry> {
        self.collection.with(|c| c.entries().to_vec())
    }

    pub fn is_empty(&self) -> bool {
        self.collection.with(|c| c.is_empty())
    }

    pub fn is_open(&self) -> bool {
        self.mode.with(Option::is_some)
    }

    /// Open the modal with a blank form dated today
    pub fn open_create(&self) {
        self.form.set(F::blank(chrono::Utc::now().date_naive()));
        self.mode.set(Some(EditMode::Create));
    }

    /// Open the modal pre-filled from `entry`
    pub fn open_edit(&self, entry: &F::Entry) {
        self.form.set(F::from_entry(entry));
        self.mode.set(Some(EditMode::Edit(entry.id().to_string())));
    }

    /// Close the modal and discard the form
    pub fn close(&self) {
        self.mode.set(None);
        self.form.set(F::default());
    }

    /// Save the form. Blank required fields block with an alert and keep the
    /// modal open.
    pub fn save(&self, state: &GlobalState, noun: &str) {
        let Some(mode) = self.mode.get_untracked() else {
            return;
        };
        let form = self.form.get_untracked();

        let mut result = Ok(());
        self.collection.update(|collection| {
            result = match &mode {
                EditMode::Create => collection.create(&form).map(|_| ()),
                EditMode::Edit(id) => collection.update(id, &form).map(|_| ()),
            };
        });

        match result {
            Ok(()) => {
                self.close();
                let verb = if mode.is_edit() { "updated" } else { "created" };
                state.show_success(&format!("{} {}", noun, verb));
            }
            Err(StoreError::Validation(e)) => prompt::alert(&e.to_string()),
            Err(StoreError::NotFound(id)) => {
                self.close();
                state.show_error(&format!("{} {} no longer exists", noun, id));
            }
            Err(e) => {
                // The in-memory list already changed; only the write failed
                self.close();
                state.show_error(&format!("Could not save to local storage: {}", e));
            }
        }
    }

    /// Delete `id` after the user confirms `question`
    pub fn delete(&self, id: &str, question: &str, state: &GlobalState) {
        let mut result = Ok(None);
        self.collection.update(|collection| {
            result = collection.delete_confirmed(id, |_| prompt::confirm(question));
        });

        match result {
            Ok(Some(entry)) => state.show_success(&format!("Deleted \"{}\"", entry.title())),
            Ok(None) => {}
            Err(e) => state.show_error(&format!("Could not save to local storage: {}", e)),
        }
    }
}
