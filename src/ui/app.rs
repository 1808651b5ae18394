//! Application state: the current route, both screen states, and the side
//! effects (store commands, navigation) the reducers stay free of.

use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::person::Person;
use crate::ui::events::{StoreOp, StoreResponse};
use crate::ui::form::{FormIntent, FormReducer, FormScreenState};
use crate::ui::list::{ListIntent, ListReducer, ListScreenState};
use crate::ui::mvi::Reducer;

/// The two destinations navigation knows about.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Route {
    List,
    Form,
}

/// A request for the store worker.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreCommand {
    List { generation: u64 },
    Get { generation: u64, id: String },
    Create { generation: u64, person: Person },
    Update {
        generation: u64,
        id: String,
        person: Person,
    },
    Delete { generation: u64, id: String },
}

pub type StoreCommandSender = mpsc::Sender<StoreCommand>;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    route: Route,
    /// List screen state (MVI pattern).
    list: ListScreenState,
    /// Form screen state (MVI pattern).
    form: FormScreenState,
    /// Bumped on every navigation. Store responses carrying an older value
    /// belong to a screen that no longer exists and are dropped.
    generation: u64,
    store_tx: Option<StoreCommandSender>,
    /// True between issuing a save and hearing back, so a second submit
    /// cannot put two mutations in flight.
    save_pending: bool,
    last_send_error: Option<String>,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            should_quit: false,
            route: Route::List,
            list: ListScreenState::default(),
            form: FormScreenState::default(),
            generation: 0,
            store_tx: None,
            save_pending: false,
            last_send_error: None,
        }
    }

    pub fn set_store_sender(&mut self, sender: StoreCommandSender) {
        self.store_tx = Some(sender);
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn list(&self) -> &ListScreenState {
        &self.list
    }

    pub fn form(&self) -> &FormScreenState {
        &self.form
    }

    pub fn last_send_error(&self) -> Option<&str> {
        self.last_send_error.as_deref()
    }

    pub fn on_tick(&mut self) {}

    // ========================================================================
    // Navigation
    // ========================================================================

    /// Enter the list route with a fresh screen and fetch the snapshot.
    pub fn open_list(&mut self) {
        self.route = Route::List;
        self.generation += 1;
        self.save_pending = false;
        self.list = ListScreenState::default();
        debug!(generation = self.generation, "entering list screen");
        self.refresh_list();
    }

    /// Enter the form route. With an id the screen starts loading that
    /// record; without one it starts as an empty create session.
    pub fn open_form(&mut self, id: Option<String>) {
        self.route = Route::Form;
        self.generation += 1;
        self.save_pending = false;
        debug!(generation = self.generation, edit = id.is_some(), "entering form screen");
        match id {
            None => self.dispatch_form(FormIntent::OpenCreate),
            Some(id) => {
                self.dispatch_form(FormIntent::OpenEdit { id: id.clone() });
                self.send_store(StoreCommand::Get {
                    generation: self.generation,
                    id,
                });
            }
        }
    }

    /// Open the form on the selected record. Records without an id are not
    /// editable; nothing happens for them.
    pub fn edit_selected(&mut self) {
        let Some(id) = self.list.selected_person().and_then(|p| p.id.clone()) else {
            return;
        };
        self.open_form(Some(id));
    }

    // ========================================================================
    // List screen actions
    // ========================================================================

    /// Re-fetch the whole snapshot from the store.
    pub fn refresh_list(&mut self) {
        self.send_store(StoreCommand::List {
            generation: self.generation,
        });
    }

    /// Ask to delete the selected record. The reducer refuses when the
    /// record was never persisted or a delete is already in flight.
    pub fn request_delete(&mut self) {
        self.dispatch_list(ListIntent::PromptDelete);
    }

    /// Affirmative answer to the confirmation prompt: issue the delete.
    pub fn confirm_delete(&mut self) {
        let Some(prompt) = self.list.prompt.clone() else {
            return;
        };
        self.send_store(StoreCommand::Delete {
            generation: self.generation,
            id: prompt.id,
        });
        self.dispatch_list(ListIntent::DeleteIssued);
    }

    pub fn cancel_delete(&mut self) {
        self.dispatch_list(ListIntent::CancelPrompt);
    }

    // ========================================================================
    // Form screen actions
    // ========================================================================

    /// Submit the working copy: update in an edit session, create
    /// otherwise. Refused until the required fields are present, and while
    /// an earlier save is still pending.
    pub fn submit_form(&mut self) {
        if self.save_pending || !self.form.can_submit() {
            return;
        }
        match &self.form {
            FormScreenState::Ready { draft, .. } => {
                let Some(id) = draft.id.clone() else {
                    return;
                };
                let command = StoreCommand::Update {
                    generation: self.generation,
                    id,
                    person: draft.clone(),
                };
                if self.send_store(command) {
                    self.save_pending = true;
                }
            }
            FormScreenState::Create { draft, .. } => {
                let command = StoreCommand::Create {
                    generation: self.generation,
                    person: draft.clone(),
                };
                if self.send_store(command) {
                    self.save_pending = true;
                }
            }
            FormScreenState::Loading { .. } | FormScreenState::LoadFailed { .. } => {}
        }
    }

    /// Leave the form without saving. Never touches the store; the working
    /// copy is simply discarded.
    pub fn cancel_form(&mut self) {
        self.open_list();
    }

    // ========================================================================
    // Store responses
    // ========================================================================

    pub fn on_store_event(&mut self, generation: u64, response: StoreResponse) {
        if generation != self.generation {
            debug!(generation, current = self.generation, "dropping stale store response");
            return;
        }

        match response {
            StoreResponse::Listed { people } => {
                self.dispatch_list(ListIntent::Loaded { people });
            }
            StoreResponse::Fetched { person } => {
                self.dispatch_form(FormIntent::Loaded { person });
            }
            StoreResponse::Created { person } => {
                debug!(id = ?person.id, "person created");
                self.save_pending = false;
                self.open_list();
            }
            StoreResponse::Updated => {
                self.save_pending = false;
                self.open_list();
            }
            StoreResponse::Deleted => {
                // The authoritative post-delete snapshot comes from the
                // store, not from splicing the old one.
                self.refresh_list();
            }
            StoreResponse::Failed { op, message } => {
                warn!(?op, %message, "store operation failed");
                match op {
                    StoreOp::List => self.dispatch_list(ListIntent::LoadFailed { message }),
                    StoreOp::Get => self.dispatch_form(FormIntent::LoadFailed { message }),
                    StoreOp::Create | StoreOp::Update => {
                        self.save_pending = false;
                        self.dispatch_form(FormIntent::SaveFailed { message });
                    }
                    StoreOp::Delete => self.dispatch_list(ListIntent::DeleteFailed { message }),
                }
            }
        }
    }

    // ========================================================================
    // MVI dispatch
    // ========================================================================

    pub fn dispatch_list(&mut self, intent: ListIntent) {
        dispatch_mvi!(self, list, ListReducer, intent);
    }

    pub fn dispatch_form(&mut self, intent: FormIntent) {
        dispatch_mvi!(self, form, FormReducer, intent);
    }

    fn send_store(&mut self, command: StoreCommand) -> bool {
        let Some(sender) = &self.store_tx else {
            return false;
        };

        match sender.try_send(command) {
            Ok(()) => {
                self.last_send_error = None;
                true
            }
            Err(err) => {
                self.last_send_error = Some(format!("Store request failed: {}", err));
                false
            }
        }
    }
}
