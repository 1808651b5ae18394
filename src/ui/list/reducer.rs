use crate::ui::list::intent::ListIntent;
use crate::ui::list::state::{DeletePrompt, ListScreenState};
use crate::ui::mvi::Reducer;

pub struct ListReducer;

impl Reducer for ListReducer {
    type State = ListScreenState;
    type Intent = ListIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ListIntent::Loaded { people } => {
                let selected = if people.is_empty() {
                    0
                } else {
                    state.selected.min(people.len() - 1)
                };
                ListScreenState {
                    snapshot: people,
                    selected,
                    prompt: None,
                    busy: false,
                    status: None,
                }
            }
            ListIntent::LoadFailed { message } => ListScreenState {
                busy: false,
                status: Some(message),
                ..state
            },
            ListIntent::MoveUp => {
                if state.snapshot.is_empty() {
                    return state;
                }
                let selected = if state.selected == 0 {
                    state.snapshot.len() - 1
                } else {
                    state.selected - 1
                };
                ListScreenState { selected, ..state }
            }
            ListIntent::MoveDown => {
                if state.snapshot.is_empty() {
                    return state;
                }
                let selected = if state.selected + 1 >= state.snapshot.len() {
                    0
                } else {
                    state.selected + 1
                };
                ListScreenState { selected, ..state }
            }
            ListIntent::PromptDelete => {
                if state.busy || state.is_prompting() {
                    return state;
                }
                // A record without an id was never persisted; nothing to delete.
                let Some(person) = state.selected_person() else {
                    return state;
                };
                let Some(id) = person.id.clone() else {
                    return state;
                };
                let prompt = DeletePrompt {
                    id,
                    name: person.name.clone(),
                };
                ListScreenState {
                    prompt: Some(prompt),
                    ..state
                }
            }
            ListIntent::CancelPrompt => ListScreenState {
                prompt: None,
                ..state
            },
            ListIntent::DeleteIssued => ListScreenState {
                prompt: None,
                busy: true,
                ..state
            },
            ListIntent::DeleteFailed { message } => ListScreenState {
                busy: false,
                status: Some(message),
                ..state
            },
        }
    }
}
