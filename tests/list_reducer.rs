mod common;

use common::{person, unsaved_person};
use roster::ui::list::{ListIntent, ListReducer, ListScreenState};
use roster::ui::mvi::Reducer;

fn loaded(people: Vec<roster::person::Person>) -> ListScreenState {
    ListReducer::reduce(ListScreenState::default(), ListIntent::Loaded { people })
}

#[test]
fn loaded_replaces_the_snapshot_wholesale() {
    let a = person("1", "Ann", 30, "female", "555");
    let b = person("2", "Bo", 40, "male", "666");
    let state = loaded(vec![a.clone(), b.clone()]);
    assert_eq!(state.snapshot, vec![a, b]);
}

#[test]
fn loaded_preserves_store_order() {
    let b = person("2", "Bo", 40, "male", "666");
    let a = person("1", "Ann", 30, "female", "555");
    let state = loaded(vec![b.clone(), a.clone()]);
    assert_eq!(state.snapshot, vec![b, a]);
}

#[test]
fn loaded_clears_busy_and_status() {
    let state = ListScreenState {
        busy: true,
        status: Some("old failure".to_string()),
        ..ListScreenState::default()
    };
    let state = ListReducer::reduce(
        state,
        ListIntent::Loaded {
            people: vec![person("1", "Ann", 30, "female", "555")],
        },
    );
    assert!(!state.busy);
    assert!(state.status.is_none());
}

#[test]
fn loaded_clamps_the_selection_when_the_snapshot_shrinks() {
    let mut state = loaded(vec![
        person("1", "Ann", 30, "female", "555"),
        person("2", "Bo", 40, "male", "666"),
        person("3", "Cy", 50, "other", "777"),
    ]);
    state.selected = 2;
    let state = ListReducer::reduce(
        state,
        ListIntent::Loaded {
            people: vec![person("1", "Ann", 30, "female", "555")],
        },
    );
    assert_eq!(state.selected, 0);
}

#[test]
fn load_failure_keeps_the_prior_snapshot() {
    let prior = loaded(vec![person("1", "Ann", 30, "female", "555")]);
    let state = ListReducer::reduce(
        prior.clone(),
        ListIntent::LoadFailed {
            message: "boom".to_string(),
        },
    );
    assert_eq!(state.snapshot, prior.snapshot);
    assert_eq!(state.status.as_deref(), Some("boom"));
}

#[test]
fn load_failure_on_first_activation_leaves_snapshot_empty() {
    let state = ListReducer::reduce(
        ListScreenState::default(),
        ListIntent::LoadFailed {
            message: "boom".to_string(),
        },
    );
    assert!(state.snapshot.is_empty());
}

// -- selection movement -------------------------------------------------------

#[test]
fn move_down_wraps_around() {
    let state = loaded(vec![
        person("1", "Ann", 30, "female", "555"),
        person("2", "Bo", 40, "male", "666"),
    ]);
    let state = ListReducer::reduce(state, ListIntent::MoveDown);
    assert_eq!(state.selected, 1);
    let state = ListReducer::reduce(state, ListIntent::MoveDown);
    assert_eq!(state.selected, 0);
}

#[test]
fn move_up_wraps_around() {
    let state = loaded(vec![
        person("1", "Ann", 30, "female", "555"),
        person("2", "Bo", 40, "male", "666"),
    ]);
    let state = ListReducer::reduce(state, ListIntent::MoveUp);
    assert_eq!(state.selected, 1);
}

#[test]
fn movement_on_an_empty_snapshot_is_a_noop() {
    let state = ListReducer::reduce(ListScreenState::default(), ListIntent::MoveDown);
    assert_eq!(state.selected, 0);
}

// -- delete confirmation ------------------------------------------------------

#[test]
fn prompt_delete_opens_a_prompt_for_the_selected_record() {
    let state = loaded(vec![person("1", "Ann", 30, "female", "555")]);
    let state = ListReducer::reduce(state, ListIntent::PromptDelete);
    let prompt = state.prompt.expect("prompt should open");
    assert_eq!(prompt.id, "1");
    assert_eq!(prompt.name, "Ann");
}

#[test]
fn prompt_delete_ignores_an_unsaved_record() {
    let state = loaded(vec![unsaved_person("Draft", 20, "other", "000")]);
    let state = ListReducer::reduce(state, ListIntent::PromptDelete);
    assert!(state.prompt.is_none());
    assert_eq!(state.snapshot.len(), 1);
}

#[test]
fn prompt_delete_ignores_an_empty_snapshot() {
    let state = ListReducer::reduce(ListScreenState::default(), ListIntent::PromptDelete);
    assert!(state.prompt.is_none());
}

#[test]
fn prompt_delete_is_refused_while_a_delete_is_in_flight() {
    let mut state = loaded(vec![person("1", "Ann", 30, "female", "555")]);
    state.busy = true;
    let state = ListReducer::reduce(state, ListIntent::PromptDelete);
    assert!(state.prompt.is_none());
}

#[test]
fn cancel_prompt_closes_without_touching_the_snapshot() {
    let state = loaded(vec![person("1", "Ann", 30, "female", "555")]);
    let state = ListReducer::reduce(state, ListIntent::PromptDelete);
    let state = ListReducer::reduce(state, ListIntent::CancelPrompt);
    assert!(state.prompt.is_none());
    assert_eq!(state.snapshot.len(), 1);
}

#[test]
fn delete_issued_closes_the_prompt_and_marks_busy() {
    let state = loaded(vec![person("1", "Ann", 30, "female", "555")]);
    let state = ListReducer::reduce(state, ListIntent::PromptDelete);
    let state = ListReducer::reduce(state, ListIntent::DeleteIssued);
    assert!(state.prompt.is_none());
    assert!(state.busy);
}

#[test]
fn delete_failure_keeps_the_snapshot_and_clears_busy() {
    let state = loaded(vec![person("1", "Ann", 30, "female", "555")]);
    let state = ListReducer::reduce(state, ListIntent::DeleteIssued);
    let state = ListReducer::reduce(
        state,
        ListIntent::DeleteFailed {
            message: "gone already".to_string(),
        },
    );
    assert!(!state.busy);
    assert_eq!(state.snapshot.len(), 1);
    assert_eq!(state.status.as_deref(), Some("gone already"));
}
