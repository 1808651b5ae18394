use crate::ui::form::intent::FormIntent;
use crate::ui::form::state::{FormField, FormScreenState};
use crate::ui::mvi::Reducer;

/// Options the gender field cycles through, in order.
const GENDER_OPTIONS: [&str; 3] = ["male", "female", "other"];

/// Longest accepted text field input.
const MAX_TEXT_LEN: usize = 64;

pub struct FormReducer;

impl Reducer for FormReducer {
    type State = FormScreenState;
    type Intent = FormIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FormIntent::OpenCreate => FormScreenState::default(),
            FormIntent::OpenEdit { id } => FormScreenState::Loading { id },
            FormIntent::Loaded { person } => match state {
                FormScreenState::Loading { .. } => FormScreenState::Ready {
                    draft: person,
                    focused: FormField::Name,
                    error: None,
                },
                // Not waiting for a record; a stale fetch result.
                other => other,
            },
            FormIntent::LoadFailed { message } => match state {
                FormScreenState::Loading { id } => FormScreenState::LoadFailed { id, message },
                other => other,
            },
            FormIntent::FocusNext => map_focus(state, FormField::next),
            FormIntent::FocusPrev => map_focus(state, FormField::prev),
            FormIntent::Input { ch } => map_draft(state, |draft, focused| match focused {
                FormField::Name => push_char(&mut draft.name, ch),
                FormField::Mobile => push_char(&mut draft.mobile_number, ch),
                FormField::Age => {
                    if let Some(digit) = ch.to_digit(10) {
                        if draft.age < 100 {
                            draft.age = draft.age * 10 + digit;
                        }
                    }
                }
                // Gender is a pick-one field; typed characters do not apply.
                FormField::Gender => {}
            }),
            FormIntent::Backspace => map_draft(state, |draft, focused| match focused {
                FormField::Name => {
                    draft.name.pop();
                }
                FormField::Mobile => {
                    draft.mobile_number.pop();
                }
                FormField::Age => draft.age /= 10,
                FormField::Gender => draft.gender.clear(),
            }),
            FormIntent::CycleGender => map_draft(state, |draft, focused| {
                if focused != FormField::Gender {
                    return;
                }
                let next = GENDER_OPTIONS
                    .iter()
                    .position(|option| *option == draft.gender)
                    .map(|i| GENDER_OPTIONS[(i + 1) % GENDER_OPTIONS.len()])
                    .unwrap_or(GENDER_OPTIONS[0]);
                draft.gender = next.to_string();
            }),
            FormIntent::SaveFailed { message } => match state {
                FormScreenState::Create {
                    draft, focused, ..
                } => FormScreenState::Create {
                    draft,
                    focused,
                    error: Some(message),
                },
                FormScreenState::Ready {
                    draft, focused, ..
                } => FormScreenState::Ready {
                    draft,
                    focused,
                    error: Some(message),
                },
                other => other,
            },
        }
    }
}

fn push_char(field: &mut String, ch: char) {
    if !ch.is_control() && field.len() < MAX_TEXT_LEN {
        field.push(ch);
    }
}

/// Move focus in an editing state; no-op elsewhere.
fn map_focus(state: FormScreenState, step: fn(FormField) -> FormField) -> FormScreenState {
    match state {
        FormScreenState::Create {
            draft,
            focused,
            error,
        } => FormScreenState::Create {
            draft,
            focused: step(focused),
            error,
        },
        FormScreenState::Ready {
            draft,
            focused,
            error,
        } => FormScreenState::Ready {
            draft,
            focused: step(focused),
            error,
        },
        other => other,
    }
}

/// Apply an edit to the working copy; no-op outside the editing states.
/// Any edit clears a lingering save error.
fn map_draft(
    state: FormScreenState,
    edit: impl FnOnce(&mut crate::person::Person, FormField),
) -> FormScreenState {
    match state {
        FormScreenState::Create {
            mut draft, focused, ..
        } => {
            edit(&mut draft, focused);
            FormScreenState::Create {
                draft,
                focused,
                error: None,
            }
        }
        FormScreenState::Ready {
            mut draft, focused, ..
        } => {
            edit(&mut draft, focused);
            FormScreenState::Ready {
                draft,
                focused,
                error: None,
            }
        }
        other => other,
    }
}
