use crate::person::Person;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum FormIntent {
    /// Start a fresh create session with an empty working copy.
    OpenCreate,
    /// Start an edit session; the record fetch is issued alongside.
    OpenEdit { id: String },
    /// The record fetch succeeded; the result becomes the working copy.
    Loaded { person: Person },
    /// The record fetch failed. Terminal for this session.
    LoadFailed { message: String },
    FocusNext,
    FocusPrev,
    /// A typed character for the focused field. Digits only for age;
    /// ignored entirely on the gender field.
    Input { ch: char },
    Backspace,
    /// Step the gender field through the offered options.
    CycleGender,
    /// The save request failed; the working copy stays as entered.
    SaveFailed { message: String },
}

impl Intent for FormIntent {}
