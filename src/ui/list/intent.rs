use crate::person::Person;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum ListIntent {
    /// A list fetch succeeded. Replaces the snapshot wholesale, in the
    /// order the store returned.
    Loaded { people: Vec<Person> },
    /// A list fetch failed. The snapshot keeps its prior value.
    LoadFailed { message: String },
    MoveUp,
    MoveDown,
    /// Ask to delete the selected record. Ignored when the record has no
    /// id, when a delete is already in flight, or when the list is empty.
    PromptDelete,
    CancelPrompt,
    /// The user confirmed; the delete request has been issued.
    DeleteIssued,
    /// The delete request failed. The snapshot keeps its prior value.
    DeleteFailed { message: String },
}

impl Intent for ListIntent {}
