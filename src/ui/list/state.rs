use crate::person::Person;
use crate::ui::mvi::UiState;

/// Pending delete confirmation for one record.
#[derive(Debug, Clone, PartialEq)]
pub struct DeletePrompt {
    pub id: String,
    pub name: String,
}

/// State of the list screen.
///
/// `snapshot` is always sourced wholesale from the store; it is never
/// patched locally. `busy` is set from the moment a delete is issued until
/// the follow-up refresh resolves, so only one delete can be in flight.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListScreenState {
    pub snapshot: Vec<Person>,
    pub selected: usize,
    pub prompt: Option<DeletePrompt>,
    pub busy: bool,
    /// Last failure message, shown in the footer until the next load.
    pub status: Option<String>,
}

impl UiState for ListScreenState {}

impl ListScreenState {
    pub fn selected_person(&self) -> Option<&Person> {
        self.snapshot.get(self.selected)
    }

    pub fn is_prompting(&self) -> bool {
        self.prompt.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_snapshot_is_empty() {
        let state = ListScreenState::default();
        assert!(state.snapshot.is_empty());
        assert_eq!(state.selected, 0);
        assert!(!state.busy);
        assert!(!state.is_prompting());
    }

    #[test]
    fn selected_person_out_of_range_is_none() {
        let state = ListScreenState::default();
        assert!(state.selected_person().is_none());
    }
}
