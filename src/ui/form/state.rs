use crate::person::Person;
use crate::ui::mvi::UiState;

/// The editable fields, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Age,
    Gender,
    Mobile,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::Name,
        FormField::Age,
        FormField::Gender,
        FormField::Mobile,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Age => "Age",
            FormField::Gender => "Gender",
            FormField::Mobile => "Mobile Number",
        }
    }

    pub fn next(self) -> Self {
        match self {
            FormField::Name => FormField::Age,
            FormField::Age => FormField::Gender,
            FormField::Gender => FormField::Mobile,
            FormField::Mobile => FormField::Name,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            FormField::Name => FormField::Mobile,
            FormField::Age => FormField::Name,
            FormField::Gender => FormField::Age,
            FormField::Mobile => FormField::Gender,
        }
    }
}

/// State of the form screen.
///
/// `Create` is the initial state when no record id is supplied. With an id
/// the screen passes through `Loading`; the fetched record becomes the
/// working copy in `Ready`. A failed fetch lands in `LoadFailed`, which is
/// terminal: editing and submission are unreachable there and the only way
/// out is back to the list.
///
/// The working copy in `Create`/`Ready` is an owned value. Edits touch it
/// and nothing else; the list snapshot only changes through store
/// round-trips.
#[derive(Debug, Clone, PartialEq)]
pub enum FormScreenState {
    Create {
        draft: Person,
        focused: FormField,
        error: Option<String>,
    },
    Loading {
        id: String,
    },
    Ready {
        draft: Person,
        focused: FormField,
        error: Option<String>,
    },
    LoadFailed {
        id: String,
        message: String,
    },
}

impl Default for FormScreenState {
    fn default() -> Self {
        Self::Create {
            draft: Person::default(),
            focused: FormField::Name,
            error: None,
        }
    }
}

impl UiState for FormScreenState {}

impl FormScreenState {
    /// The working copy, when one exists.
    pub fn draft(&self) -> Option<&Person> {
        match self {
            Self::Create { draft, .. } | Self::Ready { draft, .. } => Some(draft),
            Self::Loading { .. } | Self::LoadFailed { .. } => None,
        }
    }

    pub fn focused(&self) -> Option<FormField> {
        match self {
            Self::Create { focused, .. } | Self::Ready { focused, .. } => Some(*focused),
            Self::Loading { .. } | Self::LoadFailed { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Create { error, .. } | Self::Ready { error, .. } => error.as_deref(),
            Self::Loading { .. } => None,
            Self::LoadFailed { message, .. } => Some(message),
        }
    }

    /// Submission is possible once a working copy exists and every
    /// required field is present.
    pub fn can_submit(&self) -> bool {
        self.draft().is_some_and(Person::is_complete)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_create_with_empty_draft() {
        let state = FormScreenState::default();
        let FormScreenState::Create { draft, focused, .. } = &state else {
            panic!("expected Create");
        };
        assert_eq!(*draft, Person::default());
        assert_eq!(*focused, FormField::Name);
        assert!(!state.can_submit());
    }

    #[test]
    fn field_order_wraps_both_ways() {
        assert_eq!(FormField::Mobile.next(), FormField::Name);
        assert_eq!(FormField::Name.prev(), FormField::Mobile);
        for field in FormField::ALL {
            assert_eq!(field.next().prev(), field);
        }
    }

    #[test]
    fn load_failed_has_no_draft_and_cannot_submit() {
        let state = FormScreenState::LoadFailed {
            id: "x".to_string(),
            message: "gone".to_string(),
        };
        assert!(state.draft().is_none());
        assert!(!state.can_submit());
        assert_eq!(state.error(), Some("gone"));
    }
}
