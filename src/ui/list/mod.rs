//! The list screen: the full collection snapshot and delete mediation.

mod intent;
mod reducer;
mod state;

pub use intent::ListIntent;
pub use reducer::ListReducer;
pub use state::{DeletePrompt, ListScreenState};
