//! Model-View-Intent (MVI) primitives for the screen layer.
//!
//! Each screen keeps its state in an immutable value, user actions and
//! store responses arrive as intents, and a pure reducer produces the next
//! state. Side effects (store calls, navigation) live in the `App`, never
//! in reducers.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
