//! Base trait for intents.

/// Marker trait for intent objects.
///
/// Intents represent user actions (key presses), store responses, and
/// navigation events. Reducers consume them to produce new states.
pub trait Intent: Send + 'static {}
