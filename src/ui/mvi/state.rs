//! Base trait for screen state.

/// Marker trait for screen state objects.
///
/// States are immutable values: a reducer consumes the old state and
/// returns a new one. They carry everything the view needs to render and
/// compare with `PartialEq` so redraw logic can detect change.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
