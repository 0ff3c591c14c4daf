//! Base trait for view state.

/// Marker trait for view state objects.
///
/// States should be:
/// - Immutable (Clone to create new states)
/// - Self-contained (all data needed to render the view)
/// - Comparable (PartialEq so consecutive duplicates can be suppressed)
///
/// There is no `Default` bound: the seed state is always supplied
/// explicitly when the pipeline is built.
pub trait ViewState: Clone + PartialEq + Send + Sync + 'static {}
