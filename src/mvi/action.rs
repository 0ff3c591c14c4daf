//! Base trait for render actions.

/// Marker trait for render action objects.
///
/// A render action describes the outcome of handling an intent ("data
/// loaded", "request failed") before it is folded into state. A single
/// intent may dispatch zero, one, or many render actions, and asynchronous
/// outcomes arrive whenever their work completes.
pub trait RenderAction: Send + 'static {}
