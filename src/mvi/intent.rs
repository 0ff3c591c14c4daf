//! Base trait for intents (user/system actions).

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (button clicks, key presses)
/// - System events (timers, external triggers)
/// - Navigation events
///
/// An intent is consumed exactly once by the pipeline's dispatch stage.
pub trait ViewIntent: Send + 'static {}
