//! Base trait for layout handles.

/// Marker trait for the UI surface a renderer paints into.
///
/// The host owns the layout and hands the renderer exclusive access for
/// the duration of each paint. For toolkits with a dedicated UI thread,
/// implement this on a handle that posts to that thread.
pub trait ViewLayout: Send + 'static {}
