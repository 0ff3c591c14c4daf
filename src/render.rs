//! Renderer trait: the passive end of the pipeline.

use crate::mvi::{ViewLayout, ViewState};

/// Pure sink that paints a view state into a layout.
///
/// `layout` must synchronously update the surface to reflect `state` and
/// have no side effects beyond it. The host guarantees exclusive access
/// to the layout for the duration of the call and invokes the renderer
/// from a single render task, one state at a time.
pub trait ViewRenderer<L, S>: Send + Sync
where
    L: ViewLayout,
    S: ViewState,
{
    fn layout(&self, layout: &mut L, state: &S);
}
