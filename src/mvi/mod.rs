//! Model-View-Intent (MVI) contract markers.
//!
//! The four value kinds that flow through a pipeline:
//!
//! ```text
//! Intent ──→ Dispatcher ──→ RenderAction ──→ Reducer ──→ ViewState ──→ Layout
//!    ↑                                                                   │
//!    └───────────────────────────────────────────────────────────────────┘
//! ```
//!
//! - **ViewIntent**: user actions or system events entering the pipeline
//! - **RenderAction**: outcome of handling an intent, before it is folded
//!   into state
//! - **ViewState**: immutable, complete description of what to display
//! - **ViewLayout**: handle to the concrete UI surface a renderer paints

mod action;
mod intent;
mod layout;
mod state;

pub use action::RenderAction;
pub use intent::ViewIntent;
pub use layout::ViewLayout;
pub use state::ViewState;
