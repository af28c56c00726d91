pub use action::*;
pub use registry::*;
pub use view_engine::*;

/// Action results and the helpers actions build them with.
mod action;
/// Registry mapping controller and action names to actions.
mod registry;
/// View name resolution and template rendering.
mod view_engine;
