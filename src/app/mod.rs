//! Application layer coordinating state, events, and actions.
//!
//! Sits between the plugin runtime (main.rs) and the picker. Data flows one way:
//!
//! ```text
//! Key press → Event → handle_event → State mutation → Actions → Side effects
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing and state transitions
//! - [`modes`]: Input mode type
//! - [`state`]: Application state container and view model computation

pub mod actions;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::InputMode;
pub use state::AppState;
