//! Pointer input subsystem.
//!
//! Raw pointer events arrive at any time through an [`EventSource`] and mutate
//! live state immediately. Once per frame, [`PointerInput::update`] latches
//! button edges and the wheel total so application code polls a stable view.
//!
//! Public API is platform-agnostic; `platform::winit` translates window
//! events into [`PointerEvent`]s.

pub mod platform;

mod pointer;
mod source;
mod state;
mod types;

pub use pointer::PointerInput;
pub use source::{EventSource, Subscription};
pub use state::{ButtonStates, InputState, WheelAccumulator};
pub use types::{MouseButton, PointerEvent};
