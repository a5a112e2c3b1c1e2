//! Platform abstraction layer
//!
//! Maps host input events onto simulation inputs. Event wiring itself
//! (listeners, focus handling) belongs to the host.

pub mod input;

pub use input::{InputEvent, tick_input_for};
