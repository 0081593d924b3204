//! Capabilities the state machine consumes from its host.
//!
//! - `State`: a named mode that draws a bound entity
//! - `Guard`: predicate over the entity attached to an edge
//! - `Canvas`: the transient opacity context blends write to
//! - `Timer`: time accumulation fed by the host loop

mod canvas;
mod guard;
mod state;
mod timer;

pub use canvas::{AlphaCanvas, Canvas};
pub use guard::Guard;
pub use state::{FnState, State, StateRef};
pub use timer::Timer;
