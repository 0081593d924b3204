//! Transition effects: how the outgoing and incoming states are blended
//! while a switch is in progress.
//!
//! - `Blend::None` cuts instantly
//! - `Blend::LinearFade` and `Blend::SmoothFade` cross-fade with
//!   complementary opacities
//! - any closure with the right signature is a custom effect

pub mod easing;
mod transition;

pub use transition::{from_fn, Blend, DrawAction, TransitionEffect};
