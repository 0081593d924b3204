//! Fadestate: a generic animation state machine
//!
//! Models the discrete visual states of an entity, the guarded transitions
//! between them, and a time-driven cross-fade whenever a transition fires.
//!
//! # Core Concepts
//!
//! - **State**: a named mode that draws the bound entity (`core::State`)
//! - **Guard**: predicate over the entity attached to a directed edge
//! - **StateConfig**: the transition table, frozen once built and shared
//! - **StateMachine**: per-entity driver fed with time by the host loop
//! - **TransitionEffect**: how the outgoing and incoming states are blended
//!
//! # Example
//!
//! ```rust
//! use fadestate::builder::StateConfigBuilder;
//! use fadestate::core::{AlphaCanvas, FnState, StateRef, Timer};
//! use fadestate::effects::Blend;
//!
//! struct Player {
//!     speed: f32,
//! }
//!
//! let idle = StateRef::new(FnState::<Player>::blank("Idle"));
//! let walk = StateRef::new(FnState::<Player>::blank("Walk"));
//!
//! let mut builder = StateConfigBuilder::new();
//! builder
//!     .default_state(&idle)?
//!     .transition_effect(Blend::SmoothFade)?
//!     .transition_duration(30.0)?
//!     .entry(&idle, &walk, |p: &Player| p.speed > 0.0)?;
//! let config = builder.build()?;
//!
//! let mut machine = config.instantiate(Player { speed: 0.0 });
//! let mut canvas = AlphaCanvas::default();
//!
//! // One host tick.
//! machine.spend(1.0);
//! machine.entity_mut().speed = 5.0;
//! machine.update_state();
//! machine.draw(&mut canvas);
//!
//! assert_eq!(machine.cur_state().name(), "Walk");
//! assert_eq!(canvas.alpha, 1.0);
//! # Ok::<(), fadestate::builder::ConfigError>(())
//! ```

pub mod builder;
pub mod core;
pub mod effects;
pub mod machine;

// Re-export commonly used types
pub use crate::builder::{ConfigError, StateConfig, StateConfigBuilder, TransitionSettings};
pub use crate::core::{Canvas, Guard, State, StateRef, Timer};
pub use crate::effects::{Blend, TransitionEffect};
pub use crate::machine::StateMachine;
