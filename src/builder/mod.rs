//! Building a transition table.
//!
//! A [`StateConfigBuilder`] collects edges, guards, the default state and
//! the blend settings, then freezes them into an immutable [`StateConfig`]
//! that any number of machines can share.

mod config;
pub mod error;
pub mod settings;

pub use config::{StateConfig, StateConfigBuilder, SwitchListener};
pub use error::ConfigError;
pub use settings::{TransitionSettings, DEFAULT_TRANSITION_DURATION};
