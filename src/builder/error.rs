//! Errors raised while configuring a state machine.

use thiserror::Error;

/// Errors that can occur when building a state configuration.
///
/// All of them are precondition violations on the configuration API. The
/// runtime operations of a machine never fail.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration has already been built and can no longer be modified")]
    AlreadyBuilt,

    #[error("Default state not specified. Call .default_state(state) before .build()")]
    MissingDefaultState,

    #[error("Configuration has not been built. Call .build() before .instantiate()")]
    NotBuilt,

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid transition settings: {0}")]
    Settings(#[from] serde_json::Error),
}
