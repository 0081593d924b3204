//! Serializable transition settings.

use crate::builder::error::ConfigError;
use crate::effects::Blend;
use serde::{Deserialize, Serialize};

/// Default blend duration in time units.
pub const DEFAULT_TRANSITION_DURATION: f32 = 30.0;

/// Blend policy and duration, loadable from host configuration files.
///
/// Missing fields fall back to a smooth fade over
/// [`DEFAULT_TRANSITION_DURATION`] time units.
///
/// ```rust
/// use fadestate::builder::TransitionSettings;
/// use fadestate::effects::Blend;
///
/// let settings = TransitionSettings::from_json(r#"{ "effect": "linear_fade" }"#).unwrap();
/// assert_eq!(settings.effect, Blend::LinearFade);
/// assert_eq!(settings.duration, 30.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransitionSettings {
    pub effect: Blend,
    pub duration: f32,
}

impl Default for TransitionSettings {
    fn default() -> Self {
        Self {
            effect: Blend::default(),
            duration: DEFAULT_TRANSITION_DURATION,
        }
    }
}

impl TransitionSettings {
    /// Parse settings from JSON and validate the duration.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let settings: Self = serde_json::from_str(json)?;
        validate_duration(settings.duration)?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Durations must be finite and non-negative. Zero means an instant switch.
pub(crate) fn validate_duration(duration: f32) -> Result<(), ConfigError> {
    if duration.is_finite() && duration >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidArgument(format!(
            "transition duration must be finite and non-negative, got {duration}"
        )))
    }
}
