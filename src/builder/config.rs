//! Transition table: a latched builder and the frozen configuration it
//! produces.

use crate::builder::error::ConfigError;
use crate::builder::settings::{validate_duration, TransitionSettings, DEFAULT_TRANSITION_DURATION};
use crate::core::{Guard, StateRef};
use crate::effects::{Blend, TransitionEffect};
use crate::machine::StateMachine;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Listener invoked with `(machine, from, to)` once per accepted switch,
/// before the machine moves to `to`.
pub type SwitchListener<T> = Box<dyn Fn(&StateMachine<T>, &StateRef<T>, &StateRef<T>) + Send + Sync>;

/// Exact, ordered edge key: `(from name, to name)`.
type EdgeKey = (String, String);

fn edge_key<T>(from: &StateRef<T>, to: &StateRef<T>) -> EdgeKey {
    (from.name().to_owned(), to.name().to_owned())
}

/// Frozen transition table shared by every machine instantiated from it.
///
/// There is no way to mutate a `StateConfig`; it only exists once a
/// [`StateConfigBuilder`] has been built, and is handed out behind an `Arc`.
pub struct StateConfig<T> {
    entrance_conditions: HashMap<EdgeKey, Guard<T>>,
    all_entrances: HashMap<String, Vec<StateRef<T>>>,
    default_state: StateRef<T>,
    transition_effect: Arc<dyn TransitionEffect>,
    transition_duration: f32,
    on_switch_state: Option<SwitchListener<T>>,
}

impl<T> StateConfig<T> {
    /// Create a machine bound to `entity`, seeded at the default state.
    pub fn instantiate(self: &Arc<Self>, entity: T) -> StateMachine<T> {
        StateMachine::new(Arc::clone(self), entity)
    }

    /// Guard registered for the edge `from -> to`, if any.
    pub fn entrance_condition(&self, from: &StateRef<T>, to: &StateRef<T>) -> Option<&Guard<T>> {
        self.entrance_conditions.get(&edge_key(from, to))
    }

    /// States reachable directly from `from`, in registration order.
    ///
    /// Empty for states without outgoing edges.
    pub fn entrances(&self, from: &StateRef<T>) -> &[StateRef<T>] {
        self.all_entrances
            .get(from.name())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn default_state(&self) -> &StateRef<T> {
        &self.default_state
    }

    pub fn transition_effect(&self) -> &dyn TransitionEffect {
        self.transition_effect.as_ref()
    }

    pub fn transition_duration(&self) -> f32 {
        self.transition_duration
    }

    pub fn on_switch_state(&self) -> Option<&SwitchListener<T>> {
        self.on_switch_state.as_ref()
    }

    /// Number of registered edges.
    pub fn edge_count(&self) -> usize {
        self.entrance_conditions.len()
    }
}

impl<T> fmt::Debug for StateConfig<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateConfig")
            .field("default_state", &self.default_state)
            .field("all_entrances", &self.all_entrances)
            .field("transition_duration", &self.transition_duration)
            .field("on_switch_state", &self.on_switch_state.is_some())
            .finish_non_exhaustive()
    }
}

/// Builder for a [`StateConfig`].
///
/// The builder is a one-way latch: once [`build`](Self::build) succeeds every
/// mutating call fails with [`ConfigError::AlreadyBuilt`] and leaves the
/// built configuration untouched. Failed calls never change the builder.
///
/// # Example
///
/// ```rust
/// use fadestate::builder::StateConfigBuilder;
/// use fadestate::core::{FnState, StateRef, Timer};
///
/// struct Player {
///     speed: f32,
/// }
///
/// let idle = StateRef::new(FnState::<Player>::blank("Idle"));
/// let walk = StateRef::new(FnState::<Player>::blank("Walk"));
///
/// let mut builder = StateConfigBuilder::new();
/// builder
///     .default_state(&idle)?
///     .entry(&idle, &walk, |p: &Player| p.speed > 0.0)?
///     .entry(&walk, &idle, |p: &Player| p.speed == 0.0)?;
/// builder.build()?;
///
/// let mut machine = builder.instantiate(Player { speed: 2.0 })?;
/// machine.spend(1.0);
/// assert!(machine.update_state());
/// assert_eq!(machine.cur_state().name(), "Walk");
/// # Ok::<(), fadestate::builder::ConfigError>(())
/// ```
pub struct StateConfigBuilder<T> {
    entrance_conditions: HashMap<EdgeKey, Guard<T>>,
    all_entrances: HashMap<String, Vec<StateRef<T>>>,
    default_state: Option<StateRef<T>>,
    transition_effect: Arc<dyn TransitionEffect>,
    transition_duration: f32,
    on_switch_state: Option<SwitchListener<T>>,
    built: Option<Arc<StateConfig<T>>>,
}

impl<T> StateConfigBuilder<T> {
    /// Create an empty builder with a smooth fade over the default duration.
    pub fn new() -> Self {
        Self {
            entrance_conditions: HashMap::new(),
            all_entrances: HashMap::new(),
            default_state: None,
            transition_effect: Arc::new(Blend::default()),
            transition_duration: DEFAULT_TRANSITION_DURATION,
            on_switch_state: None,
            built: None,
        }
    }

    fn check_not_built(&self) -> Result<(), ConfigError> {
        if self.built.is_some() {
            Err(ConfigError::AlreadyBuilt)
        } else {
            Ok(())
        }
    }

    /// Register the edge `from -> to`, allowed whenever `guard` holds.
    ///
    /// Registering the same ordered pair again replaces its guard and keeps
    /// the pair's original place in the entrance order.
    pub fn entry<G>(
        &mut self,
        from: &StateRef<T>,
        to: &StateRef<T>,
        guard: G,
    ) -> Result<&mut Self, ConfigError>
    where
        G: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.check_not_built()?;
        if from == to {
            return Err(ConfigError::InvalidArgument(format!(
                "from [{from}] is equal to to [{to}]"
            )));
        }

        let key = edge_key(from, to);
        let entrances = self.all_entrances.entry(key.0.clone()).or_default();
        match entrances.iter_mut().find(|existing| *existing == to) {
            Some(existing) => *existing = to.clone(),
            None => entrances.push(to.clone()),
        }
        self.entrance_conditions.insert(key, Guard::new(guard));
        Ok(self)
    }

    /// Set the default and initial state (required before building).
    pub fn default_state(&mut self, state: &StateRef<T>) -> Result<&mut Self, ConfigError> {
        self.check_not_built()?;
        self.default_state = Some(state.clone());
        Ok(self)
    }

    /// Set the blend used by every switch.
    pub fn transition_effect<E>(&mut self, effect: E) -> Result<&mut Self, ConfigError>
    where
        E: TransitionEffect + 'static,
    {
        self.check_not_built()?;
        self.transition_effect = Arc::new(effect);
        Ok(self)
    }

    /// Set how many time units a switch takes to blend from 0 to 1.
    pub fn transition_duration(&mut self, duration: f32) -> Result<&mut Self, ConfigError> {
        self.check_not_built()?;
        validate_duration(duration)?;
        self.transition_duration = duration;
        Ok(self)
    }

    /// Apply a blend and duration loaded from configuration.
    pub fn settings(&mut self, settings: TransitionSettings) -> Result<&mut Self, ConfigError> {
        self.check_not_built()?;
        validate_duration(settings.duration)?;
        self.transition_effect = Arc::new(settings.effect);
        self.transition_duration = settings.duration;
        Ok(self)
    }

    /// Observe every accepted switch.
    pub fn on_switch_state<F>(&mut self, listener: F) -> Result<&mut Self, ConfigError>
    where
        F: Fn(&StateMachine<T>, &StateRef<T>, &StateRef<T>) + Send + Sync + 'static,
    {
        self.check_not_built()?;
        self.on_switch_state = Some(Box::new(listener));
        Ok(self)
    }

    /// Freeze the table.
    ///
    /// Calling `build` again returns the configuration built the first time.
    pub fn build(&mut self) -> Result<Arc<StateConfig<T>>, ConfigError> {
        if let Some(config) = &self.built {
            return Ok(Arc::clone(config));
        }
        let default_state = self
            .default_state
            .take()
            .ok_or(ConfigError::MissingDefaultState)?;

        let config = Arc::new(StateConfig {
            entrance_conditions: std::mem::take(&mut self.entrance_conditions),
            all_entrances: std::mem::take(&mut self.all_entrances),
            default_state,
            transition_effect: Arc::clone(&self.transition_effect),
            transition_duration: self.transition_duration,
            on_switch_state: self.on_switch_state.take(),
        });
        debug!(
            default_state = %config.default_state,
            edges = config.edge_count(),
            duration = config.transition_duration,
            "state config built"
        );
        self.built = Some(Arc::clone(&config));
        Ok(config)
    }

    pub fn is_built(&self) -> bool {
        self.built.is_some()
    }

    /// The built configuration, if any.
    pub fn config(&self) -> Option<&Arc<StateConfig<T>>> {
        self.built.as_ref()
    }

    /// Create a machine bound to `entity`. Fails until the builder is built.
    pub fn instantiate(&self, entity: T) -> Result<StateMachine<T>, ConfigError> {
        self.built
            .as_ref()
            .map(|config| config.instantiate(entity))
            .ok_or(ConfigError::NotBuilt)
    }
}

impl<T> Default for StateConfigBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}
