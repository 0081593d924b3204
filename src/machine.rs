//! Runtime driver: one machine per live entity.

use crate::builder::StateConfig;
use crate::core::{Canvas, StateRef, Timer};
use crate::effects::easing::clamp01;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Animation state machine bound to one entity.
///
/// The host drives it once per tick: [`spend`](Timer::spend) the frame time,
/// [`update_state`](Self::update_state) to take at most one guarded switch,
/// then [`draw`](Self::draw) to render the blend between the previous and
/// current state.
pub struct StateMachine<T> {
    config: Arc<StateConfig<T>>,
    entity: T,
    cur_state: StateRef<T>,
    last_state: Option<StateRef<T>>,
    cur_time: f32,
    last_switch_time: f32,
}

impl<T> StateMachine<T> {
    pub(crate) fn new(config: Arc<StateConfig<T>>, entity: T) -> Self {
        let cur_state = config.default_state().clone();
        Self {
            config,
            entity,
            cur_state,
            last_state: None,
            cur_time: 0.0,
            last_switch_time: 0.0,
        }
    }

    /// Take the first entrance of the current state whose guard holds.
    ///
    /// Candidates are tried in registration order and at most one switch is
    /// taken per call. The switch listener sees the machine before it moves.
    /// Returns whether a switch happened.
    pub fn update_state(&mut self) -> bool {
        let config = Arc::clone(&self.config);
        let next = config
            .entrances(&self.cur_state)
            .iter()
            .find(|to| {
                config
                    .entrance_condition(&self.cur_state, to)
                    .is_some_and(|guard| guard.check(&self.entity))
            })
            .cloned();

        let Some(to) = next else {
            return false;
        };

        if let Some(listener) = config.on_switch_state() {
            listener(&*self, &self.cur_state, &to);
        }
        debug!(from = %self.cur_state, to = %to, at = self.cur_time, "state switched");

        self.last_state = Some(std::mem::replace(&mut self.cur_state, to));
        self.last_switch_time = self.cur_time;
        true
    }

    /// Normalized time since the last switch, clamped to `[0, 1]`.
    ///
    /// A zero transition duration is always settled.
    pub fn progress(&self) -> f32 {
        let duration = self.config.transition_duration();
        if duration <= 0.0 {
            return 1.0;
        }
        clamp01((self.cur_time - self.last_switch_time) / duration)
    }

    /// Whether a blend from a previous state is still visible.
    pub fn is_switching(&self) -> bool {
        self.last_state.is_some() && self.progress() < 1.0
    }

    /// Render the blend of the previous and current state, then reset the
    /// canvas.
    pub fn draw(&self, canvas: &mut dyn Canvas) {
        let entity = &self.entity;
        let mut draw_last = |canvas: &mut dyn Canvas| {
            if let Some(last) = &self.last_state {
                last.draw(entity, canvas);
            }
        };
        let mut draw_current = |canvas: &mut dyn Canvas| self.cur_state.draw(entity, canvas);

        self.config.transition_effect().blend(
            self.progress(),
            canvas,
            &mut draw_last,
            &mut draw_current,
        );
        canvas.reset();
    }

    pub fn cur_state(&self) -> &StateRef<T> {
        &self.cur_state
    }

    pub fn last_state(&self) -> Option<&StateRef<T>> {
        self.last_state.as_ref()
    }

    pub fn cur_time(&self) -> f32 {
        self.cur_time
    }

    pub fn last_switch_time(&self) -> f32 {
        self.last_switch_time
    }

    pub fn config(&self) -> &Arc<StateConfig<T>> {
        &self.config
    }

    pub fn entity(&self) -> &T {
        &self.entity
    }

    /// Mutable access for the host's own simulation of the entity.
    pub fn entity_mut(&mut self) -> &mut T {
        &mut self.entity
    }

    pub fn into_entity(self) -> T {
        self.entity
    }
}

impl<T> Timer for StateMachine<T> {
    fn spend(&mut self, time: f32) {
        self.cur_time += time;
    }
}

impl<T: fmt::Debug> fmt::Debug for StateMachine<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateMachine")
            .field("entity", &self.entity)
            .field("cur_state", &self.cur_state)
            .field("last_state", &self.last_state)
            .field("cur_time", &self.cur_time)
            .field("last_switch_time", &self.last_switch_time)
            .finish()
    }
}
