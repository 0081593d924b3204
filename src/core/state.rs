//! The renderable State capability.
//!
//! A state is a named mode that knows how to draw a bound entity. The
//! state machine never looks inside a state beyond its name and its draw
//! routine, so hosts are free to implement states however they like.

use super::canvas::Canvas;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// Trait for animation states bound to an entity of type `T`.
///
/// Two states are the same logical state when their names are equal, even
/// if they are different instances. The transition table, the guard lookup
/// and self-loop rejection all compare by name.
///
/// # Example
///
/// ```rust
/// use fadestate::core::{Canvas, State};
///
/// struct Player {
///     speed: f32,
/// }
///
/// struct Walk;
///
/// impl State<Player> for Walk {
///     fn name(&self) -> &str {
///         "Walk"
///     }
///
///     fn draw(&self, player: &Player, canvas: &mut dyn Canvas) {
///         let _ = (player.speed, canvas);
///     }
/// }
///
/// assert_eq!(Walk.name(), "Walk");
/// ```
pub trait State<T>: Send + Sync {
    /// Stable name of the state, used as its identity.
    fn name(&self) -> &str;

    /// Render the entity in this state onto `canvas`.
    fn draw(&self, entity: &T, canvas: &mut dyn Canvas);
}

/// Shared handle to a state, compared and hashed by name.
pub struct StateRef<T> {
    inner: Arc<dyn State<T>>,
}

impl<T> StateRef<T> {
    pub fn new<S>(state: S) -> Self
    where
        S: State<T> + 'static,
    {
        Self {
            inner: Arc::new(state),
        }
    }

    pub fn name(&self) -> &str {
        self.inner.name()
    }

    pub fn draw(&self, entity: &T, canvas: &mut dyn Canvas) {
        self.inner.draw(entity, canvas)
    }

    /// Borrow the underlying state object.
    pub fn as_state(&self) -> &dyn State<T> {
        self.inner.as_ref()
    }

    /// Whether both handles point at the very same instance.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<T> Clone for StateRef<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> From<Arc<dyn State<T>>> for StateRef<T> {
    fn from(inner: Arc<dyn State<T>>) -> Self {
        Self { inner }
    }
}

impl<T> PartialEq for StateRef<T> {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || self.name() == other.name()
    }
}

impl<T> Eq for StateRef<T> {}

impl<T> Hash for StateRef<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name().hash(state)
    }
}

impl<T> fmt::Debug for StateRef<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("StateRef").field(&self.name()).finish()
    }
}

impl<T> fmt::Display for StateRef<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

type DrawFn<T> = Box<dyn Fn(&T, &mut dyn Canvas) + Send + Sync>;

/// A state assembled from a name and a draw closure.
///
/// ```rust
/// use fadestate::core::{FnState, State, StateRef};
///
/// let idle: StateRef<u32> = StateRef::new(FnState::new("Idle", |_frame: &u32, _canvas| {}));
/// assert_eq!(idle.name(), "Idle");
/// ```
pub struct FnState<T> {
    name: String,
    draw: DrawFn<T>,
}

impl<T> FnState<T> {
    pub fn new<F>(name: impl Into<String>, draw: F) -> Self
    where
        F: Fn(&T, &mut dyn Canvas) + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            draw: Box::new(draw),
        }
    }

    /// A state that draws nothing.
    pub fn blank(name: impl Into<String>) -> Self {
        Self::new(name, |_, _| {})
    }
}

impl<T> State<T> for FnState<T> {
    fn name(&self) -> &str {
        &self.name
    }

    fn draw(&self, entity: &T, canvas: &mut dyn Canvas) {
        (self.draw)(entity, canvas)
    }
}
