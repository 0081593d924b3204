//! Guard predicates attached to transition edges.
//!
//! A guard is a boolean function over the bound entity. It decides whether
//! the edge it is attached to may fire on a given tick.

use std::fmt;

/// Predicate over the entity that controls whether a transition may fire.
///
/// # Example
///
/// ```rust
/// use fadestate::core::Guard;
///
/// struct Player {
///     speed: f32,
/// }
///
/// let moving = Guard::new(|p: &Player| p.speed > 0.0);
///
/// assert!(moving.check(&Player { speed: 5.0 }));
/// assert!(!moving.check(&Player { speed: 0.0 }));
/// ```
pub struct Guard<T> {
    predicate: Box<dyn Fn(&T) -> bool + Send + Sync>,
}

impl<T> Guard<T> {
    /// Create a guard from a predicate function.
    ///
    /// The predicate should be side-effect free; it may be evaluated on any
    /// tick while its source state is current.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Box::new(predicate),
        }
    }

    /// A guard that always allows the transition.
    pub fn always() -> Self {
        Self::new(|_| true)
    }

    /// Evaluate the guard against the entity.
    pub fn check(&self, entity: &T) -> bool {
        (self.predicate)(entity)
    }
}

impl<T, F> From<F> for Guard<T>
where
    F: Fn(&T) -> bool + Send + Sync + 'static,
{
    fn from(predicate: F) -> Self {
        Guard::new(predicate)
    }
}

impl<T> fmt::Debug for Guard<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Guard(..)")
    }
}
