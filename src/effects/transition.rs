//! Blending policies applied while a switch is in progress.

use super::easing::{linear_quadratic, smoother};
use crate::core::Canvas;
use serde::{Deserialize, Serialize};

/// Draw action handed to a blend. It renders one state into the canvas.
pub type DrawAction<'a> = dyn FnMut(&mut dyn Canvas) + 'a;

/// Decides how the outgoing and incoming states are rendered for a given
/// switch progress.
///
/// Implementations must invoke each draw action at most once per call. The
/// caller resets the canvas after `blend` returns, so implementations may
/// leave any opacity they set in place.
pub trait TransitionEffect: Send + Sync {
    /// `progress` is normalized to `[0, 1]`; `last` draws the previous state
    /// (a no-op before the first switch) and `current` the current one.
    fn blend(
        &self,
        progress: f32,
        canvas: &mut dyn Canvas,
        last: &mut DrawAction<'_>,
        current: &mut DrawAction<'_>,
    );
}

impl<F> TransitionEffect for F
where
    F: Fn(f32, &mut dyn Canvas, &mut DrawAction<'_>, &mut DrawAction<'_>) + Send + Sync,
{
    fn blend(
        &self,
        progress: f32,
        canvas: &mut dyn Canvas,
        last: &mut DrawAction<'_>,
        current: &mut DrawAction<'_>,
    ) {
        self(progress, canvas, last, current)
    }
}

/// Wrap a closure as a custom effect.
///
/// Pins the closure's signature so its arguments need no annotations.
///
/// ```rust
/// use fadestate::effects::{from_fn, TransitionEffect};
///
/// // Draws the incoming state at full opacity once the switch is half done.
/// let snap = from_fn(|progress, canvas, last, current| {
///     if progress < 0.5 {
///         last(canvas);
///     } else {
///         current(canvas);
///     }
/// });
/// let _: &dyn TransitionEffect = &snap;
/// ```
pub fn from_fn<F>(f: F) -> F
where
    F: Fn(f32, &mut dyn Canvas, &mut DrawAction<'_>, &mut DrawAction<'_>) + Send + Sync,
{
    f
}

/// Built-in blending policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Blend {
    /// Instant cut: only the current state is drawn.
    None,
    /// Cross-fade weighted by the midpoint of the linear and quadratic curves.
    LinearFade,
    /// Cross-fade weighted by smootherstep.
    #[default]
    SmoothFade,
}

impl Blend {
    /// Weight of the incoming state at `progress`. The outgoing state gets
    /// `1 - weight`.
    pub fn weight(&self, progress: f32) -> f32 {
        match self {
            Blend::None => 1.0,
            Blend::LinearFade => linear_quadratic(progress),
            Blend::SmoothFade => smoother(progress),
        }
    }
}

impl TransitionEffect for Blend {
    fn blend(
        &self,
        progress: f32,
        canvas: &mut dyn Canvas,
        last: &mut DrawAction<'_>,
        current: &mut DrawAction<'_>,
    ) {
        match self {
            Blend::None => current(canvas),
            Blend::LinearFade | Blend::SmoothFade => {
                cross_fade(self.weight(progress), canvas, last, current)
            }
        }
    }
}

fn cross_fade(
    weight: f32,
    canvas: &mut dyn Canvas,
    last: &mut DrawAction<'_>,
    current: &mut DrawAction<'_>,
) {
    let last_alpha = 1.0 - weight;
    if last_alpha > 0.0 {
        canvas.set_alpha(last_alpha);
        last(&mut *canvas);
    }
    if weight > 0.0 {
        canvas.set_alpha(weight);
        current(canvas);
    }
}
