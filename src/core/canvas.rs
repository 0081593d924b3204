//! Transient per-draw rendering context.

/// The part of the host render backend a transition blend needs.
///
/// Blends set an opacity before invoking a state's draw routine. After each
/// draw pass the machine calls [`Canvas::reset`] so the opacity does not leak
/// into unrelated rendering.
pub trait Canvas {
    /// Opacity applied to everything drawn until the next change or reset.
    fn set_alpha(&mut self, alpha: f32);

    /// Restore the default context (full opacity).
    fn reset(&mut self);
}

/// Minimal canvas that only tracks the current opacity.
///
/// Useful for hosts whose draw routines read the alpha themselves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlphaCanvas {
    pub alpha: f32,
}

impl Default for AlphaCanvas {
    fn default() -> Self {
        Self { alpha: 1.0 }
    }
}

impl Canvas for AlphaCanvas {
    fn set_alpha(&mut self, alpha: f32) {
        self.alpha = alpha;
    }

    fn reset(&mut self) {
        self.alpha = 1.0;
    }
}
