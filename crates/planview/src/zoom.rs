//! Zoom state for interactive hosts.
//!
//! A thin clamp-and-step wrapper around a scale factor. The zoom level
//! survives re-layout of unchanged data but resets whenever new module
//! data arrives; that policy lives in
//! [`Visualizer`](crate::visualizer::Visualizer), not here.

/// A zoom factor clamped to a fixed range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Zoom {
    factor: f32,
}

impl Zoom {
    /// Minimum zoom factor.
    pub const MIN: f32 = 0.25;
    /// Maximum zoom factor.
    pub const MAX: f32 = 4.0;
    /// Step applied by [`zoom_in`](Self::zoom_in) and
    /// [`zoom_out`](Self::zoom_out).
    pub const STEP: f32 = 0.1;

    /// The neutral zoom factor.
    pub fn identity() -> Self {
        Self { factor: 1.0 }
    }

    /// Creates a zoom clamped into the valid range. Non-finite factors
    /// fall back to the neutral zoom.
    pub fn new(factor: f32) -> Self {
        if !factor.is_finite() {
            return Self::identity();
        }
        Self {
            factor: factor.clamp(Self::MIN, Self::MAX),
        }
    }

    /// The current factor.
    pub fn factor(self) -> f32 {
        self.factor
    }

    /// Steps the zoom in, saturating at [`MAX`](Self::MAX).
    pub fn zoom_in(self) -> Self {
        Self::new(self.factor + Self::STEP)
    }

    /// Steps the zoom out, saturating at [`MIN`](Self::MIN).
    pub fn zoom_out(self) -> Self {
        Self::new(self.factor - Self::STEP)
    }
}

impl Default for Zoom {
    fn default() -> Self {
        Self::identity()
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_identity() {
        assert_approx_eq!(f32, Zoom::identity().factor(), 1.0);
        assert_eq!(Zoom::default(), Zoom::identity());
    }

    #[test]
    fn test_step_in_and_out() {
        let z = Zoom::identity().zoom_in();
        assert_approx_eq!(f32, z.factor(), 1.1);
        let z = z.zoom_out().zoom_out();
        assert_approx_eq!(f32, z.factor(), 0.9);
    }

    #[test]
    fn test_clamps_at_bounds() {
        let mut z = Zoom::new(0.3);
        for _ in 0..20 {
            z = z.zoom_out();
        }
        assert_approx_eq!(f32, z.factor(), Zoom::MIN);

        let mut z = Zoom::new(3.9);
        for _ in 0..20 {
            z = z.zoom_in();
        }
        assert_approx_eq!(f32, z.factor(), Zoom::MAX);
    }

    #[test]
    fn test_new_clamps() {
        assert_approx_eq!(f32, Zoom::new(100.0).factor(), Zoom::MAX);
        assert_approx_eq!(f32, Zoom::new(0.0).factor(), Zoom::MIN);
    }

    #[test]
    fn test_non_finite_falls_back_to_identity() {
        assert_approx_eq!(f32, Zoom::new(f32::NAN).factor(), 1.0);
        assert_approx_eq!(f32, Zoom::new(f32::INFINITY).factor(), 1.0);
        assert_approx_eq!(f32, Zoom::new(f32::NEG_INFINITY).factor(), 1.0);
    }
}
