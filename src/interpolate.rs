//! Control-point interpolation and easing curves.

use std::f64::consts::PI;

use crate::data::ControlPointSet;
use crate::error::{MorphError, Result};

/// Blend two control-point sets by `t`.
///
/// Each point is interpolated independently per axis:
/// `from + (to - from) * t`. `t` is not clamped; values outside `[0, 1]`
/// extrapolate past the end glyphs.
///
/// Fails with [`MorphError::MismatchedPointCount`] when the sets differ in
/// length.
///
/// ## Example
///
/// ```rust
/// use glyph_morph::{interpolate, ControlPointSet, Point};
///
/// let from = ControlPointSet::from_pairs(&[(0.0, 0.0)]);
/// let to = ControlPointSet::from_pairs(&[(1.0, 0.5)]);
///
/// let mid = interpolate(&from, &to, 0.5).unwrap();
/// assert_eq!(mid.get(0), Some(Point::new(0.5, 0.25)));
/// ```
pub fn interpolate(
    from: &ControlPointSet,
    to: &ControlPointSet,
    t: f64,
) -> Result<ControlPointSet> {
    if from.len() != to.len() {
        return Err(MorphError::MismatchedPointCount {
            from: from.len(),
            to: to.len(),
        });
    }

    let points = from
        .points()
        .iter()
        .zip(to.points())
        .map(|(a, b)| a.lerp(*b, t))
        .collect();

    Ok(ControlPointSet::new(points))
}

/// Timing curve applied to the elapsed fraction of a transition.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing {
    /// Progress equals elapsed time.
    Linear,
    /// Starts and ends slowly, fastest in the middle.
    #[default]
    AccelerateDecelerate,
}

impl Easing {
    /// Map an elapsed fraction to a progress fraction.
    ///
    /// Input is clamped to `[0, 1]`; both curves fix 0 and 1.
    #[inline]
    pub fn apply(self, fraction: f64) -> f64 {
        let t = fraction.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::AccelerateDecelerate => ((t + 1.0) * PI).cos() / 2.0 + 0.5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn square() -> ControlPointSet {
        ControlPointSet::from_pairs(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)])
    }

    fn diamond() -> ControlPointSet {
        ControlPointSet::from_pairs(&[(0.5, 0.0), (0.0, 0.5), (0.5, 1.0), (1.0, 0.5)])
    }

    #[test]
    fn test_endpoints_are_exact() {
        let from = square();
        let to = diamond();

        let start = interpolate(&from, &to, 0.0).unwrap();
        let end = interpolate(&from, &to, 1.0).unwrap();

        for (got, want) in start.points().iter().zip(from.points()) {
            assert_abs_diff_eq!(got.x, want.x, epsilon = 1e-12);
            assert_abs_diff_eq!(got.y, want.y, epsilon = 1e-12);
        }
        for (got, want) in end.points().iter().zip(to.points()) {
            assert_abs_diff_eq!(got.x, want.x, epsilon = 1e-12);
            assert_abs_diff_eq!(got.y, want.y, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_monotonic_per_axis() {
        let from = square();
        let to = diamond();
        let steps: Vec<ControlPointSet> = (0..=10)
            .map(|i| interpolate(&from, &to, i as f64 / 10.0).unwrap())
            .collect();

        for i in 0..from.len() {
            let dx = to.points()[i].x - from.points()[i].x;
            let dy = to.points()[i].y - from.points()[i].y;
            for pair in steps.windows(2) {
                let (a, b) = (pair[0].points()[i], pair[1].points()[i]);
                assert!((b.x - a.x) * dx >= 0.0);
                assert!((b.y - a.y) * dy >= 0.0);
            }
        }
    }

    #[test]
    fn test_mismatched_lengths() {
        let four = square();
        let seven = ControlPointSet::from_pairs(&[(0.0, 0.0); 7]);

        assert_eq!(
            interpolate(&four, &seven, 0.5),
            Err(MorphError::MismatchedPointCount { from: 4, to: 7 })
        );
    }

    #[test]
    fn test_extrapolation_is_not_clamped() {
        let from = ControlPointSet::from_pairs(&[(0.0, 0.0)]);
        let to = ControlPointSet::from_pairs(&[(1.0, 1.0)]);

        let over = interpolate(&from, &to, 1.5).unwrap();
        assert_abs_diff_eq!(over.points()[0].x, 1.5);

        let under = interpolate(&from, &to, -0.5).unwrap();
        assert_abs_diff_eq!(under.points()[0].y, -0.5);
    }

    #[test]
    fn test_easing_curves() {
        assert_eq!(Easing::Linear.apply(0.25), 0.25);
        assert_abs_diff_eq!(Easing::AccelerateDecelerate.apply(0.0), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(Easing::AccelerateDecelerate.apply(0.5), 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(Easing::AccelerateDecelerate.apply(1.0), 1.0, epsilon = 1e-12);
        assert!(Easing::AccelerateDecelerate.apply(0.1) < 0.1);
        assert!(Easing::AccelerateDecelerate.apply(0.9) > 0.9);
        // Clamped input
        assert_eq!(Easing::Linear.apply(2.0), 1.0);
    }
}
