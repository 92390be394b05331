//! Core data structures for glyph outlines.

/// A 2D point in the normalized unit square.
///
/// Glyph tables keep both coordinates in `[0, 1]`; the renderer scales them
/// to the drawing surface.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Create a new point.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Linearly interpolate towards `other` by `t`.
    ///
    /// `t` is not clamped, so values outside `[0, 1]` extrapolate.
    #[inline]
    pub fn lerp(self, other: Point, t: f64) -> Point {
        Point {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
        }
    }

    /// Multiply both coordinates by `scale`.
    #[inline]
    pub fn scaled(self, scale: f64) -> Point {
        Point {
            x: self.x * scale,
            y: self.y * scale,
        }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Ordered control points describing one glyph outline.
///
/// A well-formed set is a starting anchor followed by `k` cubic segments of
/// three points each (control 1, control 2, end), so its length is `1 + 3k`.
/// Malformed sets can still be constructed; the path builder rejects them.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ControlPointSet {
    points: Vec<Point>,
}

impl ControlPointSet {
    /// Wrap an ordered list of points.
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Build a set from `(x, y)` pairs, as glyph tables store them.
    pub fn from_pairs(pairs: &[(f64, f64)]) -> Self {
        Self {
            points: pairs.iter().copied().map(Point::from).collect(),
        }
    }

    /// Number of points in the set.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Check the `1 + 3k` length invariant.
    #[inline]
    pub fn is_well_formed(&self) -> bool {
        !self.points.is_empty() && (self.points.len() - 1) % 3 == 0
    }

    /// Number of cubic segments, or `None` for a malformed set.
    pub fn segment_count(&self) -> Option<usize> {
        self.is_well_formed().then(|| (self.points.len() - 1) / 3)
    }

    /// Borrow the points in order.
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Get the point at `index`.
    #[inline]
    pub fn get(&self, index: usize) -> Option<Point> {
        self.points.get(index).copied()
    }

    /// Check whether every point lies inside the unit square.
    pub fn within_unit_square(&self) -> bool {
        self.points
            .iter()
            .all(|p| (0.0..=1.0).contains(&p.x) && (0.0..=1.0).contains(&p.y))
    }
}

impl From<Vec<Point>> for ControlPointSet {
    fn from(points: Vec<Point>) -> Self {
        Self::new(points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_well_formed_lengths() {
        let one = ControlPointSet::from_pairs(&[(0.0, 0.0)]);
        assert!(one.is_well_formed());
        assert_eq!(one.segment_count(), Some(0));

        let four = ControlPointSet::from_pairs(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)]);
        assert!(four.is_well_formed());
        assert_eq!(four.segment_count(), Some(1));

        let three = ControlPointSet::from_pairs(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0)]);
        assert!(!three.is_well_formed());
        assert_eq!(three.segment_count(), None);

        assert!(!ControlPointSet::default().is_well_formed());
    }

    #[test]
    fn test_point_lerp() {
        let a = Point::new(0.0, 1.0);
        let b = Point::new(1.0, 0.0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 0.5), Point::new(0.5, 0.5));
        // Extrapolation is allowed
        assert_eq!(a.lerp(b, 2.0), Point::new(2.0, -1.0));
    }

    #[test]
    fn test_within_unit_square() {
        let inside = ControlPointSet::from_pairs(&[(0.0, 0.0), (1.0, 1.0)]);
        assert!(inside.within_unit_square());

        let outside = ControlPointSet::from_pairs(&[(0.0, 1.2)]);
        assert!(!outside.within_unit_square());
    }
}
