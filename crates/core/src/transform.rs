//! 2D transform and bounding-box primitives.

use nalgebra::RealField;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box in 2D.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AABB2D<S> {
    /// Lower x bound.
    pub min_x: S,
    /// Lower y bound.
    pub min_y: S,
    /// Upper x bound.
    pub max_x: S,
    /// Upper y bound.
    pub max_y: S,
}

impl<S: RealField + Copy> AABB2D<S> {
    /// Creates a bounding box from its corner bounds.
    pub fn new(min_x: S, min_y: S, max_x: S, max_y: S) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// The zero-size box at the origin.
    ///
    /// This is what a point set with no members maps to; it has no extent
    /// and matches nothing in a narrow-phase test.
    pub fn degenerate() -> Self {
        Self::new(S::zero(), S::zero(), S::zero(), S::zero())
    }

    /// Computes the bounding box of a point set.
    ///
    /// Returns `None` for an empty slice.
    pub fn from_points(points: &[(S, S)]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut aabb = Self::new(first.0, first.1, first.0, first.1);
        for &(x, y) in rest {
            aabb.min_x = aabb.min_x.min(x);
            aabb.min_y = aabb.min_y.min(y);
            aabb.max_x = aabb.max_x.max(x);
            aabb.max_y = aabb.max_y.max(y);
        }
        Some(aabb)
    }

    /// Returns this box padded outward by `tolerance` on all four sides.
    pub fn expanded(&self, tolerance: S) -> Self {
        Self::new(
            self.min_x - tolerance,
            self.min_y - tolerance,
            self.max_x + tolerance,
            self.max_y + tolerance,
        )
    }

    /// Width of the box.
    pub fn width(&self) -> S {
        self.max_x - self.min_x
    }

    /// Height of the box.
    pub fn height(&self) -> S {
        self.max_y - self.min_y
    }

    /// Returns true if the box has no extent on either axis.
    pub fn is_degenerate(&self) -> bool {
        self.width() == S::zero() && self.height() == S::zero()
    }

    /// Full 2D box-overlap test. Touching boxes count as overlapping.
    pub fn intersects(&self, other: &Self) -> bool {
        if other.max_x < self.min_x || self.max_x < other.min_x {
            return false;
        }
        if other.max_y < self.min_y || self.max_y < other.min_y {
            return false;
        }
        true
    }

    /// Returns true if `point` lies inside the box (boundary included).
    pub fn contains_point(&self, point: (S, S)) -> bool {
        point.0 >= self.min_x
            && point.0 <= self.max_x
            && point.1 >= self.min_y
            && point.1 <= self.max_y
    }
}

/// Rigid 2D transform: rotation about the origin followed by a translation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Transform2D<S> {
    /// Rotation angle in radians.
    pub rotation: S,
    /// Translation applied after the rotation.
    pub translation: (S, S),
}

impl<S: RealField + Copy> Transform2D<S> {
    /// The identity transform.
    pub fn identity() -> Self {
        Self {
            rotation: S::zero(),
            translation: (S::zero(), S::zero()),
        }
    }

    /// A pure rotation about the origin.
    pub fn rotation(angle: S) -> Self {
        Self {
            rotation: angle,
            translation: (S::zero(), S::zero()),
        }
    }

    /// A pure translation.
    pub fn translation(dx: S, dy: S) -> Self {
        Self {
            rotation: S::zero(),
            translation: (dx, dy),
        }
    }

    /// A rotation about an arbitrary center, expressed as rotation-about-origin
    /// plus the translation `c - R·c`.
    pub fn rotation_about(center: (S, S), angle: S) -> Self {
        let cos = angle.cos();
        let sin = angle.sin();
        let (cx, cy) = center;
        Self {
            rotation: angle,
            translation: (cx - (cos * cx - sin * cy), cy - (sin * cx + cos * cy)),
        }
    }

    /// Applies the transform to a point.
    pub fn apply(&self, point: (S, S)) -> (S, S) {
        let cos = self.rotation.cos();
        let sin = self.rotation.sin();
        let (x, y) = point;
        (
            cos * x - sin * y + self.translation.0,
            sin * x + cos * y + self.translation.1,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_aabb_from_points() {
        let aabb = AABB2D::from_points(&[(1.0, 5.0), (-2.0, 3.0), (4.0, -1.0)]).unwrap();
        assert_relative_eq!(aabb.min_x, -2.0);
        assert_relative_eq!(aabb.min_y, -1.0);
        assert_relative_eq!(aabb.max_x, 4.0);
        assert_relative_eq!(aabb.max_y, 5.0);
    }

    #[test]
    fn test_aabb_empty_points() {
        assert!(AABB2D::<f64>::from_points(&[]).is_none());
    }

    #[test]
    fn test_aabb_degenerate() {
        let aabb = AABB2D::<f64>::degenerate();
        assert!(aabb.is_degenerate());
        assert_relative_eq!(aabb.width(), 0.0);
    }

    #[test]
    fn test_aabb_intersects_touching() {
        let a = AABB2D::new(0.0, 0.0, 1.0, 1.0);
        let b = AABB2D::new(1.0, 0.0, 2.0, 1.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_aabb_disjoint_on_y() {
        let a = AABB2D::new(0.0, 0.0, 1.0, 1.0);
        let b = AABB2D::new(0.0, 2.0, 1.0, 3.0);
        assert!(!a.intersects(&b));
    }

    #[test]
    fn test_expanded() {
        let aabb = AABB2D::new(0.0, 0.0, 1.0, 1.0).expanded(0.5);
        assert_relative_eq!(aabb.min_x, -0.5);
        assert_relative_eq!(aabb.max_y, 1.5);
    }

    #[test]
    fn test_aabb_contains_point() {
        let aabb = AABB2D::new(0.0, 0.0, 2.0, 2.0);
        assert!(aabb.contains_point((1.0, 1.0)));
        assert!(aabb.contains_point((0.0, 2.0)));
        assert!(!aabb.contains_point((3.0, 1.0)));
    }

    #[test]
    fn test_translation() {
        let t = Transform2D::translation(2.0, -3.0);
        assert_eq!(t.apply((1.0, 1.0)), (3.0, -2.0));
    }

    #[test]
    fn test_rotation_about_center_keeps_center_fixed() {
        let t = Transform2D::rotation_about((3.0, 4.0), 1.2);
        let (x, y) = t.apply((3.0, 4.0));
        assert_relative_eq!(x, 3.0, epsilon = 1e-12);
        assert_relative_eq!(y, 4.0, epsilon = 1e-12);
    }

    #[test]
    fn test_rotation_quarter_turn() {
        let t = Transform2D::rotation(std::f64::consts::FRAC_PI_2);
        let (x, y) = t.apply((1.0, 0.0));
        assert_relative_eq!(x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(y, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_identity() {
        let t = Transform2D::<f64>::identity();
        assert_eq!(t.apply((2.5, -1.5)), (2.5, -1.5));
    }
}
