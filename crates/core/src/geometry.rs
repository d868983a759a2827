//! Core geometry traits and types.

use crate::transform::AABB2D;
use crate::Result;
use nalgebra::RealField;

/// Unique identifier for a geometry.
///
/// Used for reporting only; it never enters a geometric computation.
pub type GeometryId = String;

/// Trait for geometric shapes that participate in overlap detection.
pub trait Geometry: Clone + Send + Sync {
    /// The coordinate type (f32 or f64).
    type Scalar: RealField + Copy;

    /// Returns the unique identifier for this geometry.
    fn id(&self) -> &GeometryId;

    /// Returns the area (2D) or volume (3D) of this geometry.
    fn measure(&self) -> Self::Scalar;

    /// Returns the centroid (center of mass) of this geometry.
    fn centroid(&self) -> Vec<Self::Scalar>;

    /// Returns the axis-aligned bounding box as (min, max) corners.
    fn aabb_vec(&self) -> (Vec<Self::Scalar>, Vec<Self::Scalar>);

    /// Validates the geometry and returns an error if invalid.
    fn validate(&self) -> Result<()>;

    /// Returns true if the geometry has no vertices.
    fn is_empty(&self) -> bool {
        false
    }
}

/// Extended trait for 2D geometries.
pub trait Geometry2DExt: Geometry {
    /// Returns the 2D AABB.
    fn aabb_2d(&self) -> AABB2D<Self::Scalar>;

    /// Returns the outer boundary as a sequence of points (polygon vertices).
    fn outer_ring(&self) -> &[(Self::Scalar, Self::Scalar)];

    /// Returns true if `point` lies inside the geometry.
    fn contains_point(&self, point: (Self::Scalar, Self::Scalar)) -> bool;
}
