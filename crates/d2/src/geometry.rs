//! 2D polygon geometry.

use geo::{Area, Centroid, Coord, LineString, Polygon as GeoPolygon};
use overmap_core::geometry::{Geometry, Geometry2DExt, GeometryId};
use overmap_core::transform::{Transform2D, AABB2D};
use overmap_core::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A simple 2D polygon with a label.
///
/// The exterior ring is implicitly closed: the last vertex connects back to
/// the first. Simplicity (absence of self-intersections) is not validated;
/// callers are trusted to supply simple rings. A polygon with no vertices is
/// a valid but degenerate entity that overlaps nothing.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Polygon2D {
    /// Unique identifier, used for reporting only.
    id: GeometryId,

    /// Exterior ring vertices, implicitly closed.
    exterior: Vec<(f64, f64)>,

    /// Cached area.
    #[cfg_attr(feature = "serde", serde(skip))]
    cached_area: Option<f64>,
}

impl Polygon2D {
    /// Creates a new empty polygon with the given ID.
    pub fn new(id: impl Into<GeometryId>) -> Self {
        Self {
            id: id.into(),
            exterior: Vec::new(),
            cached_area: None,
        }
    }

    /// Sets the exterior ring from a list of (x, y) vertices.
    pub fn with_polygon(mut self, vertices: Vec<(f64, f64)>) -> Self {
        self.exterior = vertices;
        self.cached_area = None;
        self
    }

    /// Creates a polygon by zipping separate x and y coordinate sequences.
    ///
    /// The two sequences must have equal length; a mismatch is a fatal
    /// [`Error::InvalidGeometry`]. Zero vertices are accepted (with a
    /// warning), producing a degenerate polygon that overlaps nothing.
    pub fn from_coords(id: impl Into<GeometryId>, xs: &[f64], ys: &[f64]) -> Result<Self> {
        let id = id.into();

        if xs.len() != ys.len() {
            return Err(Error::InvalidGeometry(format!(
                "Polygon '{}': x and y coordinate sequences have different lengths ({} vs {})",
                id,
                xs.len(),
                ys.len()
            )));
        }

        if xs.is_empty() {
            log::warn!("Polygon '{}' has no vertices", id);
        }

        let vertices = xs.iter().zip(ys).map(|(&x, &y)| (x, y)).collect();
        Ok(Self::new(id).with_polygon(vertices))
    }

    /// Creates a rectangular polygon with its lower-left corner at the origin.
    pub fn rectangle(id: impl Into<GeometryId>, width: f64, height: f64) -> Self {
        let mut polygon = Self::new(id).with_polygon(vec![
            (0.0, 0.0),
            (width, 0.0),
            (width, height),
            (0.0, height),
        ]);
        polygon.cached_area = Some(width * height);
        polygon
    }

    /// Returns the exterior vertices.
    pub fn exterior(&self) -> &[(f64, f64)] {
        &self.exterior
    }

    /// Returns the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.exterior.len()
    }

    /// Ray-casting (crossing-number) point-in-polygon test.
    ///
    /// Casts a horizontal ray from the point and counts the parity of ring
    /// edge crossings; odd parity means inside. Points exactly on an edge are
    /// classified by floating-point rounding, not by an exact rule.
    pub fn contains_point(&self, point: (f64, f64)) -> bool {
        let n = self.exterior.len();
        if n == 0 {
            return false;
        }

        let (px, py) = point;
        let mut inside = false;

        let mut j = n - 1;
        for i in 0..n {
            let (xi, yi) = self.exterior[i];
            let (xj, yj) = self.exterior[j];

            if ((yi > py) != (yj > py)) && (px < (xj - xi) * (py - yi) / (yj - yi) + xi) {
                inside = !inside;
            }
            j = i;
        }

        inside
    }

    /// One-directional overlap test: true iff any vertex of `other` lies
    /// inside `self`.
    ///
    /// Sufficient but incomplete: two rings can cross edge-to-edge without
    /// either holding a vertex of the other, and this test misses that case.
    /// The detector's symmetric mode ORs both directions, which recovers the
    /// one-way vertex cases but not pure edge crossings.
    pub fn contains_any_vertex(&self, other: &Polygon2D) -> bool {
        other.exterior.iter().any(|&v| self.contains_point(v))
    }

    /// Symmetric overlap test: either polygon holds a vertex of the other.
    pub fn overlaps(&self, other: &Polygon2D) -> bool {
        self.contains_any_vertex(other) || other.contains_any_vertex(self)
    }

    /// Rotates the polygon in place about `center` by `angle` radians.
    pub fn rotate(&mut self, center: (f64, f64), angle: f64) {
        let transform = Transform2D::rotation_about(center, angle);
        for vertex in &mut self.exterior {
            *vertex = transform.apply(*vertex);
        }
        self.cached_area = None;
    }

    /// Rotates the polygon in place about `center` by an angle in degrees.
    pub fn rotate_deg(&mut self, center: (f64, f64), degrees: f64) {
        self.rotate(center, degrees.to_radians());
    }

    /// Converts to a geo crate Polygon.
    pub fn to_geo_polygon(&self) -> GeoPolygon<f64> {
        let exterior = LineString::from(
            self.exterior
                .iter()
                .map(|&(x, y)| Coord { x, y })
                .collect::<Vec<_>>(),
        );
        GeoPolygon::new(exterior, Vec::new())
    }

    fn calculate_area(&self) -> f64 {
        self.to_geo_polygon().unsigned_area()
    }
}

impl Geometry for Polygon2D {
    type Scalar = f64;

    fn id(&self) -> &GeometryId {
        &self.id
    }

    fn measure(&self) -> f64 {
        if let Some(area) = self.cached_area {
            area
        } else {
            self.calculate_area()
        }
    }

    fn centroid(&self) -> Vec<f64> {
        if let Some(c) = self.to_geo_polygon().centroid() {
            vec![c.x(), c.y()]
        } else {
            vec![0.0, 0.0]
        }
    }

    fn aabb_vec(&self) -> (Vec<f64>, Vec<f64>) {
        match AABB2D::from_points(&self.exterior) {
            Some(aabb) => (vec![aabb.min_x, aabb.min_y], vec![aabb.max_x, aabb.max_y]),
            None => (vec![0.0, 0.0], vec![0.0, 0.0]),
        }
    }

    fn validate(&self) -> Result<()> {
        for &(x, y) in &self.exterior {
            if !x.is_finite() || !y.is_finite() {
                return Err(Error::InvalidGeometry(format!(
                    "Polygon '{}' has a non-finite vertex coordinate",
                    self.id
                )));
            }
        }
        Ok(())
    }

    fn is_empty(&self) -> bool {
        self.exterior.is_empty()
    }
}

impl Geometry2DExt for Polygon2D {
    fn aabb_2d(&self) -> AABB2D<f64> {
        AABB2D::from_points(&self.exterior).unwrap_or_else(AABB2D::degenerate)
    }

    fn outer_ring(&self) -> &[(f64, f64)] {
        &self.exterior
    }

    fn contains_point(&self, point: (f64, f64)) -> bool {
        Polygon2D::contains_point(self, point)
    }
}
