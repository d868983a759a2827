//! # Overmap 2D
//!
//! 2D polygon overlap detection for the Overmap engine.
//!
//! Given a batch of simple polygons, the detector reports which pairs
//! overlap as per-polygon adjacency lists. The pipeline is a broad-phase
//! sweep-and-prune over epsilon-padded bounding boxes followed by a
//! narrow-phase ray-casting containment test on the surviving pairs.
//!
//! ## Quick Start
//!
//! ```rust
//! use overmap_d2::{Detector2D, Polygon2D};
//!
//! let a = Polygon2D::rectangle("A", 10.0, 10.0);
//! let b = Polygon2D::new("B").with_polygon(vec![
//!     (5.0, 5.0),
//!     (15.0, 5.0),
//!     (15.0, 15.0),
//!     (5.0, 15.0),
//! ]);
//!
//! let map = Detector2D::default_config().detect(&[a, b]).unwrap();
//! assert_eq!(map.entry(0), &[0, 1]);
//! assert!(map.overlaps(0, 1));
//! println!("{}", map);
//! ```
//!
//! ## Polygon Creation
//!
//! ```rust
//! use overmap_d2::Polygon2D;
//!
//! // From separate coordinate sequences (validated for equal length)
//! let quad = Polygon2D::from_coords(
//!     "Q",
//!     &[0.0, 10.0, 10.0, 0.0],
//!     &[0.0, 0.0, 10.0, 10.0],
//! ).unwrap();
//!
//! // Rigid rotation about an arbitrary center
//! let mut rotated = quad.clone();
//! rotated.rotate_deg((0.0, 0.0), 25.0);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization support

pub mod detector;
pub mod geometry;
pub mod overlap_map;
pub mod sweep;

// Re-exports
pub use detector::{Config, Detector2D, OverlapTest};
pub use geometry::Polygon2D;
pub use overlap_map::OverlapMap;
pub use sweep::{build_sweep_entries, candidate_pairs, SweepEntry2D, DEFAULT_TOLERANCE};
pub use overmap_core::{
    Error, Geometry, Geometry2DExt, GeometryId, Result, Transform2D, AABB2D,
};
