//! Broad-phase sweep-and-prune over padded bounding boxes.
//!
//! Boxes are sorted once by their lower x bound; a forward scan then collects
//! candidate pairs and stops early as soon as the next box starts past the
//! current box's upper x bound. The surviving pairs are a cheap superset of
//! the true overlaps and go on to the narrow phase.

use crate::geometry::Polygon2D;
use overmap_core::geometry::{Geometry, Geometry2DExt};
use overmap_core::transform::AABB2D;

/// Default padding applied to each bounding-box side.
///
/// Guards against missing overlaps that are exactly tangent under floating
/// rounding. Callers with other coordinate scales can tune this through
/// [`Config::with_tolerance`](crate::Config::with_tolerance).
pub const DEFAULT_TOLERANCE: f64 = 1e-6;

/// An entry in the broad-phase sweep.
///
/// Refers back to the source polygon by its position in the caller's slice
/// instead of owning a copy, so geometrically identical polygons keep
/// distinct identities.
#[derive(Debug, Clone)]
pub struct SweepEntry2D {
    /// Position of the source polygon in the caller's slice.
    pub index: usize,
    /// Bounding box padded by the tolerance.
    pub aabb: AABB2D<f64>,
}

impl SweepEntry2D {
    /// Creates an entry for `polygon`, padding the box outward by `tolerance`
    /// on all four sides. An empty polygon yields the unpadded zero-size box
    /// at the origin.
    pub fn new(index: usize, polygon: &Polygon2D, tolerance: f64) -> Self {
        let aabb = if polygon.is_empty() {
            AABB2D::degenerate()
        } else {
            polygon.aabb_2d().expanded(tolerance)
        };
        Self { index, aabb }
    }
}

/// Builds one sweep entry per polygon (1:1 with the input) and sorts them
/// ascending by the lower x bound.
///
/// The sort order is the precondition for [`candidate_pairs`].
pub fn build_sweep_entries(polygons: &[Polygon2D], tolerance: f64) -> Vec<SweepEntry2D> {
    let mut entries: Vec<SweepEntry2D> = polygons
        .iter()
        .enumerate()
        .map(|(index, polygon)| SweepEntry2D::new(index, polygon, tolerance))
        .collect();

    entries.sort_by(|a, b| {
        a.aabb
            .min_x
            .partial_cmp(&b.aabb.min_x)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    entries
}

/// Sweep-and-prune candidate discovery.
///
/// For each sorted position, returns the sorted positions of the other
/// entries whose padded boxes overlap it. Registration is symmetric: if j is
/// a candidate of i, then i is a candidate of j.
pub fn candidate_pairs(entries: &[SweepEntry2D]) -> Vec<Vec<usize>> {
    let n = entries.len();
    let mut candidates = vec![Vec::new(); n];

    for i in 0..n {
        for j in (i + 1)..n {
            // Sort invariant: every later entry starts even further right,
            // so the scan stops at the first gap on x.
            if entries[j].aabb.min_x > entries[i].aabb.max_x {
                break;
            }

            if !entries[i].aabb.intersects(&entries[j].aabb) {
                continue;
            }

            candidates[i].push(j);
            candidates[j].push(i);
        }
    }

    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn square_at(id: &str, x: f64, y: f64, size: f64) -> Polygon2D {
        Polygon2D::new(id).with_polygon(vec![
            (x, y),
            (x + size, y),
            (x + size, y + size),
            (x, y + size),
        ])
    }

    /// Brute-force pairwise AABB comparison, as a reference for the sweep.
    fn brute_force_pairs(entries: &[SweepEntry2D]) -> BTreeSet<(usize, usize)> {
        let mut pairs = BTreeSet::new();
        for i in 0..entries.len() {
            for j in (i + 1)..entries.len() {
                if entries[i].aabb.intersects(&entries[j].aabb) {
                    pairs.insert((entries[i].index.min(entries[j].index), entries[i].index.max(entries[j].index)));
                }
            }
        }
        pairs
    }

    fn sweep_pairs(entries: &[SweepEntry2D]) -> BTreeSet<(usize, usize)> {
        let mut pairs = BTreeSet::new();
        for (pos, cands) in candidate_pairs(entries).iter().enumerate() {
            for &other in cands {
                let a = entries[pos].index;
                let b = entries[other].index;
                pairs.insert((a.min(b), a.max(b)));
            }
        }
        pairs
    }

    #[test]
    fn test_entries_sorted_by_min_x() {
        let polygons = vec![
            square_at("far", 100.0, 0.0, 5.0),
            square_at("near", -3.0, 0.0, 5.0),
            square_at("mid", 40.0, 0.0, 5.0),
        ];
        let entries = build_sweep_entries(&polygons, DEFAULT_TOLERANCE);

        assert_eq!(entries.len(), 3);
        assert!(entries.windows(2).all(|w| w[0].aabb.min_x <= w[1].aabb.min_x));
        assert_eq!(entries[0].index, 1);
        assert_eq!(entries[2].index, 0);
    }

    #[test]
    fn test_candidates_match_brute_force() {
        let polygons = vec![
            square_at("a", 0.0, 0.0, 10.0),
            square_at("b", 5.0, 5.0, 10.0),
            square_at("c", 30.0, 0.0, 10.0),
            square_at("d", 35.0, 5.0, 10.0),
            square_at("e", 8.0, 40.0, 10.0),
            square_at("f", -20.0, -20.0, 15.0),
        ];
        let entries = build_sweep_entries(&polygons, DEFAULT_TOLERANCE);
        assert_eq!(sweep_pairs(&entries), brute_force_pairs(&entries));
    }

    #[test]
    fn test_registration_is_symmetric() {
        let polygons = vec![
            square_at("a", 0.0, 0.0, 10.0),
            square_at("b", 5.0, 5.0, 10.0),
            square_at("c", 7.0, -3.0, 10.0),
        ];
        let entries = build_sweep_entries(&polygons, DEFAULT_TOLERANCE);
        let candidates = candidate_pairs(&entries);

        for (pos, cands) in candidates.iter().enumerate() {
            for &other in cands {
                assert!(candidates[other].contains(&pos));
            }
        }
    }

    #[test]
    fn test_x_overlap_but_y_disjoint_is_rejected() {
        let polygons = vec![
            square_at("low", 0.0, 0.0, 10.0),
            square_at("high", 2.0, 50.0, 10.0),
        ];
        let entries = build_sweep_entries(&polygons, DEFAULT_TOLERANCE);
        let candidates = candidate_pairs(&entries);
        assert!(candidates.iter().all(Vec::is_empty));
    }

    #[test]
    fn test_tangent_boxes_survive_with_padding() {
        // Touching exactly at x = 10; the padding keeps the pair alive.
        let polygons = vec![
            square_at("left", 0.0, 0.0, 10.0),
            square_at("right", 10.0, 0.0, 10.0),
        ];
        let entries = build_sweep_entries(&polygons, DEFAULT_TOLERANCE);
        let candidates = candidate_pairs(&entries);
        assert_eq!(candidates[0], vec![1]);
        assert_eq!(candidates[1], vec![0]);
    }

    #[test]
    fn test_empty_polygon_gets_degenerate_box() {
        let empty = Polygon2D::new("empty");
        let entry = SweepEntry2D::new(0, &empty, DEFAULT_TOLERANCE);
        assert!(entry.aabb.is_degenerate());
        assert_eq!(entry.aabb.min_x, 0.0);
    }

    #[test]
    fn test_no_polygons() {
        let entries = build_sweep_entries(&[], DEFAULT_TOLERANCE);
        assert!(entries.is_empty());
        assert!(candidate_pairs(&entries).is_empty());
    }
}
