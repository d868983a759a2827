//! Overlap adjacency map and report rendering.

use overmap_core::geometry::GeometryId;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Adjacency of overlapping polygons, indexed by the caller's input order.
///
/// Entry `i` always starts with `i` itself, followed by the indices of its
/// confirmed overlapping peers in discovery order. A singleton entry means
/// the polygon overlaps nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OverlapMap {
    entries: Vec<Vec<usize>>,
    ids: Vec<GeometryId>,
}

impl OverlapMap {
    pub(crate) fn new(entries: Vec<Vec<usize>>, ids: Vec<GeometryId>) -> Self {
        debug_assert_eq!(entries.len(), ids.len());
        Self { entries, ids }
    }

    /// Number of polygons in the map.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the map holds no polygons.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The full adjacency entry for the polygon at `index`: itself first,
    /// then its overlapping peers.
    pub fn entry(&self, index: usize) -> &[usize] {
        &self.entries[index]
    }

    /// The overlapping peers of the polygon at `index` (self excluded).
    pub fn neighbors(&self, index: usize) -> &[usize] {
        &self.entries[index][1..]
    }

    /// The label of the polygon at `index`.
    pub fn id(&self, index: usize) -> &str {
        &self.ids[index]
    }

    /// Returns true if `b` appears in `a`'s adjacency entry.
    ///
    /// Under the symmetric confirmation policy this relation is symmetric;
    /// under the directed policy it may not be.
    pub fn overlaps(&self, a: usize, b: usize) -> bool {
        self.neighbors(a).contains(&b)
    }

    /// Iterates entries in input order as `(index, entry)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[usize])> {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, entry)| (i, entry.as_slice()))
    }

    /// Renders the human-readable overlap report, one line per polygon.
    pub fn render(&self) -> String {
        let mut out = String::new();

        for (i, entry) in self.entries.iter().enumerate() {
            if entry.len() < 2 {
                out.push_str(&format!(
                    "{} has no intersection with other polygons.\n",
                    self.ids[i]
                ));
                continue;
            }

            let peers: Vec<&str> = entry[1..].iter().map(|&j| self.ids[j].as_str()).collect();
            out.push_str(&format!(
                "{} intersects with: {}\n",
                self.ids[i],
                peers.join(", ")
            ));
        }

        out
    }
}

impl fmt::Display for OverlapMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_map() -> OverlapMap {
        OverlapMap::new(
            vec![vec![0, 1], vec![1, 0, 2], vec![2, 1], vec![3]],
            vec!["A".into(), "B".into(), "C".into(), "D".into()],
        )
    }

    #[test]
    fn test_accessors() {
        let map = sample_map();
        assert_eq!(map.len(), 4);
        assert_eq!(map.entry(1), &[1, 0, 2]);
        assert_eq!(map.neighbors(1), &[0, 2]);
        assert_eq!(map.neighbors(3), &[] as &[usize]);
        assert_eq!(map.id(2), "C");
    }

    #[test]
    fn test_overlaps() {
        let map = sample_map();
        assert!(map.overlaps(0, 1));
        assert!(map.overlaps(1, 0));
        assert!(!map.overlaps(0, 2));
        assert!(!map.overlaps(3, 0));
    }

    #[test]
    fn test_render() {
        let report = sample_map().render();
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines[0], "A intersects with: B");
        assert_eq!(lines[1], "B intersects with: A, C");
        assert_eq!(lines[2], "C intersects with: B");
        assert_eq!(lines[3], "D has no intersection with other polygons.");
    }

    #[test]
    fn test_display_matches_render() {
        let map = sample_map();
        assert_eq!(format!("{}", map), map.render());
    }
}
