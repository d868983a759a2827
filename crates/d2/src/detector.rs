//! Narrow-phase confirmation and overlap-map assembly.

use crate::geometry::Polygon2D;
use crate::overlap_map::OverlapMap;
use crate::sweep::{build_sweep_entries, candidate_pairs, DEFAULT_TOLERANCE};
use overmap_core::geometry::Geometry;
use overmap_core::Result;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Narrow-phase confirmation policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum OverlapTest {
    /// Test only the subject polygon against the candidate's vertices.
    ///
    /// This is asymmetric: A may list B while B does not list A. Offered for
    /// callers that want the cheaper single-direction behavior.
    Directed,

    /// Test both directions and OR the results (default).
    ///
    /// Guarantees A lists B iff B lists A. Pure edge crossings with no vertex
    /// of either polygon inside the other remain undetected in both modes;
    /// that is a limitation of the vertex-containment test itself.
    #[default]
    Symmetric,
}

/// Configuration for a detection pass.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    /// Bounding-box padding applied on all four sides during the broad phase.
    pub tolerance: f64,

    /// Narrow-phase confirmation policy.
    pub test: OverlapTest,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            test: OverlapTest::default(),
        }
    }
}

impl Config {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the bounding-box padding tolerance.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the narrow-phase confirmation policy.
    pub fn with_test(mut self, test: OverlapTest) -> Self {
        self.test = test;
        self
    }
}

/// 2D polygon overlap detector.
///
/// One [`detect`](Detector2D::detect) call processes one fixed input batch
/// and returns a complete result; no state is carried across calls.
pub struct Detector2D {
    config: Config,
}

impl Detector2D {
    /// Creates a new detector with the given configuration.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Creates a detector with default configuration.
    pub fn default_config() -> Self {
        Self::new(Config::default())
    }

    /// Returns the detector configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Runs the full detection pipeline over `polygons`.
    ///
    /// Broad phase: padded bounding boxes, sorted by lower x bound, pruned by
    /// a forward sweep. Narrow phase: each surviving candidate pair is
    /// confirmed by vertex containment per the configured [`OverlapTest`].
    ///
    /// The returned map is indexed by the caller's input order; entry `i`
    /// starts with `i` itself, followed by confirmed peers in discovery
    /// order. A singleton entry means the polygon overlaps nothing.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidGeometry`](overmap_core::Error::InvalidGeometry)
    /// if any polygon fails validation (non-finite coordinates). Empty
    /// polygons are valid; they are reported with a warning and end up with a
    /// singleton entry.
    pub fn detect(&self, polygons: &[Polygon2D]) -> Result<OverlapMap> {
        for polygon in polygons {
            polygon.validate()?;
            if polygon.is_empty() {
                log::warn!(
                    "Polygon '{}' has no vertices and cannot overlap anything",
                    polygon.id()
                );
            }
        }

        let entries = build_sweep_entries(polygons, self.config.tolerance);
        let box_candidates = candidate_pairs(&entries);
        let candidate_count: usize = box_candidates.iter().map(Vec::len).sum::<usize>() / 2;

        // Subjects are visited in box-sorted order, but results are keyed by
        // the caller's indices so the internal sort never leaks out.
        let mut adjacency: Vec<Vec<usize>> = (0..polygons.len()).map(|i| vec![i]).collect();
        let mut confirmed = 0usize;

        for (pos, entry) in entries.iter().enumerate() {
            let subject = &polygons[entry.index];

            for &candidate_pos in &box_candidates[pos] {
                let other_index = entries[candidate_pos].index;
                let other = &polygons[other_index];

                let hit = match self.config.test {
                    OverlapTest::Directed => subject.contains_any_vertex(other),
                    OverlapTest::Symmetric => subject.overlaps(other),
                };

                if hit {
                    adjacency[entry.index].push(other_index);
                    confirmed += 1;
                }
            }
        }

        log::debug!(
            "Detected overlaps for {} polygons: {} box candidate pairs, {} confirmed links",
            polygons.len(),
            candidate_count,
            confirmed
        );

        let ids = polygons.iter().map(|p| p.id().clone()).collect();
        Ok(OverlapMap::new(adjacency, ids))
    }
}
