//! Overlap report for four rotated quadrilaterals.
//!
//! Builds four overlapping quads, rotates each 25 degrees about the origin,
//! and prints which polygons intersect which. Run with:
//!
//! ```sh
//! cargo run --example overlap_report
//! ```

use overmap_d2::{Detector2D, Polygon2D, Result};

fn main() -> Result<()> {
    env_logger::init();

    let mut polygons = vec![
        Polygon2D::from_coords("A", &[0.0, 10.0, 10.0, 0.0], &[0.0, 0.0, 10.0, 10.0])?,
        Polygon2D::from_coords("B", &[5.0, 20.0, 20.0, 5.0], &[5.0, 5.0, -5.0, -5.0])?,
        Polygon2D::from_coords("C", &[18.0, 25.0, 25.0, 18.0], &[0.0, 0.0, -10.0, -10.0])?,
        Polygon2D::from_coords("D", &[19.0, 30.0, 30.0, 19.0], &[-2.0, -2.0, 10.0, 10.0])?,
    ];

    for polygon in &mut polygons {
        polygon.rotate_deg((0.0, 0.0), 25.0);
    }

    let map = Detector2D::default_config().detect(&polygons)?;
    print!("{}", map);

    Ok(())
}
