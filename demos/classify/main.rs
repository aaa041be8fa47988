//! Segsect demo: classifies a few segment pairs and runs a point-in-polygon
//! query on a concave polygon.
//!
//! Usage:
//! ```text
//! cargo run --example classify
//! RUST_LOG=segsect=trace cargo run --example classify
//! ```

use segsect::operations::query::PointInPolygon;
use segsect::{classify, Point};
use tracing::info;

fn main() -> segsect::Result<()> {
    // Default: WARN for everything, INFO for segsect. RUST_LOG replaces the default.
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn,classify=info,segsect=info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let pairs = [
        ("skew", [(1.0, 4.0), (4.0, 1.0), (2.0, 1.0), (4.0, 3.0)]),
        ("parallel", [(1.0, 3.0), (4.0, 4.0), (1.0, 1.0), (4.0, 2.0)]),
        ("sub-segment", [(1.0, 2.0), (4.0, 2.0), (2.0, 2.0), (5.0, 2.0)]),
        ("end to end", [(1.0, 1.0), (2.0, 2.0), (2.0, 2.0), (3.0, 3.0)]),
        ("point on segment", [(2.0, 2.0), (2.0, 2.0), (1.0, 1.0), (3.0, 3.0)]),
    ];
    for (name, [u1, u2, v1, v2]) in pairs {
        let result = classify(
            Point::new(u1.0, u1.1),
            Point::new(u2.0, u2.1),
            Point::new(v1.0, v1.1),
            Point::new(v2.0, v2.1),
        );
        info!(name, ?result, "classified");
    }

    let polygon = [
        Point::new(460.0, 180.0),
        Point::new(400.0, 240.0),
        Point::new(860.0, 240.0),
        Point::new(860.0, 280.0),
        Point::new(400.0, 280.0),
        Point::new(400.0, 400.0),
        Point::new(240.0, 320.0),
        Point::new(240.0, 200.0),
        Point::new(400.0, 120.0),
    ];
    for q in [Point::new(300.0, 200.0), Point::new(600.0, 200.0), Point::new(800.0, 260.0)] {
        let inside = PointInPolygon::new(&polygon, q).execute()?;
        info!(x = q.x, y = q.y, inside, "point in polygon");
    }
    Ok(())
}
