//! Scores a few hand-made candidates against two no-fly zones.
//!
//! Usage:
//! ```text
//! cargo run --example evaluate
//! RUST_LOG=nofly=trace cargo run --example evaluate   # per-zone hits
//! ```

use nofly::math::Point3;
use nofly::operations::collision::CountSegmentCollisions;
use nofly::operations::evaluate::Evaluate;
use nofly::{NoflyError, UavConfig};

fn main() -> Result<(), NoflyError> {
    // Default: WARN for everything, INFO for nofly.
    // Override with RUST_LOG env var (e.g. RUST_LOG=nofly=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("nofly=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = UavConfig::from_zone_arrays(
        Point3::new(0.0, 0.0, 20.0),
        Point3::new(200.0, 0.0, 20.0),
        &[[70.0, 0.0, 60.0, 15.0], [140.0, 10.0, 40.0, 12.0]],
    )?;

    let candidates: [(&str, Vec<f64>); 3] = [
        ("straight", vec![70.0, 0.0, 20.0, 140.0, 0.0, 20.0]),
        ("detour", vec![70.0, -25.0, 20.0, 140.0, -10.0, 20.0]),
        ("climb", vec![70.0, 0.0, 70.0, 140.0, 5.0, 50.0]),
    ];

    for (name, candidate) in &candidates {
        let eval = Evaluate::new(candidate, &config);
        let breakdown = eval.breakdown()?;
        let path = eval.path()?;
        let collisions = CountSegmentCollisions::new(&path, config.zones());

        println!(
            "{name:>8}: fitness {:>9.3}  distance {:>8.3}  penalty {:>7.3}  colliding segments {}",
            breakdown.fitness,
            breakdown.total_distance,
            breakdown.collision_penalty,
            collisions.execute(),
        );
        for hit in collisions.colliding_segments() {
            println!("          segment {} enters zone {}", hit.segment, hit.zone);
        }
    }

    Ok(())
}
