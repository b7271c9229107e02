//! Collision demo
//!
//! Loads a scene of named shapes, checks every pair once and logs the hits.
//!
//! ```text
//! collision_demo [settings.(toml|ron)] [scene.ron]
//! ```

mod scene;

use collision2d::foundation::logging;
use collision2d::prelude::*;

use scene::{colliding_pairs, default_scene, load_scene, DemoError};

fn run() -> Result<(), DemoError> {
    let mut args = std::env::args().skip(1);

    let settings = match args.next() {
        Some(path) => CollisionSettings::load_validated(&path)?,
        None => CollisionSettings::default(),
    };
    let scene = match args.next() {
        Some(path) => load_scene(&path)?,
        None => default_scene(),
    };

    log::info!(
        "Checking {} shapes (eps {}, line mode {:?})",
        scene.len(),
        settings.default_epsilon,
        settings.line_mode
    );

    let collider = Collider::with_settings(settings);
    let hits = colliding_pairs(&collider, &scene)?;
    for (a, b) in &hits {
        log::info!("  {a} <-> {b}");
    }

    let pairs = scene.len() * scene.len().saturating_sub(1) / 2;
    log::info!("{} of {pairs} pairs collide", hits.len());
    Ok(())
}

fn main() {
    logging::init_with_level(log::LevelFilter::Info);

    if let Err(e) = run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}
