//! Scene inventory
//!
//! Builds the primitives a small scene is assembled from (a forest of
//! conifers, a helicopter, a ground field, a lake and a sky dome) and logs what
//! a renderer would be asked to draw each frame.
//!
//! Run with `RUST_LOG=debug cargo run --example scene_inventory` to also see
//! every generated mesh.

use anyhow::{Context, Result};
use geoprim::prelude::*;

/// A conifer: cone trunk plus a crown of stacked seven-sided pyramids.
fn tree(trunk_radius: f32, trunk_height: f32, crown_height: f32, layers: u32) -> Result<Vec<Primitive>> {
    let mut parts: Vec<Primitive> = vec![Cone::new(trunk_radius, trunk_height, 20)
        .context("tree trunk")?
        .into()];

    let layer_height = crown_height / layers as f32;
    for i in 0..layers {
        let size = trunk_radius * (3.0 - i as f32 * 0.7);
        let layer = Pyramid::new(size, layer_height, 7)
            .with_context(|| format!("crown layer {i} (size {size})"))?;
        parts.push(layer.into());
    }
    Ok(parts)
}

fn helicopter() -> Result<Vec<Primitive>> {
    let mut rotor = Plane::new(1)?;
    rotor.set_line_mode();

    Ok(vec![
        Sphere::new(20, 20).context("helicopter body")?.into(),
        Cone::new(0.5, 5.0, 20).context("helicopter tail")?.into(),
        rotor.into(),
        Plane::new(1)?.into(),
        Plane::new(1)?.into(),
        Cone::new(0.5, 1.0, 10).context("water bucket")?.into(),
    ])
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut scene: Vec<(&str, Primitive)> = Vec::new();

    scene.push((
        "field",
        Plane::with_texture_window(1, TextureWindow::tiled(24.0, 24.0))?.into(),
    ));
    scene.push(("lake", Plane::new(30)?.into()));
    scene.push(("panorama", Sphere::new(40, 40)?.into()));

    for part in helicopter()? {
        scene.push(("helicopter", part));
    }
    for row in 0..5 {
        for col in 0..6 {
            let variation = (row * 6 + col) as f32 * 0.01;
            for part in tree(0.4 + variation, 2.0, 4.0 + variation * 10.0, 3)? {
                scene.push(("forest", part));
            }
        }
    }

    let mut frame = DrawList::new();
    for (group, primitive) in &scene {
        log::debug!("{group}: {}", primitive.kind());
        primitive.display(&mut frame);
    }

    log::info!(
        "{} draw calls, {} vertices, {} indices, {} primitives",
        frame.len(),
        frame.total_vertices(),
        frame.total_indices(),
        frame.total_primitives()
    );
    for kind in ["plane", "cone", "pyramid", "sphere"] {
        let (count, vertices) = scene
            .iter()
            .filter(|(_, primitive)| primitive.kind() == kind)
            .fold((0, 0), |(count, vertices), (_, primitive)| {
                (count + 1, vertices + primitive.mesh().vertex_count())
            });
        log::info!("{kind:>8}: {count:>3} instances, {vertices:>6} vertices");
    }

    Ok(())
}
