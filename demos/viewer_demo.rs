//! Minimal embedding example: drive a scalar painter from synthetic events
//! and print what would reach the render surface and the info label.

use gridscope::*;

fn main() -> Result<()> {
    env_logger::init();

    // The embedding engine owns the registry and its grids.
    let mut registry = GridRegistry::new();
    let size = UVec3::new(16, 16, 8);
    let cells = (size.x * size.y * size.z) as usize;
    let values = (0..cells)
        .map(|i| ((i as f32) * 0.05).sin())
        .collect::<Vec<_>>();
    registry.register(Box::new(ScalarGrid::new("pressure", size, values)?))?;
    registry.register(Box::new(ScalarGrid::constant("density", size, 0.3)))?;

    let mut painter = SelectionPainter::scalar(
        NullSurface::default(),
        NullTextSink::default(),
        &Options::default(),
    );

    // Simulated key presses: select, bump the scale, move two slices up.
    painter.handle_event(&registry, PainterEvent::NextObject, 0);
    painter.handle_event(&registry, PainterEvent::ScaleUp, 0);
    painter.handle_event(&registry, PainterEvent::NextPlane, 0);
    painter.handle_event(&registry, PainterEvent::NextPlane, 0);

    // Frame tick: one rebuild, then paint.
    painter.update(&registry);
    painter.paint();

    println!("{}", painter.summary());
    println!(
        "emitted {} vertices ({:?})",
        painter.buffer().len(),
        painter.buffer().primitive()
    );

    let probe = painter.click_line(
        &registry,
        Vec3::new(4.5, 4.5, -1.0),
        Vec3::new(4.5, 4.5, 9.0),
    );
    println!("probe: {probe}");

    Ok(())
}
