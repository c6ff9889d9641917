//! Split demo: a draggable splitter with a scrollable list on the right.
//!
//! Drag the bar between the panes with the mouse, scroll the list with the
//! wheel, press ESC or `q` to exit. Set `RUST_LOG=panecraft=debug` to log
//! into `split_demo.log`.

use panecraft::{
    Axis, DynamicBox, Engine, FixedContainer, InputEvent, KeyCode, Portal, PortalConfig,
    Positioning, Rect, Rgb, Splitter, SplitterConfig, UiNode,
};
use std::fs::File;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

fn init_logging() -> std::io::Result<()> {
    // stderr belongs to the terminal in raw mode
    if std::env::var_os("RUST_LOG").is_none() {
        return Ok(());
    }
    let file = File::create("split_demo.log")?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn build_tree(width: i32, height: i32) -> Splitter {
    let sidebar = FixedContainer::new(Rect::ZERO)
        .with_fill(Rgb::new(30, 30, 50))
        .with_label(" drag the bar ", Rgb::new(220, 220, 120));

    let mut list = DynamicBox::new(Axis::Vertical);
    for i in 0..100 {
        let shade = if i % 2 == 0 { 36 } else { 44 };
        let row = FixedContainer::new(Rect::new(0, 0, 40, 1))
            .with_fill(Rgb::new(shade, shade, shade))
            .with_label(format!(" line {i:>3}"), Rgb::WHITE);
        list.add_child(Box::new(row), Positioning::Dynamic);
    }
    let portal = Portal::new(Rect::ZERO, PortalConfig::default()).with_child(Box::new(list));

    Splitter::new(
        Rect::new(0, 0, width, height),
        SplitterConfig {
            axis: Axis::Horizontal,
            split_percentage: 0.3,
            split_region_pixels: 1.0,
        },
        Box::new(sidebar),
        Box::new(portal),
    )
}

fn main() -> std::io::Result<()> {
    init_logging()?;

    let mut engine = Engine::new()?;
    let size = engine.size();
    let mut root = build_tree(size.width, size.height);
    tracing::info!(?size, "split demo started");

    while engine.is_running() {
        engine.frame(&mut root)?;

        let quit = engine.events().iter().any(|event| {
            matches!(
                event,
                InputEvent::Key {
                    code: KeyCode::Esc | KeyCode::Char('q'),
                    ..
                }
            )
        });
        if quit {
            engine.stop();
        }
    }

    tracing::info!(
        frames = engine.frame_count(),
        split = root.split_percentage(),
        bounds = ?root.world_rect(),
        "split demo finished"
    );
    Ok(())
}
