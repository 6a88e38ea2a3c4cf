//! Drive a glass button through a full press cycle with a scripted clock.
//!
//! Run with `RUST_LOG=debug` to watch the cache and state machine work:
//!
//! ```sh
//! RUST_LOG=debug cargo run -p vitro_widgets --example button_press
//! ```

use std::time::Duration;
use vitro_core::{Color, Point, Rect};
use vitro_surface::{GlassConfig, GlassContext, RenderCaps};
use vitro_widgets::GlassButton;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = GlassConfig::from_toml_str(
        r#"
        base_duration_ms = 250
        material = "ultra-thin"
        "#,
    )?;

    let ctx = GlassContext::with_config(
        RenderCaps {
            continuous_corners: true,
            native_glass: false,
        },
        config,
    );

    let mut button = GlassButton::new(&ctx)
        .tint(Color::from_hex(0x4A90D9))
        .on_press(|| println!("button pressed!"));
    button.set_bounds(Rect::new(0.0, 0.0, 120.0, 44.0));

    // Touch down, hold a few frames, release inside
    button.press_began(Point::new(32.0, 20.0));
    step(&ctx, &mut button, 8);

    println!(
        "held: scale {:.3}, highlight {:.2}",
        button.surface().scale(),
        button.surface().highlight_opacity()
    );

    button.press_ended(true);
    step(&ctx, &mut button, 20);

    println!(
        "settled: scale {:.1}, highlight {:.1}, state {:?}",
        button.surface().scale(),
        button.surface().highlight_opacity(),
        button.state()
    );

    Ok(())
}

fn step(ctx: &GlassContext, button: &mut GlassButton, frames: usize) {
    for _ in 0..frames {
        ctx.advance(Duration::from_millis(16));
        button.update();
    }
}
