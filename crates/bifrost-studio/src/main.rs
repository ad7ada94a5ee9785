//! Demo front end: generates code for the default gradient pair and prints
//! every output format.

mod logging;

use anyhow::{Context, Result};
use bifrost_core::{
    generate, preview_layers, BlendMode, ColorStop, OverlayGradient, PrimaryGradient,
};

fn main() -> Result<()> {
    logging::init_logging();

    let (primary, overlay) = demo_gradients()?;
    log::info!(
        "generating code: primary {}deg / overlay {}deg, blend {}, opacity {}",
        primary.angle,
        overlay.angle,
        overlay.blend_mode,
        overlay.opacity,
    );

    let code = generate(&primary, &overlay).context("code generation failed")?;
    let layers = preview_layers(&primary, &overlay).context("preview assembly failed")?;

    println!();
    println!("  ╔════════════════════════════════════════╗");
    println!("  ║        BIFROST GRADIENT STUDIO         ║");
    println!("  ║   two layers in, four snippets out     ║");
    println!("  ╚════════════════════════════════════════╝");

    section("Tailwind", &code.tailwind_css);
    section("CSS (hex)", &code.css);
    section("CSS (rgb)", &code.rgb);
    section("CSS (hsl)", &code.hsl);

    println!();
    println!("  ── Preview layers ────────────────────────");
    println!("  base     {}", layers.primary_image);
    println!("  overlay  {}", layers.overlay_image);
    println!(
        "  compose  mix-blend-mode: {}; opacity: {}",
        layers.blend_mode, layers.overlay_opacity
    );
    println!();

    Ok(())
}

fn section(title: &str, body: &str) {
    println!();
    println!("  ── {title} {}", "─".repeat(38_usize.saturating_sub(title.len())));
    for line in body.lines() {
        println!("  {line}");
    }
}

/// The default design: a deep slate→purple→fuchsia base under a fuchsia→sky
/// overlay, the same pair the visual editor opens with.
fn demo_gradients() -> Result<(PrimaryGradient, OverlayGradient)> {
    let stop = |id, name: &str, position| {
        ColorStop::from_palette(id, name, position)
            .with_context(|| format!("palette entry missing: {name}"))
    };

    let primary = PrimaryGradient::new(
        61.0,
        vec![
            stop(1, "slate-950", 0)?,
            stop(2, "purple-950", 50)?,
            stop(3, "fuchsia-900", 100)?,
        ],
    );

    let overlay = OverlayGradient::new(
        188.0,
        BlendMode::Overlay,
        1.0,
        vec![stop(1, "fuchsia-600", 0)?, stop(2, "sky-700", 100)?],
    );

    Ok((primary, overlay))
}
