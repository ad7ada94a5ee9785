//! Code generation: gradient descriptors in, copy-pasteable snippets out.
//!
//! Four textual renditions of the same two-layer design:
//!
//! | Output | Colors | Overlay opacity |
//! |--------|--------|-----------------|
//! | `tailwind_css` | palette tokens or literals (all-or-nothing) | `/opacity` token suffix or `rgba` |
//! | `css` | `#rrggbb` | baked hex alpha suffix |
//! | `rgb` | `rgb(...)` | baked `rgba(...)` fourth argument |
//! | `hsl` | `hsl(...)` | baked `hsla(...)` fourth argument |
//!
//! Generation is a pure function of the two descriptors: equal inputs produce
//! byte-equal outputs.

use crate::color::Rgb;
use crate::error::ValidationError;
use crate::gradient::{ColorStop, OverlayGradient, PrimaryGradient};
use crate::palette;

/// The generated snippets, safe to display and copy verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedCode {
    pub tailwind_css: String,
    pub css: String,
    pub rgb: String,
    pub hsl: String,
}

/// Generate all output formats for a primary/overlay gradient pair.
///
/// Fails only on a stop-count contract violation; every numeric field is
/// clamped or passed through rather than rejected.
pub fn generate(
    primary: &PrimaryGradient,
    overlay: &OverlayGradient,
) -> Result<GeneratedCode, ValidationError> {
    primary.validate()?;
    overlay.validate()?;

    Ok(GeneratedCode {
        tailwind_css: tailwind_css(primary, overlay),
        css: standard_css(primary, overlay, Format::Hex),
        rgb: standard_css(primary, overlay, Format::Rgb),
        hsl: standard_css(primary, overlay, Format::Hsl),
    })
}

// ── standard CSS (hex / rgb / hsl) ────────────────────────────────────────

#[derive(Copy, Clone)]
enum Format {
    Hex,
    Rgb,
    Hsl,
}

fn standard_css(primary: &PrimaryGradient, overlay: &OverlayGradient, format: Format) -> String {
    let opacity = overlay.opacity.clamp(0.0, 1.0);

    let primary_stops: Vec<String> = primary
        .color_stops
        .iter()
        .map(|s| format!("{} {}%", opaque_color(s, format), s.position))
        .collect();

    let overlay_stops: Vec<String> = overlay
        .color_stops
        .iter()
        .map(|s| format!("{} {}%", baked_color(s, opacity, format), s.position))
        .collect();

    let primary_image = format!("linear-gradient({}deg, {})", primary.angle, primary_stops.join(", "));
    let overlay_image = format!("linear-gradient({}deg, {})", overlay.angle, overlay_stops.join(", "));

    let mut css = String::from(".gradient {\n");
    css.push_str(&format!("  background-image: {primary_image}, {overlay_image};\n"));
    css.push_str(&format!("  background-blend-mode: {};\n", overlay.blend_mode));
    css.push('}');
    css
}

/// Primary stops never carry alpha.
fn opaque_color(stop: &ColorStop, format: Format) -> String {
    let color = stop.color();
    match format {
        Format::Hex => color.to_hex(),
        Format::Rgb => color.to_rgb().to_string(),
        Format::Hsl => color.to_string(),
    }
}

/// Overlay stops bake the layer opacity into the color value itself.
fn baked_color(stop: &ColorStop, opacity: f32, format: Format) -> String {
    let color = stop.color();
    match format {
        Format::Hex => format!("{}{}", color.to_hex(), alpha_suffix(opacity)),
        Format::Rgb => {
            let Rgb { r, g, b } = color.to_rgb();
            format!("rgba({r}, {g}, {b}, {opacity})")
        }
        Format::Hsl => format!("hsla({}, {}%, {}%, {opacity})", color.h, color.s, color.l),
    }
}

/// Two-digit hex alpha byte, zero-padded: 1.0 → `"ff"`, 0.0 → `"00"`.
fn alpha_suffix(opacity: f32) -> String {
    format!("{:02x}", (opacity * 255.0).round() as u8)
}

// ── Tailwind ──────────────────────────────────────────────────────────────

/// Symbolic output needs every stop of both gradients on the palette; one
/// custom stop drops the whole class string to literal form. Mixing the two
/// shapes within one gradient is never valid output.
fn tailwind_css(primary: &PrimaryGradient, overlay: &OverlayGradient) -> String {
    let symbolic_primary: Option<Vec<&str>> =
        primary.color_stops.iter().map(ColorStop::symbolic).collect();
    let symbolic_overlay: Option<Vec<&str>> =
        overlay.color_stops.iter().map(ColorStop::symbolic).collect();

    match (symbolic_primary, symbolic_overlay) {
        (Some(p), Some(o)) => tailwind_symbolic(primary, overlay, &p, &o),
        _ => tailwind_literal(primary, overlay),
    }
}

/// All-palette form: `from-/via-/to-` utilities drive the primary stops via
/// `var(--tw-gradient-stops)`; the overlay rides along as a second
/// arbitrary-value gradient of `theme(...)` tokens with the opacity baked
/// into each token.
fn tailwind_symbolic(
    primary: &PrimaryGradient,
    overlay: &OverlayGradient,
    primary_names: &[&str],
    overlay_names: &[&str],
) -> String {
    let opacity = display_f32(overlay.opacity.clamp(0.0, 1.0));

    let overlay_stops: Vec<String> = overlay
        .color_stops
        .iter()
        .zip(overlay_names)
        .map(|(s, &name)| format!("theme({}/{opacity})_{}%", palette::theme_token(name), s.position))
        .collect();

    let mut classes = vec![format!(
        "bg-[linear-gradient({}deg,var(--tw-gradient-stops)),linear-gradient({}deg,{})]",
        primary.angle,
        overlay.angle,
        overlay_stops.join(","),
    )];

    let last = primary.color_stops.len() - 1;
    for (i, (stop, name)) in primary.color_stops.iter().zip(primary_names).enumerate() {
        let prefix = if i == 0 {
            "from"
        } else if i == last {
            "to"
        } else {
            "via"
        };
        classes.push(format!("{prefix}-{name}"));
        classes.push(format!("{prefix}-{}%", stop.position));
    }

    classes.push(format!("bg-blend-{}", overlay.blend_mode));
    classes.join(" ")
}

/// Fallback form: one arbitrary-value `background-image` utility holding both
/// gradients as literal colors. Underscores keep the class parseable.
fn tailwind_literal(primary: &PrimaryGradient, overlay: &OverlayGradient) -> String {
    let opacity = display_f32(overlay.opacity.clamp(0.0, 1.0));

    let primary_stops: Vec<String> = primary
        .color_stops
        .iter()
        .map(|s| format!("{}_{}%", s.color().to_hex(), s.position))
        .collect();

    let overlay_stops: Vec<String> = overlay
        .color_stops
        .iter()
        .map(|s| {
            let Rgb { r, g, b } = s.color().to_rgb();
            format!("rgba({r},{g},{b},{opacity})_{}%", s.position)
        })
        .collect();

    format!(
        "bg-[linear-gradient({}deg,{}),linear-gradient({}deg,{})] bg-blend-{}",
        primary.angle,
        primary_stops.join(","),
        overlay.angle,
        overlay_stops.join(","),
        overlay.blend_mode,
    )
}

/// `Display` for f32 drops trailing `.0`, so 1.0 → `"1"` and 0.5 → `"0.5"`.
fn display_f32(value: f32) -> String {
    format!("{value}")
}
