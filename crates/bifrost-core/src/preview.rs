//! Live-preview layer description.
//!
//! The preview surface does not bake opacity the way the generated code does:
//! it stacks two plain hex-stop gradient images and lets the host apply the
//! overlay's blend mode and element opacity separately. This module produces
//! exactly that description; turning it into pixels is the host's job.

use crate::error::ValidationError;
use crate::gradient::{BlendMode, ColorStop, OverlayGradient, PrimaryGradient};

/// What a host UI needs to paint the two-layer preview.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewLayers {
    /// `linear-gradient(...)` for the base layer, hex stops, fully opaque.
    pub primary_image: String,
    /// `linear-gradient(...)` for the overlay layer, hex stops, fully opaque.
    pub overlay_image: String,
    /// Applied by the host as `mix-blend-mode` on the overlay element.
    pub blend_mode: BlendMode,
    /// Applied by the host as element opacity, not per stop.
    pub overlay_opacity: f32,
}

/// Build the preview description for a gradient pair.
pub fn preview_layers(
    primary: &PrimaryGradient,
    overlay: &OverlayGradient,
) -> Result<PreviewLayers, ValidationError> {
    primary.validate()?;
    overlay.validate()?;

    Ok(PreviewLayers {
        primary_image: image(primary.angle, &primary.color_stops),
        overlay_image: image(overlay.angle, &overlay.color_stops),
        blend_mode: overlay.blend_mode,
        overlay_opacity: overlay.opacity,
    })
}

fn image(angle: f32, stops: &[ColorStop]) -> String {
    let stops: Vec<String> = stops
        .iter()
        .map(|s| format!("{} {}%", s.color().to_hex(), s.position))
        .collect();
    format!("linear-gradient({angle}deg, {})", stops.join(", "))
}
