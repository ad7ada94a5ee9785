//! Wire payload for the external generation service.
//!
//! Colors are pre-flattened to hex strings — the service never sees the HSL
//! model — and each stop carries a flag telling the service whether the color
//! sits on the fixed palette. Field names are camelCase on the wire.

use serde::Serialize;

use bifrost_core::{ColorStop, OverlayGradient, PrimaryGradient};

use crate::error::RequestError;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StopPayload {
    /// `#rrggbb` hex value.
    pub color: String,
    /// 0–100 offset along the gradient axis.
    pub position: u8,
    /// True when the color is a resolvable palette entry.
    pub palette: bool,
}

impl StopPayload {
    fn from_stop(stop: &ColorStop) -> Self {
        Self {
            color: stop.color().to_hex(),
            position: stop.position,
            palette: stop.symbolic().is_some(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrimaryPayload {
    pub color_stops: Vec<StopPayload>,
    pub angle: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverlayPayload {
    pub color_stops: Vec<StopPayload>,
    pub angle: f32,
    pub blend_mode: String,
    pub opacity: f32,
}

/// The full request: both gradient descriptors, flattened.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub primary_gradient: PrimaryPayload,
    pub overlay_gradient: OverlayPayload,
}

impl GenerateRequest {
    /// Flatten two gradient descriptors into the wire payload.
    ///
    /// A stop-count violation here is a request-construction failure — the
    /// caller handed over descriptors the deterministic generator would
    /// reject too.
    pub fn from_gradients(
        primary: &PrimaryGradient,
        overlay: &OverlayGradient,
    ) -> Result<Self, RequestError> {
        primary.validate().map_err(RequestError)?;
        overlay.validate().map_err(RequestError)?;

        Ok(Self {
            primary_gradient: PrimaryPayload {
                color_stops: primary.color_stops.iter().map(StopPayload::from_stop).collect(),
                angle: primary.angle,
            },
            overlay_gradient: OverlayPayload {
                color_stops: overlay.color_stops.iter().map(StopPayload::from_stop).collect(),
                angle: overlay.angle,
                blend_mode: overlay.blend_mode.to_string(),
                opacity: overlay.opacity.clamp(0.0, 1.0),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bifrost_core::{BlendMode, Hsl};
    use serde_json::json;

    fn primary() -> PrimaryGradient {
        PrimaryGradient::new(
            61.0,
            vec![
                ColorStop::from_palette(1, "slate-950", 0).unwrap(),
                ColorStop::from_palette(2, "purple-950", 50).unwrap(),
                ColorStop::custom(3, Hsl::new(301, 62, 28), 100),
            ],
        )
    }

    fn overlay() -> OverlayGradient {
        OverlayGradient::new(
            188.0,
            BlendMode::Overlay,
            0.5,
            vec![
                ColorStop::from_palette(1, "fuchsia-600", 0).unwrap(),
                ColorStop::from_palette(2, "sky-700", 100).unwrap(),
            ],
        )
    }

    #[test]
    fn payload_flattens_colors_to_hex() {
        let req = GenerateRequest::from_gradients(&primary(), &overlay()).unwrap();
        for stop in req
            .primary_gradient
            .color_stops
            .iter()
            .chain(&req.overlay_gradient.color_stops)
        {
            assert!(stop.color.starts_with('#'));
            assert_eq!(stop.color.len(), 7);
        }
    }

    #[test]
    fn palette_flag_tracks_symbolic_stops() {
        let req = GenerateRequest::from_gradients(&primary(), &overlay()).unwrap();
        let flags: Vec<bool> = req.primary_gradient.color_stops.iter().map(|s| s.palette).collect();
        assert_eq!(flags, [true, true, false]);
        assert!(req.overlay_gradient.color_stops.iter().all(|s| s.palette));
    }

    #[test]
    fn wire_shape_is_camel_case() {
        let req = GenerateRequest::from_gradients(&primary(), &overlay()).unwrap();
        let value = serde_json::to_value(&req).unwrap();
        assert!(value.get("primaryGradient").is_some());
        assert!(value.get("overlayGradient").is_some());
        assert_eq!(value["overlayGradient"]["blendMode"], json!("overlay"));
        assert_eq!(value["overlayGradient"]["opacity"], json!(0.5));
        assert_eq!(value["primaryGradient"]["colorStops"][0]["position"], json!(0));
    }

    #[test]
    fn wrong_stop_count_is_a_request_error() {
        let mut p = primary();
        p.color_stops.truncate(1);
        let err = GenerateRequest::from_gradients(&p, &overlay()).unwrap_err();
        assert_eq!(err.0.gradient, "primary");
    }

    #[test]
    fn opacity_is_clamped_on_the_wire() {
        let mut o = overlay();
        o.opacity = 7.5;
        let req = GenerateRequest::from_gradients(&primary(), &o).unwrap();
        assert_eq!(req.overlay_gradient.opacity, 1.0);
    }
}
