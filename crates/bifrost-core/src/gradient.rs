use crate::color::Hsl;
use crate::error::ValidationError;
use crate::palette;

use std::fmt;

/// Stops carried by the primary gradient.
pub const PRIMARY_STOP_COUNT: usize = 3;
/// Stops carried by the overlay gradient.
pub const OVERLAY_STOP_COUNT: usize = 2;

// ── BlendMode ─────────────────────────────────────────────────────────────

/// CSS blend mode applied to the overlay layer as a whole.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum BlendMode {
    #[default]
    Normal,
    Multiply,
    Screen,
    Overlay,
    Darken,
    Lighten,
    ColorDodge,
    ColorBurn,
    HardLight,
    SoftLight,
    Difference,
    Exclusion,
    Hue,
    Saturation,
    Color,
    Luminosity,
}

impl BlendMode {
    /// All modes, in the order the designer lists them.
    pub const ALL: [BlendMode; 16] = [
        BlendMode::Normal,
        BlendMode::Multiply,
        BlendMode::Screen,
        BlendMode::Overlay,
        BlendMode::Darken,
        BlendMode::Lighten,
        BlendMode::ColorDodge,
        BlendMode::ColorBurn,
        BlendMode::HardLight,
        BlendMode::SoftLight,
        BlendMode::Difference,
        BlendMode::Exclusion,
        BlendMode::Hue,
        BlendMode::Saturation,
        BlendMode::Color,
        BlendMode::Luminosity,
    ];

    /// The CSS keyword, as used by `background-blend-mode` and `bg-blend-*`.
    pub const fn as_css(self) -> &'static str {
        match self {
            BlendMode::Normal => "normal",
            BlendMode::Multiply => "multiply",
            BlendMode::Screen => "screen",
            BlendMode::Overlay => "overlay",
            BlendMode::Darken => "darken",
            BlendMode::Lighten => "lighten",
            BlendMode::ColorDodge => "color-dodge",
            BlendMode::ColorBurn => "color-burn",
            BlendMode::HardLight => "hard-light",
            BlendMode::SoftLight => "soft-light",
            BlendMode::Difference => "difference",
            BlendMode::Exclusion => "exclusion",
            BlendMode::Hue => "hue",
            BlendMode::Saturation => "saturation",
            BlendMode::Color => "color",
            BlendMode::Luminosity => "luminosity",
        }
    }

    /// Parse a CSS keyword back into a mode.
    pub fn parse(keyword: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.as_css() == keyword)
    }
}

impl fmt::Display for BlendMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_css())
    }
}

// ── ColorStop ─────────────────────────────────────────────────────────────

/// One color/position pair within a gradient.
///
/// Invariant:
/// - `palette_name`, when set, names the palette entry the color was picked
///   from. Editing the raw color clears it; it never survives a manual edit,
///   so it cannot silently go stale.
///
/// `color` and `palette_name` are private so the invariant holds by
/// construction; mutate through [`set_color`](Self::set_color) /
/// [`set_palette`](Self::set_palette).
#[derive(Debug, Clone, PartialEq)]
pub struct ColorStop {
    /// Unique within its gradient.
    pub id: u32,
    /// Percentage offset along the gradient axis, 0–100.
    pub position: u8,
    color: Hsl,
    palette_name: Option<String>,
}

impl ColorStop {
    /// A stop with a raw (non-palette) color.
    pub fn custom(id: u32, color: Hsl, position: u8) -> Self {
        Self { id, position, color, palette_name: None }
    }

    /// A stop bound to a palette entry. `None` if the name does not resolve.
    pub fn from_palette(id: u32, name: &str, position: u8) -> Option<Self> {
        let color = palette::get(name)?;
        Some(Self { id, position, color, palette_name: Some(name.to_string()) })
    }

    #[inline]
    pub fn color(&self) -> Hsl {
        self.color
    }

    #[inline]
    pub fn palette_name(&self) -> Option<&str> {
        self.palette_name.as_deref()
    }

    /// Set the raw color directly. Drops any palette binding.
    pub fn set_color(&mut self, color: Hsl) {
        self.color = color;
        self.palette_name = None;
    }

    /// Bind the stop to a palette entry, replacing color and name together.
    ///
    /// Returns `false` (leaving the stop untouched) if the name does not
    /// resolve.
    pub fn set_palette(&mut self, name: &str) -> bool {
        match palette::get(name) {
            Some(color) => {
                self.color = color;
                self.palette_name = Some(name.to_string());
                true
            }
            None => false,
        }
    }

    /// Move the stop along the axis. The palette binding is unaffected.
    #[inline]
    pub fn set_position(&mut self, position: u8) {
        self.position = position;
    }

    /// The palette name, but only when it still resolves in the table.
    pub fn symbolic(&self) -> Option<&str> {
        self.palette_name().filter(|name| palette::get(name).is_some())
    }
}

// ── Gradients ─────────────────────────────────────────────────────────────

/// The base gradient: three stops, no transparency in any output.
#[derive(Debug, Clone, PartialEq)]
pub struct PrimaryGradient {
    /// Degrees. Values outside [0, 360) pass through verbatim.
    pub angle: f32,
    /// Significant order: rendered as given, never re-sorted by position.
    pub color_stops: Vec<ColorStop>,
}

impl PrimaryGradient {
    pub fn new(angle: f32, color_stops: Vec<ColorStop>) -> Self {
        Self { angle, color_stops }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.color_stops.len() != PRIMARY_STOP_COUNT {
            return Err(ValidationError::stop_count(
                "primary",
                PRIMARY_STOP_COUNT,
                self.color_stops.len(),
            ));
        }
        Ok(())
    }
}

/// The overlay gradient: two stops, composited over the primary with a blend
/// mode and a uniform opacity.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayGradient {
    pub angle: f32,
    pub blend_mode: BlendMode,
    /// Uniform over both stops, 0–1. Zero still renders (fully transparent);
    /// the layer is never omitted.
    pub opacity: f32,
    pub color_stops: Vec<ColorStop>,
}

impl OverlayGradient {
    pub fn new(angle: f32, blend_mode: BlendMode, opacity: f32, color_stops: Vec<ColorStop>) -> Self {
        Self { angle, blend_mode, opacity, color_stops }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.color_stops.len() != OVERLAY_STOP_COUNT {
            return Err(ValidationError::stop_count(
                "overlay",
                OVERLAY_STOP_COUNT,
                self.color_stops.len(),
            ));
        }
        Ok(())
    }
}
