//! Color model, palette, and CSS/Tailwind code generation for the **bifrost**
//! gradient designer.
//!
//! This crate is intentionally dependency-free so it can be consumed by
//! front ends, export tooling, and the generation service without pulling in
//! any async or UI code.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`color`] | `Hsl`, `Rgb`, HSL→RGB/hex conversion |
//! | [`palette`] | fixed Tailwind name → HSL table |
//! | [`gradient`] | `ColorStop`, `PrimaryGradient`, `OverlayGradient`, `BlendMode` |
//! | [`codegen`] | `generate` → Tailwind / CSS / RGB / HSL snippets |
//! | [`preview`] | two-layer preview description for a host UI |
//! | [`error`] | `ValidationError` |
//!
//! # Quick start
//!
//! ```rust
//! use bifrost_core::{generate, BlendMode, ColorStop, OverlayGradient, PrimaryGradient};
//!
//! let primary = PrimaryGradient::new(90.0, vec![
//!     ColorStop::from_palette(1, "sky-400", 0).unwrap(),
//!     ColorStop::from_palette(2, "blue-500", 50).unwrap(),
//!     ColorStop::from_palette(3, "violet-500", 100).unwrap(),
//! ]);
//! let overlay = OverlayGradient::new(90.0, BlendMode::Overlay, 0.5, vec![
//!     ColorStop::from_palette(1, "amber-400", 0).unwrap(),
//!     ColorStop::from_palette(2, "white", 100).unwrap(),
//! ]);
//!
//! let code = generate(&primary, &overlay).unwrap();
//! assert!(code.css.contains("background-blend-mode: overlay;"));
//! ```

pub mod codegen;
pub mod color;
pub mod error;
pub mod gradient;
pub mod palette;
pub mod preview;

pub use codegen::{generate, GeneratedCode};
pub use color::{Hsl, Rgb};
pub use error::ValidationError;
pub use gradient::{BlendMode, ColorStop, OverlayGradient, PrimaryGradient};
pub use preview::{preview_layers, PreviewLayers};

#[cfg(test)]
mod generation_tests {
    use super::*;

    // The worked example from the design notes: sky→blue→violet base under a
    // half-opacity amber→white overlay, both at 90°.
    fn example() -> (PrimaryGradient, OverlayGradient) {
        let primary = PrimaryGradient::new(
            90.0,
            vec![
                ColorStop::from_palette(1, "sky-400", 0).unwrap(),
                ColorStop::from_palette(2, "blue-500", 50).unwrap(),
                ColorStop::from_palette(3, "violet-500", 100).unwrap(),
            ],
        );
        let overlay = OverlayGradient::new(
            90.0,
            BlendMode::Overlay,
            0.5,
            vec![
                ColorStop::from_palette(1, "amber-400", 0).unwrap(),
                ColorStop::from_palette(2, "white", 100).unwrap(),
            ],
        );
        (primary, overlay)
    }

    #[test]
    fn worked_example_css() {
        let (primary, overlay) = example();
        let code = generate(&primary, &overlay).unwrap();

        let image = code
            .css
            .lines()
            .find(|l| l.trim_start().starts_with("background-image:"))
            .unwrap();
        assert_eq!(image.matches("linear-gradient(90deg, ").count(), 2);
        assert!(code.css.contains("background-blend-mode: overlay;"));
    }

    #[test]
    fn worked_example_is_fully_symbolic() {
        let (primary, overlay) = example();
        let code = generate(&primary, &overlay).unwrap();
        assert!(code.tailwind_css.contains("from-sky-400"));
        assert!(code.tailwind_css.contains("theme(colors.white/0.5)_100%"));
        assert!(!code.tailwind_css.contains('#'));
    }

    #[test]
    fn dropping_one_name_flips_the_whole_tailwind_string() {
        let (mut primary, overlay) = example();
        let color = primary.color_stops[1].color();
        primary.color_stops[1].set_color(color); // same color, name cleared
        let code = generate(&primary, &overlay).unwrap();
        assert!(!code.tailwind_css.contains("theme("));
        assert!(code.tailwind_css.contains('#'));
    }

    #[test]
    fn preview_matches_generated_angles() {
        let (primary, overlay) = example();
        let layers = preview_layers(&primary, &overlay).unwrap();
        assert!(layers.primary_image.starts_with("linear-gradient(90deg, "));
        assert_eq!(layers.blend_mode, BlendMode::Overlay);
        assert_eq!(layers.overlay_opacity, 0.5);
    }
}
