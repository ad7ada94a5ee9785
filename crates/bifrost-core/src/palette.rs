//! Fixed Tailwind color palette — maps names to HSL values.
//!
//! Covers shades 50–950 for all 22 Tailwind families plus `white` and
//! `black`. The table is the read-only source for symbolic (palette-token)
//! serialization and for the demo gradients; the designer is free to leave
//! it and edit raw HSL, at which point a stop becomes "custom".

use crate::color::Hsl;

/// Resolve a palette name (e.g. `"sky-400"`, `"white"`) to its HSL value.
pub fn get(name: &str) -> Option<Hsl> {
    let (h, s, l) = match name {
        // Absolute colors
        "white" => (0, 0, 100),
        "black" => (0, 0, 0),

        // Slate
        "slate-50" => (210, 40, 98),
        "slate-100" => (210, 40, 96),
        "slate-200" => (214, 32, 91),
        "slate-300" => (213, 27, 84),
        "slate-400" => (215, 20, 65),
        "slate-500" => (215, 16, 47),
        "slate-600" => (215, 19, 35),
        "slate-700" => (215, 25, 27),
        "slate-800" => (217, 33, 17),
        "slate-900" => (222, 47, 11),
        "slate-950" => (224, 83, 5),

        // Gray
        "gray-50" => (210, 20, 98),
        "gray-100" => (220, 14, 96),
        "gray-200" => (220, 13, 91),
        "gray-300" => (216, 12, 84),
        "gray-400" => (218, 11, 65),
        "gray-500" => (220, 9, 46),
        "gray-600" => (215, 14, 34),
        "gray-700" => (217, 19, 27),
        "gray-800" => (215, 28, 17),
        "gray-900" => (221, 39, 11),
        "gray-950" => (224, 71, 4),

        // Zinc
        "zinc-50" => (0, 0, 98),
        "zinc-100" => (240, 5, 96),
        "zinc-200" => (240, 6, 90),
        "zinc-300" => (240, 5, 84),
        "zinc-400" => (240, 5, 65),
        "zinc-500" => (240, 4, 46),
        "zinc-600" => (240, 5, 34),
        "zinc-700" => (240, 5, 26),
        "zinc-800" => (240, 4, 16),
        "zinc-900" => (240, 6, 10),
        "zinc-950" => (240, 10, 4),

        // Neutral
        "neutral-50" => (0, 0, 98),
        "neutral-100" => (0, 0, 96),
        "neutral-200" => (0, 0, 90),
        "neutral-300" => (0, 0, 83),
        "neutral-400" => (0, 0, 64),
        "neutral-500" => (0, 0, 45),
        "neutral-600" => (0, 0, 32),
        "neutral-700" => (0, 0, 25),
        "neutral-800" => (0, 0, 15),
        "neutral-900" => (0, 0, 9),
        "neutral-950" => (0, 0, 4),

        // Stone
        "stone-50" => (60, 9, 98),
        "stone-100" => (60, 5, 96),
        "stone-200" => (20, 6, 90),
        "stone-300" => (24, 6, 83),
        "stone-400" => (24, 5, 64),
        "stone-500" => (25, 5, 45),
        "stone-600" => (33, 5, 32),
        "stone-700" => (30, 6, 25),
        "stone-800" => (12, 6, 15),
        "stone-900" => (24, 10, 10),
        "stone-950" => (20, 14, 4),

        // Red
        "red-50" => (0, 86, 97),
        "red-100" => (0, 93, 94),
        "red-200" => (0, 96, 89),
        "red-300" => (0, 94, 82),
        "red-400" => (0, 91, 71),
        "red-500" => (0, 84, 60),
        "red-600" => (0, 72, 51),
        "red-700" => (0, 74, 42),
        "red-800" => (0, 70, 35),
        "red-900" => (0, 63, 31),
        "red-950" => (0, 75, 15),

        // Orange
        "orange-50" => (33, 100, 96),
        "orange-100" => (34, 100, 92),
        "orange-200" => (32, 98, 83),
        "orange-300" => (31, 97, 72),
        "orange-400" => (27, 96, 61),
        "orange-500" => (25, 95, 53),
        "orange-600" => (21, 90, 48),
        "orange-700" => (17, 88, 40),
        "orange-800" => (15, 79, 34),
        "orange-900" => (15, 75, 28),
        "orange-950" => (13, 81, 15),

        // Amber
        "amber-50" => (48, 100, 96),
        "amber-100" => (48, 96, 89),
        "amber-200" => (48, 97, 77),
        "amber-300" => (46, 97, 65),
        "amber-400" => (43, 96, 56),
        "amber-500" => (38, 92, 50),
        "amber-600" => (32, 95, 44),
        "amber-700" => (26, 90, 37),
        "amber-800" => (23, 83, 31),
        "amber-900" => (22, 78, 26),
        "amber-950" => (21, 92, 14),

        // Yellow
        "yellow-50" => (55, 92, 95),
        "yellow-100" => (55, 97, 88),
        "yellow-200" => (53, 98, 77),
        "yellow-300" => (50, 98, 64),
        "yellow-400" => (48, 96, 53),
        "yellow-500" => (45, 93, 47),
        "yellow-600" => (41, 96, 40),
        "yellow-700" => (35, 92, 33),
        "yellow-800" => (32, 81, 29),
        "yellow-900" => (28, 73, 26),
        "yellow-950" => (26, 83, 14),

        // Lime
        "lime-50" => (78, 92, 95),
        "lime-100" => (80, 89, 89),
        "lime-200" => (81, 88, 80),
        "lime-300" => (82, 85, 67),
        "lime-400" => (83, 78, 55),
        "lime-500" => (84, 81, 44),
        "lime-600" => (85, 85, 35),
        "lime-700" => (86, 78, 27),
        "lime-800" => (86, 69, 23),
        "lime-900" => (88, 61, 20),
        "lime-950" => (89, 80, 10),

        // Green
        "green-50" => (138, 76, 97),
        "green-100" => (141, 84, 93),
        "green-200" => (141, 79, 85),
        "green-300" => (142, 77, 73),
        "green-400" => (142, 69, 58),
        "green-500" => (142, 71, 45),
        "green-600" => (142, 76, 36),
        "green-700" => (142, 72, 29),
        "green-800" => (143, 64, 24),
        "green-900" => (144, 61, 20),
        "green-950" => (145, 80, 10),

        // Emerald
        "emerald-50" => (152, 81, 96),
        "emerald-100" => (149, 80, 90),
        "emerald-200" => (152, 76, 80),
        "emerald-300" => (156, 72, 67),
        "emerald-400" => (158, 64, 52),
        "emerald-500" => (160, 84, 39),
        "emerald-600" => (161, 94, 30),
        "emerald-700" => (163, 94, 24),
        "emerald-800" => (163, 88, 20),
        "emerald-900" => (164, 86, 16),
        "emerald-950" => (166, 91, 9),

        // Teal
        "teal-50" => (166, 76, 97),
        "teal-100" => (167, 85, 89),
        "teal-200" => (168, 84, 78),
        "teal-300" => (171, 77, 64),
        "teal-400" => (172, 66, 50),
        "teal-500" => (173, 80, 40),
        "teal-600" => (175, 84, 32),
        "teal-700" => (175, 77, 26),
        "teal-800" => (176, 69, 22),
        "teal-900" => (176, 61, 19),
        "teal-950" => (179, 84, 10),

        // Cyan
        "cyan-50" => (183, 100, 96),
        "cyan-100" => (185, 96, 90),
        "cyan-200" => (186, 94, 82),
        "cyan-300" => (187, 92, 69),
        "cyan-400" => (188, 86, 53),
        "cyan-500" => (189, 94, 43),
        "cyan-600" => (192, 91, 36),
        "cyan-700" => (193, 82, 31),
        "cyan-800" => (194, 70, 27),
        "cyan-900" => (196, 64, 24),
        "cyan-950" => (197, 79, 15),

        // Sky
        "sky-50" => (204, 100, 97),
        "sky-100" => (204, 94, 94),
        "sky-200" => (201, 94, 86),
        "sky-300" => (199, 95, 74),
        "sky-400" => (195, 91, 65),
        "sky-500" => (199, 89, 48),
        "sky-600" => (200, 98, 39),
        "sky-700" => (204, 96, 32),
        "sky-800" => (201, 90, 27),
        "sky-900" => (202, 80, 24),
        "sky-950" => (204, 80, 16),

        // Blue
        "blue-50" => (214, 100, 97),
        "blue-100" => (214, 95, 93),
        "blue-200" => (213, 97, 87),
        "blue-300" => (212, 96, 78),
        "blue-400" => (213, 94, 68),
        "blue-500" => (217, 91, 60),
        "blue-600" => (221, 83, 53),
        "blue-700" => (224, 76, 48),
        "blue-800" => (226, 71, 40),
        "blue-900" => (224, 64, 33),
        "blue-950" => (226, 57, 21),

        // Indigo
        "indigo-50" => (226, 100, 97),
        "indigo-100" => (226, 100, 94),
        "indigo-200" => (228, 96, 89),
        "indigo-300" => (230, 94, 82),
        "indigo-400" => (234, 89, 74),
        "indigo-500" => (239, 84, 67),
        "indigo-600" => (243, 75, 59),
        "indigo-700" => (245, 58, 51),
        "indigo-800" => (244, 55, 41),
        "indigo-900" => (242, 47, 34),
        "indigo-950" => (244, 47, 20),

        // Violet
        "violet-50" => (250, 100, 98),
        "violet-100" => (251, 91, 95),
        "violet-200" => (251, 95, 92),
        "violet-300" => (252, 95, 85),
        "violet-400" => (255, 92, 76),
        "violet-500" => (258, 90, 66),
        "violet-600" => (262, 83, 58),
        "violet-700" => (263, 70, 50),
        "violet-800" => (263, 69, 42),
        "violet-900" => (264, 67, 35),
        "violet-950" => (261, 73, 23),

        // Purple
        "purple-50" => (270, 100, 98),
        "purple-100" => (269, 100, 95),
        "purple-200" => (269, 100, 92),
        "purple-300" => (269, 97, 85),
        "purple-400" => (270, 95, 75),
        "purple-500" => (271, 91, 65),
        "purple-600" => (271, 81, 56),
        "purple-700" => (272, 72, 47),
        "purple-800" => (273, 67, 39),
        "purple-900" => (274, 66, 32),
        "purple-950" => (280, 84, 21),

        // Fuchsia
        "fuchsia-50" => (289, 100, 98),
        "fuchsia-100" => (287, 100, 95),
        "fuchsia-200" => (288, 96, 91),
        "fuchsia-300" => (291, 93, 83),
        "fuchsia-400" => (292, 91, 73),
        "fuchsia-500" => (292, 84, 61),
        "fuchsia-600" => (297, 70, 49),
        "fuchsia-700" => (295, 72, 40),
        "fuchsia-800" => (295, 70, 33),
        "fuchsia-900" => (301, 62, 28),
        "fuchsia-950" => (297, 90, 16),

        // Pink
        "pink-50" => (327, 73, 97),
        "pink-100" => (326, 78, 95),
        "pink-200" => (326, 85, 90),
        "pink-300" => (327, 87, 82),
        "pink-400" => (329, 86, 70),
        "pink-500" => (330, 81, 60),
        "pink-600" => (333, 71, 51),
        "pink-700" => (335, 78, 42),
        "pink-800" => (336, 74, 35),
        "pink-900" => (336, 69, 30),
        "pink-950" => (336, 84, 17),

        // Rose
        "rose-50" => (356, 100, 97),
        "rose-100" => (356, 100, 95),
        "rose-200" => (353, 96, 90),
        "rose-300" => (353, 96, 82),
        "rose-400" => (351, 95, 71),
        "rose-500" => (350, 89, 60),
        "rose-600" => (347, 77, 50),
        "rose-700" => (345, 83, 41),
        "rose-800" => (343, 80, 35),
        "rose-900" => (342, 75, 30),
        "rose-950" => (343, 88, 16),

        _ => return None,
    };
    Some(Hsl::new(h, s, l))
}

/// Resolve a palette name to its `#rrggbb` hex value.
pub fn hex(name: &str) -> Option<String> {
    get(name).map(Hsl::to_hex)
}

/// Theme config path for a palette name: `"sky-400"` → `"colors.sky.400"`.
///
/// Only the first `-` separates family from shade, so single-part names
/// (`"white"`) map to `"colors.white"`.
pub fn theme_token(name: &str) -> String {
    format!("colors.{}", name.replacen('-', ".", 1))
}
