//! Default-theme values for the pie style variables.
//!
//! The derived `hsl(...)` palette entries are hue/lightness adjustments of
//! the first three base colors.

pub const FONT_FAMILY: &str = r#""trebuchet ms", verdana, arial, sans-serif"#;

pub const PIE_STROKE_COLOR: &str = "black";
pub const PIE_STROKE_WIDTH: &str = "2px";
pub const PIE_OPACITY: &str = "0.7";
pub const PIE_OUTER_STROKE_COLOR: &str = "black";
pub const PIE_OUTER_STROKE_WIDTH: &str = "2px";
pub const PIE_TITLE_TEXT_SIZE: &str = "25px";
pub const PIE_TITLE_TEXT_COLOR: &str = "black";
pub const PIE_SECTION_TEXT_COLOR: &str = "#333";
pub const PIE_SECTION_TEXT_SIZE: &str = "17px";
pub const PIE_LEGEND_TEXT_COLOR: &str = "black";
pub const PIE_LEGEND_TEXT_SIZE: &str = "17px";

/// Categorical slice colors `pie1`..`pie12`, in palette order.
pub const PALETTE: [&str; 12] = [
    "#ECECFF",
    "#ffffde",
    "hsl(80, 100%, 56.2745098039%)",
    "hsl(240, 100%, 86.2745098039%)",
    "hsl(60, 100%, 63.5294117647%)",
    "hsl(80, 100%, 76.2745098039%)",
    "hsl(300, 100%, 86.2745098039%)",
    "hsl(180, 100%, 86.2745098039%)",
    "hsl(0, 100%, 96.2745098039%)",
    "hsl(300, 100%, 76.2745098039%)",
    "hsl(150, 100%, 86.2745098039%)",
    "hsl(240, 100%, 86.2745098039%)",
];
