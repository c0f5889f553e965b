use crate::theme;
use serde::{Deserialize, Serialize};

/// Resolved style/layout options for one render pass.
///
/// A snapshot is immutable for the duration of a render call. Sizes and
/// stroke widths keep their CSS string form (`"2px"`, `"17px"`) because they
/// flow into the generated stylesheet verbatim; the renderer extracts the
/// numeric prefix where it needs geometry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieConfig {
    pub pie_stroke_color: String,
    pub pie_stroke_width: String,
    pub pie_opacity: String,
    pub pie_outer_stroke_color: String,
    pub pie_outer_stroke_width: String,
    pub pie_title_text_size: String,
    pub pie_title_text_color: String,
    pub font_family: String,
    pub pie_section_text_color: String,
    pub pie_section_text_size: String,
    pub pie_legend_text_color: String,
    pub pie_legend_text_size: String,
    /// Radial position of the percentage labels, as a fraction of the pie
    /// radius in `[0, 1]`.
    pub text_position: f64,
    /// Categorical slice colors (`pie1`..`pie12`), cycled when the diagram
    /// has more labels than the palette has entries.
    pub palette: Vec<String>,
    pub use_max_width: bool,
}

impl Default for PieConfig {
    fn default() -> Self {
        Self {
            pie_stroke_color: theme::PIE_STROKE_COLOR.to_string(),
            pie_stroke_width: theme::PIE_STROKE_WIDTH.to_string(),
            pie_opacity: theme::PIE_OPACITY.to_string(),
            pie_outer_stroke_color: theme::PIE_OUTER_STROKE_COLOR.to_string(),
            pie_outer_stroke_width: theme::PIE_OUTER_STROKE_WIDTH.to_string(),
            pie_title_text_size: theme::PIE_TITLE_TEXT_SIZE.to_string(),
            pie_title_text_color: theme::PIE_TITLE_TEXT_COLOR.to_string(),
            font_family: theme::FONT_FAMILY.to_string(),
            pie_section_text_color: theme::PIE_SECTION_TEXT_COLOR.to_string(),
            pie_section_text_size: theme::PIE_SECTION_TEXT_SIZE.to_string(),
            pie_legend_text_color: theme::PIE_LEGEND_TEXT_COLOR.to_string(),
            pie_legend_text_size: theme::PIE_LEGEND_TEXT_SIZE.to_string(),
            text_position: 0.75,
            palette: theme::PALETTE.iter().map(|c| c.to_string()).collect(),
            use_max_width: true,
        }
    }
}

/// One layer of configuration overrides.
///
/// Every field is optional; an absent field falls back to the layer below.
/// Field names deserialize from the camelCase option names, so a
/// directive payload like `{"textPosition": 0.5, "pie1": "#f00"}` maps
/// directly onto this struct.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PieConfigOverrides {
    pub pie_stroke_color: Option<String>,
    pub pie_stroke_width: Option<String>,
    pub pie_opacity: Option<String>,
    pub pie_outer_stroke_color: Option<String>,
    pub pie_outer_stroke_width: Option<String>,
    pub pie_title_text_size: Option<String>,
    pub pie_title_text_color: Option<String>,
    pub font_family: Option<String>,
    pub pie_section_text_color: Option<String>,
    pub pie_section_text_size: Option<String>,
    pub pie_legend_text_color: Option<String>,
    pub pie_legend_text_size: Option<String>,
    pub text_position: Option<f64>,
    pub pie1: Option<String>,
    pub pie2: Option<String>,
    pub pie3: Option<String>,
    pub pie4: Option<String>,
    pub pie5: Option<String>,
    pub pie6: Option<String>,
    pub pie7: Option<String>,
    pub pie8: Option<String>,
    pub pie9: Option<String>,
    pub pie10: Option<String>,
    pub pie11: Option<String>,
    pub pie12: Option<String>,
    pub use_max_width: Option<bool>,
}

macro_rules! override_fields {
    ($($field:ident),* $(,)?) => {
        impl PieConfigOverrides {
            /// Stacks `layer` on top of `self`; present fields in `layer` win.
            pub fn merge(&mut self, layer: PieConfigOverrides) {
                $(
                    if layer.$field.is_some() {
                        self.$field = layer.$field;
                    }
                )*
            }
        }
    };
}

override_fields!(
    pie_stroke_color,
    pie_stroke_width,
    pie_opacity,
    pie_outer_stroke_color,
    pie_outer_stroke_width,
    pie_title_text_size,
    pie_title_text_color,
    font_family,
    pie_section_text_color,
    pie_section_text_size,
    pie_legend_text_color,
    pie_legend_text_size,
    text_position,
    pie1,
    pie2,
    pie3,
    pie4,
    pie5,
    pie6,
    pie7,
    pie8,
    pie9,
    pie10,
    pie11,
    pie12,
    use_max_width,
);

/// Layered configuration resolution: each override is either present (wins)
/// or absent (falls back to `base`). Evaluated once per render.
pub fn resolve(base: &PieConfig, overrides: &PieConfigOverrides) -> PieConfig {
    let mut config = base.clone();

    macro_rules! apply {
        ($($field:ident),* $(,)?) => {
            $(
                if let Some(v) = &overrides.$field {
                    config.$field = v.clone();
                }
            )*
        };
    }
    apply!(
        pie_stroke_color,
        pie_stroke_width,
        pie_opacity,
        pie_outer_stroke_color,
        pie_outer_stroke_width,
        pie_title_text_size,
        pie_title_text_color,
        font_family,
        pie_section_text_color,
        pie_section_text_size,
        pie_legend_text_color,
        pie_legend_text_size,
    );

    let palette_overrides = [
        &overrides.pie1,
        &overrides.pie2,
        &overrides.pie3,
        &overrides.pie4,
        &overrides.pie5,
        &overrides.pie6,
        &overrides.pie7,
        &overrides.pie8,
        &overrides.pie9,
        &overrides.pie10,
        &overrides.pie11,
        &overrides.pie12,
    ];
    for (slot, entry) in config.palette.iter_mut().zip(palette_overrides) {
        if let Some(color) = entry {
            *slot = color.clone();
        }
    }

    if let Some(v) = overrides.text_position {
        config.text_position = v;
    }
    if let Some(v) = overrides.use_max_width {
        config.use_max_width = v;
    }
    config
}
