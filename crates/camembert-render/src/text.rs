//! Text measurement.
//!
//! Final canvas width depends on the widest rendered legend caption, so the
//! layout pass needs glyph extents before any SVG exists. Headless callers
//! rarely have a font stack to ask; the default measurer approximates widths
//! from character counts, and integrations with real font metrics can plug in
//! their own [`TextMeasurer`].

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextStyle {
    pub font_family: Option<String>,
    pub font_size: f64,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_family: None,
            font_size: 16.0,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TextMetrics {
    pub width: f64,
    pub height: f64,
}

pub trait TextMeasurer {
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics;
}

/// Deterministic approximation: every character is a fixed fraction of the
/// font size wide.
#[derive(Debug, Clone)]
pub struct CharWidthTextMeasurer {
    pub char_width_factor: f64,
    pub line_height_factor: f64,
}

impl Default for CharWidthTextMeasurer {
    fn default() -> Self {
        Self {
            char_width_factor: 0.6,
            line_height_factor: 1.2,
        }
    }
}

impl TextMeasurer for CharWidthTextMeasurer {
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics {
        let font_size = style.font_size.max(1.0);
        TextMetrics {
            width: text.chars().count() as f64 * font_size * self.char_width_factor,
            height: font_size * self.line_height_factor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_scales_with_character_count_and_font_size() {
        let measurer = CharWidthTextMeasurer::default();
        let style = TextStyle {
            font_family: None,
            font_size: 10.0,
        };
        let metrics = measurer.measure("abcd", &style);
        assert_eq!(metrics.width, 24.0);
        assert_eq!(metrics.height, 12.0);
        // Multi-byte characters count once.
        assert_eq!(measurer.measure("éé", &style).width, 12.0);
    }
}
