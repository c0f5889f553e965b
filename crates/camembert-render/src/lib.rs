#![forbid(unsafe_code)]

//! Headless layout + SVG rendering for pie-chart diagrams.
//!
//! The pipeline is two pure passes over a parsed [`camembert_core::PieDiagram`]:
//! [`pie::layout_pie_diagram`] turns the section store into slice/legend
//! geometry (using a pluggable [`text::TextMeasurer`] for the legend-width
//! pass), and [`svg::render_pie_svg`] serializes that geometry to an SVG
//! string.

pub mod arc;
pub mod arcs;
pub mod color;
pub mod model;
pub mod pie;
pub mod svg;
pub mod text;

use crate::text::{CharWidthTextMeasurer, TextMeasurer};

#[derive(Clone)]
pub struct LayoutOptions {
    pub text_measurer: std::sync::Arc<dyn TextMeasurer + Send + Sync>,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            text_measurer: std::sync::Arc::new(CharWidthTextMeasurer::default()),
        }
    }
}
