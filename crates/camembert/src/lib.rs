#![forbid(unsafe_code)]

//! `camembert` is a headless pie-chart diagram pipeline: a small declarative
//! text language in, a sized SVG document out.
//!
//! ```text
//! pie showData
//!   title Adopted pets
//!   "Dogs" : 386
//!   "Cats" : 85
//! ```
//!
//! Parsing lives in [`camembert_core`] (re-exported here); layout and SVG
//! serialization live behind the `render` feature (enabled by default).
//!
//! # Features
//!
//! - `render`: enable layout + SVG rendering (`camembert::render`)

pub use camembert_core::*;

#[cfg(feature = "render")]
pub mod render {
    pub use camembert_render::model::PieLayout;
    pub use camembert_render::pie::layout_pie_diagram;
    pub use camembert_render::svg::{SvgRenderOptions, pie_css, render_pie_svg};
    pub use camembert_render::text::{CharWidthTextMeasurer, TextMeasurer, TextMetrics, TextStyle};
    pub use camembert_render::LayoutOptions;

    use camembert_core::{PieConfigOverrides, PieDiagram, Result};

    /// Options for the one-call pipeline entry points.
    #[derive(Clone, Default)]
    pub struct RenderOptions {
        /// `id` attribute of the produced root element.
        pub diagram_id: Option<String>,
        /// Site-level config layer, below any directives in the text.
        pub site_config: PieConfigOverrides,
        pub layout: LayoutOptions,
    }

    /// Parses and lays out a diagram without serializing SVG.
    pub fn layout_sync(text: &str, options: &RenderOptions) -> Result<(PieDiagram, PieLayout)> {
        let diagram = camembert_core::parse_with_overrides(text, &options.site_config)?;
        let layout = layout_pie_diagram(&diagram, options.layout.text_measurer.as_ref());
        Ok((diagram, layout))
    }

    /// Parse → layout → SVG in one call.
    pub fn render_svg_sync(text: &str, options: &RenderOptions) -> Result<String> {
        let (diagram, layout) = layout_sync(text, options)?;
        let svg_options = SvgRenderOptions {
            diagram_id: options.diagram_id.clone(),
        };
        Ok(render_pie_svg(&layout, &diagram.config, &svg_options))
    }

    /// Executor-free async variant of [`render_svg_sync`], for callers whose
    /// surrounding pipeline is async. The work itself is CPU-bound.
    pub async fn render_svg(text: &str, options: &RenderOptions) -> Result<String> {
        render_svg_sync(text, options)
    }
}
