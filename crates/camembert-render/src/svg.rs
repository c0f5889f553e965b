//! SVG serialization of a laid-out pie diagram.

use crate::arc::Arc;
use crate::model::PieLayout;
use crate::pie::{LEGEND_GAP, LEGEND_RECT_SIZE};
use camembert_core::PieConfig;
use std::fmt::Write as _;

#[derive(Debug, Clone, Default)]
pub struct SvgRenderOptions {
    /// `id` attribute of the root element; also scopes the stylesheet and
    /// the accessibility element ids.
    pub diagram_id: Option<String>,
}

pub fn render_pie_svg(
    layout: &PieLayout,
    config: &PieConfig,
    options: &SvgRenderOptions,
) -> String {
    tracing::debug!(slices = layout.slices.len(), "rendering pie chart");

    let diagram_id = options.diagram_id.as_deref().unwrap_or("camembert");
    let id = escape_xml(diagram_id);

    let mut aria = String::new();
    if !layout.acc_description.is_empty() {
        let _ = write!(&mut aria, r#" aria-describedby="chart-desc-{id}""#);
    }
    if !layout.acc_title.is_empty() {
        let _ = write!(&mut aria, r#" aria-labelledby="chart-title-{id}""#);
    }

    let size = if config.use_max_width {
        format!(
            r#" width="100%" style="max-width: {}px; background-color: white;""#,
            fmt(layout.viewbox_width)
        )
    } else {
        format!(
            r#" width="{}" height="{}" style="background-color: white;""#,
            fmt(layout.viewbox_width),
            fmt(layout.viewbox_height)
        )
    };

    let mut out = String::new();
    let _ = write!(
        &mut out,
        r#"<svg id="{id}" xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {w} {h}"{size} role="graphics-document document" aria-roledescription="pie"{aria}>"#,
        w = fmt(layout.viewbox_width),
        h = fmt(layout.viewbox_height),
    );

    if !layout.acc_title.is_empty() {
        let _ = write!(
            &mut out,
            r#"<title id="chart-title-{id}">{}</title>"#,
            escape_xml(&layout.acc_title)
        );
    }
    if !layout.acc_description.is_empty() {
        let _ = write!(
            &mut out,
            r#"<desc id="chart-desc-{id}">{}</desc>"#,
            escape_xml(&layout.acc_description)
        );
    }

    let _ = write!(&mut out, "<style>{}</style>", pie_css(diagram_id, config));

    let _ = write!(
        &mut out,
        r#"<g transform="translate({},{})">"#,
        fmt(layout.center_x),
        fmt(layout.center_y)
    );
    let _ = write!(
        &mut out,
        r#"<circle cx="0" cy="0" r="{}" class="pieOuterCircle"/>"#,
        fmt(layout.outer_circle_radius)
    );

    let slice_arc = Arc::new(0.0, layout.radius);
    for slice in &layout.slices {
        let _ = write!(
            &mut out,
            r#"<path d="{}" fill="{}" class="pieCircle"/>"#,
            slice_arc.path(slice.start_angle, slice.end_angle),
            escape_xml(&slice.fill),
        );
    }

    for slice in &layout.slices {
        let _ = write!(
            &mut out,
            r#"<text transform="translate({},{})" class="slice" style="text-anchor: middle;">{}%</text>"#,
            fmt(slice.text_x),
            fmt(slice.text_y),
            percent_label(slice.percent),
        );
    }

    if layout.title.is_empty() {
        let _ = write!(
            &mut out,
            r#"<text x="0" y="{}" class="pieTitleText"/>"#,
            fmt(layout.title_y)
        );
    } else {
        let _ = write!(
            &mut out,
            r#"<text x="0" y="{}" class="pieTitleText">{}</text>"#,
            fmt(layout.title_y),
            escape_xml(&layout.title)
        );
    }

    for row in &layout.legend {
        let _ = write!(
            &mut out,
            r#"<g class="legend" transform="translate({},{})">"#,
            fmt(row.x),
            fmt(row.y)
        );
        let style = format!("fill: {c}; stroke: {c};", c = row.fill);
        let _ = write!(
            &mut out,
            r#"<rect width="{s}" height="{s}" style="{}"/>"#,
            escape_xml(&style),
            s = fmt(LEGEND_RECT_SIZE),
        );
        let _ = write!(
            &mut out,
            r#"<text x="{}" y="{}">{}</text>"#,
            fmt(LEGEND_RECT_SIZE + LEGEND_GAP),
            fmt(LEGEND_RECT_SIZE - LEGEND_GAP),
            escape_xml(&row.text)
        );
        out.push_str("</g>");
    }

    out.push_str("</g></svg>\n");
    out
}

/// Stylesheet for one diagram, scoped under its root id and parameterized by
/// the config's style fields.
pub fn pie_css(diagram_id: &str, config: &PieConfig) -> String {
    let id = escape_xml(diagram_id);
    format!(
        "#{id} .pieCircle{{stroke:{};stroke-width:{};opacity:{};}}\
         #{id} .pieOuterCircle{{stroke:{};stroke-width:{};fill:none;}}\
         #{id} .pieTitleText{{text-anchor:middle;font-size:{};fill:{};font-family:{font};}}\
         #{id} .slice{{font-family:{font};fill:{};font-size:{};}}\
         #{id} .legend text{{fill:{};font-family:{font};font-size:{};}}",
        config.pie_stroke_color,
        config.pie_stroke_width,
        config.pie_opacity,
        config.pie_outer_stroke_color,
        config.pie_outer_stroke_width,
        config.pie_title_text_size,
        config.pie_title_text_color,
        config.pie_section_text_color,
        config.pie_section_text_size,
        config.pie_legend_text_color,
        config.pie_legend_text_size,
        font = config.font_family,
    )
}

fn percent_label(percent: f64) -> String {
    if percent.is_finite() {
        fmt(percent)
    } else {
        "NaN".to_string()
    }
}

/// JS-`Number#toString`-like formatting for SVG attributes: round-trippable,
/// no `-0`, integer values without a decimal point, tiny float noise dropped.
pub(crate) fn fmt(v: f64) -> String {
    if !v.is_finite() {
        return "0".to_string();
    }
    let mut v = if v.abs() < 1e-9 { 0.0 } else { v };
    let nearest = v.round();
    if (v - nearest).abs() < 1e-6 {
        v = nearest;
    }
    let s = v.to_string();
    if s == "-0" { "0".to_string() } else { s }
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
