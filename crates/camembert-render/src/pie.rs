//! Pie diagram layout: section store → slice and legend geometry.

use crate::arc::Arc;
use crate::arcs::{PieLayoutOptions, pie_slices};
use crate::color::OrdinalColorScale;
use crate::model::{PieLayout, PieLegendRowLayout, PieSliceLayout};
use crate::svg::fmt;
use crate::text::{TextMeasurer, TextStyle};
use camembert_core::PieDiagram;

const MARGIN: f64 = 40.0;
const CANVAS_WIDTH: f64 = 450.0;
const CANVAS_HEIGHT: f64 = 450.0;
pub(crate) const LEGEND_RECT_SIZE: f64 = 18.0;
pub(crate) const LEGEND_GAP: f64 = 4.0;

pub fn layout_pie_diagram(diagram: &PieDiagram, measurer: &dyn TextMeasurer) -> PieLayout {
    let db = &diagram.db;
    let config = &diagram.config;

    let radius = CANVAS_WIDTH.min(CANVAS_HEIGHT) / 2.0 - MARGIN;
    let outer_stroke_width = leading_number(&config.pie_outer_stroke_width).unwrap_or(2.0);

    // Slices are laid out largest-first; ties keep insertion order.
    let mut sections: Vec<(&str, f64)> = db
        .sections()
        .iter()
        .map(|(label, value)| (label.as_str(), *value))
        .collect();
    sections.sort_by(|a, b| b.1.total_cmp(&a.1));

    let slices = pie_slices(&sections, |s| s.1, &PieLayoutOptions::default());
    let total: f64 = sections.iter().map(|s| s.1).sum();

    let label_arc = Arc::new(
        radius * config.text_position,
        radius * config.text_position,
    );

    let mut scale = OrdinalColorScale::new(&config.palette);
    let mut slice_layouts = Vec::with_capacity(slices.len());
    for slice in &slices {
        let (label, value) = sections[slice.index];
        let (text_x, text_y) = label_arc.centroid(slice.start_angle, slice.end_angle);
        slice_layouts.push(PieSliceLayout {
            label: label.to_string(),
            value,
            start_angle: slice.start_angle,
            end_angle: slice.end_angle,
            percent: (value / total * 100.0).round(),
            text_x,
            text_y,
            fill: scale.color_for(label),
        });
    }

    // One legend row per color-scale domain entry, which is the slice order;
    // the block is centered vertically on the pie.
    let row_step = LEGEND_RECT_SIZE + LEGEND_GAP;
    let block_offset = row_step * slice_layouts.len() as f64 / 2.0;
    let legend: Vec<PieLegendRowLayout> = slice_layouts
        .iter()
        .enumerate()
        .map(|(row, slice)| PieLegendRowLayout {
            label: slice.label.clone(),
            value: slice.value,
            text: legend_caption(&slice.label, slice.value, db.show_data()),
            fill: slice.fill.clone(),
            x: 12.0 * LEGEND_RECT_SIZE,
            y: row as f64 * row_step - block_offset,
        })
        .collect();

    // Second pass: the canvas can only be sized once the legend captions
    // have measurable extents.
    let legend_style = TextStyle {
        font_family: Some(config.font_family.clone()),
        font_size: leading_number(&config.pie_legend_text_size).unwrap_or(17.0),
    };
    let max_legend_width = legend
        .iter()
        .map(|row| measurer.measure(&row.text, &legend_style).width)
        .fold(0.0, f64::max);

    PieLayout {
        viewbox_width: CANVAS_WIDTH + MARGIN + LEGEND_RECT_SIZE + LEGEND_GAP + max_legend_width,
        viewbox_height: CANVAS_HEIGHT,
        center_x: CANVAS_WIDTH / 2.0,
        center_y: CANVAS_HEIGHT / 2.0,
        radius,
        outer_circle_radius: radius + outer_stroke_width / 2.0,
        label_radius: radius * config.text_position,
        title: db.diagram_title().to_string(),
        title_y: -200.0,
        acc_title: db.acc_title().to_string(),
        acc_description: db.acc_description().to_string(),
        show_data: db.show_data(),
        slices: slice_layouts,
        legend,
    }
}

fn legend_caption(label: &str, value: f64, show_data: bool) -> String {
    if show_data {
        format!("{} [{}]", label, fmt(value))
    } else {
        label.to_string()
    }
}

/// Numeric prefix of a CSS length such as `"2px"`.
fn leading_number(value: &str) -> Option<f64> {
    let number: String = value
        .trim_start()
        .chars()
        .take_while(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();
    number.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::CharWidthTextMeasurer;
    use camembert_core::{PieConfigOverrides, parse, parse_with_overrides};
    use std::f64::consts::TAU;

    const EPS: f64 = 1e-9;

    fn layout_of(text: &str) -> PieLayout {
        let diagram = parse(text).unwrap();
        layout_pie_diagram(&diagram, &CharWidthTextMeasurer::default())
    }

    #[test]
    fn example_scenario_sorts_descending_and_splits_the_circle() {
        let layout = layout_of("pie\n\"A\": 10\n\"B\": 30\n\"C\": 60\n");

        let labels: Vec<&str> = layout.slices.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["C", "B", "A"]);

        let degrees: Vec<f64> = layout
            .slices
            .iter()
            .map(|s| (s.end_angle - s.start_angle).to_degrees())
            .collect();
        assert!((degrees[0] - 216.0).abs() < EPS);
        assert!((degrees[1] - 108.0).abs() < EPS);
        assert!((degrees[2] - 36.0).abs() < EPS);

        let percents: Vec<f64> = layout.slices.iter().map(|s| s.percent).collect();
        assert_eq!(percents, vec![60.0, 30.0, 10.0]);

        let legend_labels: Vec<&str> = layout.legend.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(legend_labels, vec!["C", "B", "A"]);

        let mut fills: Vec<&str> = layout.slices.iter().map(|s| s.fill.as_str()).collect();
        fills.dedup();
        assert_eq!(fills.len(), 3);
        for (slice, row) in layout.slices.iter().zip(&layout.legend) {
            assert_eq!(slice.fill, row.fill);
        }
    }

    #[test]
    fn slices_cover_the_full_circle_contiguously() {
        let layout = layout_of("pie\n\"a\": 3\n\"b\": 1\n\"c\": 4\n\"d\": 1\n\"e\": 5\n");
        let covered: f64 = layout
            .slices
            .iter()
            .map(|s| s.end_angle - s.start_angle)
            .sum();
        assert!((covered - TAU).abs() < EPS);
        for pair in layout.slices.windows(2) {
            assert_eq!(pair[0].end_angle, pair[1].start_angle);
        }
    }

    #[test]
    fn layout_is_deterministic() {
        let text = "pie showData\n\"x\": 2\n\"y\": 7\n\"z\": 1\n";
        assert_eq!(layout_of(text), layout_of(text));
    }

    #[test]
    fn value_ties_keep_insertion_order() {
        let layout = layout_of("pie\n\"z\": 5\n\"a\": 5\n");
        let labels: Vec<&str> = layout.slices.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["z", "a"]);
    }

    #[test]
    fn empty_diagram_keeps_the_ring_geometry() {
        let layout = layout_of("pie title Nothing yet\n");
        assert!(layout.slices.is_empty());
        assert!(layout.legend.is_empty());
        assert_eq!(layout.radius, 185.0);
        assert_eq!(layout.outer_circle_radius, 186.0);
        // Canvas + margin + legend square + gap, with no caption width.
        assert_eq!(layout.viewbox_width, 512.0);
        assert_eq!(layout.viewbox_height, 450.0);
    }

    #[test]
    fn percentage_labels_sit_at_the_text_position_radius() {
        let layout = layout_of("pie\n\"only\": 5\n");
        // A single positive section spans the whole circle; its label anchors
        // at the mid-angle, straight down from the center.
        let slice = &layout.slices[0];
        assert!((slice.percent - 100.0).abs() < EPS);
        assert!(slice.text_x.abs() < 1e-6);
        assert!((slice.text_y - 185.0 * 0.75).abs() < 1e-6);
    }

    #[test]
    fn zero_total_produces_non_finite_percentages() {
        let layout = layout_of("pie\n\"a\": 0\n\"b\": 0\n");
        assert!(layout.slices.iter().all(|s| !s.percent.is_finite()));
        for slice in &layout.slices {
            assert_eq!(slice.start_angle, slice.end_angle);
        }
    }

    #[test]
    fn legend_rows_are_centered_on_the_pie() {
        let layout = layout_of("pie\n\"a\": 1\n\"b\": 2\n\"c\": 3\n");
        assert_eq!(layout.legend[0].x, 216.0);
        assert_eq!(layout.legend[0].y, -33.0);
        assert_eq!(layout.legend[1].y, -11.0);
        assert_eq!(layout.legend[2].y, 11.0);
    }

    #[test]
    fn show_data_captions_carry_the_value() {
        let layout = layout_of("pie showData\n\"Cats\": 42.96\n");
        assert_eq!(layout.legend[0].text, "Cats [42.96]");
        let plain = layout_of("pie\n\"Cats\": 42.96\n");
        assert_eq!(plain.legend[0].text, "Cats");
    }

    #[test]
    fn canvas_width_grows_with_the_widest_caption() {
        let narrow = layout_of("pie\n\"ab\": 1\n");
        let wide = layout_of("pie\n\"a considerably longer label\": 1\n");
        assert!(wide.viewbox_width > narrow.viewbox_width);
        // Default measurer: 17px glyphs at 0.6 width factor.
        assert_eq!(narrow.viewbox_width, 512.0 + 2.0 * 17.0 * 0.6);
    }

    #[test]
    fn outer_ring_tracks_the_configured_stroke_width() {
        let site = PieConfigOverrides {
            pie_outer_stroke_width: Some("10px".to_string()),
            ..Default::default()
        };
        let diagram = parse_with_overrides("pie\n\"a\": 1\n", &site).unwrap();
        let layout = layout_pie_diagram(&diagram, &CharWidthTextMeasurer::default());
        assert_eq!(layout.outer_circle_radius, 190.0);
    }

    #[test]
    fn palette_cycles_past_twelve_labels() {
        let mut text = String::from("pie\n");
        for i in 0..13 {
            text.push_str(&format!("\"s{i}\": {}\n", 13 - i));
        }
        let layout = layout_of(&text);
        assert_eq!(layout.slices.len(), 13);
        assert_eq!(layout.slices[12].fill, layout.slices[0].fill);
        assert_ne!(layout.slices[11].fill, layout.slices[0].fill);
    }
}
