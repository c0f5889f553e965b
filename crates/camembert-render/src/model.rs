//! Layout output models.
//!
//! Everything here is derived geometry, recomputed on every layout pass from
//! the current section store; nothing is persisted.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieSliceLayout {
    pub label: String,
    pub value: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    /// `value / total * 100`, rounded to the nearest integer. Non-finite when
    /// the total of all section values is zero.
    pub percent: f64,
    /// Anchor of the percentage label (relative to the pie center).
    pub text_x: f64,
    pub text_y: f64,
    pub fill: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieLegendRowLayout {
    pub label: String,
    pub value: f64,
    /// Rendered caption: the label, or `label [value]` when the diagram
    /// shows data.
    pub text: String,
    pub fill: String,
    /// Row origin relative to the pie center.
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieLayout {
    pub viewbox_width: f64,
    pub viewbox_height: f64,
    pub center_x: f64,
    pub center_y: f64,
    /// Outer radius of the slices.
    pub radius: f64,
    /// Radius of the decorative ring drawn around the pie.
    pub outer_circle_radius: f64,
    /// Radius at which percentage labels are anchored.
    pub label_radius: f64,
    pub title: String,
    pub title_y: f64,
    pub acc_title: String,
    pub acc_description: String,
    pub show_data: bool,
    pub slices: Vec<PieSliceLayout>,
    pub legend: Vec<PieLegendRowLayout>,
}
