//! Circular-proportion layout: an ordered sequence of values becomes an
//! ordered sequence of angular slices.

use std::cmp::Ordering;
use std::f64::consts::TAU;

/// Options for [`pie_slices`].
///
/// Defaults describe a full clockwise circle with no gaps and no reordering.
/// Negative spans (`end_angle < start_angle`) lay slices out
/// counter-clockwise; spans with a magnitude above one full turn are clamped.
#[derive(Debug, Clone, Copy)]
pub struct PieLayoutOptions {
    pub start_angle: f64,
    pub end_angle: f64,
    /// Angular gap inserted before every slice. Clamped so the per-slice gap
    /// never exceeds the average per-slice span.
    pub pad_angle: f64,
    /// Comparator over extracted values; `None` preserves input order. Ties
    /// keep their input order either way.
    pub sort_values: Option<fn(f64, f64) -> Ordering>,
}

impl Default for PieLayoutOptions {
    fn default() -> Self {
        Self {
            start_angle: 0.0,
            end_angle: TAU,
            pad_angle: 0.0,
            sort_values: None,
        }
    }
}

/// One laid-out slice. `index` points back into the input sequence, so
/// callers can recover the source item when the emission order differs from
/// the input order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PieSlice {
    pub index: usize,
    pub value: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    /// The clamped pad magnitude applied to every slice of this layout.
    pub pad_angle: f64,
}

impl PieSlice {
    pub fn span(&self) -> f64 {
        self.end_angle - self.start_angle
    }
}

/// Allocates one slice per item, each spanning an angle proportional to its
/// extracted value out of the sum of all positive values.
///
/// Items whose value is not greater than zero still occupy a slot but
/// contribute no proportional span. Consecutive slices are contiguous:
/// every slice starts where the previous one ended.
pub fn pie_slices<T>(
    items: &[T],
    value_of: impl Fn(&T) -> f64,
    options: &PieLayoutOptions,
) -> Vec<PieSlice> {
    let n = items.len();
    if n == 0 {
        return Vec::new();
    }

    let values: Vec<f64> = items.iter().map(value_of).collect();
    let sum: f64 = values.iter().copied().filter(|v| *v > 0.0).sum();

    let span = (options.end_angle - options.start_angle).clamp(-TAU, TAU);
    let pad = (span.abs() / n as f64).min(options.pad_angle);
    let pad_step = if span < 0.0 { -pad } else { pad };

    let mut order: Vec<usize> = (0..n).collect();
    if let Some(compare) = options.sort_values {
        order.sort_by(|&a, &b| compare(values[a], values[b]));
    }

    let scale = if sum > 0.0 {
        (span - n as f64 * pad_step) / sum
    } else {
        0.0
    };

    let mut slices = Vec::with_capacity(n);
    let mut angle = options.start_angle;
    for index in order {
        let value = values[index];
        let proportional = if value > 0.0 { value * scale } else { 0.0 };
        let end = angle + proportional + pad_step;
        slices.push(PieSlice {
            index,
            value,
            start_angle: angle,
            end_angle: end,
            pad_angle: pad,
        });
        angle = end;
    }
    slices
}
