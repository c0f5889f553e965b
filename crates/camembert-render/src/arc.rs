//! Wedge/annulus path and centroid geometry.
//!
//! Angles are measured from 12 o'clock, increasing clockwise, with the y
//! axis pointing down: a point at angle `a` and radius `r` sits at
//! `(r·sin a, −r·cos a)`.

use crate::svg::fmt;
use std::f64::consts::{PI, TAU};
use std::fmt::Write as _;

const EPSILON: f64 = 1e-12;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arc {
    pub inner_radius: f64,
    pub outer_radius: f64,
}

impl Arc {
    pub fn new(inner_radius: f64, outer_radius: f64) -> Self {
        Self {
            inner_radius,
            outer_radius,
        }
    }

    fn point(radius: f64, angle: f64) -> (f64, f64) {
        (radius * angle.sin(), -radius * angle.cos())
    }

    /// Representative point for label placement: the mid-angle at the radius
    /// halfway between the inner and outer edge.
    pub fn centroid(&self, start_angle: f64, end_angle: f64) -> (f64, f64) {
        let radius = (self.inner_radius + self.outer_radius) / 2.0;
        Self::point(radius, (start_angle + end_angle) / 2.0)
    }

    /// SVG path for the wedge (or annular wedge) between the two angles,
    /// centered on the origin.
    pub fn path(&self, start_angle: f64, end_angle: f64) -> String {
        let span = (end_angle - start_angle).abs();
        if span > TAU - EPSILON {
            return self.full_turn_path();
        }

        let sweep = if end_angle > start_angle { 1 } else { 0 };
        let large = if span > PI { 1 } else { 0 };
        let r0 = self.inner_radius;
        let r1 = self.outer_radius;
        let (x0, y0) = Self::point(r1, start_angle);
        let (x1, y1) = Self::point(r1, end_angle);

        let mut d = format!(
            "M{},{}A{},{},0,{},{},{},{}",
            fmt(x0),
            fmt(y0),
            fmt(r1),
            fmt(r1),
            large,
            sweep,
            fmt(x1),
            fmt(y1)
        );
        if r0 > EPSILON {
            let (x2, y2) = Self::point(r0, end_angle);
            let (x3, y3) = Self::point(r0, start_angle);
            let _ = write!(
                &mut d,
                "L{},{}A{},{},0,{},{},{},{}",
                fmt(x2),
                fmt(y2),
                fmt(r0),
                fmt(r0),
                large,
                1 - sweep,
                fmt(x3),
                fmt(y3)
            );
        } else {
            d.push_str("L0,0");
        }
        d.push('Z');
        d
    }

    /// A single arc command cannot encode a full circle, so a full turn is
    /// emitted as two half-turn arcs (plus a reversed inner circle for an
    /// annulus).
    fn full_turn_path(&self) -> String {
        let r1 = self.outer_radius;
        let mut d = format!(
            "M0,{nr}A{r},{r},0,1,1,0,{r}A{r},{r},0,1,1,0,{nr}Z",
            r = fmt(r1),
            nr = fmt(-r1)
        );
        let r0 = self.inner_radius;
        if r0 > EPSILON {
            let _ = write!(
                &mut d,
                "M0,{nr}A{r},{r},0,1,0,0,{r}A{r},{r},0,1,0,0,{nr}Z",
                r = fmt(r0),
                nr = fmt(-r0)
            );
        }
        d
    }
}
