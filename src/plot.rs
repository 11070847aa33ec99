// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Plots of network models: the capacity map, and charts of the generation
//! at a single location.
//!
//! Every plot is first assembled into a plain data structure, which can be
//! inspected, and then drawn onto an [`SvgArea`].

mod generation;
mod legend;
mod map;

pub use generation::{GenerationMix, GenerationProfile};
pub use legend::{legend_circle_radii, LegendCircle, LegendScale};
pub use map::{BranchSegment, BusPie, MapBounds, MapFigure, Wedge};

use std::f64::consts::TAU;

use plotters::coord::Shift;
use plotters::prelude::{DrawingArea, SVGBackend};

const FONT: &str = "sans-serif";

/// The drawing area plots are drawn onto.
///
/// Text is rendered as SVG `<text>` elements by the backend itself, as the
/// crate is built without a font rasterizer.
pub type SvgArea<'a> = DrawingArea<SVGBackend<'a>, Shift>;

/// Returns the outline of a pie wedge as a polygon, starting and ending at
/// the center.  Angles are in radians, counter-clockwise from the x axis.
pub(crate) fn wedge_polygon(center: (f64, f64), radius: f64, start: f64, end: f64) -> Vec<(f64, f64)> {
    let steps = (((end - start) / TAU) * 72.0).ceil().max(2.0) as usize;
    let mut points = Vec::with_capacity(steps + 2);
    points.push(center);
    for step in 0..=steps {
        let angle = start + (end - start) * step as f64 / steps as f64;
        points.push((
            center.0 + radius * angle.cos(),
            center.1 + radius * angle.sin(),
        ));
    }
    points
}

/// Returns the stroke width in pixels for a line width.
fn stroke(width: f64) -> u32 {
    width.round().max(1.0) as u32
}
