// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! The capacity map: pie markers of the installed capacities on every
//! electric bus, and the lines and links between them.

use std::collections::HashMap;
use std::f64::consts::TAU;
use std::ops::Range;

use plotters::coord::Shift;
use plotters::prelude::*;
use tracing::debug;

use crate::{Asset, Bus, Error, MapConfig, NetworkModel, TechNames};

use super::{stroke, wedge_polygon, LegendCircle, SvgArea, FONT};

/// Margin added around the buses, in degrees.
const BOUNDS_MARGIN: f64 = 5.0;

/// Capacities shown in the line width legend, in MW.
const LINE_LEGEND_CAPACITIES: [f64; 2] = [1000.0, 100.0];

/// One technology in a bus marker.
#[derive(Clone, Debug, PartialEq)]
pub struct Wedge {
    pub technology: String,
    /// The capacity of the technology at the bus.
    pub value: f64,
    pub color: RGBColor,
}

/// The pie marker drawn on a bus.  Its area is proportional to the total
/// capacity at the bus.
#[derive(Clone, Debug, PartialEq)]
pub struct BusPie {
    pub bus_id: String,
    /// The bus coordinates.
    pub center: (f64, f64),
    /// The radius in degrees.
    pub radius: f64,
    /// The wedges in display order, counter-clockwise from the x axis.
    pub wedges: Vec<Wedge>,
}

impl BusPie {
    /// Returns the polygons of the wedges, in map coordinates.
    pub fn polygons(&self) -> Vec<(Vec<(f64, f64)>, RGBColor)> {
        let total = self.wedges.iter().map(|w| w.value).sum::<f64>();
        if total <= 0.0 {
            return Vec::new();
        }
        let mut start = 0.0;
        self.wedges
            .iter()
            .map(|wedge| {
                let end = start + TAU * wedge.value / total;
                let polygon = wedge_polygon(self.center, self.radius, start, end);
                start = end;
                (polygon, wedge.color)
            })
            .collect()
    }
}

/// A line or link drawn between two electric buses.
#[derive(Clone, Debug, PartialEq)]
pub struct BranchSegment {
    pub asset_id: String,
    /// Coordinates of the first bus.
    pub from: (f64, f64),
    /// Coordinates of the second bus.
    pub to: (f64, f64),
    /// The line width, zero for branches that aren't drawn.
    pub width: f64,
    pub color: RGBColor,
}

/// The visible part of the map, in degrees.
#[derive(Clone, Debug, PartialEq)]
pub struct MapBounds {
    /// Longitudes.
    pub x: Range<f64>,
    /// Latitudes.
    pub y: Range<f64>,
}

impl MapBounds {
    /// Returns bounds that enclose the given buses, with a margin.
    ///
    /// Only positive coordinates are considered, unless there are none.
    pub fn around<'a, B: Bus + 'a>(buses: impl IntoIterator<Item = &'a B>) -> Self {
        let buses = buses.into_iter().collect::<Vec<_>>();
        Self {
            x: Self::range(buses.iter().map(|b| b.x()), -180.0..180.0),
            y: Self::range(buses.iter().map(|b| b.y()), -90.0..90.0),
        }
    }

    fn range(values: impl Iterator<Item = f64> + Clone, fallback: Range<f64>) -> Range<f64> {
        match min_max(values.clone().filter(|v| *v > 0.0)).or_else(|| min_max(values)) {
            Some((lo, hi)) => (lo - BOUNDS_MARGIN)..(hi + BOUNDS_MARGIN),
            None => fallback,
        }
    }
}

fn min_max(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    values.fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((f64::min(lo, v), f64::max(hi, v))),
    })
}

/// Everything needed to draw the capacity map of a network.
#[derive(Clone, Debug, PartialEq)]
pub struct MapFigure {
    pub title: String,
    pub bounds: MapBounds,
    /// One marker per electric bus with capacities.
    pub pies: Vec<BusPie>,
    /// Lines and links between electric buses.
    pub segments: Vec<BranchSegment>,
    /// Technologies and their colors.
    pub tech_legend: Vec<(String, RGBColor)>,
    /// Reference circles for the marker sizes.
    pub capacity_legend: Vec<LegendCircle>,
    /// Labels and line widths.
    pub line_legend: Vec<(String, f64)>,
    /// The color of lines and links.
    pub ac_color: RGBColor,
    /// The background color.
    pub ocean_color: RGBColor,
}

impl MapFigure {
    /// Creates the capacity map of the given network.
    ///
    /// Returns an error if the configuration is invalid.
    pub fn try_new<B, A>(
        network: &NetworkModel<B, A>,
        config: &MapConfig,
        tech_names: &TechNames,
    ) -> Result<Self, Error>
    where
        B: Bus,
        A: Asset,
    {
        let capacity_map = network.capacity_map(config, tech_names)?;
        let scale = network.legend_scale(&config.components);
        let widths = network.branch_widths(config)?;

        let mut pies = Vec::new();
        for bus in network.electric_buses() {
            let wedges = capacity_map
                .entries_at(bus.bus_id())
                .map(|entry| Wedge {
                    technology: entry.technology.clone(),
                    value: entry.value,
                    color: config.tech_color(&entry.technology),
                })
                .collect::<Vec<_>>();
            if wedges.is_empty() {
                continue;
            }
            let total = wedges.iter().map(|w| w.value).sum::<f64>();
            pies.push(BusPie {
                bus_id: bus.bus_id().to_string(),
                center: (bus.x(), bus.y()),
                radius: (total / config.bus_size_factor).sqrt(),
                wedges,
            });
        }

        let coordinates = network
            .electric_buses()
            .map(|b| (b.bus_id(), (b.x(), b.y())))
            .collect::<HashMap<_, _>>();
        let mut segments = Vec::new();
        for branch in widths {
            let (Some(&from), Some(&to)) = (
                coordinates.get(branch.bus0.as_str()),
                coordinates.get(branch.bus1.as_str()),
            ) else {
                debug!(
                    "Skipping {} {}: it doesn't connect two electric buses.",
                    branch.category, branch.asset_id
                );
                continue;
            };
            segments.push(BranchSegment {
                asset_id: branch.asset_id,
                from,
                to,
                width: branch.width,
                color: config.ac_color,
            });
        }

        Ok(Self {
            title: format!(
                "Installed {} capacities and transmission lines",
                scale.item
            ),
            bounds: MapBounds::around(network.electric_buses()),
            pies,
            segments,
            tech_legend: capacity_map
                .legend_technologies()
                .iter()
                .map(|t| (t.clone(), config.tech_color(t)))
                .collect(),
            capacity_legend: scale.circles(config.bus_size_factor),
            line_legend: LINE_LEGEND_CAPACITIES
                .iter()
                .map(|s| (format!("{s} MW"), s / config.line_widths.divisor))
                .collect(),
            ac_color: config.ac_color,
            ocean_color: config.ocean_color,
        })
    }

    /// Draws the map onto the given area.  The right fifth of the area is
    /// used for the technology legend.
    pub fn draw(&self, root: &SvgArea<'_>) -> Result<(), Error> {
        root.fill(&WHITE).map_err(Error::from_drawing)?;
        let (width, _) = root.dim_in_pixel();
        let (map_area, legend_area) = root.split_horizontally(width * 4 / 5);

        let mut chart = ChartBuilder::on(&map_area)
            .caption(&self.title, (FONT, 20))
            .margin(10)
            .build_cartesian_2d(self.bounds.x.clone(), self.bounds.y.clone())
            .map_err(Error::from_drawing)?;

        chart
            .plotting_area()
            .fill(&self.ocean_color)
            .map_err(Error::from_drawing)?;

        chart
            .draw_series(
                self.segments
                    .iter()
                    .filter(|s| s.width > 0.0)
                    .map(|s| PathElement::new(vec![s.from, s.to], s.color.stroke_width(stroke(s.width)))),
            )
            .map_err(Error::from_drawing)?;

        chart
            .draw_series(
                self.pies
                    .iter()
                    .flat_map(BusPie::polygons)
                    .map(|(points, color)| Polygon::new(points, color.filled())),
            )
            .map_err(Error::from_drawing)?;

        let left = chart.backend_coord(&(self.bounds.x.start, self.bounds.y.start));
        let right = chart.backend_coord(&(self.bounds.x.end, self.bounds.y.start));
        let pixels_per_degree =
            f64::from((right.0 - left.0).abs()) / (self.bounds.x.end - self.bounds.x.start);

        self.draw_capacity_legend(&map_area, pixels_per_degree)?;
        self.draw_line_legend(&map_area)?;
        self.draw_tech_legend(&legend_area)?;

        root.present().map_err(Error::from_drawing)
    }

    fn draw_capacity_legend<DB: DrawingBackend>(
        &self,
        area: &DrawingArea<DB, Shift>,
        pixels_per_degree: f64,
    ) -> Result<(), Error> {
        let (width, height) = area.dim_in_pixel();
        let x = (width / 20) as i32;
        let mut y = (height / 10) as i32;

        for circle in &self.capacity_legend {
            let radius = (circle.radius * pixels_per_degree).round().max(1.0) as i32;
            y += radius;
            area.draw(&Circle::new((x + radius, y), radius, WHITE.filled()))
                .map_err(Error::from_drawing)?;
            area.draw(&Circle::new((x + radius, y), radius, BLACK.stroke_width(1)))
                .map_err(Error::from_drawing)?;
            area.draw(&Text::new(
                circle.label.as_str(),
                (x + 2 * radius + 8, y - 7),
                (FONT, 14).into_font(),
            ))
            .map_err(Error::from_drawing)?;
            y += radius + 12;
        }
        Ok(())
    }

    fn draw_line_legend<DB: DrawingBackend>(&self, area: &DrawingArea<DB, Shift>) -> Result<(), Error> {
        let (width, height) = area.dim_in_pixel();
        let x = (width * 3 / 10) as i32;
        let mut y = (height / 10) as i32;

        for (label, line_width) in &self.line_legend {
            area.draw(&PathElement::new(
                vec![(x, y), (x + 40, y)],
                self.ac_color.stroke_width(stroke(*line_width)),
            ))
            .map_err(Error::from_drawing)?;
            area.draw(&Text::new(
                label.as_str(),
                (x + 50, y - 7),
                (FONT, 14).into_font(),
            ))
            .map_err(Error::from_drawing)?;
            y += 40;
        }
        Ok(())
    }

    fn draw_tech_legend<DB: DrawingBackend>(&self, area: &DrawingArea<DB, Shift>) -> Result<(), Error> {
        const ROW_HEIGHT: i32 = 22;

        let (_, height) = area.dim_in_pixel();
        let rows = self.tech_legend.len() as i32;
        let mut y = ((height as i32) - rows * ROW_HEIGHT).max(0) / 2;

        for (technology, color) in &self.tech_legend {
            area.draw(&Rectangle::new([(10, y), (30, y + 12)], color.filled()))
                .map_err(Error::from_drawing)?;
            area.draw(&Text::new(
                technology.as_str(),
                (38, y),
                (FONT, 14).into_font(),
            ))
            .map_err(Error::from_drawing)?;
            y += ROW_HEIGHT;
        }
        Ok(())
    }
}

/// Capacity map plotting.
impl<B, A> NetworkModel<B, A>
where
    B: Bus,
    A: Asset,
{
    /// Draws the capacity map of the network onto the given area.
    pub fn plot_map(
        &self,
        area: &SvgArea<'_>,
        config: &MapConfig,
        tech_names: &TechNames,
    ) -> Result<MapFigure, Error> {
        let figure = MapFigure::try_new(self, config, tech_names)?;
        figure.draw(area)?;
        Ok(figure)
    }
}
