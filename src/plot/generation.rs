// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Charts of the electricity generation at a single location.

use std::f64::consts::{FRAC_PI_2, TAU};

use plotters::prelude::*;

use crate::{DispatchSource, Error, GenerationConfig, MixEntry};

use super::{wedge_polygon, SvgArea, FONT};

/// Returns the dispatch series of the generator with the given carrier at
/// the given location.
fn dispatch<'a, D: DispatchSource>(
    source: &'a D,
    location: &str,
    carrier: &str,
) -> Result<&'a [f64], Error> {
    let generator = format!("{location} {carrier}");
    source
        .generator_dispatch(&generator)
        .ok_or_else(|| Error::series_not_found(format!("No dispatch for generator {generator}.")))
}

/// Demand and generation over the first snapshots at one location.
#[derive(Clone, Debug, PartialEq)]
pub struct GenerationProfile {
    pub location: String,
    /// The load at the location's bus.
    pub demand: Vec<f64>,
    pub demand_color: RGBColor,
    /// The dispatch of every configured carrier.
    pub series: Vec<(MixEntry, Vec<f64>)>,
}

impl GenerationProfile {
    /// Collects the demand at bus `location` and the dispatch of the
    /// generators `"{location} {carrier}"` configured in `config`.
    ///
    /// Returns an error if any of the series is missing.
    pub fn try_new<D: DispatchSource>(
        source: &D,
        location: &str,
        config: &GenerationConfig,
    ) -> Result<Self, Error> {
        let truncate = |s: &[f64]| s.iter().copied().take(config.snapshots).collect::<Vec<_>>();

        let demand = source
            .load(location)
            .map(truncate)
            .ok_or_else(|| Error::series_not_found(format!("No load at bus {location}.")))?;
        let series = config
            .entries
            .iter()
            .map(|entry| Ok((entry.clone(), truncate(dispatch(source, location, &entry.carrier)?))))
            .collect::<Result<Vec<_>, Error>>()?;

        Ok(Self {
            location: location.to_string(),
            demand,
            demand_color: config.demand_color,
            series,
        })
    }

    fn value_range(&self) -> std::ops::Range<f64> {
        let values = self
            .demand
            .iter()
            .chain(self.series.iter().flat_map(|(_, s)| s.iter()))
            .copied();
        let (lo, hi) = values.fold((0.0, 0.0), |(lo, hi), v| (f64::min(lo, v), f64::max(hi, v)));
        if hi > lo {
            lo..hi * 1.05
        } else {
            lo..lo + 1.0
        }
    }

    /// Draws the profile as a line chart onto the given area.
    pub fn draw(&self, root: &SvgArea<'_>) -> Result<(), Error> {
        root.fill(&WHITE).map_err(Error::from_drawing)?;

        let len = self
            .series
            .iter()
            .map(|(_, s)| s.len())
            .chain([self.demand.len()])
            .max()
            .unwrap_or(0)
            .max(2);

        let mut chart = ChartBuilder::on(root)
            .margin(10)
            .x_label_area_size(30)
            .y_label_area_size(50)
            .build_cartesian_2d(0.0..(len - 1) as f64, self.value_range())
            .map_err(Error::from_drawing)?;
        chart
            .configure_mesh()
            .x_desc("snapshot")
            .y_desc("MW")
            .draw()
            .map_err(Error::from_drawing)?;

        let lines = [("demand", self.demand_color, &self.demand)]
            .into_iter()
            .chain(
                self.series
                    .iter()
                    .map(|(entry, s)| (entry.label.as_str(), entry.color, s)),
            );
        for (label, color, values) in lines {
            chart
                .draw_series(LineSeries::new(
                    values.iter().enumerate().map(|(i, v)| (i as f64, *v)),
                    color.stroke_width(2),
                ))
                .map_err(Error::from_drawing)?
                .label(label)
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2)));
        }

        chart
            .configure_series_labels()
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()
            .map_err(Error::from_drawing)?;

        root.present().map_err(Error::from_drawing)
    }
}

/// Total generation per carrier at one location.
#[derive(Clone, Debug, PartialEq)]
pub struct GenerationMix {
    pub location: String,
    /// The summed dispatch of every configured carrier.
    pub shares: Vec<(MixEntry, f64)>,
}

impl GenerationMix {
    /// Sums the dispatch of the generators `"{location} {carrier}"`
    /// configured in `config`, over all snapshots.
    ///
    /// Returns an error if any of the series is missing.
    pub fn try_new<D: DispatchSource>(
        source: &D,
        location: &str,
        config: &GenerationConfig,
    ) -> Result<Self, Error> {
        let shares = config
            .entries
            .iter()
            .map(|entry| {
                let total = dispatch(source, location, &entry.carrier)?.iter().sum::<f64>();
                Ok((entry.clone(), total))
            })
            .collect::<Result<Vec<_>, Error>>()?;

        Ok(Self {
            location: location.to_string(),
            shares,
        })
    }

    /// Returns the title of the pie chart.
    pub fn title(&self) -> String {
        format!("Electricity mix {}", self.location)
    }

    /// Returns the angular extent of every share, in radians, starting from
    /// the top and going clockwise.  Negative totals count as zero.
    pub fn wedge_angles(&self) -> Vec<(f64, f64)> {
        let total = self.shares.iter().map(|(_, v)| v.max(0.0)).sum::<f64>();
        if total <= 0.0 {
            return vec![(FRAC_PI_2, FRAC_PI_2); self.shares.len()];
        }
        let mut start = FRAC_PI_2;
        self.shares
            .iter()
            .map(|(_, v)| {
                let end = start - TAU * v.max(0.0) / total;
                let angles = (start, end);
                start = end;
                angles
            })
            .collect()
    }

    /// Draws the mix as a pie chart onto the given area.
    pub fn draw(&self, root: &SvgArea<'_>) -> Result<(), Error> {
        root.fill(&WHITE).map_err(Error::from_drawing)?;
        let area = root
            .titled(&self.title(), (FONT, 20))
            .map_err(Error::from_drawing)?;

        let (width, height) = area.dim_in_pixel();
        let center = (f64::from(width) / 2.0, f64::from(height) / 2.0);
        let radius = f64::from(width.min(height)) * 0.35;

        for ((entry, _), (start, end)) in self.shares.iter().zip(self.wedge_angles()) {
            if start == end {
                continue;
            }
            // Pixel rows grow downwards, so angles are mirrored.
            let points = wedge_polygon(center, radius, -start, -end)
                .into_iter()
                .map(|(x, y)| (x.round() as i32, y.round() as i32))
                .collect::<Vec<_>>();
            area.draw(&Polygon::new(points, entry.color.filled()))
                .map_err(Error::from_drawing)?;

            let middle = -(start + end) / 2.0;
            let label_at = (
                (center.0 + radius * 1.15 * middle.cos()).round() as i32,
                (center.1 + radius * 1.15 * middle.sin()).round() as i32,
            );
            area.draw(&Text::new(
                entry.label.as_str(),
                label_at,
                (FONT, 14).into_font(),
            ))
            .map_err(Error::from_drawing)?;
        }

        root.present().map_err(Error::from_drawing)
    }
}
