// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! This module contains the configuration options for the capacity map and
//! the generation charts.

use std::collections::BTreeMap;

use plotters::style::RGBColor;

use crate::{AssetCategory, Error};

/// Display colors, keyed by technology name.
pub type TechColors = BTreeMap<String, RGBColor>;

/// Color used for technologies that are missing from [`TechColors`].
pub const FALLBACK_COLOR: RGBColor = RGBColor(128, 128, 128);

/// Thresholds and scaling for the widths of lines and links on the map.
#[derive(Clone, Debug, PartialEq)]
pub struct LineWidthConfig {
    /// Values below this are drawn with zero width, when only the capacity
    /// expansion is shown.
    pub expansion_lower_threshold: f64,

    /// Values below this are drawn with zero width, when the full
    /// transmission capacity is shown.
    pub transmission_lower_threshold: f64,

    /// Values above this are clipped to it.
    pub upper_threshold: f64,

    /// Clipped values are divided by this to get a line width.
    pub divisor: f64,
}

impl Default for LineWidthConfig {
    fn default() -> Self {
        Self {
            expansion_lower_threshold: 100.0,
            transmission_lower_threshold: 0.0,
            upper_threshold: 1000.0,
            divisor: 50.0,
        }
    }
}

impl LineWidthConfig {
    /// Returns an error if the thresholds or the divisor can't produce
    /// sensible widths in the given mode.
    ///
    /// Only the lower threshold of the active mode is checked against the
    /// upper threshold.
    pub fn validate(&self, transmission: bool) -> Result<(), Error> {
        let values = [
            self.expansion_lower_threshold,
            self.transmission_lower_threshold,
            self.upper_threshold,
            self.divisor,
        ];
        if values.iter().any(|v| !v.is_finite()) {
            return Err(Error::invalid_config(format!(
                "Line width settings must be finite: {:?}",
                self
            )));
        }
        if self.divisor <= 0.0 {
            return Err(Error::invalid_config(format!(
                "Line width divisor must be positive, got {}",
                self.divisor
            )));
        }
        let lower = self.lower_threshold(transmission);
        if self.upper_threshold < lower {
            return Err(Error::invalid_config(format!(
                "Upper line threshold {} is below lower threshold {}",
                self.upper_threshold, lower
            )));
        }
        Ok(())
    }
}

/// Configuration options for the capacity map.
#[derive(Clone, Debug)]
pub struct MapConfig {
    /// Technologies whose capacity summed over all locations is below this
    /// are not shown.
    pub threshold: f64,

    /// The asset categories whose capacities are shown on the buses.
    pub components: Vec<AssetCategory>,

    /// Capacities are divided by this before being used as marker areas.
    pub bus_size_factor: f64,

    /// Whether to show the full transmission capacity of lines and links.
    /// When this is `false`, only the capacity expansion is shown.
    pub transmission: bool,

    /// Display colors for the technologies.  Every displayed technology
    /// should have one, missing ones are drawn with [`FALLBACK_COLOR`].
    pub tech_colors: TechColors,

    /// Technologies that are listed here are displayed first, in this order.
    pub preferred_order: Vec<String>,

    /// Line and link width settings.
    pub line_widths: LineWidthConfig,

    /// Color of lines and links.
    pub ac_color: RGBColor,

    /// Background color of the map.
    pub ocean_color: RGBColor,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            threshold: 10.0,
            components: vec![
                AssetCategory::Link,
                AssetCategory::Store,
                AssetCategory::Generator,
            ],
            bus_size_factor: 1e6,
            transmission: true,
            tech_colors: TechColors::new(),
            preferred_order: [
                "transmission",
                "onshore wind",
                "offshore wind",
                "solar PV",
                "gas",
                "H2",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            line_widths: LineWidthConfig::default(),
            ac_color: RGBColor(128, 128, 128),
            ocean_color: RGBColor(173, 216, 230),
        }
    }
}

impl MapConfig {
    /// Returns an error if any of the numeric settings is unusable.
    pub fn validate(&self) -> Result<(), Error> {
        if !self.threshold.is_finite() || self.threshold < 0.0 {
            return Err(Error::invalid_config(format!(
                "Threshold must be a non-negative number, got {}",
                self.threshold
            )));
        }
        if !self.bus_size_factor.is_finite() || self.bus_size_factor <= 0.0 {
            return Err(Error::invalid_config(format!(
                "Bus size factor must be positive, got {}",
                self.bus_size_factor
            )));
        }
        self.line_widths.validate(self.transmission)
    }

    /// Returns the display color for a technology.
    pub fn tech_color(&self, technology: &str) -> RGBColor {
        self.tech_colors
            .get(technology)
            .copied()
            .unwrap_or(FALLBACK_COLOR)
    }
}

/// A generator carrier shown in the generation charts.
#[derive(Clone, Debug, PartialEq)]
pub struct MixEntry {
    /// The carrier suffix of the generator id, `"{location} {carrier}"`.
    pub carrier: String,
    /// The label shown in the chart legend.
    pub label: String,
    /// The color of the series.
    pub color: RGBColor,
}

impl MixEntry {
    /// Creates an entry for the generators with the given carrier.
    pub fn new(carrier: impl Into<String>, label: impl Into<String>, color: RGBColor) -> Self {
        Self {
            carrier: carrier.into(),
            label: label.into(),
            color,
        }
    }
}

/// Configuration options for the generation charts.
#[derive(Clone, Debug)]
pub struct GenerationConfig {
    /// The generators to show.
    pub entries: Vec<MixEntry>,

    /// Number of snapshots shown in the generation profile.
    pub snapshots: usize,

    /// Color of the demand series.
    pub demand_color: RGBColor,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            entries: vec![
                MixEntry::new("onshorewind", "onshore wind", RGBColor(0, 0, 255)),
                MixEntry::new("solar", "solar", RGBColor(255, 165, 0)),
                MixEntry::new("OCGT", "gas (OCGT)", RGBColor(165, 42, 42)),
            ],
            snapshots: 96,
            demand_color: RGBColor(0, 0, 0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert_eq!(MapConfig::default().validate(), Ok(()));
        assert_eq!(LineWidthConfig::default().validate(true), Ok(()));
        assert_eq!(LineWidthConfig::default().validate(false), Ok(()));
    }

    #[test]
    fn test_invalid_values() {
        let config = MapConfig {
            threshold: -1.0,
            ..Default::default()
        };
        assert!(config
            .validate()
            .is_err_and(|e| e
                == Error::invalid_config("Threshold must be a non-negative number, got -1")));

        let config = MapConfig {
            bus_size_factor: 0.0,
            ..Default::default()
        };
        assert!(config.validate().is_err_and(
            |e| e == Error::invalid_config("Bus size factor must be positive, got 0")
        ));

        let widths = LineWidthConfig {
            divisor: 0.0,
            ..Default::default()
        };
        assert!(widths
            .validate(true)
            .is_err_and(|e| e == Error::invalid_config("Line width divisor must be positive, got 0")));
    }

    #[test]
    fn test_upper_threshold_per_mode() {
        let widths = LineWidthConfig {
            upper_threshold: 50.0,
            ..Default::default()
        };
        assert_eq!(widths.validate(true), Ok(()));
        assert!(widths.validate(false).is_err_and(|e| e
            == Error::invalid_config("Upper line threshold 50 is below lower threshold 100")));

        let config = MapConfig {
            transmission: true,
            line_widths: widths.clone(),
            ..Default::default()
        };
        assert_eq!(config.validate(), Ok(()));

        let config = MapConfig {
            transmission: false,
            line_widths: widths,
            ..Default::default()
        };
        assert!(config.validate().is_err_and(|e| e
            == Error::invalid_config("Upper line threshold 50 is below lower threshold 100")));
    }

    #[test]
    fn test_tech_color_fallback() {
        let mut config = MapConfig::default();
        config
            .tech_colors
            .insert("gas".to_string(), RGBColor(165, 42, 42));
        assert_eq!(config.tech_color("gas"), RGBColor(165, 42, 42));
        assert_eq!(config.tech_color("H2"), FALLBACK_COLOR);
    }
}
