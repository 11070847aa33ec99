// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Widths of the lines and links drawn on the capacity map.

use crate::{Asset, AssetCategory, Bus, Error, LineWidthConfig, MapConfig, NetworkModel};

/// Clips `value` into the displayed range and scales it into a line width.
///
/// Values below `lower` become zero, values above `upper` become `upper`.
pub fn clip_width(value: f64, lower: f64, upper: f64, divisor: f64) -> f64 {
    let clipped = if value < lower {
        0.0
    } else if value > upper {
        upper
    } else {
        value
    };
    clipped / divisor
}

impl LineWidthConfig {
    /// Returns the lower threshold for the given mode.
    pub fn lower_threshold(&self, transmission: bool) -> f64 {
        if transmission {
            self.transmission_lower_threshold
        } else {
            self.expansion_lower_threshold
        }
    }

    /// Returns the width of a branch with the given capacities.
    ///
    /// In transmission mode the width follows the optimal capacity, otherwise
    /// it follows the capacity expansion.
    pub fn width(&self, nominal: f64, optimal: f64, transmission: bool) -> f64 {
        let value = if transmission {
            optimal
        } else {
            optimal - nominal
        };
        clip_width(
            value,
            self.lower_threshold(transmission),
            self.upper_threshold,
            self.divisor,
        )
    }
}

/// The width of a line or link on the map.
#[derive(Clone, Debug, PartialEq)]
pub struct BranchWidth {
    /// The id of the line or link.
    pub asset_id: String,
    /// Either `Line` or `Link`.
    pub category: AssetCategory,
    /// The ids of the connected buses.
    pub bus0: String,
    pub bus1: String,
    /// The clipped and scaled width.
    pub width: f64,
}

impl<B, A> NetworkModel<B, A>
where
    B: Bus,
    A: Asset,
{
    /// Returns the widths of all lines and links in the network.
    pub fn branch_widths(&self, config: &MapConfig) -> Result<Vec<BranchWidth>, Error> {
        config.line_widths.validate(config.transmission)?;

        Ok(self
            .branches()
            .map(|branch| BranchWidth {
                asset_id: branch.asset.asset_id().to_string(),
                category: branch.asset.category(),
                bus0: branch.bus0.bus_id().to_string(),
                bus1: branch.bus1.bus_id().to_string(),
                width: config.line_widths.width(
                    branch.asset.nominal_capacity(),
                    branch.asset.optimal_capacity(),
                    config.transmission,
                ),
            })
            .collect())
    }
}
