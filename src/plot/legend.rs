// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Sizing of the circle markers in the capacity legend.

use std::collections::HashMap;

use crate::{asset_category::CategoryPredicates, Asset, AssetCategory, Bus, NetworkModel};

/// Returns the radii of circles whose areas represent the given sizes, using
/// the same scaling as the bus markers on the map.
pub fn legend_circle_radii(sizes: &[f64], scale: f64) -> Vec<f64> {
    sizes.iter().map(|s| (s / scale).sqrt()).collect()
}

/// A circle in the capacity legend, with its radius in map units.
#[derive(Clone, Debug, PartialEq)]
pub struct LegendCircle {
    pub radius: f64,
    /// The capacity and unit, right aligned.
    pub label: String,
}

/// The reference size of the capacity legend.
#[derive(Clone, Debug, PartialEq)]
pub struct LegendScale {
    /// The largest capacity in the legend.
    pub size: f64,
    /// `"GWh"` for storage, `"GW"` for power.
    pub unit: &'static str,
    /// `"storage"` or `"power"`, for the map title.
    pub item: &'static str,
}

impl LegendScale {
    /// Returns the legend circles for a tenth of the reference size and the
    /// full reference size.
    pub fn circles(&self, bus_size_factor: f64) -> Vec<LegendCircle> {
        let sizes = [self.size / 10.0, self.size];
        legend_circle_radii(&sizes, bus_size_factor)
            .into_iter()
            .zip(sizes)
            .map(|(radius, size)| LegendCircle {
                radius,
                label: format!("{size:10.0} {}", self.unit),
            })
            .collect()
    }
}

impl<B, A> NetworkModel<B, A>
where
    B: Bus,
    A: Asset,
{
    /// Returns the reference size of the capacity legend.
    ///
    /// When stores are shown, this is the largest store.  Otherwise it is the
    /// largest generator capacity summed per bus.
    pub fn legend_scale(&self, components: &[AssetCategory]) -> LegendScale {
        if components.contains(&AssetCategory::Store) {
            let size = self
                .assets()
                .filter(|a| a.is_store())
                .map(|a| a.optimal_capacity())
                .fold(0.0, f64::max);
            return LegendScale {
                size,
                unit: "GWh",
                item: "storage",
            };
        }

        let mut per_bus = HashMap::<&str, f64>::new();
        for generator in self.assets().filter(|a| a.is_generator()) {
            *per_bus.entry(generator.bus()).or_insert(0.0) += generator.optimal_capacity();
        }
        LegendScale {
            size: per_bus.into_values().fold(0.0, f64::max),
            unit: "GW",
            item: "power",
        }
    }
}
