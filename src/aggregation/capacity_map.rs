// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Methods for aggregating the capacities shown on the buses of the capacity
//! map.

use std::collections::{BTreeSet, HashSet};

use tracing::{debug, warn};

use crate::network::Locations;
use crate::{Asset, AssetCategory, Bus, Error, MapConfig, NetworkModel, TechNames};

use super::LocationTechTable;

/// The capacity and cost tables of a single asset category.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CategoryTables {
    /// Summed capacities.
    pub capacity: LocationTechTable,
    /// Summed `capital_cost × capacity`.
    pub costs: LocationTechTable,
}

/// The capacity of one technology at one location, as shown on the map.
#[derive(Clone, Debug, PartialEq)]
pub struct CapacityEntry {
    /// The electric bus the capacity is drawn on.
    pub location: String,
    /// The normalized technology name.
    pub technology: String,
    /// The summed capacity.
    pub value: f64,
}

/// The result of the aggregation pipeline, ready to be drawn on a map.
#[derive(Clone, Debug, PartialEq)]
pub struct CapacityMap {
    entries: Vec<CapacityEntry>,
    technologies: Vec<String>,
    legend_technologies: Vec<String>,
    costs: LocationTechTable,
    dropped_locations: Vec<String>,
    uncolored_technologies: Vec<String>,
}

impl CapacityMap {
    /// Returns the non-zero capacities at electric buses, ordered by location
    /// and then by display order of the technologies.
    pub fn entries(&self) -> &[CapacityEntry] {
        &self.entries
    }

    /// Returns the displayed technologies, in display order.
    pub fn technologies(&self) -> &[String] {
        &self.technologies
    }

    /// Returns the technologies that passed the capacity threshold, which are
    /// the ones listed in the map legend.
    pub fn legend_technologies(&self) -> &[String] {
        &self.legend_technologies
    }

    /// Returns the combined cost table of all included categories.
    pub fn costs(&self) -> &LocationTechTable {
        &self.costs
    }

    /// Returns the locations that had capacities but are not electric buses.
    pub fn dropped_locations(&self) -> &[String] {
        &self.dropped_locations
    }

    /// Returns the displayed technologies that have no color in
    /// [`MapConfig::tech_colors`], in display order.
    pub fn uncolored_technologies(&self) -> &[String] {
        &self.uncolored_technologies
    }

    /// Returns the entries at the given location.
    pub fn entries_at<'a>(&'a self, location: &'a str) -> impl Iterator<Item = &'a CapacityEntry> {
        self.entries.iter().filter(move |e| e.location == location)
    }

    /// Returns the sum of all entries.
    pub fn total(&self) -> f64 {
        self.entries.iter().map(|e| e.value).sum()
    }
}

/// Returns the given technologies, with the ones in `preferred_order` first,
/// in that order, followed by the rest in lexical order.
fn order_technologies(technologies: &BTreeSet<&str>, preferred_order: &[String]) -> Vec<String> {
    let mut ordered = Vec::with_capacity(technologies.len());
    for technology in preferred_order {
        if technologies.contains(technology.as_str()) && !ordered.contains(technology) {
            ordered.push(technology.clone());
        }
    }
    for technology in technologies {
        if !preferred_order.iter().any(|p| p == technology) {
            ordered.push(technology.to_string());
        }
    }
    ordered
}

/// Capacity aggregation.
impl<B, A> NetworkModel<B, A>
where
    B: Bus,
    A: Asset,
{
    /// Returns the capacity and cost tables of one asset category, or `None`
    /// if the network has no assets of that category.
    ///
    /// Capacities are grouped by the location of the assets and by the
    /// [map group][TechNames::map_group] of their carriers.
    pub fn category_tables(
        &self,
        category: AssetCategory,
        locations: &Locations<'_>,
        tech_names: &TechNames,
    ) -> Result<Option<CategoryTables>, Error> {
        let mut tables = CategoryTables::default();
        let mut found = false;

        for asset in self.assets_of(category) {
            found = true;
            let aid = asset.asset_id();
            let Some(location) = locations.get(aid) else {
                return Err(Error::internal(format!(
                    "No location assigned to asset {aid}."
                )));
            };
            let technology = tech_names.map_group(asset.carrier());
            let capacity = asset.optimal_capacity();

            tables.capacity.add(location, technology, capacity);
            tables
                .costs
                .add(location, technology, asset.capital_cost() * capacity);
        }

        Ok(found.then_some(tables))
    }

    /// Aggregates the capacities of the configured asset categories into the
    /// per-bus capacities shown on the map.
    ///
    /// Technologies are dropped when their capacity summed over all locations
    /// is below the configured threshold, or when it is zero everywhere.
    /// Capacities at locations that aren't electric buses are dropped too.
    pub fn capacity_map(
        &self,
        config: &MapConfig,
        tech_names: &TechNames,
    ) -> Result<CapacityMap, Error> {
        config.validate()?;

        let locations = self.locations();
        let mut capacity = LocationTechTable::new();
        let mut costs = LocationTechTable::new();

        let mut seen = HashSet::new();
        for &category in &config.components {
            if !seen.insert(category) {
                continue;
            }
            let Some(tables) = self.category_tables(category, &locations, tech_names)? else {
                debug!("No assets of category {category}, skipping.");
                continue;
            };
            capacity.merge(&tables.capacity);
            costs.merge(&tables.costs);
        }

        let below_threshold = capacity
            .technology_totals()
            .into_iter()
            .filter(|(_, total)| *total < config.threshold)
            .map(|(technology, _)| technology.to_string())
            .collect::<HashSet<_>>();
        capacity.retain_technologies(|t| !below_threshold.contains(t));

        let legend_technologies = capacity
            .technologies()
            .into_iter()
            .map(String::from)
            .collect::<Vec<_>>();

        capacity.drop_zero_technologies();
        let technologies = order_technologies(&capacity.technologies(), &config.preferred_order);

        let uncolored_technologies = technologies
            .iter()
            .filter(|t| !config.tech_colors.contains_key(t.as_str()))
            .cloned()
            .collect::<Vec<_>>();
        for technology in &uncolored_technologies {
            warn!("{technology} not defined in tech_colors");
        }

        let electric_buses = self
            .electric_buses()
            .map(|b| b.bus_id())
            .collect::<HashSet<_>>();
        let dropped_locations = capacity
            .locations()
            .into_iter()
            .filter(|l| !electric_buses.contains(l))
            .map(String::from)
            .collect::<Vec<_>>();
        if !dropped_locations.is_empty() {
            warn!("Dropping non-bus locations: {dropped_locations:?}");
        }

        let mut entries = Vec::new();
        for location in capacity.locations() {
            if !electric_buses.contains(location) {
                continue;
            }
            for technology in &technologies {
                let value = capacity.get(location, technology);
                if value != 0.0 {
                    entries.push(CapacityEntry {
                        location: location.to_string(),
                        technology: technology.clone(),
                        value,
                    });
                }
            }
        }

        Ok(CapacityMap {
            entries,
            technologies,
            legend_technologies,
            costs,
            dropped_locations,
            uncolored_technologies,
        })
    }
}
