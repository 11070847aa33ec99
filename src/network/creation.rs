// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Methods for creating [`NetworkModel`] instances from given buses and
//! assets.

use std::collections::HashSet;

use petgraph::graph::DiGraph;

use crate::{asset_category::CategoryPredicates, Asset, Bus, Error};

use super::{BusIndexMap, NetworkModel};

/// `NetworkModel` instantiation.
impl<B, A> NetworkModel<B, A>
where
    B: Bus,
    A: Asset,
{
    /// Creates a new [`NetworkModel`] from the given buses and assets.
    ///
    /// Returns an error if a bus or an asset is invalid, or if an asset refers
    /// to a bus that doesn't exist.
    pub fn try_new<BusIterator: IntoIterator<Item = B>, AssetIterator: IntoIterator<Item = A>>(
        buses: BusIterator,
        assets: AssetIterator,
    ) -> Result<Self, Error> {
        let (graph, bus_indices) = Self::create_graph(buses)?;

        let mut network = Self {
            graph,
            bus_indices,
            assets: Vec::new(),
        };
        network.add_assets(assets)?;

        Ok(network)
    }

    fn create_graph(
        buses: impl IntoIterator<Item = B>,
    ) -> Result<(DiGraph<B, usize>, BusIndexMap), Error> {
        let mut graph = DiGraph::new();
        let mut indices = BusIndexMap::new();

        for bus in buses {
            let bid = bus.bus_id().to_string();

            if !bus.x().is_finite() || !bus.y().is_finite() {
                return Err(Error::invalid_bus(format!(
                    "Bus {bid} has non-finite coordinates: ({}, {})",
                    bus.x(),
                    bus.y()
                )));
            }
            if indices.contains_key(&bid) {
                return Err(Error::invalid_bus(format!("Duplicate bus ID found: {bid}")));
            }

            let idx = graph.add_node(bus);
            indices.insert(bid, idx);
        }

        Ok((graph, indices))
    }

    fn add_assets(&mut self, assets: impl IntoIterator<Item = A>) -> Result<(), Error> {
        let mut seen = HashSet::new();

        for asset in assets {
            let aid = asset.asset_id().to_string();

            Self::validate_values(&asset)?;
            if !seen.insert(aid.clone()) {
                return Err(Error::invalid_asset(format!(
                    "Duplicate asset ID found: {aid}"
                )));
            }

            let bus0 = asset.bus();
            let Some(&source_idx) = self.bus_indices.get(bus0) else {
                return Err(Error::invalid_connection(format!(
                    "Asset {aid}: Can't find a bus with ID {bus0}"
                )));
            };

            if asset.is_branch() {
                let Some(bus1) = asset.bus1() else {
                    return Err(Error::invalid_connection(format!(
                        "Branch {aid} has no second bus."
                    )));
                };
                if bus0 == bus1 {
                    return Err(Error::invalid_connection(format!(
                        "Branch:({bus0}, {bus1}) Can't connect a bus to itself."
                    )));
                }
                let Some(&dest_idx) = self.bus_indices.get(bus1) else {
                    return Err(Error::invalid_connection(format!(
                        "Branch {aid}: Can't find a bus with ID {bus1}"
                    )));
                };
                self.graph.add_edge(source_idx, dest_idx, self.assets.len());
            }

            self.assets.push(asset);
        }

        Ok(())
    }

    fn validate_values(asset: &A) -> Result<(), Error> {
        let aid = asset.asset_id();
        for (name, value) in [
            ("capital cost", asset.capital_cost()),
            ("nominal capacity", asset.nominal_capacity()),
            ("optimal capacity", asset.optimal_capacity()),
        ] {
            if !value.is_finite() {
                return Err(Error::invalid_asset(format!(
                    "Asset {aid} has a non-finite {name}: {value}"
                )));
            }
        }
        if asset.optimal_capacity() < 0.0 {
            return Err(Error::invalid_asset(format!(
                "Asset {aid} has a negative optimal capacity: {}",
                asset.optimal_capacity()
            )));
        }
        Ok(())
    }
}
