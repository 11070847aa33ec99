// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Methods for retrieving buses, assets and branches from a
//! [`NetworkModel`].

use crate::iterators::{Branches, Buses};
use crate::{Asset, AssetCategory, Bus, Error, NetworkModel};

/// Carrier of the buses that are drawn on the map.
pub(crate) const ELECTRIC_CARRIER: &str = "AC";

/// `Bus`, `Asset` and branch retrieval.
impl<B, A> NetworkModel<B, A>
where
    B: Bus,
    A: Asset,
{
    /// Returns the bus with the given `bus_id`, if it exists.
    pub fn bus(&self, bus_id: &str) -> Result<&B, Error> {
        self.bus_indices
            .get(bus_id)
            .map(|i| &self.graph[*i])
            .ok_or_else(|| Error::bus_not_found(format!("Bus with id {} not found.", bus_id)))
    }

    /// Returns an iterator over the buses in the network.
    pub fn buses(&self) -> Buses<'_, B> {
        Buses {
            iter: self.graph.raw_nodes().iter(),
        }
    }

    /// Returns an iterator over the electric (`"AC"`) buses in the network.
    pub fn electric_buses(&self) -> impl Iterator<Item = &B> {
        self.buses().filter(|b| b.carrier() == ELECTRIC_CARRIER)
    }

    /// Returns an iterator over all assets in the network.
    pub fn assets(&self) -> std::slice::Iter<'_, A> {
        self.assets.iter()
    }

    /// Returns an iterator over the assets of the given category.
    pub fn assets_of(&self, category: AssetCategory) -> impl Iterator<Item = &A> {
        self.assets.iter().filter(move |a| a.category() == category)
    }

    /// Returns an iterator over the lines and links in the network, together
    /// with the buses they connect.
    pub fn branches(&self) -> Branches<'_, B, A> {
        Branches {
            network: self,
            iter: self.graph.raw_edges().iter(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::test_utils::{NetworkBuilder, TestBus};

    fn network() -> Result<NetworkModel<TestBus, crate::network::test_utils::TestAsset>, Error> {
        NetworkBuilder::new()
            .ac_bus("DE0", 10.0, 51.0)
            .ac_bus("FR0", 2.0, 47.0)
            .bus("DE0 H2", 10.0, 51.0, "H2")
            .generator("DE0 onshorewind", "DE0", "onshorewind", 100.0, 0.0)
            .generator("FR0 solar", "FR0", "solar", 50.0, 0.0)
            .store("DE0 H2 Store", "DE0 H2", "H2", 400.0, 0.0)
            .line("0", "DE0", "FR0", 500.0, 800.0)
            .link("DE0 H2 Electrolysis", "DE0", "DE0 H2", "H2 Electrolysis", 0.0, 200.0)
            .build()
    }

    #[test]
    fn test_bus() -> Result<(), Error> {
        let network = network()?;

        assert_eq!(network.bus("FR0"), Ok(&TestBus::ac("FR0", 2.0, 47.0)));
        assert_eq!(
            network.bus("ES0"),
            Err(Error::bus_not_found("Bus with id ES0 not found."))
        );

        Ok(())
    }

    #[test]
    fn test_buses() -> Result<(), Error> {
        let network = network()?;

        assert!(network
            .buses()
            .map(|b| b.bus_id())
            .eq(["DE0", "FR0", "DE0 H2"]));
        assert!(network
            .electric_buses()
            .map(|b| b.bus_id())
            .eq(["DE0", "FR0"]));

        Ok(())
    }

    #[test]
    fn test_assets() -> Result<(), Error> {
        let network = network()?;

        assert_eq!(network.assets().count(), 5);
        assert!(network
            .assets_of(AssetCategory::Generator)
            .map(|a| a.asset_id())
            .eq(["DE0 onshorewind", "FR0 solar"]));
        assert_eq!(network.assets_of(AssetCategory::StorageUnit).count(), 0);

        Ok(())
    }

    #[test]
    fn test_branches() -> Result<(), Error> {
        let network = network()?;

        let branches = network
            .branches()
            .map(|b| (b.asset.asset_id(), b.bus0.bus_id(), b.bus1.bus_id()))
            .collect::<Vec<_>>();
        assert_eq!(
            branches,
            vec![("0", "DE0", "FR0"), ("DE0 H2 Electrolysis", "DE0", "DE0 H2")]
        );

        Ok(())
    }
}
