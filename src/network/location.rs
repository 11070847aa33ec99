// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Assignment of locations to the assets of a [`NetworkModel`].

use std::collections::HashMap;

use crate::{Asset, Bus};

use super::NetworkModel;

/// The location of every asset, keyed by asset id.
pub type Locations<'a> = HashMap<&'a str, &'a str>;

/// Returns the location encoded in an asset id.
///
/// The location is the part of the id before the first space at character
/// position 3 or later.  Ids without such a space keep the given default.
pub fn location_from_id<'a>(asset_id: &'a str, default: &'a str) -> &'a str {
    asset_id
        .char_indices()
        .skip(3)
        .find(|&(_, c)| c == ' ')
        .map_or(default, |(pos, _)| &asset_id[..pos])
}

impl<B, A> NetworkModel<B, A>
where
    B: Bus,
    A: Asset,
{
    /// Returns the location of every asset in the network.
    ///
    /// Explicitly assigned locations are kept.  Other assets get the location
    /// encoded in their id, or the bus they are attached to.
    pub fn locations(&self) -> Locations<'_> {
        self.assets
            .iter()
            .map(|asset| (asset.asset_id(), Self::location_of(asset)))
            .collect()
    }

    /// Returns the location of a single asset.
    pub fn location_of(asset: &A) -> &str {
        asset
            .location()
            .unwrap_or_else(|| location_from_id(asset.asset_id(), asset.bus()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::test_utils::NetworkBuilder;
    use crate::Error;

    #[test]
    fn test_location_from_id() {
        assert_eq!(location_from_id("DE0 0 gas", "XX"), "DE0");
        assert_eq!(location_from_id("DE", "DE0"), "DE0");
        assert_eq!(location_from_id("DE0", "DE0"), "DE0");
        // Spaces before position 3 don't count.
        assert_eq!(location_from_id("D E0 solar", "XX"), "D E0");
        assert_eq!(location_from_id("ES1 1 H2 Store", "XX"), "ES1");
        assert_eq!(location_from_id("ESPT", "ES1"), "ES1");
        assert_eq!(location_from_id("", "DE0"), "DE0");
        assert_eq!(location_from_id("Öst 1 ror", "XX"), "Öst");
    }

    #[test]
    fn test_locations() -> Result<(), Error> {
        let mut builder = NetworkBuilder::new();
        builder
            .ac_bus("DE0", 10.0, 51.0)
            .ac_bus("DE1", 12.0, 52.0)
            .bus("DE0 H2", 10.0, 51.0, "H2")
            .generator("DE0 0 gas", "DE0", "OCGT", 10.0, 0.0)
            .generator("DE", "DE1", "solar", 10.0, 0.0)
            .store("DE0 H2 Store", "DE0 H2", "H2", 10.0, 0.0)
            .link("H2 pipeline", "DE0 H2", "DE0", "H2 pipeline", 0.0, 10.0);
        builder
            .generator("DE1 ror", "DE1", "ror", 1.0, 0.0)
            .with_location("DE0");
        let network = builder.build()?;

        let locations = network.locations();
        assert_eq!(locations.len(), 5);
        assert_eq!(locations["DE0 0 gas"], "DE0");
        assert_eq!(locations["DE"], "DE1");
        assert_eq!(locations["DE0 H2 Store"], "DE0");
        // The only space in "H2 pipeline" is before position 3.
        assert_eq!(locations["H2 pipeline"], "DE0 H2");
        assert_eq!(locations["DE1 ror"], "DE0");

        // Every asset has a location.
        assert!(network
            .assets()
            .all(|a| locations.get(a.asset_id.as_str()).is_some_and(|l| !l.is_empty())));

        Ok(())
    }
}
