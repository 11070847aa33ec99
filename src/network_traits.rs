// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! This module contains the traits that need to be implemented by the types
//! that represent buses, assets and dispatch time series.

use crate::asset_category::AssetCategory;

/**
This trait needs to be implemented by the type that represents a bus.

Read more about why this is necessary [here][crate#the-bus-and-asset-traits].

<details>
<summary>Example implementation for a bus table row:</summary>

```ignore
impl energy_network_plots::Bus for BusRow {
    fn bus_id(&self) -> &str {
        &self.name
    }

    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }

    fn carrier(&self) -> &str {
        &self.carrier
    }
}
```

</details>
*/
pub trait Bus {
    /// Returns the unique identifier of the bus.
    fn bus_id(&self) -> &str;
    /// Returns the longitude of the bus.
    fn x(&self) -> f64;
    /// Returns the latitude of the bus.
    fn y(&self) -> f64;
    /// Returns the energy carrier of the bus, `"AC"` for electric buses.
    fn carrier(&self) -> &str;
}

/**
This trait needs to be implemented by the type that represents an asset:
a generator, storage unit, store, load, link or line.

Read more about why this is necessary [here][crate#the-bus-and-asset-traits].

<details>
<summary>Example implementation for a generator table row:</summary>

```ignore
impl energy_network_plots::Asset for GeneratorRow {
    fn asset_id(&self) -> &str {
        &self.name
    }

    fn category(&self) -> energy_network_plots::AssetCategory {
        energy_network_plots::AssetCategory::Generator
    }

    fn carrier(&self) -> &str {
        &self.carrier
    }

    fn bus(&self) -> &str {
        &self.bus
    }

    fn capital_cost(&self) -> f64 {
        self.capital_cost
    }

    fn nominal_capacity(&self) -> f64 {
        self.p_nom
    }

    fn optimal_capacity(&self) -> f64 {
        self.p_nom_opt
    }
}
```

</details>
*/
pub trait Asset {
    /// Returns the unique identifier of the asset.
    fn asset_id(&self) -> &str;
    /// Returns the category of the asset.
    fn category(&self) -> AssetCategory;
    /// Returns the raw technology label of the asset.
    fn carrier(&self) -> &str;
    /// Returns the bus the asset is attached to, `bus0` for branches.
    fn bus(&self) -> &str;
    /// Returns the second bus of a branch, `None` for one-port assets.
    fn bus1(&self) -> Option<&str> {
        None
    }
    /// Returns the capital cost per unit of capacity.
    fn capital_cost(&self) -> f64;
    /// Returns the pre-existing capacity.
    fn nominal_capacity(&self) -> f64;
    /// Returns the optimized capacity.
    fn optimal_capacity(&self) -> f64;
    /// Returns an explicitly assigned location, if there is one.
    ///
    /// When this is `None`, the location is derived from the asset id.
    fn location(&self) -> Option<&str> {
        None
    }
}

/// A source of dispatch time series, used for the generation charts.
pub trait DispatchSource {
    /// Returns the load time series at the given bus.
    fn load(&self, bus_id: &str) -> Option<&[f64]>;
    /// Returns the dispatch time series of the given generator.
    fn generator_dispatch(&self, asset_id: &str) -> Option<&[f64]>;
}
