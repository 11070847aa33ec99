// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! This module is only compiled when running unit tests and contains features
//! that are shared by all tests of the crate.
//!
//! - the `TestBus`, `TestAsset` and `TestDispatch` types, which implement the
//!   `Bus`, `Asset` and `DispatchSource` traits respectively.
//! - the `NetworkBuilder`, which can declaratively build network models for
//!   use in tests.

use std::collections::HashMap;

use crate::{Asset, AssetCategory, Bus, DispatchSource, Error, NetworkModel};

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct TestBus {
    pub(crate) bus_id: String,
    pub(crate) x: f64,
    pub(crate) y: f64,
    pub(crate) carrier: String,
}

impl TestBus {
    pub(crate) fn new(bus_id: &str, x: f64, y: f64, carrier: &str) -> Self {
        TestBus {
            bus_id: bus_id.to_string(),
            x,
            y,
            carrier: carrier.to_string(),
        }
    }

    pub(crate) fn ac(bus_id: &str, x: f64, y: f64) -> Self {
        TestBus::new(bus_id, x, y, "AC")
    }
}

impl Bus for TestBus {
    fn bus_id(&self) -> &str {
        &self.bus_id
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

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct TestAsset {
    pub(crate) asset_id: String,
    pub(crate) category: AssetCategory,
    pub(crate) carrier: String,
    pub(crate) bus: String,
    pub(crate) bus1: Option<String>,
    pub(crate) capital_cost: f64,
    pub(crate) nominal_capacity: f64,
    pub(crate) optimal_capacity: f64,
    pub(crate) location: Option<String>,
}

impl TestAsset {
    fn one_port(
        category: AssetCategory,
        asset_id: &str,
        bus: &str,
        carrier: &str,
        optimal_capacity: f64,
    ) -> Self {
        TestAsset {
            asset_id: asset_id.to_string(),
            category,
            carrier: carrier.to_string(),
            bus: bus.to_string(),
            bus1: None,
            capital_cost: 0.0,
            nominal_capacity: 0.0,
            optimal_capacity,
            location: None,
        }
    }

    fn branch(
        category: AssetCategory,
        asset_id: &str,
        bus0: &str,
        bus1: &str,
        carrier: &str,
        nominal_capacity: f64,
        optimal_capacity: f64,
    ) -> Self {
        TestAsset {
            asset_id: asset_id.to_string(),
            category,
            carrier: carrier.to_string(),
            bus: bus0.to_string(),
            bus1: Some(bus1.to_string()),
            capital_cost: 0.0,
            nominal_capacity,
            optimal_capacity,
            location: None,
        }
    }

    pub(crate) fn generator(asset_id: &str, bus: &str, carrier: &str, capacity: f64) -> Self {
        Self::one_port(AssetCategory::Generator, asset_id, bus, carrier, capacity)
    }

    pub(crate) fn store(asset_id: &str, bus: &str, carrier: &str, capacity: f64) -> Self {
        Self::one_port(AssetCategory::Store, asset_id, bus, carrier, capacity)
    }

    pub(crate) fn line(asset_id: &str, bus0: &str, bus1: &str, nominal: f64, optimal: f64) -> Self {
        Self::branch(AssetCategory::Line, asset_id, bus0, bus1, "AC", nominal, optimal)
    }

    pub(crate) fn link(asset_id: &str, bus0: &str, bus1: &str, nominal: f64, optimal: f64) -> Self {
        Self::branch(AssetCategory::Link, asset_id, bus0, bus1, "DC", nominal, optimal)
    }
}

impl Asset for TestAsset {
    fn asset_id(&self) -> &str {
        &self.asset_id
    }

    fn category(&self) -> AssetCategory {
        self.category
    }

    fn carrier(&self) -> &str {
        &self.carrier
    }

    fn bus(&self) -> &str {
        &self.bus
    }

    fn bus1(&self) -> Option<&str> {
        self.bus1.as_deref()
    }

    fn capital_cost(&self) -> f64 {
        self.capital_cost
    }

    fn nominal_capacity(&self) -> f64 {
        self.nominal_capacity
    }

    fn optimal_capacity(&self) -> f64 {
        self.optimal_capacity
    }

    fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }
}

/// Dispatch time series for the generation chart tests.
#[derive(Default)]
pub(crate) struct TestDispatch {
    pub(crate) loads: HashMap<String, Vec<f64>>,
    pub(crate) generators: HashMap<String, Vec<f64>>,
}

impl TestDispatch {
    pub(crate) fn with_load(mut self, bus_id: &str, series: Vec<f64>) -> Self {
        self.loads.insert(bus_id.to_string(), series);
        self
    }

    pub(crate) fn with_generator(mut self, asset_id: &str, series: Vec<f64>) -> Self {
        self.generators.insert(asset_id.to_string(), series);
        self
    }
}

impl DispatchSource for TestDispatch {
    fn load(&self, bus_id: &str) -> Option<&[f64]> {
        self.loads.get(bus_id).map(Vec::as_slice)
    }

    fn generator_dispatch(&self, asset_id: &str) -> Option<&[f64]> {
        self.generators.get(asset_id).map(Vec::as_slice)
    }
}

/// A builder for creating network models easily, for use in tests.
pub(crate) struct NetworkBuilder {
    buses: Vec<TestBus>,
    assets: Vec<TestAsset>,
}

impl NetworkBuilder {
    /// Creates a new `NetworkBuilder`.
    pub(crate) fn new() -> Self {
        NetworkBuilder {
            buses: Vec::new(),
            assets: Vec::new(),
        }
    }

    /// Adds a bus with the given carrier.
    pub(crate) fn bus(&mut self, bus_id: &str, x: f64, y: f64, carrier: &str) -> &mut Self {
        self.buses.push(TestBus::new(bus_id, x, y, carrier));
        self
    }

    /// Adds an electric bus.
    pub(crate) fn ac_bus(&mut self, bus_id: &str, x: f64, y: f64) -> &mut Self {
        self.buses.push(TestBus::ac(bus_id, x, y));
        self
    }

    /// Adds a generator.
    pub(crate) fn generator(
        &mut self,
        asset_id: &str,
        bus: &str,
        carrier: &str,
        capacity: f64,
        capital_cost: f64,
    ) -> &mut Self {
        let mut generator = TestAsset::generator(asset_id, bus, carrier, capacity);
        generator.capital_cost = capital_cost;
        self.assets.push(generator);
        self
    }

    /// Adds a store.
    pub(crate) fn store(
        &mut self,
        asset_id: &str,
        bus: &str,
        carrier: &str,
        capacity: f64,
        capital_cost: f64,
    ) -> &mut Self {
        let mut store = TestAsset::store(asset_id, bus, carrier, capacity);
        store.capital_cost = capital_cost;
        self.assets.push(store);
        self
    }

    /// Adds a link with the given carrier.
    pub(crate) fn link(
        &mut self,
        asset_id: &str,
        bus0: &str,
        bus1: &str,
        carrier: &str,
        nominal: f64,
        optimal: f64,
    ) -> &mut Self {
        let mut link = TestAsset::link(asset_id, bus0, bus1, nominal, optimal);
        link.carrier = carrier.to_string();
        self.assets.push(link);
        self
    }

    /// Adds an AC line.
    pub(crate) fn line(
        &mut self,
        asset_id: &str,
        bus0: &str,
        bus1: &str,
        nominal: f64,
        optimal: f64,
    ) -> &mut Self {
        self.assets
            .push(TestAsset::line(asset_id, bus0, bus1, nominal, optimal));
        self
    }

    /// Sets an explicit location on the most recently added asset.
    pub(crate) fn with_location(&mut self, location: &str) -> &mut Self {
        if let Some(asset) = self.assets.last_mut() {
            asset.location = Some(location.to_string());
        }
        self
    }

    /// Sets the capital cost of the most recently added asset.
    pub(crate) fn with_capital_cost(&mut self, capital_cost: f64) -> &mut Self {
        if let Some(asset) = self.assets.last_mut() {
            asset.capital_cost = capital_cost;
        }
        self
    }

    /// Builds and returns the network model from the buses and assets added
    /// to the builder.
    pub(crate) fn build(&self) -> Result<NetworkModel<TestBus, TestAsset>, Error> {
        NetworkModel::try_new(self.buses.clone(), self.assets.clone())
    }
}
