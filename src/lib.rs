// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

/*!
# Energy Network Plots

This is a library for plotting optimized energy-system network models: maps
of the installed capacity on every bus and of the transmission lines between
them, and charts of the generation mix at a single location.

## The `Bus` and `Asset` traits

The main struct is [`NetworkModel`], instances of which can be created by
passing an iterator of buses and an iterator of assets to the
[`try_new`][NetworkModel::try_new] method.

Because this library doesn't know about the types that hold the network
data, it uses traits to interact with them.  The bus and asset types must
implement the [`Bus`] and [`Asset`] traits, respectively.  Check out the
documentation for these traits for sample implementations.  The generation
charts read time series through the [`DispatchSource`] trait.

## Capacity aggregation

[`capacity_map`][NetworkModel::capacity_map] groups the optimized capacities
of the configured asset categories by location and technology:

- the location of an asset is taken from its id, see
  [`locations`][NetworkModel::locations],
- the technology is its carrier normalized with [`TechNames`],
- technologies below [`MapConfig::threshold`] or zero everywhere are dropped,
- capacities at locations that aren't electric buses are dropped.

## Plotting

[`MapFigure`] collects the bus markers, line widths and legends of the map,
and draws them with `plotters` onto an SVG drawing area ([`SvgArea`]).
[`GenerationProfile`] and [`GenerationMix`] do the same for the demand and
generation at one location.
*/

mod asset_category;
pub use asset_category::AssetCategory;

mod config;
pub use config::{
    GenerationConfig, LineWidthConfig, MapConfig, MixEntry, TechColors, FALLBACK_COLOR,
};

mod network;
pub use network::{iterators, location_from_id, Locations, NetworkModel};

mod network_traits;
pub use network_traits::{Asset, Bus, DispatchSource};

mod tech_names;
pub use tech_names::{GroupRule, TechNames};

mod aggregation;
pub use aggregation::{CapacityEntry, CapacityMap, CategoryTables, LocationTechTable};

mod line_widths;
pub use line_widths::{clip_width, BranchWidth};

mod plot;
pub use plot::{
    legend_circle_radii, BranchSegment, BusPie, GenerationMix, GenerationProfile, LegendCircle,
    LegendScale, MapBounds, MapFigure, SvgArea, Wedge,
};

mod error;
pub use error::Error;
