// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Aggregation of asset capacities and costs into location×technology
//! tables, and the filtering that prepares them for the capacity map.

mod capacity_map;
mod table;

pub use capacity_map::{CapacityEntry, CapacityMap, CategoryTables};
pub use table::LocationTechTable;
