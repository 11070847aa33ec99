// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! An in-memory snapshot of an energy network model: buses, the assets
//! attached to them, and the branches connecting them.

mod creation;
mod location;
mod retrieval;

pub mod iterators;

#[cfg(test)]
pub(crate) mod test_utils;

pub use location::{location_from_id, Locations};

use crate::{Asset, Bus};
use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::HashMap;

/// `Bus`es stored in a `DiGraph` instance can be addressed with `NodeIndex`es.
///
/// `BusIndexMap` stores the corresponding `NodeIndex` for any `bus_id`, so
/// that buses in the `DiGraph` can be retrieved from their `bus_id`s.
pub(crate) type BusIndexMap = HashMap<String, NodeIndex>;

/// A network model, made of buses, and assets attached to them.
///
/// Branch assets (lines and links) are also stored as edges from `bus0` to
/// `bus1` in a graph of buses.  The edge weight is the position of the branch
/// in the asset list.
pub struct NetworkModel<B, A>
where
    B: Bus,
    A: Asset,
{
    graph: DiGraph<B, usize>,
    bus_indices: BusIndexMap,
    assets: Vec<A>,
}
