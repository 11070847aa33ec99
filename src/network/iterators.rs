// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Iterators over buses and branches in a `NetworkModel`.

use crate::{Asset, Bus, NetworkModel};

/// An iterator over the buses in a `NetworkModel`.
pub struct Buses<'a, B>
where
    B: Bus,
{
    pub(crate) iter: std::slice::Iter<'a, petgraph::graph::Node<B>>,
}

impl<'a, B> Iterator for Buses<'a, B>
where
    B: Bus,
{
    type Item = &'a B;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(|n| &n.weight)
    }
}

/// A branch asset together with the buses it connects.
pub struct Branch<'a, B, A> {
    /// The line or link.
    pub asset: &'a A,
    /// The bus the branch starts at.
    pub bus0: &'a B,
    /// The bus the branch ends at.
    pub bus1: &'a B,
}

/// An iterator over the branches (lines and links) in a `NetworkModel`.
pub struct Branches<'a, B, A>
where
    B: Bus,
    A: Asset,
{
    pub(crate) network: &'a NetworkModel<B, A>,
    pub(crate) iter: std::slice::Iter<'a, petgraph::graph::Edge<usize>>,
}

impl<'a, B, A> Iterator for Branches<'a, B, A>
where
    B: Bus,
    A: Asset,
{
    type Item = Branch<'a, B, A>;

    fn next(&mut self) -> Option<Self::Item> {
        let network = self.network;
        self.iter.next().map(|e| Branch {
            asset: &network.assets[e.weight],
            bus0: &network.graph[e.source()],
            bus1: &network.graph[e.target()],
        })
    }
}
