// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! A sparse table of values keyed by location and technology.

use std::collections::{BTreeMap, BTreeSet};

/// A sparse table of values keyed by (location, technology).
///
/// Missing cells are zero.  Adding to a cell that already exists sums the
/// values.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LocationTechTable {
    /// location -> technology -> value.  Rows are never empty.
    rows: BTreeMap<String, BTreeMap<String, f64>>,
}

impl LocationTechTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `value` to the cell at (`location`, `technology`).
    pub fn add(&mut self, location: &str, technology: &str, value: f64) {
        *self
            .rows
            .entry(location.to_string())
            .or_default()
            .entry(technology.to_string())
            .or_insert(0.0) += value;
    }

    /// Returns the value at (`location`, `technology`), zero if missing.
    pub fn get(&self, location: &str, technology: &str) -> f64 {
        self.rows
            .get(location)
            .and_then(|row| row.get(technology))
            .copied()
            .unwrap_or(0.0)
    }

    /// Returns true if the table has no cells.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns an iterator over the cells, ordered by location and then by
    /// technology.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str, f64)> {
        self.rows.iter().flat_map(|(location, row)| {
            row.iter()
                .map(move |(technology, value)| (location.as_str(), technology.as_str(), *value))
        })
    }

    /// Returns the locations that have at least one cell.
    pub fn locations(&self) -> BTreeSet<&str> {
        self.rows.keys().map(String::as_str).collect()
    }

    /// Returns the technologies that have at least one cell.
    pub fn technologies(&self) -> BTreeSet<&str> {
        self.rows
            .values()
            .flat_map(|row| row.keys().map(String::as_str))
            .collect()
    }

    /// Returns the sum over all locations, for every technology.
    pub fn technology_totals(&self) -> BTreeMap<&str, f64> {
        let mut totals = BTreeMap::new();
        for (_, technology, value) in self.iter() {
            *totals.entry(technology).or_insert(0.0) += value;
        }
        totals
    }

    /// Returns the sum of all cells.
    pub fn total(&self) -> f64 {
        self.rows.values().flat_map(|row| row.values()).sum()
    }

    /// Adds all cells of `other` into this table.
    pub fn merge(&mut self, other: &LocationTechTable) {
        for (location, technology, value) in other.iter() {
            self.add(location, technology, value);
        }
    }

    /// Keeps only the technologies for which `keep` returns true.
    pub fn retain_technologies(&mut self, mut keep: impl FnMut(&str) -> bool) {
        for row in self.rows.values_mut() {
            row.retain(|technology, _| keep(technology));
        }
        self.rows.retain(|_, row| !row.is_empty());
    }

    /// Removes the technologies whose cells are all zero.
    pub fn drop_zero_technologies(&mut self) {
        let nonzero = self
            .iter()
            .filter(|(_, _, value)| *value != 0.0)
            .map(|(_, technology, _)| technology.to_string())
            .collect::<BTreeSet<_>>();
        self.retain_technologies(|technology| nonzero.contains(technology));
    }
}
