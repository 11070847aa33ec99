// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! This module defines the `AssetCategory` enum, which represents the
//! category of an asset in a network model.

use crate::network_traits::Asset;
use std::fmt::Display;

/// Represents the category of an asset.
///
/// One-port categories attach to a single bus, branch categories connect two
/// buses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AssetCategory {
    Generator,
    StorageUnit,
    Store,
    Load,
    Link,
    Line,
}

impl AssetCategory {
    /// Returns true for categories that connect two buses.
    pub fn is_branch(&self) -> bool {
        matches!(self, AssetCategory::Link | AssetCategory::Line)
    }
}

impl Display for AssetCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssetCategory::Generator => write!(f, "Generator"),
            AssetCategory::StorageUnit => write!(f, "StorageUnit"),
            AssetCategory::Store => write!(f, "Store"),
            AssetCategory::Load => write!(f, "Load"),
            AssetCategory::Link => write!(f, "Link"),
            AssetCategory::Line => write!(f, "Line"),
        }
    }
}

/// Predicates for checking the category of an `Asset`.
pub(crate) trait CategoryPredicates: Asset {
    fn is_generator(&self) -> bool {
        self.category() == AssetCategory::Generator
    }

    fn is_store(&self) -> bool {
        self.category() == AssetCategory::Store
    }

    fn is_branch(&self) -> bool {
        self.category().is_branch()
    }
}

/// Implement the `CategoryPredicates` trait for all types that implement the
/// `Asset` trait.
impl<T: Asset> CategoryPredicates for T {}
