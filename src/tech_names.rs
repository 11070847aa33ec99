// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Normalization of raw carrier labels into display names.
//!
//! Normalization happens in two stages:
//!
//! - [`nice_name`][TechNames::nice_name] looks the label up in a rename table,
//!   passing unmapped labels through unchanged.
//! - [`map_group`][TechNames::map_group] applies `nice_name` and then folds
//!   the result into coarser groups for the transmission map, using an
//!   ordered list of [`GroupRule`]s where the first match wins.
//!
//! Both stages are idempotent, which [`TechNames::try_new`] checks for any
//! custom tables.

use std::collections::BTreeMap;

use crate::Error;

/// A rule for folding a display name into a coarser group.
#[derive(Clone, Debug, PartialEq)]
pub enum GroupRule {
    /// Matches names equal to `label`.
    Exact { label: String, group: String },
    /// Matches names that contain `pattern`.
    Contains { pattern: String, group: String },
}

impl GroupRule {
    /// Creates a rule that maps exactly `label` to `group`.
    pub fn exact(label: impl Into<String>, group: impl Into<String>) -> Self {
        Self::Exact {
            label: label.into(),
            group: group.into(),
        }
    }

    /// Creates a rule that maps every name containing `pattern` to `group`.
    pub fn contains(pattern: impl Into<String>, group: impl Into<String>) -> Self {
        Self::Contains {
            pattern: pattern.into(),
            group: group.into(),
        }
    }

    fn matches(&self, name: &str) -> bool {
        match self {
            Self::Exact { label, .. } => name == label,
            Self::Contains { pattern, .. } => name.contains(pattern.as_str()),
        }
    }

    fn group(&self) -> &str {
        match self {
            Self::Exact { group, .. } | Self::Contains { group, .. } => group,
        }
    }
}

/// The lookup tables used for normalizing carrier labels.
#[derive(Clone, Debug, PartialEq)]
pub struct TechNames {
    renames: BTreeMap<String, String>,
    group_rules: Vec<GroupRule>,
}

impl Default for TechNames {
    fn default() -> Self {
        let renames = [
            ("solar", "solar PV"),
            ("offshorewind", "offshore wind"),
            ("offshorewind-ac", "offshore wind (AC)"),
            ("offshorewind-dc", "offshore wind (DC)"),
            ("onshorewind", "onshore wind"),
            ("ror", "hydroelectricity"),
            ("hydro", "hydroelectricity"),
            ("PHS", "hydroelectricity"),
            ("AC", "transmission"),
        ]
        .into_iter()
        .map(|(old, new)| (old.to_string(), new.to_string()))
        .collect();

        Self {
            renames,
            group_rules: vec![
                GroupRule::exact("OCGT", "gas"),
                GroupRule::contains("solar", "solar PV"),
                GroupRule::contains("offshore wind", "offshore wind"),
            ],
        }
    }
}

impl TechNames {
    /// Creates a new [`TechNames`] from the given rename table and group
    /// rules.
    ///
    /// Returns an error if normalizing a name twice would give a different
    /// result than normalizing it once.
    pub fn try_new<K, V>(
        renames: impl IntoIterator<Item = (K, V)>,
        group_rules: Vec<GroupRule>,
    ) -> Result<Self, Error>
    where
        K: Into<String>,
        V: Into<String>,
    {
        let tech_names = Self {
            renames: renames
                .into_iter()
                .map(|(old, new)| (old.into(), new.into()))
                .collect(),
            group_rules,
        };
        tech_names.validate()?;
        Ok(tech_names)
    }

    fn validate(&self) -> Result<(), Error> {
        for (old, new) in &self.renames {
            let again = self.nice_name(new);
            if again != new {
                return Err(Error::invalid_config(format!(
                    "Rename {old} -> {new} is not idempotent: {new} is renamed to {again}"
                )));
            }
        }
        for rule in &self.group_rules {
            let group = rule.group();
            let again = self.map_group(group);
            if again != group {
                return Err(Error::invalid_config(format!(
                    "Group {group} is not idempotent: it is mapped to {again}"
                )));
            }
        }
        Ok(())
    }

    /// Returns the display name for a raw carrier label.
    pub fn nice_name<'a>(&'a self, label: &'a str) -> &'a str {
        self.renames.get(label).map_or(label, String::as_str)
    }

    /// Returns the display group for a raw carrier label, as used on the
    /// transmission map.
    pub fn map_group<'a>(&'a self, label: &'a str) -> &'a str {
        let name = self.nice_name(label);
        self.group_rules
            .iter()
            .find(|rule| rule.matches(name))
            .map_or(name, GroupRule::group)
    }
}
