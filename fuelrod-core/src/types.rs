//! Core data types shared across the geometry model.
//!
//! - [`Composition`]: material make-up of a node, by mass fraction
//! - [`InsertType`]: classification tag for lattice inserts
//! - [`CONTIGUITY_TOLERANCE`]: slack allowed when checking shared ring boundaries

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Absolute tolerance (m) when checking that one ring ends where the next begins.
pub const CONTIGUITY_TOLERANCE: f64 = 1e-12;

/// Mapping from nuclide or material name to mass fraction.
///
/// Fractions are not required to be normalized; `{"UO2": 100.0}` and
/// `{"UO2": 1.0}` describe the same pure material. Keys are kept sorted so
/// iteration and serialization are deterministic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Composition(BTreeMap<String, f64>);

impl Composition {
    /// Create an empty composition.
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Composition made of a single material.
    pub fn single(name: impl Into<String>, fraction: f64) -> Self {
        let mut composition = Self::new();
        composition.insert(name, fraction);
        composition
    }

    /// Merge two compositions, with `overrides` replacing `defaults` key by key.
    pub fn merged(defaults: &Composition, overrides: &Composition) -> Self {
        let mut merged = defaults.clone();
        for (name, fraction) in overrides.iter() {
            merged.insert(name, fraction);
        }
        merged
    }

    /// Set the fraction of a material, returning the previous value.
    pub fn insert(&mut self, name: impl Into<String>, fraction: f64) -> Option<f64> {
        self.0.insert(name.into(), fraction)
    }

    /// Fraction of a material, if present.
    pub fn get(&self, name: &str) -> Option<f64> {
        self.0.get(name).copied()
    }

    /// Iterate over (name, fraction) pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(name, &fraction)| (name.as_str(), fraction))
    }

    /// Number of materials.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sum of all fractions.
    pub fn total(&self) -> f64 {
        self.0.values().sum()
    }

    /// Check that every fraction is finite and non-negative.
    pub fn validate(&self) -> Result<()> {
        for (name, &fraction) in &self.0 {
            if !fraction.is_finite() || fraction < 0.0 {
                return Err(Error::InvalidMaterial(format!(
                    "fraction of {} must be finite and non-negative, got {}",
                    name, fraction
                )));
            }
        }
        Ok(())
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for Composition {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

/// Kind of insert occupying a lattice position.
///
/// Lets callers discriminate fuel rods from tubes without inspecting types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsertType {
    /// Fuel pellet stack, optionally clad.
    Fuel,
    /// Empty tube guiding a control rod.
    GuideTube,
    /// Empty tube housing in-core instrumentation.
    InstrumentationTube,
    /// Cladding tube on its own.
    Cladding,
}

impl InsertType {
    /// Stable lowercase tag.
    pub fn as_str(self) -> &'static str {
        match self {
            InsertType::Fuel => "fuel",
            InsertType::GuideTube => "guide_tube",
            InsertType::InstrumentationTube => "instrumentation_tube",
            InsertType::Cladding => "cladding",
        }
    }
}

impl fmt::Display for InsertType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
