//! Fuel geometry input records.
//!
//! A [`FuelConfig`] lists the concentric material regions of a pellet from the
//! inside out. Only the innermost inner radius is given; every other region
//! starts where the previous one ends.
//!
//! ```json
//! {
//!   "inner_radius": 0.15,
//!   "discretizer": "equal_volume",
//!   "regions": [
//!     { "outer_radius": 0.34, "density": 10270.0,
//!       "temperature": [1400.0, 1300.0, 1200.0],
//!       "composition": { "UO2": 100.0 }, "nodes": 3 },
//!     { "outer_radius": 0.4106, "density": 3000.0, "temperature": 600.0,
//!       "composition": { "ZrB2": 100.0 } }
//!   ]
//! }
//! ```

use crate::error::{Error, Result};
use crate::fuel::FuelAssembly;
use crate::layering::{nodalize, Discretizer};
use crate::types::Composition;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Region temperature: one value for all nodes, or one per node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RegionTemperature {
    Uniform(f64),
    Profile(Vec<f64>),
}

impl RegionTemperature {
    /// Expand to one temperature per node.
    pub fn per_node(&self, nodes: usize) -> Result<Vec<f64>> {
        match self {
            RegionTemperature::Uniform(t) => Ok(vec![*t; nodes]),
            RegionTemperature::Profile(profile) => {
                if profile.len() != nodes {
                    return Err(Error::mismatched(
                        "region temperature profile",
                        nodes,
                        profile.len(),
                    ));
                }
                Ok(profile.clone())
            }
        }
    }
}

impl From<f64> for RegionTemperature {
    fn from(t: f64) -> Self {
        RegionTemperature::Uniform(t)
    }
}

/// One concentric material region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionConfig {
    /// Outer radius of the region (m).
    pub outer_radius: f64,
    /// Density (kg/m³), shared by every node.
    pub density: f64,
    /// Temperature (K).
    pub temperature: RegionTemperature,
    /// Fresh composition, shared by every node.
    pub composition: Composition,
    /// Number of radial nodes.
    #[serde(default = "default_nodes")]
    pub nodes: usize,
}

fn default_nodes() -> usize {
    1
}

impl RegionConfig {
    pub fn new(
        outer_radius: f64,
        density: f64,
        temperature: impl Into<RegionTemperature>,
        composition: Composition,
        nodes: usize,
    ) -> Self {
        Self {
            outer_radius,
            density,
            temperature: temperature.into(),
            composition,
            nodes,
        }
    }
}

/// Radial layout of one fuel pellet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuelConfig {
    /// Inner radius of the innermost region (m); 0 for a solid pellet.
    #[serde(default)]
    pub inner_radius: f64,
    /// Ring subdivision policy applied to every region.
    #[serde(default)]
    pub discretizer: Discretizer,
    /// Regions, innermost first.
    pub regions: Vec<RegionConfig>,
}

impl FuelConfig {
    /// Load from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// UO2 core, thoria ring and ZrB2 absorber coating on an annular pellet.
    pub fn reference_duplex() -> Self {
        Self {
            inner_radius: 0.15,
            discretizer: Discretizer::EqualVolume,
            regions: vec![
                RegionConfig::new(0.34, 10270.0, 1200.0, Composition::single("UO2", 100.0), 3),
                RegionConfig::new(0.4096, 10230.0, 900.0, Composition::single("Th", 100.0), 1),
                RegionConfig::new(0.4106, 3000.0, 600.0, Composition::single("ZrB2", 100.0), 1),
            ],
        }
    }

    /// Inner radius of every region, implied by contiguity.
    pub fn region_inner_radii(&self) -> Vec<f64> {
        std::iter::once(self.inner_radius)
            .chain(self.regions.iter().map(|r| r.outer_radius))
            .take(self.regions.len())
            .collect()
    }

    /// Discretize every region and build the fuel assembly.
    ///
    /// Each region becomes one element whose nodes all carry the region's
    /// density and composition.
    pub fn build(&self) -> Result<FuelAssembly> {
        let n = self.regions.len();
        let mut fuel_inner_radii = Vec::with_capacity(n);
        let mut fuel_outer_radii = Vec::with_capacity(n);
        let mut fuel_densities = Vec::with_capacity(n);
        let mut fuel_temperatures = Vec::with_capacity(n);
        let mut fuel_compositions = Vec::with_capacity(n);

        for (region, inner_radius) in self.regions.iter().zip(self.region_inner_radii()) {
            let radii = nodalize(region.outer_radius, region.nodes, self.discretizer, inner_radius)?;
            fuel_temperatures.push(region.temperature.per_node(region.nodes)?);
            fuel_densities.push(vec![region.density; region.nodes]);
            fuel_compositions.push(vec![region.composition.clone(); region.nodes]);
            fuel_inner_radii.push(radii.inner_radii);
            fuel_outer_radii.push(radii.outer_radii);
        }

        let fuel = FuelAssembly::new(
            &fuel_inner_radii,
            &fuel_outer_radii,
            &fuel_densities,
            &fuel_temperatures,
            &fuel_compositions,
        )?;

        tracing::info!(
            regions = n,
            nodes = fuel.node_count(),
            inner_radius = fuel.inner_radius(),
            outer_radius = fuel.outer_radius(),
            "built fuel assembly from configuration"
        );
        Ok(fuel)
    }
}
