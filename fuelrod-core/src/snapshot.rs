//! JSON snapshots of a fuel assembly.
//!
//! Lets a coupling driver park one iteration's state on disk and reload it
//! later. Loading goes through the regular constructors, so a snapshot that
//! describes an invalid tree is rejected.

use crate::element::RadialElement;
use crate::error::{Error, Result};
use crate::fuel::FuelAssembly;
use crate::node::RadialNode;
use crate::types::{Composition, InsertType};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// Serialized state of one node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeRecord {
    pub inner_radius: f64,
    pub outer_radius: f64,
    pub density: f64,
    pub temperature: f64,
    pub composition: Composition,
    pub power: f64,
}

/// Serialized state of one element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementRecord {
    pub nodes: Vec<NodeRecord>,
    pub power: f64,
}

/// Serialized state of a whole assembly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssemblySnapshot {
    pub insert_type: InsertType,
    pub elements: Vec<ElementRecord>,
    pub power: f64,
    #[serde(default)]
    pub clad_inner_temperature: f64,
    #[serde(default)]
    pub clad_outer_temperature: f64,
}

impl From<&RadialNode> for NodeRecord {
    fn from(node: &RadialNode) -> Self {
        Self {
            inner_radius: node.inner_radius(),
            outer_radius: node.outer_radius(),
            density: node.density(),
            temperature: node.temperature(),
            composition: node.composition().clone(),
            power: node.power(),
        }
    }
}

impl From<&FuelAssembly> for AssemblySnapshot {
    fn from(fuel: &FuelAssembly) -> Self {
        Self {
            insert_type: fuel.insert_type(),
            elements: fuel
                .elements()
                .iter()
                .map(|element| ElementRecord {
                    nodes: element.nodes().iter().map(NodeRecord::from).collect(),
                    power: element.power(),
                })
                .collect(),
            power: fuel.power(),
            clad_inner_temperature: fuel.clad_inner_temperature(),
            clad_outer_temperature: fuel.clad_outer_temperature(),
        }
    }
}

fn powers_agree(stored: f64, computed: f64) -> bool {
    (stored - computed).abs() <= 1e-9 * stored.abs().max(computed.abs()).max(1.0)
}

impl AssemblySnapshot {
    /// Rebuild the assembly, validating geometry and material state.
    ///
    /// Power totals are recomputed from node powers. Stored totals that
    /// disagree (e.g. saved before `power_update`) are logged and replaced.
    pub fn restore(self) -> Result<FuelAssembly> {
        if self.insert_type != InsertType::Fuel {
            return Err(Error::InvalidInsert(format!(
                "snapshot holds a {} insert, not fuel",
                self.insert_type
            )));
        }

        let mut stored_element_powers = Vec::with_capacity(self.elements.len());
        let mut elements = Vec::with_capacity(self.elements.len());
        for record in self.elements {
            let nodes = record
                .nodes
                .into_iter()
                .map(|n| {
                    let mut node = RadialNode::new(
                        n.inner_radius,
                        n.outer_radius,
                        n.density,
                        n.temperature,
                        n.composition,
                    )?;
                    node.set_power(n.power);
                    Ok(node)
                })
                .collect::<Result<Vec<_>>>()?;
            stored_element_powers.push(record.power);
            elements.push(RadialElement::from_nodes(nodes)?);
        }

        let mut fuel = FuelAssembly::from_elements(elements)?;
        if self.clad_inner_temperature != 0.0 || self.clad_outer_temperature != 0.0 {
            fuel.set_clad_temperatures(self.clad_inner_temperature, self.clad_outer_temperature)?;
        }

        fuel.power_update();
        let stale = stored_element_powers
            .iter()
            .zip(fuel.elements())
            .any(|(&stored, element)| !powers_agree(stored, element.power()))
            || !powers_agree(self.power, fuel.power());
        if stale {
            tracing::warn!(
                stored = self.power,
                recomputed = fuel.power(),
                "snapshot power totals were stale; recomputed from node powers"
            );
        }
        Ok(fuel)
    }
}

/// Write one assembly snapshot as JSON.
pub fn write_snapshot(fuel: &FuelAssembly, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, &AssemblySnapshot::from(fuel))?;
    writer.flush()?;
    tracing::info!(path = %path.display(), nodes = fuel.node_count(), "wrote fuel snapshot");
    Ok(())
}

/// Read and validate an assembly snapshot written by [`write_snapshot`].
pub fn read_snapshot(path: impl AsRef<Path>) -> Result<FuelAssembly> {
    let path = path.as_ref();
    let reader = BufReader::new(File::open(path)?);
    let snapshot: AssemblySnapshot = serde_json::from_reader(reader)?;
    let fuel = snapshot.restore()?;
    tracing::info!(path = %path.display(), nodes = fuel.node_count(), "read fuel snapshot");
    Ok(fuel)
}
