//! Clad fuel rods.
//!
//! A [`FuelRod`] owns its cladding tube and its fuel assembly as separate
//! fields; each part keeps its own methods.

use crate::cladding::HollowRod;
use crate::error::{Error, Result};
use crate::fuel::FuelAssembly;
use crate::node::NodeMut;
use crate::types::{InsertType, CONTIGUITY_TOLERANCE};

/// Fuel assembly inside a cladding tube.
#[derive(Debug, Clone, PartialEq)]
pub struct FuelRod {
    cladding: HollowRod,
    fuel: FuelAssembly,
}

impl FuelRod {
    /// Combine a cladding tube and a fuel assembly.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidInsert`] if the tube is not cladding,
    /// [`Error::InvalidGeometry`] if its inner surface cuts into the fuel.
    pub fn new(cladding: HollowRod, fuel: FuelAssembly) -> Result<Self> {
        if cladding.insert_type() != InsertType::Cladding {
            return Err(Error::InvalidInsert(format!(
                "fuel rod needs a cladding tube, got {}",
                cladding.insert_type()
            )));
        }
        if cladding.inner_radius() < fuel.outer_radius() - CONTIGUITY_TOLERANCE {
            return Err(Error::InvalidGeometry(format!(
                "cladding inner radius {} is inside fuel outer radius {}",
                cladding.inner_radius(),
                fuel.outer_radius()
            )));
        }
        Ok(Self { cladding, fuel })
    }

    pub fn insert_type(&self) -> InsertType {
        InsertType::Fuel
    }

    pub fn cladding(&self) -> &HollowRod {
        &self.cladding
    }

    pub fn fuel(&self) -> &FuelAssembly {
        &self.fuel
    }

    /// Feedback handles on the fuel nodes in radial order.
    ///
    /// The fuel and cladding themselves are not handed out mutably, so the
    /// cladding always stays outside the fuel.
    pub fn fuel_nodes_mut(&mut self) -> impl Iterator<Item = NodeMut<'_>> {
        self.fuel.nodes_mut()
    }

    pub fn fuel_node_mut(&mut self, element: usize, node: usize) -> Option<NodeMut<'_>> {
        self.fuel.node_mut(element, node)
    }

    /// Set the power deposited in the cladding wall.
    pub fn set_cladding_power(&mut self, power: f64) {
        self.cladding.set_power(power);
    }

    /// Pellet-cladding gap (m).
    pub fn gap_width(&self) -> f64 {
        self.cladding.inner_radius() - self.fuel.outer_radius()
    }

    /// Refresh the fuel power totals.
    pub fn power_update(&mut self) {
        self.fuel.power_update();
    }

    /// Fuel power as of the last update plus cladding power (W).
    pub fn power(&self) -> f64 {
        self.fuel.power() + self.cladding.power()
    }

    /// Set cladding temperatures and mirror the surface values on the fuel.
    pub fn set_clad_temperatures(&mut self, wall: f64, inner: f64, outer: f64) -> Result<()> {
        self.cladding.set_temperatures(wall, inner, outer)?;
        self.fuel.set_clad_temperatures(inner, outer)
    }

    /// Split back into cladding and fuel.
    pub fn into_parts(self) -> (HollowRod, FuelAssembly) {
        (self.cladding, self.fuel)
    }
}
