//! Radial nodes, the smallest discretized unit of a fuel rod.

use crate::error::{Error, Result};
use crate::layering::{check_radii, volume_averaged};
use crate::types::Composition;
use std::f64::consts::PI;
use std::ops::Deref;

/// An annular node with its own material and thermal state.
///
/// Geometry is fixed at construction. Density, temperature, composition and
/// power evolve between coupling iterations and are set by the thermal and
/// neutronics collaborators.
#[derive(Debug, Clone, PartialEq)]
pub struct RadialNode {
    /// Inner radius (m).
    inner_radius: f64,
    /// Outer radius (m).
    outer_radius: f64,
    /// Density (kg/m³).
    density: f64,
    /// Temperature (K).
    temperature: f64,
    /// Mass fractions by material name.
    composition: Composition,
    /// Power generation (W).
    power: f64,
}

pub(crate) fn check_density(density: f64) -> Result<()> {
    if !density.is_finite() || density < 0.0 {
        return Err(Error::InvalidMaterial(format!(
            "density must be non-negative, got {}",
            density
        )));
    }
    Ok(())
}

pub(crate) fn check_temperature(temperature: f64) -> Result<()> {
    if !temperature.is_finite() || temperature <= 0.0 {
        return Err(Error::InvalidMaterial(format!(
            "temperature must be positive, got {}",
            temperature
        )));
    }
    Ok(())
}

impl RadialNode {
    /// Create a node with zero power.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidGeometry`] unless `0 <= inner_radius < outer_radius`
    /// - [`Error::InvalidMaterial`] for negative density, non-positive
    ///   temperature or a negative mass fraction
    pub fn new(
        inner_radius: f64,
        outer_radius: f64,
        density: f64,
        temperature: f64,
        composition: Composition,
    ) -> Result<Self> {
        check_radii(inner_radius, outer_radius)?;
        check_density(density)?;
        check_temperature(temperature)?;
        composition.validate()?;
        Ok(Self {
            inner_radius,
            outer_radius,
            density,
            temperature,
            composition,
            power: 0.0,
        })
    }

    pub fn inner_radius(&self) -> f64 {
        self.inner_radius
    }

    pub fn outer_radius(&self) -> f64 {
        self.outer_radius
    }

    pub fn density(&self) -> f64 {
        self.density
    }

    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    pub fn composition(&self) -> &Composition {
        &self.composition
    }

    pub fn power(&self) -> f64 {
        self.power
    }

    /// Update density from thermal feedback.
    pub fn set_density(&mut self, density: f64) -> Result<()> {
        check_density(density)?;
        self.density = density;
        Ok(())
    }

    /// Update temperature from thermal feedback.
    pub fn set_temperature(&mut self, temperature: f64) -> Result<()> {
        check_temperature(temperature)?;
        self.temperature = temperature;
        Ok(())
    }

    /// Replace the composition, e.g. after a depletion step.
    pub fn set_composition(&mut self, composition: Composition) -> Result<()> {
        composition.validate()?;
        self.composition = composition;
        Ok(())
    }

    /// Set the power deposited in this node.
    ///
    /// Owning element and assembly totals go stale until their
    /// `power_update` is called.
    pub fn set_power(&mut self, power: f64) {
        self.power = power;
    }

    /// Radial width (m).
    pub fn thickness(&self) -> f64 {
        self.outer_radius - self.inner_radius
    }

    /// Cross-sectional area π(r_o² − r_i²) (m²).
    pub fn area(&self) -> f64 {
        PI * (self.outer_radius.powi(2) - self.inner_radius.powi(2))
    }

    /// Volume-weighted mean radius, where property lookups are evaluated.
    pub fn volume_averaged_radius(&self) -> f64 {
        volume_averaged(self.outer_radius, self.inner_radius)
    }
}

/// Feedback handle on a node owned by an element.
///
/// Reads go through [`Deref`]. Only material state and power can be
/// written, so the radii of a node inside an element stay as built.
#[derive(Debug)]
pub struct NodeMut<'a> {
    node: &'a mut RadialNode,
}

impl<'a> NodeMut<'a> {
    pub(crate) fn new(node: &'a mut RadialNode) -> Self {
        Self { node }
    }

    pub fn set_density(&mut self, density: f64) -> Result<()> {
        self.node.set_density(density)
    }

    pub fn set_temperature(&mut self, temperature: f64) -> Result<()> {
        self.node.set_temperature(temperature)
    }

    pub fn set_composition(&mut self, composition: Composition) -> Result<()> {
        self.node.set_composition(composition)
    }

    pub fn set_power(&mut self, power: f64) {
        self.node.set_power(power);
    }
}

impl Deref for NodeMut<'_> {
    type Target = RadialNode;

    fn deref(&self) -> &RadialNode {
        &*self.node
    }
}
