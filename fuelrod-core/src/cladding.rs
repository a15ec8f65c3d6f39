//! Hollow rods: fuel cladding, guide tubes and instrumentation tubes.

use crate::error::{Error, Result};
use crate::layering::check_radii;
use crate::node::{check_density, check_temperature};
use crate::types::{Composition, InsertType};
use std::f64::consts::PI;

/// A single-walled tube described by its wall annulus.
#[derive(Debug, Clone, PartialEq)]
pub struct HollowRod {
    kind: InsertType,
    /// Wall inner radius (m).
    inner_radius: f64,
    /// Wall outer radius (m).
    outer_radius: f64,
    /// Wall density (kg/m³).
    density: f64,
    /// Wall temperature (K).
    temperature: f64,
    composition: Composition,
    power: f64,
    inner_temperature: f64,
    outer_temperature: f64,
}

impl HollowRod {
    /// Create a tube of the given kind.
    ///
    /// `kind` may not be [`InsertType::Fuel`]; fuelled rods are
    /// [`crate::rod::FuelRod`]s.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidInsert`] for a fuel classification, otherwise the
    /// geometry and material checks of a node.
    pub fn new(
        kind: InsertType,
        inner_radius: f64,
        outer_radius: f64,
        density: f64,
        temperature: f64,
        composition: Composition,
    ) -> Result<Self> {
        if kind == InsertType::Fuel {
            return Err(Error::InvalidInsert(
                "a hollow rod cannot be classified as fuel".into(),
            ));
        }
        check_radii(inner_radius, outer_radius)?;
        check_density(density)?;
        check_temperature(temperature)?;
        composition.validate()?;
        Ok(Self {
            kind,
            inner_radius,
            outer_radius,
            density,
            temperature,
            composition,
            power: 0.0,
            inner_temperature: 0.0,
            outer_temperature: 0.0,
        })
    }

    /// Cladding tube, the usual companion of a fuel assembly.
    pub fn cladding(
        inner_radius: f64,
        outer_radius: f64,
        density: f64,
        temperature: f64,
        composition: Composition,
    ) -> Result<Self> {
        Self::new(
            InsertType::Cladding,
            inner_radius,
            outer_radius,
            density,
            temperature,
            composition,
        )
    }

    pub fn insert_type(&self) -> InsertType {
        self.kind
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

    /// Power deposited in the wall (W), e.g. from gamma heating.
    pub fn power(&self) -> f64 {
        self.power
    }

    pub fn set_power(&mut self, power: f64) {
        self.power = power;
    }

    pub fn inner_temperature(&self) -> f64 {
        self.inner_temperature
    }

    pub fn outer_temperature(&self) -> f64 {
        self.outer_temperature
    }

    /// Record wall temperatures from the thermal-hydraulics solve.
    pub fn set_temperatures(&mut self, wall: f64, inner: f64, outer: f64) -> Result<()> {
        check_temperature(wall)?;
        check_temperature(inner)?;
        check_temperature(outer)?;
        self.temperature = wall;
        self.inner_temperature = inner;
        self.outer_temperature = outer;
        Ok(())
    }

    /// Wall thickness (m).
    pub fn thickness(&self) -> f64 {
        self.outer_radius - self.inner_radius
    }

    /// Area enclosed by the outer surface, π r_o² (m²).
    pub fn area(&self) -> f64 {
        PI * self.outer_radius.powi(2)
    }

    /// Outer circumference, 2π r_o (m).
    pub fn perimeter(&self) -> f64 {
        2.0 * PI * self.outer_radius
    }
}
