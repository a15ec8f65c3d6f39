//! Fuel assemblies: the full radial stack of one pellet.
//!
//! Power is aggregated bottom-up in two phases: every element first sums its
//! nodes, then the assembly sums its elements.

use crate::element::{check_contiguous, RadialElement};
use crate::error::{Error, Result};
use crate::node::{check_temperature, NodeMut, RadialNode};
use crate::types::{Composition, InsertType};

/// Ordered stack of radial elements, innermost material region first.
#[derive(Debug, Clone, PartialEq)]
pub struct FuelAssembly {
    elements: Vec<RadialElement>,
    /// Sum of element powers as of the last [`FuelAssembly::power_update`].
    power: f64,
    /// Cladding inner surface temperature (K), 0.0 until set.
    clad_inner_temperature: f64,
    /// Cladding outer surface temperature (K), 0.0 until set.
    clad_outer_temperature: f64,
}

impl FuelAssembly {
    /// Build an assembly from per-element sequences of per-node values.
    ///
    /// Entry `e` of every argument holds the node values of element `e`, in
    /// the layout accepted by [`RadialElement::new`].
    ///
    /// # Errors
    ///
    /// [`Error::MismatchedLength`] if the outer sequences differ in length,
    /// [`Error::EmptyAggregate`] if they are empty, plus any element
    /// construction error. Elements must be contiguous.
    pub fn new(
        inner_radii: &[Vec<f64>],
        outer_radii: &[Vec<f64>],
        densities: &[Vec<f64>],
        temperatures: &[Vec<f64>],
        compositions: &[Vec<Composition>],
    ) -> Result<Self> {
        let n = inner_radii.len();
        for (what, len) in [
            ("element outer radii", outer_radii.len()),
            ("element densities", densities.len()),
            ("element temperatures", temperatures.len()),
            ("element compositions", compositions.len()),
        ] {
            if len != n {
                return Err(Error::mismatched(what, n, len));
            }
        }

        let elements = (0..n)
            .map(|e| {
                RadialElement::new(
                    &inner_radii[e],
                    &outer_radii[e],
                    &densities[e],
                    &temperatures[e],
                    &compositions[e],
                )
            })
            .collect::<Result<Vec<_>>>()?;

        Self::from_elements(elements)
    }

    /// Wrap already-built elements, checking they are non-empty and contiguous.
    pub fn from_elements(elements: Vec<RadialElement>) -> Result<Self> {
        if elements.is_empty() {
            return Err(Error::EmptyAggregate(
                "fuel assembly needs at least one element".into(),
            ));
        }
        check_contiguous(
            elements.iter().map(|e| (e.inner_radius(), e.outer_radius())),
            "element",
        )?;

        tracing::debug!(
            elements = elements.len(),
            nodes = elements.iter().map(RadialElement::node_count).sum::<usize>(),
            "built fuel assembly"
        );

        Ok(Self {
            elements,
            power: 0.0,
            clad_inner_temperature: 0.0,
            clad_outer_temperature: 0.0,
        })
    }

    /// Classification tag for lattice lookups.
    pub fn insert_type(&self) -> InsertType {
        InsertType::Fuel
    }

    /// Elements, innermost first.
    pub fn elements(&self) -> &[RadialElement] {
        &self.elements
    }

    pub fn element(&self, idx: usize) -> Option<&RadialElement> {
        self.elements.get(idx)
    }

    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// Total number of nodes over all elements.
    pub fn node_count(&self) -> usize {
        self.elements.iter().map(RadialElement::node_count).sum()
    }

    /// All nodes in radial order.
    pub fn nodes(&self) -> impl Iterator<Item = &RadialNode> {
        self.elements.iter().flat_map(|e| e.nodes().iter())
    }

    /// Feedback handles on all nodes in radial order.
    ///
    /// Elements and nodes cannot be replaced or reordered after
    /// construction; only material state and power are writable.
    pub fn nodes_mut(&mut self) -> impl Iterator<Item = NodeMut<'_>> {
        self.elements.iter_mut().flat_map(|e| e.nodes_mut())
    }

    /// Feedback handle on node `node` of element `element`.
    pub fn node_mut(&mut self, element: usize, node: usize) -> Option<NodeMut<'_>> {
        self.elements.get_mut(element)?.node_mut(node)
    }

    /// Inner radius of the innermost node.
    pub fn inner_radius(&self) -> f64 {
        self.elements[0].inner_radius()
    }

    /// Outer radius of the outermost node.
    pub fn outer_radius(&self) -> f64 {
        self.elements[self.elements.len() - 1].outer_radius()
    }

    /// Assembly power (W) as of the last [`FuelAssembly::power_update`].
    pub fn power(&self) -> f64 {
        self.power
    }

    /// Update every element's power, then sum them into the assembly total.
    pub fn power_update(&mut self) {
        for element in &mut self.elements {
            element.power_update();
        }
        self.power = self.elements.iter().map(RadialElement::power).sum();
    }

    pub fn clad_inner_temperature(&self) -> f64 {
        self.clad_inner_temperature
    }

    pub fn clad_outer_temperature(&self) -> f64 {
        self.clad_outer_temperature
    }

    /// Record cladding surface temperatures from the thermal-hydraulics solve.
    pub fn set_clad_temperatures(&mut self, inner: f64, outer: f64) -> Result<()> {
        check_temperature(inner)?;
        check_temperature(outer)?;
        self.clad_inner_temperature = inner;
        self.clad_outer_temperature = outer;
        Ok(())
    }
}
