//! Radial elements: contiguous groups of nodes sharing a fresh composition.
//!
//! A plain UO2 pellet, or one with gadolinia mixed in, is a single element.
//! A pellet with a thin absorber coating (e.g. ZrB2) has two: fuel and
//! coating. A duplex pellet adds one more per distinct radial composition.
//! Nodes of a fresh element share a composition; burnup makes them diverge.

use crate::error::{Error, Result};
use crate::layering::Nodalization;
use crate::node::{NodeMut, RadialNode};
use crate::types::{Composition, CONTIGUITY_TOLERANCE};

/// Ordered sequence of radial nodes, innermost first.
#[derive(Debug, Clone, PartialEq)]
pub struct RadialElement {
    nodes: Vec<RadialNode>,
    /// Sum of node powers as of the last [`RadialElement::power_update`].
    power: f64,
}

/// Check that each item in a sequence starts where the previous one ends.
pub(crate) fn check_contiguous<I>(boundaries: I, what: &str) -> Result<()>
where
    I: IntoIterator<Item = (f64, f64)>,
{
    let mut previous_outer: Option<f64> = None;
    for (idx, (inner, outer)) in boundaries.into_iter().enumerate() {
        if let Some(prev) = previous_outer {
            if (inner - prev).abs() > CONTIGUITY_TOLERANCE {
                return Err(Error::InvalidGeometry(format!(
                    "{} {} starts at {} but previous one ends at {}",
                    what, idx, inner, prev
                )));
            }
        }
        previous_outer = Some(outer);
    }
    Ok(())
}

impl RadialElement {
    /// Build an element from parallel per-node sequences.
    ///
    /// Entry `k` of every slice describes node `k`. All slices must have the
    /// same, non-zero length.
    ///
    /// # Errors
    ///
    /// - [`Error::MismatchedLength`] if the slices differ in length
    /// - [`Error::EmptyAggregate`] if they are empty
    /// - any node validation error, or [`Error::InvalidGeometry`] if
    ///   consecutive nodes do not share a boundary
    pub fn new(
        inner_radii: &[f64],
        outer_radii: &[f64],
        densities: &[f64],
        temperatures: &[f64],
        compositions: &[Composition],
    ) -> Result<Self> {
        let n = inner_radii.len();
        for (what, len) in [
            ("outer radii", outer_radii.len()),
            ("densities", densities.len()),
            ("temperatures", temperatures.len()),
            ("compositions", compositions.len()),
        ] {
            if len != n {
                return Err(Error::mismatched(what, n, len));
            }
        }

        let nodes = (0..n)
            .map(|k| {
                RadialNode::new(
                    inner_radii[k],
                    outer_radii[k],
                    densities[k],
                    temperatures[k],
                    compositions[k].clone(),
                )
            })
            .collect::<Result<Vec<_>>>()?;

        Self::from_nodes(nodes)
    }

    /// Build an element with one material state broadcast to every node.
    pub fn uniform(
        nodalization: &Nodalization,
        density: f64,
        temperature: f64,
        composition: &Composition,
    ) -> Result<Self> {
        let nodes = nodalization
            .pairs()
            .map(|(inner, outer)| {
                RadialNode::new(inner, outer, density, temperature, composition.clone())
            })
            .collect::<Result<Vec<_>>>()?;

        Self::from_nodes(nodes)
    }

    /// Wrap already-built nodes, checking they are non-empty and contiguous.
    pub fn from_nodes(nodes: Vec<RadialNode>) -> Result<Self> {
        if nodes.is_empty() {
            return Err(Error::EmptyAggregate(
                "radial element needs at least one node".into(),
            ));
        }
        check_contiguous(
            nodes.iter().map(|n| (n.inner_radius(), n.outer_radius())),
            "node",
        )?;
        Ok(Self { nodes, power: 0.0 })
    }

    /// Nodes, innermost first.
    pub fn nodes(&self) -> &[RadialNode] {
        &self.nodes
    }

    /// Feedback handles on every node, innermost first.
    ///
    /// Handles write material state and power only; nodes cannot be replaced
    /// or reordered, so the element stays contiguous.
    pub fn nodes_mut(&mut self) -> impl Iterator<Item = NodeMut<'_>> {
        self.nodes.iter_mut().map(NodeMut::new)
    }

    pub fn node(&self, idx: usize) -> Option<&RadialNode> {
        self.nodes.get(idx)
    }

    pub fn node_mut(&mut self, idx: usize) -> Option<NodeMut<'_>> {
        self.nodes.get_mut(idx).map(NodeMut::new)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Inner radius of the innermost node.
    pub fn inner_radius(&self) -> f64 {
        self.nodes[0].inner_radius()
    }

    /// Outer radius of the outermost node.
    pub fn outer_radius(&self) -> f64 {
        self.nodes[self.nodes.len() - 1].outer_radius()
    }

    /// Element power (W) as of the last [`RadialElement::power_update`].
    ///
    /// Reads 0.0 until the first update and does not follow later changes to
    /// node power on its own.
    pub fn power(&self) -> f64 {
        self.power
    }

    /// Recompute element power as the sum of node powers.
    pub fn power_update(&mut self) {
        self.power = self.nodes.iter().map(RadialNode::power).sum();
    }
}
