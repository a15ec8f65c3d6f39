//! Radial subdivision of cylinders into concentric rings.
//!
//! Neutronics codes usually split a pellet into equal-volume rings to resolve
//! the radial power density, while thermal codes prefer equal-thickness rings.
//! This module provides both policies plus the helpers that turn a ring
//! sequence into per-node radius pairs.
//!
//! # Usage
//!
//! ```
//! use fuelrod_core::layering::{nodalize, Discretizer};
//!
//! let nodes = nodalize(0.34, 4, Discretizer::EqualThickness, 0.15).unwrap();
//! assert_eq!(nodes.inner_radii[0], 0.15);
//! assert_eq!(nodes.outer_radii[3], 0.34);
//! ```

use crate::error::{Error, Result};
use crate::types::CONTIGUITY_TOLERANCE;
use serde::{Deserialize, Serialize};
use std::iter::FusedIterator;

/// Ring subdivision policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Discretizer {
    /// Every ring has the same cross-sectional area.
    #[default]
    EqualVolume,
    /// Every ring has the same radial width.
    EqualThickness,
}

impl Discretizer {
    /// Inner radii of `rings` concentric rings spanning `[inner_radius, outer_radius]`.
    pub fn rings(self, outer_radius: f64, rings: usize, inner_radius: f64) -> Result<RingRadii> {
        match self {
            Discretizer::EqualVolume => equal_volume(outer_radius, rings, inner_radius),
            Discretizer::EqualThickness => equal_thickness(outer_radius, rings, inner_radius),
        }
    }
}

/// Lazy sequence of ring inner radii, in increasing order.
///
/// The first value is the inner radius of the whole annulus. The sequence can
/// be consumed once; call the discretizer again to regenerate it.
#[derive(Debug)]
pub struct RingRadii {
    policy: Discretizer,
    interval_constant: f64,
    inner_radius: f64,
    next_radius: f64,
    index: usize,
    rings: usize,
}

impl RingRadii {
    /// Policy that produced this sequence.
    pub fn policy(&self) -> Discretizer {
        self.policy
    }

    /// Constant step between rings: area/π for equal volume, width for equal thickness.
    pub fn interval_constant(&self) -> f64 {
        self.interval_constant
    }
}

impl Iterator for RingRadii {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.index == self.rings {
            return None;
        }
        let radius = self.next_radius;
        self.index += 1;
        self.next_radius = match self.policy {
            Discretizer::EqualVolume => (self.interval_constant + radius * radius).sqrt(),
            // Direct form so rounding does not accumulate over the rings
            Discretizer::EqualThickness => {
                self.inner_radius + self.index as f64 * self.interval_constant
            }
        };
        Some(radius)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.rings - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for RingRadii {}

impl FusedIterator for RingRadii {}

pub(crate) fn check_radii(inner_radius: f64, outer_radius: f64) -> Result<()> {
    if !outer_radius.is_finite() || !inner_radius.is_finite() {
        return Err(Error::InvalidGeometry(format!(
            "radii must be finite, got inner {} and outer {}",
            inner_radius, outer_radius
        )));
    }
    if inner_radius < 0.0 {
        return Err(Error::InvalidGeometry(format!(
            "inner radius must be non-negative, got {}",
            inner_radius
        )));
    }
    if outer_radius <= inner_radius {
        return Err(Error::InvalidGeometry(format!(
            "outer radius {} must exceed inner radius {}",
            outer_radius, inner_radius
        )));
    }
    Ok(())
}

fn check_annulus(outer_radius: f64, rings: usize, inner_radius: f64) -> Result<()> {
    if rings == 0 {
        return Err(Error::InvalidGeometry(
            "ring count must be at least 1".into(),
        ));
    }
    check_radii(inner_radius, outer_radius)?;
    let mean_width = (outer_radius - inner_radius) / rings as f64;
    if mean_width < CONTIGUITY_TOLERANCE {
        return Err(Error::InvalidGeometry(format!(
            "{} rings over [{}, {}] are thinner than {} m",
            rings, inner_radius, outer_radius, CONTIGUITY_TOLERANCE
        )));
    }
    Ok(())
}

/// Divide an annulus into `rings` concentric rings of equal cross-sectional area.
///
/// With `c = (r_o² − r_i²) / n`, the inner radii follow `r_0 = r_i` and
/// `r_{k+1} = √(c + r_k²)`, so every ring has area `π c`.
///
/// # Errors
///
/// [`Error::InvalidGeometry`] if `rings` is zero, a radius is negative or not
/// finite, `outer_radius <= inner_radius`, or the mean ring width
/// `(r_o − r_i) / n` is below [`CONTIGUITY_TOLERANCE`].
pub fn equal_volume(outer_radius: f64, rings: usize, inner_radius: f64) -> Result<RingRadii> {
    check_annulus(outer_radius, rings, inner_radius)?;
    Ok(RingRadii {
        policy: Discretizer::EqualVolume,
        interval_constant: (outer_radius.powi(2) - inner_radius.powi(2)) / rings as f64,
        inner_radius,
        next_radius: inner_radius,
        index: 0,
        rings,
    })
}

/// Divide an annulus into `rings` concentric rings of equal radial thickness.
///
/// With `c = (r_o − r_i) / n`, the inner radii are `r_k = r_i + k c`.
///
/// # Errors
///
/// Same conditions as [`equal_volume`].
pub fn equal_thickness(outer_radius: f64, rings: usize, inner_radius: f64) -> Result<RingRadii> {
    check_annulus(outer_radius, rings, inner_radius)?;
    Ok(RingRadii {
        policy: Discretizer::EqualThickness,
        interval_constant: (outer_radius - inner_radius) / rings as f64,
        inner_radius,
        next_radius: inner_radius,
        index: 0,
        rings,
    })
}

/// Inner and outer radii of every node of a discretized annulus.
///
/// Index `k` of both vectors describes node `k`; `outer_radii[k] ==
/// inner_radii[k + 1]` holds exactly.
#[derive(Debug, Clone, PartialEq)]
pub struct Nodalization {
    pub inner_radii: Vec<f64>,
    pub outer_radii: Vec<f64>,
}

impl Nodalization {
    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.inner_radii.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner_radii.is_empty()
    }

    /// (inner, outer) radius pairs, innermost first.
    pub fn pairs(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.inner_radii
            .iter()
            .copied()
            .zip(self.outer_radii.iter().copied())
    }
}

/// Split a cylinder into `nodes` concentric nodes following `discretizer`.
///
/// The outer radii are the inner radii shifted by one position with
/// `outer_radius` appended, so nodes share boundaries with no gap or overlap.
pub fn nodalize(
    outer_radius: f64,
    nodes: usize,
    discretizer: Discretizer,
    inner_radius: f64,
) -> Result<Nodalization> {
    let inner_radii: Vec<f64> = discretizer.rings(outer_radius, nodes, inner_radius)?.collect();

    let mut outer_radii = Vec::with_capacity(inner_radii.len());
    outer_radii.extend_from_slice(&inner_radii[1..]);
    outer_radii.push(outer_radius);

    tracing::debug!(
        ?discretizer,
        nodes,
        inner_radius,
        outer_radius,
        "nodalized annulus"
    );

    Ok(Nodalization {
        inner_radii,
        outer_radii,
    })
}

/// Volume-weighted mean radius of an annulus.
///
/// `(2/3) (r_o² + r_o r_i + r_i²) / (r_o + r_i)`. For a solid cylinder this is
/// two thirds of the outer radius.
///
/// Meant for `outer_radius > inner_radius >= 0`. A zero-radius disc, where the
/// formula is 0/0, yields 0.0, its limit as the disc shrinks.
pub fn volume_averaged(outer_radius: f64, inner_radius: f64) -> f64 {
    let sum = outer_radius + inner_radius;
    if sum == 0.0 {
        return 0.0;
    }
    (2.0 / 3.0)
        * ((outer_radius.powi(2) + outer_radius * inner_radius + inner_radius.powi(2))
            / sum)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_equal_volume_three_rings() {
        let radii: Vec<f64> = equal_volume(0.4096, 3, 0.15).unwrap().collect();
        assert_eq!(radii.len(), 3);

        let c = (0.4096_f64.powi(2) - 0.15_f64.powi(2)) / 3.0;
        assert_relative_eq!(radii[0], 0.15);
        assert_relative_eq!(radii[1], (c + 0.15_f64.powi(2)).sqrt(), epsilon = 1e-12);
        assert_relative_eq!(radii[1], 0.2663, epsilon = 1e-4);
        assert_relative_eq!(radii[2], 0.3455, epsilon = 1e-4);
    }

    #[test]
    fn test_equal_volume_rings_have_equal_area() {
        let outer = 0.4096;
        let mut radii: Vec<f64> = equal_volume(outer, 5, 0.0).unwrap().collect();
        radii.push(outer);

        let expected = PI * outer * outer / 5.0;
        for pair in radii.windows(2) {
            let area = PI * (pair[1].powi(2) - pair[0].powi(2));
            assert_relative_eq!(area, expected, max_relative = 1e-10);
        }
    }

    #[test]
    fn test_equal_thickness_four_rings() {
        let radii: Vec<f64> = equal_thickness(0.34, 4, 0.15).unwrap().collect();
        let expected = [0.15, 0.1975, 0.245, 0.2925];
        for (r, e) in radii.iter().zip(expected.iter()) {
            assert_relative_eq!(*r, *e, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_default_inner_radius_is_axis() {
        let radii: Vec<f64> = equal_thickness(1.0, 2, 0.0).unwrap().collect();
        assert_eq!(radii, vec![0.0, 0.5]);
    }

    #[test]
    fn test_ring_radii_is_exact_size_and_fused() {
        let mut rings = equal_volume(1.0, 2, 0.0).unwrap();
        assert_eq!(rings.len(), 2);
        assert_eq!(rings.policy(), Discretizer::EqualVolume);
        assert_relative_eq!(rings.interval_constant(), 0.5);

        assert!(rings.next().is_some());
        assert_eq!(rings.len(), 1);
        assert!(rings.next().is_some());
        assert!(rings.next().is_none());
        assert!(rings.next().is_none());
    }

    #[test]
    fn test_invalid_annulus_rejected() {
        assert!(matches!(
            equal_volume(0.1, 3, 0.2),
            Err(Error::InvalidGeometry(_))
        ));
        assert!(matches!(
            equal_thickness(0.2, 3, 0.2),
            Err(Error::InvalidGeometry(_))
        ));
        assert!(equal_volume(0.2, 0, 0.0).is_err());
        assert!(equal_thickness(0.2, 2, -0.1).is_err());
        assert!(equal_volume(f64::INFINITY, 2, 0.0).is_err());
        assert!(equal_volume(0.2, 2, f64::NAN).is_err());
    }

    #[test]
    fn test_nodalize_contiguity() {
        let nodes = nodalize(0.4096, 3, Discretizer::EqualVolume, 0.15).unwrap();
        assert_eq!(nodes.len(), 3);
        assert_eq!(nodes.inner_radii[0], 0.15);
        assert_eq!(nodes.outer_radii[2], 0.4096);
        for k in 0..2 {
            assert_eq!(nodes.outer_radii[k], nodes.inner_radii[k + 1]);
        }
        assert_relative_eq!(nodes.outer_radii[0], 0.2663, epsilon = 1e-4);
        assert_relative_eq!(nodes.outer_radii[1], 0.3455, epsilon = 1e-4);
    }

    #[test]
    fn test_nodalize_single_node() {
        let nodes = nodalize(0.4096, 1, Discretizer::EqualVolume, 0.15).unwrap();
        let pairs: Vec<(f64, f64)> = nodes.pairs().collect();
        assert_eq!(pairs, vec![(0.15, 0.4096)]);
    }

    #[test]
    fn test_nodalize_propagates_errors() {
        let result = nodalize(0.1, 0, Discretizer::EqualThickness, 0.0);
        assert!(matches!(result, Err(Error::InvalidGeometry(_))));
    }

    #[test]
    fn test_volume_averaged_solid_cylinder() {
        assert_relative_eq!(volume_averaged(3.0, 0.0), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_volume_averaged_thin_shell() {
        // A thin shell's centroid approaches its mid-radius
        let r = volume_averaged(1.001, 1.0);
        assert_relative_eq!(r, 1.0005, epsilon = 1e-6);
        assert!(r > 1.0 && r < 1.001);
    }

    #[test]
    fn test_volume_averaged_degenerate_disc() {
        let r = volume_averaged(0.0, 0.0);
        assert!(!r.is_nan());
        assert_eq!(r, 0.0);
    }

    #[test]
    fn test_equal_thickness_narrow_annulus() {
        // Width of a few nanometres at a 1 m radius, far below one step of
        // accumulated rounding per ring
        let inner = 1.0;
        let outer = 1.0 + 4e-9;
        let radii: Vec<f64> = equal_thickness(outer, 40, inner).unwrap().collect();
        assert_eq!(radii.len(), 40);
        for (k, r) in radii.iter().enumerate() {
            assert_eq!(*r, inner + k as f64 * ((outer - inner) / 40.0));
        }
        for pair in radii.windows(2) {
            assert!(pair[1] > pair[0]);
        }

        let nodes = nodalize(outer, 40, Discretizer::EqualThickness, inner).unwrap();
        assert!(nodes.pairs().all(|(ri, ro)| ro > ri));
    }

    #[test]
    fn test_rings_below_tolerance_rejected() {
        let inner = 0.4096;
        let outer = inner + 8.0 * f64::EPSILON;
        for policy in [Discretizer::EqualVolume, Discretizer::EqualThickness] {
            assert!(matches!(
                policy.rings(outer, 4, inner),
                Err(Error::InvalidGeometry(_))
            ));
        }
        assert!(equal_thickness(inner + 1e-9, 10_000, inner).is_err());
        assert!(equal_thickness(inner + 1e-9, 100, inner).is_ok());
    }

    #[test]
    fn test_discretizer_serde_names() {
        let json = serde_json::to_string(&Discretizer::EqualThickness).unwrap();
        assert_eq!(json, "\"equal_thickness\"");
        let parsed: Discretizer = serde_json::from_str("\"equal_volume\"").unwrap();
        assert_eq!(parsed, Discretizer::EqualVolume);
    }
}
