//! Property-based tests for ring subdivision and power aggregation.
//!
//! Covers: equal-volume ring areas, equal-thickness steps, nodalization
//! contiguity, and bottom-up power sums.

use fuelrod_core::{
    equal_thickness, equal_volume, nodalize, Composition, Discretizer, FuelConfig, RadialNode,
    RegionConfig,
};
use proptest::prelude::*;
use std::f64::consts::PI;

fn annulus() -> impl Strategy<Value = (f64, f64, usize)> {
    (0.0f64..1.0, 1e-3f64..1.0, 1usize..40)
        .prop_map(|(inner, width, n)| (inner, inner + width, n))
}

fn discretizer() -> impl Strategy<Value = Discretizer> {
    prop_oneof![Just(Discretizer::EqualVolume), Just(Discretizer::EqualThickness)]
}

// ── Subdivision policies ─────────────────────────────────────────────

proptest! {
    /// Every equal-volume ring has area π(r_o² − r_i²)/n.
    #[test]
    fn equal_volume_rings_have_equal_area((inner, outer, n) in annulus()) {
        let mut radii: Vec<f64> = equal_volume(outer, n, inner).unwrap().collect();
        prop_assert_eq!(radii.len(), n);
        prop_assert_eq!(radii[0], inner);
        prop_assert!(radii[n - 1] < outer);

        radii.push(outer);
        let expected = PI * (outer * outer - inner * inner) / n as f64;
        for pair in radii.windows(2) {
            let area = PI * (pair[1] * pair[1] - pair[0] * pair[0]);
            prop_assert!((area - expected).abs() <= 1e-7 * expected,
                "ring area {} differs from {}", area, expected);
        }
    }

    /// Equal-thickness steps are all (r_o − r_i)/n.
    #[test]
    fn equal_thickness_steps_are_constant((inner, outer, n) in annulus()) {
        let radii: Vec<f64> = equal_thickness(outer, n, inner).unwrap().collect();
        prop_assert_eq!(radii.len(), n);
        prop_assert_eq!(radii[0], inner);

        let step = (outer - inner) / n as f64;
        for pair in radii.windows(2) {
            prop_assert!(((pair[1] - pair[0]) - step).abs() < 1e-12);
        }
    }

    /// Radii increase strictly under both policies.
    #[test]
    fn ring_radii_strictly_increase((inner, outer, n) in annulus(), policy in discretizer()) {
        let radii: Vec<f64> = policy.rings(outer, n, inner).unwrap().collect();
        for pair in radii.windows(2) {
            prop_assert!(pair[1] > pair[0]);
        }
    }

    /// Outer radius not above inner radius is always rejected.
    #[test]
    fn inverted_annulus_rejected(
        outer in 0.0f64..1.0,
        extra in 0.0f64..1.0,
        n in 1usize..10,
        policy in discretizer(),
    ) {
        prop_assert!(policy.rings(outer, n, outer + extra).is_err());
    }
}

// ── Nodalization ─────────────────────────────────────────────────────

proptest! {
    /// Nodes share boundaries exactly and span the whole annulus.
    #[test]
    fn nodalize_is_contiguous((inner, outer, n) in annulus(), policy in discretizer()) {
        let nodes = nodalize(outer, n, policy, inner).unwrap();
        prop_assert_eq!(nodes.inner_radii.len(), n);
        prop_assert_eq!(nodes.outer_radii.len(), n);
        prop_assert_eq!(nodes.inner_radii[0], inner);
        prop_assert_eq!(nodes.outer_radii[n - 1], outer);
        for k in 0..n - 1 {
            prop_assert_eq!(nodes.outer_radii[k], nodes.inner_radii[k + 1]);
        }
    }
}

// ── Power aggregation ────────────────────────────────────────────────

proptest! {
    /// Assembly power equals the sum of node powers, and updating twice is stable.
    #[test]
    fn assembly_power_is_node_sum(
        nodes in prop::collection::vec(1usize..6, 1..5),
        powers in prop::collection::vec(0.0f64..1e4, 25),
    ) {
        let mut outer = 0.1;
        let regions = nodes
            .iter()
            .map(|&n| {
                outer += 0.05;
                RegionConfig::new(outer, 10000.0, 900.0, Composition::single("UO2", 100.0), n)
            })
            .collect();
        let config = FuelConfig {
            inner_radius: 0.0,
            discretizer: Discretizer::EqualVolume,
            regions,
        };
        let mut fuel = config.build().unwrap();

        for (mut node, &p) in fuel.nodes_mut().zip(powers.iter()) {
            node.set_power(p);
        }
        let expected: f64 = fuel.nodes().map(RadialNode::power).sum();

        fuel.power_update();
        let first = fuel.power();
        fuel.power_update();

        prop_assert!((first - expected).abs() <= 1e-9 * expected.max(1.0));
        prop_assert_eq!(fuel.power(), first);
        let element_sum: f64 = fuel.elements().iter().map(|e| e.power()).sum();
        prop_assert_eq!(first, element_sum);
    }
}
