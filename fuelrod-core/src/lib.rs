//! Fuel rod radial geometry
//!
//! Radial discretization and material bookkeeping of nuclear fuel rods, for
//! use by downstream neutronics and thermal-hydraulics solvers:
//! - Equal-volume and equal-thickness subdivision of annuli into rings
//! - Node → element → assembly hierarchy with bottom-up power aggregation
//! - Cladding tubes, clad rods and lattice lookups by rod position
//! - JSON configuration and snapshot persistence
//!
//! # Architecture
//!
//! - [`layering`]: ring boundaries for a chosen [`Discretizer`]
//! - [`RadialNode`]: annulus with density, temperature, composition and power
//! - [`RadialElement`]: contiguous nodes sharing a fresh composition
//! - [`FuelAssembly`]: contiguous elements forming a pellet cross-section
//! - [`FuelConfig`]: region-level input that builds a [`FuelAssembly`]
//!
//! Power is pulled, not pushed: after node powers change, call
//! [`FuelAssembly::power_update`] before reading totals.

pub mod types;
pub mod layering;
pub mod node;
pub mod element;
pub mod fuel;
pub mod cladding;
pub mod rod;
pub mod lattice;
pub mod config;
pub mod snapshot;
pub mod error;

pub use types::{Composition, InsertType};
pub use layering::{equal_thickness, equal_volume, nodalize, volume_averaged, Discretizer, Nodalization};
pub use node::{NodeMut, RadialNode};
pub use element::RadialElement;
pub use fuel::FuelAssembly;
pub use cladding::HollowRod;
pub use rod::FuelRod;
pub use lattice::{Insert, LatticePosition, RodLattice};
pub use config::{FuelConfig, RegionConfig, RegionTemperature};
pub use error::{Error, Result};
