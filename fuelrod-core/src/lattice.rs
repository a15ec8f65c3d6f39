//! Lattice maps keyed by (x, y) rod position.

use crate::cladding::HollowRod;
use crate::fuel::FuelAssembly;
use crate::rod::FuelRod;
use crate::types::InsertType;
use std::collections::btree_map::{self, BTreeMap};

/// Anything that can occupy a lattice position.
pub trait Insert {
    fn insert_type(&self) -> InsertType;
}

impl Insert for FuelAssembly {
    fn insert_type(&self) -> InsertType {
        FuelAssembly::insert_type(self)
    }
}

impl Insert for FuelRod {
    fn insert_type(&self) -> InsertType {
        FuelRod::insert_type(self)
    }
}

impl Insert for HollowRod {
    fn insert_type(&self) -> InsertType {
        HollowRod::insert_type(self)
    }
}

impl<T: Insert + ?Sized> Insert for Box<T> {
    fn insert_type(&self) -> InsertType {
        (**self).insert_type()
    }
}

/// Column/row coordinate of a lattice cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LatticePosition {
    pub x: u32,
    pub y: u32,
}

impl LatticePosition {
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

impl From<(u32, u32)> for LatticePosition {
    fn from((x, y): (u32, u32)) -> Self {
        Self { x, y }
    }
}

/// Items placed on a rectangular lattice, iterated in (x, y) order.
#[derive(Debug, Clone, PartialEq)]
pub struct RodLattice<T> {
    cells: BTreeMap<LatticePosition, T>,
}

impl<T> RodLattice<T> {
    pub fn new() -> Self {
        Self {
            cells: BTreeMap::new(),
        }
    }

    /// Place an item, returning whatever occupied the position before.
    pub fn insert(&mut self, position: impl Into<LatticePosition>, item: T) -> Option<T> {
        self.cells.insert(position.into(), item)
    }

    pub fn remove(&mut self, position: impl Into<LatticePosition>) -> Option<T> {
        self.cells.remove(&position.into())
    }

    pub fn get(&self, position: impl Into<LatticePosition>) -> Option<&T> {
        self.cells.get(&position.into())
    }

    pub fn get_mut(&mut self, position: impl Into<LatticePosition>) -> Option<&mut T> {
        self.cells.get_mut(&position.into())
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, LatticePosition, T> {
        self.cells.iter()
    }

    pub fn iter_mut(&mut self) -> btree_map::IterMut<'_, LatticePosition, T> {
        self.cells.iter_mut()
    }
}

impl<T: Insert> RodLattice<T> {
    /// Positions holding inserts of the given kind.
    pub fn positions_of(&self, kind: InsertType) -> Vec<LatticePosition> {
        self.cells
            .iter()
            .filter(|(_, item)| item.insert_type() == kind)
            .map(|(pos, _)| *pos)
            .collect()
    }
}

impl<T> Default for RodLattice<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Into<LatticePosition>, T> FromIterator<(P, T)> for RodLattice<T> {
    fn from_iter<I: IntoIterator<Item = (P, T)>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().map(|(p, t)| (p.into(), t)).collect(),
        }
    }
}
