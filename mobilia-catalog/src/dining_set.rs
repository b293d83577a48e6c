use std::collections::BTreeSet;

use serde::Serialize;
use thiserror::Error;

use crate::error::CatalogError;
use crate::item::Furniture;
use crate::items::{Chair, Table};

/// Operational failures on a dining set. These are expected business
/// conditions, not validation errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DiningSetError {
    #[error("cannot add chair: the table seats {capacity} and all seats are taken")]
    CapacityExceeded { capacity: u32 },

    #[error("no chairs to remove")]
    EmptySet,

    #[error("chair index {index} is out of range, the set has {len} chairs")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Aggregate view over a dining set
#[derive(Debug, Clone, Serialize)]
pub struct DiningSetSummary {
    pub total_items: usize,
    pub seating_capacity: u32,
    pub materials: BTreeSet<String>,
}

/// A table with its matching chairs
///
/// The chair list is bounded by the table's seat capacity. Membership is
/// restricted to `Chair` by the type system, so there is no runtime type
/// check to fail.
#[derive(Debug, Clone, Serialize)]
pub struct DiningSet {
    name: String,
    table: Table,
    chairs: Vec<Chair>,
}

impl DiningSet {
    pub fn new(
        name: impl Into<String>,
        table: Table,
        chairs: Vec<Chair>,
    ) -> Result<Self, DiningSetError> {
        if chairs.len() as u32 > table.seat_capacity() {
            return Err(DiningSetError::CapacityExceeded {
                capacity: table.seat_capacity(),
            });
        }
        Ok(Self {
            name: name.into(),
            table,
            chairs,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn chairs(&self) -> &[Chair] {
        &self.chairs
    }

    /// Total owned items, table included
    pub fn len(&self) -> usize {
        1 + self.chairs.len()
    }

    pub fn is_empty(&self) -> bool {
        false // always owns at least the table
    }

    /// Append a chair, as long as the table still has a free seat
    pub fn add_chair(&mut self, chair: Chair) -> Result<(), DiningSetError> {
        let capacity = self.table.seat_capacity();
        if self.chairs.len() as u32 >= capacity {
            return Err(DiningSetError::CapacityExceeded { capacity });
        }
        self.chairs.push(chair);
        Ok(())
    }

    /// Remove and return a chair: the last one when no index is given
    pub fn remove_chair(&mut self, index: Option<usize>) -> Result<Chair, DiningSetError> {
        if self.chairs.is_empty() {
            return Err(DiningSetError::EmptySet);
        }
        match index {
            None => self.chairs.pop().ok_or(DiningSetError::EmptySet),
            Some(index) if index >= self.chairs.len() => Err(DiningSetError::IndexOutOfRange {
                index,
                len: self.chairs.len(),
            }),
            Some(index) => Ok(self.chairs.remove(index)),
        }
    }

    /// Table price plus the price of every chair
    pub fn total_price(&self) -> Result<f64, CatalogError> {
        let mut total = self.table.price()?;
        for chair in &self.chairs {
            total += chair.price()?;
        }
        Ok(total)
    }

    /// Item count, seating capacity (one seat per owned chair) and the
    /// distinct materials across the whole set
    pub fn summary(&self) -> DiningSetSummary {
        let mut materials = BTreeSet::new();
        materials.insert(self.table.material().to_string());
        for chair in &self.chairs {
            materials.insert(chair.material().to_string());
        }
        DiningSetSummary {
            total_items: self.len(),
            seating_capacity: self.chairs.len() as u32,
            materials,
        }
    }
}
