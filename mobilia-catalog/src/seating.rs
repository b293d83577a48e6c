use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ensure_count, CatalogError};
use crate::pricing::round2;

/// Upholstery material for seats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Upholstery {
    Fabric,
    Leather,
}

impl fmt::Display for Upholstery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Upholstery::Fabric => write!(f, "fabric"),
            Upholstery::Leather => write!(f, "leather"),
        }
    }
}

/// Seating attributes shared by chairs, armchairs and sofas
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Seating {
    seat_capacity: u32,
    has_backrest: bool,
    upholstery: Option<Upholstery>,
}

impl Seating {
    pub fn new(
        seat_capacity: u32,
        has_backrest: bool,
        upholstery: Option<Upholstery>,
    ) -> Result<Self, CatalogError> {
        ensure_count("seat capacity", seat_capacity)?;
        Ok(Self {
            seat_capacity,
            has_backrest,
            upholstery,
        })
    }

    pub fn seat_capacity(&self) -> u32 {
        self.seat_capacity
    }

    pub fn has_backrest(&self) -> bool {
        self.has_backrest
    }

    pub fn upholstery(&self) -> Option<Upholstery> {
        self.upholstery
    }

    pub fn set_seat_capacity(&mut self, seat_capacity: u32) -> Result<(), CatalogError> {
        ensure_count("seat capacity", seat_capacity)?;
        self.seat_capacity = seat_capacity;
        Ok(())
    }

    pub fn set_has_backrest(&mut self, has_backrest: bool) {
        self.has_backrest = has_backrest;
    }

    pub fn set_upholstery(&mut self, upholstery: Option<Upholstery>) {
        self.upholstery = upholstery;
    }

    /// Comfort factor: 1.0 base, +0.1 for a backrest, +0.1 fabric / +0.2
    /// leather upholstery. Rounded to 2 decimals.
    pub fn comfort_factor(&self) -> f64 {
        let mut factor = 1.0;
        if self.has_backrest {
            factor += 0.1;
        }
        match self.upholstery {
            Some(Upholstery::Fabric) => factor += 0.1,
            Some(Upholstery::Leather) => factor += 0.2,
            None => {}
        }
        round2(factor)
    }
}
