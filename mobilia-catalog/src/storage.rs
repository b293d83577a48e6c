use serde::{Deserialize, Serialize};

use crate::error::{ensure_count, ensure_positive, CatalogError};

/// Storage-body dimensions and compartment layout, in centimeters
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Storage {
    height: f64,
    width: f64,
    depth: f64,
    compartments: u32,
}

impl Storage {
    pub fn new(height: f64, width: f64, depth: f64, compartments: u32) -> Result<Self, CatalogError> {
        ensure_positive("height", height)?;
        ensure_positive("width", width)?;
        ensure_positive("depth", depth)?;
        ensure_count("compartments", compartments)?;
        Ok(Self {
            height,
            width,
            depth,
            compartments,
        })
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn depth(&self) -> f64 {
        self.depth
    }

    pub fn compartments(&self) -> u32 {
        self.compartments
    }

    pub fn set_height(&mut self, height: f64) -> Result<(), CatalogError> {
        ensure_positive("height", height)?;
        self.height = height;
        Ok(())
    }

    pub fn set_width(&mut self, width: f64) -> Result<(), CatalogError> {
        ensure_positive("width", width)?;
        self.width = width;
        Ok(())
    }

    pub fn set_depth(&mut self, depth: f64) -> Result<(), CatalogError> {
        ensure_positive("depth", depth)?;
        self.depth = depth;
        Ok(())
    }

    pub fn set_compartments(&mut self, compartments: u32) -> Result<(), CatalogError> {
        ensure_count("compartments", compartments)?;
        self.compartments = compartments;
        Ok(())
    }

    /// Interior volume in cm³
    pub fn volume(&self) -> f64 {
        self.height * self.width * self.depth
    }

    /// Price factor by volume: 1.0 plus 0.1 per 100000 cm³
    pub fn volume_factor(&self) -> f64 {
        1.0 + (self.volume() / 100_000.0) * 0.1
    }

    /// Volume factor scaled by compartment count, 5% per extra compartment
    pub fn storage_factor(&self) -> f64 {
        let compartment_factor = 1.0 + (self.compartments - 1) as f64 * 0.05;
        self.volume_factor() * compartment_factor
    }
}
