use serde::{Deserialize, Serialize};

use crate::error::{ensure_positive, CatalogError};
use crate::pricing::round2;

/// Work-surface dimensions shared by tables and desks, in centimeters
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Surface {
    length: f64,
    width: f64,
    height: f64,
}

impl Surface {
    pub fn new(length: f64, width: f64, height: f64) -> Result<Self, CatalogError> {
        ensure_positive("length", length)?;
        ensure_positive("width", width)?;
        ensure_positive("height", height)?;
        Ok(Self {
            length,
            width,
            height,
        })
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn set_length(&mut self, length: f64) -> Result<(), CatalogError> {
        ensure_positive("length", length)?;
        self.length = length;
        Ok(())
    }

    pub fn set_width(&mut self, width: f64) -> Result<(), CatalogError> {
        ensure_positive("width", width)?;
        self.width = width;
        Ok(())
    }

    pub fn set_height(&mut self, height: f64) -> Result<(), CatalogError> {
        ensure_positive("height", height)?;
        self.height = height;
        Ok(())
    }

    /// Top area in cm²
    pub fn area(&self) -> f64 {
        self.length * self.width
    }

    /// Price factor by surface size: 1.0 plus 0.1 per 5000 cm².
    ///
    /// Rounded to 2 decimals, so degenerate small areas collapse to exactly
    /// 1.0. Never drops below 1.0.
    pub fn size_factor(&self) -> f64 {
        let factor = 1.0 + (self.area() / 5000.0) * 0.1;
        round2(factor).max(1.0)
    }
}
