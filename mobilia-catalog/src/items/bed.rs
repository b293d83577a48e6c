use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::item::{Furniture, ItemCore};

/// Bed sizes with their price factors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BedSize {
    Single,
    Double,
    Queen,
    King,
}

impl BedSize {
    pub fn factor(&self) -> f64 {
        match self {
            BedSize::Single => 1.0,
            BedSize::Double => 1.3,
            BedSize::Queen => 1.5,
            BedSize::King => 1.7,
        }
    }
}

impl fmt::Display for BedSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BedSize::Single => write!(f, "single"),
            BedSize::Double => write!(f, "double"),
            BedSize::Queen => write!(f, "queen"),
            BedSize::King => write!(f, "king"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bed {
    core: ItemCore,
    size: BedSize,
    has_mattress: bool,
    has_headboard: bool,
}

impl Bed {
    pub fn new(
        name: impl Into<String>,
        material: impl Into<String>,
        color: impl Into<String>,
        base_price: f64,
        size: BedSize,
        has_mattress: bool,
        has_headboard: bool,
    ) -> Result<Self, CatalogError> {
        Ok(Self {
            core: ItemCore::new(name, material, color, base_price)?,
            size,
            has_mattress,
            has_headboard,
        })
    }

    pub fn size(&self) -> BedSize {
        self.size
    }

    pub fn has_mattress(&self) -> bool {
        self.has_mattress
    }

    pub fn has_headboard(&self) -> bool {
        self.has_headboard
    }

    pub fn set_size(&mut self, size: BedSize) {
        self.size = size;
    }
}

impl Furniture for Bed {
    fn core(&self) -> &ItemCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ItemCore {
        &mut self.core
    }

    /// Base price scaled by bed size, 15% more with a mattress and 10%
    /// more with a headboard.
    fn price(&self) -> Result<f64, CatalogError> {
        let mut price = self.core.base_price() * self.size.factor();
        if self.has_mattress {
            price *= 1.15;
        }
        if self.has_headboard {
            price *= 1.1;
        }
        Ok(price)
    }

    fn describe(&self) -> String {
        format!(
            "Bed '{}': material={}, color={}, size={}, mattress={}, headboard={}, base price ${}",
            self.core.name(),
            self.core.material(),
            self.core.color(),
            self.size,
            if self.has_mattress { "yes" } else { "no" },
            if self.has_headboard { "yes" } else { "no" },
            self.core.base_price(),
        )
    }
}
