use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::CatalogError;

/// Identity and base attributes shared by every furniture item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemCore {
    pub id: Uuid,
    name: String,
    material: String,
    color: String,
    base_price: f64,
}

impl ItemCore {
    pub fn new(
        name: impl Into<String>,
        material: impl Into<String>,
        color: impl Into<String>,
        base_price: f64,
    ) -> Result<Self, CatalogError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CatalogError::EmptyName);
        }
        if base_price <= 0.0 {
            return Err(CatalogError::InvalidBasePrice(base_price));
        }
        Ok(Self {
            id: Uuid::new_v4(),
            name,
            material: material.into(),
            color: color.into(),
            base_price,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn material(&self) -> &str {
        &self.material
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn base_price(&self) -> f64 {
        self.base_price
    }

    /// Rename the item. Rejects empty names and keeps the previous one.
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), CatalogError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CatalogError::EmptyName);
        }
        self.name = name;
        Ok(())
    }

    /// Reprice the item. The base price must stay strictly positive.
    pub fn set_base_price(&mut self, base_price: f64) -> Result<(), CatalogError> {
        if base_price <= 0.0 {
            return Err(CatalogError::InvalidBasePrice(base_price));
        }
        self.base_price = base_price;
        Ok(())
    }

    pub fn set_material(&mut self, material: impl Into<String>) {
        self.material = material.into();
    }

    pub fn set_color(&mut self, color: impl Into<String>) {
        self.color = color.into();
    }
}

/// Contract every catalog item fulfils: a final price and a description.
///
/// Pricing must be a pure function of the item's current attributes, so two
/// consecutive calls on an unmutated item return the same value.
pub trait Furniture {
    fn core(&self) -> &ItemCore;

    fn core_mut(&mut self) -> &mut ItemCore;

    /// Final price after all category factors and surcharges
    fn price(&self) -> Result<f64, CatalogError>;

    /// Human-readable multi-field summary
    fn describe(&self) -> String;

    fn name(&self) -> &str {
        self.core().name()
    }

    fn material(&self) -> &str {
        self.core().material()
    }

    fn color(&self) -> &str {
        self.core().color()
    }

    fn base_price(&self) -> f64 {
        self.core().base_price()
    }
}
