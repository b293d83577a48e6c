use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::item::{Furniture, ItemCore};
use crate::seating::{Seating, Upholstery};

/// A single-seat chair
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chair {
    core: ItemCore,
    seating: Seating,
}

impl Chair {
    pub fn new(
        name: impl Into<String>,
        material: impl Into<String>,
        color: impl Into<String>,
        base_price: f64,
        has_backrest: bool,
        upholstery: Option<Upholstery>,
    ) -> Result<Self, CatalogError> {
        Ok(Self {
            core: ItemCore::new(name, material, color, base_price)?,
            seating: Seating::new(1, has_backrest, upholstery)?,
        })
    }

    pub fn seating(&self) -> &Seating {
        &self.seating
    }

    pub fn has_backrest(&self) -> bool {
        self.seating.has_backrest()
    }

    pub fn upholstery(&self) -> Option<Upholstery> {
        self.seating.upholstery()
    }
}

impl Furniture for Chair {
    fn core(&self) -> &ItemCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ItemCore {
        &mut self.core
    }

    /// Base price, 10% more with a backrest. The comfort factor does not
    /// apply to plain chairs.
    fn price(&self) -> Result<f64, CatalogError> {
        let factor = if self.seating.has_backrest() { 1.1 } else { 1.0 };
        Ok(self.core.base_price() * factor)
    }

    fn describe(&self) -> String {
        let upholstery = self
            .seating
            .upholstery()
            .map(|u| u.to_string())
            .unwrap_or_else(|| "none".to_string());
        format!(
            "Chair '{}': material={}, color={}, backrest={}, upholstery={}, base price ${}",
            self.core.name(),
            self.core.material(),
            self.core.color(),
            if self.seating.has_backrest() { "yes" } else { "no" },
            upholstery,
            self.core.base_price(),
        )
    }
}
