use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::item::{Furniture, ItemCore};
use crate::seating::{Seating, Upholstery};

/// A single-seat armchair, optionally reclinable or with a massage function
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Armchair {
    core: ItemCore,
    seating: Seating,
    is_reclinable: bool,
    has_massage: bool,
}

impl Armchair {
    pub fn new(
        name: impl Into<String>,
        material: impl Into<String>,
        color: impl Into<String>,
        base_price: f64,
        has_backrest: bool,
        upholstery: Option<Upholstery>,
        is_reclinable: bool,
        has_massage: bool,
    ) -> Result<Self, CatalogError> {
        Ok(Self {
            core: ItemCore::new(name, material, color, base_price)?,
            seating: Seating::new(1, has_backrest, upholstery)?,
            is_reclinable,
            has_massage,
        })
    }

    pub fn seating(&self) -> &Seating {
        &self.seating
    }

    pub fn is_reclinable(&self) -> bool {
        self.is_reclinable
    }

    pub fn has_massage(&self) -> bool {
        self.has_massage
    }

    pub fn set_reclinable(&mut self, is_reclinable: bool) {
        self.is_reclinable = is_reclinable;
    }

    pub fn set_massage(&mut self, has_massage: bool) {
        self.has_massage = has_massage;
    }
}

impl Furniture for Armchair {
    fn core(&self) -> &ItemCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ItemCore {
        &mut self.core
    }

    /// Base price scaled by comfort, 20% more when reclinable and 30% more
    /// with a massage function.
    fn price(&self) -> Result<f64, CatalogError> {
        let mut price = self.core.base_price() * self.seating.comfort_factor();
        if self.is_reclinable {
            price *= 1.2;
        }
        if self.has_massage {
            price *= 1.3;
        }
        Ok(price)
    }

    fn describe(&self) -> String {
        let upholstery = self
            .seating
            .upholstery()
            .map(|u| u.to_string())
            .unwrap_or_else(|| "none".to_string());
        format!(
            "Armchair '{}': material={}, color={}, upholstery={}, reclinable={}, massage={}, base price ${}",
            self.core.name(),
            self.core.material(),
            self.core.color(),
            upholstery,
            if self.is_reclinable { "yes" } else { "no" },
            if self.has_massage { "yes" } else { "no" },
            self.core.base_price(),
        )
    }
}
