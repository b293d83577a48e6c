use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::item::{Furniture, ItemCore};
use crate::pricing::PricingConfig;
use crate::seating::{Seating, Upholstery};

/// A multi-seat sofa
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sofa {
    core: ItemCore,
    seating: Seating,
    has_arms: bool,
    includes_cushions: bool,
    is_modular: bool,
    modular_surcharge: f64,
}

impl Sofa {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<String>,
        material: impl Into<String>,
        color: impl Into<String>,
        base_price: f64,
        seat_capacity: u32,
        has_backrest: bool,
        upholstery: Option<Upholstery>,
        has_arms: bool,
        is_modular: bool,
        includes_cushions: bool,
    ) -> Result<Self, CatalogError> {
        Ok(Self {
            core: ItemCore::new(name, material, color, base_price)?,
            seating: Seating::new(seat_capacity, has_backrest, upholstery)?,
            has_arms,
            includes_cushions,
            is_modular,
            modular_surcharge: PricingConfig::default().modular_surcharge,
        })
    }

    pub fn seating(&self) -> &Seating {
        &self.seating
    }

    pub fn has_arms(&self) -> bool {
        self.has_arms
    }

    pub fn includes_cushions(&self) -> bool {
        self.includes_cushions
    }

    pub fn is_modular(&self) -> bool {
        self.is_modular
    }

    pub fn modular_surcharge(&self) -> f64 {
        self.modular_surcharge
    }

    /// Override the configurable modular surcharge for this sofa
    pub fn set_modular_surcharge(&mut self, surcharge: f64) -> Result<(), CatalogError> {
        if surcharge <= 0.0 {
            return Err(CatalogError::InvalidFactor {
                field: "modular surcharge",
                value: surcharge,
            });
        }
        self.modular_surcharge = surcharge;
        Ok(())
    }

    /// Apply the modular surcharge from a pricing config
    pub fn apply_config(&mut self, config: &PricingConfig) -> Result<(), CatalogError> {
        self.set_modular_surcharge(config.modular_surcharge)
    }
}

impl Furniture for Sofa {
    fn core(&self) -> &ItemCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ItemCore {
        &mut self.core
    }

    /// Base price scaled by comfort, 10% more with arms, 10% more with
    /// cushions, and the configurable modular surcharge when modular.
    fn price(&self) -> Result<f64, CatalogError> {
        let mut price = self.core.base_price() * self.seating.comfort_factor();
        if self.has_arms {
            price *= 1.1;
        }
        if self.includes_cushions {
            price *= 1.1;
        }
        if self.is_modular {
            price *= self.modular_surcharge;
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
            "Sofa '{}': material={}, color={}, seats {}, upholstery={}, arms={}, cushions={}, modular={}, base price ${}",
            self.core.name(),
            self.core.material(),
            self.core.color(),
            self.seating.seat_capacity(),
            upholstery,
            if self.has_arms { "yes" } else { "no" },
            if self.includes_cushions { "yes" } else { "no" },
            if self.is_modular { "yes" } else { "no" },
            self.core.base_price(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn basic_sofa() -> Sofa {
        Sofa::new(
            "Living Room Sofa",
            "fabric",
            "gray",
            500.0,
            3,
            true,
            Some(Upholstery::Fabric),
            true,
            false,
            true,
        )
        .unwrap()
    }

    #[test]
    fn test_price_with_arms_and_cushions() {
        let sofa = basic_sofa();
        let expected = 500.0 * sofa.seating().comfort_factor() * 1.1 * 1.1;
        assert!((sofa.price().unwrap() - expected).abs() < 0.01);
    }

    #[test]
    fn test_modular_pushes_price_past_comfort_baseline() {
        let sofa = Sofa::new(
            "Modular Sofa",
            "fabric",
            "gray",
            500.0,
            3,
            true,
            None,
            false,
            true,
            false,
        )
        .unwrap();
        let baseline = 500.0 * sofa.seating().comfort_factor();
        assert!(sofa.price().unwrap() > baseline * 1.2);
    }

    #[test]
    fn test_modular_surcharge_is_configurable() {
        let mut sofa = Sofa::new(
            "Modular Sofa",
            "fabric",
            "gray",
            100.0,
            3,
            false,
            None,
            false,
            true,
            false,
        )
        .unwrap();
        sofa.set_modular_surcharge(1.5).unwrap();
        assert!((sofa.price().unwrap() - 150.0).abs() < 0.01);

        assert!(sofa.set_modular_surcharge(0.0).is_err());
        assert_eq!(sofa.modular_surcharge(), 1.5);
    }

    #[test]
    fn test_leather_premium() {
        let sofa = Sofa::new(
            "Premium Sofa",
            "leather",
            "black",
            500.0,
            3,
            true,
            Some(Upholstery::Leather),
            true,
            false,
            true,
        )
        .unwrap();
        assert!(sofa.price().unwrap() > 500.0 * 1.3);
    }
}
