use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ensure_count, CatalogError};
use crate::item::{Furniture, ItemCore};
use crate::storage::Storage;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DoorStyle {
    Hinged,
    Sliding,
}

impl fmt::Display for DoorStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DoorStyle::Hinged => write!(f, "hinged"),
            DoorStyle::Sliding => write!(f, "sliding"),
        }
    }
}

/// A doored storage cabinet
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cabinet {
    core: ItemCore,
    storage: Storage,
    door_count: u32,
    door_style: DoorStyle,
}

impl Cabinet {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<String>,
        material: impl Into<String>,
        color: impl Into<String>,
        base_price: f64,
        height: f64,
        width: f64,
        depth: f64,
        compartments: u32,
        door_count: u32,
        door_style: DoorStyle,
    ) -> Result<Self, CatalogError> {
        ensure_count("door count", door_count)?;
        Ok(Self {
            core: ItemCore::new(name, material, color, base_price)?,
            storage: Storage::new(height, width, depth, compartments)?,
            door_count,
            door_style,
        })
    }

    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    pub fn door_count(&self) -> u32 {
        self.door_count
    }

    pub fn door_style(&self) -> DoorStyle {
        self.door_style
    }

    pub fn set_door_count(&mut self, door_count: u32) -> Result<(), CatalogError> {
        ensure_count("door count", door_count)?;
        self.door_count = door_count;
        Ok(())
    }

    pub fn set_door_style(&mut self, door_style: DoorStyle) {
        self.door_style = door_style;
    }
}

impl Furniture for Cabinet {
    fn core(&self) -> &ItemCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ItemCore {
        &mut self.core
    }

    /// Base price scaled by volume, 15% more for sliding doors
    fn price(&self) -> Result<f64, CatalogError> {
        let mut price = self.core.base_price() * self.storage.volume_factor();
        if self.door_style == DoorStyle::Sliding {
            price *= 1.15;
        }
        Ok(price)
    }

    fn describe(&self) -> String {
        format!(
            "Cabinet '{}': material={}, color={}, {}x{}x{}cm, {} doors ({}), {} compartments, base price ${}",
            self.core.name(),
            self.core.material(),
            self.core.color(),
            self.storage.height(),
            self.storage.width(),
            self.storage.depth(),
            self.door_count,
            self.door_style,
            self.storage.compartments(),
            self.core.base_price(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sliding_door_surcharge() {
        let cabinet = Cabinet::new(
            "Wardrobe",
            "pine",
            "white",
            300.0,
            180.0,
            80.0,
            50.0,
            2,
            2,
            DoorStyle::Sliding,
        )
        .unwrap();
        let expected = 300.0 * cabinet.storage().volume_factor() * 1.15;
        assert!((cabinet.price().unwrap() - expected).abs() < 0.01);
    }

    #[test]
    fn test_hinged_doors_no_surcharge() {
        let cabinet = Cabinet::new(
            "Wardrobe",
            "pine",
            "white",
            300.0,
            180.0,
            80.0,
            50.0,
            2,
            2,
            DoorStyle::Hinged,
        )
        .unwrap();
        let expected = 300.0 * cabinet.storage().volume_factor();
        assert!((cabinet.price().unwrap() - expected).abs() < 0.01);
    }

    #[test]
    fn test_rejects_zero_doors() {
        let result = Cabinet::new(
            "Bad", "pine", "white", 300.0, 180.0, 80.0, 50.0, 2, 0, DoorStyle::Hinged,
        );
        assert!(matches!(
            result,
            Err(CatalogError::InvalidCount {
                field: "door count",
                ..
            })
        ));
    }

    #[test]
    fn test_setter_failure_keeps_state() {
        let mut cabinet = Cabinet::new(
            "Wardrobe",
            "pine",
            "white",
            300.0,
            180.0,
            80.0,
            50.0,
            2,
            2,
            DoorStyle::Hinged,
        )
        .unwrap();
        assert!(cabinet.set_door_count(0).is_err());
        assert_eq!(cabinet.door_count(), 2);
    }
}
