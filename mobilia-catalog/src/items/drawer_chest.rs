use serde::{Deserialize, Serialize};

use crate::error::{ensure_count, CatalogError};
use crate::item::{Furniture, ItemCore};
use crate::storage::Storage;

/// A chest of drawers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrawerChest {
    core: ItemCore,
    storage: Storage,
    drawer_count: u32,
    has_wheels: bool,
}

impl DrawerChest {
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
        drawer_count: u32,
        has_wheels: bool,
    ) -> Result<Self, CatalogError> {
        ensure_count("drawer count", drawer_count)?;
        Ok(Self {
            core: ItemCore::new(name, material, color, base_price)?,
            storage: Storage::new(height, width, depth, compartments)?,
            drawer_count,
            has_wheels,
        })
    }

    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    pub fn drawer_count(&self) -> u32 {
        self.drawer_count
    }

    pub fn has_wheels(&self) -> bool {
        self.has_wheels
    }

    pub fn set_drawer_count(&mut self, drawer_count: u32) -> Result<(), CatalogError> {
        ensure_count("drawer count", drawer_count)?;
        self.drawer_count = drawer_count;
        Ok(())
    }

    pub fn set_has_wheels(&mut self, has_wheels: bool) {
        self.has_wheels = has_wheels;
    }
}

impl Furniture for DrawerChest {
    fn core(&self) -> &ItemCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ItemCore {
        &mut self.core
    }

    /// Base price scaled by volume, 10% more on wheels
    fn price(&self) -> Result<f64, CatalogError> {
        let mut price = self.core.base_price() * self.storage.volume_factor();
        if self.has_wheels {
            price *= 1.1;
        }
        Ok(price)
    }

    fn describe(&self) -> String {
        format!(
            "Drawer chest '{}': material={}, color={}, {}x{}x{}cm, {} drawers, wheels={}, base price ${}",
            self.core.name(),
            self.core.material(),
            self.core.color(),
            self.storage.height(),
            self.storage.width(),
            self.storage.depth(),
            self.drawer_count,
            if self.has_wheels { "yes" } else { "no" },
            self.core.base_price(),
        )
    }
}
