use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::item::{Furniture, ItemCore};
use crate::surface::Surface;

/// Desk variants. The kind itself carries no surcharge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeskKind {
    Student,
    Executive,
    Corner,
}

impl fmt::Display for DeskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeskKind::Student => write!(f, "student"),
            DeskKind::Executive => write!(f, "executive"),
            DeskKind::Corner => write!(f, "corner"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Desk {
    core: ItemCore,
    surface: Surface,
    kind: DeskKind,
    has_drawer_unit: bool,
    has_keyboard_tray: bool,
}

impl Desk {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<String>,
        material: impl Into<String>,
        color: impl Into<String>,
        base_price: f64,
        length: f64,
        width: f64,
        height: f64,
        kind: DeskKind,
        has_drawer_unit: bool,
        has_keyboard_tray: bool,
    ) -> Result<Self, CatalogError> {
        Ok(Self {
            core: ItemCore::new(name, material, color, base_price)?,
            surface: Surface::new(length, width, height)?,
            kind,
            has_drawer_unit,
            has_keyboard_tray,
        })
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn kind(&self) -> DeskKind {
        self.kind
    }

    pub fn has_drawer_unit(&self) -> bool {
        self.has_drawer_unit
    }

    pub fn has_keyboard_tray(&self) -> bool {
        self.has_keyboard_tray
    }

    pub fn set_kind(&mut self, kind: DeskKind) {
        self.kind = kind;
    }
}

impl Furniture for Desk {
    fn core(&self) -> &ItemCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ItemCore {
        &mut self.core
    }

    /// Base price scaled by surface size, 20% more with a built-in drawer
    /// unit and 10% more with a keyboard tray.
    fn price(&self) -> Result<f64, CatalogError> {
        let mut price = self.core.base_price() * self.surface.size_factor();
        if self.has_drawer_unit {
            price *= 1.2;
        }
        if self.has_keyboard_tray {
            price *= 1.1;
        }
        Ok(price)
    }

    fn describe(&self) -> String {
        format!(
            "Desk '{}': material={}, color={}, kind={}, {}x{}x{}cm, drawer unit={}, keyboard tray={}, base price ${}",
            self.core.name(),
            self.core.material(),
            self.core.color(),
            self.kind,
            self.surface.length(),
            self.surface.width(),
            self.surface.height(),
            if self.has_drawer_unit { "yes" } else { "no" },
            if self.has_keyboard_tray { "yes" } else { "no" },
            self.core.base_price(),
        )
    }
}
