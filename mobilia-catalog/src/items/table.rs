use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ensure_count, CatalogError};
use crate::item::{Furniture, ItemCore};
use crate::surface::Surface;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TableShape {
    Rectangular,
    Round,
    Square,
    Oval,
}

impl fmt::Display for TableShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableShape::Rectangular => write!(f, "rectangular"),
            TableShape::Round => write!(f, "round"),
            TableShape::Square => write!(f, "square"),
            TableShape::Oval => write!(f, "oval"),
        }
    }
}

/// A dining or work table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Table {
    core: ItemCore,
    surface: Surface,
    shape: TableShape,
    seat_capacity: u32,
}

impl Table {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<String>,
        material: impl Into<String>,
        color: impl Into<String>,
        base_price: f64,
        shape: TableShape,
        length: f64,
        width: f64,
        height: f64,
        seat_capacity: u32,
    ) -> Result<Self, CatalogError> {
        ensure_count("seat capacity", seat_capacity)?;
        Ok(Self {
            core: ItemCore::new(name, material, color, base_price)?,
            surface: Surface::new(length, width, height)?,
            shape,
            seat_capacity,
        })
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn shape(&self) -> TableShape {
        self.shape
    }

    pub fn seat_capacity(&self) -> u32 {
        self.seat_capacity
    }

    pub fn set_shape(&mut self, shape: TableShape) {
        self.shape = shape;
    }

    pub fn set_seat_capacity(&mut self, seat_capacity: u32) -> Result<(), CatalogError> {
        ensure_count("seat capacity", seat_capacity)?;
        self.seat_capacity = seat_capacity;
        Ok(())
    }
}

impl Furniture for Table {
    fn core(&self) -> &ItemCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ItemCore {
        &mut self.core
    }

    /// Base price scaled by surface size, plus flat surcharges: $100 for
    /// seating more than 4 and $50 for any non-rectangular shape.
    fn price(&self) -> Result<f64, CatalogError> {
        let mut price = self.core.base_price() * self.surface.size_factor();
        if self.seat_capacity > 4 {
            price += 100.0;
        }
        if self.shape != TableShape::Rectangular {
            price += 50.0;
        }
        Ok(price)
    }

    fn describe(&self) -> String {
        format!(
            "Table '{}': material={}, color={}, shape={}, {}x{}x{}cm, seats {}, base price ${}",
            self.core.name(),
            self.core.material(),
            self.core.color(),
            self.shape,
            self.surface.length(),
            self.surface.width(),
            self.surface.height(),
            self.seat_capacity,
            self.core.base_price(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn basic_table() -> Table {
        Table::new(
            "Family Table",
            "oak",
            "brown",
            300.0,
            TableShape::Rectangular,
            150.0,
            90.0,
            75.0,
            6,
        )
        .unwrap()
    }

    #[test]
    fn test_price_with_capacity_surcharge() {
        let table = basic_table();
        let expected = 300.0 * table.surface().size_factor() + 100.0;
        assert!((table.price().unwrap() - expected).abs() < 0.01);
    }

    #[test]
    fn test_shape_surcharges() {
        let cases = [
            (TableShape::Rectangular, 0.0),
            (TableShape::Round, 50.0),
            (TableShape::Square, 50.0),
            (TableShape::Oval, 50.0),
        ];
        for (shape, extra) in cases {
            let table = Table::new(
                "Shape Test",
                "oak",
                "brown",
                100.0,
                shape,
                100.0,
                100.0,
                75.0,
                4,
            )
            .unwrap();
            let expected = 100.0 * table.surface().size_factor() + extra;
            assert!((table.price().unwrap() - expected).abs() < 0.01);
        }
    }

    #[test]
    fn test_rejects_zero_capacity() {
        let result = Table::new(
            "Bad",
            "oak",
            "brown",
            300.0,
            TableShape::Rectangular,
            100.0,
            80.0,
            75.0,
            0,
        );
        assert!(matches!(result, Err(CatalogError::InvalidCount { .. })));
    }

    #[test]
    fn test_price_is_idempotent() {
        let table = basic_table();
        assert_eq!(table.price().unwrap(), table.price().unwrap());
    }

    #[test]
    fn test_describe_mentions_key_fields() {
        let table = basic_table();
        let description = table.describe();
        assert!(description.contains("Family Table"));
        assert!(description.contains("oak"));
        assert!(description.contains("rectangular"));
    }
}
