use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::item::{Furniture, ItemCore};
use crate::items::bed::BedSize;
use crate::pricing::round2;
use crate::seating::{Seating, Upholstery};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConversionMechanism {
    Folding,
    Hydraulic,
    Electric,
}

impl ConversionMechanism {
    pub fn factor(&self) -> f64 {
        match self {
            ConversionMechanism::Folding => 1.0,
            ConversionMechanism::Hydraulic => 1.2,
            ConversionMechanism::Electric => 1.3,
        }
    }
}

impl fmt::Display for ConversionMechanism {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversionMechanism::Folding => write!(f, "folding"),
            ConversionMechanism::Hydraulic => write!(f, "hydraulic"),
            ConversionMechanism::Electric => write!(f, "electric"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SleeperMode {
    Sofa,
    Bed,
}

impl fmt::Display for SleeperMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SleeperMode::Sofa => write!(f, "sofa"),
            SleeperMode::Bed => write!(f, "bed"),
        }
    }
}

/// A convertible sofa-bed
///
/// Carries both seating attributes and bed attributes, but prices only from
/// the bed side: bed size, conversion mechanism and mattress. The comfort
/// factor and arm/cushion surcharges are intentionally left out of the
/// formula — legacy behavior pinned by the acceptance tests and flagged for
/// product-owner review.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SofaBed {
    core: ItemCore,
    seating: Seating,
    bed_size: BedSize,
    has_mattress: bool,
    mechanism: ConversionMechanism,
    mode: SleeperMode,
}

impl SofaBed {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<String>,
        material: impl Into<String>,
        color: impl Into<String>,
        base_price: f64,
        seat_capacity: u32,
        upholstery: Option<Upholstery>,
        bed_size: BedSize,
        has_mattress: bool,
        mechanism: ConversionMechanism,
    ) -> Result<Self, CatalogError> {
        Ok(Self {
            core: ItemCore::new(name, material, color, base_price)?,
            seating: Seating::new(seat_capacity, true, upholstery)?,
            bed_size,
            has_mattress,
            mechanism,
            mode: SleeperMode::Sofa,
        })
    }

    pub fn seating(&self) -> &Seating {
        &self.seating
    }

    pub fn bed_size(&self) -> BedSize {
        self.bed_size
    }

    pub fn has_mattress(&self) -> bool {
        self.has_mattress
    }

    pub fn mechanism(&self) -> ConversionMechanism {
        self.mechanism
    }

    pub fn mode(&self) -> SleeperMode {
        self.mode
    }

    /// Convert to bed mode. Returns false when already converted.
    pub fn convert_to_bed(&mut self) -> bool {
        if self.mode == SleeperMode::Bed {
            return false;
        }
        self.mode = SleeperMode::Bed;
        true
    }

    /// Convert to sofa mode. Returns false when already converted.
    pub fn convert_to_sofa(&mut self) -> bool {
        if self.mode == SleeperMode::Sofa {
            return false;
        }
        self.mode = SleeperMode::Sofa;
        true
    }

    /// Flip between sofa and bed mode, returning the new mode
    pub fn toggle_mode(&mut self) -> SleeperMode {
        self.mode = match self.mode {
            SleeperMode::Sofa => SleeperMode::Bed,
            SleeperMode::Bed => SleeperMode::Sofa,
        };
        self.mode
    }

    /// How many people fit in sofa mode
    pub fn seat_capacity(&self) -> u32 {
        self.seating.seat_capacity()
    }

    /// How many people fit in bed mode
    pub fn sleeping_capacity(&self) -> u32 {
        match self.bed_size {
            BedSize::Single => 1,
            _ => 2,
        }
    }
}

impl Furniture for SofaBed {
    fn core(&self) -> &ItemCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ItemCore {
        &mut self.core
    }

    fn price(&self) -> Result<f64, CatalogError> {
        let mattress_factor = if self.has_mattress { 1.15 } else { 1.0 };
        let price =
            self.core.base_price() * self.bed_size.factor() * self.mechanism.factor() * mattress_factor;
        Ok(round2(price))
    }

    fn describe(&self) -> String {
        let upholstery = self
            .seating
            .upholstery()
            .map(|u| u.to_string())
            .unwrap_or_else(|| "none".to_string());
        format!(
            "Sofa-bed '{}': material={}, color={}, seats {}, upholstery={}, bed size={}, mattress={}, mechanism={}, mode={}, base price ${}",
            self.core.name(),
            self.core.material(),
            self.core.color(),
            self.seating.seat_capacity(),
            upholstery,
            self.bed_size,
            if self.has_mattress { "yes" } else { "no" },
            self.mechanism,
            self.mode,
            self.core.base_price(),
        )
    }
}
