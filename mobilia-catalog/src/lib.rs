pub mod dining_set;
pub mod error;
pub mod item;
pub mod items;
pub mod pricing;
pub mod seating;
pub mod storage;
pub mod surface;

pub use dining_set::{DiningSet, DiningSetError, DiningSetSummary};
pub use error::CatalogError;
pub use item::{Furniture, ItemCore};
pub use items::{
    Armchair, Bed, BedSize, Cabinet, Chair, ConversionMechanism, Desk, DeskKind, DoorStyle,
    DrawerChest, SleeperMode, Sofa, SofaBed, Table, TableShape,
};
pub use pricing::PricingConfig;
pub use seating::{Seating, Upholstery};
pub use storage::Storage;
pub use surface::Surface;
