pub mod armchair;
pub mod bed;
pub mod cabinet;
pub mod chair;
pub mod desk;
pub mod drawer_chest;
pub mod sofa;
pub mod sofa_bed;
pub mod table;

pub use armchair::Armchair;
pub use bed::{Bed, BedSize};
pub use cabinet::{Cabinet, DoorStyle};
pub use chair::Chair;
pub use desk::{Desk, DeskKind};
pub use drawer_chest::DrawerChest;
pub use sofa::Sofa;
pub use sofa_bed::{ConversionMechanism, SleeperMode, SofaBed};
pub use table::{Table, TableShape};
