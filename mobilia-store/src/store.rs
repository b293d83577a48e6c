use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

use mobilia_catalog::Furniture;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum StoreError {
    #[error("no item named '{0}' in inventory")]
    ItemNotFound(String),
}

/// One completed sale
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SaleRecord {
    pub item_id: Uuid,
    pub name: String,
    pub price: f64,
    pub sold_at: DateTime<Utc>,
}

/// Aggregate view over inventory and lifetime sales
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoreStatistics {
    pub inventory_count: usize,
    pub inventory_value: f64,
    pub items_sold: u64,
    pub sales_value: f64,
}

/// In-memory furniture store: an inventory of catalog items plus running
/// sales counters. Counters only move forward, and only on a completed sale.
#[derive(Default)]
pub struct FurnitureStore {
    inventory: Vec<Box<dyn Furniture>>,
    items_sold: u64,
    sales_value: f64,
    sales: Vec<SaleRecord>,
}

impl FurnitureStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn inventory(&self) -> &[Box<dyn Furniture>] {
        &self.inventory
    }

    pub fn sales(&self) -> &[SaleRecord] {
        &self.sales
    }

    pub fn items_sold(&self) -> u64 {
        self.items_sold
    }

    pub fn sales_value(&self) -> f64 {
        self.sales_value
    }

    /// Put an item up for sale
    pub fn add_item(&mut self, item: Box<dyn Furniture>) {
        tracing::info!("added '{}' to inventory", item.name());
        self.inventory.push(item);
    }

    pub fn find_by_name(&self, name: &str) -> Option<&dyn Furniture> {
        self.inventory
            .iter()
            .find(|item| item.name() == name)
            .map(|item| item.as_ref())
    }

    /// Sell the first item matching `name`, removing it from inventory.
    ///
    /// An item whose pricing fails is still sold, contributing 0 to the
    /// sales value.
    pub fn sell_item(&mut self, name: &str) -> Result<SaleRecord, StoreError> {
        let position = self
            .inventory
            .iter()
            .position(|item| item.name() == name)
            .ok_or_else(|| StoreError::ItemNotFound(name.to_string()))?;

        let item = self.inventory.remove(position);
        let price = match item.price() {
            Ok(price) => price,
            Err(e) => {
                tracing::warn!("pricing failed for sold item '{}': {}", item.name(), e);
                0.0
            }
        };

        let record = SaleRecord {
            item_id: item.core().id,
            name: item.name().to_string(),
            price,
            sold_at: Utc::now(),
        };
        self.items_sold += 1;
        self.sales_value += price;
        self.sales.push(record.clone());
        tracing::info!("sold '{}' for ${:.2}", record.name, record.price);

        Ok(record)
    }

    /// Inventory and sales aggregates. A pricing failure on any single item
    /// contributes 0 to the inventory value instead of aborting.
    pub fn statistics(&self) -> StoreStatistics {
        let inventory_value = self
            .inventory
            .iter()
            .map(|item| match item.price() {
                Ok(price) => price,
                Err(e) => {
                    tracing::warn!("skipping unpriceable item '{}': {}", item.name(), e);
                    0.0
                }
            })
            .sum();

        StoreStatistics {
            inventory_count: self.inventory.len(),
            inventory_value,
            items_sold: self.items_sold,
            sales_value: self.sales_value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mobilia_catalog::{CatalogError, Chair, ItemCore, Table, TableShape};

    /// Item whose pricing always fails, for aggregation-resilience tests
    struct BrokenItem {
        core: ItemCore,
    }

    impl BrokenItem {
        fn new(name: &str) -> Self {
            Self {
                core: ItemCore::new(name, "unknown", "unknown", 1.0).unwrap(),
            }
        }
    }

    impl Furniture for BrokenItem {
        fn core(&self) -> &ItemCore {
            &self.core
        }

        fn core_mut(&mut self) -> &mut ItemCore {
            &mut self.core
        }

        fn price(&self) -> Result<f64, CatalogError> {
            Err(CatalogError::PricingFailed {
                name: self.core.name().to_string(),
                reason: "price source offline".to_string(),
            })
        }

        fn describe(&self) -> String {
            format!("Broken item '{}'", self.core.name())
        }
    }

    fn chair(name: &str) -> Box<dyn Furniture> {
        Box::new(Chair::new(name, "wood", "brown", 100.0, true, None).unwrap())
    }

    fn table(name: &str) -> Box<dyn Furniture> {
        Box::new(
            Table::new(
                name,
                "oak",
                "brown",
                150.0,
                TableShape::Rectangular,
                120.0,
                80.0,
                75.0,
                4,
            )
            .unwrap(),
        )
    }

    #[test]
    fn test_add_and_find() {
        let mut store = FurnitureStore::new();
        store.add_item(table("Showroom Table"));

        assert!(store.find_by_name("Showroom Table").is_some());
        assert!(store.find_by_name("Missing").is_none());
    }

    #[test]
    fn test_sell_removes_one_item_and_updates_counters() {
        let mut store = FurnitureStore::new();
        store.add_item(chair("Twin Chair"));
        store.add_item(chair("Twin Chair"));

        let record = store.sell_item("Twin Chair").unwrap();
        assert!((record.price - 110.0).abs() < 0.01);
        assert_eq!(store.inventory().len(), 1);
        assert_eq!(store.items_sold(), 1);
        assert!((store.sales_value() - 110.0).abs() < 0.01);
        assert_eq!(store.sales().len(), 1);
    }

    #[test]
    fn test_sell_missing_item_changes_nothing() {
        let mut store = FurnitureStore::new();
        store.add_item(chair("Only Chair"));

        assert_eq!(
            store.sell_item("Ghost"),
            Err(StoreError::ItemNotFound("Ghost".to_string()))
        );
        assert_eq!(store.inventory().len(), 1);
        assert_eq!(store.items_sold(), 0);
        assert_eq!(store.sales_value(), 0.0);
    }

    #[test]
    fn test_statistics_tolerate_broken_pricing() {
        let mut store = FurnitureStore::new();
        store.add_item(Box::new(BrokenItem::new("Cursed Shelf")));
        store.add_item(chair("Good Chair"));

        let stats = store.statistics();
        assert_eq!(stats.inventory_count, 2);
        // the broken item contributes 0
        assert!((stats.inventory_value - 110.0).abs() < 0.01);
    }

    #[test]
    fn test_selling_broken_item_counts_zero_value() {
        let mut store = FurnitureStore::new();
        store.add_item(Box::new(BrokenItem::new("Cursed Shelf")));

        let record = store.sell_item("Cursed Shelf").unwrap();
        assert_eq!(record.price, 0.0);
        assert_eq!(store.items_sold(), 1);
        assert_eq!(store.sales_value(), 0.0);
    }

    #[test]
    fn test_statistics_serialize() {
        let store = FurnitureStore::new();
        let stats = store.statistics();
        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["inventory_count"], 0);
        assert_eq!(json["items_sold"], 0);
    }
}
