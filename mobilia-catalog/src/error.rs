use thiserror::Error;

/// Validation and pricing errors for catalog entities
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    #[error("name must not be empty")]
    EmptyName,

    #[error("base price must be greater than 0, got {0}")]
    InvalidBasePrice(f64),

    #[error("{field} must be greater than 0, got {value}")]
    InvalidDimension { field: &'static str, value: f64 },

    #[error("{field} must be at least 1, got {value}")]
    InvalidCount { field: &'static str, value: u32 },

    #[error("{field} must be greater than 0, got {value}")]
    InvalidFactor { field: &'static str, value: f64 },

    #[error("pricing failed for '{name}': {reason}")]
    PricingFailed { name: String, reason: String },
}

pub(crate) fn ensure_positive(field: &'static str, value: f64) -> Result<(), CatalogError> {
    if value <= 0.0 {
        return Err(CatalogError::InvalidDimension { field, value });
    }
    Ok(())
}

pub(crate) fn ensure_count(field: &'static str, value: u32) -> Result<(), CatalogError> {
    if value < 1 {
        return Err(CatalogError::InvalidCount { field, value });
    }
    Ok(())
}
