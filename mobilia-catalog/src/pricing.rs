use serde::{Deserialize, Serialize};

/// Tunable pricing knobs
///
/// The modular-sofa surcharge is not fixed by the business rules yet, so it
/// stays configurable instead of being baked into the sofa formula.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingConfig {
    #[serde(default = "default_modular_surcharge")]
    pub modular_surcharge: f64,
}

fn default_modular_surcharge() -> f64 {
    1.25
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            modular_surcharge: default_modular_surcharge(),
        }
    }
}

/// Round to 2 decimals to keep factors free of floating noise
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2() {
        assert_eq!(round2(1.002), 1.0);
        assert_eq!(round2(1.305), 1.31);
        assert_eq!(round2(2.0), 2.0);
    }

    #[test]
    fn test_config_defaults_from_empty_json() {
        let config: PricingConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.modular_surcharge, 1.25);
    }

    #[test]
    fn test_config_override() {
        let config: PricingConfig = serde_json::from_str(r#"{"modular_surcharge": 1.4}"#).unwrap();
        assert_eq!(config.modular_surcharge, 1.4);
    }
}
