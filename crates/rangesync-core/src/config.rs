//! Construction options for storage vectors.

use serde::{Deserialize, Serialize};

/// Configuration for a [`Vector`](crate::Vector) or
/// [`VectorBuilder`](crate::VectorBuilder).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VectorConfig {
    /// Number of items to reserve space for up front.
    pub initial_capacity: usize,
}

impl VectorConfig {
    /// Reserve room for `capacity` items.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            initial_capacity: capacity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: VectorConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, VectorConfig::default());
    }

    #[test]
    fn test_capacity_from_json() {
        let config: VectorConfig = serde_json::from_str(r#"{"initial_capacity": 64}"#).unwrap();
        assert_eq!(config, VectorConfig::with_capacity(64));
    }
}
